//! Defines the envelope that travels through mailbox queues and its supporting types.
//!
//! # Key Components
//!
//! *   [`Envelope`]: The immutable unit of work: a shared message payload plus
//!     a [`SenderRef`] back to whoever sent it.
//! *   [`SenderRef`]: A lookup-only reference to the sender's mailbox, used by
//!     receivers to reply. It never extends the sender's lifetime.
//! *   [`MailboxError`]: Errors from the fallible edges around the queue
//!     (replying, dispatcher shutdown). Queue operations themselves never fail.

/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

// --- Public Re-exports ---
pub use envelope::Envelope;
pub use mailbox_error::MailboxError;
pub use sender_ref::SenderRef;

// --- Submodules ---

/// Defines [`Envelope`].
mod envelope;
/// Defines [`MailboxError`].
mod mailbox_error;
/// Defines [`SenderRef`].
mod sender_ref;
