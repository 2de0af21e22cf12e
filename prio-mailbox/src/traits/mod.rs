//! Defines the core traits that establish the contracts of the mailbox layer.
//!
//! # Key Traits
//!
//! *   [`MailboxMessage`]: Marker trait for every payload carried in an
//!     [`Envelope`](crate::message::Envelope). Ensures messages are `Send`, `Sync`,
//!     `Debug`, cloneable as trait objects, and downcastable via `Any`.
//! *   [`QueueDiscipline`]: A non-thread-safe ordering strategy (priority, FIFO).
//! *   [`MessageQueue`]: The thread-safe queue capability a dispatcher drains.
//! *   [`MessageReceiver`]: The asynchronous consumer a dispatcher delivers to.
//! *   [`ReplySink`]: Anything a [`SenderRef`](crate::message::SenderRef) can reply into.

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
pub use mailbox_message::MailboxMessage;
pub use message_queue::{MessageQueue, QueueDiscipline};
pub use message_receiver::MessageReceiver;
pub use reply_sink::ReplySink;

// --- Submodules ---

/// Defines the [`MailboxMessage`] marker trait.
mod mailbox_message;
/// Defines [`MessageQueue`] and [`QueueDiscipline`].
mod message_queue;
/// Defines the [`MessageReceiver`] trait used by the dispatcher.
mod message_receiver;
/// Defines the [`ReplySink`] trait behind sender references.
mod reply_sink;
