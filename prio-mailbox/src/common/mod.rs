//! Runtime pieces built around the queues: configuration, mailboxes, and the dispatcher.
//!
//! # Key Re-exported Components:
//!
//! *   [`MailboxConfig`] and the global [`CONFIG`]: settings loaded from the XDG
//!     config directory.
//! *   [`Mailbox`]: per-actor inbox owning one queue and a wake-up signal.
//! *   [`Dispatcher`] / [`DispatcherHandle`]: the tokio drain loop that delivers
//!     envelopes to a [`MessageReceiver`](crate::traits::MessageReceiver).

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
pub use config::{MailboxConfig, CONFIG};
pub use dispatcher::{Dispatcher, DispatcherHandle};
pub use mailbox::Mailbox;

// --- Submodules ---

/// Defines the configuration system.
pub mod config;
/// Defines the [`Dispatcher`] drain loop.
mod dispatcher;
/// Defines [`Mailbox`].
mod mailbox;
