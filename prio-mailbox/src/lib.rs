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

#![forbid(unsafe_code)]
#![forbid(missing_docs)]

//! # Prio Mailbox
//!
//! Priority-ordered mailbox queues for actor systems. Producers on any thread
//! enqueue [`Envelope`](crate::message::Envelope)s; a single drain loop polls
//! them back out in a deterministic total order.
//!
//! ## Key Concepts
//!
//! - **Envelopes**: an immutable message plus a weak reference to its sender.
//! - **Priority calculators**: a replaceable policy mapping a message to an
//!   `i32`; lower values dequeue first.
//! - **Disciplines**: non-thread-safe orderings (`PriorityQueue`, `FifoQueue`)
//!   implementing [`QueueDiscipline`](crate::traits::QueueDiscipline).
//! - **Locking**: [`Locked`](crate::queue::Locked) wraps any discipline in one
//!   mutex and exposes the thread-safe
//!   [`MessageQueue`](crate::traits::MessageQueue) capability.
//! - **Mailboxes and dispatchers**: a [`Mailbox`](crate::common::Mailbox) owns
//!   one queue; a [`Dispatcher`](crate::common::Dispatcher) drains it on a tokio
//!   task and hands envelopes to a [`MessageReceiver`](crate::traits::MessageReceiver).
//!
//! Entries with equal priority keep their enqueue order. Under concurrent
//! producers that order is the order in which producers acquired the queue lock.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use prio_mailbox::prelude::*;
//!
//! #[mailbox_message]
//! struct Job {
//!     urgency: i32,
//! }
//!
//! let queue = UnboundedPriorityMailboxQueue::new(
//!     16,
//!     Some(PriorityCalculator::for_message::<Job>(|job| job.urgency, 0)),
//! );
//! queue.enqueue(Envelope::new(Job { urgency: 5 }, SenderRef::none()));
//! queue.enqueue(Envelope::new(Job { urgency: 1 }, SenderRef::none()));
//! let first = queue.try_dequeue();
//! ```

/// Configuration, mailboxes, and the dispatcher drain loop.
pub(crate) mod common;

/// Envelopes, sender references, and errors.
pub(crate) mod message;

/// Queue disciplines, the lock decorator, and the concrete mailbox queues.
pub(crate) mod queue;

/// Core traits: messages, queue capabilities, receivers, and reply sinks.
pub(crate) mod traits;

/// A prelude module for conveniently importing the most commonly used items.
///
/// ## Macros (from `prio-macro`)
/// *   [`prio_macro::mailbox_message`]: Attribute macro for declaring messages.
///
/// ## External Crates
/// *   [`async_trait::async_trait`]: Needed to implement [`MessageReceiver`](crate::traits::MessageReceiver).
///
/// ## Core Types
/// *   [`crate::common::Mailbox`], [`crate::common::Dispatcher`],
///     [`crate::common::DispatcherHandle`], [`crate::common::MailboxConfig`].
/// *   [`crate::message::Envelope`], [`crate::message::SenderRef`],
///     [`crate::message::MailboxError`].
/// *   [`crate::queue::PriorityCalculator`], [`crate::queue::PriorityQueue`],
///     [`crate::queue::FifoQueue`], [`crate::queue::Locked`],
///     [`crate::queue::UnboundedPriorityMailboxQueue`],
///     [`crate::queue::UnboundedMailboxQueue`].
/// *   [`crate::traits::MailboxMessage`], [`crate::traits::MessageQueue`],
///     [`crate::traits::QueueDiscipline`], [`crate::traits::MessageReceiver`],
///     [`crate::traits::ReplySink`].
pub mod prelude {
    pub use prio_macro::*;

    pub use async_trait::async_trait;

    pub use crate::common::{Dispatcher, DispatcherHandle, Mailbox, MailboxConfig, CONFIG};
    pub use crate::message::{Envelope, MailboxError, SenderRef};
    pub use crate::queue::{
        FifoQueue, Locked, PriorityCalculator, PriorityQueue, UnboundedMailboxQueue,
        UnboundedPriorityMailboxQueue,
    };
    pub use crate::traits::{
        MailboxMessage, MessageQueue, MessageReceiver, QueueDiscipline, ReplySink,
    };
}
