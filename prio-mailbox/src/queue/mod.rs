//! Queue disciplines, the lock decorator, and the concrete mailbox queues.
//!
//! A *discipline* ([`PriorityQueue`], [`FifoQueue`]) decides ordering and is
//! not thread-safe. [`Locked`] adds the single per-mailbox mutex around any
//! discipline. [`UnboundedPriorityMailboxQueue`] and [`UnboundedMailboxQueue`]
//! are the compositions mailboxes actually own.

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
pub use fifo_queue::FifoQueue;
pub use locked::Locked;
pub use priority_calculator::PriorityCalculator;
pub use priority_queue::PriorityQueue;
pub use unbounded_priority::UnboundedPriorityMailboxQueue;

/// An unbounded, thread-safe FIFO mailbox queue.
pub type UnboundedMailboxQueue = Locked<FifoQueue>;

// --- Submodules ---

/// Defines [`FifoQueue`].
mod fifo_queue;
/// Defines the [`Locked`] decorator.
mod locked;
/// Defines [`PriorityCalculator`].
mod priority_calculator;
/// Defines the heap-backed [`PriorityQueue`].
mod priority_queue;
/// Defines [`UnboundedPriorityMailboxQueue`].
mod unbounded_priority;
