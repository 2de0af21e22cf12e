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

use tracing::instrument;

use crate::common::CONFIG;
use crate::message::Envelope;
use crate::queue::{Locked, PriorityCalculator, PriorityQueue};
use crate::traits::MessageQueue;

/// The thread-safe, unbounded priority queue owned by a mailbox.
///
/// A [`PriorityQueue`] behind a [`Locked`] mutex. Producers on any thread may
/// [`enqueue`](MessageQueue::enqueue); the dispatcher polls with
/// [`try_dequeue`](MessageQueue::try_dequeue). Entries come out by ascending
/// priority and, within a priority, in the order their producers acquired the
/// lock.
///
/// There is no capacity limit. A producer that floods the mailbox grows its
/// memory without bound; that is the accepted cost of never blocking or
/// rejecting a send.
#[derive(Debug)]
pub struct UnboundedPriorityMailboxQueue {
    queue: Locked<PriorityQueue>,
}

impl UnboundedPriorityMailboxQueue {
    /// Creates a queue pre-sized for `initial_capacity` entries.
    ///
    /// With no calculator every message receives `defaults.priority` from the
    /// configuration until [`set_priority_calculator`](Self::set_priority_calculator)
    /// installs one.
    pub fn new(initial_capacity: usize, calculator: Option<PriorityCalculator>) -> Self {
        Self {
            queue: Locked::new(PriorityQueue::new(initial_capacity, calculator)),
        }
    }

    /// Creates a queue with the configured capacity hint and the given calculator.
    pub fn with_calculator(calculator: PriorityCalculator) -> Self {
        Self::new(CONFIG.limits.initial_capacity, Some(calculator))
    }

    /// Replaces the priority calculator.
    ///
    /// The swap happens under the queue lock. Envelopes already queued keep
    /// the priority computed when they were enqueued; only later enqueues
    /// see the new calculator.
    #[instrument(skip_all)]
    pub fn set_priority_calculator(&self, calculator: PriorityCalculator) {
        self.queue
            .with_discipline(|queue| queue.set_priority_calculator(calculator));
    }

    /// The priority of the envelope the next `try_dequeue` would return.
    pub fn peek_priority(&self) -> Option<i32> {
        self.queue.with_discipline(|queue| queue.peek_priority())
    }
}

/// A queue sized by `limits.initial_capacity` with the default calculator.
impl Default for UnboundedPriorityMailboxQueue {
    fn default() -> Self {
        Self::new(CONFIG.limits.initial_capacity, None)
    }
}

impl MessageQueue for UnboundedPriorityMailboxQueue {
    #[inline]
    fn enqueue(&self, envelope: Envelope) {
        self.queue.enqueue(envelope);
    }

    #[inline]
    fn try_dequeue(&self) -> Option<Envelope> {
        self.queue.try_dequeue()
    }

    #[inline]
    fn count(&self) -> usize {
        self.queue.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::SenderRef;

    #[derive(Debug, Clone)]
    struct Urgent(i32);

    #[test]
    fn fresh_queue_reports_empty() {
        let queue = UnboundedPriorityMailboxQueue::new(8, None);
        assert_eq!(queue.count(), 0);
        assert!(!queue.has_messages());
        assert!(queue.try_dequeue().is_none());
        assert_eq!(queue.peek_priority(), None);
    }

    #[test]
    fn swap_through_the_lock() {
        let queue = UnboundedPriorityMailboxQueue::with_calculator(PriorityCalculator::constant(7));
        queue.enqueue(Envelope::new(Urgent(0), SenderRef::none()));
        queue.set_priority_calculator(PriorityCalculator::for_message::<Urgent>(|u| u.0, 0));
        queue.enqueue(Envelope::new(Urgent(3), SenderRef::none()));

        assert_eq!(queue.peek_priority(), Some(3));
        assert_eq!(queue.try_dequeue().unwrap().downcast_ref::<Urgent>().unwrap().0, 3);
        assert_eq!(queue.peek_priority(), Some(7));
        assert_eq!(queue.try_dequeue().unwrap().downcast_ref::<Urgent>().unwrap().0, 0);
        assert!(queue.try_dequeue().is_none());
    }
}
