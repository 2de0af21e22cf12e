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

use std::sync::Arc;

use tokio::sync::Notify;
use tracing::trace;

use crate::common::CONFIG;
use crate::message::{Envelope, SenderRef};
use crate::queue::{PriorityCalculator, UnboundedPriorityMailboxQueue};
use crate::traits::{MessageQueue, ReplySink};

/// A per-actor inbox owning exactly one queue.
///
/// [`post`](Mailbox::post) enqueues and wakes the mailbox's
/// [`Dispatcher`](crate::common::Dispatcher), if one is running. The queue is
/// never shared with another mailbox. Dropping the mailbox drops every
/// envelope still inside it without delivering them.
///
/// Mailboxes are normally shared as `Arc<Mailbox<_>>` so that a dispatcher can
/// drain them and [`SenderRef`]s can point at them weakly.
#[derive(Debug)]
pub struct Mailbox<Q = UnboundedPriorityMailboxQueue> {
    name: String,
    queue: Q,
    notify: Notify,
}

impl<Q: MessageQueue> Mailbox<Q> {
    /// Creates a mailbox named `name` around `queue`.
    pub fn new(name: impl Into<String>, queue: Q) -> Self {
        Self {
            name: name.into(),
            queue,
            notify: Notify::new(),
        }
    }

    /// The mailbox name, used in logs and in [`SenderRef`]s.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying queue.
    #[inline]
    pub const fn queue(&self) -> &Q {
        &self.queue
    }

    /// Enqueues `envelope` and wakes the dispatcher.
    pub fn post(&self, envelope: Envelope) {
        trace!(mailbox = %self.name, from = %envelope.sender().name(), "post");
        self.queue.enqueue(envelope);
        self.notify.notify_one();
    }

    /// Queued envelope count. Advisory under concurrent producers.
    #[inline]
    pub fn count(&self) -> usize {
        self.queue.count()
    }

    /// Returns `true` if the queue is non-empty at the time of the call.
    #[inline]
    pub fn has_messages(&self) -> bool {
        self.queue.has_messages()
    }

    /// Resolves after the next [`post`](Mailbox::post), or immediately if a post
    /// happened since the last wake-up.
    pub(crate) async fn notified(&self) {
        self.notify.notified().await;
    }
}

impl<Q: MessageQueue + 'static> Mailbox<Q> {
    /// A weak, lookup-only reference to this mailbox for stamping outgoing envelopes.
    pub fn sender_ref(self: &Arc<Self>) -> SenderRef {
        SenderRef::new(self.name.clone(), self)
    }
}

impl Mailbox<UnboundedPriorityMailboxQueue> {
    /// Creates a mailbox backed by an [`UnboundedPriorityMailboxQueue`].
    pub fn priority(
        name: impl Into<String>,
        initial_capacity: usize,
        calculator: Option<PriorityCalculator>,
    ) -> Self {
        Self::new(
            name,
            UnboundedPriorityMailboxQueue::new(initial_capacity, calculator),
        )
    }
}

/// A priority mailbox named `defaults.mailbox_name` with configured defaults.
impl Default for Mailbox<UnboundedPriorityMailboxQueue> {
    fn default() -> Self {
        Self::new(
            CONFIG.defaults.mailbox_name.clone(),
            UnboundedPriorityMailboxQueue::default(),
        )
    }
}

impl<Q: MessageQueue> ReplySink for Mailbox<Q> {
    fn tell(&self, envelope: Envelope) {
        self.post(envelope);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::{FifoQueue, Locked};
    use crate::traits::MailboxMessage;

    #[derive(Debug, Clone)]
    struct Level(i32);

    #[test]
    fn post_enqueues_into_the_owned_queue() {
        let mailbox = Mailbox::priority(
            "inbox",
            4,
            Some(PriorityCalculator::for_message::<Level>(|l| l.0, 0)),
        );
        mailbox.post(Envelope::new(Level(9), SenderRef::none()));
        mailbox.post(Envelope::new(Level(2), SenderRef::none()));

        assert_eq!(mailbox.count(), 2);
        assert!(mailbox.has_messages());
        let first = mailbox.queue().try_dequeue().unwrap();
        assert_eq!(first.downcast_ref::<Level>().unwrap().0, 2);
    }

    #[test]
    fn replies_flow_back_through_sender_refs() {
        let requester = Arc::new(Mailbox::new("requester", Locked::new(FifoQueue::with_capacity(1))));
        let responder = Mailbox::priority("responder", 1, None);

        responder.post(Envelope::new(Level(1), requester.sender_ref()));
        let request = responder.queue().try_dequeue().unwrap();
        assert_eq!(request.sender().name(), "requester");
        request.sender().reply("pong", SenderRef::none()).unwrap();

        let reply = requester.queue().try_dequeue().unwrap();
        assert_eq!(reply.downcast_ref::<&str>(), Some(&"pong"));
    }

    #[test]
    fn dropping_the_mailbox_discards_queued_envelopes() {
        let mailbox = Arc::new(Mailbox::priority("doomed", 1, None));
        let sender = mailbox.sender_ref();
        let payload: Arc<dyn MailboxMessage> = Arc::new(Level(1));
        mailbox.post(Envelope::from_shared(Arc::clone(&payload), SenderRef::none()));
        assert_eq!(Arc::strong_count(&payload), 2);

        drop(mailbox);
        assert!(!sender.is_alive());
        assert_eq!(Arc::strong_count(&payload), 1);
    }
}
