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

use static_assertions::assert_impl_all;

use crate::message::SenderRef;
use crate::traits::MailboxMessage;

/// The unit of work stored in a mailbox queue.
///
/// An envelope pairs a message payload with a [`SenderRef`] pointing back at
/// the sender. Both fields are private and there are no setters: once built,
/// an envelope never changes. Cloning is cheap because the payload is shared
/// behind an `Arc`.
///
/// Queues never look inside the payload. Only the priority calculator and the
/// final receiver do.
#[derive(Debug, Clone)]
pub struct Envelope {
    message: Arc<dyn MailboxMessage>,
    sender: SenderRef,
}

impl Envelope {
    /// Wraps `message` together with the sender it came from.
    ///
    /// Use [`SenderRef::none()`] when there is nobody to reply to.
    pub fn new<M: MailboxMessage>(message: M, sender: SenderRef) -> Self {
        Self {
            message: Arc::new(message),
            sender,
        }
    }

    /// Builds an envelope around an already shared payload.
    pub fn from_shared(message: Arc<dyn MailboxMessage>, sender: SenderRef) -> Self {
        Self { message, sender }
    }

    /// The payload as a trait object.
    #[inline]
    pub fn message(&self) -> &dyn MailboxMessage {
        self.message.as_ref()
    }

    /// Downcasts the payload to `M`, returning `None` if it is some other type.
    #[inline]
    pub fn downcast_ref<M: 'static>(&self) -> Option<&M> {
        self.message().as_any().downcast_ref::<M>()
    }

    /// Returns `true` if the payload is of type `M`.
    #[inline]
    pub fn is<M: 'static>(&self) -> bool {
        self.message().as_any().is::<M>()
    }

    /// The reference back to the sender.
    #[inline]
    pub const fn sender(&self) -> &SenderRef {
        &self.sender
    }
}

assert_impl_all!(Envelope: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Greeting(&'static str);

    #[test]
    fn downcast_returns_the_original_payload() {
        let envelope = Envelope::new(Greeting("hello"), SenderRef::none());
        assert!(envelope.is::<Greeting>());
        assert_eq!(envelope.downcast_ref::<Greeting>(), Some(&Greeting("hello")));
        assert!(envelope.downcast_ref::<u32>().is_none());
    }

    #[test]
    fn clones_share_the_payload() {
        let envelope = Envelope::new(Greeting("shared"), SenderRef::none());
        let copy = envelope.clone();
        assert!(std::ptr::eq(
            envelope.downcast_ref::<Greeting>().unwrap(),
            copy.downcast_ref::<Greeting>().unwrap()
        ));
    }

    #[test]
    fn shared_payload_is_not_rewrapped() {
        let payload: Arc<dyn MailboxMessage> = Arc::new(Greeting("arc"));
        let envelope = Envelope::from_shared(payload, SenderRef::none());
        assert_eq!(envelope.downcast_ref::<Greeting>(), Some(&Greeting("arc")));
    }
}
