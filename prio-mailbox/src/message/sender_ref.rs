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

use std::sync::{Arc, Weak};

use tracing::trace;

use crate::message::{Envelope, MailboxError};
use crate::traits::{MailboxMessage, ReplySink};

/// A lookup-only reference back to the sender of an [`Envelope`].
///
/// Holds the sender's name and a [`Weak`] pointer to its [`ReplySink`]. A
/// queued envelope therefore never keeps its sender alive: if the sender's
/// mailbox is dropped while the envelope waits in a queue, replies fail with
/// [`MailboxError::SenderGone`] instead.
///
/// [`SenderRef::none()`] represents "no sender" (for example, messages sent
/// from outside any actor).
#[derive(Clone, Default)]
pub struct SenderRef {
    name: String,
    sink: Option<Weak<dyn ReplySink>>,
}

impl SenderRef {
    /// Creates a reference to `sink` without taking ownership of it.
    pub fn new<S: ReplySink + 'static>(name: impl Into<String>, sink: &Arc<S>) -> Self {
        let sink = Arc::downgrade(sink);
        let sink: Weak<dyn ReplySink> = sink;
        Self {
            name: name.into(),
            sink: Some(sink),
        }
    }

    /// The "no sender" reference.
    pub fn none() -> Self {
        Self::default()
    }

    /// The sender's name, empty for [`SenderRef::none()`].
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this reference was created without a sender.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.sink.is_none()
    }

    /// Returns `true` if the sender still exists.
    pub fn is_alive(&self) -> bool {
        self.sink
            .as_ref()
            .is_some_and(|sink| sink.strong_count() > 0)
    }

    /// Temporarily upgrades to the sender's sink, if it still exists.
    pub fn upgrade(&self) -> Option<Arc<dyn ReplySink>> {
        self.sink.as_ref().and_then(Weak::upgrade)
    }

    /// Sends `message` back to this sender, stamped with `from` as its own sender.
    ///
    /// # Errors
    ///
    /// * [`MailboxError::NoSender`] for [`SenderRef::none()`].
    /// * [`MailboxError::SenderGone`] if the sender has been dropped.
    pub fn reply<M: MailboxMessage>(&self, message: M, from: SenderRef) -> Result<(), MailboxError> {
        if self.is_none() {
            return Err(MailboxError::NoSender);
        }
        let sink = self
            .upgrade()
            .ok_or_else(|| MailboxError::SenderGone(self.name.clone()))?;
        trace!(to = %self.name, from = %from.name, "replying");
        sink.tell(Envelope::new(message, from));
        Ok(())
    }
}

impl std::fmt::Debug for SenderRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            return f.write_str("SenderRef(none)");
        }
        f.debug_struct("SenderRef")
            .field("name", &self.name)
            .field("alive", &self.is_alive())
            .finish()
    }
}
