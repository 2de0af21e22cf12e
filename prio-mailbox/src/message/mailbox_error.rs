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

/// Errors raised around a mailbox queue.
///
/// Enqueue and dequeue are infallible; these cover replying through a
/// [`SenderRef`](crate::message::SenderRef) and stopping a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailboxError {
    /// The envelope was sent without a sender, so there is nobody to reply to.
    NoSender,
    /// The sender's mailbox has been dropped. Carries the sender's name.
    SenderGone(String),
    /// The dispatcher task panicked, was aborted, or missed its shutdown deadline.
    DispatcherFailed(String),
}

impl std::fmt::Display for MailboxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSender => write!(f, "Envelope has no sender to reply to"),
            Self::SenderGone(name) => write!(f, "Sender '{name}' is no longer reachable"),
            Self::DispatcherFailed(reason) => write!(f, "Dispatcher failed: {reason}"),
        }
    }
}

impl std::error::Error for MailboxError {}

/// Converts a failed dispatcher join into a `MailboxError`.
impl From<tokio::task::JoinError> for MailboxError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            Self::DispatcherFailed("receiver panicked".into())
        } else {
            Self::DispatcherFailed("task was cancelled".into())
        }
    }
}
