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

use crate::message::Envelope;

/// A single-threaded ordering strategy for envelopes.
///
/// Disciplines are plain data structures with no internal synchronization.
/// They become shareable by wrapping them in [`Locked`](crate::queue::Locked),
/// which serializes every call behind one mutex.
pub trait QueueDiscipline: Send {
    /// Inserts an envelope. Unbounded disciplines always accept it.
    fn insert(&mut self, envelope: Envelope);

    /// Removes the next envelope in discipline order, or `None` when empty.
    fn extract(&mut self) -> Option<Envelope>;

    /// Number of resident envelopes.
    fn len(&self) -> usize;

    /// Returns `true` when no envelopes are resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The thread-safe queue capability consumed by mailboxes and dispatchers.
///
/// Any number of producers may call [`enqueue`](MessageQueue::enqueue)
/// concurrently. [`try_dequeue`](MessageQueue::try_dequeue) is a non-blocking
/// poll; waiting for new messages is the dispatcher's job.
pub trait MessageQueue: Send + Sync {
    /// Adds an envelope. Never blocks and never fails.
    fn enqueue(&self, envelope: Envelope);

    /// Removes the next envelope, or returns `None` without side effects when empty.
    fn try_dequeue(&self) -> Option<Envelope>;

    /// Number of queued envelopes.
    ///
    /// Advisory only: concurrent producers may change it as soon as it returns.
    fn count(&self) -> usize;

    /// `count() > 0`, with the same staleness caveat.
    fn has_messages(&self) -> bool {
        self.count() > 0
    }

    /// Polls until empty and returns everything that came out, in dequeue order.
    fn drain_all(&self) -> Vec<Envelope> {
        let mut drained = Vec::with_capacity(self.count());
        while let Some(envelope) = self.try_dequeue() {
            drained.push(envelope);
        }
        drained
    }
}
