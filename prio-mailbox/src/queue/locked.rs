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

//! The locking decorator that turns any [`QueueDiscipline`] into a [`MessageQueue`].

use parking_lot::Mutex;

use crate::message::Envelope;
use crate::traits::{MessageQueue, QueueDiscipline};

/// Serializes every operation on a discipline behind one mutex.
///
/// The lock is held for exactly one primitive call (`insert`, `extract`, or
/// `len`) and released before the caller does anything with the result, so a
/// dispatcher never delivers a message while holding it. Whatever state the
/// discipline keeps (heap, sequence counter, calculator) is guarded as one unit.
///
/// The mutex is `parking_lot`'s, which does not poison: if code running under
/// the lock panics (a faulty priority calculator, for instance) the guard is
/// released during unwinding and the queue stays usable.
#[derive(Debug, Default)]
pub struct Locked<D> {
    inner: Mutex<D>,
}

impl<D: QueueDiscipline> Locked<D> {
    /// Wraps `discipline`.
    pub fn new(discipline: D) -> Self {
        Self {
            inner: Mutex::new(discipline),
        }
    }

    /// Runs `f` with exclusive access to the discipline.
    ///
    /// `f` runs inside the critical section and must not call back into this queue.
    pub fn with_discipline<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    /// Consumes the wrapper and returns the discipline.
    pub fn into_inner(self) -> D {
        self.inner.into_inner()
    }
}

impl<D: QueueDiscipline> MessageQueue for Locked<D> {
    fn enqueue(&self, envelope: Envelope) {
        self.inner.lock().insert(envelope);
    }

    fn try_dequeue(&self) -> Option<Envelope> {
        self.inner.lock().extract()
    }

    fn count(&self) -> usize {
        self.inner.lock().len()
    }
}
