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

use std::collections::VecDeque;

use crate::common::CONFIG;
use crate::message::Envelope;
use crate::traits::QueueDiscipline;

/// An unsynchronized first-in, first-out discipline.
#[derive(Debug)]
pub struct FifoQueue {
    entries: VecDeque<Envelope>,
}

impl FifoQueue {
    /// Creates an empty queue with room for `initial_capacity` envelopes.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(initial_capacity),
        }
    }
}

impl Default for FifoQueue {
    fn default() -> Self {
        Self::with_capacity(CONFIG.limits.initial_capacity)
    }
}

impl QueueDiscipline for FifoQueue {
    fn insert(&mut self, envelope: Envelope) {
        self.entries.push_back(envelope);
    }

    fn extract(&mut self) -> Option<Envelope> {
        self.entries.pop_front()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
