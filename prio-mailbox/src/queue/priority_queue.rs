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

//! Binary-heap discipline ordering envelopes by `(priority, sequence)`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use derive_new::new;
use tracing::{debug, trace};

use crate::common::CONFIG;
use crate::message::Envelope;
use crate::queue::PriorityCalculator;
use crate::traits::QueueDiscipline;

/// A resident heap entry. Priority and sequence are fixed at insertion.
#[derive(new, Debug)]
struct Entry {
    priority: i32,
    sequence: u64,
    envelope: Envelope,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // BinaryHeap pops the greatest element, so the smallest key must compare greatest.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// An unsynchronized priority queue of envelopes.
///
/// Entries come out in ascending priority; entries with equal priority come
/// out in the order they were inserted. Each insertion takes the next value
/// of a `u64` sequence counter as its tie-breaker. Exhausting the counter
/// takes 2^64 insertions into one queue and is treated as unreachable; if it
/// ever happens, [`enqueue`](Self::enqueue) panics instead of wrapping, in
/// every build profile, so equal priorities are never silently reordered.
///
/// The priority of an entry is computed once, when it is inserted. Replacing
/// the calculator with [`set_priority_calculator`](Self::set_priority_calculator)
/// only affects later insertions.
///
/// Not thread-safe on its own; wrap it in [`Locked`](crate::queue::Locked) or
/// use [`UnboundedPriorityMailboxQueue`](crate::queue::UnboundedPriorityMailboxQueue).
#[derive(Debug)]
pub struct PriorityQueue {
    heap: BinaryHeap<Entry>,
    next_sequence: u64,
    calculator: PriorityCalculator,
}

impl PriorityQueue {
    /// Creates a queue with room for `initial_capacity` entries before reallocating.
    ///
    /// Without a calculator every message gets the configured default
    /// priority, so the queue behaves as FIFO until one is installed.
    pub fn new(initial_capacity: usize, calculator: Option<PriorityCalculator>) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(initial_capacity),
            next_sequence: 0,
            calculator: calculator.unwrap_or_default(),
        }
    }

    /// Replaces the calculator used for future insertions.
    pub fn set_priority_calculator(&mut self, calculator: PriorityCalculator) {
        debug!(resident = self.heap.len(), "replacing priority calculator");
        self.calculator = calculator;
    }

    /// Computes the envelope's priority, stamps it with the next sequence number, and inserts it.
    ///
    /// # Panics
    ///
    /// Propagates any panic from the priority calculator. The queue is left
    /// untouched in that case: nothing is inserted and no sequence number is used.
    ///
    /// Also panics, leaving the queue untouched, if the sequence counter is
    /// exhausted.
    pub fn enqueue(&mut self, envelope: Envelope) {
        let priority = self.calculator.priority_of(envelope.message());
        let sequence = self.next_sequence;
        let Some(following) = sequence.checked_add(1) else {
            panic!("priority queue sequence counter exhausted");
        };
        self.next_sequence = following;
        trace!(priority, sequence, "enqueue");
        self.heap.push(Entry::new(priority, sequence, envelope));
    }

    /// Removes the lowest `(priority, sequence)` entry, or returns `None` when empty.
    pub fn dequeue(&mut self) -> Option<Envelope> {
        self.heap.pop().map(|entry| {
            trace!(priority = entry.priority, sequence = entry.sequence, "dequeue");
            entry.envelope
        })
    }

    /// The priority of the entry [`dequeue`](Self::dequeue) would return next.
    pub fn peek_priority(&self) -> Option<i32> {
        self.heap.peek().map(|entry| entry.priority)
    }

    /// Number of resident entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Entries the heap can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }
}

/// An empty queue sized by `limits.initial_capacity` with the default calculator.
impl Default for PriorityQueue {
    fn default() -> Self {
        Self::new(CONFIG.limits.initial_capacity, None)
    }
}

impl QueueDiscipline for PriorityQueue {
    fn insert(&mut self, envelope: Envelope) {
        self.enqueue(envelope);
    }

    fn extract(&mut self) -> Option<Envelope> {
        self.dequeue()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
