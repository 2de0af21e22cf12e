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

//! Benchmarks for the mailbox queues.
//!
//! Measures the hot paths:
//! - Enqueue followed by a full drain, for the priority and FIFO disciplines
//! - Contended enqueue from several producer threads
//!
//! Run with: `cargo bench --package prio-mailbox`

use std::hint::black_box;
use std::thread;

use divan::{AllocProfiler, Bencher};
use prio_mailbox::prelude::*;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

#[mailbox_message]
struct Work {
    urgency: i32,
}

fn calculator() -> PriorityCalculator {
    PriorityCalculator::for_message::<Work>(|work| work.urgency, 0)
}

fn envelopes(count: usize) -> Vec<Envelope> {
    (0..count)
        .map(|n| {
            let urgency = i32::try_from(n % 17).unwrap_or_default();
            Envelope::new(Work { urgency }, SenderRef::none())
        })
        .collect()
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn priority_enqueue_then_drain(bencher: Bencher, count: usize) {
    bencher
        .with_inputs(|| envelopes(count))
        .bench_values(|batch| {
            let queue = UnboundedPriorityMailboxQueue::new(count, Some(calculator()));
            for envelope in batch {
                queue.enqueue(envelope);
            }
            while let Some(envelope) = queue.try_dequeue() {
                black_box(envelope);
            }
        });
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn fifo_enqueue_then_drain(bencher: Bencher, count: usize) {
    bencher
        .with_inputs(|| envelopes(count))
        .bench_values(|batch| {
            let queue: UnboundedMailboxQueue = Locked::new(FifoQueue::with_capacity(count));
            for envelope in batch {
                queue.enqueue(envelope);
            }
            while let Some(envelope) = queue.try_dequeue() {
                black_box(envelope);
            }
        });
}

#[divan::bench(args = [2, 4, 8])]
fn contended_priority_enqueue(bencher: Bencher, producers: usize) {
    const PER_PRODUCER: usize = 1_000;
    bencher.bench(|| {
        let queue = UnboundedPriorityMailboxQueue::new(producers * PER_PRODUCER, Some(calculator()));
        thread::scope(|scope| {
            for _ in 0..producers {
                scope.spawn(|| {
                    for envelope in envelopes(PER_PRODUCER) {
                        queue.enqueue(envelope);
                    }
                });
            }
        });
        black_box(queue.count())
    });
}
