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

use prio_mailbox::prelude::*;

/// A unit of work carrying its own priority and its origin.
#[mailbox_message]
#[derive(PartialEq, Eq)]
pub struct Job {
    pub priority: i32,
    pub producer: usize,
    pub seq: usize,
}

impl Job {
    pub const fn new(priority: i32, producer: usize, seq: usize) -> Self {
        Self {
            priority,
            producer,
            seq,
        }
    }
}

/// A labelled message whose priority comes from a lookup in the test.
#[mailbox_message]
pub struct Tagged {
    pub tag: &'static str,
}

#[mailbox_message]
pub struct Ping;

#[mailbox_message]
pub struct Pong {
    pub responder: String,
}

/// Calculator reading `Job::priority`; anything else gets `i32::MAX`.
pub fn job_priority() -> PriorityCalculator {
    PriorityCalculator::for_message::<Job>(|job| job.priority, i32::MAX)
}

/// Wraps a job in an envelope with no sender.
pub fn job_envelope(priority: i32, producer: usize, seq: usize) -> Envelope {
    Envelope::new(Job::new(priority, producer, seq), SenderRef::none())
}

/// Drains `queue` and returns the jobs in dequeue order.
pub fn drain_jobs(queue: &impl MessageQueue) -> Vec<Job> {
    queue
        .drain_all()
        .iter()
        .map(|envelope| envelope.downcast_ref::<Job>().expect("not a Job").clone())
        .collect()
}
