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

use crate::common::CONFIG;
use crate::traits::MailboxMessage;

type CalculatorFn = dyn Fn(&dyn MailboxMessage) -> i32 + Send + Sync + 'static;

/// Policy that assigns an integer priority to a message. Lower values dequeue first.
///
/// A calculator runs inside the queue's critical section on every enqueue, so
/// it must be cheap, deterministic, and must never touch the queue it is
/// installed in. A panic inside the calculator unwinds straight back to the
/// sender and the message is not enqueued.
///
/// Cloning is cheap; the function is shared behind an `Arc`.
#[derive(Clone)]
pub struct PriorityCalculator {
    calculate: Arc<CalculatorFn>,
}

impl PriorityCalculator {
    /// Wraps an arbitrary function over type-erased messages.
    pub fn new<F>(calculate: F) -> Self
    where
        F: Fn(&dyn MailboxMessage) -> i32 + Send + Sync + 'static,
    {
        Self {
            calculate: Arc::new(calculate),
        }
    }

    /// Gives every message the same priority, which degrades to FIFO order.
    pub fn constant(priority: i32) -> Self {
        Self::new(move |_| priority)
    }

    /// Computes priorities for messages of type `M`; every other message gets `fallback`.
    ///
    /// ```rust,ignore
    /// let calculator = PriorityCalculator::for_message::<Job>(|job| job.urgency, 100);
    /// ```
    pub fn for_message<M: 'static>(
        calculate: impl Fn(&M) -> i32 + Send + Sync + 'static,
        fallback: i32,
    ) -> Self {
        Self::new(move |message| {
            message
                .as_any()
                .downcast_ref::<M>()
                .map_or(fallback, &calculate)
        })
    }

    /// Computes the priority of `message`.
    #[inline]
    pub fn priority_of(&self, message: &dyn MailboxMessage) -> i32 {
        (self.calculate)(message)
    }
}

/// A constant calculator using `defaults.priority` from the loaded configuration.
impl Default for PriorityCalculator {
    fn default() -> Self {
        Self::constant(CONFIG.defaults.priority)
    }
}

impl std::fmt::Debug for PriorityCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PriorityCalculator(..)")
    }
}
