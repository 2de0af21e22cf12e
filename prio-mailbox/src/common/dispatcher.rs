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

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, error, instrument, trace, warn};

use crate::common::{Mailbox, CONFIG};
use crate::message::MailboxError;
use crate::traits::{MessageQueue, MessageReceiver};

/// Drives the drain loop for one mailbox.
///
/// The loop polls [`try_dequeue`](MessageQueue::try_dequeue) until the queue
/// is empty, handing each envelope to the receiver outside the queue lock, then
/// sleeps until the next [`Mailbox::post`] or until it is stopped. Envelopes are
/// delivered one at a time, in queue order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Spawns the drain loop on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn<Q, R>(mailbox: Arc<Mailbox<Q>>, receiver: R) -> DispatcherHandle<R>
    where
        Q: MessageQueue + 'static,
        R: MessageReceiver + 'static,
    {
        let cancellation_token = CancellationToken::new();
        let processed = Arc::new(AtomicU64::new(0));
        let name = mailbox.name().to_string();
        let task = tokio::spawn(drain_loop(
            mailbox,
            receiver,
            cancellation_token.clone(),
            Arc::clone(&processed),
        ));
        debug!(mailbox = %name, "dispatcher started");
        DispatcherHandle {
            name,
            cancel_on_drop: cancellation_token.drop_guard(),
            processed,
            task,
        }
    }
}

#[instrument(skip_all, fields(mailbox = %mailbox.name()))]
async fn drain_loop<Q, R>(
    mailbox: Arc<Mailbox<Q>>,
    mut receiver: R,
    cancellation_token: CancellationToken,
    processed: Arc<AtomicU64>,
) -> R
where
    Q: MessageQueue,
    R: MessageReceiver,
{
    loop {
        while !cancellation_token.is_cancelled() {
            let Some(envelope) = mailbox.queue().try_dequeue() else {
                break;
            };
            trace!(from = %envelope.sender().name(), "delivering");
            receiver.receive(envelope).await;
            processed.fetch_add(1, Ordering::Relaxed);
        }

        tokio::select! {
            biased;
            () = cancellation_token.cancelled() => break,
            () = mailbox.notified() => {}
        }
    }

    let undelivered = mailbox.count();
    if undelivered > 0 {
        warn!(undelivered, "dispatcher stopped with envelopes still queued; they will not be delivered");
    }
    receiver
}

/// Handle to a running drain loop.
///
/// Dropping the handle without calling [`stop`](DispatcherHandle::stop) cancels
/// the loop without waiting for it. The loop releases its mailbox once the
/// current delivery finishes, and anything still queued goes down with the
/// mailbox when its last owner drops it.
#[derive(Debug)]
pub struct DispatcherHandle<R> {
    name: String,
    cancel_on_drop: DropGuard,
    processed: Arc<AtomicU64>,
    task: JoinHandle<R>,
}

impl<R> DispatcherHandle<R> {
    /// Name of the mailbox being drained.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of envelopes delivered so far.
    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }

    /// Returns `true` once the loop has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the loop and returns the receiver.
    ///
    /// The envelope being delivered when `stop` is called finishes delivery;
    /// everything still queued stays in the mailbox undelivered. Waits at most
    /// `timeouts.dispatcher_shutdown_timeout_ms`, then aborts the task.
    ///
    /// # Errors
    ///
    /// Fails with [`MailboxError::DispatcherFailed`] if the receiver panicked
    /// or the loop missed the shutdown deadline.
    #[instrument(skip(self), fields(mailbox = %self.name))]
    pub async fn stop(self) -> anyhow::Result<R> {
        self.cancel_on_drop.disarm().cancel();
        let abort = self.task.abort_handle();
        match tokio::time::timeout(CONFIG.dispatcher_shutdown_timeout(), self.task).await {
            Ok(Ok(receiver)) => {
                debug!(processed = self.processed.load(Ordering::Relaxed), "dispatcher stopped");
                Ok(receiver)
            }
            Ok(Err(join_error)) => {
                error!("dispatcher task failed: {join_error}");
                Err(MailboxError::from(join_error).into())
            }
            Err(_) => {
                abort.abort();
                error!("dispatcher did not stop within the shutdown timeout");
                Err(MailboxError::DispatcherFailed("shutdown timed out".into()).into())
            }
        }
    }
}
