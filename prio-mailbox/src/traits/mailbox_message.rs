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

use std::any::Any;
use std::fmt::Debug;

use dyn_clone::DynClone;

/// A marker trait for types that can be carried through a mailbox queue.
///
/// Combines `Any`, `Send`, `Sync` and `Debug` with [`DynClone`] so that a
/// message stored as `Arc<dyn MailboxMessage>` can be shared across producer
/// threads, inspected by a priority calculator, cloned as a trait object, and
/// downcast back to its concrete type by the receiver.
///
/// A blanket implementation covers every qualifying type, so message structs
/// only need to derive `Clone` and `Debug` (or use
/// [`mailbox_message`](prio_macro::mailbox_message)).
///
/// Call [`as_any`](MailboxMessage::as_any) on a `&dyn MailboxMessage`, not on
/// the `Arc` holding it; the `Arc` itself also satisfies the blanket impl.
pub trait MailboxMessage: DynClone + Any + Send + Sync + Debug {
    /// Returns the message as a dynamic [`Any`] reference for downcasting.
    fn as_any(&self) -> &dyn Any;
}

dyn_clone::clone_trait_object!(MailboxMessage);

impl<T> MailboxMessage for T
where
    T: Any + Send + Sync + Debug + DynClone + 'static,
{
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}
