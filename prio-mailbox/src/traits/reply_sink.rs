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

/// Something a reply can be delivered into.
///
/// [`SenderRef`](crate::message::SenderRef) holds a weak reference to a
/// `ReplySink`, so replying never keeps the original sender alive.
/// [`Mailbox`](crate::common::Mailbox) is the usual implementor.
pub trait ReplySink: Send + Sync {
    /// Delivers an envelope into this sink.
    fn tell(&self, envelope: Envelope);
}
