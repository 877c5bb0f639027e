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

//! Defines common type aliases used throughout `tradewire-core`.
//!
//! This module centralizes the callback and payload shapes shared by the
//! broker, the dispatch adapter, and the correlation waiter.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::message::Envelope;

/// Free-form body of a request or response envelope.
///
/// A JSON object whose semantics belong entirely to the agents exchanging
/// it; the bus only moves it.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Pinned, boxed future returned by a subscriber callback.
///
/// A callback's `Err` marks that one delivery as failed; the broker logs it
/// and continues fan-out to the remaining subscribers.
pub type SubscriberFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'static>>;

/// An asynchronous subscriber callback registered with the broker.
///
/// Callbacks are compared by identity (the `Arc` allocation): clones of the
/// same `Arc` name the same subscription for subscribe/unsubscribe symmetry.
pub type SubscriberFn = Arc<dyn Fn(Envelope) -> SubscriberFuture + Send + Sync + 'static>;
