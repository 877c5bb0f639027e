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

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use dashmap::DashMap;
use futures::future::join_all;
use tracing::*;

use crate::common::SubscriberFn;
use crate::message::{BusError, Envelope, MessageKind};

/// A single registered (kind, callback) pairing held by the broker.
///
/// Identity is the callback's `Arc` allocation: clones of the same `Arc` are
/// the same subscription, two separately-built callbacks never are. This
/// makes subscribe idempotent and unsubscribe symmetric.
#[derive(Clone)]
pub struct Subscription {
    handler: SubscriberFn,
}

impl Subscription {
    pub(crate) fn new(handler: SubscriberFn) -> Self {
        Self { handler }
    }

    fn token(&self) -> usize {
        Arc::as_ptr(&self.handler) as *const () as usize
    }

    pub(crate) async fn deliver(&self, envelope: Envelope) -> anyhow::Result<()> {
        (self.handler)(envelope).await
    }
}

impl PartialEq for Subscription {
    fn eq(&self, other: &Self) -> bool {
        self.token() == other.token()
    }
}

impl Eq for Subscription {}

impl Hash for Subscription {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token().hash(state);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("token", &self.token())
            .finish()
    }
}

type Subscribers = Arc<DashMap<MessageKind, HashSet<Subscription>>>; // Type alias for the subscribers map.

/// A broker that manages subscriptions and fans published envelopes out to
/// subscribers.
///
/// The `MessageBroker` maintains one subscriber set per [`MessageKind`] and
/// delivers every published envelope to each subscriber of its kind exactly
/// once. Cloning the broker clones a handle to the same subscriber map, so a
/// single broker instance can be handed to every agent in the process.
#[derive(Debug, Clone)]
pub struct MessageBroker {
    /// A thread-safe map of subscribers, keyed by message kind.
    subscribers: Subscribers,
}

impl Default for MessageBroker {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBroker {
    /// Creates a broker with an empty subscriber set for every routable kind.
    ///
    /// Seeding every kind up front means a missing entry at publish time is
    /// a bus-internal fault, not a lookup failure.
    pub fn new() -> Self {
        let subscribers: DashMap<MessageKind, HashSet<Subscription>> = MessageKind::ALL
            .iter()
            .map(|kind| (*kind, HashSet::new()))
            .collect();
        Self {
            subscribers: Arc::new(subscribers),
        }
    }

    /// Subscribes a callback to envelopes of the given kind.
    ///
    /// Idempotent: re-subscribing the identical callback (any clone of the
    /// same `Arc`) leaves exactly one registration in place.
    #[instrument(skip_all, fields(kind = %kind))]
    pub fn subscribe(&self, kind: MessageKind, callback: SubscriberFn) {
        let subscription = Subscription::new(callback);
        trace!(subscription = ?subscription, "subscribe");
        self.subscribers.entry(kind).or_default().insert(subscription);
    }

    /// Removes a callback's subscription for the given kind.
    ///
    /// Idempotent: unsubscribing a callback that is not registered is a
    /// no-op. A publish already fanning out keeps its snapshot and is not
    /// affected.
    #[instrument(skip_all, fields(kind = %kind))]
    pub fn unsubscribe(&self, kind: MessageKind, callback: &SubscriberFn) {
        let subscription = Subscription::new(callback.clone());
        trace!(subscription = ?subscription, "unsubscribe");
        if let Some(mut set) = self.subscribers.get_mut(&kind) {
            set.remove(&subscription);
        }
    }

    /// The number of callbacks currently subscribed to the given kind.
    pub fn subscriber_count(&self, kind: MessageKind) -> usize {
        self.subscribers.get(&kind).map_or(0, |set| set.len())
    }

    /// Publishes an envelope to every subscriber currently registered for
    /// its kind.
    ///
    /// All subscriber callbacks are initiated together and awaited as a
    /// settle-all join: one subscriber's failure is logged and does not
    /// cancel or fail delivery to the others, and is never re-raised to the
    /// publisher. The subscriber set is snapshotted before fan-out, so
    /// subscribe/unsubscribe calls racing with an in-flight publish do not
    /// affect it.
    ///
    /// Errs only if the envelope's kind has no subscriber set at all, which
    /// is unreachable while the kind enumeration stays closed.
    #[instrument(skip_all, fields(kind = %envelope.kind, id = %envelope.id))]
    pub async fn publish(&self, envelope: Envelope) -> Result<(), BusError> {
        // Clone the set and drop the map guard before the first await.
        let snapshot: Vec<Subscription> = match self.subscribers.get(&envelope.kind) {
            Some(set) => set.iter().cloned().collect(),
            None => {
                return Err(BusError::Internal(format!(
                    "no subscriber set for kind {}",
                    envelope.kind
                )))
            }
        };
        trace!(subscriber_count = snapshot.len(), "fanning out");
        let deliveries = snapshot.into_iter().map(|subscription| {
            let envelope = envelope.clone();
            async move {
                if let Err(error) = subscription.deliver(envelope).await {
                    error!(
                        subscription = ?subscription,
                        %error,
                        "subscriber failed; continuing fan-out"
                    );
                }
            }
        });
        join_all(deliveries).await;
        Ok(())
    }
}
