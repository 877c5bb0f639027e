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
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::oneshot;
use tracing::*;

use crate::common::{MessageBroker, SubscriberFn, CONFIG};
use crate::message::{BusError, Envelope, MessageKind};

/// The kinds a waiter watches: every response kind plus `Error`, since an
/// error envelope is the only failure signal a requester gets.
const REPLY_KINDS: [MessageKind; 4] = [
    MessageKind::StrategyResponse,
    MessageKind::DataResponse,
    MessageKind::ActionResponse,
    MessageKind::Error,
];

/// Correlation-id-keyed waiter for callers that must block for the specific
/// reply to a request they published.
///
/// The bus itself is fire-and-forget; this collaborator layers a reply
/// channel on top of `subscribe`. One waiter serves any number of pending
/// requests: it subscribes a single callback to the reply kinds and routes
/// each envelope whose `correlation_id` matches a registered request id to
/// that request's receiver.
///
/// The bus enforces no deadlines. A caller that stops waiting treats the
/// expiry as its own transport-level failure; nothing is reported on the
/// bus.
pub struct ReplyWaiter {
    broker: MessageBroker,
    pending: Pending,
    callback: SubscriberFn,
}

type Pending = Arc<DashMap<String, oneshot::Sender<Envelope>>>;

impl ReplyWaiter {
    /// Subscribes a routing callback to all reply kinds on `broker`.
    pub fn attach(broker: &MessageBroker) -> Self {
        let pending: Pending = Arc::new(DashMap::new());
        let routing = pending.clone();
        let callback: SubscriberFn = Arc::new(move |envelope: Envelope| {
            let routing = routing.clone();
            Box::pin(async move {
                if let Some(correlation_id) = envelope.correlation_id.clone() {
                    if let Some((_, sender)) = routing.remove(&correlation_id) {
                        trace!(%correlation_id, kind = %envelope.kind, "routing reply");
                        // The receiver may already be gone if the caller gave up.
                        let _ = sender.send(envelope);
                    }
                }
                Ok(())
            })
        });
        for kind in REPLY_KINDS {
            broker.subscribe(kind, callback.clone());
        }
        Self {
            broker: broker.clone(),
            pending,
            callback,
        }
    }

    /// Registers interest in the reply to `request_id` and returns the
    /// receiver it will arrive on.
    ///
    /// Must be called before the request is published, or the reply can race
    /// past the registration.
    pub fn register(&self, request_id: &str) -> oneshot::Receiver<Envelope> {
        let (sender, receiver) = oneshot::channel();
        self.pending.insert(request_id.to_string(), sender);
        receiver
    }

    /// Drops a registration whose reply is no longer wanted.
    pub fn forget(&self, request_id: &str) {
        self.pending.remove(request_id);
    }

    /// Awaits a registered reply, giving up after `wait`.
    pub async fn wait(
        receiver: oneshot::Receiver<Envelope>,
        wait: Duration,
    ) -> Result<Envelope, BusError> {
        match tokio::time::timeout(wait, receiver).await {
            Ok(Ok(envelope)) => Ok(envelope),
            Ok(Err(_)) => Err(BusError::Internal(
                "reply channel closed before a reply arrived".into(),
            )),
            Err(_) => Err(BusError::Internal(format!(
                "no reply within {}ms",
                wait.as_millis()
            ))),
        }
    }

    /// Awaits a registered reply with the configured default timeout.
    pub async fn wait_default(receiver: oneshot::Receiver<Envelope>) -> Result<Envelope, BusError> {
        Self::wait(receiver, CONFIG.reply_wait_timeout()).await
    }

    /// Removes the waiter's subscriptions from the broker.
    pub fn detach(&self) {
        for kind in REPLY_KINDS {
            self.broker.unsubscribe(kind, &self.callback);
        }
    }
}
