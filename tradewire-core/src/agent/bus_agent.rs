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

use tracing::*;

use crate::common::{MessageBroker, Payload, SubscriberFn};
use crate::message::{BusError, Envelope, MessageKind};
use crate::traits::AgentLogic;

/// Dispatch adapter that joins a concrete [`AgentLogic`] to the bus.
///
/// `start` subscribes one dispatch callback per request kind on the agent's
/// behalf. Each incoming request runs to exactly one terminal state:
/// self-suppressed (the agent authored it), response published, or error
/// published. There are no retries here; retry policy belongs to whoever is
/// awaiting the correlated reply.
///
/// Requests are broadcast-and-filter: every agent subscribed to a request
/// kind sees every request of that kind, including its own, which is why
/// dispatch drops envelopes whose sender matches the agent's id before
/// invoking any handler.
pub struct BusAgent {
    id: String,
    broker: MessageBroker,
    subscriptions: Vec<(MessageKind, SubscriberFn)>,
}

impl BusAgent {
    /// Registers `logic` on the bus under `id`.
    pub fn start(id: impl Into<String>, logic: Arc<dyn AgentLogic>, broker: &MessageBroker) -> Self {
        let id = id.into();
        let mut subscriptions = Vec::with_capacity(MessageKind::REQUESTS.len());
        for kind in MessageKind::REQUESTS {
            let callback = Self::dispatch_callback(id.clone(), logic.clone(), broker.clone());
            broker.subscribe(kind, callback.clone());
            subscriptions.push((kind, callback));
        }
        trace!(agent = %id, "agent joined the bus");
        Self {
            id,
            broker: broker.clone(),
            subscriptions,
        }
    }

    /// This agent's id, used as the sender of everything it publishes.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Builds an envelope authored by this agent and publishes it.
    ///
    /// Fire-and-forget: there is no reply channel, and by the time `send`
    /// returns the fan-out has already settled. A caller that needs the
    /// correlated reply builds the envelope itself, registers its `id` with
    /// a [`ReplyWaiter`](crate::common::ReplyWaiter), and then publishes.
    /// The envelope that went out is returned for the caller's records.
    pub async fn send(
        &self,
        kind: MessageKind,
        payload: Option<Payload>,
        correlation_id: Option<String>,
    ) -> Result<Envelope, BusError> {
        let envelope = Envelope::new(kind, self.id.clone(), payload, correlation_id);
        self.broker.publish(envelope.clone()).await?;
        Ok(envelope)
    }

    /// Removes this agent's dispatch callbacks from the broker.
    pub fn stop(&self) {
        for (kind, callback) in &self.subscriptions {
            self.broker.unsubscribe(*kind, callback);
        }
        trace!(agent = %self.id, "agent left the bus");
    }

    fn dispatch_callback(
        agent_id: String,
        logic: Arc<dyn AgentLogic>,
        broker: MessageBroker,
    ) -> SubscriberFn {
        Arc::new(move |envelope: Envelope| {
            let agent_id = agent_id.clone();
            let logic = logic.clone();
            let broker = broker.clone();
            Box::pin(async move {
                Self::dispatch(agent_id, logic, broker, envelope).await;
                Ok(())
            })
        })
    }

    /// Runs one incoming request to a terminal state.
    ///
    /// Never returns a failure to the broker: a handler error becomes an
    /// `Error` envelope correlated to the request, fully converted into an
    /// observable bus event.
    async fn dispatch(
        agent_id: String,
        logic: Arc<dyn AgentLogic>,
        broker: MessageBroker,
        request: Envelope,
    ) {
        if request.sender == agent_id {
            trace!(agent = %agent_id, id = %request.id, "suppressing own broadcast");
            return;
        }
        let (Some(response_kind), Some(failure_code)) =
            (request.kind.response_kind(), request.kind.failure_code())
        else {
            // Dispatch callbacks are only ever subscribed to request kinds.
            warn!(agent = %agent_id, kind = %request.kind, "dispatch received a non-request kind");
            return;
        };
        let outcome = match request.kind {
            MessageKind::StrategyRequest => {
                logic.handle_strategy_request(request.payload.clone()).await
            }
            MessageKind::DataRequest => logic.handle_data_request(request.payload.clone()).await,
            MessageKind::ActionRequest => logic.handle_action_request(request.payload.clone()).await,
            _ => return,
        };
        let reply = match outcome {
            Ok(result) => Envelope::new(
                response_kind,
                agent_id.clone(),
                Some(result),
                Some(request.id.clone()),
            ),
            Err(error) => {
                error!(agent = %agent_id, request = %request.id, %error, "handler failed");
                Envelope::error(
                    failure_code,
                    error.to_string(),
                    agent_id.clone(),
                    Some(request.id.clone()),
                )
            }
        };
        if let Err(publish_error) = broker.publish(reply).await {
            error!(agent = %agent_id, %publish_error, "could not publish reply");
        }
    }
}
