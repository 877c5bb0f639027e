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
#![allow(unused)]

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail};
use serde_json::{json, Value};

use tradewire::prelude::*;

/// Builds a `Payload` from a `json!` object literal.
pub fn payload_of(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Test logic that answers every request kind with a fixed payload and
/// records the payloads it was invoked with.
#[derive(Debug, Default)]
pub struct ProbeLogic {
    pub reply: Payload,
    pub calls: Arc<Mutex<Vec<(MessageKind, Option<Payload>)>>>,
}

impl ProbeLogic {
    pub fn replying(reply: Payload) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls_for(&self, kind: MessageKind) -> Vec<Option<Payload>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, p)| p.clone())
            .collect()
    }

    fn record(&self, kind: MessageKind, payload: &Option<Payload>) {
        self.calls.lock().unwrap().push((kind, payload.clone()));
    }
}

#[async_trait::async_trait]
impl AgentLogic for ProbeLogic {
    async fn handle_strategy_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        self.record(MessageKind::StrategyRequest, &payload);
        Ok(self.reply.clone())
    }

    async fn handle_data_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        self.record(MessageKind::DataRequest, &payload);
        Ok(self.reply.clone())
    }

    async fn handle_action_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        self.record(MessageKind::ActionRequest, &payload);
        Ok(self.reply.clone())
    }
}

/// Test logic whose handlers always fail.
#[derive(Debug, Default)]
pub struct FailingLogic;

#[async_trait::async_trait]
impl AgentLogic for FailingLogic {
    async fn handle_strategy_request(&self, _payload: Option<Payload>) -> anyhow::Result<Payload> {
        bail!("strategy model not trained")
    }

    async fn handle_data_request(&self, _payload: Option<Payload>) -> anyhow::Result<Payload> {
        bail!("feed is down")
    }

    async fn handle_action_request(&self, _payload: Option<Payload>) -> anyhow::Result<Payload> {
        bail!("order rejected")
    }
}

/// A subscriber callback that appends every delivered envelope to a shared
/// vector.
pub fn recording_subscriber() -> (SubscriberFn, Arc<Mutex<Vec<Envelope>>>) {
    let seen: Arc<Mutex<Vec<Envelope>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let callback: SubscriberFn = Arc::new(move |envelope: Envelope| {
        let sink = sink.clone();
        Box::pin(async move {
            sink.lock().unwrap().push(envelope);
            Ok(())
        })
    });
    (callback, seen)
}

/// A subscriber callback that fails every delivery.
pub fn failing_subscriber() -> SubscriberFn {
    Arc::new(|envelope: Envelope| {
        Box::pin(async move { Err(anyhow!("refusing delivery of {}", envelope.id)) })
    })
}

/// Envelopes of `kind` captured by a recording subscriber.
pub fn seen_of_kind(seen: &Arc<Mutex<Vec<Envelope>>>, kind: MessageKind) -> Vec<Envelope> {
    seen.lock()
        .unwrap()
        .iter()
        .filter(|e| e.kind == kind)
        .cloned()
        .collect()
}
