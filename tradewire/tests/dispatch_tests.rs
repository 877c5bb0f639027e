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

use serde_json::json;

use tradewire::prelude::*;

use crate::setup::*;

mod setup;

#[tokio::test]
async fn strategy_request_round_trips_between_two_agents() -> anyhow::Result<()> {
    initialize_tracing();
    let broker = MessageBroker::new();

    let logic_a = Arc::new(ProbeLogic::replying(payload_of(json!({"from": "a"}))));
    let logic_b = Arc::new(ProbeLogic::replying(payload_of(json!({"ok": true}))));
    let agent_a = BusAgent::start("agent-a", logic_a.clone(), &broker);
    let _agent_b = BusAgent::start("agent-b", logic_b.clone(), &broker);

    let (responses_callback, responses) = recording_subscriber();
    broker.subscribe(MessageKind::StrategyResponse, responses_callback);

    let request = agent_a
        .send(
            MessageKind::StrategyRequest,
            Some(payload_of(json!({"x": 1}))),
            None,
        )
        .await?;

    // B's handler ran once with A's payload.
    let calls = logic_b.calls_for(MessageKind::StrategyRequest);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], Some(payload_of(json!({"x": 1}))));

    // A never answered its own broadcast.
    assert!(logic_a.calls_for(MessageKind::StrategyRequest).is_empty());

    // Exactly one response, correlated to A's request, carrying B's payload.
    let responses = responses.lock().unwrap();
    assert_eq!(responses.len(), 1);
    let response = &responses[0];
    assert_eq!(response.kind, MessageKind::StrategyResponse);
    assert_eq!(response.sender, "agent-b");
    assert_eq!(response.correlation_id.as_deref(), Some(request.id.as_str()));
    assert_eq!(response.payload, Some(payload_of(json!({"ok": true}))));
    assert!(response.error.is_none());
    Ok(())
}

#[tokio::test]
async fn failing_strategy_handler_publishes_a_correlated_error() -> anyhow::Result<()> {
    initialize_tracing();
    let broker = MessageBroker::new();

    let agent_a = BusAgent::start(
        "agent-a",
        Arc::new(ProbeLogic::replying(payload_of(json!({})))),
        &broker,
    );
    let _agent_b = BusAgent::start("agent-b", Arc::new(FailingLogic), &broker);

    let (errors_callback, errors) = recording_subscriber();
    broker.subscribe(MessageKind::Error, errors_callback);
    let (responses_callback, responses) = recording_subscriber();
    broker.subscribe(MessageKind::StrategyResponse, responses_callback);

    let request = agent_a
        .send(
            MessageKind::StrategyRequest,
            Some(payload_of(json!({"x": 1}))),
            None,
        )
        .await?;

    assert!(
        responses.lock().unwrap().is_empty(),
        "a failed handler publishes no response"
    );
    let errors = errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    let error_envelope = &errors[0];
    assert_eq!(error_envelope.kind, MessageKind::Error);
    assert_eq!(error_envelope.sender, "agent-b");
    assert_eq!(
        error_envelope.correlation_id.as_deref(),
        Some(request.id.as_str())
    );
    assert!(error_envelope.payload.is_none());
    let detail = error_envelope.error.as_ref().expect("error detail set");
    assert_eq!(detail.code, ErrorKind::StrategyError);
    assert!(detail.message.contains("strategy model not trained"));
    Ok(())
}

#[tokio::test]
async fn each_request_kind_reports_its_own_error_code() -> anyhow::Result<()> {
    initialize_tracing();
    let broker = MessageBroker::new();

    let caller = BusAgent::start(
        "caller",
        Arc::new(ProbeLogic::replying(payload_of(json!({})))),
        &broker,
    );
    let _responder = BusAgent::start("responder", Arc::new(FailingLogic), &broker);

    let (errors_callback, errors) = recording_subscriber();
    broker.subscribe(MessageKind::Error, errors_callback);

    let data_request = caller.send(MessageKind::DataRequest, None, None).await?;
    let action_request = caller.send(MessageKind::ActionRequest, None, None).await?;

    let errors = errors.lock().unwrap();
    assert_eq!(errors.len(), 2);
    let code_for = |request_id: &str| {
        errors
            .iter()
            .find(|e| e.correlation_id.as_deref() == Some(request_id))
            .and_then(|e| e.error.as_ref())
            .map(|detail| detail.code)
    };
    assert_eq!(code_for(&data_request.id), Some(ErrorKind::DataNotAvailable));
    assert_eq!(code_for(&action_request.id), Some(ErrorKind::InvalidRequest));
    Ok(())
}

#[tokio::test]
async fn a_lone_agent_never_answers_its_own_broadcast() -> anyhow::Result<()> {
    initialize_tracing();
    let broker = MessageBroker::new();

    let logic = Arc::new(ProbeLogic::replying(payload_of(json!({"echo": 1}))));
    let agent = BusAgent::start("solo", logic.clone(), &broker);

    let (responses_callback, responses) = recording_subscriber();
    broker.subscribe(MessageKind::DataResponse, responses_callback);

    agent.send(MessageKind::DataRequest, None, None).await?;

    assert!(logic.calls_for(MessageKind::DataRequest).is_empty());
    assert!(responses.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn responses_correlate_to_their_own_requests() -> anyhow::Result<()> {
    initialize_tracing();
    let broker = MessageBroker::new();

    let caller = BusAgent::start(
        "caller",
        Arc::new(ProbeLogic::replying(payload_of(json!({})))),
        &broker,
    );
    let _responder = BusAgent::start(
        "responder",
        Arc::new(ProbeLogic::replying(payload_of(json!({"answer": 42})))),
        &broker,
    );

    let (responses_callback, responses) = recording_subscriber();
    broker.subscribe(MessageKind::DataResponse, responses_callback);

    let mut request_ids = Vec::new();
    for symbol in ["AAPL", "MSFT", "NVDA"] {
        let request = caller
            .send(
                MessageKind::DataRequest,
                Some(payload_of(json!({"symbol": symbol}))),
                None,
            )
            .await?;
        request_ids.push(request.id);
    }

    let responses = responses.lock().unwrap();
    assert_eq!(responses.len(), 3);
    let mut correlations: Vec<_> = responses
        .iter()
        .map(|r| r.correlation_id.clone().expect("response is correlated"))
        .collect();
    correlations.sort();
    request_ids.sort();
    assert_eq!(correlations, request_ids);
    Ok(())
}

#[tokio::test]
async fn a_stopped_agent_receives_nothing_further() -> anyhow::Result<()> {
    initialize_tracing();
    let broker = MessageBroker::new();

    let caller = BusAgent::start(
        "caller",
        Arc::new(ProbeLogic::replying(payload_of(json!({})))),
        &broker,
    );
    let responder_logic = Arc::new(ProbeLogic::replying(payload_of(json!({"up": true}))));
    let responder = BusAgent::start("responder", responder_logic.clone(), &broker);

    caller.send(MessageKind::ActionRequest, None, None).await?;
    assert_eq!(responder_logic.calls_for(MessageKind::ActionRequest).len(), 1);

    responder.stop();
    caller.send(MessageKind::ActionRequest, None, None).await?;
    assert_eq!(
        responder_logic.calls_for(MessageKind::ActionRequest).len(),
        1,
        "no dispatch after stop"
    );
    Ok(())
}
