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

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic category and routing class of an [`Envelope`](crate::message::Envelope).
///
/// The set is closed: the broker seeds one subscriber set per kind at
/// construction, and the wire form only admits these values. Each request
/// kind maps to exactly one response kind and one failure code, which is the
/// whole request/response contract of the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Ask any listening agent for its trading strategy.
    StrategyRequest,
    /// A strategy description, correlated to a `StrategyRequest`.
    StrategyResponse,
    /// Ask any listening agent for market data it can provide.
    DataRequest,
    /// A data description, correlated to a `DataRequest`.
    DataResponse,
    /// Ask any listening agent to perform a trading action.
    ActionRequest,
    /// An action outcome, correlated to an `ActionRequest`.
    ActionResponse,
    /// A structured failure, correlated to the request that caused it.
    Error,
}

impl MessageKind {
    /// Every kind the bus routes, in wire order.
    pub const ALL: [MessageKind; 7] = [
        MessageKind::StrategyRequest,
        MessageKind::StrategyResponse,
        MessageKind::DataRequest,
        MessageKind::DataResponse,
        MessageKind::ActionRequest,
        MessageKind::ActionResponse,
        MessageKind::Error,
    ];

    /// The kinds a dispatch adapter subscribes to on behalf of its agent.
    pub const REQUESTS: [MessageKind; 3] = [
        MessageKind::StrategyRequest,
        MessageKind::DataRequest,
        MessageKind::ActionRequest,
    ];

    /// The response kind published when a request of this kind succeeds.
    pub const fn response_kind(&self) -> Option<MessageKind> {
        match self {
            MessageKind::StrategyRequest => Some(MessageKind::StrategyResponse),
            MessageKind::DataRequest => Some(MessageKind::DataResponse),
            MessageKind::ActionRequest => Some(MessageKind::ActionResponse),
            _ => None,
        }
    }

    /// The error code published when a request of this kind fails.
    pub const fn failure_code(&self) -> Option<ErrorKind> {
        match self {
            MessageKind::StrategyRequest => Some(ErrorKind::StrategyError),
            MessageKind::DataRequest => Some(ErrorKind::DataNotAvailable),
            MessageKind::ActionRequest => Some(ErrorKind::InvalidRequest),
            _ => None,
        }
    }

    /// Whether this kind carries a request an agent is expected to answer.
    pub const fn is_request(&self) -> bool {
        self.response_kind().is_some()
    }

    /// The wire string for this kind, as carried in the `message_type` field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MessageKind::StrategyRequest => "strategy_request",
            MessageKind::StrategyResponse => "strategy_response",
            MessageKind::DataRequest => "data_request",
            MessageKind::DataResponse => "data_response",
            MessageKind::ActionRequest => "action_request",
            MessageKind::ActionResponse => "action_response",
            MessageKind::Error => "error",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standard error codes carried in the `error` field of an `Error` envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The wire form was malformed or named an unknown kind.
    InvalidMessage,
    /// An action handler rejected its input.
    InvalidRequest,
    /// A data handler could not satisfy the request.
    DataNotAvailable,
    /// A strategy handler failed.
    StrategyError,
    /// A bus-internal fault, unreachable while the kind set stays closed.
    InternalError,
}

impl ErrorKind {
    /// The wire string for this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidMessage => "invalid_message",
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::DataNotAvailable => "data_not_available",
            ErrorKind::StrategyError => "strategy_error",
            ErrorKind::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
