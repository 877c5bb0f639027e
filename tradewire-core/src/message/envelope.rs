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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Payload;
use crate::message::{BusError, ErrorKind, MessageKind};

/// The immutable unit of bus traffic.
///
/// An envelope is stamped with its creation time and a fresh id at
/// construction and never mutated afterwards; the broker hands clones to
/// every subscriber. A reply carries the originating request's `id` in its
/// `correlation_id`, which is the only link between the two.
///
/// The JSON wire form uses the field names `message_type`, `sender`,
/// `timestamp`, `message_id`, `correlation_id`, `payload`, and `error`;
/// absent optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Routing class of this envelope.
    #[serde(rename = "message_type")]
    pub kind: MessageKind,
    /// Id of the agent that authored this envelope.
    pub sender: String,
    /// Creation time, UTC.
    pub timestamp: DateTime<Utc>,
    /// Globally unique envelope id (random UUID).
    #[serde(rename = "message_id")]
    pub id: String,
    /// Id of the envelope this one answers, when it answers one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    /// Request/response body; semantics belong to the agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
    /// Structured failure, set exactly when `kind` is [`MessageKind::Error`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

/// The failure carried by an `Error`-kind envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Standard error code.
    pub code: ErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl Envelope {
    /// Creates an envelope of the given kind, stamping the current UTC time
    /// and a fresh unique id.
    ///
    /// Random UUIDs keep ids collision-free even for bursts created within
    /// the same instant, so error envelopes need no special id scheme.
    pub fn new(
        kind: MessageKind,
        sender: impl Into<String>,
        payload: Option<Payload>,
        correlation_id: Option<String>,
    ) -> Self {
        Self {
            kind,
            sender: sender.into(),
            timestamp: Utc::now(),
            id: Uuid::new_v4().to_string(),
            correlation_id,
            payload,
            error: None,
        }
    }

    /// Creates a standardized `Error` envelope: `error` set, `payload` unset.
    pub fn error(
        code: ErrorKind,
        message: impl Into<String>,
        sender: impl Into<String>,
        correlation_id: Option<String>,
    ) -> Self {
        Self {
            kind: MessageKind::Error,
            sender: sender.into(),
            timestamp: Utc::now(),
            id: Uuid::new_v4().to_string(),
            correlation_id,
            payload: None,
            error: Some(ErrorDetail {
                code,
                message: message.into(),
            }),
        }
    }

    /// Serializes this envelope to its JSON wire form.
    pub fn to_wire(&self) -> Result<String, BusError> {
        serde_json::to_string(self).map_err(|e| BusError::Internal(e.to_string()))
    }

    /// Decodes an envelope from its JSON wire form.
    ///
    /// Fails with [`BusError::InvalidMessage`] when the input is not valid
    /// JSON, names a `message_type` or error `code` outside the closed
    /// enumerations, or claims kind `error` without carrying error detail.
    pub fn from_wire(raw: &str) -> Result<Self, BusError> {
        let envelope: Envelope =
            serde_json::from_str(raw).map_err(|e| BusError::InvalidMessage(e.to_string()))?;
        if envelope.kind == MessageKind::Error && envelope.error.is_none() {
            return Err(BusError::InvalidMessage(
                "error envelope without error detail".into(),
            ));
        }
        Ok(envelope)
    }
}
