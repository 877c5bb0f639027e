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

//! The agent catalog: ready-made [`AgentLogic`] implementations.
//!
//! Each agent here is pure business logic with no bus awareness; joining one
//! to a broker is a matter of `BusAgent::start(id, Arc::new(agent), &broker)`.
//! Their strategy, data, and action answers are canned descriptions of the
//! modeling framework each one fronts.

pub use crewai::CrewAiAgent;
pub use deephedging::DeepHedgingAgent;
pub use elegantrl::ElegantRlAgent;
pub use qwen::QwenAgent;

mod crewai;
mod deephedging;
mod elegantrl;
mod qwen;

use serde_json::Value;
use tradewire_core::prelude::Payload;

/// Market data source every catalog agent reports serving data from.
pub const MARKET_DATA_SOURCE: &str = "yahoofinance";

/// Bar interval every catalog agent reports serving data at.
pub const TIME_INTERVAL: &str = "1D";

/// Narrows a `json!` object literal to a [`Payload`] map.
pub(crate) fn object(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        _ => Payload::new(),
    }
}

/// A field from the request payload, or `default` when the request carried
/// none.
pub(crate) fn field_or(payload: &Option<Payload>, key: &str, default: Value) -> Value {
    payload
        .as_ref()
        .and_then(|map| map.get(key))
        .cloned()
        .unwrap_or(default)
}
