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

use async_trait::async_trait;
use serde_json::json;
use tracing::*;

use tradewire_core::prelude::{AgentLogic, Payload};

use crate::agents::{field_or, object, MARKET_DATA_SOURCE, TIME_INTERVAL};

/// Collaborative multi-role agent: a small crew of analyst, trader, and risk
/// manager reaching decisions by consensus.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrewAiAgent;

#[async_trait]
impl AgentLogic for CrewAiAgent {
    async fn handle_strategy_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        info!(?payload, "handling strategy request");
        Ok(object(json!({
            "strategy_type": "crewai",
            "model_type": "collaborative",
            "parameters": {
                "crew_size": 3,
                "roles": ["analyst", "trader", "risk_manager"],
                "coordination_method": "consensus"
            }
        })))
    }

    async fn handle_data_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        info!(?payload, "handling data request");
        Ok(object(json!({
            "data_source": MARKET_DATA_SOURCE,
            "timeframe": TIME_INTERVAL,
            "analysis_types": ["fundamental", "technical", "sentiment"]
        })))
    }

    async fn handle_action_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        info!(?payload, "handling action request");
        Ok(object(json!({
            "action_type": "collaborative_decision",
            "status": "executed",
            "decisions": {
                "analyst_recommendation": field_or(&payload, "analysis", json!({})),
                "trader_execution": field_or(&payload, "execution", json!({})),
                "risk_assessment": field_or(&payload, "risk", json!({}))
            }
        })))
    }
}
