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

use crate::agents::{object, MARKET_DATA_SOURCE, TIME_INTERVAL};

/// Deep reinforcement learning agent fronting a DQN trader.
#[derive(Debug, Clone, Copy)]
pub struct ElegantRlAgent {
    /// Learning rate reported in strategy answers.
    pub learning_rate: f64,
    /// Batch size reported in strategy answers.
    pub batch_size: u32,
}

impl Default for ElegantRlAgent {
    fn default() -> Self {
        Self {
            learning_rate: 3e-4,
            batch_size: 64,
        }
    }
}

#[async_trait]
impl AgentLogic for ElegantRlAgent {
    async fn handle_strategy_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        info!(?payload, "handling strategy request");
        Ok(object(json!({
            "strategy_type": "elegantrl",
            "model_type": "DQN",
            "parameters": {
                "learning_rate": self.learning_rate,
                "batch_size": self.batch_size
            }
        })))
    }

    async fn handle_data_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        info!(?payload, "handling data request");
        Ok(object(json!({
            "data_source": MARKET_DATA_SOURCE,
            "timeframe": TIME_INTERVAL
        })))
    }

    async fn handle_action_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        info!(?payload, "handling action request");
        Ok(object(json!({
            "action_type": "trade",
            "status": "executed",
            "details": payload.unwrap_or_default()
        })))
    }
}
