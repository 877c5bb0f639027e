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

/// Neural hedging agent: CVaR-driven portfolio hedging over options and
/// futures.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeepHedgingAgent;

#[async_trait]
impl AgentLogic for DeepHedgingAgent {
    async fn handle_strategy_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        info!(?payload, "handling strategy request");
        Ok(object(json!({
            "strategy_type": "deephedging",
            "model_type": "neural_hedger",
            "parameters": {
                "risk_measure": "CVaR",
                "confidence_level": 0.95,
                "hedging_frequency": field_or(&payload, "hedging_frequency", json!("daily")),
                "instruments": field_or(&payload, "instruments", json!(["options", "futures"]))
            }
        })))
    }

    async fn handle_data_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        info!(?payload, "handling data request");
        Ok(object(json!({
            "data_source": MARKET_DATA_SOURCE,
            "timeframe": TIME_INTERVAL,
            "data_types": [
                "option_prices",
                "implied_volatility",
                "historical_volatility",
                "greeks"
            ]
        })))
    }

    async fn handle_action_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        info!(?payload, "handling action request");
        Ok(object(json!({
            "action_type": "hedge_portfolio",
            "status": "executed",
            "hedging_actions": {
                "portfolio_delta": field_or(&payload, "delta", json!(0.0)),
                "portfolio_gamma": field_or(&payload, "gamma", json!(0.0)),
                "trades": field_or(&payload, "trades", json!([])),
                "risk_metrics": {
                    "var": field_or(&payload, "var", json!(0.0)),
                    "cvar": field_or(&payload, "cvar", json!(0.0))
                }
            }
        })))
    }
}
