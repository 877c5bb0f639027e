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

/// Language-model agent: multi-modal market analysis over prices, news, and
/// social feeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct QwenAgent;

#[async_trait]
impl AgentLogic for QwenAgent {
    async fn handle_strategy_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        info!(?payload, "handling strategy request");
        Ok(object(json!({
            "strategy_type": "qwen",
            "model_type": "language_model",
            "parameters": {
                "model_size": "32B",
                "analysis_type": "multi_modal",
                "data_sources": [
                    "market_data",
                    "news",
                    "social_media",
                    "financial_reports"
                ]
            }
        })))
    }

    async fn handle_data_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        info!(?payload, "handling data request");
        Ok(object(json!({
            "data_source": MARKET_DATA_SOURCE,
            "timeframe": TIME_INTERVAL,
            "analysis_outputs": {
                "sentiment_analysis": field_or(&payload, "sentiment", json!({})),
                "trend_analysis": field_or(&payload, "trends", json!({})),
                "risk_analysis": field_or(&payload, "risks", json!({}))
            }
        })))
    }

    async fn handle_action_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload> {
        info!(?payload, "handling action request");
        Ok(object(json!({
            "action_type": "ai_analysis",
            "status": "executed",
            "recommendations": {
                "market_sentiment": field_or(&payload, "sentiment_score", json!(0.0)),
                "trading_signals": field_or(&payload, "signals", json!([])),
                "risk_assessment": field_or(&payload, "risk_level", json!("moderate")),
                "narrative_summary": field_or(&payload, "summary", json!(""))
            }
        })))
    }
}
