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

use crate::common::Payload;

/// The business-logic capability a concrete agent supplies to join the bus.
///
/// Implementations are plain values with no bus awareness: they receive a
/// request payload and either return a result payload or fail with a
/// descriptive error. The [`BusAgent`](crate::agent::BusAgent) adapter owns
/// all subscription and correlation bookkeeping on their behalf, and
/// converts a handler's error into an `Error` envelope on the bus; no
/// handler failure ever propagates further.
///
/// Handlers may perform asynchronous work; dispatch awaits their completion.
#[async_trait]
pub trait AgentLogic: Send + Sync {
    /// Answers a `StrategyRequest`. Failure is reported as `strategy_error`.
    async fn handle_strategy_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload>;

    /// Answers a `DataRequest`. Failure is reported as `data_not_available`.
    async fn handle_data_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload>;

    /// Answers an `ActionRequest`. Failure is reported as `invalid_request`.
    async fn handle_action_request(&self, payload: Option<Payload>) -> anyhow::Result<Payload>;
}
