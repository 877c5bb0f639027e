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

#![forbid(unsafe_code)]
#![forbid(missing_docs)] // Keep this to enforce coverage

//! # Tradewire
//!
//! This crate provides a typed in-process message bus for autonomous trading
//! agents, built on top of Tokio, plus a catalog of ready-made agents.
//!
//! ## Key Concepts
//!
//! - **Envelope**: The immutable unit of bus traffic, carrying a kind, a
//!   sender, ids, and a JSON payload or structured error.
//! - **Broker (`MessageBroker`)**: Central publish-subscribe mechanism that
//!   fans each published envelope out to every subscriber of its kind,
//!   isolating per-subscriber failures.
//! - **Agents (`BusAgent` + `AgentLogic`)**: A concrete agent supplies three
//!   request handlers; the adapter owns subscription, self-suppression, and
//!   correlation bookkeeping.
//! - **Correlation (`ReplyWaiter`)**: Requests and replies are linked only
//!   by correlation id; a waiter turns that linkage back into an awaitable
//!   reply for callers that need one.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tradewire::prelude::*;
//!
//! let broker = MessageBroker::new();
//! let agent = BusAgent::start("qwen_agent", Arc::new(QwenAgent), &broker);
//! ```

pub mod agents;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tradewire_core::prelude::*;

    pub use crate::agents::{CrewAiAgent, DeepHedgingAgent, ElegantRlAgent, QwenAgent};
}
