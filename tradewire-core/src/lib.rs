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
//! Tradewire Core Library
//!
//! This library provides the core functionality for the Tradewire agent bus:
//! the typed message envelope, the fan-out broker, and the dispatch adapter
//! that joins agent business logic to the bus.

/// The per-agent dispatch adapter.
pub(crate) mod agent;
/// Common utilities and structures used throughout the Tradewire bus.
pub(crate) mod common;
pub(crate) mod message;
/// Trait definitions used in the Tradewire bus.
pub(crate) mod traits;

/// Prelude module for convenient imports.
///
/// This module re-exports commonly used items from the `agent`, `common`,
/// `message`, and `traits` modules, as well as the `async_trait` crate.
pub mod prelude {
    pub use async_trait;

    pub use crate::agent::BusAgent;
    pub use crate::common::{
        MessageBroker, Payload, ReplyWaiter, SubscriberFn, SubscriberFuture, TradewireConfig,
        CONFIG,
    };
    pub use crate::message::{BusError, Envelope, ErrorDetail, ErrorKind, MessageKind};
    pub use crate::traits::AgentLogic;
}
