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

/// Represents errors surfaced synchronously by the bus API.
///
/// Handler failures never appear here; the dispatch adapter converts them
/// into `Error`-kind envelopes on the bus instead.
#[derive(Debug)]
pub enum BusError {
    /// The wire form could not be decoded into a valid envelope.
    InvalidMessage(String),
    /// A bus-internal fault, expected unreachable while the kind set stays closed.
    Internal(String),
}

impl std::fmt::Display for BusError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BusError::InvalidMessage(msg) => write!(f, "Invalid message: {}", msg),
            BusError::Internal(msg) => write!(f, "Internal bus error: {}", msg),
        }
    }
}

impl std::error::Error for BusError {}
