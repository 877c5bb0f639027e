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
#![allow(unused)]
use std::sync::Once;

use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tradewire::prelude::CONFIG;

// Declare the submodules and re-export the test agents for easy access.
pub mod agents;

pub use agents::*;

// Ensures tracing initialization happens only once across all tests.
static INIT: Once = Once::new();

/// Initializes the global tracing subscriber for tests.
///
/// Sets up a `tracing_subscriber::FmtSubscriber` with an `EnvFilter`
/// controlling log levels for the bus crates during test execution, writing
/// to a log file via a non-blocking appender. The base filter level and the
/// on/off switch come from [`CONFIG`]. Uses `std::sync::Once` so the
/// initialization runs only once even when called from multiple tests.
pub fn initialize_tracing() {
    INIT.call_once(|| {
        if !CONFIG.behavior.enable_tracing {
            return;
        }

        // Ensure logs directory exists
        std::fs::create_dir_all("logs").expect("could not create logs dir");

        let file_appender = RollingFileAppender::new(Rotation::NEVER, "logs", "bus_tests.txt");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // Leak the guard so the non-blocking writer is not dropped before process exit
        Box::leak(Box::new(guard));

        let filter = EnvFilter::new(&CONFIG.tracing.default_level)
            .add_directive("tradewire_core::common::broker=trace".parse().unwrap())
            .add_directive("tradewire_core::agent=trace".parse().unwrap())
            .add_directive("tradewire_core::common::correlation=trace".parse().unwrap())
            .add_directive("broker_tests=trace".parse().unwrap())
            .add_directive("dispatch_tests=trace".parse().unwrap());

        let subscriber = FmtSubscriber::builder()
            .with_span_events(FmtSpan::NONE)
            .with_max_level(Level::TRACE)
            .compact()
            .with_line_number(true)
            .without_time()
            .with_target(true)
            .with_env_filter(filter)
            .with_writer(non_blocking)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");
    });
}
