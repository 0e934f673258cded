// Copyright 2025 OPPO.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConf {
    // Default level, overridden by RUST_LOG when set.
    pub level: String,
    pub display_target: bool,
    pub display_thread: bool,
    pub ansi: bool,
}

impl LogConf {
    pub fn level(&self) -> Level {
        Level::from_str(&self.level).unwrap_or(Level::INFO)
    }
}

impl Default for LogConf {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            display_target: false,
            display_thread: false,
            ansi: false,
        }
    }
}

pub struct Logger;

impl Logger {
    /// Install the global subscriber and route `log` records into it.
    /// Calling this more than once keeps the first subscriber.
    pub fn init(conf: LogConf) {
        let _ = tracing_log::LogTracer::init();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(conf.level().as_str()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(conf.display_target)
            .with_thread_names(conf.display_thread)
            .with_ansi(conf.ansi)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
