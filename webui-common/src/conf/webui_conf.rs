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

use crate::conf::FeatureConf;
use crate::logger::LogConf;
use crate::WebUiResult;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WebUiConf {
    pub log: LogConf,
    pub features: FeatureConf,
}

impl WebUiConf {
    pub const ENV_CONF_FILE: &'static str = "WEBUI_CONF_FILE";

    pub fn from<T: AsRef<Path>>(path: T) -> WebUiResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let conf = Self::from_str(&text)?;
        info!(
            "loaded configuration from {}, {} feature(s)",
            path.display(),
            conf.features.table.len()
        );
        Ok(conf)
    }

    // Not `FromStr`: parsing validates and can fail with any config error.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> WebUiResult<Self> {
        let conf: Self = toml::from_str(text)?;
        conf.init()?;
        Ok(conf)
    }

    /// Load from `path`, else from `WEBUI_CONF_FILE`, else use the defaults.
    pub fn load(path: Option<&str>) -> WebUiResult<Self> {
        let path = path
            .map(|x| x.to_string())
            .or_else(|| std::env::var(Self::ENV_CONF_FILE).ok());

        match path {
            Some(path) => Self::from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn init(&self) -> WebUiResult<()> {
        self.features.init()
    }
}
