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

use crate::version::VersionRequirement;
use crate::{err_conf, WebUiResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Feature gating configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeatureConf {
    // Version reported by the manager, used when none is given on the command line.
    pub manager_version: Option<String>,

    // Feature name -> minimum manager version.
    pub table: BTreeMap<String, VersionRequirement>,
}

impl FeatureConf {
    pub fn insert(&mut self, name: impl Into<String>, requirement: VersionRequirement) {
        self.table.insert(name.into(), requirement);
    }

    pub fn init(&self) -> WebUiResult<()> {
        for (name, requirement) in &self.table {
            if name.trim().is_empty() {
                return err_conf!("feature name must not be empty");
            }

            let versions = requirement.versions();
            if versions.is_empty() {
                return err_conf!("feature '{}' has no minimum version", name);
            }

            if let Some(v) = versions.iter().find(|v| v.is_empty()) {
                return err_conf!("feature '{}' has an empty minimum version '{}'", name, v);
            }
        }

        Ok(())
    }
}
