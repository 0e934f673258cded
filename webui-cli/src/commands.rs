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

use clap::Subcommand;
use log::debug;
use serde_json::{json, Value};
use std::cmp::Ordering;
use webui_common::conf::WebUiConf;
use webui_common::version::{self, Pep440Version, VersionChecker};
use webui_common::{err_box, WebUiResult};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical form of a version
    Normalize { version: String },

    /// Compare two versions, printing -1, 0 or 1
    Compare { version1: String, version2: String },

    /// Print the major.minor part of a version
    Minor { version: String },

    /// Check a version against one minimum per release line
    Compatible {
        source: String,
        #[arg(required = true)]
        conditions: Vec<String>,
    },

    /// Evaluate the configured feature table against a manager version
    Features {
        #[arg(long, help = "Manager version (defaults to features.manager_version)")]
        manager_version: Option<String>,

        #[arg(long, help = "Only report this feature")]
        feature: Option<String>,
    },

    /// Show cli version
    Version,
}

fn ordering_to_i32(ord: Ordering) -> i32 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

impl Commands {
    /// Run the command and return what should be printed.
    pub fn execute(self, conf: &WebUiConf) -> WebUiResult<Value> {
        let value = match self {
            Commands::Normalize { version } => json!(version::normalize_pep440_version(&version)),

            Commands::Compare { version1, version2 } => {
                let ord = version::compare_pep440_versions(&version1, &version2);
                json!(ordering_to_i32(ord))
            }

            Commands::Minor { version } => json!(version::remove_after_minor_version(&version)),

            Commands::Compatible { source, conditions } => {
                json!(version::is_compatible_multiple_conditions(&source, &conditions))
            }

            Commands::Features {
                manager_version,
                feature,
            } => {
                let manager_version = match manager_version
                    .or_else(|| conf.features.manager_version.clone())
                {
                    Some(v) => Pep440Version::new(v),
                    None => {
                        return err_box!(
                            "no manager version, pass --manager-version or set features.manager_version"
                        )
                    }
                };
                debug!("evaluating features for manager {}", manager_version);

                let checker = VersionChecker::new(manager_version, conf.features.clone());
                match feature {
                    Some(name) => {
                        let result = checker.check_feature(&name);
                        json!({
                            "feature": name,
                            "supported": result.is_compatible(),
                            "result": result,
                        })
                    }
                    None => json!(checker.supported_features()),
                }
            }

            Commands::Version => json!(version::VERSION),
        };

        Ok(value)
    }
}
