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
use crate::version::{CompatibilityResult, IncompatibilityReason, Pep440Version, VersionRequirement};
use log::debug;
use std::collections::BTreeMap;

/// Gates console features on the version reported by the manager.
#[derive(Debug, Clone)]
pub struct VersionChecker {
    manager_version: Pep440Version,
    features: FeatureConf,
}

impl VersionChecker {
    pub fn new(manager_version: impl Into<Pep440Version>, features: FeatureConf) -> Self {
        Self {
            manager_version: manager_version.into(),
            features,
        }
    }

    pub fn is_compatible_with(&self, requirement: &VersionRequirement) -> bool {
        requirement.is_satisfied_by(&self.manager_version)
    }

    pub fn check_compatibility(&self, requirement: &VersionRequirement) -> CompatibilityResult {
        if self.is_compatible_with(requirement) {
            return CompatibilityResult::Compatible;
        }

        // An empty AnyOf is always satisfied, so a condition exists here.
        let required = requirement
            .condition_for(&self.manager_version)
            .unwrap_or_default();
        CompatibilityResult::Incompatible(IncompatibilityReason::VersionTooOld {
            required,
            actual: self.manager_version.clone(),
        })
    }

    pub fn check_feature(&self, feature: &str) -> CompatibilityResult {
        match self.features.table.get(feature) {
            None => CompatibilityResult::Incompatible(IncompatibilityReason::UnknownFeature {
                feature: feature.to_string(),
            }),
            Some(requirement) => {
                let result = self.check_compatibility(requirement);
                debug!(
                    "feature {} requires {}, manager {}: {}",
                    feature,
                    requirement,
                    self.manager_version,
                    result.is_compatible()
                );
                result
            }
        }
    }

    /// Unknown features are reported as unsupported.
    pub fn supports(&self, feature: &str) -> bool {
        self.check_feature(feature).is_compatible()
    }

    pub fn supported_features(&self) -> BTreeMap<String, bool> {
        self.features
            .table
            .keys()
            .map(|name| (name.clone(), self.supports(name)))
            .collect()
    }

    pub fn manager_version(&self) -> &Pep440Version {
        &self.manager_version
    }

    pub fn features(&self) -> &FeatureConf {
        &self.features
    }
}
