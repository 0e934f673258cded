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

use crate::version::{pep440, Pep440Version};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum manager version a feature needs.
///
/// In configuration a single string is `AtLeast`, an array is `AnyOf`:
/// ```toml
/// [features.table]
/// session-owner = "24.03.0"
/// model-store = ["24.09.1", "24.03.7"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum VersionRequirement {
    /// Any version at or above the given one.
    AtLeast(Pep440Version),

    /// One minimum per release line. The line matching the checked version
    /// applies, otherwise the highest minimum does.
    AnyOf(Vec<Pep440Version>),
}

impl VersionRequirement {
    pub fn at_least(version: impl Into<Pep440Version>) -> Self {
        Self::AtLeast(version.into())
    }

    pub fn any_of<I, V>(versions: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Pep440Version>,
    {
        Self::AnyOf(versions.into_iter().map(|x| x.into()).collect())
    }

    pub fn versions(&self) -> Vec<&Pep440Version> {
        match self {
            Self::AtLeast(v) => vec![v],
            Self::AnyOf(list) => list.iter().collect(),
        }
    }

    /// The minimum that applies to `actual`, `None` for an empty `AnyOf`.
    pub fn condition_for(&self, actual: &Pep440Version) -> Option<Pep440Version> {
        match self {
            Self::AtLeast(v) => Some(v.clone()),
            Self::AnyOf(list) => {
                pep440::select_condition(actual.as_str(), list).map(Pep440Version::new)
            }
        }
    }

    pub fn is_satisfied_by(&self, actual: &Pep440Version) -> bool {
        match self {
            Self::AtLeast(v) => actual >= v,
            Self::AnyOf(list) => pep440::is_compatible_multiple_conditions(actual.as_str(), list),
        }
    }
}

impl fmt::Display for VersionRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast(v) => write!(f, ">={}", v),
            Self::AnyOf(list) => {
                let list: Vec<String> = list.iter().map(|x| format!(">={}", x)).collect();
                write!(f, "AnyOf({})", list.join(" | "))
            }
        }
    }
}

/// Compatibility check result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CompatibilityResult {
    /// Manager satisfies the requirement
    Compatible,

    /// Manager does not satisfy the requirement (with detailed reason)
    Incompatible(IncompatibilityReason),
}

impl CompatibilityResult {
    pub fn is_compatible(&self) -> bool {
        matches!(self, Self::Compatible)
    }

    pub fn is_incompatible(&self) -> bool {
        matches!(self, Self::Incompatible(_))
    }
}

/// Detailed reason for incompatibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IncompatibilityReason {
    /// Manager version is below the applicable minimum
    VersionTooOld {
        required: Pep440Version,
        actual: Pep440Version,
    },

    /// Feature is not present in the feature table
    UnknownFeature { feature: String },
}

impl fmt::Display for IncompatibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VersionTooOld { required, actual } => {
                write!(
                    f,
                    "Manager version too old: required >= {}, actual {}",
                    required, actual
                )
            }
            Self::UnknownFeature { feature } => {
                write!(f, "Unknown feature: {}", feature)
            }
        }
    }
}

impl IncompatibilityReason {
    /// Get a suggestion message for how to fix the incompatibility
    pub fn suggestion(&self) -> String {
        match self {
            Self::VersionTooOld { required, .. } => {
                format!("Please upgrade manager to version {} or later", required)
            }
            Self::UnknownFeature { feature } => {
                format!("Add a minimum version for '{}' to the feature table", feature)
            }
        }
    }
}
