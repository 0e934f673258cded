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

use crate::version::pep440::{self, WILDCARD};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const PRE_RELEASE_TOKENS: [&str; 7] = ["dev", "a", "alpha", "b", "beta", "c", "rc"];

/// A version string as reported by the manager, compared with lenient
/// PEP 440 rules.
///
/// Equality follows the comparator, so `24.09.1 == 24.9.1` and a wildcard
/// matches anything sharing its prefix. Because of that the type is only
/// `PartialEq`/`PartialOrd`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pep440Version(String);

impl Pep440Version {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.normalized().is_empty()
    }

    pub fn normalized(&self) -> String {
        pep440::normalize_pep440_version(&self.0)
    }

    pub fn public(&self) -> String {
        let normalized = self.normalized();
        pep440::split_local(&normalized).0.to_string()
    }

    pub fn local(&self) -> Option<String> {
        let normalized = self.normalized();
        pep440::split_local(&normalized).1.map(|x| x.to_string())
    }

    /// `major.minor` of this version.
    pub fn minor(&self) -> String {
        pep440::remove_after_minor_version(&self.0)
    }

    pub fn is_prerelease(&self) -> bool {
        let public = self.public();
        pep440::segments(&public)
            .iter()
            .any(|s| PRE_RELEASE_TOKENS.contains(&s.to_ascii_lowercase().as_str()))
    }

    pub fn is_wildcard(&self) -> bool {
        let public = self.public();
        pep440::segments(&public).contains(&WILDCARD)
    }
}

impl fmt::Display for Pep440Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Pep440Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Pep440Version {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Pep440Version {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Pep440Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Pep440Version {
    fn eq(&self, other: &Self) -> bool {
        pep440::compare_pep440_versions(&self.0, &other.0) == Ordering::Equal
    }
}

impl PartialOrd for Pep440Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(pep440::compare_pep440_versions(&self.0, &other.0))
    }
}
