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

//! Version handling for the console.
//!
//! The manager reports its version as a PEP 440 string (`"24.12.0"`,
//! `"25.15.0rc1"`); features are enabled only when that version reaches a
//! configured minimum.
//!
//! # Version Format
//!
//! Comparison follows PEP 440 with loose separators:
//! `dev < a < b < c < rc < (release) < post`, local versions after `+` only
//! break ties, and a `*` segment matches anything from that position on.
//!
//! # Compatibility Policy
//!
//! - **Single minimum**: manager version must be `>=` the minimum
//! - **Per release line**: the minimum on the manager's `major.minor` line
//!   applies, falling back to the highest minimum
//!
//! # Example
//!
//! ```rust
//! use webui_common::conf::FeatureConf;
//! use webui_common::version::{VersionChecker, VersionRequirement};
//!
//! let mut features = FeatureConf::default();
//! features.insert("model-store", VersionRequirement::any_of(["24.09.1", "24.03.7"]));
//!
//! let checker = VersionChecker::new("24.03.8", features);
//! assert!(checker.supports("model-store"));
//! ```

mod checker;
mod compatibility;
pub mod pep440;
mod types;

pub use checker::VersionChecker;
pub use compatibility::{CompatibilityResult, IncompatibilityReason, VersionRequirement};
pub use pep440::{
    compare_pep440_versions, is_compatible_multiple_conditions, normalize_pep440_version,
    remove_after_minor_version,
};
pub use types::Pep440Version;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
