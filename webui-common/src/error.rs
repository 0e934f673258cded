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

use std::io;

pub type WebUiResult<T> = Result<T, WebUiError>;

/// Errors raised while loading configuration or driving the tooling.
///
/// Version comparison itself never fails; malformed version strings get a
/// best-effort ordering instead.
#[derive(thiserror::Error, Debug)]
pub enum WebUiError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to process json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Common(String),
}

impl From<String> for WebUiError {
    fn from(value: String) -> Self {
        Self::Common(value)
    }
}

impl From<&str> for WebUiError {
    fn from(value: &str) -> Self {
        Self::Common(value.to_string())
    }
}

#[macro_export]
macro_rules! err_msg {
    ($($arg:tt)*) => {
        $crate::WebUiError::Common(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! err_box {
    ($($arg:tt)*) => {
        Err($crate::err_msg!($($arg)*))
    };
}

#[macro_export]
macro_rules! err_conf {
    ($($arg:tt)*) => {
        Err($crate::WebUiError::Config(format!($($arg)*)))
    };
}
