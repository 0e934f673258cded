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

mod commands;

use clap::Parser;
use commands::Commands;
use serde::Serialize;
use serde_json::Value;
use webui_common::conf::WebUiConf;
use webui_common::logger::Logger;
use webui_common::version;
use webui_common::WebUiResult;

#[derive(Parser, Debug, Serialize)]
#[command(author, version = version::VERSION, about, long_about = None)]
pub struct WebUiArgs {
    /// Configuration file path (optional)
    #[arg(
        short,
        long,
        help = "Configuration file path (optional)",
        global = true
    )]
    pub conf: Option<String>,

    /// Print results as json
    #[arg(long, help = "Print results as json", global = true)]
    pub json: bool,

    #[serde(skip_serializing)]
    #[command(subcommand)]
    command: Commands,
}

impl WebUiArgs {
    pub fn get_conf(&self) -> WebUiResult<WebUiConf> {
        WebUiConf::load(self.conf.as_deref())
    }
}

fn render(value: &Value, as_json: bool) -> WebUiResult<String> {
    if as_json {
        return Ok(serde_json::to_string_pretty(value)?);
    }

    let text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => format!("{}: {}", k, s),
                _ => format!("{}: {}", k, v),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    };
    Ok(text)
}

fn main() -> WebUiResult<()> {
    let args = WebUiArgs::parse();

    let conf = args.get_conf()?;
    Logger::init(conf.log.clone());
    log::debug!("cli args: {}", serde_json::to_string(&args)?);

    let as_json = args.json;
    let result = args
        .command
        .execute(&conf)
        .and_then(|value| render(&value, as_json));

    match &result {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Error: {}", e),
    }

    result.map(|_| ())
}
