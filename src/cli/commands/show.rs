//! Implementation of the `sender-options show` command.

use anyhow::Result;
use clap::Args;
use comfy_table::{presets, Cell, ContentArrangement, Table};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::config::{Config, KeyPolicy};
use crate::domain::models::sender::API_KEY_ENV_VAR;
use crate::domain::ports::EnvironmentPort;
use crate::services::SenderService;

/// Arguments for `show`
#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Include the API key value in the output
    #[arg(long)]
    pub reveal_key: bool,
}

/// Resolved sender configuration as reported by `show`
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    /// Sender display name
    pub display_name: String,
    /// Name of the variable the key is read from
    pub api_key_variable: String,
    /// Whether a non-empty key was found
    pub api_key_set: bool,
    /// Key length in characters
    pub api_key_length: usize,
    /// Policy the key was resolved under
    pub api_key_policy: KeyPolicy,
    /// The key itself, only with `--reveal-key`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![Cell::new("SETTING"), Cell::new("VALUE")]);

        table.add_row(vec!["display name", self.display_name.as_str()]);
        table.add_row(vec!["key variable", self.api_key_variable.as_str()]);
        table.add_row(vec![
            "key set".to_string(),
            if self.api_key_set { "yes" } else { "no" }.to_string(),
        ]);
        table.add_row(vec!["key length".to_string(), self.api_key_length.to_string()]);
        table.add_row(vec![
            "key policy".to_string(),
            self.api_key_policy.to_string(),
        ]);
        if let Some(key) = &self.api_key {
            table.add_row(vec!["api key", key.as_str()]);
        }

        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Resolve the sender configuration and describe it
pub fn run<E: EnvironmentPort>(args: &ShowArgs, service: &SenderService<E>) -> Result<ShowOutput> {
    let sender = service.resolve()?;

    Ok(ShowOutput {
        display_name: sender.display_name().to_string(),
        api_key_variable: API_KEY_ENV_VAR.to_string(),
        api_key_set: sender.has_api_key(),
        api_key_length: sender.api_key().chars().count(),
        api_key_policy: service.policy(),
        api_key: args.reveal_key.then(|| sender.api_key().to_string()),
    })
}

/// Run `show` against the process environment and print the result
pub fn execute(args: &ShowArgs, config: &Config, json_mode: bool) -> Result<()> {
    let service = SenderService::from_process(config.api_key_policy);
    let result = run(args, &service)?;
    output(&result, json_mode);
    Ok(())
}
