//! Implementation of the `teststub list` command.
//!
//! Scans the configured template directory and reports which suite types
//! have a template available, i.e. which `--type` values `gen` will accept
//! without warning.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Suffix that marks a file in the template directory as a suite template.
const TEMPLATE_SUFFIX: &str = ".test.template.ts";

#[derive(Debug, Serialize)]
struct SuiteEntry {
    suite_type: String,
    template_file: String,
    is_default: bool,
}

/// Execute the `teststub list` command.
#[instrument(skip_all)]
pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let scaffold_config = config.scaffold_config();
    let dir = &scaffold_config.template_dir;

    if !dir.exists() {
        return Err(CliError::TemplateDirMissing { path: dir.clone() });
    }

    let entries = scan_templates(dir, &config.test_scaffold.default_suite_types)?;
    debug!(count = entries.len(), "Templates discovered");

    match args.format {
        ListFormat::Table => render_table(&entries, dir, &output)?,
        ListFormat::List => {
            for entry in &entries {
                output.print(&entry.suite_type)?;
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).map_err(|e| CliError::ConfigError {
                message: format!("could not serialise template list: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(&json)?;
        }
    }

    Ok(())
}

/// Collect `<type>.test.template.ts` files, sorted by suite type.
fn scan_templates(dir: &Path, defaults: &[String]) -> CliResult<Vec<SuiteEntry>> {
    let mut entries = Vec::new();

    for dirent in std::fs::read_dir(dir)? {
        let dirent = dirent?;
        let file_name = dirent.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(suite_type) = name.strip_suffix(TEMPLATE_SUFFIX) else {
            continue;
        };
        if suite_type.is_empty() {
            continue;
        }
        entries.push(SuiteEntry {
            suite_type: suite_type.to_string(),
            template_file: name.to_string(),
            is_default: defaults.iter().any(|d| d == suite_type),
        });
    }

    entries.sort_by(|a, b| a.suite_type.cmp(&b.suite_type));
    Ok(entries)
}

fn render_table(entries: &[SuiteEntry], dir: &Path, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("Templates in {}", dir.display()))?;

    if entries.is_empty() {
        output.info("No templates found. Run 'teststub init' to create starters.")?;
        return Ok(());
    }

    for entry in entries {
        let marker = if entry.is_default { " (default)" } else { "" };
        output.print(&format!(
            "  {:<14} {}{}",
            entry.suite_type, entry.template_file, marker
        ))?;
    }

    Ok(())
}
