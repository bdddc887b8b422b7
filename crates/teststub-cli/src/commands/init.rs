//! Implementation of the `teststub init` command.
//!
//! Seeds the working directory with a `teststub.toml` and the built-in
//! starter templates, so `teststub gen` works out of the box. Existing
//! files are left alone unless `--force` is given.

use std::path::Path;

use tracing::{info, instrument};

use teststub_adapters::builtin_templates::all_templates;

use crate::{
    cli::{InitArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

const CONFIG_FILE: &str = "teststub.toml";

/// Execute the `teststub init` command.
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.header("Initialising teststub")?;

    write_config_file(&args, &output)?;
    write_starter_templates(&args, &config, &output)?;

    output.print("")?;
    output.success("Done. Try: teststub gen <feature> --dry-run")?;
    Ok(())
}

/// Write `teststub.toml` with the default settings spelled out.
fn write_config_file(args: &InitArgs, output: &OutputManager) -> CliResult<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !args.force {
        output.info(&format!("{CONFIG_FILE} already exists, skipping (use --force to overwrite)"))?;
        return Ok(());
    }

    let defaults = AppConfig::default();
    let text = toml::to_string_pretty(&defaults).map_err(|e| CliError::ConfigError {
        message: format!("could not serialise default configuration: {e}"),
        source: Some(Box::new(e)),
    })?;

    std::fs::write(path, text)?;
    info!(path = %path.display(), "Configuration file written");
    output.success(&format!("Wrote {CONFIG_FILE}"))?;
    Ok(())
}

/// Seed the template directory with one starter template per default
/// suite type. On-disk copies become the source of truth afterwards.
fn write_starter_templates(
    args: &InitArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let dir = &config.test_scaffold.template_dir;
    std::fs::create_dir_all(dir)?;

    for template in all_templates() {
        let path = dir.join(format!("{}.test.template.ts", template.suite_type));
        if path.exists() && !args.force {
            output.info(&format!("{} already exists, skipping", path.display()))?;
            continue;
        }
        std::fs::write(&path, template.content)?;
        info!(path = %path.display(), "Starter template written");
        output.success(&format!("Wrote {}", path.display()))?;
    }

    Ok(())
}
