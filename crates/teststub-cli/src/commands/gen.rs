//! Implementation of the `teststub gen` command.
//!
//! Responsibility: translate CLI arguments into [`ScaffoldOptions`], call
//! the core scaffold engine, and display the resulting report. No
//! scaffolding logic lives here.

use tracing::{debug, info, instrument};

use teststub_adapters::{LocalFilesystem, PresetConfirm, StdinConfirm};
use teststub_core::{
    application::{ScaffoldEngine, ports::Confirm},
    domain::{ScaffoldOptions, SuiteType},
};

use crate::{
    cli::{GenArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `teststub gen` command.
///
/// Dispatch sequence:
/// 1. Resolve options from CLI flags
/// 2. Check the template directory exists at all
/// 3. Run the scaffold engine (it validates the slug and prompts if needed)
/// 4. Render the report
#[instrument(skip_all, fields(feature = %args.feature))]
pub fn execute(
    args: GenArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. CLI flags → engine options. Requested types are passed through
    //    verbatim; the engine falls back to configured defaults when the
    //    list is empty.
    let options = ScaffoldOptions {
        dry_run: args.dry_run,
        force: args.force,
        all: args.all,
        types: args.types.into_iter().map(SuiteType::new).collect(),
        assume_yes: args.yes,
    };

    if args.all && !options.types.is_empty() {
        output.info("--all has no effect when --type is given")?;
    }

    let scaffold_config = config.scaffold_config();
    debug!(
        template_dir = %scaffold_config.template_dir.display(),
        types = options.types.len(),
        "Options resolved"
    );

    // 2. A wholly absent template directory would only produce one warning
    //    per suite type; fail early with a pointer to `init` instead.
    if !scaffold_config.template_dir.exists() {
        return Err(CliError::TemplateDirMissing {
            path: scaffold_config.template_dir,
        });
    }

    // 3. Wire the production adapters. In quiet mode there is no terminal
    //    conversation to have, so the prompt resolves to its default (yes).
    let confirm: Box<dyn Confirm> = if args.yes || global.quiet {
        Box::new(PresetConfirm::always_yes())
    } else {
        Box::new(StdinConfirm::new())
    };
    let engine = ScaffoldEngine::new(Box::new(LocalFilesystem::new()), confirm);

    info!(dry_run = args.dry_run, "Scaffold started");
    let report = engine.scaffold(&args.feature, &options, &scaffold_config)?;

    // 4. Render.
    if report.aborted {
        output.print("Aborted. No changes were made.")?;
        return Err(CliError::Cancelled);
    }

    for warning in &report.warnings {
        output.warning(warning)?;
    }

    if args.dry_run {
        output.header(&format!(
            "Dry run for '{}' ({})",
            args.feature,
            report.feature_path.display()
        ))?;
        for path in &report.files_created {
            output.print(&format!("  would create {}", path.display()))?;
        }
    } else {
        for path in &report.files_created {
            output.success(&format!("Created {}", path.display()))?;
        }
    }

    if report.files_created.is_empty() {
        output.info("No test stub files were created")?;
    } else if !args.dry_run {
        output.success(&format!(
            "Scaffolded {} test stub(s) for '{}'",
            report.files_created.len(),
            args.feature
        ))?;
    }

    Ok(())
}
