//! Scaffold Engine - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the feature slug
//! 2. Resolve (and, with confirmation, create) the feature folder
//! 3. Resolve the set of suite types
//! 4. Per suite type: load template, substitute, write-guard, write
//! 5. Assemble the final report
//!
//! Per-type failures are contained inside the loop: a missing template or a
//! failed write warns and moves on; the batch always completes once it
//! starts. Only slug validation, folder-creation failure, and user decline
//! stop the call.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Confirm, Filesystem},
    },
    domain::{
        FeatureSlug, ScaffoldConfig, ScaffoldOptions, ScaffoldReport, SuiteType,
        substitution::{
            insert_todo_marker, materialize_marker, render_file_name, substitute_placeholders,
        },
    },
    error::StubResult,
};

/// Root directory under which feature folders live.
const FEATURES_DIR: &str = "features";

/// Directory inside a feature folder that receives generated tests.
const TESTS_DIR: &str = "__tests__";

/// Main scaffolding service.
///
/// Orchestrates feature-folder resolution, template substitution, and
/// write-guarded output through the injected ports.
pub struct ScaffoldEngine {
    filesystem: Box<dyn Filesystem>,
    confirm: Box<dyn Confirm>,
}

impl ScaffoldEngine {
    /// Create a new scaffold engine with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, confirm: Box<dyn Confirm>) -> Self {
        Self { filesystem, confirm }
    }

    /// Scaffold test stubs for one feature.
    ///
    /// This is the main use case. Returns `Err` only for an invalid slug or
    /// a failed feature-folder creation; a user decline yields an `Ok`
    /// report with `aborted: true`.
    #[instrument(
        skip_all,
        fields(feature = %feature, dry_run = options.dry_run, force = options.force)
    )]
    pub fn scaffold(
        &self,
        feature: &str,
        options: &ScaffoldOptions,
        config: &ScaffoldConfig,
    ) -> StubResult<ScaffoldReport> {
        // 1. Validate slug before touching the filesystem.
        let slug = FeatureSlug::parse(feature)?;

        if options.all {
            debug!("--all given; suite resolution falls back to defaults regardless");
        }

        // 2. Resolve the feature folder.
        let feature_path = Path::new(FEATURES_DIR).join(slug.as_str());
        match self.resolve_feature_folder(&feature_path, options)? {
            FolderResolution::Ready => {}
            FolderResolution::Declined => {
                info!(path = %feature_path.display(), "User declined folder creation, aborting");
                return Ok(ScaffoldReport::aborted(feature_path));
            }
        }

        // 3. Resolve suite types. An empty override means "no override".
        let suites: Vec<SuiteType> = if options.types.is_empty() {
            config.default_suite_types.clone()
        } else {
            options.types.clone()
        };
        debug!(count = suites.len(), "Suite types resolved");

        // 4. Process each suite type independently, in order.
        let mut files_created: Vec<PathBuf> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        for suite in &suites {
            self.process_suite(
                suite,
                &slug,
                &feature_path,
                options,
                config,
                &mut files_created,
                &mut warnings,
            );
        }

        // 5. Reaching this point is a success regardless of per-type warnings.
        info!(
            files = files_created.len(),
            warnings = warnings.len(),
            "Scaffold completed"
        );
        Ok(ScaffoldReport {
            success: true,
            aborted: false,
            files_created,
            feature_path,
            suites,
            warnings,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Ensure the feature folder exists, prompting for creation if needed.
    fn resolve_feature_folder(
        &self,
        feature_path: &Path,
        options: &ScaffoldOptions,
    ) -> StubResult<FolderResolution> {
        if self.filesystem.exists(feature_path) {
            debug!(path = %feature_path.display(), "Feature folder exists");
            return Ok(FolderResolution::Ready);
        }

        if options.dry_run {
            // Proceed as if it existed so the rest of the run can be previewed.
            info!(
                path = %feature_path.display(),
                "Dry run: would create feature folder"
            );
            return Ok(FolderResolution::Ready);
        }

        let confirmed = if options.assume_yes {
            true
        } else {
            self.confirm.confirm(
                &format!(
                    "Feature folder '{}' does not exist. Create it?",
                    feature_path.display()
                ),
                true,
            )?
        };

        if !confirmed {
            return Ok(FolderResolution::Declined);
        }

        self.filesystem
            .create_dir_all(feature_path)
            .map_err(|e| ApplicationError::FolderCreation {
                path: feature_path.to_path_buf(),
                reason: e.to_string(),
            })?;
        info!(path = %feature_path.display(), "Feature folder created");
        Ok(FolderResolution::Ready)
    }

    /// Handle one suite type end to end. Never fails the batch.
    #[allow(clippy::too_many_arguments)]
    fn process_suite(
        &self,
        suite: &SuiteType,
        slug: &FeatureSlug,
        feature_path: &Path,
        options: &ScaffoldOptions,
        config: &ScaffoldConfig,
        files_created: &mut Vec<PathBuf>,
        warnings: &mut Vec<String>,
    ) {
        // a. Template discovery by naming convention.
        let template_path = config.template_dir.join(suite.template_file_name());
        if !self.filesystem.exists(&template_path) {
            let msg = format!(
                "no template for suite type '{suite}' at {}",
                template_path.display()
            );
            warn!("Skipping: {msg}");
            warnings.push(msg);
            return;
        }

        // b. Template read.
        let template = match self.filesystem.read_to_string(&template_path) {
            Ok(text) => text,
            Err(e) => {
                let msg = format!("could not read template for '{suite}': {e}");
                warn!("Skipping: {msg}");
                warnings.push(msg);
                return;
            }
        };

        // c–e. Pure substitution pipeline.
        let substituted = substitute_placeholders(&template, slug, &config.import_path_pattern);
        let marker = materialize_marker(&config.todo_marker_template, slug);
        let content = insert_todo_marker(&substituted, &marker);

        // f. Target path derivation.
        let file_name = render_file_name(&config.file_naming_pattern, slug, suite);
        let target = feature_path.join(TESTS_DIR).join(file_name);

        // g. Write-guard.
        let target_exists = self.filesystem.exists(&target);

        if options.dry_run {
            if target_exists && !options.force {
                info!(path = %target.display(), "Dry run: exists, would be skipped");
            } else if target_exists {
                info!(path = %target.display(), "Dry run: would overwrite");
            } else {
                info!(path = %target.display(), "Dry run: would create");
            }
            // Dry-run reports intended, not actual, effects.
            files_created.push(target);
            return;
        }

        if target_exists && !options.force {
            info!(path = %target.display(), "Exists, skipping (use --force to overwrite)");
            return;
        }

        if let Err(e) = self.write_target(&target, &content) {
            let msg = format!("failed to write {} for '{suite}': {e}", target.display());
            warn!("{msg}");
            warnings.push(msg);
            return;
        }

        info!(path = %target.display(), "Test stub written");
        files_created.push(target);
    }

    /// Ensure the `__tests__` directory exists, then write the file.
    fn write_target(&self, target: &Path, content: &str) -> StubResult<()> {
        if let Some(parent) = target.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(target, content)
    }
}

enum FolderResolution {
    Ready,
    Declined,
}
