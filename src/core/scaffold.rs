use std::fs;
use std::path::{Path, PathBuf};

use crate::core::template;
use crate::domain::model::{ScaffoldPlan, ScaffoldReport};
use crate::utils::error::{Result, ScaffoldError};

/// Writes one day's files under the root of a puzzle crate.
pub struct Scaffolder {
    root: PathBuf,
}

impl Scaffolder {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn stub_exists(&self, plan: &ScaffoldPlan) -> bool {
        self.root.join(&plan.stub_path).exists()
    }

    pub fn generate(&self, plan: &ScaffoldPlan) -> Result<ScaffoldReport> {
        // Never overwrite an existing stub; it likely holds hand-written work.
        if self.stub_exists(plan) {
            return Err(ScaffoldError::StubExistsError {
                path: plan.stub_path.clone(),
            });
        }

        let mut report = ScaffoldReport::default();

        // Inputs first, stub last, so an interrupted run never leaves a stub
        // behind that would block a retry.
        for input_path in self.missing_inputs(plan) {
            self.write_file(&input_path, "")?;
            report.created.push(input_path);
        }

        let stub = template::render_stub(plan.day, plan.with_tests);
        self.write_file(&plan.stub_path, &stub)?;
        report.created.push(plan.stub_path.clone());

        tracing::info!("Scaffolded {} ({} files)", plan.day, report.created.len());
        Ok(report)
    }

    /// Root-relative paths a run would create, in write order. Callers check
    /// `stub_exists` first; an existing stub refuses the whole run.
    pub fn pending_paths(&self, plan: &ScaffoldPlan) -> Vec<PathBuf> {
        let mut pending = self.missing_inputs(plan);
        pending.push(plan.stub_path.clone());
        pending
    }

    // Input files may already hold pasted puzzle data; only create missing ones.
    fn missing_inputs(&self, plan: &ScaffoldPlan) -> Vec<PathBuf> {
        let mut missing = Vec::new();
        for path in std::iter::once(&plan.input_path).chain(plan.test_input_path.as_ref()) {
            if self.root.join(path).exists() {
                tracing::debug!(
                    "Input file {} already exists, leaving it untouched",
                    path.display()
                );
            } else {
                missing.push(path.clone());
            }
        }
        missing
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        let full_path = self.root.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::IoError {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        tracing::debug!("Writing {}", full_path.display());
        fs::write(&full_path, contents).map_err(|source| ScaffoldError::IoError {
            path: full_path.clone(),
            source,
        })
    }
}
