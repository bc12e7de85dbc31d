use crate::domain::env_file::{backend_defaults, frontend_defaults, EnvFile};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct EnvTarget {
    pub label: String,
    pub relative_path: PathBuf,
    pub file: EnvFile,
}

pub fn default_targets() -> Vec<EnvTarget> {
    vec![
        EnvTarget {
            label: "Backend".to_string(),
            relative_path: Path::new("backend").join(".env"),
            file: backend_defaults(),
        },
        EnvTarget {
            label: "Frontend".to_string(),
            relative_path: Path::new("frontend").join("trip-planner").join(".env"),
            file: frontend_defaults(),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written {
        label: String,
        path: PathBuf,
    },
    Failed {
        label: String,
        path: PathBuf,
        reason: String,
        content: String,
    },
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written { .. })
    }
}

/// Writes each target under `root`, overwriting existing files. Parent
/// directories are never created; a failed target does not stop the others.
#[derive(Debug, Clone)]
pub struct EnvBootstrapper {
    pub root: PathBuf,
    pub targets: Vec<EnvTarget>,
}

impl EnvBootstrapper {
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            targets: default_targets(),
        }
    }

    pub fn run(&self) -> Vec<WriteOutcome> {
        self.targets.iter().map(|t| self.write_target(t)).collect()
    }

    fn write_target(&self, target: &EnvTarget) -> WriteOutcome {
        let path = self.root.join(&target.relative_path);
        let content = target.file.render();

        match std::fs::write(&path, &content) {
            Ok(()) => {
                tracing::info!(env_file = %target.label, path = %path.display(), "env file written");
                WriteOutcome::Written {
                    label: target.label.clone(),
                    path,
                }
            }
            Err(e) => {
                tracing::warn!(env_file = %target.label, path = %path.display(), error = %e, "could not write env file");
                WriteOutcome::Failed {
                    label: target.label.clone(),
                    path,
                    reason: e.to_string(),
                    content,
                }
            }
        }
    }
}
