//! Task directory discovery.

use std::path::PathBuf;

use glob::glob;
use log::{debug, warn};

use crate::utils::errors::{Result, VizError};

/// Resolves a workload label to the directory holding its task logs.
pub trait TaskLocator {
    fn locate(&self, workload: &str) -> Result<PathBuf>;
}

/// Matches `<root>/output_<w>+*/task` and takes the first hit.
#[derive(Debug, Clone)]
pub struct GlobLocator {
    root: PathBuf,
}

impl GlobLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn pattern(&self, workload: &str) -> String {
        let escaped_root = glob::Pattern::escape(&self.root.to_string_lossy());
        format!("{}/output_{}+*/task", escaped_root, glob::Pattern::escape(workload))
    }
}

impl TaskLocator for GlobLocator {
    fn locate(&self, workload: &str) -> Result<PathBuf> {
        let pattern = self.pattern(workload);
        let entries = glob(&pattern).map_err(|e| VizError::Pattern(format!("{pattern}: {e}")))?;

        // glob yields paths in alphabetical order
        for entry in entries {
            match entry {
                Ok(path) if path.is_dir() => {
                    debug!("workload {} -> {}", workload, path.display());
                    return Ok(path);
                }
                Ok(_) => {}
                Err(e) => warn!("skipping unreadable entry while locating workload {}: {}", workload, e),
            }
        }

        Err(VizError::DirectoryNotFound { workload: workload.to_string() })
    }
}
