//! Ordered configuration table: which workloads get a view and which
//! algorithms become columns, in display order.

use std::path::{Path, PathBuf};

/// Workload labels, one decimal place.
pub const DEFAULT_WORKLOADS: &[&str] = &["0.1", "0.2", "0.3", "0.4", "0.5", "0.6", "0.7", "0.8", "0.9"];

/// Task count encoded in every log file name.
pub const DEFAULT_TASK_TAG: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Algorithm {
    /// File-name key, e.g. `co-dmo-ct`.
    pub key: String,
    /// Column header, e.g. `CO-DMO-CT`.
    pub title: String,
}

impl Algorithm {
    pub fn new(key: &str, title: &str) -> Self {
        Self { key: key.to_string(), title: title.to_string() }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub workloads: Vec<String>,
    pub algorithms: Vec<Algorithm>,
    pub task_tag: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            workloads: DEFAULT_WORKLOADS.iter().map(|w| w.to_string()).collect(),
            algorithms: vec![
                Algorithm::new("co-dmo-ct", "CO-DMO-CT"),
                Algorithm::new("co-dmo", "CO-DMO"),
                Algorithm::new("offloading", "Offloading"),
                Algorithm::new("dvs", "DVS"),
                Algorithm::new("baseline", "Baseline"),
            ],
            task_tag: DEFAULT_TASK_TAG,
        }
    }
}

impl Catalog {
    /// Restricts the workload list, keeping the caller's order.
    pub fn with_workloads<I, S>(mut self, workloads: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.workloads = workloads.into_iter().map(Into::into).collect();
        self
    }

    /// `task_<w>+<tag>+<algorithm>.txt`
    pub fn task_file_name(&self, workload: &str, algorithm: &Algorithm) -> String {
        format!("task_{}+{}+{}.txt", workload, self.task_tag, algorithm.key)
    }

    pub fn task_file(&self, task_dir: &Path, workload: &str, algorithm: &Algorithm) -> PathBuf {
        task_dir.join(self.task_file_name(workload, algorithm))
    }
}
