//! Per-workload pipeline: resolve directory → build columns → lay out grid.
//!
//! Failures stay local. An absent or malformed log turns one column into a
//! missing placeholder; an unresolved directory fails only that workload.

use std::path::Path;

use log::{error, info, warn};

use crate::decision_log::{levels::Palette, parser::parse_file};
use crate::strip_grid::layout::{ColumnSpec, Grid, StripGridRenderer};
use crate::utils::errors::{Result, VizError};
use crate::workload::{catalog::Catalog, locator::TaskLocator};

/// Columns and their grid for one workload.
#[derive(Debug, Clone)]
pub struct WorkloadView {
    pub workload: String,
    pub columns: Vec<ColumnSpec>,
    pub grid: Grid,
}

impl WorkloadView {
    pub fn build(
        workload: &str,
        locator: &dyn TaskLocator,
        catalog: &Catalog,
        palette: &Palette,
    ) -> Result<Self> {
        let task_dir = locator.locate(workload)?;
        info!("workload {}: reading logs from {}", workload, task_dir.display());

        let columns = build_columns(&task_dir, workload, catalog);
        let grid = StripGridRenderer.render(&columns, palette);
        Ok(Self { workload: workload.to_string(), columns, grid })
    }

    pub fn missing_count(&self) -> usize {
        self.columns.iter().filter(|c| c.is_missing()).count()
    }
}

/// One column per catalog algorithm, in catalog order.
pub fn build_columns(task_dir: &Path, workload: &str, catalog: &Catalog) -> Vec<ColumnSpec> {
    catalog
        .algorithms
        .iter()
        .map(|algorithm| {
            let path = catalog.task_file(task_dir, workload, algorithm);
            if !path.exists() {
                let warning = VizError::MissingColumn {
                    workload: workload.to_string(),
                    algorithm: algorithm.key.clone(),
                    path,
                };
                warn!("{}", warning);
                return ColumnSpec::missing(&algorithm.title);
            }

            match parse_file(&path) {
                Ok(trace) => ColumnSpec::present(&algorithm.title, trace),
                Err(e) => {
                    error!("{}; column {} rendered as missing", e, algorithm.title);
                    ColumnSpec::missing(&algorithm.title)
                }
            }
        })
        .collect()
}
