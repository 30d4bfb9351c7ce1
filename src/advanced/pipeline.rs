//! End-to-end run: every catalog workload → figure → report (+ optional CSV).
//!
//! Workloads are processed one after another. A workload that fails to
//! resolve or render is recorded as "no data" and the run moves on.

use std::path::PathBuf;

use log::{error, info, warn};

use crate::advanced::report::{WorkloadOutcome, figure_name, write_report};
use crate::decision_log::levels::Palette;
use crate::strip_grid::plot::{FIGURE_EXTENSION, FigureStyle, render_to_file};
use crate::utils::{
    errors::{Result, VizError},
    export::export_timeline,
};
use crate::workload::{catalog::Catalog, locator::TaskLocator, view::WorkloadView};

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub out_dir: PathBuf,
    pub export_csv: bool,
    pub style: FigureStyle,
    pub palette: Palette,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("report"),
            export_csv: false,
            style: FigureStyle::default(),
            palette: Palette::default(),
        }
    }
}

/// Renders every workload in `catalog` and writes the report.
pub fn generate_report(
    catalog: &Catalog,
    locator: &dyn TaskLocator,
    config: &ReportConfig,
) -> Result<Vec<WorkloadOutcome>> {
    std::fs::create_dir_all(&config.out_dir)?;

    let mut outcomes = Vec::with_capacity(catalog.workloads.len());
    let mut views = Vec::new();

    for workload in &catalog.workloads {
        let view = match WorkloadView::build(workload, locator, catalog, &config.palette) {
            Ok(view) => view,
            Err(e @ VizError::DirectoryNotFound { .. }) => {
                warn!("No data found for workload {}: {}", workload, e);
                outcomes.push(WorkloadOutcome::NoData { workload: workload.clone() });
                continue;
            }
            Err(e) => {
                error!("workload {} skipped: {}", workload, e);
                outcomes.push(WorkloadOutcome::NoData { workload: workload.clone() });
                continue;
            }
        };

        let figure = figure_name(workload, FIGURE_EXTENSION);
        if let Err(e) = render_to_file(&view.grid, &config.out_dir.join(&figure), &config.style) {
            error!("failed to render workload {}: {}", workload, e);
            outcomes.push(WorkloadOutcome::NoData { workload: workload.clone() });
            continue;
        }

        info!(
            "workload {}: {} ({} of {} columns missing)",
            workload,
            figure,
            view.missing_count(),
            view.columns.len()
        );
        outcomes.push(WorkloadOutcome::Rendered {
            workload: workload.clone(),
            figure,
            missing_columns: view.missing_count(),
        });
        views.push(view);
    }

    if config.export_csv {
        export_timeline(&views, &config.out_dir)?;
    }
    write_report(&outcomes, &config.palette, &config.out_dir)?;
    Ok(outcomes)
}
