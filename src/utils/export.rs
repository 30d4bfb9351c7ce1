//! Timeline export: one CSV row per rendered strip cell.
//!
//! `workload,algorithm,metric,step,level`. Missing columns and columns whose
//! sequences disagree in length emit nothing; the grid shows those as missing too.

use std::{
    fs::{File, create_dir_all},
    io::{BufWriter, Write},
    path::Path,
};

use csv::Writer;
use log::info;
use serde::Serialize;

use crate::strip_grid::layout::Metric;
use crate::utils::errors::Result;
use crate::workload::view::WorkloadView;

#[derive(Debug, Serialize)]
struct TimelineRow<'a> {
    workload: &'a str,
    algorithm: &'a str,
    metric: &'static str,
    step: usize,
    level: usize,
}

/// Serializes every present column of `views` into `out`. Returns the row count.
pub fn write_timeline<W: Write>(views: &[WorkloadView], out: W) -> Result<usize> {
    let mut wtr = Writer::from_writer(out);
    let mut rows = 0usize;

    for view in views {
        for column in &view.columns {
            let Some(trace) = column.trace.as_ref().filter(|t| t.uniform_len().is_some()) else {
                continue;
            };
            for metric in Metric::ROWS {
                for (step, level) in metric.levels(trace).iter().enumerate() {
                    wtr.serialize(TimelineRow {
                        workload: &view.workload,
                        algorithm: &column.title,
                        metric: metric.label(),
                        step,
                        level: level.index(),
                    })?;
                    rows += 1;
                }
            }
        }
    }

    wtr.flush()?;
    Ok(rows)
}

/// Writes `timeline.csv` under `out_dir`.
pub fn export_timeline(views: &[WorkloadView], out_dir: &Path) -> Result<()> {
    create_dir_all(out_dir)?;
    let path = out_dir.join("timeline.csv");
    let rows = write_timeline(views, BufWriter::new(File::create(&path)?))?;
    info!("Timeline exported to {:?} ({} rows)", path, rows);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision_log::{
        levels::{Level, Palette},
        parser::DecisionTrace,
    };
    use crate::strip_grid::layout::{ColumnSpec, StripGridRenderer};

    fn view(columns: Vec<ColumnSpec>) -> WorkloadView {
        let grid = StripGridRenderer.render(&columns, &Palette::default());
        WorkloadView { workload: "0.3".into(), columns, grid }
    }

    #[test]
    fn rows_cover_present_columns_only() {
        let trace = DecisionTrace {
            cpu: vec![Level::new(2).unwrap(), Level::DARKEST],
            mem: vec![Level::DARKEST, Level::LIGHTEST],
            offload: vec![Level::LIGHTEST, Level::DARKEST],
        };
        let views = [view(vec![ColumnSpec::present("DVS", trace), ColumnSpec::missing("Baseline")])];

        let mut buf = Vec::new();
        let rows = write_timeline(&views, &mut buf).unwrap();
        assert_eq!(rows, 6);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "workload,algorithm,metric,step,level");
        assert_eq!(lines[1], "0.3,DVS,CPU,0,2");
        assert_eq!(lines[4], "0.3,DVS,MEM,1,3");
        assert_eq!(lines[5], "0.3,DVS,OFFLOADING,0,3");
        assert!(!text.contains("Baseline"));
    }

    #[test]
    fn rows_match_grid_strips() {
        use crate::strip_grid::layout::CellBody;

        let good = DecisionTrace {
            cpu: vec![Level::new(1).unwrap(); 4],
            mem: vec![Level::DARKEST; 4],
            offload: vec![Level::LIGHTEST; 4],
        };
        let uneven = DecisionTrace {
            cpu: vec![Level::DARKEST; 3],
            mem: vec![Level::DARKEST; 2],
            offload: vec![Level::DARKEST; 3],
        };
        let views = [view(vec![
            ColumnSpec::present("CO-DMO", good),
            ColumnSpec::present("CO-DMO-CT", uneven),
        ])];

        let strip_units: usize = views[0]
            .grid
            .cells()
            .iter()
            .map(|cell| match &cell.body {
                CellBody::Strip { fills } => fills.len(),
                CellBody::Disabled => 0,
            })
            .sum();

        let mut buf = Vec::new();
        let rows = write_timeline(&views, &mut buf).unwrap();
        assert_eq!(rows, strip_units);
        assert_eq!(rows, 12);
        assert!(!String::from_utf8(buf).unwrap().contains("CO-DMO-CT"));
    }
}
