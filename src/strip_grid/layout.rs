//! Strip grid layout: 3 metric rows × one column per algorithm.
//!
//! Pure position → color mapping. The renderer never aggregates or filters; a
//! present column becomes three strips, a missing or inconsistent column
//! becomes three disabled cells under a `"<title> (missing)"` header.

use log::warn;
use plotters::style::RGBColor;

use crate::decision_log::{
    levels::{Level, Palette},
    parser::DecisionTrace,
};
use crate::utils::errors::VizError;

/// Metric rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cpu,
    Mem,
    Offload,
}

impl Metric {
    pub const ROWS: [Metric; 3] = [Metric::Cpu, Metric::Mem, Metric::Offload];

    pub fn row(self) -> usize {
        self as usize
    }

    /// Row label drawn left of the first column.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Cpu => "CPU",
            Metric::Mem => "MEM",
            Metric::Offload => "OFFLOADING",
        }
    }

    pub fn levels(self, trace: &DecisionTrace) -> &[Level] {
        match self {
            Metric::Cpu => &trace.cpu,
            Metric::Mem => &trace.mem,
            Metric::Offload => &trace.offload,
        }
    }
}

pub const GRID_ROWS: usize = Metric::ROWS.len();

/// One (workload, algorithm) column as handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub title: String,
    pub trace: Option<DecisionTrace>,
}

impl ColumnSpec {
    pub fn present(title: impl Into<String>, trace: DecisionTrace) -> Self {
        Self { title: title.into(), trace: Some(trace) }
    }

    pub fn missing(title: impl Into<String>) -> Self {
        Self { title: title.into(), trace: None }
    }

    pub fn is_missing(&self) -> bool {
        self.trace.is_none()
    }

    pub fn missing_header(&self) -> String {
        format!("{} (missing)", self.title)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellBody {
    /// `fills[i]` is the palette shade of step `i`.
    Strip { fills: Vec<RGBColor> },
    Disabled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub metric: Metric,
    pub col: usize,
    pub header: Option<String>,
    pub row_label: Option<&'static str>,
    pub body: CellBody,
}

/// Row-major cells, `GRID_ROWS * columns` of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    columns: usize,
    cells: Vec<GridCell>,
}

impl Grid {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        GRID_ROWS
    }

    pub fn cell(&self, metric: Metric, col: usize) -> Option<&GridCell> {
        if col >= self.columns {
            return None;
        }
        self.cells.get(metric.row() * self.columns + col)
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StripGridRenderer;

impl StripGridRenderer {
    pub fn render(&self, columns: &[ColumnSpec], palette: &Palette) -> Grid {
        let mut by_column: Vec<[GridCell; GRID_ROWS]> = Vec::with_capacity(columns.len());

        for (col, column) in columns.iter().enumerate() {
            let trace = match column.trace.as_ref().map(|t| checked(&column.title, t)) {
                Some(Ok(trace)) => Some(trace),
                Some(Err(e)) => {
                    warn!("rendering column as missing: {}", e);
                    None
                }
                None => None,
            };
            by_column.push(Metric::ROWS.map(|metric| layout_cell(column, trace, metric, col, palette)));
        }

        // transpose to row-major
        let mut cells = Vec::with_capacity(GRID_ROWS * columns.len());
        for metric in Metric::ROWS {
            cells.extend(by_column.iter().map(|c| c[metric.row()].clone()));
        }

        Grid { columns: columns.len(), cells }
    }
}

fn checked<'a>(title: &str, trace: &'a DecisionTrace) -> Result<&'a DecisionTrace, VizError> {
    trace.uniform_len().map(|_| trace).ok_or_else(|| VizError::ColumnLengthMismatch {
        title: title.to_string(),
        cpu: trace.cpu.len(),
        mem: trace.mem.len(),
        offload: trace.offload.len(),
    })
}

fn layout_cell(
    column: &ColumnSpec,
    trace: Option<&DecisionTrace>,
    metric: Metric,
    col: usize,
    palette: &Palette,
) -> GridCell {
    let header = match (metric, trace) {
        (Metric::Cpu, Some(_)) => Some(column.title.clone()),
        (Metric::Cpu, None) => Some(column.missing_header()),
        _ => None,
    };

    let body = match trace {
        Some(trace) => {
            let fills = metric.levels(trace).iter().map(|&l| palette.shade(l)).collect();
            CellBody::Strip { fills }
        }
        None => CellBody::Disabled,
    };

    GridCell {
        metric,
        col,
        header,
        row_label: (col == 0).then(|| metric.label()),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision_log::parser::parse_reader;
    use std::{io::Cursor, path::Path};

    fn example_trace() -> DecisionTrace {
        parse_reader(Cursor::new("# header comment\n0 2 1 1\n1 0 0 0\n"), Path::new("example")).unwrap()
    }

    fn fills(grid: &Grid, metric: Metric, col: usize) -> Vec<RGBColor> {
        match &grid.cell(metric, col).unwrap().body {
            CellBody::Strip { fills, .. } => fills.clone(),
            CellBody::Disabled => panic!("cell disabled"),
        }
    }

    #[test]
    fn single_present_column_maps_levels_to_shades() {
        let p = Palette::grayscale();
        let shade = |raw| p.shade(Level::new(raw).unwrap());
        let grid = StripGridRenderer.render(&[ColumnSpec::present("CO-DMO", example_trace())], &p);

        assert_eq!((grid.rows(), grid.columns()), (3, 1));
        assert_eq!(fills(&grid, Metric::Cpu, 0), vec![shade(2), shade(0)]);
        assert_eq!(fills(&grid, Metric::Mem, 0), vec![shade(0), shade(3)]);
        assert_eq!(fills(&grid, Metric::Offload, 0), vec![shade(3), shade(0)]);

        assert_eq!(grid.cell(Metric::Cpu, 0).unwrap().header.as_deref(), Some("CO-DMO"));
        assert_eq!(grid.cell(Metric::Mem, 0).unwrap().header, None);
        assert_eq!(grid.cell(Metric::Offload, 0).unwrap().header, None);
    }

    #[test]
    fn missing_column_is_disabled_with_marker() {
        let columns = [
            ColumnSpec::present("DVS", example_trace()),
            ColumnSpec::missing("Baseline"),
        ];
        let grid = StripGridRenderer.render(&columns, &Palette::default());

        for metric in Metric::ROWS {
            assert_eq!(grid.cell(metric, 1).unwrap().body, CellBody::Disabled);
        }
        assert_eq!(
            grid.cell(Metric::Cpu, 1).unwrap().header.as_deref(),
            Some("Baseline (missing)")
        );
        assert!(matches!(grid.cell(Metric::Cpu, 0).unwrap().body, CellBody::Strip { .. }));
    }

    #[test]
    fn missing_layout_is_identical_across_renders() {
        let columns = [ColumnSpec::missing("Baseline"), ColumnSpec::present("DVS", example_trace())];
        let renderer = StripGridRenderer;
        let first = renderer.render(&columns, &Palette::default());
        let second = renderer.render(&columns, &Palette::default());
        assert_eq!(first, second);
    }

    #[test]
    fn row_labels_only_on_leftmost_column() {
        let columns = [
            ColumnSpec::missing("A"),
            ColumnSpec::present("B", example_trace()),
            ColumnSpec::present("C", example_trace()),
        ];
        let grid = StripGridRenderer.render(&columns, &Palette::default());
        for metric in Metric::ROWS {
            assert_eq!(grid.cell(metric, 0).unwrap().row_label, Some(metric.label()));
            assert_eq!(grid.cell(metric, 1).unwrap().row_label, None);
            assert_eq!(grid.cell(metric, 2).unwrap().row_label, None);
        }
    }

    #[test]
    fn cell_color_depends_only_on_its_level() {
        let p = Palette::grayscale();
        let short = DecisionTrace {
            cpu: vec![Level::new(1).unwrap()],
            mem: vec![Level::DARKEST],
            offload: vec![Level::DARKEST],
        };
        let long = DecisionTrace {
            cpu: [3, 1, 0, 1, 2].iter().map(|&r| Level::new(r).unwrap()).collect(),
            mem: vec![Level::DARKEST; 5],
            offload: vec![Level::LIGHTEST; 5],
        };
        let grid = StripGridRenderer.render(
            &[ColumnSpec::present("short", short), ColumnSpec::present("long", long)],
            &p,
        );

        let one = p.shade(Level::new(1).unwrap());
        assert_eq!(fills(&grid, Metric::Cpu, 0)[0], one);
        let long_cpu = fills(&grid, Metric::Cpu, 1);
        assert_eq!(long_cpu[1], one);
        assert_eq!(long_cpu[3], one);
        assert_eq!(long_cpu.len(), 5);
    }

    #[test]
    fn length_mismatch_renders_as_missing() {
        let bad = DecisionTrace {
            cpu: vec![Level::DARKEST; 3],
            mem: vec![Level::DARKEST; 2],
            offload: vec![Level::DARKEST; 3],
        };
        let grid = StripGridRenderer.render(&[ColumnSpec::present("CO-DMO-CT", bad)], &Palette::default());
        assert_eq!(grid.cell(Metric::Mem, 0).unwrap().body, CellBody::Disabled);
        assert_eq!(
            grid.cell(Metric::Cpu, 0).unwrap().header.as_deref(),
            Some("CO-DMO-CT (missing)")
        );
        // row labels survive on a rejected leftmost column
        assert_eq!(grid.cell(Metric::Offload, 0).unwrap().row_label, Some("OFFLOADING"));
    }

    #[test]
    fn empty_column_list_gives_empty_grid() {
        let grid = StripGridRenderer.render(&[], &Palette::default());
        assert_eq!(grid.columns(), 0);
        assert!(grid.cells().is_empty());
        assert!(grid.cell(Metric::Cpu, 0).is_none());
    }
}
