//! Drawing contract between the grid layout and whatever surface renders it.

use plotters::style::RGBColor;

use crate::strip_grid::layout::{CellBody, Grid};
use crate::utils::errors::Result;

/// Minimal immediate-mode surface: a rows × cols grid of cells, each with its
/// own `[0, extent) × [0, 1]` coordinate space.
pub trait GridCanvas {
    fn begin(&mut self, rows: usize, cols: usize) -> Result<()>;

    /// Fills the unit rectangle `[offset, offset + 1) × [0, 1]` of a strip
    /// whose axis spans `[0, extent)`.
    fn fill_unit(&mut self, row: usize, col: usize, offset: usize, extent: usize, shade: RGBColor) -> Result<()>;

    /// Text above the cell.
    fn set_title(&mut self, row: usize, col: usize, text: &str) -> Result<()>;

    /// Horizontal text left of the cell.
    fn set_row_label(&mut self, row: usize, col: usize, text: &str) -> Result<()>;

    fn disable(&mut self, row: usize, col: usize) -> Result<()>;

    fn finish(&mut self) -> Result<()>;
}

impl Grid {
    /// Replays the layout onto `canvas`.
    pub fn draw<C: GridCanvas>(&self, canvas: &mut C) -> Result<()> {
        canvas.begin(self.rows(), self.columns())?;

        for cell in self.cells() {
            let row = cell.metric.row();
            if let Some(header) = &cell.header {
                canvas.set_title(row, cell.col, header)?;
            }
            if let Some(label) = cell.row_label {
                canvas.set_row_label(row, cell.col, label)?;
            }
            match &cell.body {
                CellBody::Strip { fills, .. } => {
                    for (offset, shade) in fills.iter().enumerate() {
                        canvas.fill_unit(row, cell.col, offset, fills.len(), *shade)?;
                    }
                }
                CellBody::Disabled => canvas.disable(row, cell.col)?,
            }
        }

        canvas.finish()
    }
}
