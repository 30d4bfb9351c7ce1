//! plotters implementation of [`GridCanvas`]: SVG figures.
//!
//! Layout of one figure:
//! ```text
//! | gutter |  header  |  header  | ...
//! |  CPU   |  strip   |  strip   |
//! |  MEM   |  ...
//! ```
//! The gutter has a fixed width so row labels sit at the same distance from
//! the first strip no matter how long the strips are.

use std::path::Path;

use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::strip_grid::{canvas::GridCanvas, layout::Grid};
use crate::utils::errors::{Result, VizError};

const FONT_FAMILY: &str = "sans-serif";

/// File extension of every figure written by [`render_to_file`].
pub const FIGURE_EXTENSION: &str = "svg";

/// Pixel geometry of a rendered grid figure.
#[derive(Debug, Clone)]
pub struct FigureStyle {
    pub width: u32,
    pub height: u32,
    pub title_font: f64,
    pub row_label_font: f64,
    /// Distance between the right edge of a row label and its strip.
    pub row_label_pad: u32,
    pub label_gutter: u32,
    pub cell_margin: u32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width: 2200,
            height: 600,
            title_font: 13.0,
            row_label_font: 20.0,
            row_label_pad: 80,
            label_gutter: 240,
            cell_margin: 14,
        }
    }
}

impl FigureStyle {
    fn header_height(&self) -> u32 {
        (self.title_font * 2.0).ceil() as u32 + 4
    }
}

pub struct PlotCanvas<DB: DrawingBackend> {
    root: DrawingArea<DB, Shift>,
    style: FigureStyle,
    cols: usize,
    gutters: Vec<DrawingArea<DB, Shift>>,
    headers: Vec<DrawingArea<DB, Shift>>,
    strips: Vec<DrawingArea<DB, Shift>>,
}

impl<DB: DrawingBackend> PlotCanvas<DB> {
    pub fn new(root: DrawingArea<DB, Shift>, style: FigureStyle) -> Self {
        Self {
            root,
            style,
            cols: 0,
            gutters: Vec::new(),
            headers: Vec::new(),
            strips: Vec::new(),
        }
    }

    fn cell_index(&self, row: usize, col: usize) -> Result<usize> {
        let idx = row * self.cols + col;
        if col >= self.cols || idx >= self.strips.len() {
            return Err(VizError::Render(format!("cell ({row}, {col}) outside the grid")));
        }
        Ok(idx)
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> VizError {
    VizError::Render(e.to_string())
}

impl<DB: DrawingBackend> GridCanvas for PlotCanvas<DB> {
    fn begin(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.root.fill(&WHITE).map_err(render_err)?;
        self.cols = cols;
        self.gutters.clear();
        self.headers.clear();
        self.strips.clear();
        if rows == 0 || cols == 0 {
            return Ok(());
        }

        let (gutter, body) = self.root.split_horizontally(self.style.label_gutter as i32);
        self.gutters = gutter.split_evenly((rows, 1));

        let margin = self.style.cell_margin as i32;
        for cell in body.split_evenly((rows, cols)) {
            let (header, strip) = cell.split_vertically(self.style.header_height() as i32);
            self.headers.push(header);
            self.strips.push(strip.margin(0, margin, margin / 2, margin / 2));
        }
        Ok(())
    }

    fn fill_unit(&mut self, row: usize, col: usize, offset: usize, extent: usize, shade: RGBColor) -> Result<()> {
        let area = &self.strips[self.cell_index(row, col)?];
        let (w, h) = area.dim_in_pixel();
        let extent = extent.max(1) as i64;
        let x0 = (offset as i64 * w as i64 / extent) as i32;
        let x1 = ((offset as i64 + 1) * w as i64 / extent) as i32;

        area.draw(&Rectangle::new([(x0, 0), (x1, h as i32)], shade.filled()))
            .map_err(render_err)
    }

    fn set_title(&mut self, row: usize, col: usize, text: &str) -> Result<()> {
        let area = &self.headers[self.cell_index(row, col)?];
        let (w, h) = area.dim_in_pixel();
        let font = (FONT_FAMILY, self.style.title_font)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));

        area.draw(&Text::new(text, (w as i32 / 2, h as i32 / 2), font))
            .map_err(render_err)
    }

    fn set_row_label(&mut self, row: usize, _col: usize, text: &str) -> Result<()> {
        let Some(area) = self.gutters.get(row) else {
            return Err(VizError::Render(format!("row {row} outside the grid")));
        };
        let (w, h) = area.dim_in_pixel();
        let header = self.style.header_height() as i32;
        let anchor = (
            w as i32 - self.style.row_label_pad as i32,
            header + (h as i32 - header) / 2,
        );
        let font = (FONT_FAMILY, self.style.row_label_font)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Right, VPos::Center));

        area.draw(&Text::new(text, anchor, font)).map_err(render_err)
    }

    fn disable(&mut self, row: usize, col: usize) -> Result<()> {
        self.strips[self.cell_index(row, col)?].fill(&WHITE).map_err(render_err)
    }

    fn finish(&mut self) -> Result<()> {
        self.root.present().map_err(render_err)
    }
}

/// Writes the grid to `path` as an SVG document.
pub fn render_to_file(grid: &Grid, path: &Path, style: &FigureStyle) -> Result<()> {
    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    grid.draw(&mut PlotCanvas::new(root, style.clone()))
}

/// Renders the grid as an in-memory SVG document.
pub fn render_to_svg_string(grid: &Grid, style: &FigureStyle) -> Result<String> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (style.width, style.height)).into_drawing_area();
        grid.draw(&mut PlotCanvas::new(root, style.clone()))?;
    }
    Ok(buf)
}
