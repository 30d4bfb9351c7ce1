// Strip grid
// lays out one column per algorithm and one row per metric, then replays the
// layout onto a drawing surface (plotters SVG).

pub mod layout;
pub mod canvas;
pub mod plot;
