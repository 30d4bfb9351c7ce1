//! # Decision Strip Visualizer
//! Compares per-timestep scheduling decisions (CPU power level, memory mode,
//! offloading mode) of several scheduling algorithms across workload intensities.
//!
//! ## Flow
//! - **workload:** resolve `<root>/output_<w>+*/task`, one log per algorithm.
//! - **decision_log:** parse `mem cpu cloud off` lines onto a shared 4-level domain.
//! - **strip_grid:** lay out 3 metric rows × N algorithm columns, draw with plotters.
//! - **advanced:** tabbed HTML report per workload, optional HTTP server.
//!
//! ## Outputs
//! - `report/workload_<w>.svg`: one strip grid per workload.
//! - `report/index.html`: tabs + grayscale legend.
//! - `report/timeline.csv`: optional flat dump of every drawn cell.

pub mod decision_log;
pub mod strip_grid;
pub mod workload;
pub mod utils;
pub mod advanced;
