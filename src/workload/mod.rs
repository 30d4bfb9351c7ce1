// Workload views
// fixed catalog of workloads/algorithms, task directory discovery, and the
// per-workload pipeline that turns logs into a strip grid.

pub mod catalog;
pub mod locator;
pub mod view;
