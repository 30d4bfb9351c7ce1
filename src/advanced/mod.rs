// Report output
// tabbed HTML report over the rendered figures, plus a small HTTP server for it.

pub mod report;
pub mod dashboard;
pub mod pipeline;
