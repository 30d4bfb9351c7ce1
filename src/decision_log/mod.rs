// Decision log ingestion
// parses per-timestep scheduler decisions (mem, cpu, cloud, offload) and lifts
// them onto the shared 4-level domain used by the strip grid.

pub mod levels;
pub mod parser;
