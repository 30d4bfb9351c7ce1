//! Decision log parser.
//!
//! Format, one record per line: `mem_idx cpu_idx cloud_idx off_idx`.
//! Blank lines and lines whose first non-whitespace character is `#` are skipped.
//! Any other line that is not exactly four non-negative integers in their
//! domains aborts the parse of the whole file (fail-fast, 1-based line numbers).

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use log::debug;

use crate::decision_log::levels::{Level, binary_level, cpu_level};
use crate::utils::errors::{Result, VizError};

const COMMENT_MARKER: char = '#';
const FIELDS_PER_LINE: usize = 4;

/// One raw log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionRecord {
    pub mem_idx: u32,
    pub cpu_idx: u32,
    /// Parsed for format compatibility; nothing downstream reads it.
    pub cloud_idx: u32,
    pub off_idx: u32,
}

/// Three parallel level sequences for one algorithm run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionTrace {
    pub cpu: Vec<Level>,
    pub mem: Vec<Level>,
    pub offload: Vec<Level>,
}

impl DecisionTrace {
    /// Number of timesteps when all three sequences agree, `None` otherwise.
    pub fn uniform_len(&self) -> Option<usize> {
        let n = self.cpu.len();
        (self.mem.len() == n && self.offload.len() == n).then_some(n)
    }

    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty() && self.mem.is_empty() && self.offload.is_empty()
    }

    fn push(&mut self, cpu: Level, record: &DecisionRecord) {
        self.cpu.push(cpu);
        self.mem.push(binary_level(record.mem_idx));
        self.offload.push(binary_level(record.off_idx));
    }
}

/// Opens `path` and parses it line by line.
pub fn parse_file(path: &Path) -> Result<DecisionTrace> {
    let file = File::open(path)?;
    let trace = parse_reader(BufReader::new(file), path)?;
    debug!("parsed {} steps from {}", trace.cpu.len(), path.display());
    Ok(trace)
}

/// Parses any buffered source. `origin` is only used in error messages.
pub fn parse_reader<R: BufRead>(reader: R, origin: &Path) -> Result<DecisionTrace> {
    let mut trace = DecisionTrace::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let Some(record) = parse_line(&line).map_err(|reason| malformed(origin, line_no, reason))?
        else {
            continue;
        };

        let cpu = cpu_level(record.cpu_idx).ok_or_else(|| {
            malformed(origin, line_no, format!("cpu_idx {} outside 0..=3", record.cpu_idx))
        })?;
        if record.mem_idx > 1 {
            return Err(malformed(origin, line_no, format!("mem_idx {} is not 0 or 1", record.mem_idx)));
        }
        if record.off_idx > 1 {
            return Err(malformed(origin, line_no, format!("off_idx {} is not 0 or 1", record.off_idx)));
        }

        trace.push(cpu, &record);
    }

    Ok(trace)
}

/// Tokenizes one line. `Ok(None)` means the line is skipped.
pub fn parse_line(line: &str) -> std::result::Result<Option<DecisionRecord>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.len() != FIELDS_PER_LINE {
        return Err(format!("expected {} fields, found {}", FIELDS_PER_LINE, tokens.len()));
    }

    let mut fields = [0u32; FIELDS_PER_LINE];
    for (slot, token) in fields.iter_mut().zip(&tokens) {
        *slot = token
            .parse::<u32>()
            .map_err(|_| format!("`{}` is not a non-negative integer", token))?;
    }

    let [mem_idx, cpu_idx, cloud_idx, off_idx] = fields;
    Ok(Some(DecisionRecord { mem_idx, cpu_idx, cloud_idx, off_idx }))
}

fn malformed(origin: &Path, line: usize, reason: String) -> VizError {
    VizError::MalformedLog {
        path: PathBuf::from(origin),
        line,
        reason,
    }
}
