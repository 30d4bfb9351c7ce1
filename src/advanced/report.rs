//! Static HTML report: one tab per workload, shared grayscale legend.
//!
//! Each tab shows the workload's figure, or a "no data" notice when its task
//! directory could not be resolved.

use std::{
    fs::{create_dir_all, write},
    path::{Path, PathBuf},
};

use log::info;

use crate::decision_log::levels::{LEVEL_COUNT, Level, Palette};
use crate::utils::errors::Result;

/// What happened to one workload, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkloadOutcome {
    Rendered {
        workload: String,
        /// Figure file name, relative to the report directory.
        figure: String,
        missing_columns: usize,
    },
    NoData {
        workload: String,
    },
}

impl WorkloadOutcome {
    pub fn workload(&self) -> &str {
        match self {
            WorkloadOutcome::Rendered { workload, .. } | WorkloadOutcome::NoData { workload } => workload,
        }
    }
}

/// Figure file name for a workload, e.g. `workload_0.3.svg`.
pub fn figure_name(workload: &str, extension: &str) -> String {
    format!("workload_{}.{}", workload, extension)
}

/// Writes `index.html` into `out_dir` and returns its path.
pub fn write_report(outcomes: &[WorkloadOutcome], palette: &Palette, out_dir: &Path) -> Result<PathBuf> {
    create_dir_all(out_dir)?;
    let path = out_dir.join("index.html");
    write(&path, build_html(outcomes, palette))?;
    info!("HTML report generated: {:?}", path);
    Ok(path)
}

pub fn build_html(outcomes: &[WorkloadOutcome], palette: &Palette) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>IIoT Chromosome Visualization (Unified Grayscale)</title>
    <style>
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 20px; }
        .tabs { display: flex; gap: 4px; border-bottom: 2px solid #333; }
        .tabs button { border: none; padding: 8px 16px; cursor: pointer; background: #eee; }
        .tabs button.active { background: #333; color: white; }
        .panel { display: none; padding: 16px 0; }
        .panel.active { display: block; }
        .legend { display: flex; gap: 18px; align-items: center; margin: 12px 0; }
        .swatch { display: inline-block; width: 28px; height: 16px; border: 1px solid #999; vertical-align: middle; }
        .warning { background: #fff3cd; border: 1px solid #e0c36c; padding: 10px 14px; }
        img { max-width: 100%; }
    </style>
</head>
<body>
    <h1>IIoT Chromosome Visualization (Unified Grayscale)</h1>
    <div class="tabs">
"#,
    );

    for (i, outcome) in outcomes.iter().enumerate() {
        html.push_str(&format!(
            "        <button class=\"{}\" onclick=\"showTab({})\">{}</button>\n",
            if i == 0 { "active" } else { "" },
            i,
            escape(outcome.workload())
        ));
    }
    html.push_str("    </div>\n");

    let legend = legend_html(palette);
    for (i, outcome) in outcomes.iter().enumerate() {
        html.push_str(&format!(
            "    <div class=\"panel{}\" id=\"panel-{}\">\n        <h2>Workload = {}</h2>\n{}",
            if i == 0 { " active" } else { "" },
            i,
            escape(outcome.workload()),
            legend
        ));

        match outcome {
            WorkloadOutcome::Rendered { figure, missing_columns, .. } => {
                if *missing_columns > 0 {
                    html.push_str(&format!(
                        "        <p>{} algorithm log(s) missing for this workload.</p>\n",
                        missing_columns
                    ));
                }
                html.push_str(&format!(
                    "        <img src=\"{}\" alt=\"Workload {}\">\n",
                    escape(figure),
                    escape(outcome.workload())
                ));
            }
            WorkloadOutcome::NoData { workload } => {
                html.push_str(&format!(
                    "        <p class=\"warning\">No data found for workload {}</p>\n",
                    escape(workload)
                ));
            }
        }
        html.push_str("    </div>\n");
    }

    html.push_str(
        r#"    <script>
        function showTab(idx) {
            document.querySelectorAll('.tabs button').forEach((b, i) => b.classList.toggle('active', i === idx));
            document.querySelectorAll('.panel').forEach((p, i) => p.classList.toggle('active', i === idx));
        }
    </script>
</body>
</html>
"#,
    );
    html
}

fn legend_html(palette: &Palette) -> String {
    let mut out = String::from("        <h3>Legend: Unified Grayscale Mapping</h3>\n        <div class=\"legend\">\n");
    for raw in 0..LEVEL_COUNT as u32 {
        let Some(level) = Level::new(raw) else { continue };
        let caption = match raw {
            0 => "0 (Darkest) → Highest power / Faster".to_string(),
            3 => "3 (Lightest) → Lowest power / Slower".to_string(),
            n => n.to_string(),
        };
        out.push_str(&format!(
            "            <span><span class=\"swatch\" style=\"background:{}\"></span> {}</span>\n",
            palette.hex(level),
            caption
        ));
    }
    out.push_str("        </div>\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
