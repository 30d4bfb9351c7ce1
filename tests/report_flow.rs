use std::fs::{create_dir_all, read_to_string, write};

use strip_viz::{
    advanced::{
        pipeline::{ReportConfig, generate_report},
        report::WorkloadOutcome,
    },
    workload::{catalog::Catalog, locator::GlobLocator},
};
use tempfile::TempDir;

#[test]
fn report_covers_rendered_and_absent_workloads() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let task = data.path().join("output_0.1+seed7/task");
    create_dir_all(&task).unwrap();
    write(task.join("task_0.1+100+co-dmo-ct.txt"), "# header comment\n0 2 1 1\n1 0 0 0\n").unwrap();
    write(task.join("task_0.1+100+dvs.txt"), "0 3 0 0\n").unwrap();
    // malformed: only three fields
    write(task.join("task_0.1+100+co-dmo.txt"), "0 3 0\n").unwrap();

    let catalog = Catalog::default().with_workloads(["0.1", "0.2"]);
    let config = ReportConfig {
        out_dir: out.path().to_path_buf(),
        export_csv: true,
        ..ReportConfig::default()
    };

    let outcomes = generate_report(&catalog, &GlobLocator::new(data.path()), &config).unwrap();
    assert_eq!(
        outcomes,
        vec![
            WorkloadOutcome::Rendered {
                workload: "0.1".into(),
                figure: "workload_0.1.svg".into(),
                missing_columns: 3,
            },
            WorkloadOutcome::NoData { workload: "0.2".into() },
        ]
    );

    let svg = read_to_string(out.path().join("workload_0.1.svg")).unwrap();
    assert!(svg.contains("CO-DMO-CT"));
    assert!(svg.contains("CO-DMO (missing)"));
    assert!(svg.contains("Baseline (missing)"));
    assert!(svg.contains("OFFLOADING"));

    let html = read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains("No data found for workload 0.2"));
    assert!(html.contains("workload_0.1.svg"));

    let csv = read_to_string(out.path().join("timeline.csv")).unwrap();
    assert!(csv.contains("0.1,CO-DMO-CT,MEM,1,3"));
    assert!(csv.contains("0.1,DVS,CPU,0,3"));
    assert!(!csv.contains("CO-DMO,"));
}
