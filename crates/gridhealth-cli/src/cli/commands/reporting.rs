//! Human-readable renderings of a report.

use std::fmt::Write;

use gridhealth_core::Healthiness;

/// Short stderr summary printed after every run.
pub fn render_summary(report: &Healthiness) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Summary: {} tests from {} configs, average flakiness {:.2}%",
        report.total_tests, report.total_configs, report.average_flakiness
    );
    for bucket in &report.flaky_buckets {
        let _ = writeln!(
            out,
            "  > {:>5.1}% ({}): {}",
            bucket.threshold, bucket.label, bucket.tests
        );
    }
    out
}

/// Full text report: one line per test, most flaky first.
pub fn render_text(report: &Healthiness) -> String {
    let mut tests: Vec<_> = report.tests.iter().collect();
    tests.sort_by(|a, b| {
        b.flakiness
            .total_cmp(&a.flakiness)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut out = String::new();
    let _ = writeln!(out, "window: {} .. {}", report.start_date, report.end_date);
    for t in tests {
        let _ = write!(
            out,
            "{:>6.2}%  {} [{}]  runs={} failed={} infra={} flaky={}",
            t.flakiness, t.name, t.env, t.total_runs, t.failed_runs, t.failed_infra_runs, t.flaky_runs
        );
        if !t.infra_info.is_empty() {
            let _ = write!(out, "  infra: {}", t.infra_info);
        }
        out.push('\n');
    }
    if !report.infra_issues.is_empty() {
        let _ = writeln!(out, "infra issues:");
        for (key, count) in &report.infra_issues {
            let _ = writeln!(out, "  {key}: {count}");
        }
    }
    out
}
