//!
//! Tests for the benchmark reporter.
//!

#![cfg(test)]

/// A condensed history file in the JS flavor, with two suites of opposite
/// comparison directions.
const DATA_JS: &str = r#"window.BENCHMARK_DATA = {
  "lastUpdate": 1764011685740,
  "repoUrl": "https://github.com/example/project",
  "entries": {
    "`files` benchmarks": [
      {
        "commit": {
          "author": { "email": "chris@example.com", "name": "Chris O'Neil", "username": "chris" },
          "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
          "distinct": true,
          "id": "45f724c4f2cef8d09ed84226bea545ac83872e6b",
          "message": "Merge pull request #3178",
          "timestamp": "2025-09-03T18:21:18+01:00",
          "tree_id": "8964b8a6723ccf48b29aa49e3fc359dae62cab02",
          "url": "https://github.com/example/project/commit/45f724c4f2cef8d09ed84226bea545ac83872e6b"
        },
        "date": 1756937533231,
        "tool": "customBiggerIsBetter",
        "benches": [
          { "name": "files upload 1mb", "value": 2.8, "unit": "MiB/s" },
          { "name": "files download", "value": 27.2, "unit": "MiB/s" }
        ]
      },
      {
        "commit": {
          "author": { "email": "qi@example.com", "name": "maqi", "username": "maqi" },
          "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
          "distinct": true,
          "id": "b762a2e7aa97a7ba1a6c0bb637937578aa30377b",
          "message": "Merge pull request #3316",
          "timestamp": "2025-11-24T09:47:13Z",
          "tree_id": "15379df4172a3270c7e0cfb4b6fa6eb14d765245",
          "url": "https://github.com/example/project/commit/b762a2e7aa97a7ba1a6c0bb637937578aa30377b"
        },
        "date": 1764011600022,
        "tool": "customBiggerIsBetter",
        "benches": [
          { "name": "files upload 1mb", "value": 1.1, "unit": "MiB/s" },
          { "name": "files download", "value": 26.9, "unit": "MiB/s" }
        ]
      }
    ],
    "Node memory": [
      {
        "commit": {
          "author": { "email": "chris@example.com", "name": "Chris O'Neil", "username": "chris" },
          "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
          "distinct": true,
          "id": "45f724c4f2cef8d09ed84226bea545ac83872e6b",
          "message": "Merge pull request #3178",
          "timestamp": "2025-09-03T18:21:18+01:00",
          "tree_id": "8964b8a6723ccf48b29aa49e3fc359dae62cab02",
          "url": "https://github.com/example/project/commit/45f724c4f2cef8d09ed84226bea545ac83872e6b"
        },
        "date": 1756937605528,
        "tool": "customSmallerIsBetter",
        "benches": [
          { "name": "Peak memory usage w/ upload", "value": 14, "unit": "MB" }
        ]
      },
      {
        "commit": {
          "author": { "email": "qi@example.com", "name": "maqi", "username": "maqi" },
          "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
          "distinct": true,
          "id": "b762a2e7aa97a7ba1a6c0bb637937578aa30377b",
          "message": "Merge pull request #3316",
          "timestamp": "2025-11-24T09:47:13Z",
          "tree_id": "15379df4172a3270c7e0cfb4b6fa6eb14d765245",
          "url": "https://github.com/example/project/commit/b762a2e7aa97a7ba1a6c0bb637937578aa30377b"
        },
        "date": 1764011685740,
        "tool": "customSmallerIsBetter",
        "benches": [
          { "name": "Peak memory usage w/ upload", "value": 15, "unit": "MB" }
        ]
      }
    ]
  }
};
"#;

fn history() -> benchmark_history::History {
    let payload = benchmark_history::js::payload(DATA_JS)
        .expect("The sample file must carry the variable assignment");
    serde_json::from_str(payload).expect("Failed to parse the sample history")
}

#[test]
fn round_trip_preserves_the_history() {
    let history = history();
    assert_eq!(
        history.entries.keys().collect::<Vec<&String>>(),
        vec!["`files` benchmarks", "Node memory"],
    );

    let rendered = benchmark_history::js::render(&history);
    let payload = benchmark_history::js::payload(rendered.as_str())
        .expect("The rendered file must carry the variable assignment");
    let reparsed: benchmark_history::History =
        serde_json::from_str(payload).expect("Failed to reparse the rendered history");
    assert_eq!(reparsed, history);
    assert_eq!(
        reparsed.entries.keys().collect::<Vec<&String>>(),
        history.entries.keys().collect::<Vec<&String>>(),
    );
}

#[test]
fn accepts_a_valid_history() {
    let findings = benchmark_history::validate(&history());
    assert!(
        findings.is_empty(),
        "Unexpected findings: {findings:?}",
    );
}

#[test]
fn reports_invariant_violations() {
    let mut history = history();

    let suite = history
        .entries
        .get_mut("`files` benchmarks")
        .expect("Always exists");
    suite.0[1].date = 1;
    suite.0[1].benches[0].unit.clear();
    suite.0[1].benches.pop();

    let findings = benchmark_history::validate(&history);
    assert!(findings.iter().any(|finding| matches!(
        finding,
        benchmark_history::Finding::OutOfOrder { suite, .. } if suite == "`files` benchmarks"
    )));
    assert!(findings.iter().any(|finding| matches!(
        finding,
        benchmark_history::Finding::EmptyUnit { name, .. } if name == "files upload 1mb"
    )));
    assert!(findings.iter().any(|finding| matches!(
        finding,
        benchmark_history::Finding::MetricSetDrift { dropped, .. }
            if dropped == &vec!["files download".to_owned()]
    )));
    assert!(findings
        .iter()
        .any(|finding| matches!(finding.severity(), benchmark_history::Severity::Error)));
}

#[test]
fn reports_empty_entries() {
    let mut history = history();
    history
        .entries
        .get_mut("Node memory")
        .expect("Always exists")
        .0[1]
        .benches
        .clear();

    let findings = benchmark_history::validate(&history);
    assert!(findings.iter().any(|finding| matches!(
        finding,
        benchmark_history::Finding::EmptyBenches { suite, index: 1 } if suite == "Node memory"
    )));
}

#[test]
fn detects_regressions_in_both_directions() {
    let history = history();
    let comparisons = benchmark_history::compare_latest(&history);
    assert_eq!(comparisons.len(), 2);

    let files = comparisons
        .iter()
        .find(|comparison| comparison.suite == "`files` benchmarks")
        .expect("Always exists");
    let upload = files
        .deltas
        .iter()
        .find(|delta| delta.name == "files upload 1mb")
        .expect("Always exists");
    // Throughput dropped from 2.8 to 1.1: the factor is previous/current.
    assert!((upload.factor - 2.8 / 1.1).abs() < 1e-9);
    assert!(upload.is_regression(2.0));
    assert_eq!(files.regressions(2.0).count(), 1);

    let memory = comparisons
        .iter()
        .find(|comparison| comparison.suite == "Node memory")
        .expect("Always exists");
    let peak = memory
        .deltas
        .iter()
        .find(|delta| delta.name == "Peak memory usage w/ upload")
        .expect("Always exists");
    // Memory grew from 14 to 15: the factor is current/previous.
    assert!((peak.factor - 15.0 / 14.0).abs() < 1e-9);
    assert!(!peak.is_regression(2.0));
    assert!(!peak.is_improvement());
}

#[test]
fn reports_non_finite_values_and_stale_last_update() {
    let mut history = history();
    history
        .entries
        .get_mut("Node memory")
        .expect("Always exists")
        .0[1]
        .benches[0]
        .value = f64::NAN;
    history.last_update = 0;

    let findings = benchmark_history::validate(&history);
    let non_finite = findings
        .iter()
        .find(|finding| {
            matches!(
                finding,
                benchmark_history::Finding::NonFiniteValue { suite, index: 1, name }
                    if suite == "Node memory" && name == "Peak memory usage w/ upload"
            )
        })
        .expect("A NaN value must be reported");
    assert_eq!(non_finite.severity(), benchmark_history::Severity::Error);

    let stale = findings
        .iter()
        .find(|finding| {
            matches!(
                finding,
                benchmark_history::Finding::StaleLastUpdate { last_update: 0, newest: 1764011685740 }
            )
        })
        .expect("A lagging `lastUpdate` must be reported");
    assert_eq!(stale.severity(), benchmark_history::Severity::Warning);
}

#[test]
fn abbreviates_multibyte_commit_ids() {
    let mut history = history();
    let suite = history
        .entries
        .get_mut("`files` benchmarks")
        .expect("Always exists");
    suite.0[1].commit.id = "déadbéef1234".to_owned();

    let comparisons = benchmark_history::compare_latest(&history);
    let files = comparisons
        .iter()
        .find(|comparison| comparison.suite == "`files` benchmarks")
        .expect("Always exists");
    assert_eq!(files.candidate.commit.short_id(), "déadbée");
    files.print(2.0);

    let short = benchmark_history::Commit {
        id: "é".to_owned(),
        ..files.candidate.commit.clone()
    };
    assert_eq!(short.short_id(), "é");
}

#[test]
fn skips_zero_baseline_metrics() {
    let mut history = history();
    history
        .entries
        .get_mut("Node memory")
        .expect("Always exists")
        .0[0]
        .benches[0]
        .value = 0.0;

    let comparisons = benchmark_history::compare_latest(&history);
    let memory = comparisons
        .iter()
        .find(|comparison| comparison.suite == "Node memory")
        .expect("Always exists");
    assert!(memory.deltas.is_empty());
    assert_eq!(memory.regressions(2.0).count(), 0);
}

#[test]
fn sorts_the_worst_metric_first() {
    let history = history();
    let mut comparisons = benchmark_history::compare_latest(&history);
    let files = comparisons
        .iter_mut()
        .find(|comparison| comparison.suite == "`files` benchmarks")
        .expect("Always exists");
    files.sort_worst();
    assert_eq!(files.deltas[0].name, "files upload 1mb");
}

#[test]
fn exports_csv_rows() {
    let output = benchmark_history::CsvOutput::from(history());
    assert!(output
        .content
        .starts_with(r#""suite", "commit", "date", "name", "value", "unit""#));
    assert!(output.content.contains(
        r#""`files` benchmarks", "b762a2e7aa97a7ba1a6c0bb637937578aa30377b", 1764011600022, "files download", 26.9, "MiB/s""#
    ));
    assert!(output.content.contains(
        r#""Node memory", "45f724c4f2cef8d09ed84226bea545ac83872e6b", 1756937605528, "Peak memory usage w/ upload", 14, "MB""#
    ));
}

#[test]
fn escapes_quotes_in_csv_fields() {
    let mut history = history();
    history
        .entries
        .get_mut("Node memory")
        .expect("Always exists")
        .0[1]
        .benches[0]
        .name = r#"Peak "resident" memory"#.to_owned();

    let output = benchmark_history::CsvOutput::from(history);
    assert!(output
        .content
        .contains(r#""Peak ""resident"" memory""#));
}

#[test]
fn exports_a_worksheet_per_suite() {
    let xlsx = benchmark_history::XlsxOutput::try_from(history())
        .expect("Failed to assemble the XLSX export");
    assert_eq!(xlsx.worksheets.len(), 2);

    let names: Vec<String> = xlsx
        .worksheets
        .iter()
        .map(|worksheet| worksheet.worksheet.name())
        .collect();
    assert_eq!(names, vec!["`files` benchmarks", "Node memory"]);
}
