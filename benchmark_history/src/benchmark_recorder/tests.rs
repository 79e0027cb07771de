//!
//! Tests for the benchmark recorder.
//!

#![cfg(test)]

const COMMIT: &str = r#"
{
    "author": {
        "email": "chris@example.com",
        "name": "Chris O'Neil",
        "username": "chris"
    },
    "committer": {
        "email": "noreply@github.com",
        "name": "GitHub",
        "username": "web-flow"
    },
    "distinct": true,
    "id": "45f724c4f2cef8d09ed84226bea545ac83872e6b",
    "message": "Merge pull request #3178",
    "timestamp": "2025-09-03T18:21:18+01:00",
    "tree_id": "8964b8a6723ccf48b29aa49e3fc359dae62cab02",
    "url": "https://github.com/example/project/commit/45f724c4f2cef8d09ed84226bea545ac83872e6b"
}"#;

fn commit() -> benchmark_history::Commit {
    serde_json::from_str(COMMIT).expect("Failed to parse the commit metadata")
}

#[test]
fn appends_in_order() {
    let report = r#"
    [
        { "name": "files upload 1mb", "value": 2.8069206320194198, "unit": "MiB/s" },
        { "name": "files download", "value": 27.28108243573729, "unit": "MiB/s" }
    ]"#;
    let report = serde_json::from_str::<benchmark_history::Report>(report)
        .expect("Failed to parse the run report");

    let mut history = benchmark_history::History::new("https://github.com/example/project".to_owned());
    let entry = benchmark_history::Entry::new(
        commit(),
        1756937533231,
        benchmark_history::Tool::CustomBiggerIsBetter,
        report.into_benches(),
    );
    history
        .append("`files` benchmarks", entry.clone(), None)
        .expect("Failed to append the first entry");

    let mut newer = entry.clone();
    newer.date = 1764011600022;
    history
        .append("`files` benchmarks", newer, None)
        .expect("Failed to append a newer entry");

    let suite = &history.entries["`files` benchmarks"];
    assert_eq!(suite.entries().len(), 2);
    assert!(suite.is_sorted());
    assert_eq!(history.last_update, 1764011600022);

    let mut older = entry;
    older.date = 1700000000000;
    history
        .append("`files` benchmarks", older, None)
        .expect_err("Appending an entry older than the newest one must fail");
}

#[test]
fn trims_the_oldest_entries() {
    let bench = benchmark_history::Bench::new("hits".to_owned(), 1.0, "hits".to_owned());

    let mut history = benchmark_history::History::default();
    for date in [1000, 2000, 3000] {
        let entry = benchmark_history::Entry::new(
            commit(),
            date,
            benchmark_history::Tool::CustomSmallerIsBetter,
            vec![bench.clone()],
        );
        history
            .append("Node memory", entry, Some(2))
            .expect("Failed to append an entry");
    }

    let suite = &history.entries["Node memory"];
    assert_eq!(suite.entries().len(), 2);
    assert_eq!(suite.entries()[0].date, 2000);
    assert_eq!(suite.entries()[1].date, 3000);
    assert_eq!(history.last_update, 3000);
}

#[test]
fn merges_run_reports() {
    let bare = r#"[ { "name": "upload", "value": 9.7, "unit": "MiB/s" } ]"#;
    let full = format!(
        r#"{{ "commit": {COMMIT}, "date": 1756937533231, "tool": "customBiggerIsBetter",
             "benches": [ {{ "name": "download", "value": 27.2, "unit": "MiB/s" }} ] }}"#,
    );

    let mut benches = Vec::new();
    for text in [bare, full.as_str()] {
        let report = serde_json::from_str::<benchmark_history::Report>(text)
            .expect("Failed to parse the run report");
        benches.extend(report.into_benches());
    }

    assert_eq!(benches.len(), 2);
    assert_eq!(benches[0].name, "upload");
    assert_eq!(benches[1].name, "download");
}

#[test]
fn renders_the_js_assignment() {
    let mut history = benchmark_history::History::new("https://github.com/example/project".to_owned());
    let entry = benchmark_history::Entry::new(
        commit(),
        1756937533231,
        benchmark_history::Tool::CustomBiggerIsBetter,
        vec![benchmark_history::Bench::new(
            "files download".to_owned(),
            27.28108243573729,
            "MiB/s".to_owned(),
        )],
    );
    history
        .append("`files` benchmarks", entry, None)
        .expect("Failed to append the entry");

    let rendered = benchmark_history::js::render(&history);
    assert!(rendered.starts_with(benchmark_history::js::VARIABLE_PREFIX));
    assert!(rendered.contains(r#""lastUpdate": 1756937533231"#));
    assert!(rendered.contains(r#""repoUrl": "https://github.com/example/project""#));
    assert!(rendered.contains(r#""`files` benchmarks""#));

    let payload = benchmark_history::js::payload(rendered.as_str())
        .expect("The rendered file must carry the variable assignment");
    let reparsed: benchmark_history::History =
        serde_json::from_str(payload).expect("Failed to reparse the rendered history");
    assert_eq!(reparsed, history);
}
