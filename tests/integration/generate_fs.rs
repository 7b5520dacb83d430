//! Filesystem materialization through the CLI and the library API.

use std::fs;
use treegen::materialize::{materialize, MaterializeOptions};
use treegen::parser::parse;
use treegen::plan::Plan;
use treegen::tooling::cli::{CliContext, Commands};
use walkdir::WalkDir;

#[test]
fn generated_tree_matches_layout() {
    let temp = tempfile::TempDir::new().unwrap();
    let dest = temp.path().join("project");
    let parsed = parse(
        "app/\n\
         ├── src/\n\
         │   ├── main.rs\n\
         │   └── lib/\n\
         │       └── util.rs\n\
         ├── docs/\n\
         └── README.md",
    )
    .unwrap();
    let plan = Plan::from_operations(&parsed.operations);

    let report = materialize(&dest, &plan, MaterializeOptions::default()).unwrap();
    assert!(report.failures.is_empty());

    let mut created: Vec<String> = WalkDir::new(&dest)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| {
            entry
                .path()
                .strip_prefix(&dest)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    created.sort();
    assert_eq!(
        created,
        vec![
            "app",
            "app/README.md",
            "app/docs",
            "app/src",
            "app/src/lib",
            "app/src/lib/util.rs",
            "app/src/main.rs",
        ]
    );

    // all files are empty placeholders
    for entry in WalkDir::new(&dest).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_file() {
            assert_eq!(fs::metadata(entry.path()).unwrap().len(), 0);
        }
    }
}

#[test]
fn cli_generate_reports_counts() {
    let temp = tempfile::TempDir::new().unwrap();
    let layout = temp.path().join("layout.txt");
    fs::write(&layout, "root/\n├── a/\n│   └── b.txt\n└── c.txt").unwrap();
    let dest = temp.path().join("out");

    let cli = CliContext::new().unwrap();
    let output = cli
        .execute(&Commands::Generate {
            input: Some(layout),
            dest: Some(dest.clone()),
            force: false,
            dry_run: false,
            interactive: false,
        })
        .unwrap();

    assert!(output.contains("Folders created: 2"));
    assert!(output.contains("Files created: 2"));
    assert!(dest.join("root/a/b.txt").is_file());
}

#[test]
fn duplicate_entries_absorbed_by_idempotent_creation() {
    let temp = tempfile::TempDir::new().unwrap();
    let dest = temp.path().join("out");
    let parsed = parse("root/\n├── a/\n├── a/\n├── f.txt\n└── f.txt").unwrap();
    assert_eq!(parsed.operations.len(), 5);

    let plan = Plan::from_operations(&parsed.operations);
    let report = materialize(&dest, &plan, MaterializeOptions::default()).unwrap();

    // both duplicate operations execute without failure
    assert!(report.failures.is_empty());
    assert_eq!(report.folders_created, 3);
    assert_eq!(report.files_created, 2);
    // but only one of each lands on disk
    assert_eq!(report.entries_on_disk, 3);
}

#[test]
fn generate_twice_requires_overwrite() {
    let temp = tempfile::TempDir::new().unwrap();
    let dest = temp.path().join("out");
    let parsed = parse("root/\n├── a.txt").unwrap();
    let plan = Plan::from_operations(&parsed.operations);

    materialize(&dest, &plan, MaterializeOptions::default()).unwrap();
    assert!(materialize(&dest, &plan, MaterializeOptions { overwrite: false }).is_err());
    assert!(materialize(&dest, &plan, MaterializeOptions { overwrite: true }).is_ok());
}
