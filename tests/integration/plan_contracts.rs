//! Ordering and output contracts for operation plans.

use treegen::parser::parse;
use treegen::plan::{OpAction, Operation, Plan};
use treegen::tooling::cli::{CliContext, Commands};

fn parsed_ops(input: &str) -> Vec<Operation> {
    parse(input).expect("input parses").operations
}

#[test]
fn no_operation_references_a_later_folder() {
    let ops = parsed_ops(
        "root/\n├── a/\n│   ├── b/\n│   │   └── x.txt\n│   └── y.txt\n└── z.txt",
    );
    for (i, op) in ops.iter().enumerate() {
        if op.parent_path == "/" {
            continue;
        }
        assert!(
            ops[..i].iter().any(|earlier| {
                earlier.action == OpAction::CreateFolder && earlier.path == op.parent_path
            }),
            "{} references a parent that is not an earlier folder",
            op.path
        );
    }
}

#[test]
fn folders_first_partition_keeps_parents_ahead() {
    let ops = parsed_ops(
        "root/\n├── a/\n│   ├── b/\n│   │   └── x.txt\n│   └── y.txt\n└── z.txt",
    );
    let plan = Plan::from_operations(&ops);
    let ordered: Vec<&Operation> = plan.ordered().collect();
    for (i, op) in ordered.iter().enumerate() {
        if op.parent_path == "/" {
            continue;
        }
        let parent_index = ordered
            .iter()
            .position(|c| c.action == OpAction::CreateFolder && c.path == op.parent_path)
            .expect("parent exists in ordered plan");
        assert!(parent_index < i, "parent of {} ordered after it", op.path);
    }
    // all folders precede all files
    let first_file = ordered.iter().position(|op| op.action == OpAction::CreateFile);
    if let Some(first_file) = first_file {
        assert!(ordered[first_file..]
            .iter()
            .all(|op| op.action == OpAction::CreateFile));
    }
}

#[test]
fn partition_preserves_relative_input_order() {
    let ops = parsed_ops("root/\n├── b/\n├── a/\n├── 2.txt\n└── 1.txt");
    let plan = Plan::from_operations(&ops);
    let folders: Vec<&str> = plan.folders.iter().map(|op| op.name.as_str()).collect();
    let files: Vec<&str> = plan.files.iter().map(|op| op.name.as_str()).collect();
    assert_eq!(folders, vec!["root", "b", "a"]);
    assert_eq!(files, vec!["2.txt", "1.txt"]);
}

#[test]
fn plan_json_output_contract() {
    let temp = tempfile::TempDir::new().unwrap();
    let layout = temp.path().join("layout.txt");
    std::fs::write(&layout, "root/\n├── src/\n│   └── main.py").unwrap();

    let cli = CliContext::new().unwrap();
    let output = cli
        .execute(&Commands::Plan {
            input: Some(layout),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["root"], "root");
    assert!(parsed["folders"].as_u64().is_some());
    assert!(parsed["files"].as_u64().is_some());
    let operations = parsed["operations"].as_array().unwrap();
    assert!(operations.iter().all(|op| {
        op.get("action").is_some()
            && op.get("name").is_some()
            && op.get("path").is_some()
            && op.get("parentPath").is_some()
    }));
}
