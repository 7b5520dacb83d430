//! End-to-end parse scenarios over mixed indentation styles.

use treegen::parser::parse;
use treegen::plan::OpAction;

#[test]
fn flat_root_with_file_and_folder() {
    let parsed = parse("root/\n├── a.txt\n└── b/").unwrap();
    let summary: Vec<(OpAction, &str, &str)> = parsed
        .operations
        .iter()
        .map(|op| (op.action, op.path.as_str(), op.parent_path.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (OpAction::CreateFolder, "/root/", "/"),
            (OpAction::CreateFile, "/root/a.txt", "/root/"),
            (OpAction::CreateFolder, "/root/b/", "/root/"),
        ]
    );
}

#[test]
fn continuation_line_resolves_to_nested_parent() {
    let parsed = parse("root/\n├── src/\n│   └── main.py").unwrap();
    let main = parsed
        .operations
        .iter()
        .find(|op| op.name == "main.py")
        .unwrap();
    assert_eq!(main.parent_path, "/root/src/");
}

#[test]
fn multi_level_dedent_in_one_step() {
    let input = "root/\n\
                 ├── a/\n\
                 │   └── b/\n\
                 │       └── c/\n\
                 │           └── deep.txt\n\
                 └── shallow/";
    let parsed = parse(input).unwrap();
    let shallow = parsed
        .operations
        .iter()
        .find(|op| op.name == "shallow")
        .unwrap();
    assert_eq!(shallow.parent_path, "/root/");
}

#[test]
fn empty_input_is_nothing_to_do_not_failure() {
    assert!(parse("").is_none());
    assert!(parse("  \n\t\n").is_none());
}

#[test]
fn dotted_folder_with_separator_classifies_as_folder() {
    let parsed = parse("root/\n├── v1.0/\n│   └── api.rs").unwrap();
    let v1 = parsed
        .operations
        .iter()
        .find(|op| op.name == "v1.0")
        .unwrap();
    assert_eq!(v1.action, OpAction::CreateFolder);
    assert_eq!(v1.path, "/root/v1.0/");
    let api = parsed
        .operations
        .iter()
        .find(|op| op.name == "api.rs")
        .unwrap();
    assert_eq!(api.parent_path, "/root/v1.0/");
}

#[test]
fn plain_indentation_style_parses() {
    let input = "root\n    src\n        lib.rs\n    README.md";
    let parsed = parse(input).unwrap();
    let lib = parsed
        .operations
        .iter()
        .find(|op| op.name == "lib.rs")
        .unwrap();
    assert_eq!(lib.parent_path, "/root/src/");
    let readme = parsed
        .operations
        .iter()
        .find(|op| op.name == "README.md")
        .unwrap();
    assert_eq!(readme.parent_path, "/root/");
}

#[test]
fn mixed_decoration_realistic_listing() {
    let input = "myapp/\n\
                 ├── src/\n\
                 │   ├── main.rs\n\
                 │   ├── parser/\n\
                 │   │   ├── mod.rs\n\
                 │   │   └── lexer.rs\n\
                 │   └── util.rs\n\
                 ├── tests/\n\
                 │   └── smoke.rs\n\
                 └── Cargo.toml";
    let parsed = parse(input).unwrap();
    assert_eq!(parsed.root_name(), "myapp");

    let lexer = parsed
        .operations
        .iter()
        .find(|op| op.name == "lexer.rs")
        .unwrap();
    assert_eq!(lexer.path, "/myapp/src/parser/lexer.rs");

    let util = parsed
        .operations
        .iter()
        .find(|op| op.name == "util.rs")
        .unwrap();
    assert_eq!(util.parent_path, "/myapp/src/");

    let cargo = parsed
        .operations
        .iter()
        .find(|op| op.name == "Cargo.toml")
        .unwrap();
    assert_eq!(cargo.parent_path, "/myapp/");
}
