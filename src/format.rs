//! Format plans, inspection results, and materialization reports as text.

use crate::materialize::MaterializeReport;
use crate::parser::ClassifiedLine;
use crate::plan::Plan;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline. Respects NO_COLOR and TTY.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format an operation plan as human-readable text: folders, files, totals.
pub fn format_plan_text(plan: &Plan) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Operations")));

    if !plan.folders.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Folder", "Parent"]);
        for op in &plan.folders {
            table.add_row(vec![op.path.clone(), op.parent_path.clone()]);
        }
        out.push_str(&format!("{}\n\n", table));
    }

    if !plan.files.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["File", "Parent"]);
        for op in &plan.files {
            table.add_row(vec![op.path.clone(), op.parent_path.clone()]);
        }
        out.push_str(&format!("{}\n\n", table));
    }

    out.push_str(&format!(
        "Total: {} folders, {} files.\n",
        plan.folder_count(),
        plan.file_count()
    ));
    out
}

/// Format per-line classification results: depth, cleaned name, kind.
/// Lines that classify to nothing are shown as skipped.
pub fn format_inspect_text(lines: &[(String, Option<ClassifiedLine>)]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("Line classification")
    ));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Line", "Depth", "Name", "Kind"]);
    for (raw, classified) in lines {
        match classified {
            Some(line) => {
                let kind = if line.is_folder { "folder" } else { "file" };
                table.add_row(vec![
                    raw.clone(),
                    line.depth.to_string(),
                    line.name.clone(),
                    kind.to_string(),
                ]);
            }
            None => {
                table.add_row(vec![
                    raw.clone(),
                    "-".to_string(),
                    "-".to_string(),
                    "skipped".to_string(),
                ]);
            }
        }
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Format a materialization report, including any per-operation failures.
pub fn format_report_text(report: &MaterializeReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Created")));
    out.push_str(&format!("  Location: {}\n", report.destination.display()));
    out.push_str(&format!("  Folders created: {}\n", report.folders_created));
    out.push_str(&format!("  Files created: {}\n", report.files_created));
    out.push_str(&format!("  Entries on disk: {}\n", report.entries_on_disk));

    if !report.failures.is_empty() {
        out.push_str(&format!(
            "\n{}\n\n",
            format_section_heading("Failures")
        ));
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Path", "Error"]);
        for failure in &report.failures {
            table.add_row(vec![failure.path.clone(), failure.error.clone()]);
        }
        out.push_str(&format!("{}\n", table));
    }
    out
}
