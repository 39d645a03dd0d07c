use crate::operations::run::RunResult;
use crate::renamer::{FileOutcome, FileReport};
use nu_ansi_term::Color;
use serde_json::json;
use std::collections::BTreeSet;
use std::fmt::Write;
use std::path::Path;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat, use_color: bool) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(use_color),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self, use_color: bool) -> String;
}

fn paint(color: Color, text: &str, use_color: bool) -> String {
    if use_color {
        color.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Progress lines for one processed file
pub fn format_file_report(report: &FileReport, dry_run: bool, use_color: bool) -> String {
    let mut output = String::new();
    writeln!(output, "Processing {}...", report.path.display()).unwrap();

    let verb = if dry_run { "Would replace" } else { "Replaced" };
    for count in &report.counts {
        writeln!(
            output,
            "  {} {} -> {} ({} times)",
            verb, count.old, count.new, count.count
        )
        .unwrap();
    }

    let check = paint(Color::Green, "✓", use_color);
    let action = if dry_run { "Checked" } else { "Updated" };
    writeln!(
        output,
        "{} {} {} ({} replacements)",
        check,
        action,
        report.path.display(),
        report.total
    )
    .unwrap();

    if let Some(ref diff) = report.diff {
        output.push_str(diff);
        if !diff.ends_with('\n') {
            output.push('\n');
        }
    }

    output
}

pub fn format_skip_warning(path: &Path, use_color: bool) -> String {
    format!(
        "{} {} not found, skipping...",
        paint(Color::Yellow, "Warning:", use_color),
        path.display()
    )
}

/// Directories holding backups, in first-seen order
fn backup_dirs(result: &RunResult) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut dirs = Vec::new();
    for backup in result.backups() {
        let dir = match backup.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
            _ => ".".to_string(),
        };
        if seen.insert(dir.clone()) {
            dirs.push(dir);
        }
    }
    dirs
}

impl OutputFormatter for RunResult {
    fn format_json(&self) -> String {
        let files: Vec<_> = self
            .files
            .iter()
            .map(|outcome| match outcome {
                FileOutcome::Processed(report) => json!({
                    "path": report.path,
                    "status": "processed",
                    "changed": report.changed,
                    "total": report.total,
                    "counts": report.counts,
                    "backup": report.backup_path,
                    "diff": report.diff,
                }),
                FileOutcome::Skipped { path, reason } => json!({
                    "path": path,
                    "status": "skipped",
                    "reason": reason,
                }),
            })
            .collect();

        serde_json::to_string(&json!({
            "success": true,
            "operation": "rename-columns",
            "mode": self.mode.kind(),
            "dry_run": self.dry_run,
            "summary": {
                "files_processed": self.processed().count(),
                "files_skipped": self.skipped().count(),
                "total_replacements": self.total,
            },
            "files": files,
        }))
        .unwrap_or_default()
    }

    /// The closing block printed after all per-file progress
    fn format_summary(&self, _use_color: bool) -> String {
        let mut output = String::new();

        if self.dry_run {
            writeln!(
                output,
                "\nDry run: would make {} total replacements",
                self.total
            )
            .unwrap();
            return output;
        }

        writeln!(
            output,
            "\n✅ Complete! Made {} total replacements",
            self.total
        )
        .unwrap();

        let Some(first) = self.processed().next() else {
            return output;
        };

        output.push_str("\nBackup files created with .bak extension\n");

        if let Some(ref backup) = first.backup_path {
            output.push_str("\nTo verify changes:\n");
            writeln!(
                output,
                "  diff {} {} | head -50",
                backup.display(),
                first.path.display()
            )
            .unwrap();
        }

        output.push_str("\nTo restore from backup if needed:\n");
        for dir in backup_dirs(self) {
            writeln!(
                output,
                "  for f in \"{dir}\"/*.bak; do mv \"$f\" \"${{f%.bak}}\"; done"
            )
            .unwrap();
        }

        output
    }
}
