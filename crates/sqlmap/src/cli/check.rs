//! Check command implementation

use super::{load, output};
use anyhow::Result;
use colored::Colorize;
use sqlmap_diagnostics::{Diagnostic, SQM0150, SQM0151, SQM0152, Severity};
use sqlmap_query::{Arity, Document, FieldExpression};
use std::path::{Path, PathBuf};

/// Configuration for check command
pub struct CheckConfig {
    pub files: Vec<PathBuf>,
    pub kind: load::KindArg,
    pub strict: bool,
    pub verbose: bool,
}

/// Check result for a single file
pub struct FileReport {
    pub file: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Check documents and report every problem found
pub fn check(config: CheckConfig) -> Result<()> {
    if config.files.is_empty() {
        anyhow::bail!("No files specified for checking");
    }

    let mut total_errors = 0;
    let mut total_warnings = 0;

    for file in &config.files {
        if config.verbose {
            eprintln!("Checking: {}", file.display());
        }
        let report = check_file(file, config.kind);
        total_errors += report.errors();
        total_warnings += report.warnings();
        print_report(&report);
    }

    println!();
    if total_errors == 0 && total_warnings == 0 {
        println!(
            "{}",
            output::format_success(&format!(
                "All {} file(s) checked successfully",
                config.files.len()
            ))
        );
        return Ok(());
    }

    if total_errors == 0 {
        eprintln!(
            "{}",
            output::format_warning(&format!("{} warning(s)", total_warnings))
        );
        if !config.strict {
            return Ok(());
        }
        anyhow::bail!("Strict mode: {} warning(s) treated as errors", total_warnings);
    }

    anyhow::bail!(
        "Check failed: {} error(s), {} warning(s)",
        total_errors,
        total_warnings
    )
}

/// Decode one file and lint the result
pub fn check_file(file: &Path, kind: load::KindArg) -> FileReport {
    let diagnostics = match load::decode_file(file, kind) {
        Ok(document) => lint_document(&document),
        Err(e) => vec![e.to_diagnostic()],
    };
    FileReport {
        file: file.to_path_buf(),
        diagnostics,
    }
}

/// Warnings for documents that decode but are unlikely to be intended
pub fn lint_document(document: &Document) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    match document {
        Document::Expression(expr) => lint_expression(expr, &mut diagnostics),
        Document::Order(order) => {
            if order.is_empty() {
                diagnostics.push(Diagnostic::warning(
                    SQM0152,
                    "ordering has no entries",
                ));
            }
            for entry in order {
                lint_expression(entry.expression(), &mut diagnostics);
            }
        }
    }
    diagnostics
}

fn lint_expression(expr: &FieldExpression, diagnostics: &mut Vec<Diagnostic>) {
    expr.walk(&mut |node| {
        if node.field_path() == Some("") {
            let diag = Diagnostic::warning(SQM0150, format!("{} has an empty field path", node.function()));
            diagnostics.push(match SQM0150.info().help {
                Some(help) => diag.with_help(help),
                None => diag,
            });
        }
        if node.function().arity() == Arity::Variadic && node.children().is_empty() {
            diagnostics.push(Diagnostic::warning(
                SQM0151,
                format!("{} has no operands", node.function()),
            ));
        }
    });
}

fn print_report(report: &FileReport) {
    let status = if report.errors() > 0 {
        "✗".red().bold()
    } else if report.warnings() > 0 {
        "!".yellow().bold()
    } else {
        "✓".green().bold()
    };
    println!("{} {}", status, report.file.display());
    for diag in &report.diagnostics {
        println!("  {}", diag.to_colored_string());
    }
}
