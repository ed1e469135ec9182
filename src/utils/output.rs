//! # 终端状态输出
//!
//! 所有状态行形如 `[TAG] message`；错误写 stderr，其余写 stdout。
//! 加载报告（跳过行、记录数不符等）在这里转换为状态行。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 模块使用
//! - 使用 `parsers/marks.rs` 的 `LoadReport`
//! - 使用 `colored` crate

use crate::parsers::{LoadReport, LoadWarning};

use colored::{ColoredString, Colorize};
use std::path::Path;

/// 状态行类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
    Skip,
}

impl Status {
    fn tag(self) -> ColoredString {
        match self {
            Status::Success => "[OK]".green().bold(),
            Status::Error => "[ERR]".red().bold(),
            Status::Warning => "[WARN]".yellow().bold(),
            Status::Info => "[*]".blue().bold(),
            Status::Skip => "[SKIP]".dimmed(),
        }
    }
}

fn emit(status: Status, msg: &str) {
    match status {
        Status::Error => eprintln!("{} {}", status.tag(), msg),
        _ => println!("{} {}", status.tag(), msg),
    }
}

pub fn print_success(msg: &str) {
    emit(Status::Success, msg);
}

pub fn print_error(msg: &str) {
    emit(Status::Error, msg);
}

pub fn print_warning(msg: &str) {
    emit(Status::Warning, msg);
}

/// 打印命令标题
pub fn print_header(title: &str) {
    println!("\n{} {}", "stumarks ::".cyan(), title.bold());
    println!("{}\n", "=".repeat(title.chars().count() + 12).dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "-".repeat(40).dimmed());
}

/// 关闭彩色输出
pub fn disable_color() {
    colored::control::set_override(false);
}

/// 加载警告对应的状态行
///
/// 跳过的行仅在 `verbose` 时逐行列出，否则合并为一条计数警告。
pub fn load_warning_lines(warnings: &[LoadWarning], verbose: bool) -> Vec<(Status, String)> {
    let mut lines = Vec::new();
    let mut skipped = 0;

    for warning in warnings {
        match warning {
            LoadWarning::SkippedLine { .. } => {
                skipped += 1;
                if verbose {
                    lines.push((Status::Skip, warning.to_string()));
                }
            }
            _ => lines.push((Status::Warning, warning.to_string())),
        }
    }

    if skipped > 0 && !verbose {
        lines.push((
            Status::Warning,
            format!(
                "Skipped {} malformed line(s); use --verbose for details",
                skipped
            ),
        ));
    }

    lines
}

/// 加载结果摘要
pub fn load_summary(report: &LoadReport, path: &Path) -> String {
    let declared = report
        .expected_count
        .map(|n| format!(" (header declares {})", n))
        .unwrap_or_default();

    format!(
        "Loaded {} student records from '{}'{}",
        report.students.len(),
        path.display(),
        declared
    )
}

/// 打印加载报告
pub fn print_load_report(report: &LoadReport, path: &Path, verbose: bool) {
    for (status, line) in load_warning_lines(&report.warnings, verbose) {
        emit(status, &line);
    }
    emit(Status::Info, &load_summary(report, path));
}
