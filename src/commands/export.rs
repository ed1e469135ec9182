//! # export 命令实现
//!
//! 将每个学生的原始成绩与派生结果（总分、百分比、等级）写入 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `utils/output.rs`
//! - 使用 `csv` + `serde` 序列化

use crate::cli::export::ExportArgs;
use crate::error::{MarksError, Result};
use crate::models::{Grade, StudentRecord};
use crate::utils::output;

use serde::Serialize;
use std::path::Path;

/// CSV 输出行
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    code: &'a str,
    name: &'a str,
    c1: u32,
    c2: u32,
    c3: u32,
    coursework_total: u64,
    exam: u32,
    overall_total: u64,
    percentage: String,
    grade: Grade,
}

impl<'a> From<&'a StudentRecord> for ExportRow<'a> {
    fn from(s: &'a StudentRecord) -> Self {
        let [c1, c2, c3] = s.coursework();
        ExportRow {
            code: s.code(),
            name: s.name(),
            c1,
            c2,
            c3,
            coursework_total: s.coursework_total(),
            exam: s.exam(),
            overall_total: s.overall_total(),
            percentage: format!("{:.2}", s.percentage()),
            grade: s.grade(),
        }
    }
}

/// 执行 export 命令
pub fn execute(students: &[StudentRecord], args: ExportArgs) -> Result<()> {
    output::print_header("Exporting Student Results");

    if students.is_empty() {
        output::print_warning("No student data available to export.");
        return Ok(());
    }

    save_results_csv(students, &args.output)?;
    output::print_success(&format!(
        "Exported {} records to '{}'",
        students.len(),
        args.output.display()
    ));

    Ok(())
}

/// 保存结果到 CSV
fn save_results_csv(students: &[StudentRecord], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for student in students {
        wtr.serialize(ExportRow::from(student))?;
    }

    wtr.flush().map_err(|e| MarksError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
