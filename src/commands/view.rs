//! # 查看类命令实现
//!
//! - `all`: 全部记录及班级汇总（详情块或表格）
//! - `show`: 单条记录
//! - `highest` / `lowest`: 总分最高 / 最低的记录
//!
//! ## 依赖关系
//! - 使用 `cli/view.rs` 定义的参数
//! - 使用 `analytics.rs`
//! - 使用 `utils/output.rs`, `utils/report.rs`

use crate::analytics::{self, Extremum, Lookup};
use crate::cli::view::{AllArgs, ShowArgs};
use crate::error::{MarksError, Result};
use crate::models::StudentRecord;
use crate::utils::output;
use crate::utils::report::{self, ExtremumKind};

/// 执行 all 命令
pub fn execute_all(students: &[StudentRecord], args: AllArgs) -> Result<()> {
    output::print_header("All Student Records");

    let listing = analytics::list_all(students);
    if listing.is_empty() {
        output::print_warning("No student data available to view.");
        return Ok(());
    }

    if args.table {
        println!("{}", report::records_table(&listing));
        output::print_separator();
        println!("{}", report::format_class_summary(&listing));
    } else {
        println!("{}", report::format_all(&listing));
    }

    Ok(())
}

/// 执行 show 命令
pub fn execute_show(students: &[StudentRecord], args: ShowArgs) -> Result<()> {
    output::print_header("Individual Student Record");

    if students.is_empty() {
        output::print_warning("No student data available.");
        return Ok(());
    }

    match analytics::find(students, &args.query) {
        Lookup::Found(student) => {
            println!("{}", report::format_individual(student));
            Ok(())
        }
        Lookup::NotFound => Err(MarksError::StudentNotFound {
            query: args.query.trim().to_string(),
        }),
    }
}

/// 执行 highest / lowest 命令
pub fn execute_extremum(students: &[StudentRecord], kind: ExtremumKind) -> Result<()> {
    let result = match kind {
        ExtremumKind::Highest => {
            output::print_header("Highest Total Score");
            analytics::highest(students)
        }
        ExtremumKind::Lowest => {
            output::print_header("Lowest Total Score");
            analytics::lowest(students)
        }
    };

    match result {
        Extremum::Found(student) => println!("{}", report::format_extremum(kind, student)),
        Extremum::Empty => output::print_warning("No student data available to analyse."),
    }

    Ok(())
}
