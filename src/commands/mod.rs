//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑：加载成绩文件，执行查询，渲染并输出。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `analytics.rs`, `utils/`
//! - 子模块: view, export

pub mod export;
pub mod view;

use crate::cli::{Cli, Commands, GlobalArgs};
use crate::error::Result;
use crate::models::StudentRecord;
use crate::parsers;
use crate::utils::output;
use crate::utils::report::ExtremumKind;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    if cli.global.no_color {
        output::disable_color();
    }

    let students = load_students(&cli.global)?;

    match cli.command {
        Commands::All(args) => view::execute_all(&students, args),
        Commands::Show(args) => view::execute_show(&students, args),
        Commands::Highest => view::execute_extremum(&students, ExtremumKind::Highest),
        Commands::Lowest => view::execute_extremum(&students, ExtremumKind::Lowest),
        Commands::Export(args) => export::execute(&students, args),
    }
}

/// 加载成绩文件并报告警告
fn load_students(global: &GlobalArgs) -> Result<Vec<StudentRecord>> {
    let report = parsers::parse_marks_file(&global.file)?;
    output::print_load_report(&report, &global.file, global.verbose);
    Ok(report.students)
}
