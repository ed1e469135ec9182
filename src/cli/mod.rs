//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `all`: 查看全部记录及班级汇总
//! - `show`: 按学号或姓名查看单条记录
//! - `highest`: 总分最高的学生
//! - `lowest`: 总分最低的学生
//! - `export`: 导出计算结果到 CSV
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: view, export

pub mod export;
pub mod view;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// stumarks - 学生成绩分析工具
#[derive(Parser)]
#[command(name = "stumarks")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Student marks analyser: grades, class averages and score queries", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// 所有子命令共享的参数
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Path to the student marks file
    #[arg(
        short,
        long,
        global = true,
        env = "STUMARKS_FILE",
        default_value = "resources/studentMarks.txt"
    )]
    pub file: PathBuf,

    /// Disable coloured output
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Report every skipped line while loading
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// View all student records with the class summary
    All(view::AllArgs),

    /// View one student record by code or name
    Show(view::ShowArgs),

    /// Show the student with the highest total score
    Highest,

    /// Show the student with the lowest total score
    Lowest,

    /// Export computed totals, percentages and grades to CSV
    Export(export::ExportArgs),
}
