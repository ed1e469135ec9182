//! # export 子命令 CLI 定义
//!
//! 导出计算后的成绩表到 CSV
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use clap::Args;
use std::path::PathBuf;

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Filename for the CSV output
    #[arg(short, long, default_value = "student_results.csv")]
    pub output: PathBuf,
}
