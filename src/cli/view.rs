//! # 查看类子命令 CLI 定义
//!
//! `all` 与 `show` 的参数；`highest` / `lowest` 无参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/view.rs`

use clap::Args;

/// all 子命令参数
#[derive(Args, Debug)]
pub struct AllArgs {
    /// Render the records as a table instead of detail blocks
    #[arg(long, default_value_t = false)]
    pub table: bool,
}

/// show 子命令参数
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Student code (exact match) or name (case-insensitive)
    pub query: String,
}
