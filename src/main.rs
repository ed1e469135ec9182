//! # stumarks - 学生成绩分析工具
//!
//! 读取学生成绩文件，计算总分、百分比和等级，并回答常见查询。
//!
//! ## 子命令
//! - `all`     - 查看全部记录及班级平均
//! - `show`    - 按学号或姓名查看单条记录
//! - `highest` - 总分最高的学生
//! - `lowest`  - 总分最低的学生
//! - `export`  - 导出计算结果到 CSV
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/    (成绩文件解析)
//!   │     ├── analytics   (查询)
//!   │     └── models/     (数据模型)
//!   ├── utils/      (输出与报告渲染)
//!   └── error.rs    (错误处理)
//! ```

mod analytics;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
