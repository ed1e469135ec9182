//! # 解析器模块
//!
//! 提供学生成绩文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: marks

pub mod marks;

pub use marks::{parse_marks_file, LoadReport, LoadWarning};
