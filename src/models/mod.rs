//! # 数据模型模块
//!
//! 定义学生成绩记录及其派生数据。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `analytics.rs` 和 `commands/` 使用
//! - 子模块: student

pub mod student;

pub use student::{Grade, StudentRecord};
