//! # 统一错误处理模块
//!
//! 定义 stumarks 的所有错误类型，使用 `thiserror` 派生。
//!
//! 查询结果中的"未找到"与"空集合"不是错误，由 `analytics` 的结果枚举表示；
//! 只有命令层需要中止时才转换为 `MarksError`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// stumarks 统一错误类型
#[derive(Error, Debug)]
pub enum MarksError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Field '{field}' is not a valid non-negative integer: '{value}'")]
    ParseError { field: String, value: String },

    #[error("Expected 6 fields (code, name, c1, c2, c3, exam), found {found}")]
    FieldCount { found: usize },

    // ─────────────────────────────────────────────────────────────
    // 查询错误
    // ─────────────────────────────────────────────────────────────
    #[error("Student with code or name '{query}' not found")]
    StudentNotFound { query: String },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MarksError>;
