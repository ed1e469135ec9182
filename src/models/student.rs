//! # 学生成绩记录数据模型
//!
//! 一条记录由学号、姓名、三项平时成绩和考试成绩构成，
//! 派生字段（平时总分、总分、百分比、等级）在构造时一次性计算，之后不可变。
//!
//! ## 依赖关系
//! - 被 `parsers/marks.rs`, `analytics.rs`, `utils/report.rs` 使用
//! - 使用 `error.rs`

use crate::error::{MarksError, Result};
use serde::Serialize;

/// 平时成绩满分（三项合计）
pub const COURSEWORK_MAX: u64 = 60;

/// 考试满分
pub const EXAM_MAX: u64 = 100;

/// 总分满分
pub const OVERALL_MAX: u64 = COURSEWORK_MAX + EXAM_MAX;

/// 成绩等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// 按百分比查表，自上而下首个匹配生效
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 70.0 {
            Grade::A
        } else if percentage >= 60.0 {
            Grade::B
        } else if percentage >= 50.0 {
            Grade::C
        } else if percentage >= 40.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.pad(letter)
    }
}

/// 学生成绩记录
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    code: String,
    name: String,
    coursework: [u32; 3],
    exam: u32,

    // 派生字段
    coursework_total: u64,
    overall_total: u64,
    percentage: f64,
    grade: Grade,
}

impl StudentRecord {
    /// 由已解析的整数成绩构造记录
    pub fn new(
        code: impl AsRef<str>,
        name: impl AsRef<str>,
        coursework: [u32; 3],
        exam: u32,
    ) -> Self {
        let coursework_total: u64 = coursework.iter().map(|&c| u64::from(c)).sum();
        let overall_total = coursework_total + u64::from(exam);
        let percentage = overall_total as f64 / OVERALL_MAX as f64 * 100.0;

        StudentRecord {
            code: code.as_ref().trim().to_string(),
            name: name.as_ref().trim().to_string(),
            coursework,
            exam,
            coursework_total,
            overall_total,
            percentage,
            grade: Grade::from_percentage(percentage),
        }
    }

    /// 从一行的六个字段构造记录
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        match fields {
            [code, name, c1, c2, c3, exam] => build(code, name, c1, c2, c3, exam),
            _ => Err(MarksError::FieldCount {
                found: fields.len(),
            }),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 三项平时成绩
    pub fn coursework(&self) -> [u32; 3] {
        self.coursework
    }

    pub fn exam(&self) -> u32 {
        self.exam
    }

    /// 平时总分 (满分 60)
    pub fn coursework_total(&self) -> u64 {
        self.coursework_total
    }

    /// 总分 (满分 160)
    pub fn overall_total(&self) -> u64 {
        self.overall_total
    }

    /// 总分百分比 (0-100)
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}

/// 从字符串字段构造记录
///
/// 所有字段先去除首尾空白；任一成绩无法解析为非负整数时返回 `ParseError`。
pub fn build(
    code: &str,
    name: &str,
    c1: &str,
    c2: &str,
    c3: &str,
    exam: &str,
) -> Result<StudentRecord> {
    let coursework = [
        parse_score("c1", c1)?,
        parse_score("c2", c2)?,
        parse_score("c3", c3)?,
    ];
    let exam = parse_score("exam", exam)?;

    Ok(StudentRecord::new(code, name, coursework, exam))
}

/// 解析单个成绩字段
fn parse_score(field: &str, value: &str) -> Result<u32> {
    value.trim().parse().map_err(|_| MarksError::ParseError {
        field: field.to_string(),
        value: value.to_string(),
    })
}
