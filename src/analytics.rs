//! # 成绩分析查询
//!
//! 对已加载的学生记录集合进行只读查询：
//! - `list_all`: 全部记录及班级平均百分比
//! - `find`: 按学号（区分大小写）或姓名（不区分大小写）查找
//! - `highest` / `lowest`: 总分最高 / 最低的记录
//!
//! 无结果时返回 `Lookup::NotFound` 或 `Extremum::Empty`，不返回错误。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `utils/report.rs` 使用
//! - 使用 `models/student.rs`

use crate::models::StudentRecord;

/// 全部记录列表及班级平均
#[derive(Debug, Clone, Copy)]
pub struct ClassListing<'a> {
    pub records: &'a [StudentRecord],
    /// 平均百分比，空集合时为 0.0
    pub average_percentage: f64,
}

impl ClassListing<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 单条记录查找结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a StudentRecord),
    NotFound,
}

/// 最高/最低分查询结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extremum<'a> {
    Found(&'a StudentRecord),
    Empty,
}

/// 列出全部记录并计算平均百分比
pub fn list_all(students: &[StudentRecord]) -> ClassListing<'_> {
    let average_percentage = if students.is_empty() {
        0.0
    } else {
        students.iter().map(|s| s.percentage()).sum::<f64>() / students.len() as f64
    };

    ClassListing {
        records: students,
        average_percentage,
    }
}

/// 按学号或姓名查找，首个匹配生效
pub fn find<'a>(students: &'a [StudentRecord], query: &str) -> Lookup<'a> {
    let query = query.trim();
    if query.is_empty() {
        return Lookup::NotFound;
    }

    let folded = query.to_lowercase();
    students
        .iter()
        .find(|s| s.code() == query || s.name().to_lowercase() == folded)
        .map_or(Lookup::NotFound, Lookup::Found)
}

/// 总分最高的记录，并列时取最先出现者
pub fn highest(students: &[StudentRecord]) -> Extremum<'_> {
    students
        .iter()
        .reduce(|best, s| {
            if s.overall_total() > best.overall_total() {
                s
            } else {
                best
            }
        })
        .map_or(Extremum::Empty, Extremum::Found)
}

/// 总分最低的记录，并列时取最先出现者
pub fn lowest(students: &[StudentRecord]) -> Extremum<'_> {
    students
        .iter()
        .reduce(|best, s| {
            if s.overall_total() < best.overall_total() {
                s
            } else {
                best
            }
        })
        .map_or(Extremum::Empty, Extremum::Found)
}
