//! # 成绩报告渲染
//!
//! 将记录与查询结果渲染为终端文本，纯函数，不做任何输出。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/student.rs`, `analytics.rs`
//! - 使用 `tabled` crate 渲染表格

use crate::analytics::ClassListing;
use crate::models::student::{COURSEWORK_MAX, EXAM_MAX, OVERALL_MAX};
use crate::models::StudentRecord;

use tabled::settings::Style;
use tabled::{Table, Tabled};

const RULE_WIDTH: usize = 40;

/// 极值查询类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    Highest,
    Lowest,
}

impl ExtremumKind {
    fn label(self) -> &'static str {
        match self {
            ExtremumKind::Highest => "Highest",
            ExtremumKind::Lowest => "Lowest",
        }
    }
}

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct RecordRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Coursework")]
    coursework: String,
    #[tabled(rename = "Exam")]
    exam: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Percentage")]
    percentage: String,
    #[tabled(rename = "Grade")]
    grade: String,
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// 单个学生的详细信息块
pub fn format_details(student: &StudentRecord) -> String {
    format!(
        "Student Name: {}\n\
         Student Number: {}\n\
         Coursework Total: {} / {}\n\
         Exam Mark: {} / {}\n\
         Overall Percentage: {:.2}%\n\
         Student Grade: {}\n\
         {}",
        student.name(),
        student.code(),
        student.coursework_total(),
        COURSEWORK_MAX,
        student.exam(),
        EXAM_MAX,
        student.percentage(),
        student.grade(),
        rule()
    )
}

/// 班级汇总
pub fn format_class_summary(listing: &ClassListing<'_>) -> String {
    format!(
        "--- CLASS SUMMARY ---\n\
         Number of Students in Class: {}\n\
         Average Percentage Mark Obtained: {:.2}%\n\
         ---------------------",
        listing.len(),
        listing.average_percentage
    )
}

/// 全部记录 + 班级汇总
pub fn format_all(listing: &ClassListing<'_>) -> String {
    let mut out = String::from("--- ALL STUDENT RECORDS ---\n");
    for student in listing.records {
        out.push_str(&format_details(student));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format_class_summary(listing));
    out
}

/// 单条记录
pub fn format_individual(student: &StudentRecord) -> String {
    format!(
        "--- INDIVIDUAL STUDENT RECORD ---\n{}",
        format_details(student)
    )
}

/// 最高/最低总分记录
pub fn format_extremum(kind: ExtremumKind, student: &StudentRecord) -> String {
    format!(
        "--- STUDENT WITH {} TOTAL SCORE ---\n\
         {} Score: {} / {}\n\
         {}\n\
         {}",
        kind.label().to_uppercase(),
        kind.label(),
        student.overall_total(),
        OVERALL_MAX,
        rule(),
        format_details(student)
    )
}

/// 全部记录的表格视图
pub fn records_table(listing: &ClassListing<'_>) -> String {
    let rows: Vec<RecordRow> = listing
        .records
        .iter()
        .map(|s| RecordRow {
            code: s.code().to_string(),
            name: s.name().to_string(),
            coursework: format!("{} / {}", s.coursework_total(), COURSEWORK_MAX),
            exam: format!("{} / {}", s.exam(), EXAM_MAX),
            total: format!("{} / {}", s.overall_total(), OVERALL_MAX),
            percentage: format!("{:.2}%", s.percentage()),
            grade: s.grade().to_string(),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::list_all;

    fn alice() -> StudentRecord {
        StudentRecord::new("001", "Alice", [18, 17, 19], 85)
    }

    #[test]
    fn test_format_details() {
        let text = format_details(&alice());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Student Name: Alice",
                "Student Number: 001",
                "Coursework Total: 54 / 60",
                "Exam Mark: 85 / 100",
                "Overall Percentage: 86.88%",
                "Student Grade: A",
                "----------------------------------------",
            ]
        );
    }

    #[test]
    fn test_format_all_with_summary() {
        let students = vec![alice(), StudentRecord::new("002", "Bob", [10, 10, 10], 40)];
        let text = format_all(&list_all(&students));

        assert!(text.starts_with("--- ALL STUDENT RECORDS ---\n"));
        assert!(text.contains("Student Name: Bob"));
        assert!(text.contains("Number of Students in Class: 2"));
        assert!(text.contains("Average Percentage Mark Obtained: 65.31%"));
        assert!(text.find("Alice").unwrap() < text.find("Bob").unwrap());
    }

    #[test]
    fn test_format_extremum() {
        let text = format_extremum(ExtremumKind::Lowest, &alice());
        assert!(text.starts_with("--- STUDENT WITH LOWEST TOTAL SCORE ---\n"));
        assert!(text.contains("Lowest Score: 139 / 160"));
        assert!(text.ends_with(&format_details(&alice())));
    }

    #[test]
    fn test_format_individual() {
        let text = format_individual(&alice());
        assert!(text.starts_with("--- INDIVIDUAL STUDENT RECORD ---\n"));
        assert!(text.contains("Student Number: 001"));
    }

    #[test]
    fn test_records_table() {
        let students = vec![alice()];
        let table = records_table(&list_all(&students));
        assert!(table.contains("Percentage"));
        assert!(table.contains("86.88%"));
        assert!(table.contains("139 / 160"));
    }
}
