//! # 学生成绩文件解析器
//!
//! 解析逗号分隔的学生成绩文件。
//!
//! ## 文件格式说明
//! ```text
//! 3                          <- 声明的记录数
//! 001,Alice,18,17,19,85      <- 学号,姓名,平时1,平时2,平时3,考试
//! 002,Bob,10,10,10,40
//! 003,Carol,12,15,11,61
//! ```
//!
//! 格式错误的行被跳过并记录为警告，不中止加载；
//! 声明数与实际加载数不一致同样只产生警告。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/student.rs`
//! - 使用 `csv` crate 读取记录

use crate::error::{MarksError, Result};
use crate::models::StudentRecord;
use std::fmt;
use std::fs;
use std::path::Path;

/// 加载过程中产生的非致命问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// 文件没有任何内容
    EmptyFile,
    /// 首行无法解析为记录数
    HeaderUnparseable(String),
    /// 声明数与实际加载数不一致
    CountMismatch { expected: usize, loaded: usize },
    /// 被跳过的数据行
    SkippedLine { line: u64, reason: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::EmptyFile => write!(f, "The marks file is empty"),
            LoadWarning::HeaderUnparseable(header) => write!(
                f,
                "Could not parse the student count from the first line: '{}'",
                header
            ),
            LoadWarning::CountMismatch { expected, loaded } => write!(
                f,
                "File header specified {} students, but only {} valid records were loaded",
                expected, loaded
            ),
            LoadWarning::SkippedLine { line, reason } => {
                write!(f, "Line {}: {}", line, reason)
            }
        }
    }
}

/// 加载结果
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// 按文件顺序排列的有效记录
    pub students: Vec<StudentRecord>,
    /// 首行声明的记录数
    pub expected_count: Option<usize>,
    pub warnings: Vec<LoadWarning>,
}

impl LoadReport {
    /// 被跳过的行数
    pub fn skipped_count(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, LoadWarning::SkippedLine { .. }))
            .count()
    }
}

/// 解析成绩文件
pub fn parse_marks_file(path: &Path) -> Result<LoadReport> {
    if !path.exists() {
        return Err(MarksError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| MarksError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(parse_marks_content(&content))
}

/// 从字符串内容解析成绩记录
///
/// 首个物理行总是记录数声明，其余每个物理行是一条记录（不识别引号）。
pub fn parse_marks_content(content: &str) -> LoadReport {
    let mut report = LoadReport::default();

    if content.is_empty() {
        report.warnings.push(LoadWarning::EmptyFile);
        return report;
    }

    // 首行: 声明的记录数
    let (header, body) = content.split_once('\n').unwrap_or((content, ""));
    let header = header.trim().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                report.warnings.push(LoadWarning::SkippedLine {
                    line: e.position().map(|p| p.line() + 1).unwrap_or_default(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        // body 从文件第 2 行开始
        let line = record.position().map(|p| p.line() + 1).unwrap_or_default();
        let fields: Vec<&str> = record.iter().collect();

        match StudentRecord::from_fields(&fields) {
            Ok(student) => report.students.push(student),
            Err(e) => report.warnings.push(LoadWarning::SkippedLine {
                line,
                reason: e.to_string(),
            }),
        }
    }

    match header.trim().parse::<usize>() {
        Ok(expected) => {
            report.expected_count = Some(expected);
            if expected != report.students.len() {
                report.warnings.push(LoadWarning::CountMismatch {
                    expected,
                    loaded: report.students.len(),
                });
            }
        }
        Err(_) => report
            .warnings
            .push(LoadWarning::HeaderUnparseable(header)),
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marks_basic() {
        let content = "2\n001,Alice,18,17,19,85\n002,Bob,10,10,10,40\n";
        let report = parse_marks_content(content);

        assert_eq!(report.students.len(), 2);
        assert_eq!(report.expected_count, Some(2));
        assert!(report.warnings.is_empty());
        assert_eq!(report.students[0].name(), "Alice");
        assert_eq!(report.students[1].overall_total(), 70);
    }

    #[test]
    fn test_parse_marks_trims_whitespace_and_crlf() {
        let content = "1\r\n 001 ,  Alice Smith , 18, 17 ,19 , 85 \r\n";
        let report = parse_marks_content(content);

        assert_eq!(report.students.len(), 1);
        assert_eq!(report.students[0].code(), "001");
        assert_eq!(report.students[0].name(), "Alice Smith");
        assert_eq!(report.students[0].exam(), 85);
    }

    #[test]
    fn test_malformed_line_skipped() {
        let content = "\
3
001,Alice,18,17,19,85
002,Bob,ten,10,10,40
003,Carol,12,15,11,61
";
        let report = parse_marks_content(content);

        let codes: Vec<_> = report.students.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec!["001", "003"]);
        assert_eq!(report.skipped_count(), 1);
        assert!(report.warnings.contains(&LoadWarning::CountMismatch {
            expected: 3,
            loaded: 2
        }));

        match &report.warnings[0] {
            LoadWarning::SkippedLine { line, .. } => assert_eq!(*line, 3),
            other => panic!("unexpected warning: {other:?}"),
        }
    }

    #[test]
    fn test_stray_quotes_stay_on_their_line() {
        let content = "\
4
001,Alice,18,17,19,85
002,\"O'Neil,10,10,10,40
003,\"Carol,12,15,11
004,Dan,10,10,10,50
";
        let report = parse_marks_content(content);

        let codes: Vec<_> = report.students.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec!["001", "002", "004"]);
        assert_eq!(report.students[1].name(), "\"O'Neil");
        assert_eq!(report.skipped_count(), 1);
        assert!(report.warnings.contains(&LoadWarning::CountMismatch {
            expected: 4,
            loaded: 3
        }));
    }

    #[test]
    fn test_leading_blank_line_is_header() {
        let content = "\n2\n001,Alice,18,17,19,85\n002,Bob,10,10,10,40\n";
        let report = parse_marks_content(content);

        assert_eq!(report.students.len(), 2);
        assert_eq!(report.expected_count, None);
        assert!(report
            .warnings
            .contains(&LoadWarning::HeaderUnparseable(String::new())));
        // "2" 落入数据区，作为单字段行被跳过
        assert!(report.warnings.contains(&LoadWarning::SkippedLine {
            line: 2,
            reason: "Expected 6 fields (code, name, c1, c2, c3, exam), found 1".to_string(),
        }));
    }

    #[test]
    fn test_wrong_field_count_skipped() {
        let content = "2\n001,Alice,18,17,19\n002,Bob,10,10,10,40,extra\n";
        let report = parse_marks_content(content);

        assert!(report.students.is_empty());
        assert_eq!(report.skipped_count(), 2);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let content = "1\n\n001,Alice,18,17,19,85\n\n";
        let report = parse_marks_content(content);

        assert_eq!(report.students.len(), 1);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_empty_file() {
        let report = parse_marks_content("");
        assert!(report.students.is_empty());
        assert_eq!(report.warnings, vec![LoadWarning::EmptyFile]);
    }

    #[test]
    fn test_unparseable_header() {
        let content = "students\n001,Alice,18,17,19,85\n";
        let report = parse_marks_content(content);

        assert_eq!(report.students.len(), 1);
        assert_eq!(report.expected_count, None);
        assert_eq!(
            report.warnings,
            vec![LoadWarning::HeaderUnparseable("students".to_string())]
        );
    }

    #[test]
    fn test_missing_file() {
        let result = parse_marks_file(Path::new("definitely/not/here/studentMarks.txt"));
        assert!(matches!(result, Err(MarksError::FileNotFound { .. })));
    }
}
