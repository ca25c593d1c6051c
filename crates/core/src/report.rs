//! Grade report aggregation.
//!
//! Groups every student's marks under the title of the student's group.
//! Ordering is fully determined by the inputs: groups appear in the order
//! their first student appears, students keep input order, and each
//! student's lab grades keep mark order. Nothing is sorted or deduplicated.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// A student as needed by the report.
#[derive(Debug, Clone)]
pub struct StudentEntry {
    pub id: DbId,
    pub full_name: String,
    pub group_id: DbId,
}

/// A mark as needed by the report.
#[derive(Debug, Clone)]
pub struct MarkEntry {
    pub student_id: DbId,
    pub lab_id: DbId,
    pub grade: i64,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One `(lab title, grade)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabGrade {
    pub lab_title: String,
    pub grade: i64,
}

/// A student's row in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentGrades {
    pub name: String,
    pub labs: Vec<LabGrade>,
}

/// Group title -> students, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GradeReport {
    groups: IndexMap<String, Vec<StudentGrades>>,
}

impl GradeReport {
    /// Students listed under `group_title`, if the group appears.
    pub fn group(&self, group_title: &str) -> Option<&[StudentGrades]> {
        self.groups.get(group_title).map(Vec::as_slice)
    }

    /// Iterate groups in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[StudentGrades])> {
        self.groups
            .iter()
            .map(|(title, students)| (title.as_str(), students.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Build the report from already-loaded rows.
///
/// `group_titles` and `lab_titles` map ids to titles. A student whose group
/// is missing, or a mark whose lab is missing, fails the whole report with
/// [`CoreError::Integrity`].
pub fn build_report(
    group_titles: &HashMap<DbId, String>,
    lab_titles: &HashMap<DbId, String>,
    students: &[StudentEntry],
    marks: &[MarkEntry],
) -> Result<GradeReport, CoreError> {
    let mut marks_by_student: HashMap<DbId, Vec<&MarkEntry>> = HashMap::new();
    for mark in marks {
        marks_by_student.entry(mark.student_id).or_default().push(mark);
    }

    let mut report = GradeReport::default();

    for student in students {
        let group_title = group_titles.get(&student.group_id).ok_or_else(|| {
            CoreError::Integrity(format!(
                "student {} references missing group {}",
                student.id, student.group_id
            ))
        })?;

        let labs = marks_by_student
            .get(&student.id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|mark| {
                let lab_title = lab_titles.get(&mark.lab_id).ok_or_else(|| {
                    CoreError::Integrity(format!(
                        "mark for student {} references missing lab {}",
                        student.id, mark.lab_id
                    ))
                })?;
                Ok(LabGrade {
                    lab_title: lab_title.clone(),
                    grade: mark.grade,
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        report
            .groups
            .entry(group_title.clone())
            .or_default()
            .push(StudentGrades {
                name: student.full_name.clone(),
                labs,
            });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn titles(pairs: &[(DbId, &str)]) -> HashMap<DbId, String> {
        pairs.iter().map(|(id, t)| (*id, t.to_string())).collect()
    }

    fn student(id: DbId, name: &str, group_id: DbId) -> StudentEntry {
        StudentEntry {
            id,
            full_name: name.to_string(),
            group_id,
        }
    }

    fn mark(student_id: DbId, lab_id: DbId, grade: i64) -> MarkEntry {
        MarkEntry {
            student_id,
            lab_id,
            grade,
        }
    }

    fn lab(title: &str, grade: i64) -> LabGrade {
        LabGrade {
            lab_title: title.to_string(),
            grade,
        }
    }

    #[test]
    fn groups_students_and_keeps_mark_order() {
        let groups = titles(&[(1, "CS-101")]);
        let labs = titles(&[(1, "Lab1"), (2, "Lab2")]);
        let students = [student(1, "Alice", 1), student(2, "Bob", 1)];
        let marks = [mark(1, 1, 5), mark(1, 2, 4), mark(2, 1, 3)];

        let report = build_report(&groups, &labs, &students, &marks).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(
            report.group("CS-101").unwrap(),
            &[
                StudentGrades {
                    name: "Alice".into(),
                    labs: vec![lab("Lab1", 5), lab("Lab2", 4)],
                },
                StudentGrades {
                    name: "Bob".into(),
                    labs: vec![lab("Lab1", 3)],
                },
            ]
        );
    }

    #[test]
    fn student_without_marks_has_empty_labs() {
        let groups = titles(&[(1, "G")]);
        let report = build_report(&groups, &HashMap::new(), &[student(1, "Eve", 1)], &[]).unwrap();
        assert!(report.group("G").unwrap()[0].labs.is_empty());
    }

    #[test]
    fn group_order_follows_first_student() {
        let groups = titles(&[(1, "A"), (2, "B")]);
        let students = [
            student(1, "s1", 2),
            student(2, "s2", 1),
            student(3, "s3", 2),
        ];
        let report = build_report(&groups, &HashMap::new(), &students, &[]).unwrap();

        let order: Vec<&str> = report.iter().map(|(title, _)| title).collect();
        assert_eq!(order, vec!["B", "A"]);
        let b_names: Vec<&str> = report.group("B").unwrap().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(b_names, vec!["s1", "s3"]);
    }

    #[test]
    fn groups_without_students_are_absent() {
        let groups = titles(&[(1, "Empty"), (2, "Full")]);
        let report = build_report(&groups, &HashMap::new(), &[student(1, "x", 2)], &[]).unwrap();
        assert!(report.group("Empty").is_none());
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn duplicate_marks_for_same_lab_accumulate() {
        let groups = titles(&[(1, "G")]);
        let labs = titles(&[(1, "Lab1")]);
        let marks = [mark(1, 1, 2), mark(1, 1, 5)];
        let report = build_report(&groups, &labs, &[student(1, "Alice", 1)], &marks).unwrap();
        assert_eq!(
            report.group("G").unwrap()[0].labs,
            vec![lab("Lab1", 2), lab("Lab1", 5)]
        );
    }

    #[test]
    fn missing_lab_is_an_integrity_error() {
        let groups = titles(&[(1, "G")]);
        let result = build_report(&groups, &HashMap::new(), &[student(1, "A", 1)], &[mark(1, 9, 5)]);
        assert_matches!(result, Err(CoreError::Integrity(msg)) if msg.contains("lab 9"));
    }

    #[test]
    fn missing_group_is_an_integrity_error() {
        let result = build_report(&HashMap::new(), &HashMap::new(), &[student(1, "A", 4)], &[]);
        assert_matches!(result, Err(CoreError::Integrity(msg)) if msg.contains("group 4"));
    }

    #[test]
    fn serializes_as_ordered_object() {
        let groups = titles(&[(1, "Z"), (2, "A")]);
        let students = [student(1, "z", 1), student(2, "a", 2)];
        let report = build_report(&groups, &HashMap::new(), &students, &[]).unwrap();

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.find("\"Z\"").unwrap() < json.find("\"A\"").unwrap());
    }
}
