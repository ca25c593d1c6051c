//! Integration tests for the grade report built from stored rows.

use chrono::NaiveDate;
use mylearn_core::report::{LabGrade, StudentGrades};
use mylearn_db::models::group::CreateGroup;
use mylearn_db::models::lab::CreateLab;
use mylearn_db::repositories::{GroupRepo, LabRepo, MarkRepo, ReportRepo, StudentRepo};
use sqlx::SqlitePool;

fn lab_grade(title: &str, grade: i64) -> LabGrade {
    LabGrade {
        lab_title: title.to_string(),
        grade,
    }
}

async fn create_group(pool: &SqlitePool, title: &str) -> i64 {
    GroupRepo::create(
        pool,
        &CreateGroup {
            title: title.to_string(),
            description: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn create_lab(pool: &SqlitePool, title: &str) -> i64 {
    LabRepo::create(
        pool,
        &CreateLab {
            date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            title: title.to_string(),
            text: String::new(),
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_groups_students_by_group_title(pool: SqlitePool) {
    let group_id = create_group(&pool, "CS-101").await;
    let students = StudentRepo::create_many(&pool, group_id, &["Alice".into(), "Bob".into()])
        .await
        .unwrap();
    let lab1 = create_lab(&pool, "Lab1").await;
    let lab2 = create_lab(&pool, "Lab2").await;

    MarkRepo::create_many(&pool, students[0].id, &[(lab1, 5), (lab2, 4)])
        .await
        .unwrap();
    MarkRepo::create_many(&pool, students[1].id, &[(lab1, 3)])
        .await
        .unwrap();

    let report = ReportRepo::grade_report(&pool).await.unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(
        report.group("CS-101").unwrap(),
        &[
            StudentGrades {
                name: "Alice".into(),
                labs: vec![lab_grade("Lab1", 5), lab_grade("Lab2", 4)],
            },
            StudentGrades {
                name: "Bob".into(),
                labs: vec![lab_grade("Lab1", 3)],
            },
        ]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_is_empty_without_students(pool: SqlitePool) {
    create_group(&pool, "Empty").await;
    create_lab(&pool, "Lab1").await;

    let report = ReportRepo::grade_report(&pool).await.unwrap();
    assert!(report.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_includes_students_without_marks(pool: SqlitePool) {
    let a = create_group(&pool, "A").await;
    let b = create_group(&pool, "B").await;
    StudentRepo::create_many(&pool, b, &["Zed".into()]).await.unwrap();
    StudentRepo::create_many(&pool, a, &["Amy".into()]).await.unwrap();

    let report = ReportRepo::grade_report(&pool).await.unwrap();

    let order: Vec<&str> = report.iter().map(|(title, _)| title).collect();
    assert_eq!(order, vec!["B", "A"]);
    assert!(report.group("A").unwrap()[0].labs.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_load_inputs_preserves_mark_order(pool: SqlitePool) {
    let group_id = create_group(&pool, "G").await;
    let students = StudentRepo::create_many(&pool, group_id, &["Alice".into()])
        .await
        .unwrap();
    let lab2 = create_lab(&pool, "Lab2").await;
    let lab1 = create_lab(&pool, "Lab1").await;
    MarkRepo::create_many(&pool, students[0].id, &[(lab1, 4), (lab2, 5), (lab1, 2)])
        .await
        .unwrap();

    let inputs = ReportRepo::load_inputs(&pool).await.unwrap();
    assert_eq!(inputs.students.len(), 1);
    assert_eq!(inputs.marks.len(), 3);

    let report = inputs.build().unwrap();
    assert_eq!(
        report.group("G").unwrap()[0].labs,
        vec![
            lab_grade("Lab1", 4),
            lab_grade("Lab2", 5),
            lab_grade("Lab1", 2),
        ]
    );
}
