//! Repository-level tests against a real SQLite database. Migrations from
//! ./migrations are applied by the test harness.

use serde_json::json;

use campusreg_db::models::enrollment::EnrollmentInput;
use campusreg_db::models::programme::ProgrammeInput;
use campusreg_db::models::student::StudentInput;
use campusreg_db::repositories::{
    DepartmentRepo, EnrollmentRepo, ProgrammeRepo, RecordRepo, StaffRepo, StudentRepo,
};
use campusreg_db::DbPool;

fn student_input(roll_no: &str, name: &str) -> StudentInput {
    serde_json::from_value(json!({ "roll_no": roll_no, "name": name })).unwrap()
}

#[sqlx::test]
async fn student_round_trip(pool: DbPool) {
    let created = StudentRepo::insert(&pool, &student_input("CS-001", "Asha Verma"))
        .await
        .unwrap();
    assert_eq!(created.roll_no, "CS-001");
    assert_eq!(created.profile_pic, "default.png");

    let found = StudentRepo::find(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Asha Verma");

    assert!(StudentRepo::remove(&pool, created.id).await.unwrap());
    assert!(StudentRepo::find(&pool, created.id).await.unwrap().is_none());
    assert!(!StudentRepo::remove(&pool, created.id).await.unwrap());
}

#[sqlx::test]
async fn student_search_is_case_insensitive(pool: DbPool) {
    StudentRepo::insert(&pool, &student_input("CS-001", "Asha Verma"))
        .await
        .unwrap();
    StudentRepo::insert(&pool, &student_input("EE-104", "Bimal Rao"))
        .await
        .unwrap();

    let hits = StudentRepo::list(&pool, Some("asha")).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].roll_no, "CS-001");

    // Roll numbers match too.
    let hits = StudentRepo::list(&pool, Some("ee-")).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Bimal Rao");

    let all = StudentRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test]
async fn duplicate_roll_no_is_rejected(pool: DbPool) {
    StudentRepo::insert(&pool, &student_input("CS-001", "Asha Verma"))
        .await
        .unwrap();
    let err = StudentRepo::insert(&pool, &student_input("CS-001", "Someone Else"))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db) => assert!(db.is_unique_violation()),
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test]
async fn edit_overwrites_every_field(pool: DbPool) {
    let created: campusreg_db::models::student::Student = StudentRepo::insert(
        &pool,
        &serde_json::from_value(json!({
            "roll_no": "CS-001",
            "name": "Asha Verma",
            "email": "asha@example.edu",
            "year": "2"
        }))
        .unwrap(),
    )
    .await
    .unwrap();
    assert_eq!(created.email.as_deref(), Some("asha@example.edu"));
    assert_eq!(created.year, Some(2));

    // A replacement that omits email and year clears them.
    let updated = StudentRepo::replace(&pool, created.id, &student_input("CS-001", "Asha V."))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Asha V.");
    assert!(updated.email.is_none());
    assert!(updated.year.is_none());

    let missing = StudentRepo::replace(&pool, 9999, &student_input("ZZ-999", "Nobody"))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn deleting_department_cascades_to_programmes(pool: DbPool) {
    let dept = DepartmentRepo::insert(
        &pool,
        &serde_json::from_value(json!({ "name": "Physics" })).unwrap(),
    )
    .await
    .unwrap();

    let input: ProgrammeInput = serde_json::from_value(json!({
        "programme": "BSc Physics",
        "seats_general": "30",
        "seats_sc": "8"
    }))
    .unwrap();
    let prog = ProgrammeRepo::insert(&pool, dept.id, &input).await.unwrap();
    assert_eq!(prog.seats.total(), 38);

    assert!(DepartmentRepo::remove(&pool, dept.id).await.unwrap());
    assert!(ProgrammeRepo::find(&pool, prog.id).await.unwrap().is_none());
}

#[sqlx::test]
async fn deleting_student_unlinks_enrollment(pool: DbPool) {
    let student = StudentRepo::insert(&pool, &student_input("CS-001", "Asha Verma"))
        .await
        .unwrap();

    let input: EnrollmentInput = serde_json::from_value(json!({
        "student_id": student.id,
        "programme": "BSc CS",
        "year": 2024,
        "mode": "Regular",
        "general_male": 1
    }))
    .unwrap();
    let enrollment = EnrollmentRepo::insert(&pool, &input).await.unwrap();
    assert_eq!(enrollment.student_id, Some(student.id));

    assert!(StudentRepo::remove(&pool, student.id).await.unwrap());

    let survivor = EnrollmentRepo::find(&pool, enrollment.id)
        .await
        .unwrap()
        .unwrap();
    assert!(survivor.student_id.is_none());
    assert_eq!(survivor.programme.as_deref(), Some("BSc CS"));
}

#[sqlx::test]
async fn staff_summary_totals_roster(pool: DbPool) {
    StaffRepo::insert(
        &pool,
        &serde_json::from_value(json!({
            "name": "Teaching",
            "sanctioned_strength": 40,
            "general_male": 12,
            "general_female": 10,
            "obc_female": 3
        }))
        .unwrap(),
    )
    .await
    .unwrap();
    StaffRepo::insert(
        &pool,
        &serde_json::from_value(json!({
            "name": "Non-Teaching",
            "sanctioned_strength": 15,
            "sc_male": 4
        }))
        .unwrap(),
    )
    .await
    .unwrap();

    let summary = StaffRepo::summary(&pool).await.unwrap();
    assert_eq!(summary.sanctioned_total, 55);
    assert_eq!(summary.strength_total, 29);
}

#[sqlx::test]
async fn programmes_scope_to_their_department(pool: DbPool) {
    let physics = DepartmentRepo::insert(
        &pool,
        &serde_json::from_value(json!({ "name": "Physics" })).unwrap(),
    )
    .await
    .unwrap();
    let maths = DepartmentRepo::insert(
        &pool,
        &serde_json::from_value(json!({ "name": "Mathematics" })).unwrap(),
    )
    .await
    .unwrap();

    for (dept, name) in [
        (physics.id, "MSc Physics"),
        (physics.id, "BSc Physics"),
        (maths.id, "BSc Mathematics"),
    ] {
        let input: ProgrammeInput =
            serde_json::from_value(json!({ "programme": name })).unwrap();
        ProgrammeRepo::insert(&pool, dept, &input).await.unwrap();
    }

    let listed = ProgrammeRepo::list_by_department(&pool, physics.id, None)
        .await
        .unwrap();
    // Alphabetical by programme name.
    let names: Vec<_> = listed.iter().map(|p| p.programme.as_str()).collect();
    assert_eq!(names, ["BSc Physics", "MSc Physics"]);

    let filtered = ProgrammeRepo::list_by_department(&pool, physics.id, Some("msc"))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
}
