//! PDF export handlers.
//!
//! Every record type has a per-record detail sheet at `/{entity}/{id}/pdf`,
//! and exam results additionally have a bulk table export at
//! `/exam-results/pdf`. Responses carry `Content-Type: application/pdf` and
//! an attachment `Content-Disposition` named `<entity>_<id>.pdf`.

use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use campusreg_core::error::CoreError;
use campusreg_core::types::DbId;
use campusreg_db::models::breakdown::{CategoryGenderCount, EnrollmentCount};
use campusreg_db::repositories::{
    DepartmentRepo, EnrollmentRepo, ExamResultRepo, HostelRepo, NssRepo, PlacementRepo,
    ProgrammeRepo, RecordRepo, ScholarshipRepo, StaffRepo, StudentRepo,
};
use campusreg_report::Report;

use crate::error::AppResult;
use crate::state::AppState;

fn pdf_response(filename: String, bytes: Vec<u8>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        bytes,
    )
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn pair(label: &str, value: impl Into<String>) -> (String, String) {
    (label.to_string(), value.into())
}

fn category_gender_pairs(counts: &CategoryGenderCount) -> Vec<(String, String)> {
    vec![
        pair("General (M/F/T)", format!(
            "{} / {} / {}",
            counts.general_male, counts.general_female, counts.general_transgender
        )),
        pair("EWS (M/F/T)", format!(
            "{} / {} / {}",
            counts.ews_male, counts.ews_female, counts.ews_transgender
        )),
        pair("SC (M/F/T)", format!(
            "{} / {} / {}",
            counts.sc_male, counts.sc_female, counts.sc_transgender
        )),
        pair("ST (M/F/T)", format!(
            "{} / {} / {}",
            counts.st_male, counts.st_female, counts.st_transgender
        )),
        pair("OBC (M/F/T)", format!(
            "{} / {} / {}",
            counts.obc_male, counts.obc_female, counts.obc_transgender
        )),
        pair("Total", counts.total().to_string()),
    ]
}

fn enrollment_count_pairs(counts: &EnrollmentCount) -> Vec<(String, String)> {
    vec![
        pair("General (M/F)", format!("{} / {}", counts.general_male, counts.general_female)),
        pair("EWS (M/F)", format!("{} / {}", counts.ews_male, counts.ews_female)),
        pair("SC (M/F)", format!("{} / {}", counts.sc_male, counts.sc_female)),
        pair("ST (M/F)", format!("{} / {}", counts.st_male, counts.st_female)),
        pair("OBC (M/F)", format!("{} / {}", counts.obc_male, counts.obc_female)),
        pair("Transgender", counts.trans_gender.to_string()),
        pair("Total", counts.total().to_string()),
    ]
}

/// GET /students/{id}/pdf
pub async fn student_pdf(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let s = StudentRepo::find(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: StudentRepo::ENTITY,
            id,
        })?;

    let report = Report::new(format!("Student Record: {}", s.name)).key_values(vec![
        pair("Roll No", s.roll_no.clone()),
        pair("Name", s.name.clone()),
        pair("Email", text(&s.email)),
        pair("Phone", text(&s.phone)),
        pair("Date of Birth", text(&s.dob)),
        pair("Gender", text(&s.gender)),
        pair("Address", text(&s.address)),
        pair("Department", text(&s.department)),
        pair("Programme", text(&s.programme)),
        pair("Year", s.year.map(|y| y.to_string()).unwrap_or_default()),
    ]);
    Ok(pdf_response(format!("student_{id}.pdf"), report.render()?))
}

/// GET /hostels/{id}/pdf
pub async fn hostel_pdf(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let h = HostelRepo::find(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: HostelRepo::ENTITY,
            id,
        })?;

    let report = Report::new(format!("Hostel Record: {}", h.name)).key_values(vec![
        pair("Name", h.name.clone()),
        pair("Warden", text(&h.warden)),
        pair("Type", text(&h.kind)),
        pair("Capacity", h.capacity.to_string()),
        pair("Students Residing", h.students_residing.to_string()),
    ]);
    Ok(pdf_response(format!("hostel_{id}.pdf"), report.render()?))
}

/// GET /departments/{id}/pdf -- includes the department's programmes.
pub async fn department_pdf(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let d = DepartmentRepo::find(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: DepartmentRepo::ENTITY,
            id,
        })?;
    let programmes = ProgrammeRepo::list_by_department(&state.pool, id, None).await?;

    let rows = programmes
        .iter()
        .map(|p| {
            vec![
                p.programme.clone(),
                text(&p.level),
                text(&p.exam_system),
                p.seats.total().to_string(),
            ]
        })
        .collect();

    let report = Report::new(format!("Department Record: {}", d.name))
        .key_values(vec![
            pair("Name", d.name.clone()),
            pair("Code", text(&d.code)),
            pair("Head of Department", text(&d.hod)),
        ])
        .heading("Programmes")
        .table(
            vec![
                "Programme".into(),
                "Level".into(),
                "Exam System".into(),
                "Total Seats".into(),
            ],
            rows,
        );
    Ok(pdf_response(format!("department_{id}.pdf"), report.render()?))
}

/// GET /programmes/{id}/pdf
pub async fn programme_pdf(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let p = ProgrammeRepo::find(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: ProgrammeRepo::ENTITY,
            id,
        })?;

    let report = Report::new(format!("Programme Record: {}", p.programme))
        .key_values(vec![
            pair("Programme", p.programme.clone()),
            pair("Level", text(&p.level)),
            pair("Year of Start", text(&p.year_of_start)),
            pair("Admission Criteria", text(&p.admission_criteria)),
            pair(
                "Duration",
                format!(
                    "{} years {} months",
                    p.duration_years.unwrap_or(0),
                    p.duration_months.unwrap_or(0)
                ),
            ),
            pair("Exam System", text(&p.exam_system)),
            pair("Approved By", text(&p.approved_by)),
        ])
        .heading("Approved Seats")
        .key_values(vec![
            pair("General", p.seats.seats_general.to_string()),
            pair("SC", p.seats.seats_sc.to_string()),
            pair("ST", p.seats.seats_st.to_string()),
            pair("OBC", p.seats.seats_obc.to_string()),
            pair("EWS", p.seats.seats_ews.to_string()),
            pair("Supernumerary", p.seats.seats_supernumerary.to_string()),
            pair("Total", p.seats.total().to_string()),
        ]);
    Ok(pdf_response(format!("programme_{id}.pdf"), report.render()?))
}

/// GET /enrollments/{id}/pdf
pub async fn enrollment_pdf(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let e = EnrollmentRepo::find(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: EnrollmentRepo::ENTITY,
            id,
        })?;

    let mut pairs = vec![
        pair("Programme", text(&e.programme)),
        pair("Year", e.year.map(|y| y.to_string()).unwrap_or_default()),
        pair("Mode", text(&e.mode)),
        pair(
            "Linked Student",
            e.student_id.map(|s| s.to_string()).unwrap_or_default(),
        ),
    ];
    pairs.extend(enrollment_count_pairs(&e.counts));

    let report = Report::new(format!("Enrollment Record #{id}")).key_values(pairs);
    Ok(pdf_response(format!("enrollment_{id}.pdf"), report.render()?))
}

/// GET /placements/{id}/pdf
pub async fn placement_pdf(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let p = PlacementRepo::find(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: PlacementRepo::ENTITY,
            id,
        })?;

    let report = Report::new(format!("Placement Record: {}", p.company)).key_values(vec![
        pair("Company", p.company.clone()),
        pair("Role", text(&p.role)),
        pair("Date", text(&p.date)),
        pair("Details", text(&p.details)),
    ]);
    Ok(pdf_response(format!("placement_{id}.pdf"), report.render()?))
}

/// GET /staff/{id}/pdf
pub async fn staff_pdf(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let s = StaffRepo::find(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: StaffRepo::ENTITY,
            id,
        })?;

    let mut pairs = vec![
        pair("Name", s.name.clone()),
        pair("Staff Type", text(&s.staff_type)),
        pair("Group", text(&s.group)),
        pair("Sanctioned Strength", s.sanctioned_strength.to_string()),
    ];
    pairs.extend(category_gender_pairs(&s.strength));
    pairs.push(pair("Actual Strength", s.total_strength().to_string()));

    let report = Report::new(format!("Staff Record: {}", s.name)).key_values(pairs);
    Ok(pdf_response(format!("staff_{id}.pdf"), report.render()?))
}

/// GET /scholarships/{id}/pdf
pub async fn scholarship_pdf(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let s = ScholarshipRepo::find(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: ScholarshipRepo::ENTITY,
            id,
        })?;

    let report = Report::new(format!("Scholarship Record: {}", s.title)).key_values(vec![
        pair("Title", s.title.clone()),
        pair("Amount", text(&s.amount)),
        pair("Criteria", text(&s.criteria)),
    ]);
    Ok(pdf_response(format!("scholarship_{id}.pdf"), report.render()?))
}

/// GET /nss-enrollments/{id}/pdf
pub async fn nss_pdf(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let n = NssRepo::find(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: NssRepo::ENTITY,
            id,
        })?;

    let report = Report::new(format!("NSS Activity Record: {}", n.activity)).key_values(vec![
        pair("Activity", n.activity.clone()),
        pair("Date", text(&n.date)),
        pair("Male", n.male.to_string()),
        pair("Female", n.female.to_string()),
        pair("Total", n.total().to_string()),
        pair("Remarks", text(&n.remarks)),
    ]);
    Ok(pdf_response(format!("nss_enrollment_{id}.pdf"), report.render()?))
}

/// GET /exam-results/{id}/pdf
pub async fn exam_result_pdf(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let r = ExamResultRepo::find(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: ExamResultRepo::ENTITY,
            id,
        })?;

    let mut pairs = vec![pair("Programme", r.programme.clone())];
    pairs.extend(category_gender_pairs(&r.counts));

    let report = Report::new(format!("Exam Result: {}", r.programme)).key_values(pairs);
    Ok(pdf_response(format!("exam_result_{id}.pdf"), report.render()?))
}

/// GET /exam-results/pdf -- every result as one wide landscape table,
/// ordered by programme name.
pub async fn exam_results_bulk_pdf(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let results = ExamResultRepo::list_by_programme(&state.pool).await?;

    let headers: Vec<String> = [
        "Programme", "Gen M", "Gen F", "Gen T", "EWS M", "EWS F", "EWS T", "SC M", "SC F",
        "SC T", "ST M", "ST F", "ST T", "OBC M", "OBC F", "OBC T", "Total",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let rows = results
        .iter()
        .map(|r| {
            let c = &r.counts;
            vec![
                r.programme.clone(),
                c.general_male.to_string(),
                c.general_female.to_string(),
                c.general_transgender.to_string(),
                c.ews_male.to_string(),
                c.ews_female.to_string(),
                c.ews_transgender.to_string(),
                c.sc_male.to_string(),
                c.sc_female.to_string(),
                c.sc_transgender.to_string(),
                c.st_male.to_string(),
                c.st_female.to_string(),
                c.st_transgender.to_string(),
                c.obc_male.to_string(),
                c.obc_female.to_string(),
                c.obc_transgender.to_string(),
                r.total().to_string(),
            ]
        })
        .collect();

    let report = Report::new("Examination Results")
        .landscape()
        .table(headers, rows);
    Ok(pdf_response("exam_results.pdf".to_string(), report.render()?))
}
