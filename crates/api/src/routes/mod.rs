pub mod health;

use axum::routing::get;
use axum::Router;

use campusreg_db::repositories::{
    DepartmentRepo, EnrollmentRepo, ExamResultRepo, HostelRepo, NssRepo, PlacementRepo,
    ScholarshipRepo, StaffRepo, StudentRepo,
};

use crate::crud::{self, crud_routes};
use crate::handlers::{dashboard, enrollments, exports, programmes, staff};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dashboard                              overview (GET)
///
/// /students                               list, create
/// /students/{id}                          get, update, delete
/// /students/{id}/pdf                      detail sheet (GET)
///
/// /hostels, /placements, /scholarships,
/// /nss-enrollments                        same CRUD + pdf shape
///
/// /departments                            list, create
/// /departments/{id}                       get, update, delete (cascades to programmes)
/// /departments/{id}/programmes            list, create
/// /departments/{id}/pdf                   detail sheet with programme table (GET)
///
/// /programmes/{id}                        get, update, delete
/// /programmes/{id}/pdf                    detail sheet (GET)
///
/// /enrollments                            list, create (student link resolved here)
/// /enrollments/{id}                       get, update, delete
/// /enrollments/{id}/pdf                   detail sheet (GET)
///
/// /staff                                  list, create
/// /staff/summary                          roster totals (GET)
/// /staff/{id}                             get, update, delete
/// /staff/{id}/pdf                         detail sheet (GET)
///
/// /exam-results                           list, create
/// /exam-results/pdf                       bulk table export (GET)
/// /exam-results/{id}                      get, update, delete
/// /exam-results/{id}/pdf                  detail sheet (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    let enrollment_routes = Router::new()
        .route(
            "/",
            get(crud::list::<EnrollmentRepo>).post(enrollments::create),
        )
        .route(
            "/{id}",
            get(crud::fetch::<EnrollmentRepo>)
                .put(crud::update::<EnrollmentRepo>)
                .delete(crud::remove::<EnrollmentRepo>),
        )
        .route("/{id}/pdf", get(exports::enrollment_pdf));

    let programme_routes = Router::new()
        .route(
            "/{id}",
            get(programmes::fetch)
                .put(programmes::update)
                .delete(programmes::remove),
        )
        .route("/{id}/pdf", get(exports::programme_pdf));

    Router::new()
        .route("/dashboard", get(dashboard::overview))
        .nest(
            "/students",
            crud_routes::<StudentRepo>().route("/{id}/pdf", get(exports::student_pdf)),
        )
        .nest(
            "/hostels",
            crud_routes::<HostelRepo>().route("/{id}/pdf", get(exports::hostel_pdf)),
        )
        .nest(
            "/departments",
            crud_routes::<DepartmentRepo>()
                .route(
                    "/{id}/programmes",
                    get(programmes::list_by_department).post(programmes::create),
                )
                .route("/{id}/pdf", get(exports::department_pdf)),
        )
        .nest("/programmes", programme_routes)
        .nest("/enrollments", enrollment_routes)
        .nest(
            "/placements",
            crud_routes::<PlacementRepo>().route("/{id}/pdf", get(exports::placement_pdf)),
        )
        .nest(
            "/staff",
            crud_routes::<StaffRepo>()
                .route("/summary", get(staff::summary))
                .route("/{id}/pdf", get(exports::staff_pdf)),
        )
        .nest(
            "/scholarships",
            crud_routes::<ScholarshipRepo>().route("/{id}/pdf", get(exports::scholarship_pdf)),
        )
        .nest(
            "/nss-enrollments",
            crud_routes::<NssRepo>().route("/{id}/pdf", get(exports::nss_pdf)),
        )
        .nest(
            "/exam-results",
            crud_routes::<ExamResultRepo>()
                .route("/pdf", get(exports::exam_results_bulk_pdf))
                .route("/{id}/pdf", get(exports::exam_result_pdf)),
        )
}
