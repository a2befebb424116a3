//! Student record routes.
//!
//! Storage is synchronous, so every workflow call runs on actix's blocking
//! pool via `web::block`.

use actix_web::{delete, get, post, put, web, HttpResponse};
use tracing::debug;

use outlook_core::types::access::GatedAction;
use outlook_core::{OutlookResult, RawSubmission, RecordId};

use crate::errors::{AppError, AppResult};
use crate::middleware::Caller;
use crate::models::{HistoryResponse, ReportResponse, SubmitResponse};
use crate::state::{AppState, Workflow};

/// Configure student routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/students")
            .service(submit_student)
            .service(student_history)
            .service(student_report)
            .service(update_student)
            .service(delete_student),
    );
}

/// Score and persist one submission.
#[post("")]
async fn submit_student(
    state: web::Data<AppState>,
    caller: Caller,
    form: web::Form<RawSubmission>,
) -> AppResult<HttpResponse> {
    caller.require(GatedAction::Submit)?;
    let raw = form.into_inner();
    let submitted = run_blocking(state, move |wf| wf.submit(&raw)).await?;
    debug!(user = %caller.user, id = submitted.record.id, "submission stored");
    Ok(HttpResponse::Created().json(SubmitResponse::from(submitted)))
}

#[get("/history")]
async fn student_history(state: web::Data<AppState>, caller: Caller) -> AppResult<HttpResponse> {
    caller.require(GatedAction::ViewHistory)?;
    let stats = run_blocking(state, |wf| wf.history()).await?;
    Ok(HttpResponse::Ok().json(HistoryResponse::from(stats)))
}

#[get("/{id}/report")]
async fn student_report(
    state: web::Data<AppState>,
    caller: Caller,
    path: web::Path<RecordId>,
) -> AppResult<HttpResponse> {
    caller.require(GatedAction::ViewReport)?;
    let id = path.into_inner();
    let fields = run_blocking(state, move |wf| wf.report(id)).await?;
    Ok(HttpResponse::Ok().json(ReportResponse { id, fields }))
}

#[put("/{id}")]
async fn update_student(
    state: web::Data<AppState>,
    caller: Caller,
    path: web::Path<RecordId>,
    form: web::Form<RawSubmission>,
) -> AppResult<HttpResponse> {
    caller.require(GatedAction::EditRecord)?;
    let id = path.into_inner();
    let raw = form.into_inner();
    let record = run_blocking(state, move |wf| wf.edit(id, &raw)).await?;
    Ok(HttpResponse::Ok().json(record))
}

#[delete("/{id}")]
async fn delete_student(
    state: web::Data<AppState>,
    caller: Caller,
    path: web::Path<RecordId>,
) -> AppResult<HttpResponse> {
    caller.require(GatedAction::DeleteRecord)?;
    let id = path.into_inner();
    run_blocking(state, move |wf| wf.delete(id)).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn run_blocking<T, F>(state: web::Data<AppState>, f: F) -> AppResult<T>
where
    F: FnOnce(&Workflow) -> OutlookResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(move || f(&state.workflow))
        .await
        .map_err(|_| AppError::Internal)?
        .map_err(AppError::from)
}
