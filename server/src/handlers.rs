use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use common::{ActionResponse, SearchParams, SearchResponse, apply_form, paths};
use tracing::info;

use crate::errors::AppError;
use crate::search::find_jobs;
use crate::state::{AppState, Application};
use crate::ui;

pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
const RESUME_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

pub async fn root() -> Redirect {
    Redirect::to(paths::LISTING)
}

pub async fn listing_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let jobs = find_jobs(&state, &params)?;
    let store = state.store.lock().await;
    Ok(Html(ui::render_listing(&jobs, &store, state.authenticated)))
}

pub async fn detail_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let Some(job) = state.job(&id) else {
        return Err((StatusCode::NOT_FOUND, Html(ui::render_not_found())));
    };
    let store = state.store.lock().await;
    Ok(Html(ui::render_detail(job, &store, state.authenticated)))
}

pub async fn login_page() -> Html<String> {
    Html(ui::render_login())
}

pub async fn search_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    state.hits.search();
    let jobs = find_jobs(&state, &params)?;
    info!("🔍 Search q={:?} location={:?}: {} jobs", params.q, params.location, jobs.len());
    Ok(Json(SearchResponse {
        success: true,
        count: jobs.len(),
        jobs,
    }))
}

pub async fn save_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, AppError> {
    state.hits.save();
    require_login(&state)?;

    state.store.lock().await.saved.insert(id.clone());
    info!("💾 Saved job {id}");
    Ok(Json(ActionResponse::ok("Job saved successfully!")))
}

pub async fn unsave_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, AppError> {
    state.hits.unsave();
    require_login(&state)?;

    if !state.store.lock().await.saved.remove(&id) {
        return Ok(Json(ActionResponse::failed("Job not found in saved list.")));
    }
    info!("❎ Unsaved job {id}");
    Ok(Json(ActionResponse::ok("Job removed from saved list.")))
}

pub async fn apply_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<ActionResponse>, AppError> {
    state.hits.apply();
    require_login(&state)?;

    let mut form = ApplyForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == apply_form::RESUME {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(AppError::internal)?;
            if !file_name.is_empty() && !bytes.is_empty() {
                form.resume = Some((file_name, bytes.len()));
            }
            continue;
        }
        let value = field.text().await.map_err(AppError::internal)?;
        let value = value.trim().to_string();
        match name.as_str() {
            apply_form::NAME => form.name = value,
            apply_form::EMAIL => form.email = value,
            apply_form::PHONE => form.phone = Some(value).filter(|v| !v.is_empty()),
            apply_form::COVER_LETTER => form.cover_letter = value,
            _ => {}
        }
    }

    if form.name.is_empty() || form.email.is_empty() {
        return Err(AppError::bad_request("Name and Email are required!"));
    }
    if let Some((file_name, len)) = &form.resume {
        check_resume(file_name, *len)?;
    }

    let mut store = state.store.lock().await;
    if store.applications.contains_key(&id) {
        return Ok(Json(ActionResponse::failed("You already applied to this job.")));
    }
    info!("✅ Application for job {id} from {}", form.email);
    store.applications.insert(
        id,
        Application {
            name: form.name,
            email: form.email,
            phone: form.phone,
            cover_letter: form.cover_letter,
            resume_file: form.resume.map(|(file_name, _)| file_name),
        },
    );
    Ok(Json(ActionResponse::ok("Application submitted successfully!")))
}

#[derive(Default)]
struct ApplyForm {
    name: String,
    email: String,
    phone: Option<String>,
    cover_letter: String,
    resume: Option<(String, usize)>,
}

fn require_login(state: &AppState) -> Result<(), AppError> {
    if state.authenticated {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

fn check_resume(file_name: &str, len: usize) -> Result<(), AppError> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !RESUME_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::bad_request("Invalid file type."));
    }
    if len > MAX_RESUME_BYTES {
        return Err(AppError::bad_request("File too large (max 5MB)."));
    }
    Ok(())
}
