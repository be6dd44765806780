//! Server-rendered pages carrying the `data-*` control markup.

use common::markup::{self, escape};
use common::{JobSearchResult, paths};

use crate::state::Store;

fn page(title: &str, authenticated: bool, page_kind: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body {auth_attr}="{authenticated}" {page_attr}="{page_kind}">
{body}
</body>
</html>"#,
        title = escape(title),
        auth_attr = markup::AUTHENTICATED_ATTR,
        page_attr = markup::PAGE_ATTR,
    )
}

fn save_button(job: &JobSearchResult, saved: bool, detail: bool) -> String {
    let (icon, label, classes) = match (detail, saved) {
        (false, false) => ("far fa-bookmark mr-2", "Save Job", "px-4 py-2 rounded-lg"),
        (false, true) => (
            "fas fa-bookmark mr-2 text-blue-600",
            "Saved",
            "px-4 py-2 rounded-lg bg-green-100 text-green-700",
        ),
        (true, false) => (
            "far fa-bookmark mr-3",
            "Save for Later",
            "border px-6 py-3 rounded-lg text-gray-700 border-gray-300",
        ),
        (true, true) => (
            "fas fa-bookmark mr-3 text-blue-600",
            "Saved",
            "border px-6 py-3 rounded-lg border-blue-600 text-blue-600",
        ),
    };
    format!(
        r#"<button class="{save_class} {classes}" {id_attr}="{id}" {state_attr}="{saved}"><i class="{icon}"></i> <span>{label}</span></button>"#,
        save_class = markup::SAVE_CLASS,
        id_attr = markup::JOB_ID_ATTR,
        id = escape(&job.id),
        state_attr = markup::SAVED_ATTR,
    )
}

fn apply_button(job: &JobSearchResult, applied: bool, detail: bool) -> String {
    let margin = if detail { "mr-3" } else { "mr-2" };
    let (icon, label, classes, disabled) = if applied {
        ("fas fa-check", "Applied", "text-white px-4 py-2 rounded-lg bg-green-600", " disabled")
    } else {
        (
            "fas fa-paper-plane",
            "Apply Now",
            "text-white px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700",
            "",
        )
    };
    format!(
        r#"<button class="{apply_class} {classes}" {id_attr}="{id}" {state_attr}="{applied}"{disabled}><i class="{icon} {margin}"></i> <span>{label}</span></button>"#,
        apply_class = markup::APPLY_CLASS,
        id_attr = markup::JOB_ID_ATTR,
        id = escape(&job.id),
        state_attr = markup::APPLIED_ATTR,
    )
}

pub fn render_listing(jobs: &[JobSearchResult], store: &Store, authenticated: bool) -> String {
    let cards = jobs
        .iter()
        .map(|job| {
            format!(
                r#"<div class="job-card bg-white rounded-2xl shadow-md p-6">
  <h3 class="text-xl font-semibold"><a href="{href}">{title}</a></h3>
  <p class="text-gray-600">{company} • {location}</p>
  <div class="flex gap-2">{save}{apply}</div>
</div>"#,
                href = paths::detail(&job.id),
                title = escape(&job.title),
                company = escape(&job.company),
                location = escape(&job.location),
                save = save_button(job, store.saved.contains(&job.id), false),
                apply = apply_button(job, store.applications.contains_key(&job.id), false),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"<h2 id="job-count">Available Jobs ({count})</h2>
<div id="job-listings">
{cards}
</div>"#,
        count = jobs.len(),
    );
    page("Jobs", authenticated, "listing", &body)
}

pub fn render_detail(job: &JobSearchResult, store: &Store, authenticated: bool) -> String {
    let salary = if job.salary.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="text-lg font-semibold">{}</p>"#, escape(&job.salary))
    };
    let body = format!(
        r#"<section class="{container}">
  <h1 class="text-3xl font-bold">{title}</h1>
  <p class="text-gray-600">{company} • {location} • {job_type}</p>
  {salary}
  <p class="text-gray-700">{description}</p>
  <p class="text-sm text-gray-500">Posted {posted} · {source}</p>
  <div class="flex gap-3">
    {apply}
    {save}
    <button class="{share_class} border px-6 py-3 rounded-lg"><i class="fas fa-share-alt mr-3"></i> <span>Share</span></button>
  </div>
</section>"#,
        container = markup::DETAIL_CONTAINER_CLASS,
        title = escape(&job.title),
        company = escape(&job.company),
        location = escape(&job.location),
        job_type = escape(&job.job_type),
        description = escape(&job.description),
        posted = escape(&job.posted_date),
        source = escape(&job.source),
        apply = apply_button(job, store.applications.contains_key(&job.id), true),
        save = save_button(job, store.saved.contains(&job.id), true),
        share_class = markup::SHARE_CLASS,
    );
    page(&job.title, authenticated, markup::DETAIL_PAGE, &body)
}

pub fn render_not_found() -> String {
    page(
        "Not found",
        false,
        "error",
        r#"<h1>Job not found or unavailable.</h1><a href="/jobs/">Browse all jobs</a>"#,
    )
}

pub fn render_login() -> String {
    page(
        "Login",
        false,
        "login",
        r#"<form method="post" action="/auth/login"><input name="email"><input name="password" type="password"><button>Login</button></form>"#,
    )
}
