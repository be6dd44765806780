//! The job action controller.
//!
//! Binds clicks on save, apply and share controls to backend calls and keeps
//! every control showing the state its last successful round-trip
//! confirmed. The registry is never locked across an await.

use std::sync::{Mutex, MutexGuard};

use common::SearchParams;
use reqwest::Url;
use tracing::{debug, error, info, warn};

use crate::api::JobsApi;
use crate::button::{ActionKind, JobActionButton};
use crate::config::ClientConfig;
use crate::error::ActionError;
use crate::page::PageSnapshot;
use crate::ports::{Clipboard, Dialog, FormOutcome, Host, Level, Navigator};
use crate::registry::{BeginError, ControlKey, Registry};
use crate::search::{self, SearchView};
use crate::toast::Toaster;

const SAVED_FALLBACK: &str = "Job saved successfully!";
const UNSAVED_FALLBACK: &str = "Job removed from saved list.";
const SAVE_REJECTED: &str = "Failed to update saved job";
const SAVE_FAILED: &str = "Unable to save this job. Please try again later.";
const APPLIED_FALLBACK: &str = "Application submitted successfully!";
const APPLY_FAILED: &str = "Failed to submit application.";
const ALREADY_APPLIED: &str = "You've already applied for this job!";
const LINK_COPIED: &str = "Link copied to clipboard!";
const COPY_MANUALLY: &str = "Copy this link manually:";

/// How a click on a save or apply control ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server confirmed the new state.
    Confirmed(bool),
    /// The server answered `success: false`.
    Rejected,
    /// Network failure, bad status or undecodable body.
    Failed,
    LoginRequired,
    /// A request for this control is still outstanding.
    Busy,
    AlreadyApplied,
    Cancelled,
    UnknownControl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Copied,
    ShownForManualCopy,
    /// The page has no share control.
    Unavailable,
}

/// Toast shown when a failure carries no server message.
struct Fallback {
    level: Level,
    title: &'static str,
    detail: Option<&'static str>,
}

const SAVE_REJECTED_TOAST: Fallback = Fallback {
    level: Level::Warning,
    title: SAVE_REJECTED,
    detail: None,
};
const SAVE_FAILED_TOAST: Fallback = Fallback {
    level: Level::Error,
    title: "Server Error",
    detail: Some(SAVE_FAILED),
};
const APPLY_FAILED_TOAST: Fallback = Fallback {
    level: Level::Error,
    title: APPLY_FAILED,
    detail: None,
};

pub struct JobActionController {
    api: JobsApi,
    authenticated: bool,
    has_share: bool,
    login_path: String,
    registry: Mutex<Registry>,
    toaster: Toaster,
    dialog: Box<dyn Dialog>,
    navigator: Box<dyn Navigator>,
    clipboard: Box<dyn Clipboard>,
}

impl JobActionController {
    /// Takes the `api` that loaded `page`, so its session cookies carry over
    /// to the actions.
    pub fn new(api: JobsApi, config: &ClientConfig, page: &PageSnapshot, host: Host) -> Self {
        let registry = Registry::from_snapshot(page);
        info!(
            "Job actions ready: {} controls, authenticated={}",
            registry.len(),
            page.authenticated
        );

        Self {
            api,
            authenticated: page.authenticated,
            has_share: page.has_share,
            login_path: config.login_path.clone(),
            registry: Mutex::new(registry),
            toaster: Toaster::new(host.notifier, config.toast_duration),
            dialog: host.dialog,
            navigator: host.navigator,
            clipboard: host.clipboard,
        }
    }

    /// Snapshot of one control.
    pub fn button(&self, job_id: &str, kind: ActionKind) -> Option<JobActionButton> {
        self.registry().get(&ControlKey::new(job_id, kind)).cloned()
    }

    pub fn render_button(&self, job_id: &str, kind: ActionKind) -> Option<String> {
        self.registry().render(&ControlKey::new(job_id, kind))
    }

    /// Saves the job, or unsaves it when it is confirmed saved.
    pub async fn toggle_save(&self, job_id: &str) -> ActionOutcome {
        if !self.authenticated {
            return self.require_login();
        }

        let key = ControlKey::new(job_id, ActionKind::Save);
        let begun = self.registry().begin(&key);
        let saved = match begun {
            Ok(saved) => saved,
            Err(reason) => return refused(&key, reason),
        };

        let result = if saved {
            self.api.unsave(job_id).await
        } else {
            self.api.save(job_id).await
        };

        match result {
            Ok(response) => {
                let target = !saved;
                self.registry().finish(&key, Some(target));
                info!("Job {job_id} saved={target} confirmed");
                let fallback = if target { SAVED_FALLBACK } else { UNSAVED_FALLBACK };
                self.toaster
                    .success(response.message.unwrap_or_else(|| fallback.to_string()));
                ActionOutcome::Confirmed(target)
            }
            Err(err) => {
                self.registry().finish(&key, None);
                self.report_failure(job_id, err, SAVE_REJECTED_TOAST, SAVE_FAILED_TOAST)
            }
        }
    }

    /// Collects the apply form and submits it once.
    pub async fn submit_application(&self, job_id: &str) -> ActionOutcome {
        if !self.authenticated {
            return self.require_login();
        }

        let key = ControlKey::new(job_id, ActionKind::Apply);
        let applied = self.registry().get(&key).map(JobActionButton::confirmed);
        match applied {
            None => return refused(&key, BeginError::Unknown),
            Some(true) => {
                debug!("Job {job_id} already applied, no request");
                self.toaster.info(ALREADY_APPLIED);
                return ActionOutcome::AlreadyApplied;
            }
            Some(false) => {}
        }

        let begun = self.registry().begin(&key);
        if let Err(reason) = begun {
            return refused(&key, reason);
        }

        let mut validation = None;
        let submission = loop {
            match self.dialog.application_form(job_id, validation) {
                FormOutcome::Cancelled => {
                    self.registry().finish(&key, None);
                    debug!("Apply form for job {job_id} cancelled");
                    return ActionOutcome::Cancelled;
                }
                FormOutcome::Submitted(submission) => match submission.validate() {
                    Ok(()) => break submission,
                    Err(message) => validation = Some(message),
                },
            }
        };

        match self.api.apply(job_id, &submission).await {
            Ok(response) => {
                self.registry().finish(&key, Some(true));
                info!("Application for job {job_id} confirmed");
                self.toaster
                    .success(response.message.unwrap_or_else(|| APPLIED_FALLBACK.to_string()));
                ActionOutcome::Confirmed(true)
            }
            Err(err) => {
                self.registry().finish(&key, None);
                self.report_failure(job_id, err, APPLY_FAILED_TOAST, APPLY_FAILED_TOAST)
            }
        }
    }

    /// Copies the page URL, falling back to showing it.
    pub fn share_job(&self) -> ShareOutcome {
        if !self.has_share {
            debug!("No share control on this page");
            return ShareOutcome::Unavailable;
        }
        let url = self.navigator.current_url();
        match self.clipboard.write_text(url.as_str()) {
            Ok(()) => {
                self.toaster.success(LINK_COPIED);
                ShareOutcome::Copied
            }
            Err(err) => {
                warn!("{err}");
                self.dialog.show_link(COPY_MANUALLY, url.as_str());
                ShareOutcome::ShownForManualCopy
            }
        }
    }

    /// Runs the search described by the current URL.
    pub async fn load_search(&self) -> SearchView {
        let params = search::params_from_url(&self.navigator.current_url());
        self.run_search(params).await
    }

    /// Records the search in the URL without a reload, then runs it.
    pub async fn submit_search(&self, params: SearchParams) -> SearchView {
        let url: Url = search::with_params(&self.navigator.current_url(), &params);
        self.navigator.push_url(&url);
        self.run_search(params).await
    }

    async fn run_search(&self, params: SearchParams) -> SearchView {
        match self.api.search(&params).await {
            Ok(response) if response.success => {
                debug!("Search q={:?} location={:?}: {} jobs", params.q, params.location, response.count);
                SearchView::from_response(params, &response)
            }
            Ok(_) => {
                warn!("Search q={:?} reported failure", params.q);
                SearchView::failed(params)
            }
            Err(err) => {
                error!("Error fetching jobs: {err}");
                SearchView::failed(params)
            }
        }
    }

    fn require_login(&self) -> ActionOutcome {
        info!("Not authenticated, redirecting to {}", self.login_path);
        self.navigator.redirect(&self.login_path);
        ActionOutcome::LoginRequired
    }

    fn report_failure(
        &self,
        job_id: &str,
        err: ActionError,
        rejected: Fallback,
        transport: Fallback,
    ) -> ActionOutcome {
        match err {
            ActionError::NotAuthenticated => self.require_login(),
            err if err.is_transport() => {
                error!("Job {job_id}: {err}");
                self.notify(transport);
                ActionOutcome::Failed
            }
            err => {
                warn!("Job {job_id}: {err}");
                match err.server_message() {
                    Some(message) => self.toaster.warning(message),
                    None => self.notify(rejected),
                }
                ActionOutcome::Rejected
            }
        }
    }

    fn notify(&self, fallback: Fallback) {
        self.toaster.notify(
            fallback.level,
            fallback.title,
            fallback.detail.map(str::to_string),
        );
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn refused(key: &ControlKey, reason: BeginError) -> ActionOutcome {
    match reason {
        BeginError::Busy => {
            debug!("{:?} for job {} still in flight", key.kind, key.job_id);
            ActionOutcome::Busy
        }
        BeginError::Unknown => {
            warn!("No {:?} control for job {}", key.kind, key.job_id);
            ActionOutcome::UnknownControl
        }
    }
}
