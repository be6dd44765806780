//! jobctl
//!
//! Loads a job board page, scans its controls and performs one action
//! against the backend from the terminal.

use std::env;
use std::process::ExitCode;

use client::api::JobsApi;
use client::{terminal, ActionKind, ClientConfig, JobActionController, PageSnapshot, ShareOutcome};
use common::{paths, SearchParams};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "Usage:
  jobctl save <job-id> [page-path]
  jobctl apply <job-id> [page-path]
  jobctl share <page-path>
  jobctl search [query] [location]";

enum Command {
    Save { job_id: String, page: String },
    Apply { job_id: String, page: String },
    Share { page: String },
    Search(SearchParams),
}

fn parse_args(args: &[String]) -> Option<Command> {
    let arg = |i: usize| args.get(i).cloned();
    match args.first().map(String::as_str)? {
        "save" => {
            let job_id = arg(1)?;
            let page = arg(2).unwrap_or_else(|| paths::detail(&job_id));
            Some(Command::Save { job_id, page })
        }
        "apply" => {
            let job_id = arg(1)?;
            let page = arg(2).unwrap_or_else(|| paths::detail(&job_id));
            Some(Command::Apply { job_id, page })
        }
        "share" => Some(Command::Share { page: arg(1)? }),
        "search" => Some(Command::Search(SearchParams {
            q: arg(1).unwrap_or_default(),
            location: arg(2).unwrap_or_default(),
        })),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = parse_args(&args) else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let config = ClientConfig::load()?;
    info!("🔍 Job board at {}", config.base_url);

    let page_path = match &command {
        Command::Save { page, .. } | Command::Apply { page, .. } | Command::Share { page } => page.as_str(),
        Command::Search(_) => paths::LISTING,
    };
    let page_url = config.base_url.join(page_path)?;

    let api = JobsApi::new(&config)?;
    let page = match api.page(page_url.clone()).await {
        Ok(page) => page,
        Err(err) => {
            error!("Failed to load {page_url}: {err}");
            PageSnapshot::parse(page_url.clone(), "")
        }
    };

    let controller = JobActionController::new(api, &config, &page, terminal::host(page_url));

    match command {
        Command::Save { job_id, .. } => {
            let outcome = controller.toggle_save(&job_id).await;
            info!("Save {job_id}: {outcome:?}");
            if let Some(markup) = controller.render_button(&job_id, ActionKind::Save) {
                println!("{markup}");
            }
        }
        Command::Apply { job_id, .. } => {
            let outcome = controller.submit_application(&job_id).await;
            info!("Apply {job_id}: {outcome:?}");
            if let Some(markup) = controller.render_button(&job_id, ActionKind::Apply) {
                println!("{markup}");
            }
        }
        Command::Share { page } => {
            if controller.share_job() == ShareOutcome::Unavailable {
                warn!("{page} has no share control");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Search(params) => {
            println!("{}", client::render::LOADING_HEADER);
            let view = controller.submit_search(params).await;
            println!("{}\n{}", view.count_header, view.listing_html);
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_save_defaults_to_detail_page() {
        match parse_args(&args(&["save", "42"])) {
            Some(Command::Save { job_id, page }) => {
                assert_eq!(job_id, "42");
                assert_eq!(page, "/jobs/42");
            }
            _ => panic!("expected save command"),
        }
    }

    #[test]
    fn test_search_allows_empty_terms() {
        match parse_args(&args(&["search"])) {
            Some(Command::Search(params)) => assert_eq!(params, SearchParams::default()),
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse_args(&args(&["launch"])).is_none());
        assert!(parse_args(&args(&["apply"])).is_none());
    }
}
