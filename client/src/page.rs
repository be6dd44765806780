//! Scans a server-rendered page for interactive job controls.

use common::markup;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::button::{ActionKind, Surface};

/// A save or apply control as found in the page markup.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSpec {
    pub job_id: String,
    pub kind: ActionKind,
    pub surface: Surface,
    pub confirmed: bool,
    pub classes: Vec<String>,
}

/// Everything the controller needs to know about a rendered page.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub url: Url,
    pub authenticated: bool,
    pub controls: Vec<ControlSpec>,
    pub has_share: bool,
}

impl PageSnapshot {
    pub fn parse(url: Url, html: &str) -> Self {
        let document = Html::parse_document(html);

        let body = document.select(&selector("body")).next();
        let authenticated = body
            .and_then(|el| el.value().attr(markup::AUTHENTICATED_ATTR))
            .map(|v| v == "true")
            .unwrap_or(false);
        let detail_page = body
            .and_then(|el| el.value().attr(markup::PAGE_ATTR))
            .map(|v| v == markup::DETAIL_PAGE)
            .unwrap_or(false);

        let mut controls = Vec::new();
        let kinds = [
            (markup::SAVE_CLASS, ActionKind::Save),
            (markup::APPLY_CLASS, ActionKind::Apply),
            (markup::QUICK_APPLY_CLASS, ActionKind::Apply),
        ];
        for (class, kind) in kinds {
            for element in document.select(&selector(&format!(".{class}"))) {
                if let Some(control) = control_spec(element, kind, detail_page) {
                    controls.push(control);
                }
            }
        }

        let has_share = document
            .select(&selector(&format!(".{}", markup::SHARE_CLASS)))
            .next()
            .is_some();

        debug!(
            "Scanned {}: {} controls, authenticated={}",
            url,
            controls.len(),
            authenticated
        );

        Self {
            url,
            authenticated,
            controls,
            has_share,
        }
    }
}

fn control_spec(element: ElementRef<'_>, kind: ActionKind, detail_page: bool) -> Option<ControlSpec> {
    let value = element.value();
    let job_id = match value.attr(markup::JOB_ID_ATTR).map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            warn!("Skipping .{} without {}", kind.css_class(), markup::JOB_ID_ATTR);
            return None;
        }
    };

    let surface = if detail_page || inside_detail(element) {
        Surface::Detail
    } else {
        Surface::Card
    };

    Some(ControlSpec {
        job_id,
        kind,
        surface,
        confirmed: value.attr(kind.state_attr()) == Some("true"),
        classes: value.classes().map(str::to_string).collect(),
    })
}

fn inside_detail(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|el| el.value().classes().any(|c| c == markup::DETAIL_CONTAINER_CLASS))
}

// Only ever called with selectors built from the markup constants.
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}
