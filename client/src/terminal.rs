//! Terminal-backed host capabilities for `jobctl`.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Mutex;

use reqwest::Url;
use tracing::{debug, info, warn};

use crate::error::ClipboardError;
use crate::ports::{
    ApplicationSubmission, Clipboard, Dialog, FormOutcome, Host, Level, Navigator, Notification,
    Notifier, ResumeFile,
};

pub fn host(page_url: Url) -> Host {
    Host {
        notifier: Box::new(TerminalNotifier),
        dialog: Box::new(PromptDialog),
        navigator: Box::new(MemoryNavigator::new(page_url)),
        clipboard: Box::new(NoClipboard),
    }
}

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn show(&self, notification: &Notification) {
        let badge = match notification.level {
            Level::Success => "✅",
            Level::Info => "ℹ️ ",
            Level::Warning => "⚠️ ",
            Level::Error => "❌",
        };
        match &notification.detail {
            Some(detail) => println!("{badge} {}: {detail}", notification.title),
            None => println!("{badge} {}", notification.title),
        }
    }

    fn clear(&self, notification: &Notification) {
        debug!("Dismissed notification: {}", notification.title);
    }
}

/// Asks for the apply form fields on stdin. `q` or end of input cancels.
pub struct PromptDialog;

impl PromptDialog {
    fn ask(label: &str) -> Option<String> {
        print!("{label}: ");
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn optional(value: String) -> Option<String> {
        if value.is_empty() { None } else { Some(value) }
    }
}

impl Dialog for PromptDialog {
    fn application_form(&self, job_id: &str, validation: Option<&str>) -> FormOutcome {
        println!("📝 Apply for job {job_id} (q to cancel)");
        if let Some(message) = validation {
            println!("⚠️  {message}");
        }

        let Some(name) = Self::ask("Full Name").filter(|n| n != "q") else {
            return FormOutcome::Cancelled;
        };
        let Some(email) = Self::ask("Email") else {
            return FormOutcome::Cancelled;
        };
        let phone = Self::ask("Phone (optional)").and_then(Self::optional);
        let cover_letter = Self::ask("Cover Letter (optional)").and_then(Self::optional);
        let resume = Self::ask("Resume path (PDF/DOC, optional)")
            .and_then(Self::optional)
            .and_then(|path| match read_resume(Path::new(&path)) {
                Ok(resume) => Some(resume),
                Err(err) => {
                    warn!("Could not read resume {path}: {err}");
                    None
                }
            });

        FormOutcome::Submitted(ApplicationSubmission {
            name,
            email,
            phone,
            cover_letter,
            resume,
        })
    }

    fn show_link(&self, title: &str, url: &str) {
        println!("🔗 {title}\n   {url}");
    }
}

fn read_resume(path: &Path) -> io::Result<ResumeFile> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());
    let content_type = content_type_for(&file_name).to_string();
    Ok(ResumeFile {
        file_name,
        content_type,
        bytes,
    })
}

fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Tracks the "current page" in memory.
pub struct MemoryNavigator {
    current: Mutex<Url>,
}

impl MemoryNavigator {
    pub fn new(url: Url) -> Self {
        Self {
            current: Mutex::new(url),
        }
    }
}

impl Navigator for MemoryNavigator {
    fn current_url(&self) -> Url {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn redirect(&self, path: &str) {
        let mut current = self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match current.join(path) {
            Ok(next) => {
                println!("➡️  Login required: {next}");
                *current = next;
            }
            Err(err) => warn!("Cannot redirect to {path}: {err}"),
        }
    }

    fn push_url(&self, url: &Url) {
        info!("URL: {url}");
        *self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = url.clone();
    }
}

/// Terminals have no clipboard API; sharing falls back to printing.
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError("no clipboard in a terminal session".to_string()))
    }
}
