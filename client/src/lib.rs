//! Job board client
//!
//! Drives job card and job detail page controls: save/unsave, apply through
//! a modal form, share, and search result rendering. Control state only
//! changes after the backend confirms it.

pub mod api;
pub mod button;
pub mod config;
pub mod controller;
pub mod error;
pub mod page;
pub mod ports;
pub mod registry;
pub mod render;
pub mod search;
pub mod terminal;
pub mod toast;

pub use button::{ActionKind, JobActionButton, Surface};
pub use config::ClientConfig;
pub use controller::{ActionOutcome, JobActionController, ShareOutcome};
pub use error::ActionError;
pub use page::PageSnapshot;
pub use ports::{ApplicationSubmission, FormOutcome, Host};
pub use search::{SearchStatus, SearchView};
