use std::collections::HashMap;

use tracing::warn;

use crate::button::{ActionKind, JobActionButton};
use crate::page::PageSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlKey {
    pub job_id: String,
    pub kind: ActionKind,
}

impl ControlKey {
    pub fn new(job_id: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            job_id: job_id.into(),
            kind,
        }
    }
}

/// Why a control could not start a new round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginError {
    Unknown,
    Busy,
}

/// Every control on the page, keyed by job and action.
#[derive(Debug, Default)]
pub struct Registry {
    controls: HashMap<ControlKey, JobActionButton>,
}

impl Registry {
    pub fn from_snapshot(page: &PageSnapshot) -> Self {
        let mut registry = Self::default();
        for spec in &page.controls {
            let button = JobActionButton::new(
                spec.job_id.clone(),
                spec.kind,
                spec.surface,
                spec.confirmed,
                spec.classes.iter().cloned(),
            );
            registry.insert(button);
        }
        registry
    }

    /// Keeps the first control registered for a key.
    pub fn insert(&mut self, button: JobActionButton) -> bool {
        let key = ControlKey::new(button.job_id(), button.kind());
        if self.controls.contains_key(&key) {
            warn!("Duplicate {:?} control for job {}, keeping the first", key.kind, key.job_id);
            return false;
        }
        self.controls.insert(key, button);
        true
    }

    pub fn get(&self, key: &ControlKey) -> Option<&JobActionButton> {
        self.controls.get(key)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Marks the control in flight and returns its confirmed state.
    pub fn begin(&mut self, key: &ControlKey) -> Result<bool, BeginError> {
        let button = self.controls.get_mut(key).ok_or(BeginError::Unknown)?;
        if button.in_flight() {
            return Err(BeginError::Busy);
        }
        button.set_in_flight(true);
        Ok(button.confirmed())
    }

    /// Clears the in-flight flag. The state only moves when the server
    /// confirmed one.
    pub fn finish(&mut self, key: &ControlKey, confirmed: Option<bool>) {
        if let Some(button) = self.controls.get_mut(key) {
            if let Some(state) = confirmed {
                button.confirm(state);
            }
            button.set_in_flight(false);
        }
    }

    pub fn render(&self, key: &ControlKey) -> Option<String> {
        self.controls.get(key).map(JobActionButton::render)
    }
}
