use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use common::JobSearchResult;
use tokio::sync::Mutex;

use crate::index::JobIndex;

/// A submitted application, kept in memory.
#[derive(Debug, Clone)]
pub struct Application {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cover_letter: String,
    pub resume_file: Option<String>,
}

#[derive(Debug, Default)]
pub struct Store {
    pub saved: HashSet<String>,
    pub applications: HashMap<String, Application>,
}

/// Requests received per endpoint, counted before any auth check.
#[derive(Debug, Default)]
pub struct Hits {
    save: AtomicUsize,
    unsave: AtomicUsize,
    apply: AtomicUsize,
    search: AtomicUsize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitCounts {
    pub save: usize,
    pub unsave: usize,
    pub apply: usize,
    pub search: usize,
}

impl HitCounts {
    pub fn actions(&self) -> usize {
        self.save + self.unsave + self.apply
    }
}

impl Hits {
    pub fn save(&self) {
        self.save.fetch_add(1, Ordering::SeqCst);
    }

    pub fn unsave(&self) {
        self.unsave.fetch_add(1, Ordering::SeqCst);
    }

    pub fn apply(&self) {
        self.apply.fetch_add(1, Ordering::SeqCst);
    }

    pub fn search(&self) {
        self.search.fetch_add(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> HitCounts {
        HitCounts {
            save: self.save.load(Ordering::SeqCst),
            unsave: self.unsave.load(Ordering::SeqCst),
            apply: self.apply.load(Ordering::SeqCst),
            search: self.search.load(Ordering::SeqCst),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Vec<JobSearchResult>>,
    pub index: Arc<JobIndex>,
    pub authenticated: bool,
    pub store: Arc<Mutex<Store>>,
    pub hits: Arc<Hits>,
}

impl AppState {
    pub fn new(catalog: Vec<JobSearchResult>, authenticated: bool) -> tantivy::Result<Self> {
        let index = JobIndex::build(&catalog)?;
        Ok(Self {
            catalog: Arc::new(catalog),
            index: Arc::new(index),
            authenticated,
            store: Arc::new(Mutex::new(Store::default())),
            hits: Arc::new(Hits::default()),
        })
    }

    pub fn job(&self, id: &str) -> Option<&JobSearchResult> {
        self.catalog.iter().find(|job| job.id == id)
    }
}
