//! Job postings served by the development backend.

use std::path::Path;

use common::JobSearchResult;
use tokio::fs;
use tracing::{error, info, warn};

/// Loads postings from a JSON array on disk, or falls back to the seed set.
pub async fn load_catalog(path: &Path) -> Vec<JobSearchResult> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Vec<JobSearchResult>>(&bytes) {
            Ok(jobs) => {
                info!("📂 Loaded {} jobs from {:?}", jobs.len(), path);
                jobs
            }
            Err(err) => {
                error!("failed to parse {:?}: {err}", path);
                seed_catalog()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("⚠️  No {:?} found, serving the seed catalog", path);
            seed_catalog()
        }
        Err(err) => {
            error!("failed to read {:?}: {err}", path);
            seed_catalog()
        }
    }
}

pub fn seed_catalog() -> Vec<JobSearchResult> {
    let rows = [
        ("mock_1", "Python Developer", "Tata Consultancy", "Bengaluru", "Full-time", false, "₹12 LPA", "Nov 02, 2025"),
        ("mock_2", "Full Stack Engineer", "Infosys", "Remote", "Full-time", true, "₹18 LPA", "Nov 04, 2025"),
        ("mock_3", "Frontend Developer", "Wipro", "Pune", "Contract", false, "", "Oct 28, 2025"),
        ("mock_4", "Backend Developer", "Zoho", "Chennai", "Full-time", false, "₹15 LPA", "Oct 30, 2025"),
        ("mock_5", "DevOps Engineer", "HCL", "Remote", "Full-time", true, "₹20 LPA", "Oct 25, 2025"),
        ("mock_6", "Data Scientist", "Tech Mahindra", "Hyderabad", "Internship", false, "₹4 LPA", "Nov 01, 2025"),
    ];

    rows.into_iter()
        .map(|(id, title, company, location, job_type, remote, salary, posted)| JobSearchResult {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            job_type: job_type.to_string(),
            remote,
            source: "MOCK".to_string(),
            description: format!("{company} is hiring a {title} to join a growing engineering team."),
            salary: salary.to_string(),
            posted_date: posted.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_missing_file_falls_back_to_seed() {
        let jobs = load_catalog(Path::new("no/such/jobs.json")).await;
        assert_eq!(jobs, seed_catalog());
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let jobs = seed_catalog();
        let ids: HashSet<_> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), jobs.len());
    }
}
