use common::{JobSearchResult, SearchParams};

use crate::state::AppState;

const CITY_ALIASES: &[(&str, &str)] = &[
    ("delhi", "New Delhi"),
    ("new delhi", "New Delhi"),
    ("mumbai", "Mumbai"),
    ("bombay", "Mumbai"),
    ("bangalore", "Bengaluru"),
    ("banglore", "Bengaluru"),
    ("bengaluru", "Bengaluru"),
    ("chennai", "Chennai"),
    ("hyderabad", "Hyderabad"),
    ("pune", "Pune"),
    ("kolkata", "Kolkata"),
    ("gurgaon", "Gurugram"),
    ("gurugram", "Gurugram"),
    ("noida", "Noida"),
];

/// Canonical city name, or `None` when the location does not filter.
pub fn normalize_location(raw: &str) -> Option<String> {
    let city = raw.trim().to_lowercase();
    if city.is_empty() || city == "india" {
        return None;
    }
    let canonical = CITY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == city)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| raw.trim().to_string());
    Some(canonical)
}

/// Jobs matching the query text and location, best match first. An empty
/// query lists the whole catalog.
pub fn find_jobs(state: &AppState, params: &SearchParams) -> tantivy::Result<Vec<JobSearchResult>> {
    let query = params.q.trim();
    let matched: Vec<JobSearchResult> = if query.is_empty() {
        state.catalog.iter().cloned().collect()
    } else {
        state
            .index
            .search(query)?
            .iter()
            .filter_map(|id| state.job(id).cloned())
            .collect()
    };

    let Some(location) = normalize_location(&params.location) else {
        return Ok(matched);
    };
    let location = location.to_lowercase();
    Ok(matched
        .into_iter()
        .filter(|job| job.location.to_lowercase().contains(&location))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;

    fn params(q: &str, location: &str) -> SearchParams {
        SearchParams {
            q: q.to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn test_normalize_location_aliases() {
        assert_eq!(normalize_location("bangalore"), Some("Bengaluru".to_string()));
        assert_eq!(normalize_location(" Pune "), Some("Pune".to_string()));
        assert_eq!(normalize_location("India"), None);
        assert_eq!(normalize_location(""), None);
        assert_eq!(normalize_location("Remote"), Some("Remote".to_string()));
    }

    #[test]
    fn test_empty_query_lists_catalog() {
        let state = AppState::new(seed_catalog(), true).unwrap();
        assert_eq!(find_jobs(&state, &params("", "")).unwrap().len(), 6);
    }

    #[test]
    fn test_location_filters_results() {
        let state = AppState::new(seed_catalog(), true).unwrap();
        let jobs = find_jobs(&state, &params("", "bangalore")).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, "mock_1");

        let remote = find_jobs(&state, &params("engineer", "remote")).unwrap();
        assert!(remote.iter().all(|j| j.remote));
        assert!(!remote.is_empty());
    }
}
