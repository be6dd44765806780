//! Markup for search results.

use common::markup::escape;
use common::{paths, JobSearchResult};

pub const LOADING_HEADER: &str = "Loading jobs...";
pub const ERROR_HEADER: &str = "Error loading jobs";

pub fn count_header(count: usize) -> String {
    format!("Available Jobs ({count})")
}

/// Rendered listing: one card per job, or the "no jobs found" placeholder.
pub fn listing(jobs: &[JobSearchResult]) -> String {
    if jobs.is_empty() {
        return no_results();
    }
    jobs.iter().map(job_card).collect::<Vec<_>>().join("\n")
}

fn no_results() -> String {
    format!(
        r#"<div class="text-center py-12">
    <i class="fas fa-search text-gray-400 text-6xl mb-4"></i>
    <h3 class="text-2xl font-semibold text-gray-600">No jobs found</h3>
    <p class="text-gray-500">Try different search terms or <a href="{listing}" class="text-blue-600 hover:text-blue-800">browse all jobs</a></p>
</div>"#,
        listing = paths::LISTING
    )
}

pub fn job_card(job: &JobSearchResult) -> String {
    let href = paths::detail(&job.id);
    let remote = if job.remote {
        r#"<span class="bg-green-100 text-green-800 px-3 py-1 rounded-full text-sm">Remote</span>"#
    } else {
        ""
    };
    let salary = if job.salary.trim().is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="text-lg font-semibold text-gray-900 mb-2">{}</p>"#,
            escape(&job.salary)
        )
    };

    format!(
        r#"<div class="job-card bg-white rounded-2xl shadow-md p-6 hover:shadow-lg transition-shadow">
    <div class="flex flex-col md:flex-row md:items-center justify-between">
        <div class="flex-1">
            <h3 class="text-xl font-semibold text-gray-900 mb-2"><a href="{href}" class="hover:text-blue-600">{title}</a></h3>
            <p class="text-gray-600 mb-2">{company} • {location}</p>
            <div class="flex gap-2 mb-2">
                <span class="text-gray-600">Job Type:</span>
                <span class="font-medium">{job_type}</span>
                {remote}
                <span class="bg-gray-100 text-gray-800 px-3 py-1 rounded-full text-sm">{source}</span>
            </div>
            <p class="text-gray-700 line-clamp-2">{description}</p>
        </div>
        <div class="mt-4 md:mt-0 md:text-right">
            {salary}
            <p class="text-sm text-gray-500 mb-3">Posted {posted}</p>
            <a href="{href}" class="bg-blue-600 text-white px-6 py-2 rounded-lg hover:bg-blue-700 transition-colors inline-block">View Details</a>
        </div>
    </div>
</div>"#,
        title = escape(&job.title),
        company = escape(&job.company),
        location = escape(&job.location),
        job_type = escape(&job.job_type),
        source = escape(&job.source),
        description = escape(&job.description),
        posted = escape(&job.posted_date),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn job(id: &str, title: &str) -> JobSearchResult {
        JobSearchResult {
            id: id.to_string(),
            title: title.to_string(),
            company: "Zoho".to_string(),
            location: "Chennai".to_string(),
            job_type: "Full-time".to_string(),
            remote: id == "2",
            source: "MOCK".to_string(),
            description: "Build things".to_string(),
            salary: String::new(),
            posted_date: "Jan 05, 2025".to_string(),
        }
    }

    #[test]
    fn test_empty_listing_links_back_to_all_jobs() {
        let html = Html::parse_fragment(&listing(&[]));
        assert!(html.root_element().text().any(|t| t.contains("No jobs found")));
        let link = html.select(&Selector::parse("a").unwrap()).next().unwrap();
        assert_eq!(link.value().attr("href"), Some("/jobs/"));
    }

    #[test]
    fn test_two_jobs_render_two_linked_cards() {
        let html = Html::parse_fragment(&listing(&[job("1", "Rust Dev"), job("2", "SRE")]));
        let cards: Vec<_> = html.select(&Selector::parse(".job-card").unwrap()).collect();
        assert_eq!(cards.len(), 2);

        let title_link = Selector::parse("h3 a").unwrap();
        let hrefs: Vec<_> = cards
            .iter()
            .map(|card| card.select(&title_link).next().unwrap().value().attr("href").unwrap())
            .collect();
        assert_eq!(hrefs, vec!["/jobs/1", "/jobs/2"]);

        let remote = cards[1].text().collect::<String>();
        assert!(remote.contains("Remote"));
        assert!(!cards[0].text().collect::<String>().contains("Remote"));
    }

    #[test]
    fn test_card_escapes_text_and_shows_salary() {
        let mut posting = job("9", "<script>alert(1)</script>");
        posting.salary = "₹12 LPA".to_string();
        let card = job_card(&posting);
        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;"));
        assert!(card.contains("₹12 LPA"));
    }

    #[test]
    fn test_card_link_encodes_job_id() {
        let card = job_card(&job("li/42?ref=feed", "Rust Dev"));
        assert!(card.contains(r#"href="/jobs/li%2F42%3Fref=feed""#));
    }

    #[test]
    fn test_count_header() {
        assert_eq!(count_header(0), "Available Jobs (0)");
    }
}
