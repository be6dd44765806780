//! Full-text search over the catalog using Tantivy.

use common::JobSearchResult;
use tantivy::{
    Document, Index, IndexReader, ReloadPolicy,
    collector::TopDocs,
    query::QueryParser,
    schema::{Field, STORED, STRING, Schema, TEXT},
};
use tracing::{info, warn};

const RESULT_LIMIT: usize = 25;

pub struct JobIndex {
    reader: IndexReader,
    query_parser: QueryParser,
    id_field: Field,
}

impl JobIndex {
    /// Indexes every job in a RAM directory.
    pub fn build(jobs: &[JobSearchResult]) -> tantivy::Result<Self> {
        let mut schema_builder = Schema::builder();

        // Id: exact match, stored so hits map back to the catalog
        let id_field = schema_builder.add_text_field("id", STRING | STORED);
        let title_field = schema_builder.add_text_field("title", TEXT);
        let company_field = schema_builder.add_text_field("company", TEXT);
        let description_field = schema_builder.add_text_field("description", TEXT);
        let schema = schema_builder.build();

        let index = Index::create_in_ram(schema);
        let mut index_writer = index.writer_with_num_threads(1, 15_000_000)?;

        for job in jobs {
            let mut doc = Document::new();
            doc.add_text(id_field, &job.id);
            doc.add_text(title_field, &job.title);
            doc.add_text(company_field, &job.company);
            doc.add_text(description_field, &job.description);
            index_writer.add_document(doc)?;
        }
        index_writer.commit()?;
        info!("📊 Indexed {} jobs", jobs.len());

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;
        let query_parser =
            QueryParser::for_index(&index, vec![title_field, company_field, description_field]);

        Ok(Self {
            reader,
            query_parser,
            id_field,
        })
    }

    /// Ids of the best matching jobs, best first. Unparseable queries match
    /// nothing.
    pub fn search(&self, query: &str) -> tantivy::Result<Vec<String>> {
        let query = match self.query_parser.parse_query(query) {
            Ok(q) => q,
            Err(err) => {
                warn!("Unparseable query {query:?}: {err}");
                return Ok(Vec::new());
            }
        };

        let searcher = self.reader.searcher();
        let top_docs = searcher.search(&query, &TopDocs::with_limit(RESULT_LIMIT))?;

        let mut ids = Vec::with_capacity(top_docs.len());
        for (_score, doc_address) in top_docs {
            let retrieved = searcher.doc(doc_address)?;
            if let Some(id) = retrieved.get_first(self.id_field).and_then(|v| v.as_text()) {
                ids.push(id.to_string());
            }
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;

    #[test]
    fn test_search_matches_title_terms() {
        let index = JobIndex::build(&seed_catalog()).unwrap();
        let ids = index.search("devops").unwrap();
        assert_eq!(ids, vec!["mock_5".to_string()]);
    }

    #[test]
    fn test_search_matches_company() {
        let index = JobIndex::build(&seed_catalog()).unwrap();
        assert!(index.search("zoho").unwrap().contains(&"mock_4".to_string()));
    }

    #[test]
    fn test_no_match_and_bad_syntax_return_empty() {
        let index = JobIndex::build(&seed_catalog()).unwrap();
        assert!(index.search("astronaut").unwrap().is_empty());
        assert!(index.search("title:(").unwrap().is_empty());
    }
}
