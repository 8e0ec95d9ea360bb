/// Target of a synchronous SERP capability. Created at startup, immutable
/// thereafter. `site_filter` restricts results to one site by rewriting the
/// query to `site:<domain> <query>` at call time.
#[derive(Debug, Clone)]
pub struct SearchBackend {
    pub zone: String,
    pub engine_url: String,
    pub site_filter: Option<String>,
}

/// Target of an asynchronous dataset-job capability. Whether the backend
/// returns citations is an explicit flag decided at construction, never
/// inferred from the target URL.
#[derive(Debug, Clone)]
pub struct ResearchBackend {
    pub dataset_id: String,
    pub target_url: String,
    pub citations: bool,
}

impl ResearchBackend {
    /// Output fields to request on job submission. Citation-bearing backends
    /// ask for the source list alongside the answer text.
    pub fn output_fields(&self) -> Vec<&'static str> {
        if self.citations {
            vec!["answer_text_markdown", "sources"]
        } else {
            vec!["answer_text_markdown"]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn citation_backend_requests_sources_field() {
        let backend = ResearchBackend {
            dataset_id: "ds_1".into(),
            target_url: "https://example.com".into(),
            citations: true,
        };
        assert_eq!(
            backend.output_fields(),
            vec!["answer_text_markdown", "sources"]
        );
    }

    #[test]
    fn plain_backend_requests_answer_only() {
        let backend = ResearchBackend {
            dataset_id: "ds_1".into(),
            target_url: "https://example.com".into(),
            citations: false,
        };
        assert_eq!(backend.output_fields(), vec!["answer_text_markdown"]);
    }
}
