// Reasoning component boundary. The retrieval core only promises each
// capability behaves as `(query) -> evidence text`; what composes the final
// answer lives behind this trait.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::registry::ToolRegistry;

#[async_trait]
pub trait ResearchAgent: Send + Sync {
    async fn answer(&self, query: &str) -> Result<String>;
}

/// Non-LLM reasoning stand-in: fans out to every registered backend and
/// returns the labeled evidence sections verbatim. An LLM-backed agent plugs
/// in behind the same trait without touching the retrieval core.
pub struct EvidenceDigest {
    registry: Arc<ToolRegistry>,
}

impl EvidenceDigest {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl ResearchAgent for EvidenceDigest {
    async fn answer(&self, query: &str) -> Result<String> {
        let evidence = self.registry.gather(query).await;

        let sections: Vec<String> = evidence
            .into_iter()
            .map(|e| format!("### {}\n\n{}", e.source, e.text))
            .collect();

        Ok(sections.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSource;

    #[tokio::test]
    async fn digest_labels_each_evidence_section() {
        let registry = Arc::new(ToolRegistry::new(vec![
            Arc::new(FixtureSource::new("web-search", "two hits")),
            Arc::new(FixtureSource::new("deep-research", "deep answer")),
        ]));
        let agent = EvidenceDigest::new(registry);

        let answer = agent.answer("climate change causes").await.unwrap();
        assert!(answer.contains("### web-search\n\ntwo hits"));
        assert!(answer.contains("### deep-research\n\ndeep answer"));
    }
}
