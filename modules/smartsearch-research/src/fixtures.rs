//! Fixture implementations for testing without network access.
//!
//! `FixtureSource` returns static canned evidence; `FixtureAgent` returns a
//! static canned answer. Server and registry tests build deterministic
//! pipelines from these.

use anyhow::Result;
use async_trait::async_trait;

use crate::agent::ResearchAgent;
use crate::source::EvidenceSource;

pub struct FixtureSource {
    name: String,
    evidence: String,
}

impl FixtureSource {
    pub fn new(name: &str, evidence: &str) -> Self {
        Self {
            name: name.to_string(),
            evidence: evidence.to_string(),
        }
    }
}

#[async_trait]
impl EvidenceSource for FixtureSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Static fixture evidence"
    }

    async fn retrieve(&self, _query: &str) -> String {
        self.evidence.clone()
    }
}

pub struct FixtureAgent {
    answer: String,
}

impl FixtureAgent {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
        }
    }
}

#[async_trait]
impl ResearchAgent for FixtureAgent {
    async fn answer(&self, _query: &str) -> Result<String> {
        Ok(self.answer.clone())
    }
}

/// Agent that always fails, for exercising error paths.
pub struct FailingAgent;

#[async_trait]
impl ResearchAgent for FailingAgent {
    async fn answer(&self, _query: &str) -> Result<String> {
        anyhow::bail!("agent exploded")
    }
}
