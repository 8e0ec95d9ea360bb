pub mod agent;
pub mod descriptor;
pub mod evidence;
pub mod fixtures;
pub mod registry;
pub mod source;

pub use agent::{EvidenceDigest, ResearchAgent};
pub use descriptor::{ResearchBackend, SearchBackend};
pub use evidence::{format_job_answer, format_search_results, MAX_EVIDENCE_CHARS, NO_RESULTS};
pub use registry::{Evidence, ToolRegistry, DEEP_RESEARCH, DISCUSSION_SEARCH, WEB_SEARCH};
pub use source::{DatasetJobSource, EvidenceSource, SerpSource};
