//! Case studies

use crate::core::content::ContentSource;
use crate::core::error::Result;
use crate::core::types::{DocType, NewDocument};
use serde::Serialize;

/// Characters of the challenge used as the search excerpt
const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub title: &'static str,
    pub slug: &'static str,
    pub industry: &'static str,
    pub client: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static str,
    /// Headline metrics as (name, value)
    pub metrics: &'static [(&'static str, &'static str)],
    pub image: &'static str,
}

impl CaseStudy {
    pub fn url(&self) -> String {
        format!("/case-studies/{}", self.slug)
    }
}

const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "RAG Copilot Implementation for Financial Compliance",
        slug: "rag-copilot-financial-compliance",
        industry: "Finance",
        client: "Major Financial Institution",
        challenge: "The client needed to streamline compliance research and policy lookup across multiple regulatory frameworks. Manual processes were time-consuming and error-prone.",
        solution: "We implemented a RAG copilot system that integrated with their existing knowledge base, providing instant access to compliance information with proper citations and evidence trails.",
        results: "Reduced compliance research time by 75%, improved accuracy of policy interpretations, and enabled real-time compliance checks.",
        metrics: &[
            ("time_saved", "75%"),
            ("accuracy_improvement", "40%"),
            ("adoption_rate", "90%"),
        ],
        image: "/static/img/case-study-placeholder.jpg",
    },
    CaseStudy {
        title: "Agent Automation for Media Content Operations",
        slug: "agent-automation-media-content",
        industry: "Media",
        client: "Leading Media Company",
        challenge: "Content review and approval workflows were manual and slow, creating bottlenecks in content production pipelines.",
        solution: "We built an agentic automation system with human-in-the-loop checkpoints, automated content review, and intelligent routing for approval workflows.",
        results: "Accelerated content production by 60%, reduced manual review time, and improved content quality through automated checks.",
        metrics: &[
            ("production_speed", "60% faster"),
            ("review_time", "50% reduction"),
            ("content_quality", "25% improvement"),
        ],
        image: "/static/img/case-study-placeholder.jpg",
    },
    CaseStudy {
        title: "LLMOps Foundation for Enterprise AI Platform",
        slug: "llmops-enterprise-platform",
        industry: "Finance",
        client: "Fortune 500 Financial Services",
        challenge: "Multiple AI applications lacked centralized monitoring, evaluation, and governance, making it difficult to ensure reliability and compliance.",
        solution: "We established a comprehensive LLMOps foundation with evaluation pipelines, monitoring, versioning, and CI/CD gating for all AI applications.",
        results: "Achieved 99.9% uptime, reduced incidents by 80%, and enabled rapid iteration with confidence in production deployments.",
        metrics: &[
            ("uptime", "99.9%"),
            ("incident_reduction", "80%"),
            ("deployment_speed", "3x faster"),
        ],
        image: "/static/img/case-study-placeholder.jpg",
    },
];

pub fn case_studies() -> Vec<CaseStudy> {
    CASE_STUDIES.to_vec()
}

pub fn case_study_by_slug(slug: &str) -> Option<CaseStudy> {
    CASE_STUDIES.iter().find(|c| c.slug == slug).cloned()
}

/// Case studies for one industry; `"All"` returns every case study
pub fn case_studies_in_industry(industry: &str) -> Vec<CaseStudy> {
    CASE_STUDIES
        .iter()
        .filter(|c| industry == "All" || c.industry == industry)
        .cloned()
        .collect()
}

/// Indexes title, challenge, solution and results of each case study
pub struct CaseStudySource;

impl ContentSource for CaseStudySource {
    fn name(&self) -> &str {
        "case_studies"
    }

    fn documents(&self) -> Result<Vec<NewDocument>> {
        Ok(CASE_STUDIES
            .iter()
            .map(|c| {
                let content = format!("{} {} {} {}", c.title, c.challenge, c.solution, c.results);
                let excerpt: String = c.challenge.chars().take(EXCERPT_CHARS).collect();
                NewDocument::new(c.title, content, c.url(), DocType::CaseStudy).with_excerpt(excerpt)
            })
            .collect())
    }
}
