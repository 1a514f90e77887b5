//! Downloadable resources (whitepapers, guides, templates, tools)

use crate::core::content::ContentSource;
use crate::core::error::Result;
use crate::core::types::{DocType, NewDocument};
use serde::Serialize;

const CATEGORIES: &[&str] = &["All", "Whitepapers", "Guides", "Templates", "Tools"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub title: &'static str,
    /// Resource format: whitepaper, template, guide or tool
    pub kind: &'static str,
    pub description: &'static str,
    pub file_path: &'static str,
    pub category: &'static str,
    /// Requires an email before download
    pub gated: bool,
    pub estimated_time: &'static str,
    pub target_audience: &'static str,
    pub table_of_contents: &'static [&'static str],
    pub key_takeaways: &'static [&'static str],
}

impl Resource {
    /// Resources link to their category listing, not to the file
    pub fn url(&self) -> String {
        format!("/resources?category={}", self.category)
    }
}

const RESOURCES: &[Resource] = &[
    Resource {
        title: "RAG Copilots: A Complete Guide for Financial Services",
        kind: "whitepaper",
        description: "Comprehensive guide to implementing RAG copilots in financial services, covering architecture, compliance, and best practices.",
        file_path: "/static/resources/rag-copilots-guide.pdf",
        category: "Whitepapers",
        gated: true,
        estimated_time: "45 minutes",
        target_audience: "Compliance Officers, Research Analysts, AI Platform Teams",
        table_of_contents: &[
            "Introduction to RAG Copilots",
            "Architecture and Design Patterns",
            "Compliance and Security Considerations",
            "Implementation Best Practices",
            "Evaluation and Monitoring",
            "Case Studies",
        ],
        key_takeaways: &[
            "How to design RAG systems for financial services",
            "Compliance requirements and how to meet them",
            "Best practices for evaluation and monitoring",
        ],
    },
    Resource {
        title: "AI Governance Framework Template",
        kind: "template",
        description: "Ready-to-use template for establishing AI governance frameworks in your organization.",
        file_path: "/static/resources/ai-governance-template.docx",
        category: "Templates",
        gated: false,
        estimated_time: "30 minutes",
        target_audience: "AI Governance Teams, Risk Management, Executive Leadership",
        table_of_contents: &[
            "Governance Structure",
            "Policy Templates",
            "Risk Assessment Framework",
            "Evaluation Criteria",
            "Compliance Checklist",
        ],
        key_takeaways: &[
            "Ready-to-use governance framework",
            "Policy templates for AI systems",
            "Risk assessment methodology",
        ],
    },
    Resource {
        title: "Synthetic Media Compliance Checklist",
        kind: "guide",
        description: "Essential checklist for ensuring compliance when using AI-generated media content.",
        file_path: "/static/resources/synthetic-media-checklist.pdf",
        category: "Guides",
        gated: true,
        estimated_time: "20 minutes",
        target_audience: "Media Companies, Advertising Agencies, Content Operations",
        table_of_contents: &[
            "Disclosure Requirements",
            "Provenance Tracking",
            "Brand Safety Checks",
            "Compliance Checklist",
            "Best Practices",
        ],
        key_takeaways: &[
            "Complete compliance checklist",
            "Disclosure workflow guidance",
            "Brand safety considerations",
        ],
    },
    Resource {
        title: "LLMOps Best Practices Guide",
        kind: "guide",
        description: "Best practices for implementing LLMOps pipelines, monitoring, and evaluation systems.",
        file_path: "/static/resources/llmops-best-practices.pdf",
        category: "Guides",
        gated: true,
        estimated_time: "35 minutes",
        target_audience: "ML Engineers, DevOps Teams, AI Platform Teams",
        table_of_contents: &[
            "LLMOps Fundamentals",
            "Evaluation Pipelines",
            "Monitoring and Alerting",
            "Version Control",
            "CI/CD Integration",
            "Best Practices",
        ],
        key_takeaways: &[
            "How to build evaluation pipelines",
            "Monitoring and alerting strategies",
            "CI/CD integration patterns",
        ],
    },
    Resource {
        title: "Agent Automation ROI Calculator",
        kind: "tool",
        description: "Interactive calculator to estimate ROI from agent automation implementations.",
        file_path: "/static/resources/agent-automation-calculator.xlsx",
        category: "Tools",
        gated: false,
        estimated_time: "15 minutes",
        target_audience: "Operations Teams, Finance Teams, Process Owners",
        table_of_contents: &[
            "Input Parameters",
            "Cost Calculations",
            "Time Savings Analysis",
            "ROI Projections",
        ],
        key_takeaways: &[
            "Estimate automation ROI",
            "Calculate time and cost savings",
            "Build business case for automation",
        ],
    },
];

pub fn resources() -> Vec<Resource> {
    RESOURCES.to_vec()
}

/// Category names for the resources filter, `"All"` first
pub fn resource_categories() -> Vec<&'static str> {
    CATEGORIES.to_vec()
}

/// Resources in one category; `"All"` returns every resource
pub fn resources_in_category(category: &str) -> Vec<Resource> {
    RESOURCES
        .iter()
        .filter(|r| category == "All" || r.category == category)
        .cloned()
        .collect()
}

pub struct ResourceSource;

impl ContentSource for ResourceSource {
    fn name(&self) -> &str {
        "resources"
    }

    fn documents(&self) -> Result<Vec<NewDocument>> {
        Ok(RESOURCES
            .iter()
            .map(|r| {
                NewDocument::new(
                    r.title,
                    format!("{} {}", r.title, r.description),
                    r.url(),
                    DocType::Resource,
                )
                .with_excerpt(r.description)
            })
            .collect())
    }
}
