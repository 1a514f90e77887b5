//! Static pages and FAQ entries
//!
//! These are hand-written search digests: the keywords each page should
//! be found by, not the rendered page text.

use crate::core::content::ContentSource;
use crate::core::error::Result;
use crate::core::types::{DocType, NewDocument};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPage {
    pub title: &'static str,
    pub content: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    /// Short answer digest
    pub answer: &'static str,
    /// Anchor on the FAQ page
    pub url: &'static str,
}

const PAGES: &[StaticPage] = &[
    StaticPage {
        title: "Services",
        content: "AI services RAG copilots agent automation LLMOps evaluation security synthetic media compliance",
        url: "/services",
    },
    StaticPage {
        title: "Regulated Enterprise Solutions",
        content: "Regulated enterprise RAG copilots policy research agent automation operations workflows governance audit trails evaluation",
        url: "/finance",
    },
    StaticPage {
        title: "Media & Advertising",
        content: "Media advertising synthetic media compliance brand safety provenance disclosure workflows agentic content operations review approval",
        url: "/media-ads",
    },
    StaticPage {
        title: "Pricing",
        content: "Pricing GenAI Launch Sprint RAG Copilot Agent Automation LLMOps Security Hardening Platform Partner",
        url: "/pricing",
    },
    StaticPage {
        title: "Contact",
        content: "Contact consultation schedule Calendly message",
        url: "/contact",
    },
    StaticPage {
        title: "FAQ",
        content: "Frequently asked questions industries implementation timeline pricing support",
        url: "/faq",
    },
];

const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What industries do you serve?",
        answer: "We specialize in regulated enterprises and media/advertising organizations",
        url: "/faq#industries",
    },
    FaqEntry {
        question: "How long does a typical implementation take?",
        answer: "Implementation timelines vary based on project scope",
        url: "/faq#timeline",
    },
];

pub fn static_pages() -> Vec<StaticPage> {
    PAGES.to_vec()
}

pub fn faq_entries() -> Vec<FaqEntry> {
    FAQS.to_vec()
}

pub struct PageSource;

impl ContentSource for PageSource {
    fn name(&self) -> &str {
        "pages"
    }

    fn documents(&self) -> Result<Vec<NewDocument>> {
        Ok(PAGES
            .iter()
            .map(|p| NewDocument::new(p.title, p.content, p.url, DocType::Page))
            .collect())
    }
}

pub struct FaqSource;

impl ContentSource for FaqSource {
    fn name(&self) -> &str {
        "faq"
    }

    fn documents(&self) -> Result<Vec<NewDocument>> {
        Ok(FAQS
            .iter()
            .map(|f| NewDocument::new(f.question, f.answer, f.url, DocType::Faq))
            .collect())
    }
}
