//! Blog posts

use crate::core::content::ContentSource;
use crate::core::error::Result;
use crate::core::types::{DocType, NewDocument};
use serde::Serialize;

/// A blog post listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Publication date (ISO 8601)
    pub date: &'static str,
    pub slug: &'static str,
    pub author: &'static str,
}

impl BlogPost {
    pub fn url(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

const POSTS: &[BlogPost] = &[
    BlogPost {
        title: "The Future of RAG Copilots in Financial Services",
        excerpt: "How Retrieval-Augmented Generation is reshaping compliance and research into evidence-native workflows",
        date: "2024-01-15",
        slug: "future-of-rag-copilots-financial-services",
        author: "Ishtar AI Team",
    },
    BlogPost {
        title: "AI Governance: Building Trust in Enterprise AI Systems",
        excerpt: "Best practices for implementing governance frameworks that ensure AI systems are secure, compliant, and reliable.",
        date: "2024-01-10",
        slug: "ai-governance-trust-enterprise",
        author: "Ishtar AI Team",
    },
    BlogPost {
        title: "Synthetic Media Compliance: What Media Companies Need to Know",
        excerpt: "Navigating the regulatory landscape for AI-generated content and ensuring brand safety in the age of synthetic media.",
        date: "2024-01-05",
        slug: "synthetic-media-compliance-guide",
        author: "Ishtar AI Team",
    },
];

/// All published blog posts, newest first
pub fn blog_posts() -> Vec<BlogPost> {
    POSTS.to_vec()
}

pub fn blog_post_by_slug(slug: &str) -> Option<BlogPost> {
    POSTS.iter().find(|p| p.slug == slug).cloned()
}

/// Indexes each post's title and excerpt
pub struct BlogSource;

impl ContentSource for BlogSource {
    fn name(&self) -> &str {
        "blog"
    }

    fn documents(&self) -> Result<Vec<NewDocument>> {
        Ok(POSTS
            .iter()
            .map(|post| {
                NewDocument::new(
                    post.title,
                    format!("{} {}", post.title, post.excerpt),
                    post.url(),
                    DocType::Blog,
                )
                .with_excerpt(post.excerpt)
            })
            .collect())
    }
}
