// Integration tests for search functionality

use crate::common::{index_with, rag_guide};
use ishtar::core::search::SearchIndex;
use ishtar::core::types::{DocType, NewDocument};

const ALL_TYPES: Option<&[&str]> = None;

#[test]
fn test_title_and_phrase_match() {
    let index = index_with(vec![rag_guide()]);

    let results = index.search("rag copilots", ALL_TYPES);

    assert_eq!(results.len(), 1);
    let hit = &results[0];
    assert_eq!(hit.url, "/blog/rag-copilots-guide");
    assert_eq!(hit.title_matches, 2);
    // 2 title terms + 2 content occurrences + title phrase + content phrase
    assert_eq!(hit.score, 10 + 10 + 2 + 2 + 20 + 10);
    assert!(hit.score > 20);
}

#[test]
fn test_unmatched_term_returns_nothing() {
    let index = index_with(vec![rag_guide()]);

    assert!(index.search("blockchain", ALL_TYPES).is_empty());
}

#[test]
fn test_type_filter_keeps_only_requested_types() {
    let index = index_with(vec![
        NewDocument::new(
            "Implementation timeline",
            "a typical implementation takes six weeks",
            "/blog/implementation-timeline",
            DocType::Blog,
        ),
        NewDocument::new(
            "How long does implementation take?",
            "implementation usually takes four to eight weeks",
            "/faq#implementation",
            DocType::Faq,
        ),
    ]);

    let all = index.search("implementation", ALL_TYPES);
    assert_eq!(all.len(), 2);

    let faq_only = index.search("implementation", Some(&["faq"][..]));
    assert_eq!(faq_only.len(), 1);
    assert_eq!(faq_only[0].doc_type, "faq");
    assert_eq!(faq_only[0].url, "/faq#implementation");
}

#[test]
fn test_snippet_comes_from_match_window_not_excerpt() {
    // 240 filler chars, then the term, then filler to 300 chars
    let mut content = "x".repeat(240);
    content.push_str(" governance ");
    content.push_str(&"y".repeat(300 - content.len()));
    assert_eq!(content.chars().count(), 300);

    let mut index = SearchIndex::new();
    index.add_document("Filler", &content, "/filler", "page", None);

    let stored = &index.documents()[0].excerpt;
    assert_eq!(stored.chars().count(), 203);
    assert!(stored.ends_with("..."));

    let results = index.search("governance", ALL_TYPES);
    assert_eq!(results.len(), 1);

    let snippet = &results[0].excerpt;
    assert_ne!(snippet, stored);
    assert!(snippet.starts_with("..."));
    assert!(snippet.contains("<mark>governance</mark>"));
    // Window runs to the end of the content, so no trailing ellipsis
    assert!(snippet.ends_with('y'));
    // 50 chars of context before the match
    let before = snippet
        .trim_start_matches("...")
        .split("<mark>")
        .next()
        .unwrap_or_default();
    assert_eq!(before.chars().count(), 50);
}

#[test]
fn test_repeated_terms_count_each_time() {
    let index = index_with(vec![NewDocument::new(
        "Compliance Checklist",
        "compliance reviews and audits keep compliance current",
        "/resources?category=Checklists",
        DocType::Resource,
    )]);

    let single = index.search("compliance", ALL_TYPES);
    let repeated = index.search("compliance compliance", ALL_TYPES);

    // single: 10 title + 2*2 content + 20 title phrase + 10 content phrase
    assert_eq!(single[0].score, 44);
    // repeated: 2*10 title + 2*(2*2) content, phrase not contiguous anywhere
    assert_eq!(repeated[0].score, 28);
    assert_eq!(repeated[0].title_matches, 2);
    assert_eq!(repeated[0].content_matches, 4);
}

#[test]
fn test_phrase_in_title_outranks_scattered_terms() {
    let index = index_with(vec![
        NewDocument::new(
            "Automation for every Agent",
            "field notes",
            "/scattered",
            DocType::Blog,
        ),
        NewDocument::new(
            "Agent Automation Playbook",
            "field notes",
            "/phrase",
            DocType::Blog,
        ),
    ]);

    let results = index.search("agent automation", ALL_TYPES);

    let ranked: Vec<(&str, u32)> = results.iter().map(|r| (r.url.as_str(), r.score)).collect();
    // Same term hits in both titles; only the contiguous phrase earns the bonus
    assert_eq!(ranked, vec![("/phrase", 40), ("/scattered", 20)]);
    assert_eq!(results[0].title_matches, results[1].title_matches);
}

#[test]
fn test_search_is_idempotent() {
    let index = index_with(vec![
        rag_guide(),
        NewDocument::new("Copilots", "rag for copilots", "/copilots", DocType::Page),
        NewDocument::new("FAQ", "what is rag?", "/faq#rag", DocType::Faq),
    ]);

    let first = index.search("rag copilots", ALL_TYPES);
    let second = index.search("rag copilots", ALL_TYPES);

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_results_sorted_by_score_descending() {
    let index = index_with(vec![
        NewDocument::new("Other", "agents mentioned once", "/a", DocType::Page),
        NewDocument::new("Agents", "agents agents agents", "/b", DocType::Page),
        NewDocument::new("Misc", "agents agents", "/c", DocType::Page),
    ]);

    let results = index.search("agents", ALL_TYPES);
    let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["/b", "/c", "/a"]);
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_equal_scores_keep_insertion_order() {
    let index = index_with(vec![
        NewDocument::new("First", "llm", "/first", DocType::Blog),
        NewDocument::new("Second", "llm", "/second", DocType::Blog),
        NewDocument::new("Third", "llm", "/third", DocType::Blog),
    ]);

    let urls: Vec<String> = index
        .search("llm", ALL_TYPES)
        .into_iter()
        .map(|r| r.url)
        .collect();
    assert_eq!(urls, vec!["/first", "/second", "/third"]);
}

#[test]
fn test_query_is_case_insensitive_and_trimmed() {
    let index = index_with(vec![rag_guide()]);

    let lower = index.search("rag copilots", ALL_TYPES);
    let shouted = index.search("   RAG   Copilots  ", ALL_TYPES);

    assert_eq!(lower.len(), 1);
    assert_eq!(shouted.len(), 1);
    assert_eq!(lower[0].title_matches, shouted[0].title_matches);
    assert_eq!(lower[0].content_matches, shouted[0].content_matches);
}

#[test]
fn test_blank_query_returns_nothing() {
    let index = index_with(vec![rag_guide()]);

    assert!(index.search("", ALL_TYPES).is_empty());
    assert!(index.search("   \t ", ALL_TYPES).is_empty());
}

#[test]
fn test_empty_type_filter_means_no_filter() {
    let index = index_with(vec![rag_guide()]);
    let empty: &[&str] = &[];

    assert_eq!(index.search("rag", Some(empty)).len(), 1);
}

#[test]
fn test_substring_matches_count() {
    // "rag" occurs inside "leverage" and "storage"
    let index = index_with(vec![NewDocument::new(
        "Platform",
        "leverage storage",
        "/platform",
        DocType::Page,
    )]);

    let results = index.search("rag", ALL_TYPES);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].content_matches, 2);
    // two occurrences, plus the whole query appearing in the content
    assert_eq!(results[0].score, 2 * 2 + 10);
}

#[test]
fn test_snippet_preserves_original_case() {
    let index = index_with(vec![NewDocument::new(
        "Security",
        "Our SOC 2 Type II program covers every deployment.",
        "/security",
        DocType::Page,
    )]);

    let results = index.search("soc", ALL_TYPES);
    assert_eq!(
        results[0].excerpt,
        "Our <mark>SOC</mark> 2 Type II program covers every deployment."
    );
}

#[test]
fn test_title_only_match_uses_excerpt() {
    let index = index_with(vec![NewDocument::new(
        "Careers",
        "Join the team building enterprise AI.",
        "/careers",
        DocType::Page,
    )
    .with_excerpt("Open roles")]);

    let results = index.search("careers", ALL_TYPES);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].excerpt, "Open roles");
    assert_eq!(results[0].score, 10 + 20);
}
