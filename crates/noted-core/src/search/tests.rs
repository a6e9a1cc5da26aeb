use super::*;
use crate::index::build_search_index;
use crate::note::Note;

fn store() -> NoteStore {
    NoteStore::from_notes(vec![
        Note::new(1, "Grocery list")
            .with_body("milk eggs bread")
            .with_tags(["shopping"]),
        Note::new(2, "Rust book")
            .with_body("ownership and borrowing")
            .with_tags(["reading", "programming"]),
        Note::new(3, "Chapter one")
            .with_body("lifetimes explained")
            .with_parent(2),
        Note::new(4, "Weekend plans")
            .with_body("hiking")
            .with_tags(["personal"]),
    ])
}

fn hit_ids(hits: &[SearchHit]) -> Vec<i64> {
    hits.iter().map(|hit| hit.id.value()).collect()
}

fn run(query: &str) -> Vec<SearchHit> {
    search(&build_search_index(&store()), query, &SearchConfig::default())
}

#[test]
fn test_title_match() {
    let hits = run("grocery");
    assert_eq!(hit_ids(&hits), vec![1]);
    assert_eq!(hits[0].relevance, 1.0);
}

#[test]
fn test_child_text_finds_ancestor() {
    let hits = run("lifetimes");
    assert_eq!(hit_ids(&hits), vec![2, 3]);
    assert_eq!(hits[0].relevance, 0.5);
}

#[test]
fn test_sorted_by_relevance_threshold_inclusive() {
    let hits = run("rust shopping");
    assert_eq!(hit_ids(&hits), vec![2, 1]);
    assert_eq!(hits[0].relevance, 0.5);
    assert_eq!(hits[1].relevance, 0.4);
}

#[test]
fn test_weak_matches_dropped() {
    // "milk" alone is a body hit, but half the query missing sinks note 1
    assert_eq!(hit_ids(&run("milk")), vec![1]);
    assert_eq!(hit_ids(&run("milk chapter")), vec![2, 3]);
}

#[test]
fn test_prefix_match_scores_half() {
    let hits = run("gro");
    assert_eq!(hit_ids(&hits), vec![1]);
    assert_eq!(hits[0].relevance, 0.5);
}

#[test]
fn test_empty_and_stop_word_queries() {
    assert!(run("").is_empty());
    assert!(run("   ").is_empty());
    assert!(run("the and").is_empty());
}

#[test]
fn test_stemming_toggle() {
    assert_eq!(hit_ids(&run("books")), vec![2]);

    let config = SearchConfig {
        stemming: false,
        ..Default::default()
    };
    assert!(search(&build_search_index(&store()), "books", &config).is_empty());
}

#[test]
fn test_limit() {
    let config = SearchConfig {
        limit: Some(1),
        ..Default::default()
    };
    let hits = search(&build_search_index(&store()), "lifetimes", &config);
    assert_eq!(hit_ids(&hits), vec![2]);
}

#[test]
fn test_relevance_is_normalized() {
    for query in ["rust", "hiking personal", "book reading ownership", "gro list"] {
        for hit in run(query) {
            assert!((0.0..=1.0).contains(&hit.relevance), "{query}: {hit:?}");
        }
    }
}

#[test]
fn test_search_scope() {
    let store = store();
    let config = SearchConfig::default();

    assert_eq!(
        hit_ids(&search_scope(&store, Some(NoteId(2)), "lifetimes", &config)),
        vec![3]
    );
    assert_eq!(
        hit_ids(&search_scope(&store, None, "lifetimes", &config)),
        vec![2]
    );
    assert!(search_scope(&store, Some(NoteId(4)), "lifetimes", &config).is_empty());
}

#[test]
fn test_empty_index() {
    assert!(search(&SearchIndex::new(), "anything", &SearchConfig::default()).is_empty());
}
