use tokenguess::engine::{
    edit_distance, normalize_token, rank_suggestions, SuggestionRanker, DEFAULT_SUGGESTION_LIMIT,
};

const MARKER: &str = "Ġ";

fn vocab(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn documented_examples_hold() {
    assert_eq!(edit_distance("", "abc"), 3);
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert_eq!(normalize_token("Ġhello", MARKER), "hello");
    assert_eq!(normalize_token("hello", MARKER), "hello");
    assert_eq!(normalize_token("2012\u{2212}dash", MARKER), "2012-dash");

    let v = vocab(&["cat", "bat", "dog"]);
    assert_eq!(rank_suggestions("cat", &v, MARKER, 7), vec!["cat", "bat", "dog"]);
    assert!(rank_suggestions("", &v, MARKER, 7).is_empty());
}

#[test]
fn large_vocabulary_respects_limit() {
    let v: Vec<String> = (0..20_000).map(|i| format!("Ġw{i}")).collect();
    let ranker = SuggestionRanker::new(v.clone(), MARKER, DEFAULT_SUGGESTION_LIMIT);

    assert_eq!(ranker.rank("w1").len(), DEFAULT_SUGGESTION_LIMIT);
    assert_eq!(rank_suggestions("w1", &v, MARKER, 3).len(), 3);
    // "Ġw1" normalizes to "w1": distance 0 but not exact, still first.
    assert_eq!(ranker.rank("w1")[0], "Ġw1");
}

#[test]
fn ranking_is_repeatable() {
    let v = vocab(&["Ġthe", "the", "The", "Ġthen", "Ġthey", "Ġother"]);
    let ranker = SuggestionRanker::new(v, MARKER, 4);
    let first = ranker.rank("the");
    for _ in 0..10 {
        assert_eq!(ranker.rank("the"), first);
    }
    assert_eq!(first[0], "the");
}

#[test]
fn ranker_shared_across_threads() {
    let v = vocab(&["cat", "cot", "cut", "dog"]);
    let ranker = std::sync::Arc::new(SuggestionRanker::new(v, MARKER, 2));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ranker = std::sync::Arc::clone(&ranker);
            std::thread::spawn(move || ranker.rank("cxt"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["cat", "cot"]);
    }
}
