use rs_word_ladder::*;

use std::sync::Arc;

macro_rules! assert_path_eq {
    ($arc_path:expr, $non_arc_path:expr) => {
        assert_eq!(
            $arc_path,
            Some(
                $non_arc_path
                    .iter()
                    .map(|word| Arc::from(*word))
                    .collect::<Vec<Arc<str>>>()
            )
        );
    };
}

fn word_set(words: &[&str]) -> WordSet {
    words.iter().map(|word| Arc::from(*word)).collect()
}

fn engine_with(words: &[&str]) -> LadderEngine {
    LadderEngine::with_dictionary(Arc::new(Dictionary::from_iterator(words)))
}

#[test]
fn one_letter_different_properties() {
    let words = ["CAT", "COT", "DOT", "DOG", "BAT", "BAG", "BIG", "COLD", "CORD"];
    for a in words {
        assert!(!is_one_letter_different(a, a), "{a} is adjacent to itself");
        for b in words {
            assert_eq!(
                is_one_letter_different(a, b),
                is_one_letter_different(b, a),
                "{a} / {b}"
            );
            if a.len() != b.len() {
                assert!(!is_one_letter_different(a, b), "{a} / {b}");
            }
        }
    }
}

#[test]
fn find_word_ladder_finds_shortest_path() {
    let engine = engine_with(&[]);
    let candidates = word_set(&["CAT", "COT", "DOT", "DOG", "BAT", "BAG", "BIG"]);

    let path = engine.find_word_ladder("CAT", "DOG", &candidates);

    assert_path_eq!(path, ["CAT", "COT", "DOT", "DOG"]);
}

#[test]
fn find_word_ladder_returns_valid_paths() {
    let engine = engine_with(&[]);
    let candidates = word_set(&["CAT", "COT", "DOT", "DOG", "BAT", "BAG", "BIG", "BOG", "COG"]);

    let path = engine
        .find_word_ladder("BIG", "COT", &candidates)
        .expect("a ladder exists");

    assert_eq!(path.first().map(|word| word.as_ref()), Some("BIG"));
    assert_eq!(path.last().map(|word| word.as_ref()), Some("COT"));
    assert!(path
        .windows(2)
        .all(|pair| is_one_letter_different(&pair[0], &pair[1])));
    // BIG BOG COG COT
    assert_eq!(path.len(), 4);
}

#[test]
fn find_word_ladder_missing_endpoint() {
    let engine = engine_with(&[]);
    let candidates = word_set(&["CAT", "COT", "DOT"]);

    assert_eq!(engine.find_word_ladder("CAT", "DOG", &candidates), None);
    assert_eq!(engine.find_word_ladder("DOG", "CAT", &candidates), None);
}

#[test]
fn find_word_ladder_unreachable() {
    let engine = engine_with(&[]);
    let candidates = word_set(&["CAT", "COT", "DOG"]);

    assert_eq!(engine.find_word_ladder("CAT", "DOG", &candidates), None);
    assert!(engine.path_cache().is_empty());
}

#[test]
fn find_word_ladder_same_word() {
    let engine = engine_with(&[]);
    let candidates = word_set(&["CAT", "COT"]);

    assert_path_eq!(engine.find_word_ladder("cat", "CAT", &candidates), ["CAT"]);
}

#[test]
fn find_word_ladder_with_builtin_words() {
    let engine = LadderEngine::new();
    let candidates = engine.dictionary().words_of_length(4);

    let path = engine
        .find_word_ladder("COLD", "WARM", &candidates)
        .expect("a ladder exists");

    assert_eq!(path.len(), 5);
    assert!(path.iter().all(|word| engine.is_valid_word(word)));
}

#[test]
fn neighbors_within_candidates() {
    let candidates = word_set(&["CAT", "COT", "DOT", "DOG", "BAT", "BAG", "BIG"]);

    assert_eq!(
        neighbors("BAT", &candidates),
        vec![Arc::<str>::from("BAG"), Arc::from("CAT")]
    );
}
