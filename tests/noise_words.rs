use kwic_core::document::NoiseWordSet;

#[test]
fn invariant_membership_is_case_insensitive() {
    let noise = NoiseWordSet::build("The a OF");

    assert!(noise.contains("the"));
    assert!(noise.contains("THE"));
    assert!(noise.contains("tHe"));
    assert!(noise.contains("A"));
    assert!(noise.contains("of"));
    assert!(!noise.contains("cat"));
}

#[test]
fn invariant_no_prefix_or_partial_matching() {
    let noise = NoiseWordSet::build("the");

    assert!(!noise.contains("th"));
    assert!(!noise.contains("them"));
    assert!(!noise.contains("the,"));
    assert!(!noise.contains(""));
}

#[test]
fn tokens_may_span_lines() {
    let noise = NoiseWordSet::build("a an\n\tthe\r\n\n  of   in\n");

    assert_eq!(noise.len(), 5);
    let words: Vec<&str> = noise.iter().collect();
    assert_eq!(words, vec!["a", "an", "in", "of", "the"]);
}

#[test]
fn duplicates_collapse_after_folding() {
    let noise = NoiseWordSet::build("The the THE");
    assert_eq!(noise.len(), 1);
}

#[test]
fn empty_list_filters_nothing() {
    let noise = NoiseWordSet::build("   \n\n");

    assert!(noise.is_empty());
    assert!(!noise.contains("the"));
}

#[test]
fn collects_from_string_slices() {
    let noise: NoiseWordSet = ["The", "of a"].into_iter().collect();

    assert_eq!(noise, NoiseWordSet::build("the of a"));
}

#[test]
fn no_break_space_stays_inside_a_noise_token() {
    let noise = NoiseWordSet::build("of\u{a0}the a");

    assert_eq!(noise.len(), 2);
    assert!(noise.contains("OF\u{a0}THE"));
    assert!(!noise.contains("of"));
    assert!(!noise.contains("the"));
}
