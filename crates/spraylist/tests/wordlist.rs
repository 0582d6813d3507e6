//! Integration tests for the public generation and ranking API.
//!
//! These tests pin the candidate counts, ordering guarantees, and reference
//! scores that downstream tooling relies on.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::rstest;
use spraylist::{
    ComplexityBreakdown, DedupMode, FULL_RULES, Generation, PipelineOptions, RankingMode,
    SEPARATOR_RULES, deduplicate, generate, process, rank, score,
};

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

#[rstest]
#[case("John Doe")]
#[case("ada king lovelace")]
#[case("A B")]
#[case("  ")]
fn multi_token_names_yield_every_rule(#[case] name: &str) {
    assert_eq!(generate(&[name], None).len(), FULL_RULES);
}

#[rstest]
#[case("Cher")]
#[case("")]
#[case("jean-luc")]
fn single_token_names_yield_separator_rules(#[case] name: &str) {
    let candidates = generate(&[name], None);

    assert_eq!(candidates.len(), SEPARATOR_RULES);
    assert!(candidates.iter().all(|candidate| *candidate == name.to_lowercase()));
}

#[test]
fn domain_doubles_the_candidate_list() {
    let names = ["John Doe", "Cher", "Grace Brewster Hopper"];
    let bare = generate(&names, None);
    let with_domain = generate(&names, Some("corp.example"));

    assert_eq!(with_domain.len(), 2 * bare.len());
    let (head, tail) = with_domain.split_at(bare.len());
    assert_eq!(head, bare.as_slice());
    let expected: Vec<String> = bare
        .iter()
        .map(|candidate| format!("{candidate}@corp.example"))
        .collect();
    assert_eq!(tail, expected.as_slice());
}

#[test]
fn dedup_modes_match_reference_examples() {
    let input = owned(&["A", "a", "B", "A"]);

    assert_eq!(
        deduplicate(input.clone(), DedupMode::CaseSensitive),
        ["A", "a", "B"]
    );
    assert_eq!(deduplicate(input, DedupMode::CaseInsensitive), ["A", "B"]);
}

#[test]
fn repeated_characters_add_to_the_score() {
    let breakdown = ComplexityBreakdown::of("aabb");

    assert_eq!(breakdown.repeats, 2);
    assert_eq!(score("ab"), 4);
    assert_eq!(score("aabb"), 12);
    assert_eq!(score("aaaa"), 14);
}

#[test]
fn rank_is_ascending_and_stable() {
    assert_eq!(rank(owned(&["zz", "a", "mmm"])), ["a", "zz", "mmm"]);
    assert_eq!(score("xy"), score("yx"));
    assert_eq!(rank(owned(&["yx", "zz", "xy"])), ["yx", "xy", "zz"]);
}

#[test]
fn john_doe_expands_in_rule_order() {
    let candidates = generate(&["John Doe"], None);

    assert_eq!(
        candidates,
        [
            "john.doe", "john-doe", "johndoe", "doejohn", "johndoe", "jdoe", "doej", "johnd",
            "j.doe", "d.john", "john.d", "j-doe", "doejohn", "john", "doe",
        ]
    );
}

#[test]
fn full_pipeline_ranks_generated_emails_after_usernames() {
    let options = PipelineOptions::new(
        Some(Generation::new(Some("corp.example".to_owned()))),
        RankingMode::SortDedupCaseSensitive,
        false,
    )
    .expect("valid options");

    let wordlist = process(owned(&["John Doe"]), &options);

    assert_eq!(wordlist.len(), 26);
    let first_email = wordlist
        .iter()
        .position(|entry| entry.contains('@'))
        .expect("emails are present");
    assert_eq!(first_email, 13);
    assert!(wordlist.iter().skip(first_email).all(|entry| entry.contains('@')));
}

#[test]
fn raw_strings_can_be_ranked_without_generation() {
    let options =
        PipelineOptions::new(None, RankingMode::SortOnly, true).expect("valid options");

    let wordlist = process(owned(&["Summer2024!", "password", "P@ss"]), &options);

    assert_eq!(wordlist.first().map(String::as_str), Some("Summer2024!"));
}
