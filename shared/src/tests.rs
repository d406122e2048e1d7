use ring::rand::SystemRandom;

use crate::{resolve, validate_vote, CandidateOptions, ValidationError, VoteRecord, VoterId, MAX_OPTION_LENGTH};

fn cats_and_dogs() -> CandidateOptions {
    CandidateOptions::new("Cats", "Dogs").unwrap()
}

#[test]
fn test_option_configuration() {
    let options = cats_and_dogs();
    assert_eq!(options.iter().collect::<Vec<_>>(), ["Cats", "Dogs"]);
    assert!(options.contains("Dogs"));
    assert!(!options.contains("Birds"));

    assert!(matches!(CandidateOptions::new("", "Dogs"), Err(ValidationError::EmptyOption)));
    assert!(matches!(CandidateOptions::new("Cats", "   "), Err(ValidationError::EmptyOption)));
    assert!(matches!(
        CandidateOptions::new("Cats", "cats"),
        Err(ValidationError::DuplicateOptions(opt)) if opt == "cats"
    ));

    let long = "x".repeat(MAX_OPTION_LENGTH + 1);
    assert!(matches!(CandidateOptions::new(long, "Dogs"), Err(ValidationError::OptionTooLong)));
}

#[test]
fn test_vote_validation() {
    let options = cats_and_dogs();
    assert_eq!(validate_vote(&options, Some("Cats")), Ok("Cats"));
    assert_eq!(validate_vote(&options, Some("Dogs")), Ok("Dogs"));

    assert_eq!(validate_vote(&options, None), Err(ValidationError::MissingVote));
    assert_eq!(
        validate_vote(&options, Some("Birds")),
        Err(ValidationError::UnknownOption("Birds".into()))
    );
    assert!(validate_vote(&options, Some("cats")).is_err());
    assert!(validate_vote(&options, Some(" Cats")).is_err());
    assert!(validate_vote(&options, Some("")).is_err());
}

#[test]
fn test_fresh_identity_issued() {
    let rng = SystemRandom::new();

    for presented in [None, Some(""), Some("not a token"), Some("<script>")] {
        let voter = resolve(presented, &rng).unwrap();
        assert!(voter.issued);
        assert!(!voter.id.as_str().is_empty());
        assert!(VoterId::parse(voter.id.as_str()).is_some());
    }

    let first = resolve(None, &rng).unwrap();
    let second = resolve(None, &rng).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn test_presented_identity_passthrough() {
    let rng = SystemRandom::new();
    let issued = resolve(None, &rng).unwrap();

    let again = resolve(Some(issued.id.as_str()), &rng).unwrap();
    assert!(!again.issued);
    assert_eq!(again.id, issued.id);

    // ids handed out by older deployments were lowercase hex
    let legacy = resolve(Some("3f9a0c11d2e4b7"), &rng).unwrap();
    assert!(!legacy.issued);
    assert_eq!(legacy.id.as_str(), "3f9a0c11d2e4b7");

    let oversized = "a".repeat(200);
    assert!(resolve(Some(&oversized), &rng).unwrap().issued);
}

#[test]
fn test_vote_record_serialization() {
    let record = VoteRecord::new(VoterId::parse("abc123").unwrap(), "Cats");
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["voter_id"], "abc123");
    assert_eq!(json["vote"], "Cats");
    assert!(json["cast_at"].as_str().is_some_and(|ts| ts.ends_with('Z')));
}
