// tests/unit_classify.rs
use newscheck_core::heuristics::{Classifier, FixedJitter, MAX_CONFIDENCE, MIN_CONFIDENCE};
use newscheck_core::types::{Label, Record};

#[test]
fn test_headline_example() {
    let mut c = Classifier::new(FixedJitter(0.0));
    let v = c.classify("BREAKING: Scientists reveal SHOCKING secret!!");
    assert_eq!(v.label, Label::Fake);
    assert!((v.breakdown.fake_score - 3.8).abs() < 1e-9);
    assert!((v.confidence - MAX_CONFIDENCE).abs() < f64::EPSILON);
}

#[test]
fn test_title_and_body_scored_together() {
    let mut c = Classifier::new(FixedJitter(0.0));
    let batch = c.classify_batch(vec![Record::new("Officials confirm", "according to the report")]);
    let r = batch.get(1).unwrap();
    assert_eq!(r.label, Label::Real);
    assert_eq!(r.title, "Officials confirm");
}

#[test]
fn test_seeded_runs_repeat() {
    let records = || {
        (0..20)
            .map(|i| Record::new(format!("Story {i}"), "shocking secret revealed!!"))
            .collect::<Vec<_>>()
    };
    let a = Classifier::from_seed(Some(7)).classify_batch(records());
    let b = Classifier::from_seed(Some(7)).classify_batch(records());
    assert_eq!(a, b);
    for r in &a {
        assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&r.confidence));
    }
}
