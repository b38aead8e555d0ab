//! End-to-end wizard flow tests
//!
//! Fill in a will the way a user walks the wizard and check validation,
//! summary output, and the JSON export at each stage.

use chrono::NaiveDate;
use willwizard_core::{
    first_incomplete_step, summary_lines, validate_step, Beneficiary, Child, Fiduciary, Gift,
    GiftKind, MaritalStatus, Relationship, Testator, WillAnswers, WizardError, WizardStep,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn complete_answers() -> WillAnswers {
    WillAnswers {
        terms_accepted: true,
        testator: Testator {
            full_name: "Jordan Avery".to_string(),
            birth_date: Some(date(1970, 3, 2)),
            county: "Orange".to_string(),
            city: "Orlando".to_string(),
            marital_status: MaritalStatus::Married,
            spouse_name: "Riley Avery".to_string(),
        },
        children: vec![
            Child {
                full_name: "Sam Avery".to_string(),
                birth_date: Some(date(2000, 1, 1)),
                ..Default::default()
            },
            Child {
                full_name: "Max Avery".to_string(),
                birth_date: Some(date(2015, 6, 30)),
                ..Default::default()
            },
        ],
        gifts: vec![Gift {
            kind: GiftKind::Monetary,
            description: String::new(),
            amount: Some(10_000),
            recipient: "Orlando Food Bank".to_string(),
            recipient_relationship: Relationship::Charity,
        }],
        beneficiaries: vec![
            Beneficiary {
                full_name: "Riley Avery".to_string(),
                relationship: Relationship::Spouse,
                share_percent: 60,
            },
            Beneficiary {
                full_name: "Sam Avery".to_string(),
                relationship: Relationship::Child,
                share_percent: 40,
            },
        ],
        representatives: vec![Fiduciary {
            full_name: "Riley Avery".to_string(),
            relationship: Relationship::Spouse,
            city: "Orlando".to_string(),
            state: "FL".to_string(),
        }],
        guardians: vec![Fiduciary {
            full_name: "Casey Avery".to_string(),
            relationship: Relationship::Sibling,
            city: "Atlanta".to_string(),
            state: "GA".to_string(),
        }],
    }
}

#[test]
fn test_fresh_answers_stop_at_terms() {
    let answers = WillAnswers::default();
    assert_eq!(first_incomplete_step(&answers, today()), Some(WizardStep::Terms));
}

#[test]
fn test_accepting_terms_moves_to_personal() {
    let answers = WillAnswers {
        terms_accepted: true,
        ..Default::default()
    };
    assert_eq!(first_incomplete_step(&answers, today()), Some(WizardStep::Personal));
}

#[test]
fn test_complete_answers_pass_every_step() {
    let answers = complete_answers();
    for step in WizardStep::all() {
        let issues = validate_step(&answers, *step, today());
        assert!(issues.is_empty(), "{:?}: {:?}", step, issues);
    }
    assert_eq!(first_incomplete_step(&answers, today()), None);
}

#[test]
fn test_personal_step_requires_florida_county_and_spouse() {
    let mut answers = complete_answers();
    answers.testator.county = "Cook".to_string();
    answers.testator.spouse_name.clear();

    let issues = validate_step(&answers, WizardStep::Personal, today());
    let messages: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Choose your Florida county of residence",
            "Enter your spouse's name"
        ]
    );
}

#[test]
fn test_guardian_required_only_for_minors() {
    let mut answers = complete_answers();
    answers.guardians.clear();
    assert_eq!(
        first_incomplete_step(&answers, today()),
        Some(WizardStep::Representatives)
    );

    // Once the youngest child comes of age no guardian is needed
    let later = date(2033, 6, 30);
    assert!(validate_step(&answers, WizardStep::Representatives, later).is_empty());
}

#[test]
fn test_gift_rows_are_reported_individually() {
    let mut answers = complete_answers();
    answers.gifts.push(Gift {
        kind: GiftKind::SpecificItem,
        recipient: String::new(),
        ..Default::default()
    });

    let issues = validate_step(&answers, WizardStep::Gifts, today());
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.row == Some(1)));
}

#[test]
fn test_summary_lines() {
    let lines = summary_lines(&complete_answers(), today());
    assert_eq!(
        lines,
        vec![
            "Testator: Jordan Avery, Orange County, Florida".to_string(),
            "Spouse: Riley Avery".to_string(),
            "Children: Sam Avery, Max Avery (1 minor)".to_string(),
            "Gift: $10,000 to Orlando Food Bank (Charity)".to_string(),
            "Residuary: 60% to Riley Avery".to_string(),
            "Residuary: 40% to Sam Avery".to_string(),
            "Personal representative: Riley Avery".to_string(),
            "Guardian: Casey Avery".to_string(),
        ]
    );
}

#[test]
fn test_json_export_round_trip() {
    let answers = complete_answers();
    let json = answers.to_json().unwrap();
    assert!(json.contains("\"county\": \"Orange\""));
    assert_eq!(WillAnswers::from_json(&json).unwrap(), answers);
}

#[test]
fn test_json_import_rejects_garbage() {
    let err = WillAnswers::from_json("{ not json").unwrap_err();
    assert!(matches!(err, WizardError::Serialization(_)));
}
