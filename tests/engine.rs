//! Engine scenario tests against the built-in and hand-built catalogs.

use scout::catalog::{builtin, validate};
use scout::engine::Assessment;
use scout::{
    AssessmentDefinition, AxisTarget, Category, Convention, Question, Rating, Zone,
};

fn rate_all_scoreable(assessment: &mut Assessment, rating: Rating) {
    let ids: Vec<String> = assessment
        .definition()
        .questions
        .iter()
        .filter(|q| assessment.is_scoreable(q))
        .map(|q| q.id.clone())
        .collect();
    for id in ids {
        assessment.set_rating(&id, rating).unwrap();
    }
}

#[test]
fn total_max_is_twice_required_weight_sum() {
    for definition in builtin::all() {
        let expected: f64 = definition.required_questions().map(|q| 2.0 * q.weight).sum();
        let assessment = Assessment::new(definition.clone());
        let point = assessment.compute_result();
        assert_eq!(
            point.total_max, expected,
            "definition {} totalMax",
            definition.name
        );
    }
}

#[test]
fn completion_requires_every_scoreable_question() {
    let definition = builtin::market_scout();
    let mut assessment = Assessment::new(definition.clone());
    assert!(!assessment.is_complete());

    let ids: Vec<&str> = definition.questions.iter().map(|q| q.id.as_str()).collect();
    for (i, id) in ids.iter().enumerate() {
        assessment.set_rating(id, Rating::Neutral).unwrap();
        let expect_complete = i == ids.len() - 1;
        assert_eq!(assessment.is_complete(), expect_complete, "after {}", id);
    }
}

#[test]
fn all_plus_one_lands_in_difficult_market() {
    let mut assessment = Assessment::new(builtin::market_scout());
    rate_all_scoreable(&mut assessment, Rating::Positive);

    let point = assessment.compute_result();
    assert_eq!((point.x, point.y), (5.0, 5.0));
    assert_eq!((point.total_score, point.total_max), (10.0, 20.0));

    let report = assessment.report();
    assert_eq!(report.zone.title, "High Friction / High Sensitivity");
}

#[test]
fn all_zero_ties_into_non_negative_quadrant() {
    let definition = builtin::market_scout();
    let mut assessment = Assessment::new(definition.clone());
    rate_all_scoreable(&mut assessment, Rating::Neutral);

    let zero_point = assessment.compute_result();
    assert_eq!((zero_point.x, zero_point.y), (0.0, 0.0));
    assert_eq!((zero_point.total_score, zero_point.total_max), (0.0, 20.0));

    // Tie-break: exactly 0 classifies the same as strictly positive.
    let mut positive = Assessment::new(definition);
    rate_all_scoreable(&mut positive, Rating::Positive);
    assert_eq!(
        assessment.report().zone.title,
        positive.report().zone.title
    );
}

#[test]
fn binary_convention_excludes_zero_from_opportunity() {
    let binary = Convention::BinaryOpportunity {
        opportunity: Zone::new("Opportunity", ""),
        challenging: Zone::new("Challenging", ""),
    };

    let mut positive = Assessment::new(builtin::market_scout());
    rate_all_scoreable(&mut positive, Rating::Positive);
    assert_eq!(binary.classify(positive.compute_result()).title, "Opportunity");

    let mut zero = Assessment::new(builtin::market_scout());
    rate_all_scoreable(&mut zero, Rating::Neutral);
    assert_eq!(binary.classify(zero.compute_result()).title, "Challenging");
}

/// 5 full-weight plus 5 half-weight questions per axis, all rated +2:
/// each axis reaches 5*2*1 + 5*2*0.5 = 15 and totals saturate at 30/30.
#[test]
fn weighted_five_plus_five_per_axis() {
    let mut questions = Vec::new();
    for (category, prefix) in [("fr", "f"), ("pr", "p")] {
        for i in 1..=5 {
            questions.push(Question {
                id: format!("{}{}", prefix, i),
                category_id: category.to_string(),
                text: format!("{} primary {}", category, i),
                min_label: None,
                max_label: None,
                weight: 1.0,
                optional: false,
            });
        }
        for i in 6..=10 {
            questions.push(Question {
                id: format!("{}{}", prefix, i),
                category_id: category.to_string(),
                text: format!("{} secondary {}", category, i),
                min_label: None,
                max_label: None,
                weight: 0.5,
                optional: false,
            });
        }
    }
    let definition = AssessmentDefinition {
        name: "weighted-20".to_string(),
        title: "Weighted".to_string(),
        x_label: "Friction".to_string(),
        y_label: "Price".to_string(),
        categories: vec![
            Category {
                id: "fr".to_string(),
                title: "Friction".to_string(),
                axis_target: AxisTarget::X,
            },
            Category {
                id: "pr".to_string(),
                title: "Price".to_string(),
                axis_target: AxisTarget::Y,
            },
        ],
        questions,
        convention: Convention::BinaryOpportunity {
            opportunity: Zone::new("Opportunity", ""),
            challenging: Zone::new("Challenging", ""),
        },
    };
    assert_eq!(validate(&definition), Ok(()));

    let mut assessment = Assessment::new(definition);
    rate_all_scoreable(&mut assessment, Rating::StrongPositive);
    let point = assessment.compute_result();
    assert_eq!((point.x, point.y), (15.0, 15.0));
    assert_eq!((point.total_score, point.total_max), (30.0, 30.0));
}

#[test]
fn optional_factor_shifts_totals_then_restores() {
    let mut assessment = Assessment::new(builtin::market_scout_pro());
    rate_all_scoreable(&mut assessment, Rating::Neutral);
    assert!(assessment.is_complete());

    let before = assessment.compute_result();
    assert_eq!((before.total_score, before.total_max), (0.0, 20.0));

    assessment.set_optional_enabled("o1", true).unwrap();
    assessment
        .set_rating("o1", Rating::StrongPositive)
        .unwrap();
    let enabled = assessment.compute_result();
    assert_eq!((enabled.total_score, enabled.total_max), (1.0, 21.0));

    assessment.set_optional_enabled("o1", false).unwrap();
    let after = assessment.compute_result();
    assert_eq!((after.total_score, after.total_max), (0.0, 20.0));
    assert_eq!(assessment.rating("o1"), None);
}
