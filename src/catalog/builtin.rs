//! Built-in assessment definitions
//!
//! The shipped catalogs are alternate configurations of the same engine:
//! question lists, weights, optional flags, and the classification
//! convention are data here, not code paths.

use crate::{
    AssessmentDefinition, AxisTarget, Category, Convention, Question, QuadrantZones, Zone,
};

/// Names of the built-in definitions, in listing order.
pub const NAMES: [&str; 3] = ["market-scout", "market-scout-pro", "market-scout-weighted"];

/// Look up a built-in definition by name.
pub fn by_name(name: &str) -> Option<AssessmentDefinition> {
    match name {
        "market-scout" => Some(market_scout()),
        "market-scout-pro" => Some(market_scout_pro()),
        "market-scout-weighted" => Some(market_scout_weighted()),
        _ => None,
    }
}

/// All built-in definitions, in listing order.
pub fn all() -> Vec<AssessmentDefinition> {
    NAMES
        .iter()
        .filter_map(|name| by_name(name))
        .collect()
}

fn question(id: &str, category_id: &str, text: &str) -> Question {
    Question {
        id: id.to_string(),
        category_id: category_id.to_string(),
        text: text.to_string(),
        min_label: None,
        max_label: None,
        weight: 1.0,
        optional: false,
    }
}

fn half_weight(id: &str, category_id: &str, text: &str) -> Question {
    Question {
        weight: 0.5,
        ..question(id, category_id, text)
    }
}

fn optional_half(id: &str, category_id: &str, text: &str) -> Question {
    Question {
        optional: true,
        ..half_weight(id, category_id, text)
    }
}

fn friction_category() -> Category {
    Category {
        id: "frictionToAdopt".to_string(),
        title: "Friction to Adopt".to_string(),
        axis_target: AxisTarget::X,
    }
}

fn price_category() -> Category {
    Category {
        id: "priceSensitivity".to_string(),
        title: "Price Sensitivity".to_string(),
        axis_target: AxisTarget::Y,
    }
}

fn market_quadrants() -> QuadrantZones {
    QuadrantZones {
        high_high: Zone::new(
            "High Friction / High Sensitivity",
            "Difficult Market. High barriers to entry and price conscious buyers.",
        ),
        low_high: Zone::new(
            "Low Friction / High Sensitivity",
            "Commodity Market. Easy to adopt, but buyers are very price driven.",
        ),
        high_low: Zone::new(
            "High Friction / Low Sensitivity",
            "Enterprise/Niche. Hard to implement, but budgets are open.",
        ),
        low_low: Zone::new(
            "Low Friction / Low Sensitivity",
            "Sweet Spot. Easy adoption and buyers aren't price sensitive.",
        ),
    }
}

/// The 10-question two-category assessment: five friction questions on the
/// X axis, five price sensitivity questions on the Y axis, unweighted,
/// four-quadrant classification.
pub fn market_scout() -> AssessmentDefinition {
    AssessmentDefinition {
        name: "market-scout".to_string(),
        title: "Market Scout".to_string(),
        x_label: "Friction to Adopt".to_string(),
        y_label: "Price Sensitivity".to_string(),
        categories: vec![friction_category(), price_category()],
        questions: vec![
            question("p1", "priceSensitivity", "Initial Investment Cost"),
            question("p2", "priceSensitivity", "Ongoing Operating Cost"),
            question("p3", "priceSensitivity", "Perception of ROI"),
            question("p4", "priceSensitivity", "Competitive Pricing Pressure"),
            question("p5", "priceSensitivity", "Budget Availability"),
            question("f1", "frictionToAdopt", "Integration Complexity"),
            question("f2", "frictionToAdopt", "Training & Skill Requirements"),
            question("f3", "frictionToAdopt", "Resistance from Legacy Systems"),
            question("f4", "frictionToAdopt", "Technical Prerequisite Load"),
            question("f5", "frictionToAdopt", "Process Change Management"),
        ],
        convention: Convention::FourQuadrant {
            zones: market_quadrants(),
        },
    }
}

/// The expanded 17-question assessment: the ten required questions plus a
/// seven-question optional "Other Factors" category, half-weighted and
/// folded into both axes. Binary opportunity classification.
pub fn market_scout_pro() -> AssessmentDefinition {
    let base = market_scout();
    let mut questions = base.questions;
    questions.extend([
        optional_half("o1", "otherFactors", "Regulatory & Compliance Burden"),
        optional_half("o2", "otherFactors", "Vendor Ecosystem Maturity"),
        optional_half("o3", "otherFactors", "Data Migration Effort"),
        optional_half("o4", "otherFactors", "Security Review Overhead"),
        optional_half("o5", "otherFactors", "Internal Champion Availability"),
        optional_half("o6", "otherFactors", "Seasonality of Demand"),
        optional_half("o7", "otherFactors", "Switching Cost from Incumbents"),
    ]);

    let mut categories = base.categories;
    categories.push(Category {
        id: "otherFactors".to_string(),
        title: "Other Factors".to_string(),
        axis_target: AxisTarget::Both,
    });

    AssessmentDefinition {
        name: "market-scout-pro".to_string(),
        title: "Market Scout Pro".to_string(),
        categories,
        questions,
        convention: Convention::BinaryOpportunity {
            opportunity: Zone::new(
                "Opportunity",
                "Both adoption friction and price pressure work in your favor.",
            ),
            challenging: Zone::new(
                "Challenging",
                "At least one axis works against you. Expect a harder go-to-market.",
            ),
        },
        ..base
    }
}

/// The 12-question weighted assessment: per axis, four full-weight primary
/// questions and two half-weight secondary questions. Four-quadrant
/// classification.
pub fn market_scout_weighted() -> AssessmentDefinition {
    AssessmentDefinition {
        name: "market-scout-weighted".to_string(),
        title: "Market Scout (Weighted)".to_string(),
        x_label: "Friction to Adopt".to_string(),
        y_label: "Price Sensitivity".to_string(),
        categories: vec![friction_category(), price_category()],
        questions: vec![
            question("p1", "priceSensitivity", "Initial Investment Cost"),
            question("p2", "priceSensitivity", "Ongoing Operating Cost"),
            question("p3", "priceSensitivity", "Perception of ROI"),
            question("p4", "priceSensitivity", "Competitive Pricing Pressure"),
            half_weight("p5", "priceSensitivity", "Budget Availability"),
            half_weight("p6", "priceSensitivity", "Procurement Cycle Length"),
            question("f1", "frictionToAdopt", "Integration Complexity"),
            question("f2", "frictionToAdopt", "Training & Skill Requirements"),
            question("f3", "frictionToAdopt", "Resistance from Legacy Systems"),
            question("f4", "frictionToAdopt", "Technical Prerequisite Load"),
            half_weight("f5", "frictionToAdopt", "Process Change Management"),
            half_weight("f6", "frictionToAdopt", "Organizational Risk Appetite"),
        ],
        convention: Convention::FourQuadrant {
            zones: market_quadrants(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::validate;

    #[test]
    fn all_builtins_validate() {
        let definitions = all();
        assert_eq!(definitions.len(), NAMES.len());
        for def in &definitions {
            assert_eq!(validate(def), Ok(()), "builtin {} failed", def.name);
        }
    }

    #[test]
    fn market_scout_shape() {
        let def = market_scout();
        assert_eq!(def.questions.len(), 10);
        assert_eq!(def.categories.len(), 2);
        assert!(def.questions.iter().all(|q| q.weight == 1.0 && !q.optional));
    }

    #[test]
    fn pro_optional_pool() {
        let def = market_scout_pro();
        assert_eq!(def.questions.len(), 17);
        let optional: Vec<_> = def.optional_questions().collect();
        assert_eq!(optional.len(), 7);
        assert!(optional.iter().all(|q| q.weight == 0.5));
        assert!(matches!(
            def.convention,
            Convention::BinaryOpportunity { .. }
        ));
    }

    #[test]
    fn weighted_axis_maxima() {
        // Per axis: 4 * 1.0 + 2 * 0.5 = 5.0 weight, so 10 points of range.
        let def = market_scout_weighted();
        let friction_weight: f64 = def
            .questions
            .iter()
            .filter(|q| q.category_id == "frictionToAdopt")
            .map(|q| q.weight)
            .sum();
        assert_eq!(friction_weight, 5.0);
        assert_eq!(def.questions.len(), 12);
    }

    #[test]
    fn by_name_unknown_is_none() {
        assert!(by_name("nope").is_none());
    }
}
