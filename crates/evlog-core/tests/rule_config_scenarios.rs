//! End-to-end scenarios: rule configuration text in, outcomes and patterns out.
#![allow(clippy::expect_used)]

use evlog_core::{
    EnumRule, EnumRuleConfig, EventContext, RegexAwareRule, ValidationResultType, ValueRule,
};
use regex::Regex;

const COLORS: &str = r#"{ "values": ["red", "green", "blue", "green"] }"#;

#[test]
fn color_rule_from_json() {
    let rule = EnumRule::from_json(COLORS).expect("valid rule config");
    let ctx = EventContext::new("ui.theme.changed").with_field("scheme", "dark");

    assert_eq!(rule.len(), 3);
    assert_eq!(rule.validate("red", &ctx), ValidationResultType::Accepted);
    assert_eq!(rule.validate("RED", &ctx), ValidationResultType::Rejected);
    assert_eq!(rule.validate("light blue", &ctx), ValidationResultType::Rejected);
}

#[test]
fn empty_config_reports_incorrect_rule() {
    let rule = EnumRule::from_json(r#"{ "values": [] }"#).expect("valid rule config");
    let outcome = rule.validate("", &EventContext::default());
    assert_eq!(outcome, ValidationResultType::IncorrectRule);
    assert_eq!(outcome.code(), "validation.incorrect_rule");
}

#[test]
fn pattern_composes_with_other_patterns() {
    let rule = EnumRule::from_json(r#"{ "enum": ["1.0", "2.0+"] }"#).expect("valid rule config");
    let composed = format!("^(?:{}|dev-[0-9]+)$", rule.as_regex());
    let re = Regex::new(&composed).expect("composed pattern compiles");

    assert!(re.is_match("1.0"));
    assert!(re.is_match("2.0+"));
    assert!(re.is_match("dev-42"));
    assert!(!re.is_match("1x0"));
    assert!(!re.is_match("2.00"));
}

#[test]
fn legacy_rule_still_accepts_new_values() {
    // Written when `:` was not an allowed symbol and was stored as `_`.
    let config = EnumRuleConfig {
        values: Some(vec!["plugin_kotlin".to_owned()]),
    };
    let rule = EnumRule::from(config);
    assert_eq!(
        rule.validate("plugin:kotlin", &EventContext::new("plugin.loaded")),
        ValidationResultType::Accepted
    );
}
