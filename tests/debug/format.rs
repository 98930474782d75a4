//! Integration tests for trace formatters

use categuess_debug::{HumanFormatter, JsonFormatter, TraceFormatter, explain_match};
use categuess_foundation::{Category, CategoryMatcher};

fn planets() -> Category {
    Category::new("Planets")
        .with_alias("solar system planets")
        .with_related_concept("space")
        .with_matcher(CategoryMatcher::types_of("planets"))
}

#[test]
fn human_format_for_a_miss() {
    let trace = explain_match("gas giants", &planets());
    let output = HumanFormatter::new().format(&trace);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "MISS \"gas giants\" (none)");
    assert_eq!(lines[1], "  normalized: \"gas giant\"");
    assert_eq!(lines[2], "  guess concepts: [gas, giant]");
    assert_eq!(lines[3], "  category concepts: [planet, solar, system]");
    assert!(lines[4].starts_with("  matcher patterns: [types of planets"));
    assert_eq!(lines[5], "  concept hits: 0/2");
}

#[test]
fn json_format_round_trips_through_serde_json() {
    let trace = explain_match("space", &planets());
    let output = JsonFormatter::new().format(&trace);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["guess"], "space");
    assert_eq!(value["verdict"]["matched"], true);
    assert_eq!(value["verdict"]["reason"], "related");
    assert_eq!(value["required_hits"], 1);
}

#[test]
fn json_format_many_is_comma_separated() {
    let first = explain_match("planet", &planets());
    let second = explain_match("moon", &planets());
    let output = JsonFormatter::new().format_many(&[&first, &second]);
    let value: serde_json::Value = serde_json::from_str(&format!("[{output}]")).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[1]["verdict"]["matched"], false);
}
