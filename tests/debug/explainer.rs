//! Integration tests for the config-driven explainer

use categuess_debug::{DebugConfig, MatchExplainer};
use categuess_foundation::{Category, MatchReason};

fn cat_toys() -> Category {
    Category::new("Cat toys").with_alias("toys for cats")
}

#[test]
fn disabled_explainer_builds_no_trace() {
    let explained = MatchExplainer::default().evaluate("toys for cats", &cat_toys());
    assert_eq!(explained.verdict.reason, MatchReason::Alias);
    assert!(explained.trace.is_none());
}

#[test]
fn enabled_explainer_verdict_matches_trace() {
    let explainer = MatchExplainer::new(DebugConfig::default().with_enabled(true));
    let explained = explainer.evaluate("toys for cats", &cat_toys());
    let trace = explained.trace.unwrap();
    assert_eq!(trace.verdict, explained.verdict);
}

#[test]
fn toggling_diagnostics() {
    let mut explainer = MatchExplainer::default();
    explainer.set_enabled(true);
    assert!(explainer.evaluate("cat", &cat_toys()).trace.is_some());
    explainer.set_enabled(false);
    assert!(explainer.evaluate("cat", &cat_toys()).trace.is_none());
}

#[test]
fn write_trace_uses_configured_format() {
    let category = cat_toys();
    let trace = categuess_debug::explain_match("cat toy", &category);

    let human = MatchExplainer::new(DebugConfig::development());
    let mut out = Vec::new();
    human.write_trace(&mut out, &trace).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("MATCH \"cat toy\" (canonical)"));
    assert!(text.ends_with('\n'));

    let json = MatchExplainer::new(DebugConfig::development().with_json_output(true));
    let value: serde_json::Value = serde_json::from_str(&json.render(&trace)).unwrap();
    assert_eq!(value["verdict"]["reason"], "canonical");
}
