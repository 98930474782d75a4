//! Integration tests for the REPL, driven by a scripted editor

use categuess_debug::{DebugConfig, MatchExplainer};
use categuess_foundation::PuzzleId;
use categuess_runtime::editor::ScriptedEditor;
use categuess_runtime::{LoadOptions, PuzzleCollection, PuzzleSelector, Repl, Session};

/// A session whose collection holds only the given built-in puzzle.
fn single_puzzle_session(id: &str) -> Session {
    let puzzle = PuzzleCollection::builtin()
        .unwrap()
        .require(&PuzzleId::new(id))
        .unwrap()
        .clone();
    Session::new(
        PuzzleCollection::new(vec![puzzle], LoadOptions::default()).unwrap(),
        PuzzleSelector::with_seed(1),
        MatchExplainer::new(DebugConfig::default().with_trace_to_stderr(false)),
    )
}

fn play(id: &str, lines: &[&str]) -> String {
    let editor = ScriptedEditor::new(lines.iter().copied());
    let mut repl =
        Repl::with_editor(editor, Vec::new(), single_puzzle_session(id)).without_banner();
    repl.run().unwrap();
    String::from_utf8(repl.output().clone()).unwrap()
}

#[test]
fn winning_round() {
    let output = play("dog-breeds", &["cats", "types of dogs", ":quit"]);

    assert!(output.contains("  1. Beagle"));
    assert!(output.contains("  2. -----"));
    assert!(output.contains("Not quite"));
    assert!(output.contains("  2. Poodle"));
    assert!(output.contains("You solved it"));
    assert!(output.contains("Category: \x1b[1mDog breeds"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn footer_shows_compact_status() {
    let output = play("dog-breeds", &["cats", "a", "b", "c", "d", "e"]);

    assert!(output.contains("1 / 5 revealed. Take a guess."));
    assert!(output.contains("2 / 5 revealed. Another word appears."));
    assert!(output.contains("5 / 5 revealed. One more guess."));
    assert!(output.contains("5 / 5 revealed. Try a new puzzle."));
    assert!(!output.contains("Ready for another?"));

    let won = play("dog-breeds", &["types of dogs"]);
    assert!(won.contains("5 / 5 revealed. Ready for another?"));
}

#[test]
fn giving_up_reveals_the_category() {
    let output = play("planets", &[":giveup", "planets"]);

    assert!(output.contains("5 / 5 revealed"));
    assert!(output.contains("Category: \x1b[1mPlanets"));
    assert!(output.contains("This round is over"));
    assert!(!output.contains("You solved it"));
}

#[test]
fn new_round_after_loss() {
    let output = play(
        "cat-toys",
        &["a", "b1", "c2", "d3", "e4", ":new", "cat toys"],
    );

    assert!(output.contains("Last chance"));
    assert!(output.contains("Round over"));
    assert_eq!(output.matches("  1. Laser").count(), 8);
    assert!(output.contains("You solved it"));
}

#[test]
fn commands_and_unknown_input() {
    let output = play(
        "things-with-keys",
        &[":help", ":debug on", ":debug", ":debug off", ":words", ":dance", "   "],
    );

    assert!(output.contains(":giveup"));
    assert!(output.contains("Match diagnostics: on"));
    assert!(output.contains("Match diagnostics: off"));
    assert!(output.contains("Unknown command: :dance"));
    assert_eq!(output.matches("1 / 5 revealed").count(), 2);
}

#[test]
fn banner_is_shown_by_default() {
    let editor = ScriptedEditor::new([":quit"]);
    let mut repl = Repl::with_editor(editor, Vec::new(), single_puzzle_session("planets"));
    repl.run().unwrap();
    let output = String::from_utf8(repl.output().clone()).unwrap();
    assert!(output.starts_with("\x1b[1;36mCateguess\x1b[0m"));
}
