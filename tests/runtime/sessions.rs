//! Integration tests for sessions, rounds, and puzzle selection

use categuess_debug::{DebugConfig, MatchExplainer};
use categuess_foundation::{MatchReason, PuzzleId};
use categuess_runtime::{
    GuessOutcome, GuessStatus, PuzzleCollection, PuzzleSelector, Round, RuntimeConfig, Session,
    apply_correct_guess, apply_incorrect_guess,
};

fn builtin_puzzle(id: &str) -> categuess_foundation::Puzzle {
    PuzzleCollection::builtin()
        .unwrap()
        .require(&PuzzleId::new(id))
        .unwrap()
        .clone()
}

fn status_of(outcome: &GuessOutcome) -> Option<GuessStatus> {
    match outcome {
        GuessOutcome::Evaluated { status, .. } => Some(*status),
        GuessOutcome::Ignored => None,
    }
}

// =============================================================================
// Reveal Transitions
// =============================================================================

#[test]
fn reveal_transitions() {
    let cases = [
        ((1, 5), (2, GuessStatus::Incorrect)),
        ((4, 5), (5, GuessStatus::Last)),
        ((5, 5), (5, GuessStatus::Lost)),
        ((0, 0), (0, GuessStatus::Lost)),
    ];
    for ((revealed, total), (expected_count, expected_status)) in cases {
        let result = apply_incorrect_guess(revealed, total);
        assert_eq!(result.revealed_count, expected_count);
        assert_eq!(result.status, expected_status);
    }
}

#[test]
fn correct_guess_reveals_every_word() {
    for total in [0, 1, 5] {
        let result = apply_correct_guess(total);
        assert_eq!(result.revealed_count, total);
        assert_eq!(result.status, GuessStatus::Correct);
    }
}

// =============================================================================
// Rounds
// =============================================================================

#[test]
fn round_against_builtin_words_after_bread() {
    let mut round = Round::new(builtin_puzzle("words-after-bread"));
    let explainer = MatchExplainer::default();

    assert_eq!(status_of(&round.submit_guess("baking", &explainer)), Some(GuessStatus::Incorrect));
    assert_eq!(round.visible_words(), ["Crumb", "Stick"]);

    let outcome = round.submit_guess("Bread", &explainer);
    assert!(matches!(
        outcome,
        GuessOutcome::Evaluated { verdict, status: GuessStatus::Correct, .. }
            if verdict.reason == MatchReason::Alias
    ));
    assert_eq!(round.visible_words().len(), 5);
    assert_eq!(round.guesses(), ["baking", "Bread"]);
    assert_eq!(round.submit_guess("after bread", &explainer), GuessOutcome::Ignored);
}

#[test]
fn last_chance_then_loss() {
    let mut round = Round::new(builtin_puzzle("planets"));
    let explainer = MatchExplainer::default();
    let statuses: Vec<_> = ["moons", "stars", "comets", "galaxies", "nebulae", "asteroids"]
        .iter()
        .map(|guess| status_of(&round.submit_guess(guess, &explainer)))
        .collect();

    assert_eq!(
        statuses,
        vec![
            Some(GuessStatus::Incorrect),
            Some(GuessStatus::Incorrect),
            Some(GuessStatus::Incorrect),
            Some(GuessStatus::Last),
            Some(GuessStatus::Lost),
            None,
        ]
    );
}

#[test]
fn traced_round_carries_traces() {
    let mut round = Round::new(builtin_puzzle("cat-toys"));
    let explainer =
        MatchExplainer::new(DebugConfig::development().with_trace_to_stderr(false));
    let GuessOutcome::Evaluated { trace: Some(trace), .. } = round.submit_guess("kitten toys", &explainer)
    else {
        panic!("expected a traced evaluation");
    };
    assert_eq!(trace.normalized_guess, "kitten toy");
    assert!(trace.matched());
}

// =============================================================================
// Sessions and Selection
// =============================================================================

#[test]
fn seeded_sessions_pick_the_same_puzzles() {
    let config = RuntimeConfig::new().with_seed(11);
    let mut first = Session::from_config(&config).unwrap();
    let mut second = Session::from_config(&config).unwrap();

    for _ in 0..10 {
        let a = first.start_new_round().unwrap().puzzle().id.clone();
        let b = second.start_new_round().unwrap().puzzle().id.clone();
        assert_eq!(a, b);
    }
}

#[test]
fn selector_never_repeats_when_alternatives_exist() {
    let collection = PuzzleCollection::builtin().unwrap();
    let mut selector = PuzzleSelector::with_seed(5);
    let mut previous = None;
    for _ in 0..50 {
        let picked = selector.pick(&collection, previous.as_ref()).unwrap().id.clone();
        assert_ne!(Some(&picked), previous.as_ref());
        previous = Some(picked);
    }
}

#[test]
fn session_from_missing_file_fails() {
    let config = RuntimeConfig::new().with_puzzles_path("/nonexistent/categuess/puzzles.json");
    assert!(Session::from_config(&config).is_err());
}

#[test]
fn give_up_ends_the_round() {
    let mut session = Session::from_config(&RuntimeConfig::new().with_seed(2)).unwrap();
    session.start_round_with(&PuzzleId::new("kitchen-utensils")).unwrap();
    session.give_up();

    let round = session.round().unwrap();
    assert_eq!(round.status(), GuessStatus::Lost);
    assert_eq!(round.visible_words().len(), 5);
    assert_eq!(session.guess("kitchen tools"), GuessOutcome::Ignored);
}
