//! End-to-end session tests: scripted text input through the line prompt,
//! captured console output through the view.

use std::io::Cursor;

use cli_guess::core::{FixedTarget, GameState};
use cli_guess::engine::{Session, SessionEnd};
use cli_guess::input::LinePrompt;
use cli_guess::term::ConsoleView;
use cli_guess::types::{AttemptBudget, Status};

fn run_scripted(
    input: &str,
    target: i64,
    budget: AttemptBudget,
) -> (SessionEnd, GameState, String) {
    let mut game = GameState::new(1, 10, budget, &mut FixedTarget(target)).unwrap();

    let source = LinePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 1, 10);
    let sink = ConsoleView::new(Vec::new()).with_color(false);

    let mut session = Session::new(source, sink);
    let end = session.run(&mut game).unwrap();
    let output = String::from_utf8(session.into_sink().into_writer()).unwrap();

    (end, game, output)
}

#[test]
fn test_full_session_win() {
    let (end, game, output) = run_scripted("9\n3\n7\n", 7, AttemptBudget::Unbounded);

    assert_eq!(end, SessionEnd::Won { attempts: 3 });
    assert_eq!(game.status(), Status::Won);
    assert!(output.contains("Too high"));
    assert!(output.contains("Too low"));
    assert!(output.contains("You're the winner"));
}

#[test]
fn test_full_session_exhausted() {
    let (end, game, output) = run_scripted("1\n2\n3\n4\n", 7, AttemptBudget::Limited(4));

    assert_eq!(
        end,
        SessionEnd::Exhausted {
            target: 7,
            attempts: 5
        }
    );
    assert_eq!(game.status(), Status::LostExhausted);
    assert!(output.contains("Game Over: Too many guesses!"));
    assert!(output.contains("Random number was:  7"));
}

#[test]
fn test_exhausted_session_never_prompts_a_fifth_time() {
    // Even with a correct fifth line available, it is never read: the
    // budget check fires before prompting.
    let (end, game, _) = run_scripted("1\n2\n3\n4\n7\n", 7, AttemptBudget::Limited(4));

    assert!(matches!(end, SessionEnd::Exhausted { .. }));
    assert_eq!(game.status(), Status::LostExhausted);
}

#[test]
fn test_invalid_input_reprompts_instead_of_terminating() {
    let (end, game, output) = run_scripted("seven\n7\n", 7, AttemptBudget::Limited(4));

    assert_eq!(end, SessionEnd::Won { attempts: 1 });
    // The unparseable line consumed no attempt.
    assert_eq!(game.attempts_used(), 1);
    assert!(output.contains("You're the winner"));
}

#[test]
fn test_quit_mid_session() {
    let (end, game, output) = run_scripted("9\nq\n", 7, AttemptBudget::Unbounded);

    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(game.status(), Status::InProgress);
    assert_eq!(game.attempts_used(), 1);
    assert!(output.contains("Quitting after 1 attempts"));
}

#[test]
fn test_eof_quits_cleanly() {
    let (end, game, _) = run_scripted("", 7, AttemptBudget::Limited(4));

    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(game.attempts_used(), 0);
}

#[test]
fn test_banner_rendered_once() {
    let (_, _, output) = run_scripted("7\n", 7, AttemptBudget::Limited(4));

    assert_eq!(
        output.matches("guess that number").count(),
        1,
        "banner should appear exactly once"
    );
    assert!(output.contains("You have 4 guesses."));
}
