//! Shell session tests
//!
//! Runs whole sessions against in-memory input and compares the transcript.

use std::io::Cursor;

use kitchen::config::ShellConfig;
use kitchen::shell::Shell;
use rstest::rstest;

// =============================================================================
// Test helpers
// =============================================================================

const PROMPT: &str = "Please enter your order, or enter 'exit' to exit.\n";

fn run_session(shell: &Shell, input: &str) -> String {
    let mut output = Vec::new();
    shell.run(Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn default_shell() -> Shell {
    Shell::new(ShellConfig::default())
}

// =============================================================================
// Sessions
// =============================================================================

#[rstest]
fn test_exit_immediately() {
    let transcript = run_session(&default_shell(), "exit\n");

    assert_eq!(
        transcript,
        format!("Welcome to Joey's Kitchen.\n{PROMPT}Thank you for visiting Joey's Kitchen!\n")
    );
}

#[rstest]
fn test_session_with_orders() {
    let transcript = run_session(
        &default_shell(),
        "morning, 1, 2, 3\nmorning, 1, 2, 3, 4\nExit\n",
    );

    let expected = [
        "Welcome to Joey's Kitchen.\n",
        PROMPT,
        "eggs, toast, coffee\n\n",
        PROMPT,
        "eggs, toast, coffee, error\n",
        "The dish type 'Desert' specified does not apply to 'morning' meals.\n\n",
        PROMPT,
        "Thank you for visiting Joey's Kitchen!\n",
    ]
    .concat();
    assert_eq!(transcript, expected);
}

#[rstest]
fn test_end_of_input_ends_session() {
    let transcript = run_session(&default_shell(), "night, 2, 2");

    let expected = [
        "Welcome to Joey's Kitchen.\n",
        PROMPT,
        "potato(2x)\n\n",
        PROMPT,
        "Thank you for visiting Joey's Kitchen!\n",
    ]
    .concat();
    assert_eq!(transcript, expected);
}

#[rstest]
fn test_lines_after_exit_are_ignored() {
    let transcript = run_session(&default_shell(), "exit\nnight, 1\n");

    assert!(!transcript.contains("steak"));
}

#[rstest]
fn test_custom_name_and_exit_keyword() {
    let shell = Shell::new(ShellConfig::new("Night Owl Diner", "quit").unwrap());

    let transcript = run_session(&shell, "exit\nquit\n");

    let expected = [
        "Welcome to Night Owl Diner.\n",
        "Please enter your order, or enter 'quit' to exit.\n",
        "\n",
        "Invalid meal time. Please input 'morning' or 'night'.\n\n",
        "Please enter your order, or enter 'quit' to exit.\n",
        "Thank you for visiting Night Owl Diner!\n",
    ]
    .concat();
    assert_eq!(transcript, expected);
}
