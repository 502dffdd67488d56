use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_player(args: &[&str], input: &str) -> Output {
    let bin = env!("CARGO_BIN_EXE_gtp-test-player");
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("player should start");

    if let Some(mut stdin) = child.stdin.take() {
        // The player may already be gone (kill, fault) and have closed stdin.
        let _ = stdin.write_all(input.as_bytes());
    }
    child.wait_with_output().expect("player output")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn delayed_error_replaces_genmove_response() {
    let output = run_player(
        &[],
        "play b d4\nplay w q16\ngomill-delayed_error 3\ngenmove b\ngenmove w\n",
    );
    assert!(output.status.success(), "player failed: {:?}", output);
    assert_eq!(
        stdout_of(&output),
        "=\n\n=\n\n=\n\n? forced GTP error\n\n= pass\n\n"
    );
}

#[test]
fn protocol_commands_answer_with_ids() {
    let output = run_player(
        &[],
        "1 protocol_version\n2 name\n3 known_command gomill-force_error\n4 quit\n5 name\n",
    );
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "=1 2\n\n=2 GTP test player\n\n=3 true\n\n=4\n\n"
    );
}

#[test]
fn forced_exit_ends_session_after_response() {
    let output = run_player(&[], "gomill-force_error exit\nname\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "? forced GTP error; exiting\n\n");
}

#[test]
fn forced_protocol_error_writes_malformed_line() {
    let output = run_player(&[], "gomill-force_error protocol\nname\n");
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "!! forced ill-formed GTP response\n=\n\n= GTP test player\n\n"
    );
}

#[test]
fn forced_internal_error_crashes_the_process() {
    let output = run_player(&[], "name\ngomill-force_error internal\nname\n");
    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "= GTP test player\n\n");
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("attempt to divide by zero"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[cfg(unix)]
#[test]
fn forced_kill_ends_process_without_response() {
    use std::os::unix::process::ExitStatusExt;

    let output = run_player(&[], "name\ngomill-force_error kill\nname\n");
    assert_eq!(output.status.signal(), Some(9));
    assert_eq!(stdout_of(&output), "= GTP test player\n\n");
}

#[test]
fn fail_command_option_fails_that_command() {
    let output = run_player(&["--fail-command=genmove"], "genmove w\nplay b d4\n");
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "? forced to fail from command line\n\n=\n\n"
    );
}

#[test]
fn exit_uncleanly_leaves_quit_unanswered() {
    let output = run_player(&["--exit-uncleanly"], "name\nquit\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "= GTP test player\n\n");
}

#[test]
fn unknown_option_is_rejected_before_session() {
    let output = run_player(&["--unknownoption"], "name\n");
    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn chat_stderr_reports_move_count_at_each_genmove() {
    let output = run_player(&["--chat-stderr"], "genmove b\nplay w c3\ngenmove b\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "= pass\n\n=\n\n= pass\n\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("genmove: 0\n"), "stderr: {}", stderr);
    assert!(stderr.contains("genmove: 2\n"), "stderr: {}", stderr);
}

#[test]
fn move_limit_with_unclean_exit_closes_channel_at_genmove() {
    let output = run_player(
        &["--chat-stderr", "--move-limit=2", "--exit-uncleanly"],
        "genmove b\nplay w c3\ngenmove b\nname\n",
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "= pass\n\n=\n\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("genmove: 2\n"));
}

#[test]
fn move_limit_alone_ends_session_with_fatal_error() {
    let output = run_player(&["--move-limit=1"], "play b d4\ngenmove w\nname\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "=\n\n? move limit reached\n\n");
}

#[test]
fn fail_command_option_reaches_protocol_commands() {
    let output = run_player(&["--fail-command=quit"], "quit\nname\n");
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "? forced to fail from command line\n\n= GTP test player\n\n"
    );
}
