use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_shell(cwd: &std::path::Path, input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pep8sh"))
        .arg("--plain")
        .current_dir(cwd)
        .env_remove("PEP8SH_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn pep8sh");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().expect("wait for pep8sh")
}

#[test]
fn cd_then_exit_halts_without_another_prompt() {
    let start = tempfile::tempdir().unwrap();
    let target = tempfile::tempdir().unwrap();
    let target_dir = fs::canonicalize(target.path()).unwrap();

    let input = format!("cd {}\nexit\nhelp\n", target_dir.display());
    let output = run_shell(start.path(), &input);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("$ ").count(), 2);
    assert!(stdout.ends_with(&format!(":{}$ ", target_dir.display())));
    assert!(!stdout.contains("The following are builtins:"));
    assert_eq!(String::from_utf8(output.stderr).unwrap(), "");
}

#[test]
fn child_runs_in_directory_set_by_cd() {
    let start = tempfile::tempdir().unwrap();
    let target = tempfile::tempdir().unwrap();
    let target_dir = fs::canonicalize(target.path()).unwrap();

    let input = format!("cd {}\ntouch created-here\nexit\n", target_dir.display());
    let output = run_shell(start.path(), &input);

    assert!(output.status.success());
    assert!(target_dir.join("created-here").exists());
    assert!(!start.path().join("created-here").exists());
}

#[test]
fn errors_do_not_stop_the_shell() {
    let start = tempfile::tempdir().unwrap();
    let long = format!("echo {}", "x".repeat(80));
    let input = format!("{long}\ncd\npep8sh-no-such-program arg1\nhelp\n");

    let output = run_shell(start.path(), &input);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let mut lines = stderr.lines();
    assert_eq!(
        lines.next(),
        Some("OMFG, you are violating the PEP8! No more than 79 chars, please!")
    );
    assert_eq!(lines.next(), Some("pep8sh: expected argument to \"cd\""));
    assert!(lines.next().unwrap().starts_with("pep8sh: pep8sh-no-such-program: "));
    assert!(stdout.contains("The following are builtins:\n  cd\n  help\n  exit\n"));
    assert!(!stdout.contains(&"x".repeat(80)));
}
