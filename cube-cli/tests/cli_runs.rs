use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const GAMES: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

/// Runs `cubes` against a scratch input directory with an empty config file
fn cubes(dir: &TempDir, args: &[&str]) -> Output {
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();
    Command::new(env!("CARGO_BIN_EXE_cubes"))
        .arg("--config")
        .arg(&config)
        .arg("--input-dir")
        .arg(dir.path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn quiet_prints_answers_in_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("day02.txt"), GAMES).unwrap();

    let output = cubes(&dir, &["--day", "2", "--quiet"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "8\n2286\n");
}

#[test]
fn full_output_names_day_and_part() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("day01.txt"), "1abc2\npqr3stu8vwx\n").unwrap();

    let output = cubes(&dir, &["--day", "1", "--part", "1"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Day 01 Part 1: 50 ("), "{out}");
    assert!(out.contains("--- Summary ---"));
}

#[test]
fn capacity_override_changes_valid_sum() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("games.txt");
    fs::write(&input, GAMES).unwrap();

    let output = cubes(
        &dir,
        &[
            "--day",
            "2",
            "--part",
            "1",
            "--input",
            input.to_str().unwrap(),
            "--capacities",
            "red=20,blue=15",
            "--quiet",
        ],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "15\n");
}

#[test]
fn malformed_records_are_listed_and_fail() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("day02.txt"),
        "Game 1: 3 blue\nGame 2: 4 purple\nGame x: 1 red\n",
    )
    .unwrap();

    let output = cubes(&dir, &["--day", "2", "--error-policy", "collect-all"]);
    assert_eq!(output.status.code(), Some(1));
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Day 02: 2 malformed record(s)"), "{err}");
    assert!(err.contains("line 2: unknown color `purple`"), "{err}");
    assert!(err.contains("line 3:"), "{err}");
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = cubes(&dir, &["--day", "1", "--quiet"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Input for day 1 unavailable: missing input file"), "{err}");
    assert!(!err.contains("Parse error"), "{err}");
}
