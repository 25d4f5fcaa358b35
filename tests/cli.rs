// End-to-end tests: drive the binary over a piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the CLI with a clean configuration.
fn slms() -> Command {
    let mut cmd = Command::cargo_bin("accessible-slms").unwrap();
    cmd.env_remove("ACCESSIBLE_SLMS_THEME")
        .env_remove("ACCESSIBLE_SLMS_FONT_SIZE")
        .env("ACCESSIBLE_SLMS_PLAIN", "1");
    cmd
}

#[test]
fn exit_choice_ends_cleanly() {
    slms()
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Home Page"))
        .stdout(predicate::str::contains("Enter your choice (1-4): "));
}

#[test]
fn end_of_input_ends_cleanly() {
    slms().write_stdin("").assert().success();
}

#[test]
fn toggling_screen_reader_shows_new_status() {
    slms()
        .write_stdin("1\n1\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Screen Reader Support: Disabled"))
        .stdout(predicate::str::contains("Accessibility settings updated."))
        .stdout(predicate::str::contains("Screen Reader Support: Enabled"));
}

#[test]
fn out_of_range_settings_choice_is_reported() {
    slms()
        .write_stdin("1\n6\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice."))
        .stdout(predicate::str::contains("Accessibility settings updated.").not());
}

#[test]
fn non_numeric_font_size_is_reprompted() {
    slms()
        .write_stdin("1\n4\nbig\n16\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a whole number."))
        .stdout(predicate::str::contains("Font Size: 16"));
}

#[test]
fn environment_seeds_initial_record() {
    slms()
        .env("ACCESSIBLE_SLMS_THEME", "Dark")
        .env("ACCESSIBLE_SLMS_FONT_SIZE", "20")
        .write_stdin("1\n2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: Dark"))
        .stdout(predicate::str::contains("Font Size: 20"))
        .stdout(predicate::str::contains("Magnifier: Enabled"));
}

#[test]
fn bad_configuration_fails_start_up() {
    slms()
        .env("ACCESSIBLE_SLMS_THEME", "Sepia")
        .write_stdin("4\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ACCESSIBLE_SLMS_THEME"));
}

#[test]
fn login_reports_success() {
    slms()
        .write_stdin("3\nsomeone@example.com\nhunter2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in successfully!"));
}
