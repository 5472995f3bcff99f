use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Scratch directory holding the session file for one test
struct CliTestEnvironment {
    temp_dir: TempDir,
}

impl CliTestEnvironment {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temporary directory"),
        }
    }

    fn session_path(&self) -> PathBuf {
        self.temp_dir.path().join("session.json")
    }

    /// `wayfare --no-color` bound to this environment's session file.
    ///
    /// XDG config points into the scratch directory so a user catalog never
    /// replaces the bundled one.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("wayfare").expect("Failed to find wayfare binary");
        cmd.env("XDG_CONFIG_HOME", self.temp_dir.path())
            .arg("--no-color")
            .arg("--session-file")
            .arg(self.session_path());
        cmd
    }

    fn run(&self, args: &[&str]) {
        self.cmd().args(args).assert().success();
    }
}

#[test]
fn test_cli_shows_default_configuration() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("# Trip configuration"))
        .stdout(predicate::str::contains("- Destination: Destination"))
        .stdout(predicate::str::contains("- Board type: Full Board (FB)"))
        .stdout(predicate::str::contains("- Hotel: not selected"));

    // Showing does not start a session file
    assert!(!env.session_path().exists());
}

#[test]
fn test_cli_complete_booking_flow() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args([
            "trip",
            "set",
            "--citizenship",
            "Azerbaijan",
            "--destination",
            "turkey",
            "--days",
            "2",
            "--start-date",
            "2026-10-16",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Updated citizenship, destination, trip_days, start_date.",
        ))
        .stdout(predicate::str::contains("- Day 2 (Sat 17 Oct 2026): lunch -, dinner -"));

    env.cmd()
        .args(["hotel", "select", "101"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Selected Hilton Istanbul (120 AZN / night).",
        ));

    env.run(&["meal", "set", "1", "lunch", "1001"]);
    env.run(&["meal", "set", "1", "dinner", "1101"]);
    env.cmd()
        .args(["meal", "set", "2", "lunch", "1002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 2 lunch: Pide."))
        .stdout(predicate::str::contains(
            "- Day 1 (Fri 16 Oct 2026): lunch Lentil Soup (10 AZN), dinner Iskender Kebab (15 AZN)",
        ));

    env.cmd()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Booking summary"))
        .stdout(predicate::str::contains("- Day total: 145 AZN"))
        .stdout(predicate::str::contains("- Day total: 132 AZN"))
        .stdout(predicate::str::contains("## Booking total: 277 AZN"));
}

#[test]
fn test_cli_trip_length_change_clears_meals() {
    let env = CliTestEnvironment::new();
    env.run(&["trip", "set", "--destination", "Italy", "--days", "2"]);
    env.run(&["hotel", "select", "301"]);
    env.run(&["meal", "set", "2", "dinner", "3101"]);

    env.cmd()
        .args(["trip", "set", "--days", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Hotel: Hotel Roma"))
        .stdout(predicate::str::contains("Osso Buco").not())
        .stdout(predicate::str::contains("- Day 3"));

    env.cmd()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Booking total: 420 AZN"));
}

#[test]
fn test_cli_summary_requires_hotel() {
    let env = CliTestEnvironment::new();
    env.run(&["trip", "set", "--destination", "UAE"]);

    env.cmd()
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "select a hotel before viewing the summary",
        ));
}

#[test]
fn test_cli_meals_locked_without_hotel_and_under_no_board() {
    let env = CliTestEnvironment::new();
    env.run(&["trip", "set", "--destination", "Turkey"]);

    env.cmd()
        .args(["meal", "set", "1", "lunch", "1001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("select a hotel first"));

    env.run(&["hotel", "select", "102"]);
    env.run(&["trip", "set", "--board", "nb"]);

    env.cmd()
        .args(["meal", "set", "1", "lunch", "1001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "meal selection is not available with No Board",
        ));

    env.cmd()
        .args(["trip", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Meals are not included with No Board (NB).",
        ));
}

#[test]
fn test_cli_half_board_requires_replace() {
    let env = CliTestEnvironment::new();
    env.run(&["trip", "set", "--destination", "Turkey", "--board", "hb"]);
    env.run(&["hotel", "select", "103"]);
    env.run(&["meal", "set", "1", "lunch", "1003"]);

    env.cmd()
        .args(["meal", "set", "1", "dinner", "1102"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("half board allows lunch or dinner"));

    env.cmd()
        .args(["meal", "set", "1", "dinner", "1102", "--replace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lunch -, dinner Grilled Sea Bass (22 AZN)"));
}

#[test]
fn test_cli_rejects_unknown_ids_and_days() {
    let env = CliTestEnvironment::new();
    env.run(&["trip", "set", "--destination", "Turkey"]);

    env.cmd()
        .args(["hotel", "select", "301"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no hotel with ID 301 in Turkey"));

    env.run(&["hotel", "select", "101"]);

    env.cmd()
        .args(["meal", "set", "1", "lunch", "1101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no lunch with ID 1101"));

    env.cmd()
        .args(["meal", "set", "4", "lunch", "1001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("day 4 is outside the 1-day trip"));

    env.cmd()
        .args(["trip", "set", "--days", "0"])
        .assert()
        .failure();

    env.cmd()
        .args(["trip", "set", "--days", "4294967295"])
        .assert()
        .failure();
    env.cmd()
        .args(["trip", "set", "--days", "366"])
        .assert()
        .failure();
    env.run(&["trip", "set", "--days", "365"]);
}

#[test]
fn test_cli_meal_clear() {
    let env = CliTestEnvironment::new();
    env.run(&["trip", "set", "--destination", "Turkey"]);
    env.run(&["hotel", "select", "101"]);
    env.run(&["meal", "set", "1", "dinner", "1103"]);

    env.cmd()
        .args(["meal", "clear", "1", "dinner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 1 dinner cleared."))
        .stdout(predicate::str::contains("lunch -, dinner -"));
}

#[test]
fn test_cli_unknown_destination_offers_nothing() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["trip", "set", "--destination", "Atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Atlantis is not in the catalog"));

    env.cmd()
        .args(["hotel", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No hotels available for this destination.",
        ));

    env.cmd()
        .args(["meal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No meals available for this destination.",
        ));
}

#[test]
fn test_cli_catalog_listings() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["catalog", "destinations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Turkey"))
        .stdout(predicate::str::contains("- UAE"))
        .stdout(predicate::str::contains("- Italy"));

    env.cmd()
        .args(["catalog", "boards"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- FB: Full Board (FB) (current)"))
        .stdout(predicate::str::contains("- NB: No Board (NB)"));

    env.run(&["trip", "set", "--destination", "Turkey"]);
    env.cmd()
        .args(["hotel", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Hotels in Turkey"))
        .stdout(predicate::str::contains("- 102. Antalya Resort - 95 AZN / night"));
}

#[test]
fn test_cli_custom_catalog_file() {
    let env = CliTestEnvironment::new();
    let catalog_path = env.temp_dir.path().join("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"{
            "currency": "EUR",
            "destinations": [{ "id": 1, "name": "Portugal" }],
            "hotels": { "Portugal": [{ "id": 7, "name": "Casa Lisboa", "price": 90 }] },
            "meals": { "Portugal": { "lunch": [{ "id": 70, "name": "Bacalhau", "price": 16 }] } }
        }"#,
    )
    .unwrap();
    let catalog_arg = catalog_path.to_str().unwrap();

    env.run(&[
        "--catalog-file",
        catalog_arg,
        "trip",
        "set",
        "--destination",
        "Portugal",
    ]);
    env.run(&["--catalog-file", catalog_arg, "hotel", "select", "7"]);
    env.run(&["--catalog-file", catalog_arg, "meal", "set", "1", "lunch", "70"]);

    env.cmd()
        .args(["--catalog-file", catalog_arg, "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Booking total: 106 EUR"));
}

#[test]
fn test_cli_reset_ends_session() {
    let env = CliTestEnvironment::new();
    env.run(&["trip", "set", "--destination", "Italy", "--days", "5"]);
    assert!(env.session_path().exists());

    env.cmd()
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session reset."))
        .stdout(predicate::str::contains("- Trip length: 1 day"));
    assert!(!env.session_path().exists());
}

#[test]
fn test_cli_broken_session_file_is_reported() {
    let env = CliTestEnvironment::new();
    std::fs::write(env.session_path(), "not a session").unwrap();

    env.cmd()
        .args(["trip", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read session file"));

    // Reset still recovers
    env.run(&["reset"]);
    env.run(&["trip", "show"]);
}
