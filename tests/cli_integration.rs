//! CLI integration tests for litcal
//!
//! These tests run the binary against a small feed for 2024, covering the
//! workflow from import through the calendar views.

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const FEED_2024: &str = "BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//test//litcal//PL\r
BEGIN:VEVENT\r
DTSTART;VALUE=DATE:20240101\r
SUMMARY:[U]⚪ Świętej Bożej Rodzicielki Maryi\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTART;VALUE=DATE:20240107\r
SUMMARY:[Ś]⚪ Chrzest Pański\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTART;VALUE=DATE:20240203\r
SUMMARY:[w]🔴 Św. Błażeja\\, biskupa i \r
  męczennika\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTART;VALUE=DATE:20240214\r
SUMMARY:🟣 Środa Popielcowa\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTART;VALUE=DATE:20240328\r
SUMMARY:[U]⚪ Wielki Czwartek: Wieczerzy Pańskiej\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTART;VALUE=DATE:20240331\r
SUMMARY:[U]⚪ Niedziela Zmartwychwstania Pańskiego\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTART;VALUE=DATE:20240519\r
SUMMARY:[U]🔴 Niedziela Zesłania Ducha Świętego\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTART;VALUE=DATE:2024-06-01\r
SUMMARY:[W]🔴 Zła data\r
END:VEVENT\r
BEGIN:VEVENT\r
DTSTART;VALUE=DATE:20241225\r
SUMMARY:[U]⚪ Narodzenie Pańskie\r
END:VEVENT\r
END:VCALENDAR\r
";

/// Temporary config and data directory for one test
struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn write_feed(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("feed.ics");
        fs::write(&path, content).unwrap();
        path
    }

    /// Get a command instance for the litcal binary
    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("litcal"));
        cmd.env_remove("RUST_LOG")
            .env_remove("LITCAL_DATA_DIR")
            .env_remove("LITCAL_CONFIG")
            .arg("--config")
            .arg(self.config_path())
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }

    fn import(&self, extra: &[&str]) {
        let feed = self.write_feed(FEED_2024);
        self.cmd().arg("import").arg(&feed).args(extra).assert().success();
    }
}

// =============================================================================
// Feed Tests
// =============================================================================

#[test]
fn test_import_stores_year() {
    let env = Env::new();
    let feed = env.write_feed(FEED_2024);

    env.cmd()
        .arg("import")
        .arg(&feed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 year(s)"));

    assert!(env.data_dir().join("2024.jsonl").is_file());
}

#[test]
fn test_normalize_prints_events() {
    let env = Env::new();
    let feed = env.write_feed(FEED_2024);

    let output = env
        .cmd()
        .args(["--format", "json", "normalize"])
        .arg(&feed)
        .output()
        .unwrap();
    assert!(output.status.success());

    let events: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let events = events.as_array().unwrap();
    // The block with a malformed date is skipped
    assert_eq!(events.len(), 8);

    let baptism = &events[1];
    assert_eq!(baptism["name"], "Niedziela Chrztu Pańskiego");
    assert_eq!(baptism["date"], "07-01-2024");
    assert_eq!(baptism["rank"], "feast");

    let blaise = &events[2];
    assert_eq!(blaise["name"], "Św. Błażeja, biskupa i męczennika");
    assert_eq!(blaise["rank"], "optional_memorial");
    assert_eq!(blaise["color"], "red");

    // Nothing is stored
    assert!(!env.data_dir().exists());
}

#[test]
fn test_import_missing_file_fails() {
    let env = Env::new();

    env.cmd()
        .args(["import", "does-not-exist.ics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to read feed"));
}

#[test]
fn test_import_empty_feed_fails() {
    let env = Env::new();
    let feed = env.write_feed("BEGIN:VCALENDAR\nEND:VCALENDAR\n");

    env.cmd()
        .arg("import")
        .arg(&feed)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Feed contains no events"));
}

// =============================================================================
// Store Tests
// =============================================================================

#[test]
fn test_years_lists_imported_years() {
    let env = Env::new();

    env.cmd()
        .arg("years")
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored years."));

    env.import(&[]);

    env.cmd()
        .args(["years", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{\"years\":[2024]}"));
}

#[test]
fn test_clear_removes_years() {
    let env = Env::new();
    env.import(&[]);

    env.cmd()
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 stored year(s)"));

    assert!(!env.data_dir().join("2024.jsonl").exists());
}

// =============================================================================
// Calendar Tests
// =============================================================================

#[test]
fn test_map_json() {
    let env = Env::new();
    env.import(&[]);

    let output = env.cmd().args(["map", "2024", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let map: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(map["boundaries"]["easter_sunday"], "2024-03-31");
    assert_eq!(map["boundaries"]["first_sunday_of_advent"], "2023-12-03");

    let days = map["days"].as_array().unwrap();
    assert_eq!(days.len(), 366);
    assert_eq!(days[0]["season"], "christmas_time");
    // 2024-06-10
    assert_eq!(days[161]["date"], "2024-06-10");
    assert_eq!(days[161]["season"], "ordinary_time_part2");
    assert_eq!(days[161]["week"], 13);
}

#[test]
fn test_map_uses_configured_week_numbering() {
    let env = Env::new();
    fs::write(
        env.config_path(),
        "[calendar]\nordinary_time_weeks = \"advent_countdown\"\n",
    )
    .unwrap();
    env.import(&[]);

    let output = env.cmd().args(["map", "2024", "--format", "json"]).output().unwrap();
    let map: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(map["days"][161]["week"], 10);
}

#[test]
fn test_map_without_data_fails() {
    let env = Env::new();

    env.cmd()
        .args(["map", "2030"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data for 2030"));
}

#[test]
fn test_day_shows_synthesized_weekday() {
    let env = Env::new();
    env.import(&[]);

    env.cmd()
        .args(["day", "2024-02-28"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Season: lent 3"))
        .stdout(predicate::str::contains("3 Środa Wielkiego Postu"))
        .stdout(predicate::str::contains("purple"));
}

#[test]
fn test_day_marks_dominant_event() {
    let env = Env::new();
    env.import(&[]);

    env.cmd()
        .args(["day", "2024-02-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "* optional_memorial",
        ))
        .stdout(predicate::str::contains("4 Sobota Okresu Zwykłego"));
}

#[test]
fn test_day_json() {
    let env = Env::new();
    env.import(&[]);

    let output = env.cmd().args(["day", "2024-12-25", "-f", "json"]).output().unwrap();
    let day: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(
        day["dominant"]["name"],
        "25 grudnia - Uroczystość Narodzenia Pańskiego"
    );
    assert_eq!(day["context"]["season"], "advent");
    assert_eq!(day["context"]["week"], 4);
    assert_eq!(day["cycle"], "C, 2");
}

#[test]
fn test_month_reports_cycle() {
    let env = Env::new();
    env.import(&[]);

    env.cmd()
        .args(["month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03  (cycle B, 2)"))
        .stdout(predicate::str::contains("Niedziela Zmartwychwstania Pańskiego"));
}

#[test]
fn test_month_rejects_bad_argument() {
    let env = Env::new();

    env.cmd().args(["month", "2024-13"]).assert().failure();
}

#[test]
fn test_augment_is_idempotent() {
    let env = Env::new();
    env.import(&["--no-augment"]);

    let stored = fs::read_to_string(env.data_dir().join("2024.jsonl")).unwrap();
    assert_eq!(stored.lines().count(), 8);

    env.cmd()
        .args(["augment", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added").and(predicate::str::contains("Added 0").not()));

    env.cmd()
        .args(["augment", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 0 weekday event(s)"));
}

#[test]
fn test_default_format_from_config() {
    let env = Env::new();
    fs::write(env.config_path(), "default_format = \"json\"\n").unwrap();

    env.cmd()
        .arg("years")
        .assert()
        .success()
        .stdout(predicate::str::contains("{\"years\":[]}"));
}
