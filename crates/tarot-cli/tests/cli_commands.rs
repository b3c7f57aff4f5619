//! Integration tests for the tarot CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DESC: &str = "\
Major Arcana
The N00b (0)
Upright: fresh starts
Reversed: copy-paste from forums
Yes or No: Yes

Caffeine Overflow (I)
Upright: boundless energy
Reversed: jitters
Yes or No: Maybe

Minor Arcana
Suit of Linux
Ace of Linux
Upright: root access
Reversed: permission denied
Yes or No: Yes

Two of Linux
Upright: pipes working together
Reversed: broken pipe
Yes or No: No

Suit of Docker
Ace of Docker
Upright: a clean image
Reversed: dangling layers
Yes or No: Yes

Ace of Kubernetes
Upright: orchestration
Reversed: crash loop
Yes or No: No
";

/// Create a temp directory with a description file and an image tree.
fn test_sources() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("desc"), DESC).unwrap();
    for (sub, files) in [
        ("Major", &["the_noob.png", "caffine_overflow.png"][..]),
        ("Linux", &["ace_of_linux.png", "2_of_linux.png"][..]),
        ("Docker", &["ace_of_docker.png"][..]),
    ] {
        let path = dir.path().join("card_images").join(sub);
        fs::create_dir_all(&path).unwrap();
        for file in files {
            fs::write(path.join(file), b"").unwrap();
        }
    }
    dir
}

fn tarot() -> Command {
    let mut cmd = Command::cargo_bin("tarot").unwrap();
    cmd.env_remove("TAROT_DECK_PATH").env_remove("RUST_LOG");
    cmd
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

/// Compile the test sources and return the deck path.
fn compiled_deck(dir: &TempDir) -> PathBuf {
    let output = dir.path().join("tarot_deck.json");
    tarot()
        .args([
            "compile",
            "--desc",
            arg(&dir.path().join("desc")),
            "--images",
            arg(&dir.path().join("card_images")),
            "--output",
            arg(&output),
        ])
        .assert()
        .success();
    output
}

fn write_small_deck(dir: &TempDir, names: &[&str]) -> PathBuf {
    let cards: Vec<_> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "description": {"upright": "u", "reversed": "r", "yes_or_no": "y"},
                "image": null
            })
        })
        .collect();
    let deck = serde_json::json!({"major_arcana": cards, "minor_arcana": {}});
    let path = dir.path().join("small.json");
    fs::write(&path, deck.to_string()).unwrap();
    path
}

// ---------------------------------------------------------------------------
// compile / check
// ---------------------------------------------------------------------------

#[test]
fn compile_writes_deck_and_reports_counts() {
    let dir = test_sources();
    let output = dir.path().join("tarot_deck.json");
    tarot()
        .args([
            "compile",
            "--desc",
            arg(&dir.path().join("desc")),
            "--images",
            arg(&dir.path().join("card_images")),
            "-o",
            arg(&output),
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("5 cards from 6 records")
                .and(predicate::str::contains("Major Arcana: 2 cards"))
                .and(predicate::str::contains("Linux: 2 cards"))
                .and(predicate::str::contains("Docker: 1 cards"))
                .and(predicate::str::contains("Dropped, no suit: Ace of Kubernetes")),
        )
        .stderr(predicate::str::contains("no recognisable suit"));

    let deck: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(deck["major_arcana"].as_array().unwrap().len(), 2);
    assert_eq!(
        deck["major_arcana"][1]["image"],
        "card_images/Major/caffine_overflow.png"
    );
    assert_eq!(
        deck["minor_arcana"]["Linux"][1]["image"],
        "card_images/Linux/2_of_linux.png"
    );
    assert_eq!(
        deck["minor_arcana"]["FreeSWITCH Developers"]
            .as_array()
            .unwrap()
            .len(),
        0
    );
}

#[test]
fn compile_is_deterministic() {
    let dir = test_sources();
    let first = fs::read(compiled_deck(&dir)).unwrap();
    let second = fs::read(compiled_deck(&dir)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn compile_fails_without_description() {
    let dir = TempDir::new().unwrap();
    tarot()
        .args(["compile", "--desc", arg(&dir.path().join("missing"))])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot access"));
}

#[test]
fn check_does_not_write() {
    let dir = test_sources();
    tarot()
        .args([
            "check",
            "--desc",
            arg(&dir.path().join("desc")),
            "--images",
            arg(&dir.path().join("card_images")),
        ])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("warnings"));
    assert!(!dir.path().join("tarot_deck.json").exists());
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_text_narrates_three_positions() {
    let dir = test_sources();
    let deck = compiled_deck(&dir);
    tarot()
        .args(["draw", "--deck", arg(&deck)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("I have drawn three cards for you:")
                .and(predicate::str::contains("PAST - "))
                .and(predicate::str::contains("PRESENT - "))
                .and(predicate::str::contains("FUTURE - "))
                .and(predicate::str::contains("Yes/No: ")),
        );
}

#[test]
fn draw_json_matches_deck() {
    let dir = test_sources();
    let deck_path = compiled_deck(&dir);
    let deck: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&deck_path).unwrap()).unwrap();

    let out = tarot()
        .args(["draw", "--deck", arg(&deck_path), "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let payload: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();

    let mut names = Vec::new();
    for position in ["past", "present", "future"] {
        let view = &payload[position];
        let name = view["name"].as_str().unwrap();
        names.push(name.to_string());

        let (source, suit) = find_card(&deck, name);
        let text = if view["reversed"].as_bool().unwrap() {
            &source["description"]["reversed"]
        } else {
            &source["description"]["upright"]
        };
        assert_eq!(&view["meaning"], text);
        assert_eq!(view["yes_or_no"], source["description"]["yes_or_no"]);
        assert_eq!(view["image"], source["image"]);
        match suit {
            Some(suit) => {
                assert_eq!(view["arcana"], "minor");
                assert_eq!(view["suit"], suit.as_str());
            }
            None => {
                assert_eq!(view["arcana"], "major");
                assert!(view.get("suit").is_none());
            }
        }
    }
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 3);
}

fn find_card<'a>(deck: &'a serde_json::Value, name: &str) -> (&'a serde_json::Value, Option<String>) {
    if let Some(card) = deck["major_arcana"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == name)
    {
        return (card, None);
    }
    for (suit, cards) in deck["minor_arcana"].as_object().unwrap() {
        if let Some(card) = cards.as_array().unwrap().iter().find(|c| c["name"] == name) {
            return (card, Some(suit.clone()));
        }
    }
    panic!("card {name} not in deck");
}

#[test]
fn draw_event_wraps_payload() {
    let dir = test_sources();
    let deck = compiled_deck(&dir);
    tarot()
        .args(["draw", "-d", arg(&deck), "-f", "event"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"type\": \"show_tarot_cards\"")
                .and(predicate::str::contains("\"reading\"")),
        );
}

#[test]
fn draw_with_three_cards_uses_them_all() {
    let dir = TempDir::new().unwrap();
    let deck = write_small_deck(&dir, &["Code Review", "Feature Creep", "Mysterious Bug"]);
    tarot()
        .args(["draw", "--deck", arg(&deck)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Code Review")
                .and(predicate::str::contains("Feature Creep"))
                .and(predicate::str::contains("Mysterious Bug")),
        );
}

#[test]
fn draw_verbose_logs_deck_search() {
    let dir = TempDir::new().unwrap();
    let deck = write_small_deck(&dir, &["Code Review", "Feature Creep", "Mysterious Bug"]);
    tarot()
        .args(["-v", "draw", "--deck", arg(&deck)])
        .assert()
        .success()
        .stderr(
            predicate::str::contains("searching for deck")
                .and(predicate::str::contains("drawing from deck")),
        );
}

#[test]
fn draw_fails_on_insufficient_deck() {
    let dir = TempDir::new().unwrap();
    let deck = write_small_deck(&dir, &["Code Review", "Feature Creep"]);
    tarot()
        .args(["draw", "--deck", arg(&deck)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deck has 2 cards, a reading needs 3"));
}

#[test]
fn draw_without_any_deck_degrades_then_fails() {
    let dir = TempDir::new().unwrap();
    tarot()
        .arg("draw")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("continuing with an empty deck")
                .and(predicate::str::contains("deck has 0 cards")),
        );
}

#[test]
fn draw_finds_deck_through_env() {
    let dir = TempDir::new().unwrap();
    let deck = write_small_deck(&dir, &["Code Review", "Feature Creep", "Mysterious Bug"]);
    let elsewhere = TempDir::new().unwrap();
    tarot()
        .arg("draw")
        .env("TAROT_DECK_PATH", &deck)
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mysterious Bug"));
}

#[test]
fn draw_with_missing_explicit_deck_fails() {
    let dir = TempDir::new().unwrap();
    tarot()
        .args(["draw", "--deck", arg(&dir.path().join("nope.json"))])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deck file not found"));
}

// ---------------------------------------------------------------------------
// deck / show
// ---------------------------------------------------------------------------

#[test]
fn deck_lists_cards() {
    let dir = test_sources();
    let deck = compiled_deck(&dir);
    tarot()
        .args(["deck", "--deck", arg(&deck)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The N00b (0)")
                .and(predicate::str::contains("Ace of Docker"))
                .and(predicate::str::contains("5 cards")),
        );
}

#[test]
fn deck_filters_by_suit() {
    let dir = test_sources();
    let deck = compiled_deck(&dir);
    tarot()
        .args(["deck", "--deck", arg(&deck), "--suit", "linux"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Two of Linux")
                .and(predicate::str::contains("Ace of Docker").not())
                .and(predicate::str::contains("2 cards")),
        );
}

#[test]
fn deck_rejects_unknown_suit() {
    let dir = test_sources();
    let deck = compiled_deck(&dir);
    tarot()
        .args(["deck", "--deck", arg(&deck), "--suit", "wands"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown suit"));
}

#[test]
fn show_card_details() {
    let dir = test_sources();
    let deck = compiled_deck(&dir);
    tarot()
        .args(["show", "caffeine overflow (i)", "--deck", arg(&deck)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Caffeine Overflow (I)")
                .and(predicate::str::contains("boundless energy"))
                .and(predicate::str::contains("caffine_overflow.png")),
        );
}

#[test]
fn show_unknown_card_suggests() {
    let dir = test_sources();
    let deck = compiled_deck(&dir);
    tarot()
        .args(["show", "linux", "--deck", arg(&deck)])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("card not found")
                .and(predicate::str::contains("Did you mean")),
        );
}
