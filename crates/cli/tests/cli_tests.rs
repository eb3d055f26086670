use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MOVIES_CSV: &str = "\
movie_id,movie_name,year,rating,votes,genre,director,star
tt1375666,Inception,2010,8.8,2400000,\"Action, Sci-Fi\",Christopher Nolan,\"Leonardo DiCaprio, Tom Hardy\"
tt5013056,Dunkirk,2017,7.8,700000,\"Action, Drama\",Christopher Nolan,Tom Hardy
tt1663202,The Revenant,2015,8.0,850000,Drama,Alejandro G. Inarritu,Leonardo DiCaprio
tt0113277,Heat,1995,8.3,640000,Crime,Michael Mann,Al Pacino
";

const AWARDS_CSV: &str = "\
Film,Category,CanonicalCategory,Year,Winner
Inception,Cinematography,CINEMATOGRAPHY,2010,True
The Revenant,Actor in a Leading Role,ACTOR IN A LEADING ROLE,2015,True
Heat,Best Picture,,1995,False
";

fn inputs() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("movies.csv"), MOVIES_CSV).unwrap();
    fs::write(dir.path().join("awards.csv"), AWARDS_CSV).unwrap();
    dir
}

fn filmiq(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("filmiq").unwrap();
    cmd.env_remove("FILMIQ_DEFAULT_YEAR_START")
        .env_remove("FILMIQ_DEFAULT_MIN_RATING")
        .arg("--movies")
        .arg(dir.path().join("movies.csv"))
        .arg("--awards")
        .arg(dir.path().join("awards.csv"));
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("filmiq").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Movie ratings and Oscar awards analytics"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("filmiq").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn overview_prints_json_summary() {
    let dir = inputs();
    let output = filmiq(&dir).arg("overview").output().unwrap();
    assert!(output.status.success());
    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["summary"]["movies"], 3);
    assert_eq!(page["summary"]["oscar_wins"], 2);
}

#[test]
fn overview_accepts_filter_flags() {
    let dir = inputs();
    filmiq(&dir)
        .args(["overview", "--year-min", "1990", "--genre", "Crime"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"genre\": \"Crime\""));
}

#[test]
fn search_and_movie_lookup() {
    let dir = inputs();
    filmiq(&dir)
        .args(["search", "REVENANT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tt1663202"));
    filmiq(&dir)
        .args(["movie", "tt1375666"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CINEMATOGRAPHY"));
    filmiq(&dir)
        .args(["movie", "tt0000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("movie not found"));
}

#[test]
fn directors_by_name_lists_movies() {
    let dir = inputs();
    filmiq(&dir)
        .args(["directors", "--name", "Christopher Nolan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dunkirk").and(predicate::str::contains("Inception")));
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("filmiq").unwrap();
    cmd.arg("--movies")
        .arg(dir.path().join("absent.csv"))
        .arg("--awards")
        .arg(dir.path().join("absent_awards.csv"))
        .arg("filters")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.csv"));
}
