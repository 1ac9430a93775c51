//! CLI tests for the `listings` binary.
//!
//! Spawns the binary in a temp working directory holding a listing export and
//! verifies exit codes and the printed report.

use std::process::{Command, Output};

use listings::core::listing::Listing;
use listings::exit_codes;
use listings::test_support::{ListingDir, listing};

fn run_listings(dir: &ListingDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_listings"))
        .current_dir(dir.path())
        .args(args)
        .output()
        .expect("run listings")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf8 stderr")
}

fn addressed(id: &str, state: &str, price: f64, square_feet: f64, baths: f64) -> Listing {
    let mut item = listing(id, state, price, square_feet, baths);
    item.street = format!("{id} Main St");
    item.locality = "Austin".to_string();
    item.postal_code = "90001".to_string();
    item.beds = 3;
    item
}

#[test]
fn prints_sorted_results_and_averages() {
    let dir = ListingDir::with_listings(&[
        addressed("big", "CA", 300_000.0, 3000.0, 3.0),
        addressed("other-state", "FL", 900_000.0, 500.0, 5.0),
        addressed("small", "CA", 100_000.0, 1000.0, 2.0),
        addressed("few-baths", "CA", 50_000.0, 400.0, 1.0),
    ])
    .expect("fixture");

    let output = run_listings(&dir, &["CA", "2"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let expected = r#"RESULTS:
[
  {
    "id": "small",
    "addressLine1": "small Main St",
    "addressLine2": "Austin, CA 90001",
    "price": 100000,
    "squareFeet": 1000,
    "beds": 3,
    "baths": 2
  },
  {
    "id": "big",
    "addressLine1": "big Main St",
    "addressLine2": "Austin, CA 90001",
    "price": 300000,
    "squareFeet": 3000,
    "beds": 3,
    "baths": 3
  }
]
Average Price: $200,000.00
Average Price per sqft: $50.00
"#;
    assert_eq!(stdout(&output), expected);
}

#[test]
fn no_matches_prints_zero_averages() {
    let dir =
        ListingDir::with_listings(&[addressed("fl", "FL", 1.0, 1.0, 9.0)]).expect("fixture");

    let output = run_listings(&dir, &["CA", "0"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout(&output),
        "RESULTS:\n[]\nAverage Price: $0.00\nAverage Price per sqft: $0.00\n"
    );
}

#[test]
fn empty_array_is_not_an_error() {
    let dir = ListingDir::with_raw("[]\n").expect("fixture");

    let output = run_listings(&dir, &["NY", "1"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).starts_with("RESULTS:\n[]\n"));
}

#[test]
fn invalid_state_exits_invalid_without_reading_input() {
    // No export in the directory: a read attempt would fail differently.
    let dir = ListingDir::with_raw("").expect("fixture");
    std::fs::remove_file(dir.input_path()).expect("remove export");

    let output = run_listings(&dir, &["TX", "2"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("stateAbbreviation must be one of: CA, FL, NY"));
}

#[test]
fn non_numeric_baths_exits_invalid() {
    let dir = ListingDir::with_listings(&[]).expect("fixture");

    let output = run_listings(&dir, &["CA", "abc"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stderr(&output).contains("minBaths must be a number"));
}

#[test]
fn unknown_flag_exits_invalid() {
    let dir = ListingDir::with_listings(&[]).expect("fixture");

    let output = run_listings(&dir, &["CA", "2", "--bogus"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_export_exits_with_input_code() {
    let dir = ListingDir::with_raw("").expect("fixture");
    std::fs::remove_file(dir.input_path()).expect("remove export");

    let output = run_listings(&dir, &["CA", "2"]);
    assert_eq!(output.status.code(), Some(exit_codes::INPUT));
    assert!(stderr(&output).contains("property_listings.json"));
}

#[test]
fn malformed_line_exits_with_input_code() {
    let dir = ListingDir::with_raw("[{\"id\": oops},\n]\n").expect("fixture");

    let output = run_listings(&dir, &["CA", "2"]);
    assert_eq!(output.status.code(), Some(exit_codes::INPUT));
    assert!(stderr(&output).contains("line 1"));
}

#[test]
fn config_file_changes_allowed_states_and_input() {
    let dir = ListingDir::with_listings(&[]).expect("fixture");
    let export = ListingDir::with_listings(&[addressed("wa", "WA", 400_000.0, 2000.0, 2.0)])
        .expect("export");
    dir.write_config(&format!(
        "input_path = {:?}\nallowed_states = [\"WA\"]\n",
        export.input_path().display().to_string()
    ))
    .expect("config");

    let output = run_listings(&dir, &["WA", "1"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert!(text.contains("\"id\": \"wa\""));
    assert!(text.contains("Average Price: $400,000.00"));
    assert!(text.ends_with("Average Price per sqft: $200.00\n"));

    let output = run_listings(&dir, &["CA", "1"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn input_flag_overrides_default_export() {
    let dir = ListingDir::with_listings(&[]).expect("fixture");
    let other = ListingDir::with_listings(&[addressed("ny", "NY", 10.0, 5.0, 1.0)])
        .expect("other");
    let input = other.input_path().display().to_string();

    let output = run_listings(&dir, &["NY", "1", "--input", &input]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).contains("\"id\": \"ny\""));
}
