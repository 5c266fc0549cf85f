//! Integration tests for CLI renderings.

use wordspin_cli::render::{modes_table, render_json, render_plain, render_table, segments_table};
use wordspin_core::{SpinWheel, generate_combinations};

fn pairs() -> Vec<String> {
    generate_combinations("A\nB\nC", "pairs").expect("three words make pairs")
}

#[test]
fn plain_output_is_one_combination_per_line() {
    insta::assert_snapshot!(render_plain(&pairs()), @r"
    A B
    A C
    B A
    B C
    C A
    C B
    ");
}

#[test]
fn json_output_is_an_array() {
    let json = render_json(&pairs()[..2]).expect("encode json");
    insta::assert_snapshot!(json, @r#"
    [
      "A B",
      "A C"
    ]
    "#);
}

#[test]
fn table_numbers_every_combination() {
    let rendered = render_table(&pairs()).to_string();
    assert!(rendered.contains("Combination"));
    assert!(rendered.contains("C B"));
    assert_eq!(rendered.lines().filter(|line| line.contains(" B ")).count(), 4);
}

#[test]
fn modes_table_lists_worst_case_sizes() {
    let rendered = modes_table().to_string();
    for mode in ["pairs", "triplets", "quads", "quints", "all"] {
        assert!(rendered.contains(mode), "missing {mode}");
    }
    assert!(rendered.contains("95040"));
    assert!(rendered.contains("108372"));
}

#[test]
fn segments_table_shows_wheel_layout() {
    let wheel = SpinWheel::seeded(1);
    wheel.set_candidates(["red", "green", "blue", "gold"]);
    let rendered = segments_table(&wheel.segments(), Some(2)).to_string();
    assert!(rendered.contains("180.0-270.0"));
    assert!(rendered.contains("blue"));
}
