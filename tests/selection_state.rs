use findash::SelectionState;
use findash::selection::{DEFAULT_COUNTRY, Transition};

fn picks(groups: &[&[&str]]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|g| g.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn starts_with_default_country() {
    let s = SelectionState::default();
    assert_eq!(s.countries(), [DEFAULT_COUNTRY]);
    assert_eq!(s.reset_counter(), 0);
}

#[test]
fn accumulation_is_a_union_in_first_seen_order() {
    let s = SelectionState::default();
    let (s, t) = s.apply(&picks(&[&["Morocco"], &["China", "Morocco"]]), None);
    assert_eq!(t, Transition::Accumulated { added: 2 });
    let (s, t) = s.apply(&picks(&[&["Morocco", DEFAULT_COUNTRY]]), None);
    assert_eq!(t, Transition::Accumulated { added: 0 });
    assert_eq!(s.countries(), [DEFAULT_COUNTRY, "Morocco", "China"]);
}

#[test]
fn greater_reset_signal_clears_and_ignores_picks() {
    let s = SelectionState::new(["Peru", "Chad"]);
    let (s, t) = s.apply(&picks(&[&["Morocco"]]), Some(1));
    assert_eq!(t, Transition::Reset { counter: 1 });
    assert!(s.is_empty());
    assert_eq!(s.reset_counter(), 1);
}

#[test]
fn reset_signal_not_above_counter_accumulates() {
    let (s, _) = SelectionState::default().apply(&[], Some(3));
    assert_eq!(s.reset_counter(), 3);

    // equal counter: treated as no reset
    let (s, t) = s.apply(&picks(&[&["Peru"]]), Some(3));
    assert_eq!(t, Transition::Accumulated { added: 1 });
    assert_eq!(s.countries(), ["Peru"]);

    // smaller counter: no effect on the counter either
    let (s, _) = s.apply(&picks(&[&["Chad"]]), Some(2));
    assert_eq!(s.countries(), ["Peru", "Chad"]);
    assert_eq!(s.reset_counter(), 3);
}

#[test]
fn apply_leaves_the_input_state_untouched() {
    let s = SelectionState::default();
    let (next, _) = s.apply(&picks(&[&["Peru"]]), None);
    assert_eq!(s, SelectionState::default());
    assert_ne!(s, next);
}

#[test]
fn constructor_drops_duplicates() {
    let s = SelectionState::new(["A", "B", "A"]);
    assert_eq!(s.countries(), ["A", "B"]);
    assert!(s.contains("B"));
    assert!(!s.contains("C"));
}

#[test]
fn stored_selection_is_deduplicated_on_load() {
    let s: SelectionState = serde_json::from_str(
        r#"{"countries":["Peru","Chad","Peru"],"reset_counter":4}"#,
    )
    .unwrap();
    assert_eq!(s.countries(), ["Peru", "Chad"]);
    assert_eq!(s.reset_counter(), 4);

    let back: SelectionState = serde_json::from_str(&serde_json::to_string(&s).unwrap()).unwrap();
    assert_eq!(back, s);
}
