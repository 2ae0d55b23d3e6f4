//! Tests for the flow graph builder

use dexflow_flow::entry::expand;
use dexflow_flow::{default_rules, FlowGraphBuilder};
use dexflow_types::{FlowGraph, Record, Stats, ThresholdRule};
use rstest::rstest;
use std::collections::HashSet;

fn creature(id: &str, primary: &str, secondary: Option<&str>, attack: f64, hp: f64, defense: f64) -> Record {
    let record = Record::new(
        id,
        primary,
        Stats {
            attack,
            hp,
            defense,
            ..Stats::default()
        },
    );
    match secondary {
        Some(category) => record.with_secondary(category),
        None => record,
    }
}

fn link_names(graph: &FlowGraph) -> Vec<(String, String, f64)> {
    graph
        .links
        .iter()
        .map(|l| {
            (
                graph.nodes[l.source].name.clone(),
                graph.nodes[l.target].name.clone(),
                l.value,
            )
        })
        .collect()
}

fn two_rule_builder() -> FlowGraphBuilder {
    FlowGraphBuilder::new(vec![
        ThresholdRule::new("ATK>100", "attack", 100.0),
        ThresholdRule::new("HP>100", "hp", 100.0),
    ])
    .with_root_label("All")
}

#[test]
fn test_worked_example() {
    let records = vec![
        creature("A", "Fire", None, 120.0, 50.0, 40.0),
        creature("B", "Water", Some("Ice"), 60.0, 110.0, 30.0),
    ];

    let graph = two_rule_builder().build(&records).unwrap();

    let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["All", "Fire", "Water", "Ice", "ATK>100", "HP>100"]);

    let expected = vec![
        ("All", "Fire", 1.0),
        ("Fire", "ATK>100", 1.0),
        ("All", "Water", 0.5),
        ("Water", "HP>100", 0.5),
        ("All", "Ice", 0.5),
        ("Ice", "HP>100", 0.5),
    ];
    let expected: Vec<(String, String, f64)> = expected
        .into_iter()
        .map(|(s, t, v)| (s.to_string(), t.to_string(), v))
        .collect();
    assert_eq!(link_names(&graph), expected);
}

#[test]
fn test_root_first_and_names_unique() {
    let records = vec![
        creature("Bulbasaur", "Grass", Some("Poison"), 49.0, 45.0, 49.0),
        creature("Oddish", "Grass", Some("Poison"), 50.0, 45.0, 55.0),
        creature("Ekans", "Poison", None, 60.0, 35.0, 44.0),
        creature("Charizard", "Fire", Some("Flying"), 84.0, 78.0, 78.0),
    ];
    let graph = FlowGraphBuilder::default().build(&records).unwrap();

    assert_eq!(graph.nodes[0].name, "All Pokémon");
    let unique: HashSet<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(unique.len(), graph.nodes.len());

    let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "All Pokémon",
            "Grass",
            "Poison",
            "Fire",
            "Flying",
            "Attack > 100",
            "HP > 100",
            "Defense > 100"
        ]
    );
}

#[test]
fn test_root_links_match_entry_count() {
    let records = vec![
        creature("A", "Fire", None, 0.0, 0.0, 0.0),
        creature("B", "Fire", None, 0.0, 0.0, 0.0),
        creature("C", "Water", Some("Ice"), 0.0, 0.0, 0.0),
    ];
    let graph = FlowGraphBuilder::default().build(&records).unwrap();

    let root_links = graph.links.iter().filter(|l| l.source == 0).count();
    assert_eq!(root_links, expand(&records).len());
    // Two parallel All -> Fire links stay separate
    assert_eq!(graph.links.iter().filter(|l| l.source == 0 && l.target == 1).count(), 2);

    let total: f64 = graph.links.iter().filter(|l| l.source == 0).map(|l| l.value).sum();
    assert_eq!(total, records.len() as f64);
}

#[rstest]
#[case(100.0, false)]
#[case(100.000_1, true)]
#[case(101.0, true)]
#[case(99.0, false)]
#[case(-5.0, false)]
#[case(f64::NAN, false)]
fn test_bucket_link_requires_strictly_greater(#[case] attack: f64, #[case] linked: bool) {
    let records = vec![creature("X", "Normal", None, attack, 0.0, 0.0)];
    let graph = two_rule_builder().build(&records).unwrap();

    let bucket = graph.node_index("ATK>100").unwrap();
    let has_link = graph.links.iter().any(|l| l.target == bucket);
    assert_eq!(has_link, linked);
}

#[test]
fn test_negative_threshold_admits_zero() {
    let builder = FlowGraphBuilder::new(vec![ThresholdRule::new("HP > -1", "hp", -1.0)]);
    let graph = builder.build(&[creature("Z", "Ghost", None, 0.0, 0.0, 0.0)]).unwrap();
    assert_eq!(graph.links.len(), 2);
    assert_eq!(graph.links[1].target, 2);
}

#[test]
fn test_build_is_idempotent() {
    let records = vec![
        creature("A", "Dragon", Some("Flying"), 134.0, 91.0, 95.0),
        creature("B", "Steel", None, 85.0, 60.0, 140.0),
    ];
    let builder = FlowGraphBuilder::default();
    let first = builder.build(&records).unwrap();
    let second = builder.build(&records).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_primary_category_is_invalid_input() {
    let records = vec![
        creature("A", "Fire", None, 120.0, 0.0, 0.0),
        creature("B", "", None, 120.0, 0.0, 0.0),
    ];
    let err = FlowGraphBuilder::default().build(&records).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("records[1].primary_category"));
}

#[rstest]
#[case("")]
#[case("   ")]
fn test_blank_secondary_category_counts_as_single(#[case] secondary: &str) {
    let records = vec![creature("A", "Fire", Some(secondary), 120.0, 0.0, 0.0)];
    let graph = two_rule_builder().build(&records).unwrap();

    let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["All", "Fire", "ATK>100", "HP>100"]);
    assert_eq!(
        link_names(&graph),
        vec![
            ("All".to_string(), "Fire".to_string(), 1.0),
            ("Fire".to_string(), "ATK>100".to_string(), 1.0),
        ]
    );
}

#[test]
fn test_unknown_measurement_fails_before_processing() {
    // The record error would surface too, but the rule check runs first
    let records = vec![creature("B", "", None, 0.0, 0.0, 0.0)];
    let builder = FlowGraphBuilder::new(vec![ThresholdRule::new("Luck > 1", "luck", 1.0)]);
    let err = builder.build(&records).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("rules[0].measurement"));
}

#[rstest]
#[case(vec![ThresholdRule::new("A", "hp", 1.0), ThresholdRule::new("A", "attack", 1.0)])]
#[case(vec![ThresholdRule::new("All Pokémon", "hp", 1.0)])]
#[case(vec![ThresholdRule::new("  ", "hp", 1.0)])]
fn test_conflicting_rule_labels_are_invalid(#[case] rules: Vec<ThresholdRule>) {
    let err = FlowGraphBuilder::new(rules).build(&[]).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_category_named_like_bucket_is_invalid() {
    let records = vec![creature("A", "Fire", Some("HP > 100"), 0.0, 0.0, 0.0)];
    let err = FlowGraphBuilder::default().build(&records).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_default_rules_cover_three_stats() {
    let rules = default_rules();
    assert_eq!(rules.len(), 3);
    assert!(rules.iter().all(|r| r.resolve().is_some() && r.threshold == 100.0));
}
