//! Tests for chart data export

use dexflow_flow::exporter::{ChartExporter, CHART_DATA_FILE};
use dexflow_flow::ChartConfig;
use dexflow_types::{Record, Stats};

fn records() -> Vec<Record> {
    vec![
        Record::new(
            "Arcanine",
            "Fire",
            Stats {
                hp: 90.0,
                attack: 110.0,
                defense: 80.0,
                catch_rate: 75.0,
                ..Stats::default()
            },
        ),
        Record::new(
            "Gyarados",
            "Water",
            Stats {
                hp: 95.0,
                attack: 125.0,
                defense: 79.0,
                catch_rate: 45.0,
                ..Stats::default()
            },
        )
        .with_secondary("Flying"),
    ]
}

#[test]
fn test_export_writes_chart_data() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = ChartExporter::new(dir.path().join("out"));

    let bundle = exporter.export(&records(), &ChartConfig::default()).unwrap();
    assert_eq!(bundle.record_count, 2);
    assert_eq!(bundle.ranking[0].id, "Gyarados");
    assert_eq!(bundle.rollup.groups.len(), 2);
    assert!(bundle.rollup.x_extent.is_some());

    let written = std::fs::read_to_string(dir.path().join("out").join(CHART_DATA_FILE)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["record_count"], 2);
    assert_eq!(json["sankey"]["graph"]["nodes"][0]["name"], "All Pokémon");
    assert!(json["generated_at"].as_str().is_some());
}

#[test]
fn test_sankey_colors_align_with_graph() {
    let exporter = ChartExporter::new(std::env::temp_dir());
    let bundle = exporter.bundle(&records(), &ChartConfig::default()).unwrap();
    let sankey = &bundle.sankey;

    assert_eq!(sankey.node_colors.len(), sankey.graph.nodes.len());
    assert_eq!(sankey.link_colors.len(), sankey.graph.links.len());
    // All, Fire, Water, Flying, Attack, HP, Defense
    assert_eq!(sankey.node_colors[0], "#ccc");
    assert_eq!(sankey.node_colors[1], "#F08030");
    assert_eq!(sankey.node_colors[4], "#e41a1c");
    assert_eq!(sankey.link_colors[0], "#F08030");
}

#[test]
fn test_export_rejects_invalid_records() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = ChartExporter::new(dir.path().to_path_buf());
    let bad = vec![Record::new("Nameless", "", Stats::default())];

    let err = exporter.export(&bad, &ChartConfig::default()).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(!dir.path().join(CHART_DATA_FILE).exists());
}
