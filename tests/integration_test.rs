//! Integration tests for deb-depgraph using the library interface

use std::io::Write;
use std::path::Path;

use deb_depgraph::analyzer::PackageAnalyzer;
use deb_depgraph::common::ConfigBuilder;
use deb_depgraph::config::{ConfigFile, RunConfig};
use deb_depgraph::core::SourceMode;
use deb_depgraph::error::DepGraphError;
use deb_depgraph::graph::GraphRenderer;
use deb_depgraph::reports::{JsonReportGenerator, ReportGenerator};
use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/Packages");

fn run_config(repository: &str, package: &str, max_depth: usize) -> RunConfig {
    RunConfig::builder()
        .with_package_name(package)
        .with_repository(repository)
        .with_max_depth(max_depth)
        .build()
        .unwrap()
}

fn load(config: RunConfig) -> PackageAnalyzer {
    let mut analyzer = PackageAnalyzer::new(config);
    analyzer.load_from_source().unwrap();
    analyzer
}

fn depths(analyzer: &PackageAnalyzer) -> Vec<(String, usize)> {
    analyzer
        .build_graph()
        .unwrap()
        .nodes()
        .values()
        .map(|node| (node.name().to_string(), node.depth()))
        .collect()
}

#[test]
fn test_full_pipeline_from_local_file() {
    let analyzer = load(run_config(FIXTURE, "webapp", 10));
    assert_eq!(analyzer.index().record_count(), 8);

    let graph = analyzer.build_graph().unwrap();

    let expected: Vec<(String, usize)> = [
        ("gcc-12-base", 4),
        ("libc6", 2),
        ("libgcc-s1", 3),
        ("libpython3-stdlib", 2),
        ("libpython3.11-stdlib", 3),
        ("libssl3", 1),
        ("python3", 1),
        ("python3.11", 2),
        ("webapp", 0),
    ]
    .iter()
    .map(|(name, depth)| (name.to_string(), *depth))
    .collect();
    assert_eq!(depths(&analyzer), expected);

    assert_eq!(graph.node("webapp").unwrap().version(), "2.1.0-1");
    assert_eq!(
        graph.dependencies_of("webapp"),
        ["libc6", "python3", "libssl3"]
    );
    assert_eq!(graph.unknown_count(), 2);
    assert_eq!(
        graph.cycles(),
        ["webapp -> libssl3 -> libc6 -> libgcc-s1 -> libc6"]
    );
}

#[test]
fn test_depth_one_stops_at_direct_dependencies() {
    let analyzer = load(run_config(FIXTURE, "webapp", 1));
    let graph = analyzer.build_graph().unwrap();

    assert_eq!(graph.node_count(), 4);
    assert!(graph.node("libgcc-s1").is_none());
    assert!(!graph.has_cycles());
}

#[test]
fn test_requested_root_version() {
    let config = RunConfig::builder()
        .with_package_name("webapp")
        .with_repository(FIXTURE)
        .with_version("1.9.0-3")
        .build()
        .unwrap();
    let graph = load(config).build_graph().unwrap();

    assert_eq!(graph.node("webapp").unwrap().version(), "1.9.0-3");
    assert!(graph.node("python2").unwrap().is_unknown());
    assert!(graph.node("python3").is_none());
    assert_eq!(graph.cycles(), ["webapp -> libc6 -> libgcc-s1 -> libc6"]);
}

#[test]
fn test_missing_root_package() {
    let analyzer = load(run_config(FIXTURE, "does-not-exist", 10));

    match analyzer.build_graph() {
        Err(DepGraphError::PackageNotFound { name, version }) => {
            assert_eq!(name, "does-not-exist");
            assert_eq!(version, None);
        }
        other => panic!("Expected PackageNotFound, got {other:?}"),
    }
}

#[test]
fn test_gzip_index() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Packages.gz");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&std::fs::read(FIXTURE).unwrap())
        .unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();

    let analyzer = load(run_config(path.to_str().unwrap(), "webapp", 10));

    assert_eq!(analyzer.index().record_count(), 8);
    assert_eq!(analyzer.build_graph().unwrap().node_count(), 9);
}

#[test]
fn test_config_file_drives_the_run() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("depgraph.toml");
    std::fs::write(
        &path,
        format!("package_name = \"libc6\"\nrepository_url = \"{FIXTURE}\"\nmax_depth = 5\n"),
    )
    .unwrap();

    let config = RunConfig::builder()
        .with_file(ConfigFile::load(Path::new(&path)).unwrap())
        .build()
        .unwrap();
    assert_eq!(config.mode, SourceMode::Local);

    let graph = load(config).build_graph().unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.cycles(), ["libc6 -> libgcc-s1 -> libc6"]);
}

#[test]
fn test_rendered_outputs_are_consistent() {
    let graph = load(run_config(FIXTURE, "webapp", 10))
        .build_graph()
        .unwrap();
    let renderer = GraphRenderer::new(true);

    let mut json = Vec::new();
    renderer.render_json(&graph, &mut json).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), graph.node_count());
    assert_eq!(json["cycles"][0], graph.cycles()[0].as_str());

    let mut tree = Vec::new();
    renderer.render_tree(&graph, &mut tree).unwrap();
    let tree = String::from_utf8(tree).unwrap();
    assert!(tree.contains("- webapp [2.1.0-1] (depth: 0)"));
    assert!(tree.contains("    - libpython3-stdlib [unknown] (depth: 2)"));
    assert!(tree.contains("[already shown]"));

    let report = JsonReportGenerator::new().generate_report(&graph).unwrap();
    let report: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(report["cycle_count"], 1);
    assert_eq!(report["cycles"][0]["packages"], serde_json::json!(["libc6", "libgcc-s1"]));
}
