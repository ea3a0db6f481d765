//! Reading networks from files in both accepted formats.

use crate::common::TEN_INPUT_DEPTH_8;
use sortnet::{
    layers_to_string, linear_to_layers, parse_network, NetworkBody, NetworkError, NetworkFile,
};
use std::fs;
use tempfile::TempDir;

fn read(path: &std::path::Path, inputs: Option<usize>) -> Result<sortnet::Network, NetworkError> {
    parse_network(&fs::read_to_string(path).unwrap(), inputs)
}

#[test]
fn test_json_pairs_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ten.json");
    let file = NetworkFile {
        inputs: Some(10),
        body: NetworkBody::Pairs(TEN_INPUT_DEPTH_8.to_vec()),
    };
    fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();

    let mut net = read(&path, None).unwrap();
    assert_eq!(net.inputs(), 10);
    assert_eq!(net.pairs(), &TEN_INPUT_DEPTH_8);
    assert!(net.verify(false).unwrap());
}

#[test]
fn test_json_layers_file_without_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layers.json");
    fs::write(&path, r#"{"layers": [[[0,1],[2,3]], [[0,2],[1,3]], [[1,2]]]}"#).unwrap();

    let net = read(&path, None).unwrap();
    assert_eq!(net.inputs(), 4);
    assert_eq!(net.depth(), 3);
}

#[test]
fn test_layer_listing_file_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ten.txt");
    let listing = layers_to_string(&linear_to_layers(&TEN_INPUT_DEPTH_8));
    fs::write(&path, format!("# depth 8\n{}", listing)).unwrap();

    let mut net = read(&path, None).unwrap();
    assert_eq!(net.inputs(), 10);
    assert_eq!(net.len(), 29);
    assert!(net.verify(false).unwrap());
}

#[test]
fn test_explicit_size_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("small.json");
    fs::write(&path, r#"{"inputs": 2, "pairs": [[0,1]]}"#).unwrap();

    let mut net = read(&path, Some(3)).unwrap();
    assert_eq!(net.inputs(), 3);
    assert!(!net.verify(false).unwrap());
}

#[test]
fn test_bad_files_report_errors() {
    let dir = TempDir::new().unwrap();

    let out_of_range = dir.path().join("range.json");
    fs::write(&out_of_range, r#"{"inputs": 3, "pairs": [[0,3]]}"#).unwrap();
    assert!(matches!(
        read(&out_of_range, None),
        Err(NetworkError::InvalidOperation { index: 0, .. })
    ));

    let garbled = dir.path().join("garbled.txt");
    fs::write(&garbled, "(0,1)\n(1,2\n(x,3)").unwrap();
    assert!(matches!(
        read(&garbled, None),
        Err(NetworkError::Parse { line: 3, .. })
    ));
}
