//! Layer scheduling and symmetry on known networks.

use crate::common::{insertion_network, odd_even_merge_sort, pair_counts, TEN_INPUT_DEPTH_8};
use sortnet::{
    layers_to_linear, layers_to_string, linear_to_layers, parse_pairs, Network, NetworkError,
};

#[test]
fn test_ten_input_network_layers() {
    let layers = linear_to_layers(&TEN_INPUT_DEPTH_8);
    assert_eq!(layers.len(), 8);
    assert_eq!(layers[0], vec![(0, 8), (1, 9), (2, 7), (3, 5), (4, 6)]);
    assert_eq!(layers[7], vec![(3, 4), (5, 6)]);
}

#[test]
fn test_known_depths() {
    assert_eq!(sortnet::depth(&odd_even_merge_sort(4)), 3);
    assert_eq!(sortnet::depth(&odd_even_merge_sort(8)), 6);
    assert_eq!(sortnet::depth(&odd_even_merge_sort(16)), 10);
    // insertion sort pipelines to 2n - 3 layers
    assert_eq!(sortnet::depth(&insertion_network(6)), 9);
}

#[test]
fn test_layering_preserves_the_operation_multiset() {
    let pairs = odd_even_merge_sort(12);
    let linear = layers_to_linear(&linear_to_layers(&pairs));
    assert_eq!(pair_counts(&linear), pair_counts(&pairs));
}

#[test]
fn test_no_wire_repeats_inside_a_layer() {
    for layer in linear_to_layers(&TEN_INPUT_DEPTH_8) {
        let mut wires: Vec<usize> = layer.iter().flat_map(|&(i, j)| [i, j]).collect();
        let before = wires.len();
        wires.sort_unstable();
        wires.dedup();
        assert_eq!(wires.len(), before, "wire reused in layer {:?}", layer);
    }
}

#[test]
fn test_layered_network_still_sorts() {
    let layers = linear_to_layers(&TEN_INPUT_DEPTH_8);
    let mut net = Network::from_layers(10, &layers).unwrap();
    assert!(net.verify(false).unwrap());
}

#[test]
fn test_rendered_layers_parse_back() {
    let layers = linear_to_layers(&TEN_INPUT_DEPTH_8);
    let text = layers_to_string(&layers);
    assert_eq!(text.lines().count(), 8);
    assert_eq!(parse_pairs(&text).unwrap(), layers_to_linear(&layers));
}

#[test]
fn test_symmetry_of_known_networks() {
    assert!(Network::new(10, TEN_INPUT_DEPTH_8).unwrap().is_symmetric());
    for n in [4, 8, 16] {
        let net = Network::new(n, odd_even_merge_sort(n)).unwrap();
        assert!(net.is_symmetric(), "batcher {}", n);
    }
    assert!(!Network::new(6, odd_even_merge_sort(6)).unwrap().is_symmetric());
    assert!(!Network::new(6, insertion_network(6)).unwrap().is_symmetric());
    assert!(!Network::new(9, odd_even_merge_sort(9)).unwrap().is_symmetric());
}

#[test]
fn test_remove_prefix_of_published_network() {
    let net = Network::new(10, TEN_INPUT_DEPTH_8).unwrap();
    let rest = net.remove_prefix(&TEN_INPUT_DEPTH_8[..5]).unwrap();
    assert_eq!(rest.len(), 24);

    let err = net.remove_prefix(&[(0, 8), (2, 7)]).unwrap_err();
    assert_eq!(
        err,
        NetworkError::PrefixMismatch {
            position: 1,
            expected: (2, 7),
            found: Some((1, 9)),
        }
    );
}
