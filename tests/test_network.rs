use ferrite_mlp::{Matrix, MlpError, Network};
use rand::prelude::*;

/// Network with every weight and bias set to zero.
fn zero_network(layer_sizes: &[usize]) -> Network<f64> {
    let weights = layer_sizes.windows(2).map(|p| Matrix::zeros(p[1], p[0])).collect();
    let biases = layer_sizes.windows(2).map(|p| Matrix::zeros(p[1], 1)).collect();
    Network::from_parameters(weights, biases, 0.1).unwrap()
}

/// Single-layer network with zero weights and the given biases.
fn bias_only_network(inputs: usize, biases: Vec<f64>) -> Network<f64> {
    let outputs = biases.len();
    let weights = vec![Matrix::zeros(outputs, inputs)];
    Network::from_parameters(weights, vec![Matrix::column(biases)], 0.1).unwrap()
}

#[test]
fn construction_shapes_parameters_from_layer_sizes() {
    let network: Network<f64> = Network::new(vec![5, 16, 8, 3], 0.3).unwrap();
    assert_eq!(network.layer_sizes(), &[5, 16, 8, 3]);
    assert_eq!(network.weights().len(), 3);
    assert_eq!(network.biases().len(), 3);

    let shapes: Vec<_> = network.weights().iter().map(|w| w.shape()).collect();
    assert_eq!(shapes, vec![(16, 5), (8, 16), (3, 8)]);
    let bias_shapes: Vec<_> = network.biases().iter().map(|b| b.shape()).collect();
    assert_eq!(bias_shapes, vec![(16, 1), (8, 1), (3, 1)]);
    assert_eq!(network.learning_rate(), 0.3);
}

#[test]
fn initial_parameters_are_uniform_in_unit_range() {
    let network: Network<f64> =
        Network::with_rng(vec![4, 10, 2], 0.1, &mut StdRng::seed_from_u64(9)).unwrap();
    let all: Vec<f64> = network
        .weights()
        .iter()
        .chain(network.biases().iter())
        .flat_map(|m| m.to_vec())
        .collect();
    assert!(all.iter().all(|x| (-1.0..=1.0).contains(x)));
    assert!(all.iter().any(|&x| x != 0.0));
}

#[test]
fn seeded_construction_is_reproducible() {
    let build = || -> Network<f64> {
        Network::with_rng(vec![2, 3, 1], 0.5, &mut StdRng::seed_from_u64(5)).unwrap()
    };
    let (a, b) = (build(), build());
    assert_eq!(a.weights(), b.weights());
    assert_eq!(a.biases(), b.biases());
}

#[test]
fn invalid_architectures_are_rejected() {
    assert!(matches!(Network::<f64>::new(vec![3], 0.1), Err(MlpError::Architecture(_))));
    assert!(matches!(Network::<f64>::new(vec![], 0.1), Err(MlpError::Architecture(_))));
    assert!(matches!(Network::<f64>::new(vec![2, 0, 1], 0.1), Err(MlpError::Architecture(_))));
}

#[test]
fn mismatched_parameters_are_rejected() {
    let err = Network::from_parameters(
        vec![Matrix::<f64>::zeros(3, 2), Matrix::zeros(1, 4)],
        vec![Matrix::zeros(3, 1), Matrix::zeros(1, 1)],
        0.1,
    )
    .unwrap_err();
    assert!(matches!(err, MlpError::Dimension { op: "weights", .. }));

    let err =
        Network::from_parameters(vec![Matrix::<f64>::zeros(3, 2)], vec![Matrix::zeros(2, 1)], 0.1)
            .unwrap_err();
    assert!(matches!(err, MlpError::Dimension { op: "biases", .. }));

    let err = Network::<f64>::from_parameters(vec![], vec![], 0.1).unwrap_err();
    assert!(matches!(err, MlpError::Architecture(_)));
}

#[test]
fn zero_network_outputs_one_half_everywhere() {
    for sizes in [vec![2, 1], vec![2, 8, 1], vec![5, 16, 8, 3], vec![1, 1, 1, 1, 4]] {
        let network = zero_network(&sizes);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..3 {
            let mut input = Matrix::zeros(sizes[0], 1);
            input.randomize_with(-5.0, 5.0, &mut rng);
            let output = network.forward(&input).unwrap();
            assert_eq!(output.shape(), (sizes[sizes.len() - 1], 1));
            assert!(output.to_vec().iter().all(|&x| x == 0.5));
        }
    }
}

#[test]
fn forward_rejects_wrong_input_shape() {
    let network = zero_network(&[2, 3, 1]);
    let err = network.forward(&Matrix::column(vec![1.0, 2.0, 3.0])).unwrap_err();
    assert!(matches!(err, MlpError::Dimension { op: "input", .. }));
    let err = network.forward(&Matrix::row(vec![1.0, 2.0])).unwrap_err();
    assert!(matches!(err, MlpError::Dimension { op: "input", .. }));
}

#[test]
fn forward_trace_caches_every_layer() {
    let network: Network<f64> =
        Network::with_rng(vec![2, 4, 3, 1], 0.1, &mut StdRng::seed_from_u64(3)).unwrap();
    let input = Matrix::column(vec![0.3, -0.7]);
    let trace = network.forward_trace(&input).unwrap();

    assert_eq!(trace.linear.len(), 3);
    assert_eq!(trace.activations.len(), 4);
    assert_eq!(trace.activations[0], input);
    assert_eq!(trace.output(), &network.forward(&input).unwrap());
    for (z, a) in trace.linear.iter().zip(trace.activations.iter().skip(1)) {
        assert_eq!(z.shape(), a.shape());
    }
}

#[test]
fn evaluate_is_zero_when_targets_match_outputs() {
    let network = zero_network(&[3, 4, 2]);
    let inputs = vec![Matrix::column(vec![1.0, 0.0, 1.0]), Matrix::column(vec![0.0, 0.0, 0.0])];
    let targets = vec![Matrix::column(vec![0.5, 0.5]); 2];
    assert_eq!(network.evaluate(&inputs, &targets).unwrap(), 0.0);
}

#[test]
fn evaluate_averages_summed_squared_error() {
    let network = zero_network(&[1, 2]);
    let inputs = vec![Matrix::column(vec![0.0]); 2];
    // errors (0.5, 0.5) and (-0.5, 0.0): summed squares 0.5 and 0.25
    let targets = vec![Matrix::column(vec![0.0, 0.0]), Matrix::column(vec![1.0, 0.5])];
    assert_eq!(network.evaluate(&inputs, &targets).unwrap(), 0.375);
}

#[test]
fn evaluate_rejects_bad_datasets() {
    let network = zero_network(&[1, 1]);
    assert!(matches!(network.evaluate(&[], &[]), Err(MlpError::EmptyDataset(_))));
    assert!(matches!(
        network.evaluate(&[Matrix::column(vec![0.0])], &[]),
        Err(MlpError::SampleCount { inputs: 1, targets: 0 })
    ));
    assert!(matches!(
        network.evaluate(&[Matrix::column(vec![0.0])], &[Matrix::column(vec![0.0, 1.0])]),
        Err(MlpError::Dimension { op: "target", .. })
    ));
}

#[test]
fn accuracy_requires_every_output_unit_to_match() {
    // Outputs are roughly (1, 0).
    let network = bias_only_network(2, vec![10.0, -10.0]);
    let input = Matrix::column(vec![0.0, 0.0]);

    let one_bit_wrong = vec![Matrix::column(vec![1.0, 1.0])];
    assert_eq!(network.accuracy(&[input.clone()], &one_bit_wrong).unwrap(), 0.0);

    let both_right = vec![Matrix::column(vec![1.0, 0.0])];
    assert_eq!(network.accuracy(&[input.clone()], &both_right).unwrap(), 1.0);

    let inputs = vec![input.clone(), input];
    let mixed = vec![Matrix::column(vec![1.0, 0.0]), Matrix::column(vec![0.0, 0.0])];
    assert_eq!(network.accuracy(&inputs, &mixed).unwrap(), 0.5);
}

#[test]
fn accuracy_threshold_is_strictly_greater() {
    // Output exactly 0.5 is classified as 0.
    let network = zero_network(&[1, 1]);
    let inputs = vec![Matrix::column(vec![0.0])];
    assert_eq!(network.accuracy(&inputs, &[Matrix::column(vec![0.0])]).unwrap(), 1.0);
    assert_eq!(network.accuracy(&inputs, &[Matrix::column(vec![1.0])]).unwrap(), 0.0);
    assert_eq!(
        network.calculate_accuracy(&inputs, &[Matrix::column(vec![1.0])], 0.4).unwrap(),
        1.0
    );
}

#[test]
fn accuracy_tolerates_near_binary_targets() {
    let network = bias_only_network(1, vec![10.0]);
    let inputs = vec![Matrix::column(vec![0.0])];
    assert_eq!(network.accuracy(&inputs, &[Matrix::column(vec![0.95])]).unwrap(), 1.0);
    assert_eq!(network.accuracy(&inputs, &[Matrix::column(vec![0.8])]).unwrap(), 0.0);
}
