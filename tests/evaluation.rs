use rand::{rngs::StdRng, Rng, SeedableRng};
use unary_sub::{
    evaluate, train_step, EvalError, LogReporter, NullReporter, TrainConfig, UnaryNetwork,
    WeightVector,
};

#[test]
fn zero_tests_is_an_error() {
    let network = UnaryNetwork::new(10);
    let result = network.test(0, &mut StdRng::seed_from_u64(1), NullReporter);
    assert_eq!(result, Err(EvalError::NoTests));
}

#[test]
fn fresh_network_is_fully_accurate() {
    let network = UnaryNetwork::new(10);
    let report = network
        .test(2_000, &mut StdRng::seed_from_u64(2), NullReporter)
        .unwrap();
    assert_eq!(report.correct, 2_000);
    assert_eq!(report.accuracy, 100.0);
}

#[test]
fn accuracy_is_a_percentage_for_disturbed_weights() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut w = WeightVector::new(12);
    for _ in 0..500 {
        let a = rng.gen_range(0..=12);
        let b = rng.gen_range(0..=12);
        train_step(&mut w, a, b, rng.gen_range(0..=60));
    }
    for n in [1, 7, 500] {
        let report = evaluate(&w, n, &mut rng, NullReporter).unwrap();
        assert!((0.0..=100.0).contains(&report.accuracy));
        assert!(report.correct <= n);
        assert_eq!(report.num_tests, n);
        assert_eq!(report.accuracy, report.correct as f64 * 100.0 / n as f64);
    }
}

/// Weighted unary value with all in-range weights at 1 and the
/// extrapolation weight at `rate`.
fn skewed_value(x: u64, capacity: u64, rate: u64) -> u64 {
    x.min(capacity) + x.saturating_sub(capacity) * rate
}

#[test]
fn evaluation_reaches_twice_the_capacity() {
    // only the extrapolation weight is off, so every miss comes from an
    // input above capacity
    let weights = WeightVector::from_weights(vec![1, 1, 1, 1, 1, 2]).unwrap();
    let mut rng = StdRng::seed_from_u64(17);
    let mut replay = rng.clone();

    let report = evaluate(&weights, 2_000, &mut rng, NullReporter).unwrap();

    let mut expected_correct = 0;
    let mut beyond_capacity = 0;
    for _ in 0..2_000 {
        let a: u64 = replay.gen_range(0..=10);
        let b: u64 = replay.gen_range(0..=10);
        if a > 5 || b > 5 {
            beyond_capacity += 1;
        }
        let predicted = skewed_value(a, 5, 2).saturating_sub(skewed_value(b, 5, 2));
        if predicted == a.saturating_sub(b) {
            expected_correct += 1;
        }
    }

    assert!(beyond_capacity > 0);
    assert_eq!(report.correct, expected_correct);
    // 40 of the 121 input pairs are wrong, about 67% accuracy
    assert!(report.accuracy < 80.0, "accuracy {}", report.accuracy);
    assert!(report.accuracy > 50.0, "accuracy {}", report.accuracy);
}

#[test]
fn skewed_extrapolation_is_exact_inside_capacity() {
    let weights = WeightVector::from_weights(vec![1, 1, 1, 1, 1, 2]).unwrap();
    for a in 0..=5 {
        for b in 0..=5 {
            assert_eq!(unary_sub::forward(a, b, &weights), a.saturating_sub(b));
        }
    }
}

#[test]
fn evaluation_leaves_weights_alone() {
    let network = UnaryNetwork::from_weights(WeightVector::from_weights(vec![3, 1, 7, 2]).unwrap());
    let before = network.clone();
    network.test(300, &mut StdRng::seed_from_u64(6), NullReporter).unwrap();
    assert_eq!(network, before);
}

#[test_log::test]
fn full_run_with_log_reporter() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut network = UnaryNetwork::new(100);
    network.train_model(&TrainConfig::new(20_000), &mut rng, LogReporter);
    let report = network.test(1_000, &mut rng, LogReporter).unwrap();
    assert!((0.0..=100.0).contains(&report.accuracy));
}
