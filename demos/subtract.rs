use rand::{rngs::StdRng, SeedableRng};
use unary_sub::{NullReporter, TrainConfig, UnaryNetwork};

fn main() {
    let mut network = UnaryNetwork::new(20);
    let mut rng = StdRng::seed_from_u64(7);

    let summary = network.train_model(&TrainConfig::new(5_000), &mut rng, NullReporter);
    println!(
        "Trained {} epochs, {} corrections in {} ms",
        summary.epochs, summary.corrections, summary.elapsed_ms
    );

    let report = network
        .test(1_000, &mut rng, NullReporter)
        .expect("at least one test");
    println!("Accuracy: {:.2}%", report.accuracy);

    for (a, b) in [(7, 3), (3, 7), (20, 1), (35, 12)] {
        println!("{a} - {b} -> {}", network.forward(a, b));
    }
    println!("Weights: {:?}", network.weights().as_slice());
}
