use ferrite_mlp::data::builtin;
use ferrite_mlp::{Network, TrainConfig};

fn main() -> ferrite_mlp::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (inputs, targets) = builtin::xor().to_matrices::<f64>();
    let mut network = Network::new(vec![2, 8, 1], 0.5)?;

    // Validate on the training set itself; XOR has nothing to hold out.
    let config = TrainConfig::new(5000, true).with_report_every(1000);
    network.train_with_validation(&inputs, &targets, &inputs, &targets, &config)?;

    for input in &inputs {
        let output = network.forward(input)?;
        println!("Input: {:?} -> Output: {:.4}", input.to_vec(), output.get(0, 0)?);
    }
    println!("Accuracy: {:.3}", network.accuracy(&inputs, &targets)?);
    Ok(())
}
