// Experiment driver: trains one XOR and one Binary Adder configuration and
// prints the result tables.
//
// Usage:
//   ferrite-mlp [xor_choice] [xor_split] [adder_choice] [adder_split]
//               [--data-dir DIR] [--seed N] [--json PATH]
//
// Choices are 1-based indices into the preset tables; anything missing or
// out of range falls back to option 1. Set RUST_LOG=debug for more detail.

use std::path::PathBuf;

use log::{info, warn};

use ferrite_mlp::data::builtin;
use ferrite_mlp::data::csv::load_csv;
use ferrite_mlp::data::split::{split_dataset, DEFAULT_SPLIT_SEED};
use ferrite_mlp::experiment::config::{adder_configs, xor_configs, SPLIT_RATIOS};
use ferrite_mlp::experiment::report;
use ferrite_mlp::{run_experiment, Dataset, ExperimentResult, HyperparameterConfig, Result};

struct CliArgs {
    choices: Vec<String>,
    data_dir: PathBuf,
    seed: u64,
    json: Option<PathBuf>,
}

fn parse_args() -> CliArgs {
    let mut args = CliArgs {
        choices: Vec::new(),
        data_dir: PathBuf::from("datasets"),
        seed: DEFAULT_SPLIT_SEED,
        json: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--data-dir" => match iter.next() {
                Some(dir) => args.data_dir = PathBuf::from(dir),
                None => warn!("--data-dir needs a value; using {}", args.data_dir.display()),
            },
            "--seed" => match iter.next().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => args.seed = seed,
                _ => warn!("--seed needs an unsigned integer; using {}", args.seed),
            },
            "--json" => match iter.next() {
                Some(path) => args.json = Some(PathBuf::from(path)),
                None => warn!("--json needs a path; not writing JSON"),
            },
            _ => args.choices.push(arg),
        }
    }
    args
}

/// Resolves a 1-based menu choice, falling back to the first option.
fn resolve_choice(raw: Option<&String>, len: usize, what: &str) -> usize {
    match raw.map(|s| s.parse::<usize>()) {
        Some(Ok(n)) if (1..=len).contains(&n) => n - 1,
        Some(_) => {
            warn!("invalid {} choice; using option 1", what);
            0
        }
        None => 0,
    }
}

fn load_or_builtin(path: PathBuf, fallback: Dataset) -> Dataset {
    match load_csv(&path, &fallback.name, fallback.input_dim, fallback.output_dim) {
        Ok(dataset) if !dataset.is_empty() => dataset,
        Ok(_) => {
            warn!("{} has no rows; using built-in {} table", path.display(), fallback.name);
            fallback
        }
        Err(e) => {
            warn!("cannot load {}: {}; using built-in {} table", path.display(), e, fallback.name);
            fallback
        }
    }
}

fn run_one(
    dataset: &Dataset,
    config: &HyperparameterConfig,
    split_ratio: f64,
    seed: u64,
) -> Result<ExperimentResult> {
    info!(
        "running {} experiment: {} (split {})",
        dataset.name, config.description, split_ratio
    );
    let (train, test) = split_dataset(dataset, split_ratio, seed);
    run_experiment(&train, &test, config, split_ratio)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args();

    let xor = load_or_builtin(args.data_dir.join("xor_dataset.csv"), builtin::xor());
    let adder = load_or_builtin(
        args.data_dir.join("binary_adder_dataset.csv"),
        builtin::binary_adder(),
    );
    info!(
        "{}: {} samples, {} inputs, {} outputs",
        xor.name,
        xor.len(),
        xor.input_dim,
        xor.output_dim
    );
    info!(
        "{}: {} samples, {} inputs, {} outputs",
        adder.name,
        adder.len(),
        adder.input_dim,
        adder.output_dim
    );

    let xor_presets = xor_configs();
    let adder_presets = adder_configs();

    let xor_config =
        &xor_presets[resolve_choice(args.choices.first(), xor_presets.len(), "XOR config")];
    let xor_split =
        SPLIT_RATIOS[resolve_choice(args.choices.get(1), SPLIT_RATIOS.len(), "XOR split")];
    let adder_config =
        &adder_presets[resolve_choice(args.choices.get(2), adder_presets.len(), "adder config")];
    let adder_split =
        SPLIT_RATIOS[resolve_choice(args.choices.get(3), SPLIT_RATIOS.len(), "adder split")];

    let xor_results = vec![run_one(&xor, xor_config, xor_split, args.seed)?];
    let adder_results = vec![run_one(&adder, adder_config, adder_split, args.seed)?];

    print!("{}", report::format_results(&xor_results, "XOR"));
    print!("{}", report::format_best(&xor_results, "XOR"));
    print!("{}", report::format_results(&adder_results, "BINARY ADDER"));
    print!("{}", report::format_best(&adder_results, "BINARY ADDER"));
    print!("{}", report::format_summary(&xor_results, &adder_results));

    if let Some(path) = args.json {
        let all: Vec<ExperimentResult> = xor_results.into_iter().chain(adder_results).collect();
        report::save_json(&all, &path)?;
        info!("wrote results to {}", path.display());
    }

    Ok(())
}
