use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::experiment::runner::ExperimentResult;

const TABLE_WIDTH: usize = 120;
const SECTION_WIDTH: usize = 60;

/// Fixed-width table of experiment results.
pub fn format_results(results: &[ExperimentResult], title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=".repeat(TABLE_WIDTH));
    let _ = writeln!(out, "EXPERIMENT RESULTS FOR {} DATASET", title);
    let _ = writeln!(out, "{}", "=".repeat(TABLE_WIDTH));
    let _ = writeln!(
        out,
        "{:<25}{:<10}{:<8}{:<8}{:<12}{:<12}{:<12}{:<12}{:<15}",
        "Architecture",
        "LR",
        "Epochs",
        "Split",
        "Train Loss",
        "Test Loss",
        "Train Acc",
        "Test Acc",
        "Description"
    );
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));

    for r in results {
        let _ = writeln!(
            out,
            "{:<25}{:<10.3}{:<8}{:<8.2}{:<12.4}{:<12.4}{:<12.3}{:<12.3}{:<15}",
            r.config.architecture_label(),
            r.config.learning_rate,
            r.config.epochs,
            r.split_ratio,
            r.train_loss,
            r.test_loss,
            r.train_accuracy,
            r.test_accuracy,
            r.config.description
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));
    out
}

/// Highest test accuracy and lowest test loss among `results`. Ties keep the
/// earliest entry. `None` for an empty slice.
pub fn best_configurations(
    results: &[ExperimentResult],
) -> Option<(&ExperimentResult, &ExperimentResult)> {
    let first = results.first()?;
    let mut best_accuracy = first;
    let mut best_loss = first;
    for r in &results[1..] {
        if r.test_accuracy > best_accuracy.test_accuracy {
            best_accuracy = r;
        }
        if r.test_loss < best_loss.test_loss {
            best_loss = r;
        }
    }
    Some((best_accuracy, best_loss))
}

pub fn format_best(results: &[ExperimentResult], title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nBEST CONFIGURATIONS FOR {}:", title);
    let _ = writeln!(out, "{}", "-".repeat(SECTION_WIDTH));
    match best_configurations(results) {
        Some((acc, loss)) => {
            let _ = writeln!(
                out,
                "Best Test Accuracy: {:.3} ({})",
                acc.test_accuracy, acc.config.description
            );
            let _ = writeln!(
                out,
                "Best Test Loss: {:.4} ({})",
                loss.test_loss, loss.config.description
            );
        }
        None => {
            let _ = writeln!(out, "no results");
        }
    }
    out
}

/// Closing summary over the XOR and Binary Adder runs.
pub fn format_summary(xor: &[ExperimentResult], adder: &[ExperimentResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=".repeat(80));
    let _ = writeln!(out, "EXPERIMENT SUMMARY");
    let _ = writeln!(out, "{}", "=".repeat(80));
    let _ = writeln!(out, "Total experiments conducted: {}", xor.len() + adder.len());
    for (label, results) in [("XOR", xor), ("Binary Adder", adder)] {
        for r in results {
            let _ = writeln!(out, "{} Configuration: {}", label, r.config.description);
            let _ = writeln!(out, "  {} Test Accuracy: {:.3}", label, r.test_accuracy);
            let _ = writeln!(out, "  {} Test Loss: {:.4}", label, r.test_loss);
        }
    }
    out
}

/// Writes all results as pretty-printed JSON.
pub fn save_json(results: &[ExperimentResult], path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json)?;
    Ok(())
}
