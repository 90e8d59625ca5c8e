use crate::data::dataset::{DataSample, Dataset};

pub const XOR_NAME: &str = "XOR";
pub const ADDER_NAME: &str = "Binary Adder";

/// The 4-row XOR truth table: 2 inputs, 1 output.
pub fn xor() -> Dataset {
    let mut dataset = Dataset::new(XOR_NAME, 2, 1);
    for (a, b) in [(0u8, 0u8), (0, 1), (1, 0), (1, 1)] {
        dataset.samples.push(DataSample {
            inputs: vec![a as f64, b as f64],
            outputs: vec![(a ^ b) as f64],
        });
    }
    dataset
}

/// Truth table of a 2-bit adder with carry in: inputs `a1 a0 b1 b0 cin`,
/// outputs `s2 s1 s0` of `a + b + cin`. 32 rows.
pub fn binary_adder() -> Dataset {
    let mut dataset = Dataset::new(ADDER_NAME, 5, 3);
    for row in 0u8..32 {
        let bits: Vec<u8> = (0..5).rev().map(|shift| (row >> shift) & 1).collect();
        let a = bits[0] * 2 + bits[1];
        let b = bits[2] * 2 + bits[3];
        let sum = a + b + bits[4];
        dataset.samples.push(DataSample {
            inputs: bits.iter().map(|&bit| bit as f64).collect(),
            outputs: (0..3).rev().map(|shift| ((sum >> shift) & 1) as f64).collect(),
        });
    }
    dataset
}
