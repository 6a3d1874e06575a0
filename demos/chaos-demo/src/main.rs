//! FEIGEN Walkthrough
//!
//! This demo drives the whole pipeline: bifurcation sweep, Lyapunov
//! exponent, sensitivity to initial conditions, trajectory recording,
//! chaotic key generation, and an encryption round trip.

use feigen_analysis::{
    BifurcationAnalyzer, InitialConditionsSensitivityAnalyzer, LyapunovExponentsCalculator,
    Visualizer,
};
use feigen_core::Point3;
use feigen_crypto::{ChaoticCipher, KeyGenerator};
use feigen_maps::{ChuaOscillator, LogisticMap};

fn main() {
    println!("=== FEIGEN Chaos Walkthrough ===\n");

    // 1. Bifurcation sweep of the logistic map
    println!("1. Sweeping the logistic map across growth rates...");
    let mut bifurcation = BifurcationAnalyzer::new(LogisticMap::new());
    let sweep: Vec<f64> = (0..8).map(|i| 2.8 + i as f64 * 0.15).collect();
    let branches = bifurcation.analyze(&sweep);
    for branch in &branches {
        let (low, high) = branch
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        println!(
            "   r = {:.2}: {} samples in [{:.4}, {:.4}]",
            branch.parameter,
            branch.values.len(),
            low,
            high
        );
    }

    // 2. Lyapunov exponent in the chaotic band
    println!("\n2. Estimating the Lyapunov exponent at r = 3.9...");
    let mut lyapunov = LyapunovExponentsCalculator::new(LogisticMap::seeded(0.3, 3.9));
    println!("   lambda = {:.4}", lyapunov.calculate(20_000));

    // 3. Sensitivity to initial conditions
    println!("\n3. Measuring divergence of two nearby seeds...");
    let mut sensitivity =
        InitialConditionsSensitivityAnalyzer::new(LogisticMap::seeded(0.0, 3.9));
    let divergence = sensitivity.analyze(0.2, 0.2 + 1e-9, 60);
    println!("   max divergence after 60 steps: {:.4}", divergence);

    // 4. Recording a Chua trajectory
    println!("\n4. Recording the Chua oscillator (orbit grows without bound)...");
    let mut visualizer = Visualizer::new(ChuaOscillator::seeded(Point3::new(0.5, 0.0, 0.0)));
    let trajectory = visualizer.visualize(6);
    for (step, state) in trajectory.iter().enumerate() {
        println!("   step {}: {}", step + 1, state);
    }

    // 5. Chaotic key generation
    println!("\n5. Generating keys from the shared chaotic generator...");
    let key = KeyGenerator::shared().lock().generate_key();
    let second = KeyGenerator::shared().lock().generate_key();
    println!("   key 1: {key}");
    println!("   key 2: {second}");

    // 6. Encryption round trip
    println!("\n6. Encrypting with a cipher keyed from the chaotic key...");
    let cipher = ChaoticCipher::new(&key);
    let plaintext = "Hello, FEIGEN!";
    let ciphertext = cipher.encrypt(plaintext);
    println!("   ciphertext: {ciphertext}");
    match cipher.decrypt(&ciphertext) {
        Ok(recovered) => println!("   decrypted:  {recovered}"),
        Err(e) => println!("   decryption failed: {e}"),
    }

    println!("\n=== Walkthrough complete ===");
}
