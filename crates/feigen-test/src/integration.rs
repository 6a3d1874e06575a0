//! End-to-end pipeline checks
//!
//! Exercises the full flow: drive one map through every analyzer in
//! sequence, then derive a chaotic key and push it through the cipher.

use feigen_analysis::{
    BifurcationAnalyzer, InitialConditionsSensitivityAnalyzer, LyapunovExponentsCalculator,
    Visualizer,
};
use feigen_core::FeigenResult;
use feigen_crypto::{ChaoticCipher, KeyGenerator};
use feigen_maps::LogisticMap;

/// Summary of one full analysis pass over a logistic map.
#[derive(Debug)]
pub struct AnalysisReport {
    pub branches: usize,
    pub samples_per_branch: usize,
    pub lyapunov: f64,
    pub divergence: f64,
    pub trajectory_len: usize,
}

/// Drive every analyzer over one logistic map, handing the same instance
/// from stage to stage.
pub fn run_analysis_pipeline() -> AnalysisReport {
    let mut bifurcation = BifurcationAnalyzer::new(LogisticMap::seeded(0.5, 3.8));
    let branches = bifurcation.analyze(&[3.1, 3.5, 3.9]);

    let mut lyapunov = LyapunovExponentsCalculator::new(bifurcation.into_map());
    let exponent = lyapunov.calculate(5_000);

    let mut sensitivity = InitialConditionsSensitivityAnalyzer::new(lyapunov.into_map());
    let divergence = sensitivity.analyze(0.2, 0.2 + 1e-9, 50);

    let mut visualizer = Visualizer::new(sensitivity.into_map());
    let trajectory = visualizer.visualize(200);

    AnalysisReport {
        branches: branches.len(),
        samples_per_branch: branches.first().map(|b| b.values.len()).unwrap_or(0),
        lyapunov: exponent,
        divergence,
        trajectory_len: trajectory.len(),
    }
}

/// Derive a key from the shared generator and round-trip a message through
/// a cipher keyed by it.
pub fn run_key_exchange(plaintext: &str) -> FeigenResult<String> {
    let key = KeyGenerator::shared().lock().generate_key();

    let cipher = ChaoticCipher::new(&key);
    let ciphertext = cipher.encrypt(plaintext);
    cipher.decrypt(&ciphertext)
}
