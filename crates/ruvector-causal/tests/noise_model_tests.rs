//! Integration tests for the noise-accessible Bernoulli model

use ndarray::{ArrayD, IxDyn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ruvector_causal::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn random_logits(shape: &[usize], scale: f64, rng: &mut ChaCha8Rng) -> ArrayD<f64> {
    ArrayD::from_shape_simple_fn(IxDyn(shape), || rng.gen_range(-scale..scale))
}

fn random_binary(shape: &[usize], rng: &mut ChaCha8Rng) -> ArrayD<f64> {
    ArrayD::from_shape_simple_fn(IxDyn(shape), || if rng.gen::<bool>() { 1.0 } else { 0.0 })
}

// ── Round trip ───────────────────────────────────────────────────────────────

#[test]
fn sample_noise_sample_round_trip_over_many_seeds() {
    for shape in [vec![7], vec![3, 4], vec![2, 3, 5]] {
        let batch = &shape[1..];
        let mut setup = rng(1000 + shape.len() as u64);
        let base = random_logits(batch, 6.0, &mut setup);
        let delta = random_logits(&shape, 6.0, &mut setup);
        let model = NoiseAccessibleBernoulli::new(delta, &base).unwrap();

        for seed in 0..200 {
            let mut r = rng(seed);
            let samples = random_binary(&shape, &mut r);
            let noise = model.sample_to_noise(&samples, &mut r).unwrap();
            assert_eq!(noise.shape(), samples.shape());
            assert_eq!(
                model.noise_to_sample(&noise).unwrap(),
                samples,
                "round trip failed for shape {:?}, seed {}",
                shape,
                seed
            );
        }
    }
}

#[test]
fn round_trip_from_forward_samples() {
    let base = ArrayD::from_elem(IxDyn(&[4]), 0.7);
    let delta = ArrayD::from_elem(IxDyn(&[16, 4]), -0.2);
    let model = NoiseAccessibleBernoulli::new(delta, &base).unwrap();
    let mut r = rng(9);

    // One forward draw per delta row: sample_shape [] over batch [16, 4]
    let samples = model.sample(&[], &mut r).unwrap();
    let noise = model.sample_to_noise(&samples, &mut r).unwrap();
    assert_eq!(model.noise_to_sample(&noise).unwrap(), samples);
}

#[test]
fn noise_to_sample_is_strictly_binary() {
    let mut r = rng(77);
    let delta = random_logits(&[50], 100.0, &mut r);
    let model = NoiseAccessibleBernoulli::new(delta, &ArrayD::zeros(IxDyn(&[50]))).unwrap();
    for _ in 0..20 {
        let noise = random_logits(&[50], 1e3, &mut r);
        let out = model.noise_to_sample(&noise).unwrap();
        assert!(out.iter().all(|&x| x == 0.0 || x == 1.0));
    }
}

#[test]
fn sample_to_noise_rejects_shape_mismatch() {
    let model = NoiseAccessibleBernoulli::new(
        ArrayD::zeros(IxDyn(&[3, 4])),
        &ArrayD::zeros(IxDyn(&[4])),
    )
    .unwrap();
    let samples = ArrayD::<f64>::zeros(IxDyn(&[3, 5]));
    let err = model.sample_to_noise(&samples, &mut rng(0)).unwrap_err();
    assert_eq!(err, CausalError::shape_mismatch(&[3, 4], &[3, 5]));
}

// ── Posterior statistics ─────────────────────────────────────────────────────

#[test]
fn posterior_noise_mixture_recovers_logistic_prior() {
    // Abducted noise averaged over forward samples is a draw from the prior,
    // here logistic(base): with base = 0 its mean is 0 and variance π²/3.
    let n = 20_000;
    let model = NoiseAccessibleBernoulli::new(
        ArrayD::zeros(IxDyn(&[n])),
        &ArrayD::zeros(IxDyn(&[1])),
    )
    .unwrap();
    let mut r = rng(2024);
    let samples = model.sample(&[], &mut r).unwrap();
    let noise = model.sample_to_noise(&samples, &mut r).unwrap();

    let mean = noise.mean().unwrap();
    let var = noise.mapv(|z| (z - mean).powi(2)).mean().unwrap();
    let logistic_var = std::f64::consts::PI.powi(2) / 3.0;
    assert!(mean.abs() < 0.1, "mean {}", mean);
    assert!((var - logistic_var).abs() < 0.25, "variance {}", var);
}

// ── Counterfactuals ──────────────────────────────────────────────────────────

#[test]
fn counterfactual_is_monotone_in_delta() {
    // Raising every delta logit can only turn 0s into 1s
    let mut r = rng(31);
    let base = random_logits(&[6], 2.0, &mut r);
    let delta = random_logits(&[10, 6], 2.0, &mut r);
    let raised = delta.mapv(|d| d + 1.5);

    let factual = NoiseAccessibleBernoulli::new(delta, &base).unwrap();
    let intervened = NoiseAccessibleBernoulli::new(raised, &base).unwrap();

    for seed in 0..50 {
        let mut r = rng(seed);
        let observed = random_binary(&[10, 6], &mut r);
        let cf = counterfactual(&factual, &intervened, &observed, &mut r).unwrap();
        for (x, y) in observed.iter().zip(cf.iter()) {
            assert!(y >= x);
        }
    }
}
