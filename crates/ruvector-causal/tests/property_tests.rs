//! Property-based tests using proptest

use ndarray::{Array1, Array2, ArrayD, IxDyn};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ruvector_causal::{
    adjacency_precision_recall, GraphMetrics, NoiseAccessible, NoiseAccessibleBernoulli,
};

fn adjacency(n: usize) -> impl Strategy<Value = Array2<f64>> {
    prop::collection::vec(prop::bool::weighted(0.3), n * n).prop_map(move |bits| {
        let mut g = Array2::from_shape_fn((n, n), |(i, j)| if bits[i * n + j] { 1.0 } else { 0.0 });
        g.diag_mut().fill(0.0);
        g
    })
}

proptest! {
    #[test]
    fn round_trip_holds_for_any_binary_sample(
        delta in prop::collection::vec(-10.0f64..10.0, 1..64),
        base_value in -10.0f64..10.0,
        bits in prop::collection::vec(any::<bool>(), 64),
        seed in any::<u64>(),
    ) {
        let n = delta.len();
        let model = NoiseAccessibleBernoulli::new(
            Array1::from_vec(delta).into_dyn(),
            &ArrayD::from_elem(IxDyn(&[n]), base_value),
        ).unwrap();
        let samples = ArrayD::from_shape_fn(IxDyn(&[n]), |idx| if bits[idx[0]] { 1.0 } else { 0.0 });

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let noise = model.sample_to_noise(&samples, &mut rng).unwrap();
        prop_assert_eq!(model.noise_to_sample(&noise).unwrap(), samples);
    }

    #[test]
    fn noise_to_sample_output_is_binary(
        delta in prop::collection::vec(-1e6f64..1e6, 1..32),
        noise_scale in 0.0f64..1e6,
    ) {
        let n = delta.len();
        let model = NoiseAccessibleBernoulli::new(
            Array1::from_vec(delta).into_dyn(),
            &ArrayD::zeros(IxDyn(&[1])),
        ).unwrap();
        let noise = ArrayD::from_shape_fn(IxDyn(&[n]), |idx| {
            noise_scale * if idx[0] % 2 == 0 { 1.0 } else { -1.0 }
        });
        let out = model.noise_to_sample(&noise).unwrap();
        prop_assert!(out.iter().all(|&x| x == 0.0 || x == 1.0));
    }

    #[test]
    fn scores_stay_in_unit_interval(g1 in adjacency(5), g2 in adjacency(5)) {
        let m = GraphMetrics::evaluate(&g1, &g2);
        for v in [
            m.adjacency_precision, m.adjacency_recall, m.adjacency_f1,
            m.orientation_precision, m.orientation_recall, m.orientation_f1,
        ] {
            prop_assert!((0.0..=1.0).contains(&v));
        }
        // Correct orientation implies correct existence
        prop_assert!(m.orientation_recall <= m.adjacency_recall);
        prop_assert!(m.orientation_precision <= m.adjacency_precision);
    }

    #[test]
    fn swapping_arguments_swaps_precision_and_recall(g1 in adjacency(4), g2 in adjacency(4)) {
        let (p, r) = adjacency_precision_recall(&g1, &g2);
        let (p_swapped, r_swapped) = adjacency_precision_recall(&g2, &g1);
        prop_assert_eq!(p, r_swapped);
        prop_assert_eq!(r, p_swapped);
    }

    #[test]
    fn self_comparison_is_perfect_unless_empty(g in adjacency(6)) {
        let (p, r) = adjacency_precision_recall(&g, &g);
        let expected = if g.iter().any(|&x| x != 0.0) { 1.0 } else { 0.0 };
        prop_assert_eq!(p, expected);
        prop_assert_eq!(r, expected);
    }
}
