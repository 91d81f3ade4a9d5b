//! Correctness and invariant tests for windowstats
//!
//! These tests verify every engine against brute-force baselines and check
//! the properties that must always hold: warm-up semantics, FIFO eviction,
//! all-or-nothing sample rejection, and reset-replay equivalence. They
//! complement the unit tests in each module by focusing on randomized and
//! cross-engine behavior.
//!
//! Run with: cargo test --test correctness --features full

// Require all algorithm families
#[cfg(not(all(
    feature = "median",
    feature = "extremes",
    feature = "average",
    feature = "transform"
)))]
compile_error!(
    "Correctness tests require all algorithm families. Run: cargo test --test correctness --features full"
);

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use windowstats::average::RunningAverage;
use windowstats::extremes::{RunningMax, RunningMin};
use windowstats::median::RunningMedian;
use windowstats::traits::WindowAggregate;
use windowstats::transform::{Sqrt, Transform, WindowedConfig, WindowedOp, WindowedTransform};

/// Median of a slice by full resort — the baseline the engines must match
fn baseline_median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

fn baseline_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn baseline_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// The last `min(len, window)` samples of a sequence
fn window_of(sequence: &[f64], window: usize) -> &[f64] {
    let start = sequence.len().saturating_sub(window);
    &sequence[start..]
}

fn random_sequence(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-1000.0..1000.0)).collect()
}

/// Random sequences with few distinct values, to force duplicates through
/// the multiset paths
fn coarse_sequence(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-5..5) as f64).collect()
}

// ============================================================================
// Running Median
// ============================================================================

mod median {
    use super::*;

    #[test]
    fn matches_full_resort_on_random_sequences() {
        let mut rng = StdRng::seed_from_u64(42);

        for window in [1, 2, 3, 5, 16, 64] {
            let sequence = random_sequence(&mut rng, 500);
            let mut engine = RunningMedian::new(window).unwrap();

            for i in 0..sequence.len() {
                let reported = engine.update(sequence[i]).unwrap();
                let expected = baseline_median(window_of(&sequence[..=i], window));
                assert_eq!(
                    reported, expected,
                    "window {} diverged from resort baseline at step {}",
                    window, i
                );
            }
        }
    }

    #[test]
    fn matches_full_resort_with_heavy_duplicates() {
        let mut rng = StdRng::seed_from_u64(7);

        for window in [2, 3, 8] {
            let sequence = coarse_sequence(&mut rng, 400);
            let mut engine = RunningMedian::new(window).unwrap();

            for i in 0..sequence.len() {
                let reported = engine.update(sequence[i]).unwrap();
                let expected = baseline_median(window_of(&sequence[..=i], window));
                assert_eq!(
                    reported, expected,
                    "duplicate-heavy window {} diverged at step {}",
                    window, i
                );
            }
        }
    }

    #[test]
    fn known_sequence_window_three() {
        let mut engine = RunningMedian::new(3).unwrap();

        let outputs: Vec<f64> = [5.0, 1.0, 3.0, 2.0, 8.0]
            .into_iter()
            .map(|v| engine.update(v).unwrap())
            .collect();

        assert_eq!(outputs, vec![5.0, 3.0, 3.0, 2.0, 3.0]);
    }

    #[test]
    fn repeated_values_after_distinct_fill_reflect_last_window_only() {
        let window = 5;
        let mut engine = RunningMedian::new(window).unwrap();

        for v in [10.0, 20.0, 30.0, 40.0, 50.0] {
            engine.update(v).unwrap();
        }

        let mut last = 0.0;
        for _ in 0..window + 1 {
            last = engine.update(3.0).unwrap();
        }

        assert_eq!(
            last, 3.0,
            "after W+1 identical samples the window must hold only that value"
        );
        assert_eq!(engine.len(), window);
    }

    #[test]
    fn nan_rejection_is_all_or_nothing() {
        let mut engine = RunningMedian::new(3).unwrap();

        engine.update(1.0).unwrap();
        engine.update(9.0).unwrap();

        assert!(engine.update(f64::NAN).is_err());

        // [1, 9, 5] — the rejected sample left no trace
        assert_eq!(engine.update(5.0).unwrap(), 5.0);
    }
}

// ============================================================================
// Running Extremes
// ============================================================================

mod extremes {
    use super::*;

    #[test]
    fn min_matches_full_rescan_on_random_sequences() {
        let mut rng = StdRng::seed_from_u64(123);

        for window in [1, 2, 3, 5, 16, 64] {
            let sequence = random_sequence(&mut rng, 500);
            let mut engine = RunningMin::new(window).unwrap();

            for i in 0..sequence.len() {
                let reported = engine.update(sequence[i]).unwrap();
                let expected = baseline_min(window_of(&sequence[..=i], window));
                assert_eq!(
                    reported, expected,
                    "min window {} diverged from rescan baseline at step {}",
                    window, i
                );
            }
        }
    }

    #[test]
    fn max_matches_full_rescan_on_random_sequences() {
        let mut rng = StdRng::seed_from_u64(456);

        for window in [1, 2, 3, 5, 16, 64] {
            let sequence = random_sequence(&mut rng, 500);
            let mut engine = RunningMax::new(window).unwrap();

            for i in 0..sequence.len() {
                let reported = engine.update(sequence[i]).unwrap();
                let expected = baseline_max(window_of(&sequence[..=i], window));
                assert_eq!(
                    reported, expected,
                    "max window {} diverged from rescan baseline at step {}",
                    window, i
                );
            }
        }
    }

    #[test]
    fn extremes_handle_duplicates() {
        let mut rng = StdRng::seed_from_u64(789);

        for window in [2, 3, 8] {
            let sequence = coarse_sequence(&mut rng, 400);
            let mut min = RunningMin::new(window).unwrap();
            let mut max = RunningMax::new(window).unwrap();

            for i in 0..sequence.len() {
                let current = window_of(&sequence[..=i], window);
                assert_eq!(min.update(sequence[i]).unwrap(), baseline_min(current));
                assert_eq!(max.update(sequence[i]).unwrap(), baseline_max(current));
            }
        }
    }

    #[test]
    fn known_sequence_window_three() {
        let mut engine = RunningMin::new(3).unwrap();

        let outputs: Vec<f64> = [5.0, 1.0, 3.0, 2.0, 8.0]
            .into_iter()
            .map(|v| engine.update(v).unwrap())
            .collect();

        assert_eq!(outputs, vec![5.0, 1.0, 1.0, 1.0, 2.0]);
    }
}

// ============================================================================
// Running Average
// ============================================================================

mod average {
    use super::*;

    #[test]
    fn matches_full_rescan_on_random_sequences() {
        let mut rng = StdRng::seed_from_u64(321);

        for window in [1, 3, 16] {
            let sequence = random_sequence(&mut rng, 300);
            let mut engine = RunningAverage::new(window).unwrap();

            for i in 0..sequence.len() {
                let reported = engine.update(sequence[i]).unwrap();
                let current = window_of(&sequence[..=i], window);
                let expected: f64 = current.iter().sum::<f64>() / current.len() as f64;
                assert!(
                    (reported - expected).abs() < 1e-9,
                    "average window {} diverged at step {}: {} vs {}",
                    window,
                    i,
                    reported,
                    expected
                );
            }
        }
    }
}

// ============================================================================
// Shared engine properties
// ============================================================================

mod engine_properties {
    use super::*;

    fn check_reset_replay<E: WindowAggregate>(mut reset_engine: E, mut fresh_engine: E) {
        let mut rng = StdRng::seed_from_u64(99);
        let prefix = random_sequence(&mut rng, 100);
        let suffix = random_sequence(&mut rng, 100);

        for &v in &prefix {
            reset_engine.update(v).unwrap();
        }
        reset_engine.reset();

        for &v in &suffix {
            let replayed = reset_engine.update(v).unwrap();
            let fresh = fresh_engine.update(v).unwrap();
            assert_eq!(
                replayed, fresh,
                "reset engine diverged from a fresh engine fed the same subsequence"
            );
        }
    }

    #[test]
    fn reset_then_replay_matches_fresh_engine() {
        check_reset_replay(
            RunningMedian::new(7).unwrap(),
            RunningMedian::new(7).unwrap(),
        );
        check_reset_replay(RunningMin::new(7).unwrap(), RunningMin::new(7).unwrap());
        check_reset_replay(RunningMax::new(7).unwrap(), RunningMax::new(7).unwrap());
        check_reset_replay(
            RunningAverage::new(7).unwrap(),
            RunningAverage::new(7).unwrap(),
        );
    }

    fn check_window_one<E: WindowAggregate>(mut engine: E) {
        let mut rng = StdRng::seed_from_u64(11);
        for v in random_sequence(&mut rng, 50) {
            assert_eq!(
                engine.update(v).unwrap(),
                v,
                "window size 1 must track the current sample"
            );
        }
    }

    #[test]
    fn window_size_one_tracks_current_sample() {
        check_window_one(RunningMedian::new(1).unwrap());
        check_window_one(RunningMin::new(1).unwrap());
        check_window_one(RunningMax::new(1).unwrap());
        check_window_one(RunningAverage::new(1).unwrap());
    }

    fn check_len_and_warm_up<E: WindowAggregate>(mut engine: E) {
        assert!(engine.is_empty());
        assert_eq!(engine.current(), None);

        for i in 1..=10 {
            engine.update(i as f64).unwrap();
            assert_eq!(engine.len(), i.min(engine.capacity()));
        }
        assert!(!engine.is_warming_up());
    }

    #[test]
    fn warm_up_length_is_bounded_by_capacity() {
        check_len_and_warm_up(RunningMedian::new(4).unwrap());
        check_len_and_warm_up(RunningMin::new(4).unwrap());
        check_len_and_warm_up(RunningMax::new(4).unwrap());
        check_len_and_warm_up(RunningAverage::new(4).unwrap());
    }
}

// ============================================================================
// Transform adapters
// ============================================================================

mod transform {
    use super::*;

    #[test]
    fn sqrt_stage_rejects_negative_input() {
        assert_eq!(Sqrt.apply(49.0).unwrap(), 7.0);
        assert!(Sqrt.apply(-1e-9).is_err());
    }

    #[test]
    fn windowed_stage_matches_direct_engine() {
        let mut rng = StdRng::seed_from_u64(2024);
        let sequence = random_sequence(&mut rng, 200);

        let stage = WindowedTransform::new(WindowedConfig {
            op: WindowedOp::Median,
            window_size: 9,
        })
        .unwrap();
        let mut engine = RunningMedian::new(9).unwrap();

        for &v in &sequence {
            assert_eq!(stage.apply(v).unwrap(), engine.update(v).unwrap());
        }
    }

    #[test]
    fn stage_survives_concurrent_callers() {
        use std::sync::Arc;

        let stage = Arc::new(
            WindowedTransform::new(WindowedConfig {
                op: WindowedOp::Max,
                window_size: 16,
            })
            .unwrap(),
        );

        let mut handles = Vec::new();
        for seed in 0..8u64 {
            let stage = Arc::clone(&stage);
            handles.push(std::thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                for v in random_sequence(&mut rng, 250) {
                    // Interleaving is arbitrary; every call must still return
                    // a finite aggregate over some 16-sample window
                    let result = stage.apply(v).unwrap();
                    assert!(result.is_finite());
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn stages_share_one_contract() {
        let stages: Vec<Box<dyn Transform>> = vec![
            Box::new(Sqrt),
            Box::new(
                WindowedTransform::new(WindowedConfig {
                    op: WindowedOp::Average,
                    window_size: 4,
                })
                .unwrap(),
            ),
        ];

        for stage in &stages {
            let out = stage.apply(4.0).unwrap();
            assert!(out.is_finite());
            stage.reset();
        }
    }
}
