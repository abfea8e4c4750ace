//! Property tests for the correlation engine and aggregator.

use proptest::prelude::*;

use corr_core::{correlate, pearson, relationship::classify, run_analysis, strength_of};
use corr_model::{AnalysisOptions, Column, Dataset, ExclusionReason, Strength};

fn finite() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn optional_series(len: usize) -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::weighted(0.8, finite()), len)
}

proptest! {
    #[test]
    fn constant_candidate_is_never_eligible(
        target in prop::collection::vec(finite(), 3..20),
        constant in finite(),
    ) {
        prop_assume!(target.windows(2).any(|pair| pair[0] != pair[1]));
        let rows = target.len();
        let dataset = Dataset::new(vec![
            Column::numeric("Y", target.into_iter().map(Some)),
            Column::numeric("Flat", std::iter::repeat_n(Some(constant), rows)),
            Column::numeric("Other", (0..rows).map(|i| Some(i as f64 * 0.5 + 1.0))),
        ])
        .unwrap();

        let run = run_analysis(&dataset, "Y", &AnalysisOptions::default()).unwrap();
        prop_assert!(run.result("Flat").is_none());
        prop_assert!(run
            .excluded
            .iter()
            .any(|e| e.name == "Flat" && e.reason == ExclusionReason::Constant));
    }

    #[test]
    fn fewer_than_two_pairs_is_never_zero(
        value_a in finite(),
        value_b in finite(),
        len in 2usize..10,
        overlap_at in 0usize..10,
    ) {
        // At most one row where both sides are present.
        let overlap_at = overlap_at % len;
        let target: Vec<Option<f64>> = (0..len)
            .map(|i| (i == overlap_at || i % 2 == 0).then_some(value_a + i as f64))
            .collect();
        let candidate: Vec<Option<f64>> = (0..len)
            .map(|i| {
                let present = i == overlap_at || (i % 2 == 1 && target[i].is_none());
                present.then_some(value_b - i as f64)
            })
            .collect();
        let result = correlate(&target, &candidate).unwrap();
        prop_assert!(result.n < 2);
        prop_assert_eq!(result.r, None);
        prop_assert_eq!(classify(result.r).strength, Strength::Indeterminate);
    }

    #[test]
    fn strength_is_monotonic_in_magnitude(a in -1.0..=1.0f64, b in -1.0..=1.0f64) {
        let (low, high) = if a.abs() <= b.abs() { (a, b) } else { (b, a) };
        prop_assert!(strength_of(low) <= strength_of(high));
    }

    #[test]
    fn pearson_is_symmetric(pairs in prop::collection::vec((finite(), finite()), 0..30)) {
        let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        prop_assert_eq!(pearson(&x, &y), pearson(&y, &x));
    }

    #[test]
    fn correlate_is_symmetric_with_missing_values(
        (target, candidate) in (2usize..25).prop_flat_map(|len| (optional_series(len), optional_series(len)))
    ) {
        let forward = correlate(&target, &candidate).unwrap();
        let backward = correlate(&candidate, &target).unwrap();
        prop_assert_eq!(forward.n, backward.n);
        prop_assert_eq!(forward.r, backward.r);
    }

    #[test]
    fn coefficient_stays_in_range(pairs in prop::collection::vec((finite(), finite()), 2..30)) {
        let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        if let Some(r) = pearson(&x, &y) {
            prop_assert!((-1.0..=1.0).contains(&r));
        }
    }

    #[test]
    fn coefficient_ignores_magnitude(
        pairs in prop::collection::vec((-1000i32..1000, -1000i32..1000), 3..20),
        x_exponent in -160i32..150,
        y_exponent in -160i32..150,
    ) {
        let (x, y): (Vec<f64>, Vec<f64>) = pairs
            .into_iter()
            .map(|(a, b)| (f64::from(a), f64::from(b)))
            .unzip();
        let scale_x = 10f64.powi(x_exponent);
        let scale_y = 10f64.powi(y_exponent);
        let scaled_x: Vec<f64> = x.iter().map(|v| v * scale_x).collect();
        let scaled_y: Vec<f64> = y.iter().map(|v| v * scale_y).collect();

        match (pearson(&x, &y), pearson(&scaled_x, &scaled_y)) {
            (Some(plain), Some(scaled)) => prop_assert!((plain - scaled).abs() < 1e-9),
            (plain, scaled) => prop_assert_eq!(plain, scaled),
        }
    }

    #[test]
    fn ordering_ignores_candidate_input_order(
        slopes in prop::collection::btree_set(1u32..1000, 2..6),
        shuffle_seed in any::<u64>(),
    ) {
        // Noise scaled per candidate gives each a distinct |r|.
        let target: Vec<f64> = (0..12).map(f64::from).collect();
        let noise = [3.0, -1.0, 4.0, -1.0, 5.0, -9.0, 2.0, -6.0, 5.0, -3.0, 5.0, -8.0];
        let mut columns: Vec<Column> = slopes
            .iter()
            .enumerate()
            .map(|(idx, scale)| {
                let weight = f64::from(*scale) / 100.0;
                let sign = if idx % 2 == 0 { 1.0 } else { -1.0 };
                Column::numeric(
                    format!("c{scale}"),
                    target
                        .iter()
                        .zip(noise)
                        .map(|(t, n)| Some(sign * t + weight * n)),
                )
            })
            .collect();

        let build = |columns: Vec<Column>| {
            let mut all = vec![Column::numeric("Y", target.iter().copied().map(Some))];
            all.extend(columns);
            let dataset = Dataset::new(all).unwrap();
            run_analysis(&dataset, "Y", &AnalysisOptions::default())
                .unwrap()
                .results
                .into_iter()
                .map(|r| r.candidate)
                .collect::<Vec<_>>()
        };

        let original = build(columns.clone());
        // Deterministic Fisher-Yates driven by the seed.
        let mut state = shuffle_seed | 1;
        for i in (1..columns.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let j = (state % (i as u64 + 1)) as usize;
            columns.swap(i, j);
        }
        let shuffled = build(columns);
        prop_assert_eq!(original, shuffled);
    }
}
