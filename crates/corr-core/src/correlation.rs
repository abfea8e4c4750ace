//! Pairwise Pearson correlation with pairwise-complete missing-value handling.

use corr_model::{InvalidInputError, PairedValues};

/// Coefficient, its square and the number of complete pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Correlation {
    /// `None` when fewer than two pairs remain or either side has zero variance.
    pub r: Option<f64>,
    pub r_squared: Option<f64>,
    pub n: usize,
    /// The pairs `r` was computed from.
    pub pairs: PairedValues,
}

/// Keeps only the rows where both values are present. Nothing is imputed.
pub fn complete_pairs(
    target: &[Option<f64>],
    candidate: &[Option<f64>],
) -> Result<PairedValues, InvalidInputError> {
    if target.len() != candidate.len() {
        return Err(InvalidInputError::LengthMismatch {
            target: target.len(),
            candidate: candidate.len(),
        });
    }
    let mut pairs = PairedValues::default();
    for (t, c) in target.iter().zip(candidate) {
        if let (Some(t), Some(c)) = (t, c) {
            pairs.target.push(*t);
            pairs.candidate.push(*c);
        }
    }
    Ok(pairs)
}

/// Pearson product-moment correlation of two equally long series.
///
/// Returns `None` for fewer than two observations, mismatched lengths, or a
/// series with zero variance. Deviations are scaled by their largest
/// magnitude before summing, so the result holds for values near the limits
/// of `f64`.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n < 2 || n != y.len() || is_constant(x) || is_constant(y) {
        return None;
    }
    let dx = scaled_deviations(x)?;
    let dy = scaled_deviations(y)?;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for (a, b) in dx.iter().zip(&dy) {
        sum_xy += a * b;
        sum_xx += a * a;
        sum_yy += b * b;
    }
    if sum_xx == 0.0 || sum_yy == 0.0 {
        return None;
    }
    let r = sum_xy / (sum_xx.sqrt() * sum_yy.sqrt());
    // Rounding can push a perfect correlation just past +/-1.
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

/// Deviations from the mean divided by the largest absolute deviation.
fn scaled_deviations(values: &[f64]) -> Option<Vec<f64>> {
    // Running mean; a plain sum overflows near f64::MAX.
    let mean = values
        .iter()
        .enumerate()
        .fold(0.0, |mean, (idx, value)| mean + (value - mean) / (idx + 1) as f64);
    let deviations: Vec<f64> = values.iter().map(|value| value - mean).collect();
    let scale = deviations.iter().fold(0.0_f64, |max, d| max.max(d.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return None;
    }
    Some(deviations.into_iter().map(|d| d / scale).collect())
}

// Checked on the raw values: a constant series can still produce tiny
// nonzero deviations once its mean is rounded.
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}

/// Correlates a target column with a candidate column.
pub fn correlate(
    target: &[Option<f64>],
    candidate: &[Option<f64>],
) -> Result<Correlation, InvalidInputError> {
    let pairs = complete_pairs(target, candidate)?;
    let r = pearson(&pairs.target, &pairs.candidate);
    Ok(Correlation {
        r,
        r_squared: r.map(|value| value * value),
        n: pairs.len(),
        pairs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn perfect_negative_correlation() {
        let target = some(&[90.0, 80.0, 70.0, 60.0, 50.0]);
        let candidate = some(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let result = correlate(&target, &candidate).unwrap();
        assert_eq!(result.n, 5);
        assert!((result.r.unwrap() + 1.0).abs() < 1e-12);
        assert!((result.r_squared.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn missing_values_drop_only_their_pair() {
        let target = vec![Some(1.0), None, Some(3.0), Some(4.0)];
        let candidate = vec![Some(2.0), Some(9.0), None, Some(8.0)];
        let result = correlate(&target, &candidate).unwrap();
        assert_eq!(result.n, 2);
        assert_eq!(result.pairs.target, vec![1.0, 4.0]);
        assert_eq!(result.pairs.candidate, vec![2.0, 8.0]);
        assert!((result.r.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fewer_than_two_pairs_is_undefined() {
        let result = correlate(&[Some(1.0), None], &[None, Some(2.0)]).unwrap();
        assert_eq!(result.n, 0);
        assert_eq!(result.r, None);
        assert_eq!(result.r_squared, None);

        let single = correlate(&[Some(1.0), Some(2.0)], &[Some(3.0), None]).unwrap();
        assert_eq!(single.n, 1);
        assert_eq!(single.r, None);
    }

    #[test]
    fn zero_variance_subset_is_undefined() {
        // Candidate varies overall but is constant over the complete pairs.
        let target = vec![Some(1.0), Some(2.0), Some(3.0), None];
        let candidate = vec![Some(0.1), Some(0.1), Some(0.1), Some(5.0)];
        let result = correlate(&target, &candidate).unwrap();
        assert_eq!(result.n, 3);
        assert_eq!(result.r, None);
    }

    #[test]
    fn uncorrelated_series_is_zero_not_undefined() {
        let r = pearson(&[1.0, 2.0, 3.0], &[1.0, 0.0, 1.0]).unwrap();
        assert_eq!(r, 0.0);
    }

    #[test]
    fn extreme_magnitudes_keep_perfect_correlation() {
        for scale in [1e152, 1e300, 1e-170, 1e-300] {
            let x: Vec<Option<f64>> = [1.0, 2.0, 3.0, 4.0].map(|v| Some(v * scale)).to_vec();
            let result = correlate(&x, &x).unwrap();
            assert_eq!(result.n, 4);
            let r = result.r.unwrap();
            assert!((r - 1.0).abs() < 1e-12, "scale {scale}: r = {r}");
        }
    }

    #[test]
    fn large_negative_correlation_is_not_flattened() {
        let x = [1e152, 2e152, 3e152, 4e152];
        let y = [4e-170, 3e-170, 2e-170, 1e-170];
        let r = pearson(&x, &y).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = correlate(&[Some(1.0)], &[Some(1.0), Some(2.0)]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::LengthMismatch {
                target: 1,
                candidate: 2
            }
        );
    }
}
