use ndarray::parallel::prelude::*;
use ndarray::s;

use crate::utils::Array2F;

/// Average two-outcome cross-entropy over the batch.
///
/// Each sample owes `-ln(y)` for its target unit and `-ln(1 - y)` for every
/// other unit. The per-class branch is folded away: sum `ln(1 - y)` over the
/// whole row, then correct for the target unit. Responses saturated at
/// exactly 0 or 1 produce infinities, which are propagated untouched.
///
/// Per-sample terms are computed in parallel; `collect_into_vec` keeps them
/// in sample order and the final sum is sequential, so the result is
/// reproducible.
pub fn batch_loss(output: &Array2F, targets: &[usize]) -> f64 {
    let mut terms = Vec::with_capacity(targets.len());
    output
        .outer_iter()
        .into_par_iter()
        .enumerate()
        .map(|(sample, row)| {
            let y = row[targets[sample]];
            let complements: f64 = row.iter().map(|&v| (1.0 - v).ln()).sum();
            -y.ln() - complements + (1.0 - y).ln()
        })
        .collect_into_vec(&mut terms);

    terms.iter().sum::<f64>() / targets.len() as f64
}

/// L2 penalty over every coefficient except the bias rows, scaled by
/// `lambda / 2N`.
pub fn regularization(coefs: &[Array2F], lambda: f64, samples: usize) -> f64 {
    if lambda == 0.0 {
        return 0.0;
    }
    let squares: f64 = coefs
        .iter()
        .map(|coef| coef.slice(s![1.., ..]).iter().map(|&w| w * w).sum::<f64>())
        .sum();
    lambda / (2.0 * samples as f64) * squares
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_batch_loss_sums_all_units() {
        let output = array![[0.6, 0.7, 0.4]];
        // -ln(0.6) - ln(1 - 0.7) - ln(1 - 0.4)
        let expected = 2.2256240518579173;
        assert!((batch_loss(&output, &[0]) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_batch_loss_averages_samples() {
        let output = array![[0.6, 0.7, 0.4], [0.6, 0.7, 0.4]];
        let single = batch_loss(&output.slice(s![0..1, ..]).to_owned(), &[0]);
        let both = batch_loss(&output, &[0, 0]);
        assert!((single - both).abs() < 1e-12);
    }

    #[test]
    fn test_batch_loss_saturation_is_not_clipped() {
        let output = array![[1.0, 0.5]];
        assert!(batch_loss(&output, &[1]).is_infinite());
    }

    #[test]
    fn test_regularization_skips_bias_row() {
        let coefs = vec![array![[100.0, -100.0], [2.0, 0.0], [0.0, 3.0]]];
        // (2^2 + 3^2) * 0.5 / (2 * 4)
        assert!((regularization(&coefs, 0.5, 4) - 0.8125).abs() < 1e-12);
        assert_eq!(regularization(&coefs, 0.0, 4), 0.0);
    }
}
