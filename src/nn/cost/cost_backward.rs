use std::ops::AddAssign;

use ndarray::s;

use crate::nn::cost::cost_forward::ForwardCache;
use crate::nn::layout::NetworkLayout;
use crate::nn::params;
use crate::utils::{Array2F, GenericResult};

/// Backpropagate through a retained forward pass and write the packed
/// gradient into **grad_out**.
///
/// The output-layer error is `A_k - onehot(target)` with no activation
/// derivative factor: for this loss paired with a (0,1)-ranged activation the
/// two derivative factors cancel exactly. Reinserting the factor would break
/// the pairing.
pub fn backward(
    layout: &NetworkLayout,
    coefs: &[Array2F],
    cache: &ForwardCache,
    targets: &[usize],
    lambda: f64,
    grad_out: &mut [f64],
) -> GenericResult<()> {
    let samples = targets.len() as f64;
    let mut grads = params::alloc_coefs(layout);

    let mut delta = cache.output.clone();
    for (row, &target) in targets.iter().enumerate() {
        delta[(row, target)] -= 1.0;
    }

    for i in (0..coefs.len()).rev() {
        let mut grad = cache.augmented[i].t().dot(&delta) / samples;
        if lambda != 0.0 {
            let penalty = coefs[i].slice(s![1.., ..]).mapv(|w| w * lambda / samples);
            grad.slice_mut(s![1.., ..]).add_assign(&penalty);
        }

        if i > 0 {
            // the bias row of this matrix feeds no unit below, so it carries
            // no error downward
            let back = delta.dot(&coefs[i].slice(s![1.., ..]).t());
            delta = back * &cache.derivs[i - 1];
        }
        grads[i] = grad;
    }

    params::pack_into(layout, &grads, grad_out)
}
