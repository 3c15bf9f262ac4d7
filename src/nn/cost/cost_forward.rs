use ndarray::s;

use crate::nn::activation::ActivationFunc;
use crate::utils::Array2F;

/// Everything the forward pass retains for backpropagation: each layer's
/// bias-augmented input activations and the activation derivative at each
/// pre-activation, in layer order.
pub struct ForwardCache {
    pub augmented: Vec<Array2F>,
    pub derivs: Vec<Array2F>,
    pub output: Array2F,
}

/// Bias trick: a constant column of ones in front of the activations, so a
/// single matrix multiply computes both weighted sums and bias offsets.
fn augment(acts: &Array2F) -> Array2F {
    let mut result = Array2F::ones((acts.nrows(), acts.ncols() + 1));
    result.slice_mut(s![.., 1..]).assign(acts);
    result
}

/// Forward the batch through every layer, keeping only the final activations.
pub fn forward(inputs: &Array2F, coefs: &[Array2F], activation: &ActivationFunc) -> Array2F {
    let mut acts = inputs.clone();
    for coef in coefs {
        let pre_acts = augment(&acts).dot(coef);
        acts = pre_acts.mapv(|z| activation.apply(z));
    }
    acts
}

/// Same pass as [`forward`], retaining the intermediates backpropagation
/// reads.
pub fn forward_full(
    inputs: &Array2F,
    coefs: &[Array2F],
    activation: &ActivationFunc,
) -> ForwardCache {
    let mut augmented = Vec::with_capacity(coefs.len());
    let mut derivs = Vec::with_capacity(coefs.len());

    let mut acts = inputs.clone();
    for coef in coefs {
        let aug = augment(&acts);
        let pre_acts = aug.dot(coef);
        augmented.push(aug);
        derivs.push(pre_acts.mapv(|z| activation.derive(z)));
        acts = pre_acts.mapv(|z| activation.apply(z));
    }

    ForwardCache {
        augmented,
        derivs,
        output: acts,
    }
}
