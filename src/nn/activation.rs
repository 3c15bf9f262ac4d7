/// Elementwise activation applied to layer pre-activations, paired with its
/// derivative. Both functions take the pre-activation value `z`.
///
/// The pair is opaque to the rest of the crate: the cost function applies
/// `apply` going forward and `derive` going backward without knowing which
/// activation it holds. Note that the loss in [`crate::nn::cost`] is only
/// valid when the final layer's activation maps into `(0, 1)`.
#[derive(Clone, Copy, Debug)]
pub struct ActivationFunc {
    apply: fn(f64) -> f64,
    derive: fn(f64) -> f64,
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl ActivationFunc {
    pub fn new(apply: fn(f64) -> f64, derive: fn(f64) -> f64) -> Self {
        Self { apply, derive }
    }

    pub fn sigmoid() -> Self {
        Self {
            apply: sigmoid,
            derive: |z| {
                let s = sigmoid(z);
                s * (1.0 - s)
            },
        }
    }

    pub fn tanh() -> Self {
        Self {
            apply: f64::tanh,
            derive: |z| 1.0 - z.tanh() * z.tanh(),
        }
    }

    pub fn relu() -> Self {
        Self {
            apply: |z| if z >= 0.0 { z } else { 0.0 },
            derive: |z| if z >= 0.0 { 1.0 } else { 0.0 },
        }
    }

    pub fn apply(&self, z: f64) -> f64 {
        (self.apply)(z)
    }

    pub fn derive(&self, z: f64) -> f64 {
        (self.derive)(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid() {
        let act = ActivationFunc::sigmoid();
        assert!((act.apply(0.0) - 0.5).abs() < 1e-12);
        assert!((act.apply(1.0) - 0.7310585786300049).abs() < 1e-12);
        assert!((act.derive(0.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_tanh() {
        let act = ActivationFunc::tanh();
        assert!(act.apply(0.0).abs() < 1e-12);
        assert!((act.derive(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_relu() {
        let act = ActivationFunc::relu();
        assert_eq!(act.apply(-1.5), 0.0);
        assert_eq!(act.apply(1.5), 1.5);
        assert_eq!(act.derive(-1.5), 0.0);
        assert_eq!(act.derive(1.5), 1.0);
    }

    #[test]
    fn test_custom_pair() {
        let act = ActivationFunc::new(|z| z, |_| 1.0);
        assert_eq!(act.apply(3.25), 3.25);
        assert_eq!(act.derive(3.25), 1.0);
    }
}
