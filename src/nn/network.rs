use crate::nn::activation::ActivationFunc;
use crate::nn::cost::cost_forward;
use crate::nn::layout::NetworkLayout;
use crate::nn::params;
use crate::utils::{Array2F, GenericResult};

/// Immutable description of a network: the layer widths plus the activation
/// applied after every coefficient multiplication. Built once per network and
/// consumed by the cost function; also the entry point for running a trained
/// parameter vector against new drawings.
#[derive(Clone, Debug)]
pub struct NetworkDef {
    layout: NetworkLayout,
    activation: ActivationFunc,
}

impl NetworkDef {
    pub fn new(layout: NetworkLayout, activation: ActivationFunc) -> Self {
        Self { layout, activation }
    }

    pub fn layout(&self) -> &NetworkLayout {
        &self.layout
    }

    pub fn activation(&self) -> &ActivationFunc {
        &self.activation
    }

    /// Forward **inputs** through the network described by **point** and
    /// return the final per-class responses.
    pub fn eval_batch(&self, point: &[f64], inputs: &Array2F) -> GenericResult<Array2F> {
        if inputs.ncols() != self.layout.in_features() {
            return Err(anyhow::anyhow!(
                "Expected {} features per sample, got {}",
                self.layout.in_features(),
                inputs.ncols()
            ));
        }
        let coefs = params::unpack(&self.layout, point)?;
        Ok(cost_forward::forward(inputs, &coefs, &self.activation))
    }

    /// Index of the strongest response for each sample.
    pub fn classify_batch(&self, point: &[f64], inputs: &Array2F) -> GenericResult<Vec<usize>> {
        let output = self.eval_batch(point, inputs)?;
        let classes = output
            .outer_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .reduce(|acc, val| if val.1 > acc.1 { val } else { acc })
                    .map(|o| o.0)
                    .unwrap_or(0)
            })
            .collect();
        Ok(classes)
    }
}
