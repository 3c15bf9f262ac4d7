pub mod cost_backward;
pub mod cost_forward;
pub mod cost_loss;

use crate::nn::batch::TrainingBatch;
use crate::nn::network::NetworkDef;
use crate::nn::params;
use crate::utils::{Array2F, GenericResult};

/// The optimizer's entire view of the network: a dimension query plus cost
/// and gradient evaluations at arbitrary parameter vectors.
pub trait CostFuncOps {
    /// Length of the parameter vectors this function accepts. Constant for
    /// the instance's lifetime.
    fn dimensions(&self) -> usize;

    /// Scalar training cost at **point**.
    fn evaluate(&mut self, point: &[f64]) -> GenericResult<f64>;

    /// Analytic gradient of [`CostFuncOps::evaluate`] at **point**, written
    /// into **grad_out** (pre-sized to [`CostFuncOps::dimensions`]).
    fn derivate(&mut self, grad_out: &mut [f64], point: &[f64]) -> GenericResult<()>;
}

/// Cross-entropy cost with L2 regularization over a fixed training batch.
///
/// The batch is validated once here, not per call: every target index must
/// name an output unit and the input width must match the layout. Both trait
/// calls overwrite the unpacked-coefficient scratch matrices this instance
/// owns, which is why they take `&mut self` — one instance cannot serve two
/// threads. The batch itself is only ever read, so concurrent callers build
/// one instance each over the same shared batch.
pub struct NetworkCostFunc<'a> {
    network: NetworkDef,
    batch: &'a TrainingBatch,
    lambda: f64,
    coefs: Vec<Array2F>,
}

impl<'a> NetworkCostFunc<'a> {
    pub fn new(network: NetworkDef, batch: &'a TrainingBatch, lambda: f64) -> GenericResult<Self> {
        let layout = network.layout();
        if batch.features_count() != layout.in_features() {
            return Err(anyhow::anyhow!(
                "Batch has {} features per sample, the network takes {}",
                batch.features_count(),
                layout.in_features()
            ));
        }
        let classes = layout.out_classes();
        if let Some(&bad) = batch.targets().iter().find(|&&t| t >= classes) {
            return Err(anyhow::anyhow!(
                "Target index {} is outside the {} output classes",
                bad,
                classes
            ));
        }
        if lambda < 0.0 {
            return Err(anyhow::anyhow!("Regularization lambda can't be negative"));
        }

        let coefs = params::alloc_coefs(layout);
        Ok(Self {
            network,
            batch,
            lambda,
            coefs,
        })
    }

    fn unpack_point(&mut self, point: &[f64]) -> GenericResult<()> {
        params::unpack_into(self.network.layout(), point, &mut self.coefs)
    }
}

impl CostFuncOps for NetworkCostFunc<'_> {
    fn dimensions(&self) -> usize {
        self.network.layout().dimensions_count()
    }

    fn evaluate(&mut self, point: &[f64]) -> GenericResult<f64> {
        self.unpack_point(point)?;
        let output = cost_forward::forward(
            self.batch.inputs(),
            &self.coefs,
            self.network.activation(),
        );
        let loss = cost_loss::batch_loss(&output, self.batch.targets());
        let penalty =
            cost_loss::regularization(&self.coefs, self.lambda, self.batch.samples_count());
        Ok(loss + penalty)
    }

    fn derivate(&mut self, grad_out: &mut [f64], point: &[f64]) -> GenericResult<()> {
        if grad_out.len() != self.dimensions() {
            return Err(anyhow::anyhow!(
                "Expected a gradient buffer of length {}, got {}",
                self.dimensions(),
                grad_out.len()
            ));
        }
        self.unpack_point(point)?;
        let cache = cost_forward::forward_full(
            self.batch.inputs(),
            &self.coefs,
            self.network.activation(),
        );
        cost_backward::backward(
            self.network.layout(),
            &self.coefs,
            &cache,
            self.batch.targets(),
            self.lambda,
            grad_out,
        )
    }
}
