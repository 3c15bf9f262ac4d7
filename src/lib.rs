//! Cost and gradient computations for training a fully-connected network of
//! hand-drawn symbol classifiers.
//!
//! The crate exposes a single capability to an optimizer: a
//! [`nn::cost::CostFuncOps`] instance that reports its parameter dimension and
//! answers `evaluate`/`derivate` queries for arbitrary flat parameter vectors.
//! Everything else (layout, activation, packing, the training batch) exists to
//! build that instance.
//!
//! ```
//! use glyphnet::nn::activation::ActivationFunc;
//! use glyphnet::nn::batch::TrainingBatch;
//! use glyphnet::nn::cost::{CostFuncOps, NetworkCostFunc};
//! use glyphnet::nn::layout::NetworkLayout;
//! use glyphnet::nn::network::NetworkDef;
//! use glyphnet::nn::params;
//! use ndarray::array;
//!
//! # fn main() -> glyphnet::utils::GenericResult<()> {
//! let layout = NetworkLayout::new(vec![2, 4, 3])?;
//! let network = NetworkDef::new(layout.clone(), ActivationFunc::sigmoid());
//! let batch = TrainingBatch::new(array![[0.1, 0.9], [0.8, 0.2]], vec![2, 0])?;
//!
//! let mut cost = NetworkCostFunc::new(network, &batch, 0.1)?;
//! let point = params::random_point(&layout)?;
//! let mut gradient = vec![0.0; cost.dimensions()];
//!
//! let loss = cost.evaluate(point.as_slice().unwrap())?;
//! cost.derivate(&mut gradient, point.as_slice().unwrap())?;
//! assert!(loss.is_finite());
//! # Ok(())
//! # }
//! ```

pub mod nn;
pub mod utils;
