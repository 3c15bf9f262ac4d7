use crate::utils::{Array2F, GenericResult};

/// A full training batch: one row of features per sample plus the index of
/// each sample's target class.
///
/// Batches are read-only once built. Cost functions borrow one for their
/// whole lifetime, so a single batch can back any number of independently
/// constructed instances, including from different threads.
#[derive(Clone, Debug)]
pub struct TrainingBatch {
    inputs: Array2F,
    targets: Vec<usize>,
}

impl TrainingBatch {
    pub fn new(inputs: Array2F, targets: Vec<usize>) -> GenericResult<Self> {
        if inputs.nrows() != targets.len() {
            return Err(anyhow::anyhow!(
                "Got {} input rows but {} target indices",
                inputs.nrows(),
                targets.len()
            ));
        }
        if targets.is_empty() {
            return Err(anyhow::anyhow!("A batch needs at least one sample"));
        }
        Ok(Self { inputs, targets })
    }

    pub fn inputs(&self) -> &Array2F {
        &self.inputs
    }

    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    pub fn samples_count(&self) -> usize {
        self.targets.len()
    }

    pub fn features_count(&self) -> usize {
        self.inputs.ncols()
    }
}
