use crate::utils::GenericResult;

/// Widths of every layer in a fully-connected network, input layer first.
/// Widths count real units only; the bias unit each layer feeds forward is
/// implicit and shows up as the extra row in [`NetworkLayout::coef_shape`].
///
/// A layout is immutable once built, so every shape derived from it stays
/// valid for the lifetime of whatever holds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkLayout {
    widths: Vec<usize>,
}

impl NetworkLayout {
    pub fn new(widths: Vec<usize>) -> GenericResult<Self> {
        if widths.len() < 2 {
            return Err(anyhow::anyhow!(
                "A network needs at least an input and an output layer, got {} widths",
                widths.len()
            ));
        }
        if let Some(pos) = widths.iter().position(|&w| w == 0) {
            return Err(anyhow::anyhow!("Layer {} has zero width", pos));
        }
        Ok(Self { widths })
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn in_features(&self) -> usize {
        self.widths[0]
    }

    pub fn out_classes(&self) -> usize {
        self.widths[self.widths.len() - 1]
    }

    /// Number of coefficient matrices, one per pair of adjacent layers.
    pub fn coefs_count(&self) -> usize {
        self.widths.len() - 1
    }

    /// Shape of coefficient matrix `i`: one row per feeding unit plus the
    /// bias row (row 0), one column per receiving unit.
    pub fn coef_shape(&self, i: usize) -> (usize, usize) {
        (self.widths[i] + 1, self.widths[i + 1])
    }

    /// Length of the flat parameter vector that stores every coefficient
    /// matrix of this layout.
    pub fn dimensions_count(&self) -> usize {
        (0..self.coefs_count())
            .map(|i| {
                let (rows, cols) = self.coef_shape(i);
                rows * cols
            })
            .sum()
    }
}
