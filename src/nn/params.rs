//! Codec between the flat parameter vector an optimizer works with and the
//! per-layer coefficient matrices the propagation code works with.
//!
//! The cell order is a contract: matrices in layer order, each matrix in
//! row-major order with its bias row first. `pack_*` and `unpack_*` share it,
//! which makes the two directions exact inverses.

use ndarray_rand::rand_distr::Normal;
use ndarray_rand::RandomExt;

use crate::nn::layout::NetworkLayout;
use crate::utils::{Array1F, Array2F, GenericResult};

/// One zeroed coefficient matrix per layer, shaped from the layout.
pub fn alloc_coefs(layout: &NetworkLayout) -> Vec<Array2F> {
    (0..layout.coefs_count())
        .map(|i| Array2F::zeros(layout.coef_shape(i)))
        .collect()
}

/// Split a flat parameter vector into pre-allocated coefficient matrices.
pub fn unpack_into(
    layout: &NetworkLayout,
    point: &[f64],
    coefs: &mut [Array2F],
) -> GenericResult<()> {
    if point.len() != layout.dimensions_count() {
        return Err(anyhow::anyhow!(
            "Expected a parameter vector of length {}, got {}",
            layout.dimensions_count(),
            point.len()
        ));
    }
    if coefs.len() != layout.coefs_count() {
        return Err(anyhow::anyhow!(
            "Expected {} coefficient matrices, got {}",
            layout.coefs_count(),
            coefs.len()
        ));
    }

    let mut offset = 0;
    for (i, coef) in coefs.iter_mut().enumerate() {
        let shape = layout.coef_shape(i);
        if coef.dim() != shape {
            return Err(anyhow::anyhow!(
                "Coefficient matrix {} has shape {:?}, expected {:?}",
                i,
                coef.dim(),
                shape
            ));
        }
        let len = shape.0 * shape.1;
        for (cell, value) in coef.iter_mut().zip(&point[offset..offset + len]) {
            *cell = *value;
        }
        offset += len;
    }
    Ok(())
}

/// Allocating variant of [`unpack_into`].
pub fn unpack(layout: &NetworkLayout, point: &[f64]) -> GenericResult<Vec<Array2F>> {
    let mut coefs = alloc_coefs(layout);
    unpack_into(layout, point, &mut coefs)?;
    Ok(coefs)
}

/// Write coefficient matrices back into a flat vector. Exact inverse of
/// [`unpack_into`].
pub fn pack_into(layout: &NetworkLayout, coefs: &[Array2F], out: &mut [f64]) -> GenericResult<()> {
    if out.len() != layout.dimensions_count() {
        return Err(anyhow::anyhow!(
            "Expected an output vector of length {}, got {}",
            layout.dimensions_count(),
            out.len()
        ));
    }
    if coefs.len() != layout.coefs_count() {
        return Err(anyhow::anyhow!(
            "Expected {} coefficient matrices, got {}",
            layout.coefs_count(),
            coefs.len()
        ));
    }

    let mut offset = 0;
    for (i, coef) in coefs.iter().enumerate() {
        let shape = layout.coef_shape(i);
        if coef.dim() != shape {
            return Err(anyhow::anyhow!(
                "Coefficient matrix {} has shape {:?}, expected {:?}",
                i,
                coef.dim(),
                shape
            ));
        }
        let len = shape.0 * shape.1;
        for (slot, cell) in out[offset..offset + len].iter_mut().zip(coef.iter()) {
            *slot = *cell;
        }
        offset += len;
    }
    Ok(())
}

/// Allocating variant of [`pack_into`].
pub fn pack(layout: &NetworkLayout, coefs: &[Array2F]) -> GenericResult<Array1F> {
    let mut out = vec![0.0; layout.dimensions_count()];
    pack_into(layout, coefs, &mut out)?;
    Ok(Array1F::from_vec(out))
}

/// Random starting point for an optimizer: weights drawn from a normal whose
/// std dev shrinks as the receiving layer gets wider, bias rows at zero.
pub fn random_point(layout: &NetworkLayout) -> GenericResult<Array1F> {
    let mut coefs = alloc_coefs(layout);
    for (i, coef) in coefs.iter_mut().enumerate() {
        let (rows, cols) = layout.coef_shape(i);
        let std_dev = (cols as f64).powf(-0.5);
        let dist = Normal::new(0.0, std_dev)?;
        *coef = Array2F::random((rows, cols), dist);
        coef.row_mut(0).fill(0.0);
    }
    pack(layout, &coefs)
}
