use ndarray::{Array, Array1, Array2, Zip};

type F = f64;
pub type ArrayF<D> = Array<F, D>;
pub type Array1F = Array1<F>;
pub type Array2F = Array2<F>;

pub type GenericResult<T> = anyhow::Result<T>;

pub fn arrays_almost_equal<D: ndarray::Dimension>(arr1: &ArrayF<D>, arr2: &ArrayF<D>) -> bool {
    arr1.shape() == arr2.shape() && Zip::from(arr1).and(arr2).all(|a, b| (a - b).abs() < 1e-9)
}
