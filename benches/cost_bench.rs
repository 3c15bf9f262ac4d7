use criterion::*;
use glyphnet::nn::activation::ActivationFunc;
use glyphnet::nn::batch::TrainingBatch;
use glyphnet::nn::cost::{CostFuncOps, NetworkCostFunc};
use glyphnet::nn::layout::NetworkLayout;
use glyphnet::nn::network::NetworkDef;
use glyphnet::nn::params;
use glyphnet::utils::Array2F;
use ndarray_rand::rand_distr::Normal;
use ndarray_rand::RandomExt;

fn criterion_benchmark(c: &mut Criterion) {
    let layout = NetworkLayout::new(vec![256, 64, 10]).unwrap();
    let dist = Normal::new(0.0, 0.5).unwrap();
    let inputs = Array2F::random((64, 256), dist);
    let targets = (0..64).map(|i| i % 10).collect();
    let batch = TrainingBatch::new(inputs, targets).unwrap();

    let network = NetworkDef::new(layout.clone(), ActivationFunc::sigmoid());
    let mut cost = NetworkCostFunc::new(network, &batch, 0.1).unwrap();
    let point = params::random_point(&layout).unwrap();
    let point = point.as_slice().unwrap();
    let mut grad = vec![0.0; cost.dimensions()];

    c.bench_function("cost 256x64x10 evaluate", |b| {
        b.iter(|| cost.evaluate(point).unwrap())
    });

    c.bench_function("cost 256x64x10 derivate", |b| {
        b.iter(|| cost.derivate(&mut grad, point).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
