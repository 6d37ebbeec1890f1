use criterion::{criterion_group, criterion_main, Criterion};
use tablerp::{errors::InterpError, InterpolationOptions, KernelTable, SplitComplexMatrix, TableInterpolator, TableOrder};

fn kaiser_like_table(neighbors: usize, oversampling: usize) -> Vec<f64>
{
    (0..neighbors * oversampling + 1).map(|i|
    {
        let t = i as f64 / oversampling as f64 - neighbors as f64 / 2.0;
        let u = 2.0 * t / neighbors as f64;
        (4.0 * (1.0 - u * u).max(0.0).sqrt()).exp() / 4.0_f64.exp()
    }).collect()
}

fn build(order: TableOrder, parallel: bool) -> Result<TableInterpolator<f64>, InterpError>
{
    let table = KernelTable::real(6, 1024, kaiser_like_table(6, 1024))?;
    TableInterpolator::new(table, InterpolationOptions::default().with_order(order).with_parallel(parallel))
}

fn run_interp(c: &mut Criterion)
{
    let grid_len = 512;
    let coefficients = SplitComplexMatrix::from_parts(grid_len, 1,
        (0..grid_len).map(|k| (0.1 * k as f64).sin()).collect(),
        (0..grid_len).map(|k| (0.3 * k as f64).cos()).collect()).unwrap();
    let times: Vec<f64> = (0..100_000).map(|m| (m as f64 * 0.618_033_988_7) % grid_len as f64).collect();

    for (name, order, parallel) in [("nearest", TableOrder::Nearest, false), ("linear", TableOrder::Linear, false), ("linear_parallel", TableOrder::Linear, true)]
    {
        let interp = build(order, parallel).unwrap();
        c.bench_function(name, |b| b.iter(|| interp.interpolate(&coefficients, &times).unwrap()));
    }
}

criterion_group!(benches, run_interp);
criterion_main!(benches);
