use tablerp::{InterpolationOptions, KernelTable, SplitComplexMatrix, TableInterpolator, TableOrder};

/// Resamples a pure tone given on a 32 point periodic grid at a few off-grid times.
fn tone_example()
{
    let neighbors = 6;
    let oversampling = 256;
    let window: Vec<f64> = (0..neighbors * oversampling + 1).map(|i|
    {
        let t = i as f64 / oversampling as f64 - neighbors as f64 / 2.0;
        let c = (std::f64::consts::PI * t / neighbors as f64).cos();
        c * c * 2.0 / neighbors as f64
    }).collect();
    let table = KernelTable::real(neighbors, oversampling, window).unwrap();
    let interp = TableInterpolator::new(table, InterpolationOptions::default().with_order(TableOrder::Linear)).unwrap();

    let grid_len = 32;
    let phase = |t: f64| 2.0 * std::f64::consts::PI * t / grid_len as f64;
    let coefficients = SplitComplexMatrix::column_vector(
        (0..grid_len).map(|k| phase(k as f64).cos()).collect(),
        (0..grid_len).map(|k| phase(k as f64).sin()).collect()).unwrap();
    let times = [0.5, 7.25, 31.9, 40.1];
    let result = interp.interpolate(&coefficients, &times).unwrap();
    for (m, t) in times.iter().enumerate()
    {
        let (re, im) = result.get(m, 0);
        println!("t = {t:>5}: interpolated = ({re:.4}, {im:.4}), tone = ({:.4}, {:.4})", phase(*t).cos(), phase(*t).sin());
    }
}

fn main()
{
    tone_example();
}
