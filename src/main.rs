//! Demo harness: trains the network on a synthetic digit-like dataset and
//! showcases a few predictions.
//!
//! Real pixel data comes from an external provider; this binary stands in a
//! provider with procedurally generated 8x8 "glyphs", one blocky stripe
//! pattern per class, so the whole pipeline runs without any files.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use digit_mlp::{
    accuracy, example_prediction, train_with_seed, FitConfig, Matrix, Result, OUTPUT_SIZE,
};

const SIDE: usize = 8;
const FEATURES: usize = SIDE * SIDE;
const EXAMPLES_PER_CLASS: usize = 30;

/// Synthetic stand-in for the dataset provider: class `c` lights up pixel
/// rows `c` through `c + 2` (wrapping), plus noise.
fn synthetic_batch(rng: &mut StdRng) -> (Matrix, Vec<usize>) {
    let total = OUTPUT_SIZE * EXAMPLES_PER_CLASS;
    let labels: Vec<usize> = (0..total).map(|example| example % OUTPUT_SIZE).collect();

    let x = Matrix::from_fn(FEATURES, total, |feature, example| {
        let class = example % OUTPUT_SIZE;
        let pixel_row = feature / SIDE;
        let lit = (pixel_row + OUTPUT_SIZE - class) % OUTPUT_SIZE < 3;
        let base = if lit { 0.85 } else { 0.05 };
        let noise: f32 = rng.gen_range(-0.05..0.05);
        (base + noise).clamp(0.0, 1.0)
    });

    (x, labels)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(17);
    let (train_x, train_labels) = synthetic_batch(&mut rng);
    let (test_x, test_labels) = synthetic_batch(&mut rng);

    let cfg = FitConfig::default();
    log::info!(
        "training on {} examples of {} features, alpha {}, {} iterations",
        train_x.cols(),
        train_x.rows(),
        cfg.alpha,
        cfg.iterations
    );

    let params = train_with_seed(&train_x, &train_labels, &cfg, 0)?;

    let predicted = params.predict(&test_x)?;
    let test_acc = accuracy(&predicted, &test_labels)?;
    println!("test accuracy: {test_acc:.3}");

    for index in [0, 1, 2, 15] {
        let ex = example_prediction(&test_x, &test_labels, index, &params)?;
        println!(
            "example {index}: predicted {} (true {})",
            ex.predicted, ex.label
        );
    }

    #[cfg(feature = "serde")]
    {
        params.save_json("trained_params.json")?;
        println!("saved parameters to trained_params.json");
    }

    Ok(())
}
