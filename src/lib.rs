//! A from-scratch two-layer digit classifier.
//!
//! `digit-mlp` implements every arithmetic step of a small dense network —
//! forward propagation, manual backpropagation, and full-batch gradient
//! descent — without an automatic-differentiation framework. It is designed
//! to be easy to read: each stage of the algorithm is its own module and the
//! matrices it produces are plain, inspectable values.
//!
//! # Topology
//!
//! The network shape is fixed by design: an input layer whose size follows
//! the data (784 for 28x28 grayscale digits), one hidden layer of 10 ReLU
//! units, and an output layer of 10 softmax units, one per digit class.
//!
//! # Data layout and shapes
//!
//! - Scalars are `f32`.
//! - Batches are [`Matrix`] values of shape `(features, examples)` — one
//!   column per example. [`data::flatten_and_scale`] adapts a provider's raw
//!   pixel bytes into this layout.
//! - Weights are row-major with shape `(out_dim, in_dim)`; biases are
//!   `(out_dim, 1)` columns broadcast explicitly across the examples axis.
//!
//! # Errors
//!
//! Public entry points validate their inputs and return [`Result`]:
//! incompatible shapes, labels outside the class range, and zero-example
//! batches are configuration errors, never silent NaN.
//!
//! # Quick start
//!
//! ```rust
//! use digit_mlp::{accuracy, train_with_seed, FitConfig, Matrix};
//!
//! # fn main() -> digit_mlp::Result<()> {
//! // Four tiny "images" with four pixels each, one column per example.
//! let x = Matrix::from_vec(
//!     4,
//!     4,
//!     vec![
//!         0.9, 0.1, 0.9, 0.1, //
//!         0.8, 0.2, 0.9, 0.1, //
//!         0.1, 0.9, 0.2, 0.8, //
//!         0.2, 0.9, 0.1, 0.9, //
//!     ],
//! )?;
//! let labels = vec![0, 1, 0, 1];
//!
//! let cfg = FitConfig {
//!     alpha: 0.15,
//!     iterations: 50,
//!     report_every: None,
//! };
//! let params = train_with_seed(&x, &labels, &cfg, 0)?;
//!
//! let predicted = params.predict(&x)?;
//! let _train_acc = accuracy(&predicted, &labels)?;
//! # Ok(())
//! # }
//! ```

pub mod activation;
pub mod backward;
pub mod data;
pub mod encode;
pub mod error;
pub mod forward;
pub(crate) mod matmul;
pub mod matrix;
pub mod optim;
pub mod params;
pub mod predict;
pub mod train;

#[cfg(feature = "serde")]
pub mod serde_model;

pub use activation::{relu, relu_derivative, softmax};
pub use backward::{backward, Gradients};
pub use data::flatten_and_scale;
pub use encode::one_hot;
pub use error::{Error, Result};
pub use forward::ForwardPass;
pub use matrix::Matrix;
pub use optim::{GradientDescent, DEFAULT_ALPHA};
pub use params::{Params, HIDDEN_SIZE, OUTPUT_SIZE};
pub use predict::{accuracy, example_prediction, ExamplePrediction};
pub use train::{train_with_rng, train_with_seed, FitConfig};
