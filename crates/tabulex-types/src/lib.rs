pub mod matrix;

// Re-exports
pub use matrix::{Matrix, MatrixError};
