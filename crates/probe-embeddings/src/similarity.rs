//! Vector similarity functions.
//!
//! Every function checks operand lengths and returns
//! [`VectorError::DimensionMismatch`] instead of panicking.

use crate::error::VectorError;

fn check_dimensions(a: &[f64], b: &[f64]) -> Result<(), VectorError> {
    if a.len() != b.len() {
        return Err(VectorError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Calculate cosine similarity between two vectors.
///
/// Returns `dot(a, b) / (|a| * |b|)`. The result is not clamped, so rounding
/// can land marginally outside [-1.0, 1.0].
///
/// # Errors
/// - [`VectorError::DimensionMismatch`] if the lengths differ
/// - [`VectorError::DegenerateVector`] if either vector has zero magnitude
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, VectorError> {
    check_dimensions(a, b)?;

    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(VectorError::DegenerateVector);
    }

    Ok(dot_product / (norm_a * norm_b))
}

/// Calculate the Euclidean distance between two vectors.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64, VectorError> {
    check_dimensions(a, b)?;

    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum();

    Ok(sum.sqrt())
}

/// Componentwise `a - b + c`, the analogy offset vector.
pub fn subtract_add(a: &[f64], b: &[f64], c: &[f64]) -> Result<Vec<f64>, VectorError> {
    check_dimensions(a, b)?;
    check_dimensions(b, c)?;

    Ok(a.iter()
        .zip(b.iter())
        .zip(c.iter())
        .map(|((x, y), z)| x - y + z)
        .collect())
}
