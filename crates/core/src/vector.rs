//! Position-wise averaging and pgvector text formatting.

use crate::error::VectorError;
use crate::intent::Embedding;

/// Position-wise arithmetic mean of equal-length vectors.
///
/// Sums are accumulated in `f64` and narrowed once at the end.
///
/// # Errors
/// `Empty` if `vectors` is empty, `DimensionMismatch` if any vector's length
/// differs from the first one's.
pub fn mean_embedding(vectors: &[Embedding]) -> Result<Embedding, VectorError> {
    let first = vectors.first().ok_or(VectorError::Empty)?;
    let dimensions = first.len();
    let mut sums = vec![0.0_f64; dimensions];

    for (index, vector) in vectors.iter().enumerate() {
        if vector.len() != dimensions {
            return Err(VectorError::DimensionMismatch {
                expected: dimensions,
                actual: vector.len(),
                index,
            });
        }
        for (sum, value) in sums.iter_mut().zip(vector) {
            *sum += f64::from(*value);
        }
    }

    #[allow(clippy::cast_precision_loss, reason = "phrase counts are tiny")]
    let count = vectors.len() as f64;
    #[allow(clippy::cast_possible_truncation, reason = "embeddings are stored as f32")]
    let mean = sums.into_iter().map(|sum| (sum / count) as f32).collect();
    Ok(mean)
}

/// Format a vector in pgvector's text input form, e.g. `[1.0,2.5,-3.0]`.
///
/// Components use `Debug` formatting so whole numbers keep their `.0`.
#[must_use]
pub fn format_vector_literal(vector: &[f32]) -> String {
    let components: Vec<String> = vector.iter().map(|v| format!("{v:?}")).collect();
    format!("[{}]", components.join(","))
}
