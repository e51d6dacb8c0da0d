//! Vector Arithmetic
//!
//! Dense `f64` helpers shared by the store and the embedding operations.

/// Compute dot product of two vectors
///
/// Uses unrolled loop for better CPU performance.
#[inline]
pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");

    let len = a.len().min(b.len());
    let mut sum = 0.0f64;

    // Process 4 elements at a time (manual unrolling)
    let chunks = len / 4;
    let remainder = len % 4;

    for i in 0..chunks {
        let idx = i * 4;
        sum += a[idx] * b[idx];
        sum += a[idx + 1] * b[idx + 1];
        sum += a[idx + 2] * b[idx + 2];
        sum += a[idx + 3] * b[idx + 3];
    }

    for i in (len - remainder)..len {
        sum += a[i] * b[i];
    }

    sum
}

/// Euclidean length, `sqrt(v · v)`
#[inline]
pub fn l2_norm(v: &[f64]) -> f64 {
    dot_product(v, v).sqrt()
}

/// Cosine similarity from precomputed norms
///
/// Not clamped to [-1, 1]. Callers guard against zero norms.
#[inline]
pub fn cosine_with_norms(a: &[f64], b: &[f64], norm_a: f64, norm_b: f64) -> f64 {
    dot_product(a, b) / (norm_a * norm_b)
}

/// `acc += v`, elementwise
#[inline]
pub fn add_assign(acc: &mut [f64], v: &[f64]) {
    debug_assert_eq!(acc.len(), v.len(), "Vector dimensions must match");
    for (a, x) in acc.iter_mut().zip(v) {
        *a += x;
    }
}

/// `v *= factor`, elementwise
#[inline]
pub fn scale(v: &mut [f64], factor: f64) {
    for x in v.iter_mut() {
        *x *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_product() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        assert!((dot_product(&a, &b) - 32.0).abs() < 1e-12);
    }

    #[test]
    fn test_dot_product_unrolled_with_remainder() {
        let a: Vec<f64> = (1..=7).map(f64::from).collect();
        let b = vec![1.0; 7];
        assert!((dot_product(&a, &b) - 28.0).abs() < 1e-12);
    }

    #[test]
    fn test_l2_norm() {
        assert!((l2_norm(&[3.0, 4.0, 0.0]) - 5.0).abs() < 1e-12);
        assert_eq!(l2_norm(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_cosine_identical() {
        let a = [1.0, 2.0, 3.0];
        let n = l2_norm(&a);
        assert!((cosine_with_norms(&a, &a, n, n) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_orthogonal_and_opposite() {
        let a = [1.0, 0.0, 0.0];
        let b = [0.0, 1.0, 0.0];
        let c = [-1.0, 0.0, 0.0];
        assert!(cosine_with_norms(&a, &b, 1.0, 1.0).abs() < 1e-12);
        assert!((cosine_with_norms(&a, &c, 1.0, 1.0) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_add_and_scale() {
        let mut acc = vec![0.0; 3];
        add_assign(&mut acc, &[1.0, 2.0, 3.0]);
        add_assign(&mut acc, &[1.0, 2.0, 3.0]);
        scale(&mut acc, 0.5);
        assert_eq!(acc, vec![1.0, 2.0, 3.0]);
    }
}
