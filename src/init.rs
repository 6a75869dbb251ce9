use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::StandardNormal;

/// Samples a weight matrix from `N(0, 1) * std_dev`.
///
/// # Arguments
/// * `dim` - The shape of the weights, (D, C).
/// * `std_dev` - The scale of the samples, small values such as `1e-4` keep every margin near
///   the hinge's linear region.
/// * `rng` - The random number generator.
///
/// # Returns
/// A new (D, C) weight matrix.
pub fn random_weights<R: Rng>(dim: (usize, usize), std_dev: f64, rng: &mut R) -> Array2<f64> {
    let w: Array2<f64> = Array2::random_using(dim, StandardNormal, rng);
    w * std_dev
}

#[cfg(test)]
mod test {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_shape_and_scale() {
        let mut rng = StdRng::seed_from_u64(1);
        let w = random_weights((50, 10), 1e-4, &mut rng);

        assert_eq!(w.dim(), (50, 10));
        assert!(w.iter().all(|v| v.abs() < 1e-2));
        assert!(w.iter().any(|&v| v != 0.0));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = random_weights((4, 3), 1.0, &mut StdRng::seed_from_u64(9));
        let b = random_weights((4, 3), 1.0, &mut StdRng::seed_from_u64(9));

        assert_eq!(a, b);
    }
}
