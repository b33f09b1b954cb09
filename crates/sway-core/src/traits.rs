//! Core abstraction traits.

/// Source of random draws for the initializer and update strategies.
///
/// Injected explicitly as `&mut dyn RandomSource` so that runs are
/// reproducible from a seed and tests can script exact draw sequences.
/// Implementations must be deterministic for a given construction.
pub trait RandomSource {
    /// A draw from the triangular distribution on `[0, 1]` with mode `0.5`.
    fn triangular(&mut self) -> f64;

    /// A uniform draw on `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// A uniform index in `[0, len)`.
    ///
    /// Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn triangular(&mut self) -> f64 {
        (**self).triangular()
    }

    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }

    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn triangular(&mut self) -> f64 {
        (**self).triangular()
    }

    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }

    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}
