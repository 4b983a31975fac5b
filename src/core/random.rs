use rand::Rng;

/// Uniform index source for car selection. Injectable so tests can pin the
/// selected position instead of patching internals.
pub trait IndexChooser: Send + Sync {
    /// Returns an index in `[0, len)`. Callers must pass a non-zero `len`.
    fn choose(&self, len: usize) -> usize;
}

/// Uniformly random index. Not cryptographic; uniformity is the only
/// guarantee selection needs.
pub struct UniformIndexChooser;

impl IndexChooser for UniformIndexChooser {
    fn choose(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same position. Deterministic wiring for tests.
pub struct FixedIndexChooser(pub usize);

impl IndexChooser for FixedIndexChooser {
    fn choose(&self, _len: usize) -> usize {
        self.0
    }
}
