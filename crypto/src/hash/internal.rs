use generic_array::GenericArray;
use sha2::digest::{Digest, FixedOutputReset};

pub fn hash<D: Digest, T: AsRef<[u8]>>(in_bytes: T) -> GenericArray<u8, D::OutputSize> {
    let mut hasher = D::new();
    hasher.update(in_bytes);
    hasher.finalize()
}

#[derive(Clone)]
pub struct InternalStreamHasher<D: Digest + FixedOutputReset> {
    hasher: D,
}

impl<D: Digest + FixedOutputReset> InternalStreamHasher<D> {
    pub fn new() -> Self {
        Self { hasher: D::new() }
    }

    pub fn write<T: AsRef<[u8]>>(&mut self, in_bytes: T) {
        Digest::update(&mut self.hasher, in_bytes);
    }

    pub fn reset(&mut self) {
        Digest::reset(&mut self.hasher)
    }

    pub fn finalize(&mut self) -> GenericArray<u8, D::OutputSize> {
        self.hasher.finalize_reset()
    }
}
