use std::hash::{BuildHasher, Hash, Hasher};

/// A value paired with a preset hash, for tests that need to steer keys into
/// chosen buckets deterministically.
#[derive(Debug)]
#[allow(unused)]
pub struct PresetHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> PresetHash<T> {
    #[allow(unused)]
    pub const fn new(hash: u64, value: T) -> PresetHash<T> {
        PresetHash { hash, value }
    }

    #[allow(unused)]
    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for PresetHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl<T: Eq> PartialEq for PresetHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for PresetHash<T> {}

/// A hasher that folds written bytes into its state without any mixing, so a
/// [`PresetHash`] key hashes to exactly its preset value.
#[derive(Debug, Default)]
pub struct TransparentHasher {
    state: u64,
}

impl Hasher for TransparentHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        let mut offset = 0_u64;
        for byte in bytes {
            self.state ^= (*byte as u64) << (offset * 8);
            offset = (offset + 1) % 8;
        }
    }
}

#[derive(Debug, Default)]
pub struct TransparentHasherBuilder;

impl BuildHasher for TransparentHasherBuilder {
    type Hasher = TransparentHasher;

    fn build_hasher(&self) -> Self::Hasher {
        TransparentHasher::default()
    }
}
