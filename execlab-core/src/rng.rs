//! Deterministic per-path seed derivation.
//!
//! A master seed is expanded into one sub-seed per simulation path via BLAKE3
//! hashing. Derivation is hash-based rather than order-dependent, so the same
//! master seed produces identical paths no matter how many worker threads the
//! simulation runs on or in what order rows complete.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Domain separator so path seeds never collide with other uses of the
/// master seed.
const PATH_DOMAIN: &[u8] = b"execlab.sim.path";

/// Per-path seed derivation from a single master seed.
#[derive(Debug, Clone, Copy)]
pub struct PathSeeds {
    master_seed: u64,
}

impl PathSeeds {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive the deterministic sub-seed for one simulation path.
    pub fn sub_seed(&self, path: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(PATH_DOMAIN);
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(&path.to_le_bytes());
        let hash = hasher.finalize();
        u64::from_le_bytes(hash.as_bytes()[..8].try_into().unwrap())
    }

    /// Seeded generator for one simulation path.
    pub fn rng_for_path(&self, path: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(path))
    }
}
