//! The evaluation cache.
//!
//! Stores finished evaluations keyed by the full position hash, so that
//! transpositions back into an already-scored position skip the whole
//! pipeline. Separate from any transposition table the search might keep:
//! entries here are tiny (hash plus a 16-bit score) and never interact with
//! search bounds.
//!
//! Scores are stored relative to White, before the tempo bonus, so a hit can
//! be handed out to either side to move.

use std::mem::size_of;

use crate::zobrist::ZHash;

use super::util::Score;

#[derive(Copy, Clone, Debug, Default)]
pub struct EvalCacheEntry {
    hash: ZHash,
    eval: i16,
}

pub struct EvalCache {
    table: Vec<EvalCacheEntry>,
    size: usize,
}

impl EvalCache {
    /// Create a new table with the requested capacity in megabytes
    pub fn with_capacity(mb_size: usize) -> EvalCache {
        let size = (mb_size << 20) / size_of::<EvalCacheEntry>();
        let mut table = Vec::with_capacity(size);
        table.resize_with(size, EvalCacheEntry::default);

        EvalCache { table, size }
    }

    /// Store a White-relative evaluation, evicting whatever lived in its
    /// slot
    pub fn store(&mut self, hash: ZHash, eval: Score) {
        let key = hash.key(self.size);
        self.table[key] = EvalCacheEntry {
            hash,
            eval: eval as i16,
        };
    }

    /// Look up the White-relative evaluation for a position
    pub fn probe(&self, hash: ZHash) -> Option<Score> {
        let key = hash.key(self.size);

        self.table
            .get(key)
            .filter(|entry| entry.hash == hash)
            .map(|entry| entry.eval as Score)
    }
}

////////////////////////////////////////////////////////////////////////////////
//
// Tests
//
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_probe() {
        let mut cache = EvalCache::with_capacity(1);
        let hash = ZHash(0xCAFEBABE);

        assert_eq!(cache.probe(hash), None);

        cache.store(hash, -412);
        assert_eq!(cache.probe(hash), Some(-412));

        // Colliding slots get evicted, not chained
        cache.store(hash, 31);
        assert_eq!(cache.probe(hash), Some(31));
    }
}
