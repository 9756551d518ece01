//! The pawn-king cache.
//!
//! A big slice of the evaluation depends only on where the pawns and kings
//! stand: the entire pawn-structure pass and the shelter/storm terms around
//! the kings. Those configurations repeat constantly between positions, so
//! the finished numbers are cached under a dedicated pawns-and-kings hash.
//!
//! An entry stores the passed-pawn bitboard for both sides, the structural
//! score as a single White-minus-Black packed value, and each side's
//! shelter/storm safety contribution.

use chess::bitboard::Bitboard;
use std::mem::size_of;

use crate::zobrist::ZHash;

use super::util::S;

#[derive(Copy, Clone, Debug)]
pub struct PawnKingCacheEntry {
    pub hash: ZHash,
    pub passed: Bitboard,
    pub eval: S,
    pub safety: [S; 2],
}

impl Default for PawnKingCacheEntry {
    fn default() -> Self {
        Self {
            hash: ZHash::NULL,
            passed: Bitboard::EMPTY,
            eval: S::default(),
            safety: [S::default(); 2],
        }
    }
}

pub struct PawnKingCache {
    table: Vec<PawnKingCacheEntry>,
    size: usize,
}

impl PawnKingCache {
    /// Create a new table with the requested capacity in megabytes
    pub fn with_capacity(mb_size: usize) -> PawnKingCache {
        let size = (mb_size << 20) / size_of::<PawnKingCacheEntry>();
        let mut table = Vec::with_capacity(size);
        table.resize_with(size, PawnKingCacheEntry::default);

        PawnKingCache { table, size }
    }

    /// Store an entry, evicting whatever lived in its slot
    pub fn store(&mut self, hash: ZHash, passed: Bitboard, eval: S, safety: [S; 2]) {
        let key = hash.key(self.size);
        self.table[key] = PawnKingCacheEntry {
            hash,
            passed,
            eval,
            safety,
        };
    }

    /// Check whether the hash appears in the cache, and return the entry if
    /// so.
    pub fn probe(&self, hash: ZHash) -> Option<PawnKingCacheEntry> {
        let key = hash.key(self.size);

        self.table
            .get(key)
            .filter(|entry| entry.hash == hash)
            .copied()
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
        let mut cache = PawnKingCache::with_capacity(1);
        let hash = ZHash(0xDEADBEEF);
        let passed = Bitboard(0x100000);

        assert!(cache.probe(hash).is_none());

        cache.store(hash, passed, S::new(13, 37), [S::new(1, 2), S::new(3, 4)]);

        let entry = cache.probe(hash).unwrap();
        assert_eq!(entry.passed, passed);
        assert_eq!(entry.eval, S::new(13, 37));
        assert_eq!(entry.safety[1], S::new(3, 4));

        // A different hash mapping to some other slot misses
        assert!(cache.probe(ZHash(0x12345678)).is_none());
    }
}
