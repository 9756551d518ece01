//! The per-search-thread scratch the evaluator works against.
//!
//! The evaluation itself is a pure function of the board, but it leans on
//! thread-local context for two things: the caches, and the stack of moves
//! and evaluations leading to the current node (for the null-move shortcut).
//! Each search thread owns one of these; nothing here is shared, so there is
//! no locking anywhere.

use crate::evaluate::eval_cache::EvalCache;
use crate::evaluate::kp_cache::PawnKingCache;
use crate::evaluate::Score;
use arrayvec::ArrayVec;
use chess::moves::Move;

/// The deepest stack of moves a search would ever push
pub const MAX_PLY: usize = 128;

pub struct Thread {
    /// Finished evaluations, keyed by position
    pub eval_cache: EvalCache,

    /// Pawn- and king-dependent partial results, keyed by pawn structure
    pub pk_cache: PawnKingCache,

    /// The moves played from the root to the current node
    moves: ArrayVec<Move, MAX_PLY>,

    /// The static evaluations at each of those nodes
    evals: ArrayVec<Score, MAX_PLY>,
}

impl Thread {
    pub const EVAL_CACHE_MB: usize = 2;
    pub const PK_CACHE_MB: usize = 1;

    pub fn new() -> Self {
        Self {
            eval_cache: EvalCache::with_capacity(Self::EVAL_CACHE_MB),
            pk_cache: PawnKingCache::with_capacity(Self::PK_CACHE_MB),
            moves: ArrayVec::new(),
            evals: ArrayVec::new(),
        }
    }

    /// Record a move being played, along with the static evaluation of the
    /// node it was played in.
    pub fn push_move(&mut self, mv: Move, eval: Score) {
        self.moves.push(mv);
        self.evals.push(eval);
    }

    /// Unwind the most recent move.
    pub fn pop_move(&mut self) {
        self.moves.pop();
        self.evals.pop();
    }

    /// The move that led to the current node, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// The static evaluation of the parent node, if any.
    pub fn last_eval(&self) -> Option<Score> {
        self.evals.last().copied()
    }
}

impl Default for Thread {
    fn default() -> Self {
        Self::new()
    }
}
