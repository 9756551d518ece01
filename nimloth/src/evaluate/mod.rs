//! Assign a static score to a given board position.
//!
//! Since it's impractical to search the entire game tree till the end and see
//! who wins, the search has to stop somewhere and put a number on the
//! position it is looking at. That number is produced here, by summing a few
//! dozen hand-crafted terms over the board: material and piece placement,
//! pawn structure, piece activity, king safety, threats and space.
//!
//! ## Tapered evaluation
//! Each term carries two values, one for the middlegame and one for the
//! endgame, packed together in a single [S]. The final score interpolates
//! between the two halves by the amount of material left on the board, with
//! the endgame half additionally scaled down in drawish material
//! constellations.
//!
//! ## Caching
//! Two caches keep repeated work down. The pawn-king cache stores everything
//! that depends only on the pawns and kings (most of the pawn structure and
//! the king shelter), keyed by a dedicated hash. The evaluation cache stores
//! the finished score for the full position. Both live on the per-search
//! [Thread](crate::thread::Thread) scratch, and neither changes any returned
//! value; a cache hit and a cold computation are bit-for-bit identical.

mod lookups;
pub mod eval_cache;
pub mod kp_cache;
pub mod params;
pub mod psqt;
pub mod terms;
pub mod util;

use crate::thread::Thread;
use crate::zobrist::ZHash;
use chess::bitboard::Bitboard;
use chess::board::Board;
use chess::moves::Move;
use chess::piece::Color;
use chess::piece::Color::*;
use chess::piece::PieceType;
use chess::piece::PieceType::*;
use chess::square::Square;
use lookups::KING_AREAS;
use params::*;
pub use util::*;

// Helper consts to make generic parameters more readable.
const WHITE: bool = true;
const BLACK: bool = false;

////////////////////////////////////////////////////////////////////////////////
//
// Top-level evaluation
//
////////////////////////////////////////////////////////////////////////////////

/// Evaluate a board position, returning a score in centipawns from the
/// side-to-move's point of view.
///
/// The returned value satisfies a couple of identities the search leans on:
/// evaluating the same position twice gives the same answer (with or without
/// cache hits in between), and after a null move the new evaluation is
/// exactly `-previous + 2 * TEMPO`.
pub fn evaluate(thread: &mut Thread, board: &Board) -> Score {
    // A position reached by a null move is the same position with the other
    // side to move; reuse the parent's evaluation wholesale.
    if thread.last_move() == Some(Move::NULL) {
        if let Some(previous) = thread.last_eval() {
            return -previous + 2 * TEMPO;
        }
    }

    let hash = ZHash::from(board);

    // Check for this evaluation being cached already
    if let Some(cached) = thread.eval_cache.probe(hash) {
        return TEMPO + if board.current.is_white() { cached } else { -cached };
    }

    let mut ei = EvalInfo::new(thread, board);
    let mut eval = ei.evaluate_pieces(board);

    let pkeval = ei.pk_eval[White] - ei.pk_eval[Black];
    eval += pkeval + psqt::psqt_material(board);
    eval += ei.closedness(board);
    eval += complexity(board, eval);

    // The game phase, by remaining material (the Fruit method)
    let phase = game_phase(board);

    // Scale the endgame half based on remaining material
    let factor = scale_factor(board, eval);

    // Interpolate between the midgame and endgame halves
    let scored =
        (eval.mg() * (256 - phase) + eval.eg() * phase * factor / SCALE_NORMAL) / 256;

    // Cache the White-relative score, and store a fresh pawn-king entry if
    // we did not have one
    thread.eval_cache.store(hash, scored);

    if !ei.pk_hit {
        thread.pk_cache.store(
            ei.pk_hash,
            ei.passed_pawns,
            pkeval,
            ei.pk_safety,
        );
    }

    // Factor in the tempo after interpolation and scaling, so that a null
    // move relates the parent and child evaluations exactly
    TEMPO + if board.current.is_white() { scored } else { -scored }
}

/// The game phase as a value in [0, 256], with 0 a full board and 256 a bare
/// king-and-pawn endgame.
pub fn game_phase(board: &Board) -> Score {
    let phase = 24
        - 4 * board.piece_bbs[Queen].count() as Score
        - 2 * board.piece_bbs[Rook].count() as Score
        - (board.piece_bbs[Knight] | board.piece_bbs[Bishop]).count() as Score;

    // More than the startpos complement of pieces (promotions) counts as
    // phase zero
    (phase.max(0) * 256 + 12) / 24
}

////////////////////////////////////////////////////////////////////////////////
//
// Evaluation scratch
//
////////////////////////////////////////////////////////////////////////////////

/// Shared scratch space for a single evaluation call.
///
/// Populated front-up with everything derivable from the pawns and kings
/// alone, then grown by the piece passes as they compute their attack maps.
/// The king safety pass reads the totals. Rebuilt from scratch on every
/// call, so no stale state can leak between evaluations.
pub struct EvalInfo {
    /// Squares attacked by at least one pawn of the side
    pub pawn_attacks: [Bitboard; Color::COUNT],

    /// Squares attacked by two pawns of the side at once
    pub pawn_attacks_by2: [Bitboard; Color::COUNT],

    /// The side's pawns that are blocked by an enemy pawn head-on
    pub rammed_pawns: [Bitboard; Color::COUNT],

    /// The side's pawns with any piece at all in front of them
    pub blocked_pawns: [Bitboard; Color::COUNT],

    pub king_square: [Square; Color::COUNT],

    /// The ring around each king, see [KING_AREAS]
    pub king_areas: [Bitboard; Color::COUNT],

    /// Squares the side's pieces may move to without being harassed by
    /// pawns or tripping over their own king or blocked pawns
    pub mobility_areas: [Bitboard; Color::COUNT],

    /// Union of all squares attacked by the side
    pub attacked: [Bitboard; Color::COUNT],

    /// Squares attacked at least twice by the side
    pub attacked_by2: [Bitboard; Color::COUNT],

    /// Attack maps per piece type
    pub attacked_by: [[Bitboard; PieceType::COUNT]; Color::COUNT],

    /// Occupancy with the side's own bishops and queens removed, letting
    /// bishops x-ray through each other for mobility
    pub occupied_minus_bishops: [Bitboard; Color::COUNT],

    /// Occupancy with the side's own rooks and queens removed
    pub occupied_minus_rooks: [Bitboard; Color::COUNT],

    /// Number of attacked squares in the side's king area, weighted by
    /// multiplicity
    pub king_attacks_count: [i32; Color::COUNT],

    /// Number of distinct enemy pieces attacking the side's king area
    pub king_attackers_count: [i32; Color::COUNT],

    /// Summed safety weights of those attackers
    pub king_attackers_weight: [S; Color::COUNT],

    /// All passed pawns of both sides
    pub passed_pawns: Bitboard,

    /// The pawn-king structural score. By cache layout convention the whole
    /// White-minus-Black score lives in the White slot; the Black slot stays
    /// zero.
    pub pk_eval: [S; Color::COUNT],

    /// The shelter/storm contribution to each side's king safety
    pub pk_safety: [S; Color::COUNT],

    /// The pawn-king hash of the position, and whether it hit the cache
    pub pk_hash: ZHash,
    pub pk_hit: bool,
}

impl EvalInfo {
    /// Gather the board-derived bitboards and consult the pawn-king cache.
    pub fn new(thread: &Thread, board: &Board) -> Self {
        let white = board.occupied_by(White);
        let black = board.occupied_by(Black);
        let occupied = white | black;

        let white_pawns = board.pawns(White);
        let black_pawns = board.pawns(Black);

        let diag_sliders = board.piece_bbs[Bishop] | board.piece_bbs[Queen];
        let hv_sliders = board.piece_bbs[Rook] | board.piece_bbs[Queen];

        let pawn_attacks = [
            white_pawns.pawn_attacks::<WHITE>(),
            black_pawns.pawn_attacks::<BLACK>(),
        ];
        let pawn_attacks_by2 = [
            white_pawns.pawn_attacks_by2::<WHITE>(),
            black_pawns.pawn_attacks_by2::<BLACK>(),
        ];

        let king_square = [board.kings(White).lsb(), board.kings(Black).lsb()];
        let king_attacks = [
            king_square[White].king_squares(),
            king_square[Black].king_squares(),
        ];

        let blocked_pawns = [
            white_pawns & occupied.down(),
            black_pawns & occupied.up(),
        ];

        // Try to read a cached pawn-king entry. Otherwise, start from
        // scratch.
        let pk_hash = ZHash::pawn_king(board);
        let pk_entry = thread.pk_cache.probe(pk_hash);

        let mut ei = Self {
            pawn_attacks,
            pawn_attacks_by2,
            rammed_pawns: [
                white_pawns & black_pawns.down(),
                black_pawns & white_pawns.up(),
            ],
            blocked_pawns,
            king_square,
            king_areas: [
                KING_AREAS[king_square[White] as usize],
                KING_AREAS[king_square[Black] as usize],
            ],
            // Exclude squares attacked by enemy pawns, our blocked pawns,
            // and our own king
            mobility_areas: [
                !(pawn_attacks[Black] | board.kings(White) | blocked_pawns[White]),
                !(pawn_attacks[White] | board.kings(Black) | blocked_pawns[Black]),
            ],
            // Resolving the king attacks here lets the pawn pass start
            // populating the attacked-twice map right away
            attacked: king_attacks,
            attacked_by2: [Bitboard::EMPTY; 2],
            attacked_by: [[Bitboard::EMPTY; PieceType::COUNT]; 2],
            occupied_minus_bishops: [
                occupied ^ (white & diag_sliders),
                occupied ^ (black & diag_sliders),
            ],
            occupied_minus_rooks: [
                occupied ^ (white & hv_sliders),
                occupied ^ (black & hv_sliders),
            ],
            king_attacks_count: [0; 2],
            king_attackers_count: [0; 2],
            king_attackers_weight: [S::default(); 2],
            passed_pawns: pk_entry.map_or(Bitboard::EMPTY, |e| e.passed),
            pk_eval: [pk_entry.map_or(S::default(), |e| e.eval), S::default()],
            pk_safety: pk_entry.map_or([S::default(); 2], |e| e.safety),
            pk_hash,
            pk_hit: pk_entry.is_some(),
        };

        ei.attacked_by[White][King] = king_attacks[White];
        ei.attacked_by[Black][King] = king_attacks[Black];

        ei
    }

    /// Run all per-piece passes for both sides, in dependency order.
    pub fn evaluate_pieces(&mut self, board: &Board) -> S {
        // The pawn passes score into `pk_eval` rather than the returned
        // total, but must run first to seed the attack maps
        self.pawns::<WHITE>(board);
        self.pawns::<BLACK>(board);

        // Needs to happen after pawn evaluation but before king safety
        self.kings_pawns::<WHITE>(board);
        self.kings_pawns::<BLACK>(board);

        let mut eval = self.knights::<WHITE>(board) - self.knights::<BLACK>(board);
        eval += self.bishops::<WHITE>(board) - self.bishops::<BLACK>(board);
        eval += self.rooks::<WHITE>(board) - self.rooks::<BLACK>(board);
        eval += self.queens::<WHITE>(board) - self.queens::<BLACK>(board);
        eval += self.kings::<WHITE>(board) - self.kings::<BLACK>(board);
        eval += self.passed::<WHITE>(board) - self.passed::<BLACK>(board);
        eval += self.threats::<WHITE>(board) - self.threats::<BLACK>(board);
        eval += self.space::<WHITE>(board) - self.space::<BLACK>(board);

        eval
    }
}

////////////////////////////////////////////////////////////////////////////////
//
// Global adjustments
//
////////////////////////////////////////////////////////////////////////////////

/// Adjust the endgame half by how convertible the position looks for the
/// stronger side. Complexity may drag the endgame score toward zero, but
/// never flips who is better.
fn complexity(board: &Board, eval: S) -> S {
    let eg = eval.eg();
    let sign = (eg > 0) as Score - (eg < 0) as Score;

    let pawns = board.piece_bbs[Pawn];
    let pawns_on_both_flanks = !(pawns & chess::constants::LEFT_FLANK).is_empty()
        && !(pawns & chess::constants::RIGHT_FLANK).is_empty();

    let pieceless = (board.piece_bbs[Knight]
        | board.piece_bbs[Bishop]
        | board.piece_bbs[Rook]
        | board.piece_bbs[Queen])
        .is_empty();

    let complexity = COMPLEXITY_TOTAL_PAWNS * pawns.count() as Score
        + COMPLEXITY_PAWN_FLANKS * pawns_on_both_flanks as Score
        + COMPLEXITY_PAWN_ENDGAME * pieceless as Score
        + COMPLEXITY_ADJUSTMENT;

    let v = sign * Score::max(complexity.eg(), -eg.abs());

    S::new(0, v)
}

/// Pick the endgame scale factor from the material signature: the various
/// opposite-colored-bishop endings, a lone queen against a crowd, a lone
/// minor that cannot win, and runaway pawn advantages.
fn scale_factor(board: &Board, eval: S) -> Score {
    let pawns = board.piece_bbs[Pawn];
    let knights = board.piece_bbs[Knight];
    let bishops = board.piece_bbs[Bishop];
    let rooks = board.piece_bbs[Rook];
    let queens = board.piece_bbs[Queen];

    let minors = knights | bishops;
    let pieces = knights | bishops | rooks;

    let white = board.occupied_by(White);
    let black = board.occupied_by(Black);

    let (strong, weak) = if eval.eg() < 0 {
        (black, white)
    } else {
        (white, black)
    };

    // The opposite-colored-bishop endings
    if (white & bishops).only_one()
        && (black & bishops).only_one()
        && (bishops & chess::constants::LIGHT_SQUARES).only_one()
    {
        if (rooks | queens).is_empty()
            && (white & knights).only_one()
            && (black & knights).only_one()
        {
            return SCALE_OCB_ONE_KNIGHT;
        }

        if (knights | queens).is_empty()
            && (white & rooks).only_one()
            && (black & rooks).only_one()
        {
            return SCALE_OCB_ONE_ROOK;
        }

        if (knights | rooks | queens).is_empty() {
            return SCALE_OCB_BISHOPS_ONLY;
        }
    }

    // A lone queen is weak against multiple pieces
    if queens.only_one() && pieces.several() && pieces == (weak & pieces) {
        return SCALE_LONE_QUEEN;
    }

    // A lone minor next to its king can never win
    if !(strong & minors).is_empty() && strong.count() == 2 {
        return SCALE_DRAW;
    }

    // Scale up lone pieces with massive pawn advantages
    if queens.is_empty()
        && !(pieces & white).several()
        && !(pieces & black).several()
        && (strong & pawns).count() as Score - (weak & pawns).count() as Score > 2
    {
        return SCALE_LARGE_PAWN_ADV;
    }

    SCALE_NORMAL
}

////////////////////////////////////////////////////////////////////////////////
//
// Tests
//
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thread::Thread;

    const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn eval_fen(fen: &str) -> Score {
        let board: Board = fen.parse().unwrap();
        evaluate(&mut Thread::new(), &board)
    }

    /// Mirror a FEN vertically and swap the colors, leaving the side to move
    /// flipped as well. The evaluation of the mirrored position, seen from
    /// the mirrored side to move, must be identical.
    fn color_flipped(fen: &str) -> String {
        let mut parts = fen.split(' ');
        let placement = parts.next().unwrap();
        let turn = parts.next().unwrap();

        let flipped = placement
            .split('/')
            .rev()
            .map(|rank| {
                rank.chars()
                    .map(|c| {
                        if c.is_ascii_alphabetic() {
                            if c.is_ascii_uppercase() {
                                c.to_ascii_lowercase()
                            } else {
                                c.to_ascii_uppercase()
                            }
                        } else {
                            c
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/");

        let turn = if turn == "w" { "b" } else { "w" };

        // Castling rights and en-passant don't affect the evaluation;
        // reset them rather than mirroring them.
        format!("{flipped} {turn} - - 0 1")
    }

    #[test]
    fn startpos_is_all_tempo() {
        // The starting position is symmetric; everything cancels except the
        // side to move's tempo bonus.
        assert_eq!(eval_fen(STARTPOS), TEMPO);
    }

    #[test]
    fn bare_kings_evaluate_to_tempo() {
        assert_eq!(eval_fen("8/8/8/8/4k3/8/4K3/8 w - - 0 1"), TEMPO);
    }

    #[test]
    fn king_and_pawn_is_winning() {
        // The pawn's material edge survives the complexity penalty for a
        // drawish pawn ending
        let score = eval_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert!(score > 0, "K+P vs K should favor White, got {score}");
    }

    #[test]
    fn advanced_passer_beats_home_passer() {
        let home = eval_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        let advanced = eval_fen("4k3/8/8/3P4/8/8/8/4K3 w - - 0 1");
        assert!(advanced > home, "advanced {advanced} <= home {home}");
    }

    #[test]
    fn rook_endings_scale_normally() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2R w K - 0 1".parse().unwrap();
        let score = evaluate(&mut Thread::new(), &board);
        assert!(score > 300, "K+R vs K should score a rook, got {score}");

        // A rook-up ending has no business being scaled down
        let mut ei = EvalInfo::new(&Thread::new(), &board);
        let eval = ei.evaluate_pieces(&board) + psqt::psqt_material(&board);
        assert_eq!(scale_factor(&board, eval), SCALE_NORMAL);
    }

    #[test]
    fn lone_minor_scales_to_draw() {
        // A lone bishop cannot beat a bare king
        let board: Board = "8/8/8/2k5/5K2/8/8/3B4 w - - 0 1".parse().unwrap();
        let eval = S::new(300, 300);
        assert_eq!(scale_factor(&board, eval), SCALE_DRAW);

        // Same thing with a knight
        let board: Board = "8/8/8/2k5/5K2/8/8/3N4 w - - 0 1".parse().unwrap();
        assert_eq!(scale_factor(&board, eval), SCALE_DRAW);
    }

    #[test]
    fn lone_queen_scales_down() {
        // A lone white queen against rook + bishop
        let board: Board = "4k3/2rb4/8/8/8/8/8/Q3K3 w - - 0 1".parse().unwrap();
        let eval = S::new(100, 100);
        assert_eq!(scale_factor(&board, eval), SCALE_LONE_QUEEN);
    }

    #[test]
    fn ocb_endings_scale_down() {
        // Pure opposite-colored bishops: c1 is dark, c8 is light
        let board: Board = "2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1".parse().unwrap();
        let eval = S::new(100, 100);
        assert_eq!(scale_factor(&board, eval), SCALE_OCB_BISHOPS_ONLY);

        // Add a rook on each side
        let board: Board = "r1b1k3/8/8/8/8/8/8/2B1K2R w - - 0 1".parse().unwrap();
        assert_eq!(scale_factor(&board, eval), SCALE_OCB_ONE_ROOK);

        // Add a knight on each side instead
        let board: Board = "n1b1k3/8/8/8/8/8/8/2B1K2N w - - 0 1".parse().unwrap();
        assert_eq!(scale_factor(&board, eval), SCALE_OCB_ONE_KNIGHT);
    }

    #[test]
    fn phase_bounds() {
        let start: Board = STARTPOS.parse().unwrap();
        assert_eq!(game_phase(&start), 0);

        let bare: Board = "8/8/8/8/4k3/8/4K3/8 w - - 0 1".parse().unwrap();
        assert_eq!(game_phase(&bare), 256);

        for fen in [
            "4k3/8/8/3P4/8/8/8/4K3 w - - 0 1",
            "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ] {
            let board: Board = fen.parse().unwrap();
            let phase = game_phase(&board);
            assert!((0..=256).contains(&phase), "phase {phase} out of range");
        }
    }

    #[test]
    fn side_to_move_identity() {
        // Evaluating the same placement with either side to move must sum to
        // twice the tempo bonus (the White-relative score just flips sign).
        for fen in [
            STARTPOS,
            "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 3 3",
            "4k3/8/8/3P4/8/8/8/4K3 w - - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ] {
            let w_pov = eval_fen(fen);
            let b_pov = eval_fen(&fen.replacen(" w ", " b ", 1));
            assert_eq!(w_pov + b_pov, 2 * TEMPO, "failed for {fen}");
        }
    }

    #[test]
    fn color_symmetry() {
        // Mirroring the board vertically and swapping the colors must leave
        // the side-to-move-relative evaluation unchanged.
        for fen in [
            "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 3 3",
            "4k3/8/8/3P4/8/8/8/4K3 w - - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            "2kr3r/ppp2ppp/2n5/3qp3/8/2NP1N2/PPP2PPP/R2Q1RK1 b - - 0 10",
        ] {
            let flipped = color_flipped(fen);

            // Strip castling rights from the original too, so both sides of
            // the comparison parse identically.
            let mut parts = fen.split(' ');
            let placement = parts.next().unwrap();
            let turn = parts.next().unwrap();
            let plain = format!("{placement} {turn} - - 0 1");

            assert_eq!(
                eval_fen(&plain),
                eval_fen(&flipped),
                "asymmetric evaluation for {fen}"
            );
        }
    }

    #[test]
    fn null_move_identity() {
        let board: Board = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 3 3"
            .parse()
            .unwrap();

        let mut thread = Thread::new();
        let parent = evaluate(&mut thread, &board);

        // The search would now make a null move and evaluate the resulting
        // position. The evaluator short-circuits to the exact complement.
        thread.push_move(Move::NULL, parent);
        let child_board: Board = board.to_fen().replacen(" w ", " b ", 1).parse().unwrap();
        let child = evaluate(&mut thread, &child_board);

        assert_eq!(child, -parent + 2 * TEMPO);
        thread.pop_move();
    }

    #[test]
    fn cache_equivalence() {
        let fens = [
            STARTPOS,
            "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 3 3",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            // Same pawns and kings as the previous entry with the black rook
            // elsewhere, so this one exercises a pawn-king cache hit on a
            // warm thread
            "8/2p4r/3p4/KP6/1R3p1k/8/4P1P1/8 w - - 0 1",
        ];

        // A thread that keeps its caches warm across positions must agree
        // with a fresh thread on every single position.
        let mut warm = Thread::new();

        for _round in 0..2 {
            for fen in fens {
                let board: Board = fen.parse().unwrap();
                let cached = evaluate(&mut warm, &board);
                let fresh = evaluate(&mut Thread::new(), &board);
                assert_eq!(cached, fresh, "cache changed the result for {fen}");
            }
        }
    }

    #[test]
    fn scale_factor_is_invisible_at_zero_eg() {
        // When the endgame half is zero, the scale factor multiplies
        // nothing; any factor gives the same final score.
        let eval = S::new(40, 0);
        let phase = 128;

        for factor in [SCALE_DRAW, SCALE_LONE_QUEEN, SCALE_NORMAL, SCALE_LARGE_PAWN_ADV] {
            let scored =
                (eval.mg() * (256 - phase) + eval.eg() * phase * factor / SCALE_NORMAL) / 256;
            assert_eq!(scored, (eval.mg() * (256 - phase)) / 256);
        }
    }

    /// A sweep over a varied set of middlegame and endgame positions,
    /// holding every position to the invariants at once: determinism, the
    /// side-to-move identity, and color symmetry.
    #[test]
    fn property_sweep() {
        let fens = [
            "r1bq1rk1/pp2ppbp/2np1np1/8/2BNP3/2N1BP2/PPPQ2PP/R3K2R w KQ - 0 9",
            "2rq1rk1/pb2bppp/1pn1pn2/2p5/2BP4/P1N1PN2/1P2QPPP/R1BR2K1 w - - 0 12",
            "r2qk2r/ppp2ppp/2n1bn2/2b1p3/4P3/2NP1N2/PPP1BPPP/R1BQ1RK1 b kq - 4 7",
            "rnb1kb1r/pp3ppp/2p1pn2/q7/2BP4/2N2N2/PPP2PPP/R1BQ1RK1 w kq - 2 8",
            "r4rk1/1bq1bppp/p2ppn2/1p4B1/3NPP2/2N2Q2/PPP3PP/2KR3R w - - 0 14",
            "8/5pk1/6p1/7p/3N3P/5KP1/5P2/2b5 w - - 4 44",
            "8/3k4/1p1p1p2/1P1P1Pp1/6P1/8/4K3/8 w - - 0 1",
            "8/8/4kpp1/3p4/3P4/4PKP1/8/8 b - - 0 40",
            "R7/5pk1/6p1/8/7P/6P1/5PK1/2r5 b - - 0 50",
            "4r1k1/5ppp/8/8/8/8/5PPP/3R2K1 w - - 0 1",
            "8/5k2/8/4q3/8/2Q5/5K2/8 w - - 0 1",
            "6k1/5pp1/7p/8/3B4/6PP/5PK1/8 w - - 0 1",
            "2r3k1/5ppp/p3p3/1p2P3/3q4/P2B1Q1P/1P3PP1/6K1 w - - 0 26",
            "r1bqkb1r/ppp2ppp/2n2n2/3pp3/8/3P1NP1/PPP1PPBP/RNBQK2R w KQkq - 0 5",
            "1k1r3r/ppq2ppp/2pb1n2/8/3P4/2N1PN2/PP3PPP/2RQ1RK1 w - - 4 14",
            "5rk1/1pp2pp1/p2p1n1p/4p3/P1q1P2P/2P2QP1/1P3PB1/3R2K1 b - - 2 24",
        ];

        for fen in fens {
            // Determinism on a shared thread
            let mut thread = Thread::new();
            let board: Board = fen.parse().unwrap();
            let first = evaluate(&mut thread, &board);
            let second = evaluate(&mut thread, &board);
            assert_eq!(first, second, "unstable evaluation for {fen}");

            // Side-to-move identity
            let (w_fen, b_fen) = if fen.contains(" w ") {
                (fen.to_string(), fen.replacen(" w ", " b ", 1))
            } else {
                (fen.replacen(" b ", " w ", 1), fen.to_string())
            };
            let sum = eval_fen(&w_fen) + eval_fen(&b_fen);
            assert_eq!(sum, 2 * TEMPO, "tempo identity broken for {fen}");

            // Color symmetry
            let mut parts = fen.split(' ');
            let placement = parts.next().unwrap();
            let turn = parts.next().unwrap();
            let plain = format!("{placement} {turn} - - 0 1");
            assert_eq!(
                eval_fen(&plain),
                eval_fen(&color_flipped(fen)),
                "asymmetric evaluation for {fen}"
            );
        }
    }

    #[test]
    fn large_pawn_advantage_scales_up() {
        // A knight and three extra pawns against a lone knight
        let board: Board = "4k3/8/8/8/8/1n6/PPP5/1N2K3 w - - 0 1".parse().unwrap();
        let eval = S::new(200, 200);
        assert_eq!(scale_factor(&board, eval), SCALE_LARGE_PAWN_ADV);
    }
}
