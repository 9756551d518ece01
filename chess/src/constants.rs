use crate::bitboard::Bitboard;

pub const LIGHT_SQUARES: Bitboard = Bitboard(0x55AA55AA55AA55AA);
pub const DARK_SQUARES: Bitboard = Bitboard(0xAA55AA55AA55AA55);

/// The A1-H8 and H1-A8 diagonals
pub const LONG_DIAGONALS: Bitboard = Bitboard(0x8142241818244281);

/// The four central squares (d4, e4, d5, e5)
pub const CENTER_SQUARES: Bitboard = Bitboard(0x0000001818000000);

/// The extended center (c3 through f6)
pub const CENTER_BIG: Bitboard = Bitboard(0x00003C3C3C3C0000);

/// The queenside and kingside halves of the board
pub const LEFT_FLANK: Bitboard = Bitboard(0x0F0F0F0F0F0F0F0F);
pub const RIGHT_FLANK: Bitboard = Bitboard(0xF0F0F0F0F0F0F0F0);

pub const FILES: [Bitboard; 8] = gen_files();
pub const RANKS: [Bitboard; 8] = gen_ranks();

const fn gen_files() -> [Bitboard; 8] {
    const A_FILE: u64 = 0x0101010101010101;
    let mut files = [Bitboard::EMPTY; 8];
    let mut file = 0;

    while file < 8 {
        files[file] = Bitboard(A_FILE << file);
        file += 1;
    }

    files
}

const fn gen_ranks() -> [Bitboard; 8] {
    const FIRST_RANK: u64 = 0x00000000000000FF;
    let mut ranks = [Bitboard::EMPTY; 8];
    let mut rank = 0;

    while rank < 8 {
        ranks[rank] = Bitboard(FIRST_RANK << (8 * rank));
        rank += 1;
    }

    ranks
}
