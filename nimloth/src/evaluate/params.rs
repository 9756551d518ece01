//! The frozen parameter set of the evaluation.
//!
//! Every term of the evaluation reads its weights from here. All values are
//! packed midgame/endgame pairs; tables indexed by square are laid out from
//! White's point of view, rank 1 first, and get vertically mirrored for
//! Black.

use super::util::{Score, S};
use crate::s;

/* Material */

pub const PAWN_VALUE: S = s!(100, 130);
pub const KNIGHT_VALUE: S = s!(330, 330);
pub const BISHOP_VALUE: S = s!(340, 500);
pub const ROOK_VALUE: S = s!(540, 515);
pub const QUEEN_VALUE: S = s!(1000, 1000);
pub const KING_VALUE: S = s!(0, 0);

/* Piece-square tables */

#[rustfmt::skip]
pub const PAWN_PSQT: [S; 64] = [
    s!(0,0),    s!(0,0),    s!(0,0),   s!(0,0),    s!(0,0),    s!(0,0),   s!(0,0),    s!(0,0),
    s!(0,0),    s!(0,0),    s!(0,0),   s!(0,0),    s!(0,0),    s!(0,0),   s!(0,0),    s!(0,0),
    s!(-10,10), s!(-10,5),  s!(0,-5),  s!(10,-15), s!(10,-15), s!(0,-5),  s!(-10,5),  s!(-10,10),
    s!(-10,15), s!(-10,15), s!(10,-10),s!(20,-20), s!(20,-20), s!(10,-10),s!(-10,15), s!(-10,15),
    s!(-10,20), s!(-10,20), s!(10,-10),s!(5,-20),  s!(5,-20),  s!(10,-10),s!(-10,20), s!(-10,20),
    s!(-20,40), s!(-10,40), s!(10,0),  s!(30,-10), s!(30,-10), s!(10,0),  s!(-10,40), s!(-20,40),
    s!(-30,60), s!(-30,0),  s!(40,0),  s!(50,-10), s!(50,-10), s!(40,0),  s!(-30,0),  s!(-30,60),
    s!(0,0),    s!(0,0),    s!(0,0),   s!(0,0),    s!(0,0),    s!(0,0),   s!(0,0),    s!(0,0),
];

// knight on the rim is grim
#[rustfmt::skip]
pub const KNIGHT_PSQT: [S; 64] = [
    s!(-20,-20), s!(-20,-20), s!(-20,-20), s!(-20,-20), s!(-20,-20), s!(-20,-20), s!(-20,-20), s!(-20,-20),
    s!(-20,-20), s!(0,0),     s!(0,0),     s!(0,0),     s!(0,0),     s!(0,0),     s!(0,0),     s!(-20,-20),
    s!(-20,-20), s!(5,0),     s!(10,5),    s!(15,20),   s!(15,20),   s!(10,5),    s!(5,0),     s!(-20,-20),
    s!(-20,-20), s!(15,30),   s!(20,40),   s!(20,50),   s!(20,50),   s!(20,40),   s!(15,20),   s!(-20,-20),
    s!(-20,-20), s!(20,30),   s!(30,50),   s!(30,60),   s!(30,60),   s!(30,50),   s!(20,30),   s!(-20,-20),
    s!(-20,-20), s!(10,30),   s!(20,50),   s!(20,60),   s!(20,60),   s!(20,50),   s!(10,30),   s!(-20,-20),
    s!(-20,-20), s!(5,5),     s!(5,5),     s!(5,5),     s!(5,5),     s!(5,5),     s!(5,5),     s!(-20,-20),
    s!(-150,-20),s!(-100,-20),s!(-100,-20),s!(-30,-20), s!(-30,-20), s!(-100,-20),s!(-100,-20),s!(-150,-20),
];

#[rustfmt::skip]
pub const BISHOP_PSQT: [S; 64] = [
    s!(-20,-20), s!(-10,-10), s!(-10,-10), s!(-10,-10), s!(-10,-10), s!(-10,-10), s!(-10,-10), s!(-20,-20),
    s!(-10,-10), s!(0,0),     s!(0,0),     s!(0,0),     s!(0,0),     s!(0,0),     s!(0,0),     s!(-10,-10),
    s!(-10,-10), s!(5,0),     s!(10,5),    s!(15,15),   s!(15,15),   s!(10,5),    s!(5,0),     s!(-10,-10),
    s!(-10,-10), s!(15,20),   s!(15,30),   s!(30,50),   s!(30,50),   s!(15,30),   s!(15,15),   s!(-10,-10),
    s!(-10,-10), s!(15,20),   s!(20,30),   s!(30,50),   s!(30,50),   s!(20,30),   s!(15,20),   s!(-10,-10),
    s!(-10,-10), s!(10,20),   s!(15,30),   s!(15,30),   s!(15,30),   s!(15,30),   s!(10,20),   s!(-10,-10),
    s!(-10,-10), s!(5,5),     s!(5,5),     s!(5,5),     s!(5,5),     s!(5,5),     s!(5,5),     s!(-10,-10),
    s!(-20,-20), s!(-10,-10), s!(-10,-10), s!(-30,-10), s!(-30,-10), s!(-10,-10), s!(-10,-10), s!(-20,-20),
];

// all about the 7th and 8th ranks
#[rustfmt::skip]
pub const ROOK_PSQT: [S; 64] = [
    s!(-20,0),  s!(0,0),   s!(0,0),   s!(0,0),   s!(0,0),   s!(0,0),   s!(0,0),   s!(-20,0),
    s!(-70,0),  s!(0,0),   s!(0,0),   s!(0,0),   s!(0,0),   s!(0,0),   s!(0,0),   s!(-70,0),
    s!(-30,0),  s!(0,10),  s!(0,0),   s!(0,0),   s!(0,0),   s!(0,0),   s!(0,0),   s!(-30,0),
    s!(-30,20), s!(0,30),  s!(0,30),  s!(0,20),  s!(0,20),  s!(0,30),  s!(0,30),  s!(-30,20),
    s!(-20,40), s!(0,30),  s!(0,30),  s!(0,30),  s!(0,30),  s!(0,30),  s!(0,30),  s!(-20,40),
    s!(-30,40), s!(0,40),  s!(0,40),  s!(0,30),  s!(0,30),  s!(0,30),  s!(0,30),  s!(-20,40),
    s!(20,50),  s!(20,50), s!(20,50), s!(20,50), s!(20,50), s!(20,50), s!(20,50), s!(20,50),
    s!(40,50),  s!(40,50), s!(40,50), s!(40,50), s!(40,50), s!(40,50), s!(40,50), s!(30,50),
];

#[rustfmt::skip]
pub const QUEEN_PSQT: [S; 64] = [
    s!(-20,-20), s!(-10,-10), s!(-10,-10), s!(-10,-10), s!(-10,-10), s!(-10,-10), s!(-10,-10), s!(-20,-20),
    s!(-10,-10), s!(20,20),   s!(20,20),   s!(20,20),   s!(20,20),   s!(20,20),   s!(20,20),   s!(-10,-10),
    s!(-10,-10), s!(20,20),   s!(20,20),   s!(20,20),   s!(20,20),   s!(20,20),   s!(20,20),   s!(-10,-10),
    s!(-10,-10), s!(0,10),    s!(10,30),   s!(30,50),   s!(30,50),   s!(10,30),   s!(0,10),    s!(-10,-10),
    s!(-10,-10), s!(0,10),    s!(10,30),   s!(30,50),   s!(30,50),   s!(10,30),   s!(0,10),    s!(-10,-10),
    s!(-10,-10), s!(0,5),     s!(5,5),     s!(5,5),     s!(5,5),     s!(5,5),     s!(0,5),     s!(-10,-10),
    s!(-10,-10), s!(0,5),     s!(5,5),     s!(5,5),     s!(5,5),     s!(5,5),     s!(0,5),     s!(-10,-10),
    s!(-20,-20), s!(-10,-10), s!(-10,-10), s!(-30,-10), s!(-30,-10), s!(-10,-10), s!(-10,-10), s!(-20,-20),
];

// hide in the opening, be active and central in the endgame
#[rustfmt::skip]
pub const KING_PSQT: [S; 64] = [
    s!(80,-80),  s!(60,-50),  s!(0,0),    s!(-10,-20), s!(-10,-20), s!(0,0),    s!(50,-50),  s!(70,-80),
    s!(0,0),     s!(-20,0),   s!(-40,10), s!(-40,20),  s!(-40,20),  s!(-40,10), s!(-20,0),   s!(0,0),
    s!(-40,-10), s!(-40,-10), s!(-40,10), s!(-40,30),  s!(-40,30),  s!(-40,10), s!(-40,-10), s!(-40,-10),
    s!(-40,-40), s!(-40,-30), s!(-40,10), s!(-40,40),  s!(-40,40),  s!(-40,10), s!(-40,-30), s!(-40,-30),
    s!(-40,-10), s!(-40,-30), s!(-40,10), s!(-40,40),  s!(-40,40),  s!(-40,10), s!(-40,-30), s!(-40,-10),
    s!(-40,-30), s!(-40,-20), s!(-40,0),  s!(-40,0),   s!(-40,0),   s!(-40,0),  s!(-40,-20), s!(-40,-40),
    s!(-40,-90), s!(-40,-20), s!(-40,-10),s!(-40,-40), s!(-40,-30), s!(-40,-20),s!(-40,-20), s!(-40,-110),
    s!(-40,-150),s!(-40,-90), s!(-40,-70),s!(-40,-30), s!(-40,-50), s!(-40,-70),s!(-40,-90), s!(-40,-150),
];

/* Pawn terms */

// Indexed by [support >= threats][relative rank]. Both rows currently carry
// the same values, so the flag is along for the ride.
#[rustfmt::skip]
pub const PAWN_CANDIDATE_PASSER: [[S; 8]; 2] = [
    [s!(0,0), s!(-10,-10), s!(-10,10), s!(0,20), s!(20,50), s!(40,70), s!(50,90), s!(0,0)],
    [s!(0,0), s!(-10,-10), s!(-10,10), s!(0,20), s!(20,50), s!(40,70), s!(50,90), s!(0,0)],
];

// weaker in the middlegame at the center, weaker in the endgame at the edges
#[rustfmt::skip]
pub const PAWN_ISOLATED: [S; 8] = [
    s!(-10,-20), s!(-10,-15), s!(-15,-20), s!(-20,-30),
    s!(-20,-30), s!(-15,-20), s!(-10,-15), s!(-10,-20),
];

// Indexed by [can potentially unstack][file]
#[rustfmt::skip]
pub const PAWN_STACKED: [[S; 8]; 2] = [
    [s!(-10,-20), s!(-10,-20), s!(-15,-20), s!(-20,-30), s!(-20,-30), s!(-15,-25), s!(-10,-20), s!(-10,-20)],
    [s!(-10,-20), s!(-10,-20), s!(-15,-20), s!(-20,-30), s!(-20,-30), s!(-15,-25), s!(-10,-20), s!(-10,-20)],
];

// Indexed by [no enemy pawns on the file][relative rank]
#[rustfmt::skip]
pub const PAWN_BACKWARDS: [[S; 8]; 2] = [
    [s!(0,0), s!(0,-10), s!(-5,-20), s!(-10,-30), s!(-10,-30), s!(-5,-20), s!(0,-10), s!(0,0)],
    [s!(0,0), s!(0,-10), s!(-5,-20), s!(-10,-30), s!(-10,-30), s!(-5,-20), s!(0,-10), s!(0,0)],
];

// Indexed by the vertically-folded half board: four files from the edge to
// the center, times eight relative ranks. The deeper the connected pawn, the
// bigger the bonus.
#[rustfmt::skip]
pub const PAWN_CONNECTED32: [S; 32] = [
    s!(0,0),    s!(0,0),   s!(0,0),   s!(0,0),
    s!(0,0),    s!(0,0),   s!(0,0),   s!(0,0),
    s!(0,10),   s!(5,5),   s!(10,0),  s!(10,0),
    s!(0,30),   s!(10,20), s!(20,10), s!(20,10),
    s!(10,30),  s!(20,30), s!(30,20), s!(30,20),
    s!(50,80),  s!(60,70), s!(70,60), s!(80,50),
    s!(70,100), s!(80,90), s!(90,80), s!(100,70),
    s!(0,0),    s!(0,0),   s!(0,0),   s!(0,0),
];

/* Weak squares */

// All of these are indexed by [square is on the A/H files], with the edge
// entry zeroed: a weak square on the rim is not worth contesting.

pub const WEAK_SQUARE_ATTACKED_BY_PAWN: [S; 2] = [s!(2, 2), s!(0, 0)];
pub const WEAK_SQUARE_ATTACKED_BY_KNIGHT: [S; 2] = [s!(20, 10), s!(0, 0)];
pub const WEAK_SQUARE_ATTACKED_BY_BISHOP: [S; 2] = [s!(40, 20), s!(0, 0)];
pub const WEAK_SQUARE_ATTACKED_BY_ROOK: [S; 2] = [s!(4, 4), s!(0, 0)];
pub const WEAK_SQUARE_ATTACKED_BY_QUEEN: [S; 2] = [s!(4, 4), s!(0, 0)];
pub const AVAILABLE_WEAK_SQUARE: [S; 2] = [s!(4, 2), s!(0, 0)];

/* Knight terms */

// Indexed by [outpost is on the A/H files][defended by one of our pawns]
pub const KNIGHT_OUTPOST: [[S; 2]; 2] = [
    [s!(40, 20), s!(40, 20)],
    [s!(-10, -10), s!(-10, -10)],
];

#[rustfmt::skip]
pub const KNIGHT_MOBILITY: [S; 9] = [
    s!(-150,-150), s!(-100,-100), s!(-50,-50), s!(0,0), s!(10,10),
    s!(30,30),     s!(30,30),     s!(30,30),   s!(50,50),
];

/* Bishop terms */

pub const BISHOP_PAIR: S = s!(30, 120);

pub const BISHOP_RAMMED_PAWNS: S = s!(-5, -20);

pub const BISHOP_LONG_DIAGONAL: S = s!(20, 0);

// Indexed by [each side has a single, opposite-colored bishop]. Mobility
// counts for more when the bishops cannot contest each other's squares.
#[rustfmt::skip]
pub const BISHOP_MOBILITY: [[S; 14]; 2] = [
    [s!(-150,-150), s!(-120,-120), s!(-50,-50), s!(-20,-20), s!(0,0),   s!(10,10), s!(30,30), s!(30,30),
     s!(40,40),     s!(40,40),     s!(40,40),   s!(40,40),   s!(50,50), s!(80,80)],
    [s!(-120,-120), s!(-100,-100), s!(-20,-20), s!(-10,-10), s!(10,10), s!(20,20), s!(50,50), s!(50,50),
     s!(60,60),     s!(70,70),     s!(80,80),   s!(80,80),   s!(90,90), s!(100,100)],
];

/* Rook terms */

// Indexed by [no enemy pawns on the file either]
pub const ROOK_FILE: [S; 2] = [s!(10, 10), s!(10, 10)];

#[rustfmt::skip]
pub const ROOK_MOBILITY: [S; 15] = [
    s!(-150,-150), s!(-120,-120), s!(-80,-80), s!(-20,-20), s!(0,0),
    s!(0,20),      s!(0,40),      s!(0,40),    s!(0,50),    s!(0,50),
    s!(10,60),     s!(10,60),     s!(10,70),   s!(30,70),   s!(90,90),
];

pub const CONNECTED_ROOKS: S = s!(10, 20);

/* Queen terms */

pub const QUEEN_RELATIVE_PIN: S = s!(-20, -20);

#[rustfmt::skip]
pub const QUEEN_MOBILITY: [S; 28] = [
    s!(-150,-150), s!(-120,-120), s!(-120,-220), s!(-40,-200), s!(-20,-170), s!(0,-80),   s!(0,-30),   s!(0,0),
    s!(0,0),       s!(10,30),     s!(10,30),     s!(10,50),    s!(20,50),    s!(20,50),   s!(20,50),   s!(20,60),
    s!(20,60),     s!(10,60),     s!(10,60),     s!(10,40),    s!(20,30),    s!(30,0),    s!(30,-10),  s!(20,-20),
    s!(10,-40),    s!(0,-70),     s!(-40,-70),   s!(-40,-70),
];

/* King terms */

#[rustfmt::skip]
pub const KING_DEFENDERS: [S; 12] = [
    s!(-30,-5), s!(-10,5),  s!(0,5),   s!(10,5),
    s!(20,5),   s!(30,5),   s!(30,-15),s!(10,-5),
    s!(10,5),   s!(10,5),   s!(10,5),  s!(10,5),
];

#[rustfmt::skip]
pub const KING_PAWN_FILE_PROXIMITY: [S; 8] = [
    s!(30,40), s!(20,30), s!(10,10),  s!(0,-20),
    s!(0,-60), s!(0,-70), s!(-10,-80),s!(-10,-70),
];

// Indexed by [looking at the king's own file][file][distance to the closest
// friendly pawn at or above the king]
#[rustfmt::skip]
pub const KING_SHELTER: [[[S; 8]; 8]; 2] = [
  [[s!(0,0),    s!(10,-30), s!(20,0),   s!(20,0),
    s!(0,0),    s!(-10,0),  s!(-10,-30),s!(-50,20)],
   [s!(10,0),   s!(0,-10),  s!(0,0),    s!(0,0),
    s!(-10,0),  s!(-50,70), s!(80,80),  s!(-10,0)],
   [s!(30,0),   s!(0,0),    s!(-30,0),  s!(-10,-10),
    s!(0,0),    s!(-20,10), s!(10,70),  s!(-10,0)],
   [s!(10,10),  s!(20,-10), s!(0,-10),  s!(10,-20),
    s!(20,-30), s!(-40,0),  s!(-140,40),s!(0,0)],
   [s!(-10,10), s!(0,0),    s!(-40,0),  s!(-20,10),
    s!(-20,0),  s!(-30,0),  s!(40,-20), s!(-10,0)],
   [s!(50,-10), s!(10,-10), s!(-20,0),  s!(-10,-20),
    s!(10,-30), s!(30,-20), s!(40,-30), s!(-20,0)],
   [s!(40,-10), s!(0,-20),  s!(-30,0),  s!(-20,0),
    s!(-30,0),  s!(-20,20), s!(0,40),   s!(-10,0)],
   [s!(10,-20), s!(0,-20),  s!(10,0),   s!(0,10),
    s!(-10,20), s!(-10,40), s!(-180,80),s!(-10,10)]],
  [[s!(0,0),    s!(-10,-30),s!(0,-20),  s!(-40,10),
    s!(-30,0),  s!(0,50),   s!(-160,0), s!(-50,10)],
   [s!(0,0),    s!(10,-10), s!(0,-10),  s!(-10,0),
    s!(0,-20),  s!(20,70),  s!(-180,0), s!(-30,10)],
   [s!(0,0),    s!(10,0),   s!(0,-10),  s!(0,-20),
    s!(20,0),   s!(-90,50), s!(-80,-70),s!(0,0)],
   [s!(0,0),    s!(0,0),    s!(0,0),    s!(-30,10),
    s!(-40,10), s!(-90,30), s!(0,-40),  s!(-30,0)],
   [s!(0,0),    s!(10,0),   s!(10,-10), s!(10,-10),
    s!(0,-10),  s!(-30,0),  s!(-100,-50),s!(-10,0)],
   [s!(0,0),    s!(0,0),    s!(-20,0),  s!(-10,0),
    s!(20,-20), s!(-20,10), s!(50,30),  s!(-10,0)],
   [s!(0,0),    s!(30,-20), s!(10,-10), s!(0,0),
    s!(-20,10), s!(0,20),   s!(-50,-30),s!(-20,10)],
   [s!(0,0),    s!(10,-50), s!(10,-30), s!(-10,0),
    s!(-30,20), s!(-10,20), s!(-220,-40),s!(-30,0)]],
];

// Indexed by [our pawn blocks the storming pawn][folded file][distance to
// the closest enemy pawn at or above the king]
#[rustfmt::skip]
pub const KING_STORM: [[[S; 8]; 4]; 2] = [
  [[s!(0,30),   s!(140,0),  s!(-10,20), s!(0,0),
    s!(-10,0),  s!(0,0),    s!(-10,0),  s!(-20,0)],
   [s!(-10,60), s!(60,10),  s!(0,20),   s!(0,10),
    s!(0,0),    s!(0,0),    s!(0,0),    s!(-10,0)],
   [s!(0,40),   s!(10,30),  s!(-10,20), s!(-10,10),
    s!(0,0),    s!(0,0),    s!(0,0),    s!(0,0)],
   [s!(0,20),   s!(10,20),  s!(-30,10), s!(-20,0),
    s!(-10,0),  s!(10,-10), s!(0,0),    s!(-20,0)]],
  [[s!(0,0),    s!(-10,-10),s!(-10,0),  s!(20,-20),
    s!(10,0),   s!(10,-20), s!(0,0),    s!(0,30)],
   [s!(0,0),    s!(-10,-40),s!(0,-10),  s!(50,-10),
    s!(10,0),   s!(20,-20), s!(-10,-10),s!(-30,0)],
   [s!(0,0),    s!(-30,-60),s!(-10,-10),s!(0,0),
    s!(0,0),    s!(0,-10),  s!(0,-20),  s!(0,0)],
   [s!(0,0),    s!(0,-20),  s!(-20,-10),s!(-20,0),
    s!(-10,0),  s!(0,-30),  s!(60,-20), s!(10,20)]],
];

/* King safety terms */

pub const SAFETY_KNIGHT_WEIGHT: S = s!(40, 40);
pub const SAFETY_BISHOP_WEIGHT: S = s!(20, 30);
pub const SAFETY_ROOK_WEIGHT: S = s!(30, 0);
pub const SAFETY_QUEEN_WEIGHT: S = s!(30, 0);

pub const SAFETY_ATTACK_VALUE: S = s!(40, 30);
pub const SAFETY_WEAK_SQUARES: S = s!(40, 40);
pub const SAFETY_NO_ENEMY_QUEENS: S = s!(-230, -250);
pub const SAFETY_SAFE_QUEEN_CHECK: S = s!(90, 80);
pub const SAFETY_SAFE_ROOK_CHECK: S = s!(90, 90);
pub const SAFETY_SAFE_BISHOP_CHECK: S = s!(50, 50);
pub const SAFETY_SAFE_KNIGHT_CHECK: S = s!(110, 110);
pub const SAFETY_ADJUSTMENT: S = s!(-70, -20);

#[rustfmt::skip]
pub const SAFETY_SHELTER: [[S; 8]; 2] = [
    [s!(0,0), s!(0,10), s!(0,0), s!(0,0), s!(0,0), s!(0,0),  s!(0,0),  s!(0,-10)],
    [s!(0,0), s!(0,10), s!(0,0), s!(0,0), s!(0,0), s!(0,0),  s!(0,0),  s!(0,0)],
];

#[rustfmt::skip]
pub const SAFETY_STORM: [[S; 8]; 2] = [
    [s!(0,0), s!(0,0), s!(0,0), s!(0,0), s!(0,0), s!(0,20), s!(0,10), s!(0,-10)],
    [s!(0,0), s!(0,0), s!(0,0), s!(0,0), s!(0,0), s!(0,0),  s!(0,0),  s!(0,0)],
];

/* Passed pawn terms */

// Indexed by [the square ahead is empty][the square ahead is not attacked]
// [relative rank]
#[rustfmt::skip]
pub const PASSED_PAWN: [[[S; 8]; 2]; 2] = [
  [[s!(0,0), s!(-30,0),  s!(-40,20), s!(-60,20),
    s!(0,10),s!(90,0),   s!(160,40), s!(0,0)],
   [s!(0,0), s!(-20,10), s!(-40,40), s!(-50,40),
    s!(0,50),s!(110,50), s!(190,90), s!(0,0)]],
  [[s!(0,0), s!(-20,20), s!(-40,30), s!(-60,50),
    s!(0,60),s!(100,70), s!(250,120),s!(0,0)],
   [s!(0,0), s!(-20,20), s!(-40,30), s!(-50,60),
    s!(0,80),s!(90,160), s!(120,290),s!(0,0)]],
];

#[rustfmt::skip]
pub const PASSED_FRIENDLY_DISTANCE: [S; 8] = [
    s!(0,0), s!(0,0), s!(0,0), s!(0,-10), s!(0,-10), s!(0,-10), s!(0,0), s!(0,0),
];

#[rustfmt::skip]
pub const PASSED_ENEMY_DISTANCE: [S; 8] = [
    s!(0,0), s!(0,0), s!(0,0), s!(0,10), s!(0,20), s!(0,30), s!(10,30), s!(0,0),
];

/* Threat terms */

pub const THREAT_WEAK_PAWN: S = s!(-10, -40);
pub const THREAT_MINOR_ATTACKED_BY_PAWN: S = s!(-20, -40);
pub const THREAT_ROOK_ATTACKED_BY_LESSER: S = s!(-20, -40);
pub const THREAT_QUEEN_ATTACKED_BY_ONE: S = s!(-20, -40);

/* Space terms */

pub const SPACE_RESTRICT_PIECE: S = s!(-30, -50);
pub const SPACE_RESTRICT_EMPTY: S = s!(-10, -30);
pub const SPACE_CENTER_CONTROL: S = s!(40, 0);

/* Closedness terms */

#[rustfmt::skip]
pub const CLOSEDNESS_KNIGHT_ADJUSTMENT: [S; 9] = [
    s!(0,10), s!(0,20), s!(0,30),  s!(0,30),
    s!(0,40), s!(0,30), s!(0,30),  s!(-10,50),
    s!(0,30),
];

#[rustfmt::skip]
pub const CLOSEDNESS_ROOK_ADJUSTMENT: [S; 9] = [
    s!(40,40), s!(0,80),  s!(0,50),   s!(0,40),
    s!(0,40),  s!(0,20),  s!(0,10),   s!(-10,10),
    s!(-30,-10),
];

/* Complexity terms */

pub const COMPLEXITY_TOTAL_PAWNS: S = s!(0, 0);
pub const COMPLEXITY_PAWN_FLANKS: S = s!(0, 80);
pub const COMPLEXITY_PAWN_ENDGAME: S = s!(0, 70);
pub const COMPLEXITY_ADJUSTMENT: S = s!(0, -150);

/* General terms */

pub const TEMPO: Score = 20;

/* Endgame scale factors, in units of SCALE_NORMAL = 128 */

pub const SCALE_OCB_BISHOPS_ONLY: Score = 64;
pub const SCALE_OCB_ONE_KNIGHT: Score = 106;
pub const SCALE_OCB_ONE_ROOK: Score = 96;
pub const SCALE_LONE_QUEEN: Score = 88;
pub const SCALE_NORMAL: Score = 128;
pub const SCALE_LARGE_PAWN_ADV: Score = 144;
pub const SCALE_DRAW: Score = 0;
