//! Value types shared by every engine subsystem.
//!
//! Squares, colours, piece kinds, pieces and move records are small `Copy`
//! (or cheaply clonable) values. Behaviour lives in the generator, executor and
//! navigator modules; these types only carry data and trivial conversions.

use std::fmt;

/// Width and height of the Dynamo Chess board.
pub const BOARD_SIZE: usize = 10;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White advances toward row 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind (colour is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Missile,
}

impl PieceKind {
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
            PieceKind::Missile => "Missile",
        }
    }
}

/// A piece standing on the board.
///
/// `en_passant_eligible` is only ever set on pawns, and only for the opponent
/// turn that immediately follows a 2- or 3-square advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub en_passant_eligible: bool,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            en_passant_eligible: false,
        }
    }

    #[inline]
    pub const fn with_en_passant(self, eligible: bool) -> Self {
        Self {
            en_passant_eligible: eligible,
            ..self
        }
    }

    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    pub const fn name(self) -> &'static str {
        self.kind.name()
    }

    /// Unicode glyph used by text front ends.
    pub const fn symbol(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
            (_, PieceKind::Missile) => '🚀',
        }
    }
}

/// Board coordinate. Row 0 is Black's back rank, row 9 is White's.
///
/// A `Square` can only be built in bounds, so holders never re-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Builds a square from signed coordinates, as produced by offset arithmetic.
    #[inline]
    pub fn from_coords(row: i32, col: i32) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Self::new(row, col)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::from_coords(
            self.row as i32 + d_row as i32,
            self.col as i32 + d_col as i32,
        )
    }

    /// Taxicab distance between two squares.
    #[inline]
    pub fn manhattan_distance(self, other: Square) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    #[inline]
    pub fn is_corner(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }

    /// All squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }

    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.col)
    }

    #[inline]
    pub fn rank(self) -> u8 {
        BOARD_SIZE as u8 - self.row
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

/// Special handling attached to a move record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    /// The captured pawn stood beside the mover, not on `to`.
    EnPassant { captured_square: Square },
    /// `to` is the rook square the player chose; the pieces land elsewhere.
    Castle {
        king_to: Square,
        rook_from: Square,
        rook_to: Square,
    },
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    MissilesCaptured,
    MissileMate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Color,
    pub reason: WinReason,
}

impl GameOutcome {
    pub fn message(&self) -> String {
        match self.reason {
            WinReason::MissilesCaptured => {
                format!("{} wins by capturing both Missiles!", self.winner)
            }
            WinReason::MissileMate => format!("{} wins with Missile Mate!", self.winner),
        }
    }
}

/// One applied move, with everything needed to undo and redo it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The piece on `from` before the move.
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// The piece left on the landing square (flag updated, possibly promoted).
    pub placed_piece: Piece,
    pub kind: MoveKind,
    /// Own pawns whose en-passant flag expired when this move was made.
    pub cleared_en_passant: Vec<Square>,
    pub promoted: bool,
    pub outcome: Option<GameOutcome>,
}

impl Move {
    /// Square the moving piece actually lands on.
    #[inline]
    pub fn landing_square(&self) -> Square {
        match self.kind {
            MoveKind::Castle { king_to, .. } => king_to,
            _ => self.to,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}
