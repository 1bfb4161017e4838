use super::*;
use crate::error::NotationError;
use smallvec::SmallVec;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC (GLINSKI HEXAGONAL CHESS)
 */

pub type CellList = SmallVec<[Cell; 64]>;

/// White's back pieces; Black's are the mirror image
const WHITE_PIECES: [(&str, Type); 9] = [
    ("g1", Type::King),
    ("e1", Type::Queen),
    ("d1", Type::Rook),
    ("h1", Type::Rook),
    ("c1", Type::Knight),
    ("i1", Type::Knight),
    ("f1", Type::Bishop),
    ("f2", Type::Bishop),
    ("f3", Type::Bishop),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [None; CELL_COUNT] }
    }

    pub fn get(&self, cell: Cell) -> Option<Piece> {
        self.cells[cell.index()]
    }

    pub fn set(&mut self, cell: Cell, piece: Option<Piece>) {
        self.cells[cell.index()] = piece;
    }

    /// Occupied cells in cell-index order (file a first, rank 1 first)
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all().filter_map(move |cell| self.get(cell).map(|piece| (cell, piece)))
    }

    pub fn king_cell(&self, color: Color) -> Option<Cell> {
        self.pieces()
            .find(|(_, p)| p.piece_type == Type::King && p.color == color)
            .map(|(cell, _)| cell)
    }

    /// Whether any piece of `by` attacks `target`, whoever is to move
    pub fn is_attacked(&self, target: Cell, by: Color) -> bool {
        let ray_hits = |dirs: &[(i8, i8)], slider: Type| {
            dirs.iter().any(|&(dq, dr)| {
                let mut cur = target;
                let mut dist = 0;
                while let Some(next) = cur.offset(dq, dr) {
                    dist += 1;
                    if let Some(p) = self.get(next) {
                        return p.color == by
                            && (p.piece_type == slider
                                || p.piece_type == Type::Queen
                                || (p.piece_type == Type::King && dist == 1));
                    }
                    cur = next;
                }
                false
            })
        };

        if ray_hits(&ORTHOGONAL, Type::Rook) || ray_hits(&DIAGONAL, Type::Bishop) {
            return true;
        }

        let knight = Piece::new(by, Type::Knight);
        if target.knight_targets().iter().any(|&c| self.get(c) == Some(knight)) {
            return true;
        }

        let pawn = Piece::new(by, Type::Pawn);
        pawn_captures(by)
            .iter()
            .filter_map(|&(dq, dr)| target.offset(-dq, -dr))
            .any(|c| self.get(c) == Some(pawn))
    }
}

pub fn pawn_forward(color: Color) -> (i8, i8) {
    match color {
        Color::White => (0, -1),
        Color::Black => (0, 1),
    }
}

/// The two orthogonal-forward cells on the neighbouring files
pub fn pawn_captures(color: Color) -> [(i8, i8); 2] {
    match color {
        Color::White => [(-1, 0), (1, -1)],
        Color::Black => [(-1, 1), (1, 0)],
    }
}

pub fn is_promotion_cell(cell: Cell, color: Color) -> bool {
    match color {
        Color::White => cell.rank() == cell.file_height(),
        Color::Black => cell.rank() == 1,
    }
}

/// White pawns start on the chevron b1..f5..k1, Black pawns on rank 7
pub fn is_pawn_start(cell: Cell, color: Color) -> bool {
    let q = cell.axial().0;
    if q.abs() == BOARD_RADIUS {
        return false;
    }
    match color {
        Color::White => cell.rank() == BOARD_RADIUS - q.abs(),
        Color::Black => cell.rank() == 7,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnPassant {
    /// Cell the double-stepping pawn passed over
    pub target: Cell,
    /// Cell the double-stepping pawn landed on
    pub pawn: Cell,
}

#[derive(Clone, Copy, Debug)]
pub struct UndoInfo {
    mv: Move,
    moved: Option<Piece>,
    captured: Option<(Cell, Piece)>,
    en_passant: Option<EnPassant>,
}

#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    en_passant: Option<EnPassant>,
    history: Vec<UndoInfo>,
}

impl Default for Position {
    fn default() -> Self {
        let mut board = Board::empty();
        for (name, piece_type) in WHITE_PIECES {
            if let Some(cell) = Cell::parse(name) {
                board.set(cell, Some(Piece::new(Color::White, piece_type)));
                board.set(cell.mirrored(), Some(Piece::new(Color::Black, piece_type)));
            }
        }
        for cell in Cell::all().filter(|&c| is_pawn_start(c, Color::White)) {
            board.set(cell, Some(Piece::new(Color::White, Type::Pawn)));
            board.set(cell.mirrored(), Some(Piece::new(Color::Black, Type::Pawn)));
        }

        Self {
            board,
            side_to_move: Color::White,
            en_passant: None,
            history: Vec::new(),
        }
    }
}

impl Position {
    /// Empty board with the given side to move, for building test positions
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            board: Board::empty(),
            side_to_move,
            en_passant: None,
            history: Vec::new(),
        }
    }

    /// Builds a position from entries like `Kg1 kg10 Qf6 pe7`.
    /// Uppercase letters are White, lowercase Black.
    pub fn from_layout(layout: &str, side_to_move: Color) -> Result<Self, NotationError> {
        let mut pos = Self::empty(side_to_move);
        for token in layout.split_whitespace() {
            let mut chars = token.chars();
            let piece = chars.next().and_then(Piece::from_char);
            let cell = Cell::parse(chars.as_str());
            match (piece, cell) {
                (Some(piece), Some(cell)) => pos.place(cell, piece),
                _ => return Err(NotationError::Layout { token: token.to_string() }),
            }
        }
        Ok(pos)
    }

    pub fn place(&mut self, cell: Cell, piece: Piece) {
        self.board.set(cell, Some(piece));
    }

    pub fn remove(&mut self, cell: Cell) -> Option<Piece> {
        let piece = self.board.get(cell);
        self.board.set(cell, None);
        piece
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    /// Number of moves applied since the position was set up
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|u| u.mv)
    }

    /// Moves played since setup, oldest first
    pub fn moves_played(&self) -> Vec<Move> {
        self.history.iter().map(|u| u.mv).collect()
    }

    fn slide_into(&self, from: Cell, color: Color, dirs: &[(i8, i8)], out: &mut CellList) {
        for &(dq, dr) in dirs {
            let mut cur = from;
            while let Some(next) = cur.offset(dq, dr) {
                match self.board.get(next) {
                    None => out.push(next),
                    Some(p) => {
                        if p.color != color {
                            out.push(next);
                        }
                        break;
                    }
                }
                cur = next;
            }
        }
    }

    fn step_into(&self, color: Color, targets: impl Iterator<Item = Cell>, out: &mut CellList) {
        for target in targets {
            if self.board.get(target).map_or(true, |p| p.color != color) {
                out.push(target);
            }
        }
    }

    fn pawn_moves_into(&self, from: Cell, color: Color, out: &mut CellList) {
        let (fq, fr) = pawn_forward(color);
        if let Some(one) = from.offset(fq, fr) {
            if self.board.get(one).is_none() {
                out.push(one);
                if is_pawn_start(from, color) {
                    if let Some(two) = one.offset(fq, fr) {
                        if self.board.get(two).is_none() {
                            out.push(two);
                        }
                    }
                }
            }
        }

        for (dq, dr) in pawn_captures(color) {
            let Some(target) = from.offset(dq, dr) else {
                continue;
            };
            match self.board.get(target) {
                Some(p) if p.color != color => out.push(target),
                None if self.en_passant.map_or(false, |ep| ep.target == target) => out.push(target),
                _ => {}
            }
        }
    }

    /// Destinations for the piece on `from` ignoring whether its own king is left attacked
    pub fn pseudo_legal_targets(&self, from: Cell) -> CellList {
        let mut out = CellList::new();
        let Some(piece) = self.board.get(from) else {
            return out;
        };
        let color = piece.color;

        match piece.piece_type {
            Type::Pawn => self.pawn_moves_into(from, color, &mut out),
            Type::Knight => self.step_into(color, from.knight_targets().iter().copied(), &mut out),
            Type::Bishop => self.slide_into(from, color, &DIAGONAL, &mut out),
            Type::Rook => self.slide_into(from, color, &ORTHOGONAL, &mut out),
            Type::Queen => {
                self.slide_into(from, color, &ORTHOGONAL, &mut out);
                self.slide_into(from, color, &DIAGONAL, &mut out);
            }
            Type::King => {
                let steps = ORTHOGONAL
                    .iter()
                    .chain(DIAGONAL.iter())
                    .filter_map(|&(dq, dr)| from.offset(dq, dr));
                self.step_into(color, steps, &mut out);
            }
        }
        out
    }

    /// Plays `from -> to` on a scratch copy of the board and checks the mover's king
    fn leaves_king_safe(&self, from: Cell, to: Cell) -> bool {
        let Some(moved) = self.board.get(from) else {
            return false;
        };
        let mut scratch = self.board;
        if moved.piece_type == Type::Pawn && scratch.get(to).is_none() {
            if let Some(ep) = self.en_passant.filter(|ep| ep.target == to) {
                scratch.set(ep.pawn, None);
            }
        }
        scratch.set(to, Some(moved));
        scratch.set(from, None);

        scratch
            .king_cell(moved.color)
            .map_or(true, |king| !scratch.is_attacked(king, moved.color.opposite()))
    }

    /// Legal destinations for the piece on `from`; empty unless it belongs to the side to move
    pub fn legal_targets(&self, from: Cell) -> CellList {
        match self.board.get(from) {
            Some(p) if p.color == self.side_to_move => {
                let mut targets = self.pseudo_legal_targets(from);
                targets.retain(|to| self.leaves_king_safe(from, *to));
                targets
            }
            _ => CellList::new(),
        }
    }

    /// Builds the move for `from -> to`, promoting pawns to a queen
    pub fn make_move_spec(&self, from: Cell, to: Cell) -> Move {
        match self.board.get(from) {
            Some(p) if p.piece_type == Type::Pawn && is_promotion_cell(to, p.color) => {
                Move::with_promotion(from, to, Type::Queen)
            }
            _ => Move::new(from, to),
        }
    }

    pub fn all_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for (from, piece) in self.board.pieces() {
            if piece.color != self.side_to_move {
                continue;
            }
            for to in self.legal_targets(from) {
                moves.push(self.make_move_spec(from, to));
            }
        }
        moves
    }

    pub fn is_move_legal(&self, mv: Move) -> bool {
        self.legal_targets(mv.from()).contains(&mv.to())
    }

    pub fn in_check(&self, color: Color) -> bool {
        self.board
            .king_cell(color)
            .map_or(false, |king| self.board.is_attacked(king, color.opposite()))
    }

    pub fn has_legal_moves(&self) -> bool {
        self.board
            .pieces()
            .filter(|(_, p)| p.color == self.side_to_move)
            .any(|(from, _)| !self.legal_targets(from).is_empty())
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move) && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side_to_move) && !self.has_legal_moves()
    }

    /// Applies a move produced by the legal move generator
    pub fn mk_move(&mut self, mv: Move) {
        let from = mv.from();
        let to = mv.to();
        let moved = self.board.get(from);
        debug_assert!(moved.is_some(), "mk_move from empty cell {}", from);

        let mut captured = None;
        let previous_en_passant = self.en_passant.take();

        if let Some(piece) = moved {
            let is_pawn = piece.piece_type == Type::Pawn;

            captured = match self.board.get(to) {
                Some(victim) => Some((to, victim)),
                None if is_pawn => previous_en_passant
                    .filter(|ep| ep.target == to)
                    .and_then(|ep| self.board.get(ep.pawn).map(|victim| (ep.pawn, victim))),
                None => None,
            };
            if let Some((cell, _)) = captured {
                self.board.set(cell, None);
            }

            let (fq, fr) = pawn_forward(piece.color);
            if is_pawn && from.offset(2 * fq, 2 * fr) == Some(to) {
                self.en_passant = from
                    .offset(fq, fr)
                    .map(|target| EnPassant { target, pawn: to });
            }

            let placed = if is_pawn && is_promotion_cell(to, piece.color) {
                Piece::new(piece.color, mv.promotion().unwrap_or(Type::Queen))
            } else {
                piece
            };
            self.board.set(to, Some(placed));
            self.board.set(from, None);
        }

        self.history.push(UndoInfo {
            mv,
            moved,
            captured,
            en_passant: previous_en_passant,
        });
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Reverses the most recent `mk_move`
    pub fn unmake_move(&mut self) -> Option<Move> {
        let undo = self.history.pop()?;

        if let Some(piece) = undo.moved {
            self.board.set(undo.mv.to(), None);
            self.board.set(undo.mv.from(), Some(piece));
            if let Some((cell, victim)) = undo.captured {
                self.board.set(cell, Some(victim));
            }
        }

        self.en_passant = undo.en_passant;
        self.side_to_move = self.side_to_move.opposite();
        Some(undo.mv)
    }

    /// Every piece mirrored top-to-bottom and recoloured, side to move swapped
    pub fn color_flipped(&self) -> Position {
        let mut board = Board::empty();
        for (cell, piece) in self.board.pieces() {
            board.set(cell.mirrored(), Some(piece.with_color(piece.color.opposite())));
        }
        Position {
            board,
            side_to_move: self.side_to_move.opposite(),
            en_passant: self.en_passant.map(|ep| EnPassant {
                target: ep.target.mirrored(),
                pawn: ep.pawn.mirrored(),
            }),
            history: Vec::new(),
        }
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth
    pub fn perft(&self, depth: u32) -> u64 {
        let mut pos = self.clone();
        pos.perft_inner(depth)
    }

    fn perft_inner(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            self.mk_move(mv);
            nodes += self.perft_inner(depth - 1);
            self.unmake_move();
        }
        nodes
    }
}
