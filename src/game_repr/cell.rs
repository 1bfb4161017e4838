use once_cell::sync::Lazy;
use std::fmt;

/*
 * HEXAGONAL BOARD GEOMETRY
 *
 * 91 cells addressed in axial coordinates (q, r) with |q|, |r|, |q + r| <= 5.
 * Files a..l (no j) are columns q = -5..5, rank 1 is the bottom cell of
 * each file and "up" along a file is (0, -1).
 */

pub const BOARD_RADIUS: i8 = 5;
pub const CELL_COUNT: usize = 91;

const FILES: [char; 11] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'k', 'l'];

/// Edge neighbours: up, up-right, down-right, down, down-left, up-left
pub const ORTHOGONAL: [(i8, i8); 6] = [(0, -1), (1, -1), (1, 0), (0, 1), (-1, 1), (-1, 0)];

/// Corner neighbours, each the sum of two adjacent orthogonal steps
pub const DIAGONAL: [(i8, i8); 6] = [(1, -2), (2, -1), (1, 1), (-1, 2), (-2, 1), (-1, -1)];

/// Cube permutations of (1, 2, -3) and (-1, -2, 3)
pub const KNIGHT_JUMPS: [(i8, i8); 12] = [
    (1, 2), (1, -3), (2, 1), (2, -3), (-3, 1), (-3, 2),
    (-1, -2), (-1, 3), (-2, -1), (-2, 3), (3, -1), (3, -2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

struct Tables {
    coords: [(i8, i8); CELL_COUNT],
    knight: Vec<Vec<Cell>>,
}

static TABLES: Lazy<Tables> = Lazy::new(|| {
    let mut coords = [(0i8, 0i8); CELL_COUNT];
    let mut idx = 0;

    for file in 0..11usize {
        let q = file as i8 - BOARD_RADIUS;
        for rank in 1..=file_height(q) {
            coords[idx] = (q, rank_to_r(q, rank));
            idx += 1;
        }
    }

    let knight = (0..CELL_COUNT)
        .map(|i| {
            let (q, r) = coords[i];
            KNIGHT_JUMPS
                .iter()
                .filter_map(|&(dq, dr)| axial_to_index(q + dq, r + dr))
                .map(|i| Cell(i as u8))
                .collect()
        })
        .collect();

    Tables { coords, knight }
});

fn axial_to_index(q: i8, r: i8) -> Option<usize> {
    if q.abs() > BOARD_RADIUS || r.abs() > BOARD_RADIUS || (q + r).abs() > BOARD_RADIUS {
        return None;
    }
    let file_offset: i8 = (-BOARD_RADIUS..q).map(file_height).sum();
    Some((file_offset + r_to_rank(q, r) - 1) as usize)
}

fn file_height(q: i8) -> i8 {
    2 * BOARD_RADIUS + 1 - q.abs()
}

fn rank_to_r(q: i8, rank: i8) -> i8 {
    BOARD_RADIUS + 1 - rank - q.max(0)
}

fn r_to_rank(q: i8, r: i8) -> i8 {
    BOARD_RADIUS + 1 - r - q.max(0)
}

impl Cell {
    pub fn from_index(idx: usize) -> Option<Cell> {
        (idx < CELL_COUNT).then_some(Cell(idx as u8))
    }

    pub fn from_axial(q: i8, r: i8) -> Option<Cell> {
        axial_to_index(q, r).map(|i| Cell(i as u8))
    }

    /// `file` is the zero-based column, `rank` is one-based
    pub fn from_file_rank(file: usize, rank: i8) -> Option<Cell> {
        if file >= FILES.len() {
            return None;
        }
        let q = file as i8 - BOARD_RADIUS;
        if rank < 1 || rank > file_height(q) {
            return None;
        }
        Cell::from_axial(q, rank_to_r(q, rank))
    }

    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT as u8).map(Cell)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn axial(self) -> (i8, i8) {
        TABLES.coords[self.index()]
    }

    pub fn file(self) -> usize {
        (self.axial().0 + BOARD_RADIUS) as usize
    }

    pub fn rank(self) -> i8 {
        let (q, r) = self.axial();
        r_to_rank(q, r)
    }

    /// Number of cells in this cell's file
    pub fn file_height(self) -> i8 {
        file_height(self.axial().0)
    }

    pub fn offset(self, dq: i8, dr: i8) -> Option<Cell> {
        let (q, r) = self.axial();
        Cell::from_axial(q + dq, r + dr)
    }

    pub fn knight_targets(self) -> &'static [Cell] {
        &TABLES.knight[self.index()]
    }

    /// Reflect top-to-bottom within the file: White's setup maps onto Black's
    pub fn mirrored(self) -> Cell {
        let rank = self.file_height() + 1 - self.rank();
        Cell::from_file_rank(self.file(), rank).unwrap_or(self)
    }

    /// Hex distance in steps between edge neighbours
    pub fn distance(self, other: Cell) -> i8 {
        let (q1, r1) = self.axial();
        let (q2, r2) = other.axial();
        let (dq, dr) = (q1 - q2, r1 - r2);
        (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
    }

    pub fn parse(name: &str) -> Option<Cell> {
        let mut chars = name.chars();
        let file_char = chars.next()?;
        let file = FILES.iter().position(|&f| f == file_char.to_ascii_lowercase())?;
        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let rank: i8 = digits.parse().ok()?;
        Cell::from_file_rank(file, rank)
    }

    pub fn file_char(self) -> char {
        FILES[self.file()]
    }

    pub fn file_index(c: char) -> Option<usize> {
        FILES.iter().position(|&f| f == c)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}
