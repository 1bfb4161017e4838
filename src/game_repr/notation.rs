// Move records: coordinate moves (f5f6, e10xf9) and short algebraic (f6, Nc3, cxd4, b7=Q)

use super::*;
use crate::error::NotationError;

/// What a token says about the move, before it is matched against the legal moves
#[derive(Debug, Clone, PartialEq, Eq)]
struct MoveToken {
    piece: Option<Type>,
    from_file: Option<usize>,
    from_rank: Option<i8>,
    to: Cell,
    promotion: Option<Type>,
}

fn is_skippable(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

/// Strips a move-number prefix such as `12.` or `3...`
fn strip_move_number(token: &str) -> &str {
    match token.rfind('.') {
        Some(idx) if token[..idx].chars().all(|c| c.is_ascii_digit() || c == '.') => &token[idx + 1..],
        _ => token,
    }
}

fn parse_token(token: &str) -> Option<MoveToken> {
    let body = token.trim_end_matches(&['+', '#', '!', '?'][..]);
    // cell names and piece letters are ASCII; byte offsets below rely on it
    if !body.is_ascii() {
        return None;
    }

    let (body, promotion) = match body.split_once('=') {
        Some((head, tail)) => {
            let mut chars = tail.chars();
            let kind = chars.next().and_then(Type::from_char)?;
            if chars.next().is_some() || matches!(kind, Type::King | Type::Pawn) {
                return None;
            }
            (head, Some(kind))
        }
        None => (body, None),
    };

    let (piece, rest) = match body.chars().next() {
        Some(c) if "KQRBN".contains(c) => (Type::from_char(c), &body[1..]),
        _ => (None, body),
    };

    let rest: String = rest.chars().filter(|&c| c != 'x' && c != '-').collect();

    // destination is the trailing file letter and rank digits
    let digits_start = rest
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    let file_idx = digits_start.checked_sub(1)?;
    let to = Cell::parse(&rest[file_idx..])?;
    let prefix = &rest[..file_idx];

    let mut from_file = None;
    let mut from_rank = None;
    let mut prefix_chars = prefix.chars().peekable();
    if let Some(&c) = prefix_chars.peek() {
        if let Some(file) = Cell::file_index(c) {
            from_file = Some(file);
            prefix_chars.next();
        }
    }
    let rank_text: String = prefix_chars.collect();
    if !rank_text.is_empty() {
        if !rank_text.chars().all(|c| c.is_ascii_digit()) || rank_text.len() > 2 {
            return None;
        }
        from_rank = rank_text.parse().ok();
    }

    Some(MoveToken {
        piece,
        from_file,
        from_rank,
        to,
        promotion,
    })
}

impl MoveToken {
    /// A fully specified source means coordinate notation, which names no piece
    fn is_coordinate(&self) -> bool {
        self.from_file.is_some() && self.from_rank.is_some()
    }

    fn matches(&self, pos: &Position, mv: &Move) -> bool {
        if mv.to() != self.to {
            return false;
        }
        let Some(moving) = pos.board().get(mv.from()) else {
            return false;
        };
        let kind_ok = match self.piece {
            Some(kind) => moving.piece_type == kind,
            None => self.is_coordinate() || moving.piece_type == Type::Pawn,
        };
        kind_ok
            && self.from_file.map_or(true, |f| mv.from().file() == f)
            && self.from_rank.map_or(true, |r| mv.from().rank() == r)
    }
}

/// Resolves one token against the legal moves of `pos`
pub fn resolve_move(pos: &Position, token: &str, ply: usize) -> Result<Move, NotationError> {
    let parsed = parse_token(token).ok_or_else(|| NotationError::Unreadable {
        token: token.to_string(),
        ply,
    })?;

    let candidates: Vec<Move> = pos
        .all_legal_moves()
        .into_iter()
        .filter(|mv| parsed.matches(pos, mv))
        .collect();

    match candidates.as_slice() {
        [] => Err(NotationError::NoMatch {
            token: token.to_string(),
            ply,
        }),
        [mv] => Ok(match (parsed.promotion, mv.promotion()) {
            (Some(kind), Some(_)) => Move::with_promotion(mv.from(), mv.to(), kind),
            _ => *mv,
        }),
        many => Err(NotationError::Ambiguous {
            token: token.to_string(),
            ply,
            candidates: many.len(),
        }),
    }
}

impl Position {
    /// Resets to the starting position and plays every move of `record`
    pub fn load_pgn(&mut self, record: &str) -> Result<(), NotationError> {
        let mut pos = Position::default();
        for token in record.split_whitespace() {
            let token = strip_move_number(token);
            if token.is_empty() || is_skippable(token) {
                continue;
            }
            let mv = resolve_move(&pos, token, pos.ply() + 1)?;
            pos.mk_move(mv);
        }
        *self = pos;
        Ok(())
    }

    pub fn from_pgn(record: &str) -> Result<Self, NotationError> {
        let mut pos = Position::default();
        pos.load_pgn(record)?;
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(name: &str) -> Cell {
        Cell::parse(name).unwrap()
    }

    #[test]
    fn test_parse_pawn_push() {
        let parsed = parse_token("f6").unwrap();
        assert_eq!(parsed.piece, None);
        assert_eq!(parsed.to, cell("f6"));
        assert_eq!(parsed.from_file, None);
    }

    #[test]
    fn test_parse_coordinate_with_two_digit_ranks() {
        let parsed = parse_token("e10xf9").unwrap();
        assert!(parsed.is_coordinate());
        assert_eq!(parsed.from_file, Some(cell("e1").file()));
        assert_eq!(parsed.from_rank, Some(10));
        assert_eq!(parsed.to, cell("f9"));
    }

    #[test]
    fn test_parse_piece_with_promotion_and_check() {
        let parsed = parse_token("Qxe7+").unwrap();
        assert_eq!(parsed.piece, Some(Type::Queen));
        assert_eq!(parsed.to, cell("e7"));

        let parsed = parse_token("b7=N").unwrap();
        assert_eq!(parsed.promotion, Some(Type::Knight));
    }

    #[test]
    fn test_unreadable_tokens() {
        assert!(parse_token("zz").is_none());
        assert!(parse_token("Nj3").is_none());
        assert!(parse_token("f6=").is_none());
        assert!(parse_token("Né5").is_none());
        assert!(parse_token("f11=K").is_none());
        assert!(parse_token("f11=P").is_none());
    }

    #[test]
    fn test_non_ascii_record_is_unreadable() {
        assert_eq!(
            Position::from_pgn("Né5").unwrap_err(),
            NotationError::Unreadable {
                token: "Né5".to_string(),
                ply: 1
            }
        );
        assert!(matches!(
            Position::from_pgn("f6 é"),
            Err(NotationError::Unreadable { ply: 2, .. })
        ));
    }

    #[test]
    fn test_promotion_to_king_or_pawn_rejected() {
        let pos = Position::from_layout("Pf10 Kg1 kl6", Color::White).unwrap();

        for token in ["f11=K", "f11=P"] {
            assert_eq!(
                resolve_move(&pos, token, 1),
                Err(NotationError::Unreadable {
                    token: token.to_string(),
                    ply: 1
                })
            );
        }

        let promoted = resolve_move(&pos, "f11=N", 1).unwrap();
        assert_eq!(promoted.promotion(), Some(Type::Knight));
        assert_eq!(resolve_move(&pos, "f11", 1).unwrap().promotion(), Some(Type::Queen));
    }

    #[test]
    fn test_strip_move_number() {
        assert_eq!(strip_move_number("1."), "");
        assert_eq!(strip_move_number("12...f6"), "f6");
        assert_eq!(strip_move_number("Nc3"), "Nc3");
    }

    #[test]
    fn test_load_pgn_single_pawn_move() {
        let pos = Position::from_pgn("f6").unwrap();
        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(pos.last_move(), Some(Move::new(cell("f5"), cell("f6"))));
    }

    #[test]
    fn test_load_pgn_mixed_notation() {
        let pos = Position::from_pgn("1. f6 e6 2. c1d4 *").unwrap();
        assert_eq!(pos.ply(), 3);
        assert_eq!(
            pos.board().get(cell("d4")),
            Some(Piece::new(Color::White, Type::Knight))
        );
    }

    #[test]
    fn test_load_pgn_rejects_illegal_move() {
        let err = Position::from_pgn("f6 f6").unwrap_err();
        assert_eq!(
            err,
            NotationError::NoMatch {
                token: "f6".to_string(),
                ply: 2
            }
        );
    }

    #[test]
    fn test_failed_load_leaves_position_untouched() {
        let mut pos = Position::from_pgn("f6").unwrap();
        assert!(pos.load_pgn("f6 zz").is_err());
        assert_eq!(pos.ply(), 1);
    }
}
