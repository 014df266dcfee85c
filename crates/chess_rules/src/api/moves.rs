//! Move execution and validation
//!
//! Legality filtering over pseudo-legal moves, and the single mutating move
//! entry point.

use tracing::{debug, trace};

use super::game::Game;
use crate::chess_move::Move;
use crate::error::{InvalidMove, MoveResult};
use crate::move_gen::attack::leaves_king_attacked;
use crate::move_gen::MoveSet;
use crate::position::Position;
use crate::types::{Color, Piece};

impl Game {
    /// Legal moves for the piece standing on `pos`
    ///
    /// Returns `None` when `pos` is empty, which is distinct from a piece
    /// with no legal moves (`Some` of an empty set). The piece's color is not
    /// compared with the side to move.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_rules::{Game, Position};
    ///
    /// let game = Game::new();
    /// let g1: Position = "G1".parse().unwrap();
    /// let e4: Position = "E4".parse().unwrap();
    ///
    /// // Knight on G1 reaches F3 and H3
    /// assert_eq!(game.valid_moves(g1).map(|moves| moves.len()), Some(2));
    /// assert_eq!(game.valid_moves(e4), None);
    /// ```
    pub fn valid_moves(&self, pos: Position) -> Option<MoveSet> {
        let piece = self.board.get_piece(pos)?;
        Some(self.legal_moves_of(pos, piece))
    }

    /// Union of legal moves over every piece of `color`
    pub fn all_valid_moves(&self, color: Color) -> MoveSet {
        self.board
            .pieces_of(color)
            .flat_map(|(pos, piece)| self.legal_moves_of(pos, piece))
            .collect()
    }

    /// Submit a move for the side to move
    ///
    /// On success the move is applied, the side to move flips, and the
    /// captured piece (if any) is returned. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - [`InvalidMove::NoPiece`] - the start square is empty
    /// - [`InvalidMove::OutOfTurn`] - the piece is not the side to move's
    /// - [`InvalidMove::Illegal`] - the move is not among the piece's legal moves
    ///   (including a missing or unneeded promotion kind)
    pub fn make_move(&mut self, mv: Move) -> MoveResult<Option<Piece>> {
        if let Err(err) = self.check_move(mv) {
            debug!("[RULES] Rejected {}: {}", mv, err);
            return Err(err);
        }

        let captured = self.board.apply_move(&mv);
        let mover = self.side_to_move;
        self.side_to_move = mover.opponent();

        trace!(
            "[RULES] {} played {}{}, {} to move",
            mover,
            mv,
            captured.map(|piece| format!(" capturing {piece}")).unwrap_or_default(),
            self.side_to_move
        );

        Ok(captured)
    }

    fn check_move(&self, mv: Move) -> MoveResult<()> {
        let square = mv.start();
        let piece = self
            .board
            .get_piece(square)
            .ok_or(InvalidMove::NoPiece { mv, square })?;

        if piece.color != self.side_to_move {
            return Err(InvalidMove::OutOfTurn {
                mv,
                square,
                color: piece.color,
                to_move: self.side_to_move,
            });
        }

        if !self.legal_moves_of(square, piece).contains(&mv) {
            return Err(InvalidMove::Illegal { mv });
        }

        Ok(())
    }

    /// Pseudo-legal moves of `piece` on `pos` that keep its own king safe
    pub(super) fn legal_moves_of(&self, pos: Position, piece: Piece) -> MoveSet {
        piece
            .piece_moves(&self.board, pos)
            .into_iter()
            .filter(|mv| !leaves_king_attacked(&self.board, mv, piece.color))
            .collect()
    }
}
