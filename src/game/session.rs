use log::{debug, info, warn};

use super::{GameOptions, Snapshot};
use crate::board::{Board, GameStatus, MoveError, Piece, PromotionError, Square, SquareSet};

/// One game driven by a UI shell: the board plus click-selection state.
///
/// Every command returns the status of the side to move afterwards.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    options: GameOptions,
    selection: Option<Square>,
    destinations: SquareSet,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameOptions::default())
    }
}

impl Game {
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Game::from_board(Board::new(), options)
    }

    /// Start from an arbitrary position
    #[must_use]
    pub fn from_board(mut board: Board, options: GameOptions) -> Self {
        let status = board.status();
        Game {
            board,
            options,
            selection: None,
            destinations: SquareSet::EMPTY,
            status,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut GameOptions {
        &mut self.options
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Discard the current game and set up the initial position
    pub fn new_game(&mut self) {
        info!("new game");
        *self = Game::new(self.options);
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.destinations = SquareSet::EMPTY;
    }

    fn refresh(&mut self) {
        // The turn has not passed yet; nothing to evaluate until the choice.
        if self.board.pending_promotion().is_some() {
            self.status = GameStatus::Ongoing;
            return;
        }
        let was_over = self.is_over();
        self.status = self.board.status();
        if self.is_over() && !was_over {
            let side = self.board.side_to_move();
            match self.status {
                GameStatus::Checkmate => info!("checkmate, {} wins", side.opponent()),
                _ => info!("stalemate, {side} has no legal move"),
            }
        }
    }

    /// Handle a click on `square`.
    ///
    /// Clicking an own piece selects it; clicking a legal destination of the
    /// selection plays the move; anything else clears the selection. Clicks
    /// are ignored once the game is over or while a promotion is pending.
    pub fn select_square(&mut self, square: Square) -> GameStatus {
        if self.is_over() || self.board.pending_promotion().is_some() {
            debug!("click on {square} ignored");
            return self.status;
        }

        if let Some(from) = self.selection {
            if self.destinations.contains(square) {
                if let Err(err) = self.attempt_move(from, square) {
                    warn!("selected move rejected: {err}");
                }
                return self.status;
            }
        }

        match self.board.piece_at(square) {
            Some((color, _)) if color == self.board.side_to_move() => {
                self.selection = Some(square);
                self.destinations = self.board.legal_moves(square);
            }
            _ => self.clear_selection(),
        }
        self.status
    }

    /// Play `from`-`to` for the side to move.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        self.board.commit_move(from, to)?;
        self.clear_selection();

        if let Some(kind) = self.options.auto_promote() {
            if self.board.pending_promotion().is_some() {
                if let Err(err) = self.board.resolve_promotion(to, kind) {
                    warn!("auto-promotion failed: {err}");
                }
            }
        }
        self.refresh();
        Ok(self.status)
    }

    /// Supply the piece for the pending promotion.
    pub fn choose_promotion(&mut self, kind: Piece) -> Result<GameStatus, PromotionError> {
        let square = self
            .board
            .pending_promotion()
            .ok_or(PromotionError::NotPending)?;
        self.board.resolve_promotion(square, kind)?;
        self.refresh();
        Ok(self.status)
    }

    /// Take back the last move. Does nothing when undo is disabled or there
    /// is nothing to undo.
    pub fn request_undo(&mut self) -> GameStatus {
        if !self.options.allow_undo() {
            debug!("undo disabled");
            return self.status;
        }
        if self.board.undo_move().is_some() {
            self.clear_selection();
            self.refresh();
        }
        self.status
    }

    /// Numbered move-history lines
    #[must_use]
    pub fn move_list(&self) -> Vec<String> {
        self.board.move_list()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let side = self.board.side_to_move();
        let checked_king = self
            .board
            .in_check(side)
            .then(|| self.board.king_square(side));
        Snapshot {
            squares: self.board.grid(),
            side_to_move: side,
            selection: self.selection,
            destinations: self.destinations.iter().collect(),
            checked_king,
            status: self.status,
            pending_promotion: self.board.pending_promotion(),
            game_over: self.is_over(),
        }
    }
}
