use log::{debug, info, warn};
use thiserror::Error;

use crate::minimax::Minimax;
use crate::tic_tac_toe::{Board, GameOutcome, InvalidMoveError, Player};

/// The computer always answers as O; X opens.
pub const COMPUTER: Player = Player::O;
const FIRST_PLAYER: Player = Player::X;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    TwoPlayer,
    VsComputer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),

    #[error("The game is over, reset to play again")]
    GameOver,

    #[error("Wait for the computer to move")]
    NotYourTurn,

    #[error("It is not the computer's turn")]
    NotComputerTurn,

    #[error("No move left for the computer")]
    NoMoveAvailable,
}

/// One running game: board, whose turn it is and how the game is being played.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    mode: Mode,
    outcome: GameOutcome,
    engine: Minimax,
}

impl GameSession {
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            current_player: FIRST_PLAYER,
            mode,
            outcome: GameOutcome::InProgress,
            engine: Minimax::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == Mode::VsComputer
            && self.current_player == COMPUTER
            && self.outcome == GameOutcome::InProgress
    }

    /// Place the current player's mark at `index` for a human player.
    pub fn play(&mut self, index: usize) -> Result<GameOutcome, SessionError> {
        if self.outcome != GameOutcome::InProgress {
            return Err(SessionError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(SessionError::NotYourTurn);
        }
        if let Err(err) = self.board.apply_move(index, self.current_player) {
            warn!("{} rejected: {}", self.current_player, err);
            return Err(err.into());
        }
        Ok(self.finish_turn())
    }

    /// Let the engine pick and play O's move. Returns the chosen cell.
    pub fn computer_move(&mut self) -> Result<(usize, GameOutcome), SessionError> {
        if self.outcome != GameOutcome::InProgress {
            return Err(SessionError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }
        let result = self
            .engine
            .find_best_move(&self.board, self.current_player)
            .ok_or(SessionError::NoMoveAvailable)?;
        debug!(
            "{} plays {} (score {}, {} nodes)",
            self.current_player, result.best_move, result.score, result.nodes
        );
        self.board.apply_move(result.best_move, self.current_player)?;
        Ok((result.best_move, self.finish_turn()))
    }

    fn finish_turn(&mut self) -> GameOutcome {
        self.outcome = self.board.evaluate_outcome();
        match self.outcome {
            GameOutcome::InProgress => self.current_player = self.current_player.other(),
            GameOutcome::Win(winner) => info!("{} wins", winner),
            GameOutcome::Draw => info!("draw"),
        }
        self.outcome
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = FIRST_PLAYER;
        self.outcome = GameOutcome::InProgress;
        info!("new game ({:?})", self.mode);
    }

    /// Switch between two players and playing the computer. Starts a new game.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::TwoPlayer => Mode::VsComputer,
            Mode::VsComputer => Mode::TwoPlayer,
        };
        self.reset();
    }

    pub fn turn_indicator(&self) -> String {
        format!("Turn: {}", self.current_player)
    }

    pub fn status(&self) -> &'static str {
        match self.mode {
            Mode::TwoPlayer => "Mode: Play with Friend",
            Mode::VsComputer if self.is_computer_turn() => "Mode: Play with AI (AI's turn)",
            Mode::VsComputer => "Mode: Play with AI (Your turn)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tic_tac_toe::Cell;

    #[test]
    fn test_new() {
        let session = GameSession::new(Mode::TwoPlayer);
        assert_eq!(*session.board(), Board::new());
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.outcome(), GameOutcome::InProgress);
        assert_eq!(session.turn_indicator(), "Turn: X");
        assert_eq!(session.status(), "Mode: Play with Friend");
    }

    #[test]
    fn test_two_players_alternate() {
        let mut session = GameSession::new(Mode::TwoPlayer);
        assert_eq!(session.play(4), Ok(GameOutcome::InProgress));
        assert_eq!(session.current_player(), Player::O);
        assert_eq!(session.play(0), Ok(GameOutcome::InProgress));
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.board().cell(4), Some(Cell::Filled(Player::X)));
        assert_eq!(session.board().cell(0), Some(Cell::Filled(Player::O)));
    }

    #[test]
    fn test_invalid_move_keeps_turn() {
        let mut session = GameSession::new(Mode::TwoPlayer);
        session.play(4).unwrap();
        assert_eq!(
            session.play(4),
            Err(SessionError::InvalidMove(InvalidMoveError::Occupied(4)))
        );
        assert_eq!(
            session.play(12),
            Err(SessionError::InvalidMove(InvalidMoveError::OutOfRange(12)))
        );
        assert_eq!(session.current_player(), Player::O);
    }

    #[test]
    fn test_win_absorbs_further_moves() {
        let mut session = GameSession::new(Mode::TwoPlayer);
        for index in [0, 3, 1, 4] {
            session.play(index).unwrap();
        }
        assert_eq!(session.play(2), Ok(GameOutcome::Win(Player::X)));
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.play(8), Err(SessionError::GameOver));
        assert_eq!(session.board().cell(8), Some(Cell::Empty));
    }

    #[test]
    fn test_draw() {
        let mut session = GameSession::new(Mode::TwoPlayer);
        for index in [0, 1, 2, 4, 3, 5, 7, 6] {
            assert_eq!(session.play(index), Ok(GameOutcome::InProgress));
        }
        assert_eq!(session.play(8), Ok(GameOutcome::Draw));
        assert_eq!(session.play(8), Err(SessionError::GameOver));
    }

    #[test]
    fn test_computer_answers() {
        let mut session = GameSession::new(Mode::VsComputer);
        assert!(!session.is_computer_turn());
        assert_eq!(session.computer_move(), Err(SessionError::NotComputerTurn));

        session.play(0).unwrap();
        assert!(session.is_computer_turn());
        assert_eq!(session.status(), "Mode: Play with AI (AI's turn)");
        assert_eq!(session.play(1), Err(SessionError::NotYourTurn));

        let (index, outcome) = session.computer_move().unwrap();
        // The only reply to a corner opening that does not lose.
        assert_eq!(index, 4);
        assert_eq!(outcome, GameOutcome::InProgress);
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.status(), "Mode: Play with AI (Your turn)");
    }

    #[test]
    fn test_computer_survives_opposite_corners() {
        let mut session = GameSession::new(Mode::VsComputer);
        session.play(0).unwrap();
        session.computer_move().unwrap();
        session.play(8).unwrap();
        let (index, _) = session.computer_move().unwrap();
        assert!([1, 3, 5, 7].contains(&index));

        let mut outcome = GameOutcome::InProgress;
        while outcome == GameOutcome::InProgress {
            let index = session.board().empty_cells()[0];
            outcome = session.play(index).unwrap();
            if outcome == GameOutcome::InProgress {
                outcome = session.computer_move().unwrap().1;
            }
        }
        assert_ne!(outcome, GameOutcome::Win(Player::X));
    }

    #[test]
    fn test_two_player_mode_has_no_computer() {
        let mut session = GameSession::new(Mode::TwoPlayer);
        session.play(0).unwrap();
        assert!(!session.is_computer_turn());
        assert_eq!(session.computer_move(), Err(SessionError::NotComputerTurn));
    }

    #[test]
    fn test_reset_and_toggle_mode() {
        let mut session = GameSession::new(Mode::TwoPlayer);
        session.play(0).unwrap();
        session.toggle_mode();
        assert_eq!(session.mode(), Mode::VsComputer);
        assert_eq!(*session.board(), Board::new());
        assert_eq!(session.current_player(), Player::X);

        session.play(4).unwrap();
        session.computer_move().unwrap();
        session.reset();
        assert_eq!(session.mode(), Mode::VsComputer);
        assert_eq!(*session.board(), Board::new());
        assert_eq!(session.outcome(), GameOutcome::InProgress);

        session.toggle_mode();
        assert_eq!(session.mode(), Mode::TwoPlayer);
    }
}
