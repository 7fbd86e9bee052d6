//! Tic-tac-toe game core with a rewindable move history.
//!
//! This library implements the full logic of a single-session
//! tic-tac-toe game: a 3x3 board, alternating turns, win and draw
//! detection, and a move-history browser that can rewind the
//! displayed position to any earlier board state. Presentation is
//! out of scope; the crate exposes boards, status, the winning line,
//! and a labelled move list as plain data for any frontend to render.
//!
//! # Architecture
//!
//! - **Rules**: pure functions classifying a board (winning line,
//!   draw), in [`rules`].
//! - **Game state manager**: [`Game`] owns the board history and the
//!   display cursor; turn order and status are derived on read.
//! - **Contracts and invariants**: the move transition is specified
//!   as preconditions plus debug-checked postconditions over the
//!   history structure, in [`contracts`] and [`invariants`].
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Game, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::Center);
//! assert_eq!(game.status_text(), "Next player: O");
//!
//! // Rewind to the start; history is untouched.
//! game.jump_to(0);
//! assert_eq!(game.status_text(), "Next player: X");
//! assert_eq!(game.history_len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::MoveRejection;
pub use game::Game;
pub use position::Position;
pub use rules::{WinLine, winning_line};
pub use types::{Board, GameStatus, Player, Square};
