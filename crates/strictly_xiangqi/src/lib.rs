//! Strictly Xiangqi - pure move-legality rules
//!
//! A stateless referee for a subset of xiangqi (Chinese chess). Given a
//! snapshot of the board, it decides whether a proposed move obeys the
//! moving piece's geometry and whether it captures the opposing General.
//!
//! # Architecture
//!
//! - **Types**: colors, piece kinds, positions and their text labels
//! - **Board**: immutable-by-contract occupancy snapshot
//! - **Rules**: one [`MovementRule`] per implemented piece, dispatched by kind
//! - **Validator**: [`MoveValidator`], the public entry point
//!
//! # Example
//!
//! ```
//! use strictly_xiangqi::{Board, Color, MoveValidator, Piece, PieceKind, Position};
//!
//! let board = Board::new().with(
//!     Position::new(2, 5),
//!     Piece::new(PieceKind::General, Color::Red),
//! );
//! assert!(MoveValidator::is_legal_move(
//!     PieceKind::General,
//!     Color::Red,
//!     Position::new(2, 5),
//!     Position::new(3, 5),
//!     &board,
//! ));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod rules;
mod types;
mod validator;

pub use action::{IllegalMove, Move};
pub use board::Board;
pub use rules::{MovementRule, Rule, RuleCheck, rule_for};
pub use types::{COLS, Color, ParsePieceError, ParsePositionError, Piece, PieceKind, Position, ROWS};
pub use validator::{GameStatus, Judgement, MoveValidator};
