//! Shared data model for the Rill compiler front end.
//!
//! Holds the types every phase agrees on: source coordinates and ranges,
//! tokens and their kinds, and the compiler pass names used to tag
//! diagnostics. No scanning or parsing logic lives here.

mod coordinate;
mod pass;
mod token;

pub use coordinate::{Column, Line, SourceCoordinate, SourceRange};
pub use pass::Pass;
pub use token::{Token, TokenKind};
