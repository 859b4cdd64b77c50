//! Character-level plumbing for the Rill lexer.
//!
//! [`SourceBuffer`] decodes one input up front; [`CharCursor`] walks it with
//! peek/consume/pushback. Keeping this crate free of `rill_*` dependencies
//! lets external tools reuse the cursor without the rest of the compiler.

mod cursor;
mod source_buffer;

pub use cursor::CharCursor;
pub use source_buffer::SourceBuffer;
