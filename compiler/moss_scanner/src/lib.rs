//! Low-level word scanner for Moss.
//!
//! Walks a byte buffer one Unicode scalar value ("word") at a time,
//! tracking byte offset, word offset, and line number, with checkpoint
//! support so a consuming parser can speculatively scan ahead and
//! backtrack. This crate is standalone (zero `moss_*` dependencies) so
//! external tools (LSP, formatter, highlighter) can tokenize source text
//! without pulling in the compiler.
//!
//! # Layers
//!
//! - [`decode`]: stateless UTF-8 word extraction driven by the lead byte's
//!   high bits. Lenient by default (trailing bytes returned verbatim);
//!   [`Validation::Strict`] opts into full well-formedness checks.
//! - [`Scanner`]: the stateful walker. Owns the cursor, a checkpoint stack
//!   for arbitrary-depth backtracking ([`Scanner::pushd`] /
//!   [`Scanner::popd`]), and a one-step undo slot ([`Scanner::prev_scan`]).
//! - [`DiagnosticSink`]: injectable collaborator receiving one short-code
//!   message per decode failure. No-op by default.
//!
//! # Example
//!
//! ```
//! use moss_scanner::Scanner;
//!
//! let mut scanner = Scanner::new("hi\n你好".as_bytes());
//! let first = scanner.scan()?;
//! assert_eq!(first.as_slice(), b"h");
//!
//! scanner.pushd(); // save before speculating
//! let second = scanner.scan()?;
//! assert_eq!(second.as_slice(), b"i");
//! scanner.popd(); // didn't like it, backtrack
//! assert_eq!(scanner.byte_pos(), 1);
//! # Ok::<(), moss_scanner::ScanError>(())
//! ```

mod cursor;
pub mod decode;
mod scan_error;
mod scanner;
mod sink;

pub use cursor::{CursorState, Location};
pub use decode::{Validation, WordBytes};
pub use scan_error::ScanError;
pub use scanner::{Scanner, Words};
pub use sink::{DiagnosticSink, MemorySink, NoopSink, TracingSink};
