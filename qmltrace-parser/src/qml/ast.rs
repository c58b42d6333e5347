//! Abstract syntax tree for QML documents and embedded JavaScript
//!
//! The tree is built once by the parser and never mutated afterwards. Tools that
//! need to walk it generically go through [`NodeRef`], a borrowed view with one
//! variant per [`NodeKind`].

pub mod elements;
pub mod error;
pub mod kind;
pub mod node_ref;
pub mod range;

pub use elements::*;
pub use error::ParserError;
pub use kind::NodeKind;
pub use node_ref::NodeRef;
pub use range::{LineIndex, Position, Span};
