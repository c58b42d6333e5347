//! Syntax tree node types
//!
//! Nodes own their children exclusively. Optional grammar symbols are `Option`s;
//! sibling chains (argument lists, qualified ids, ...) are stored flattened, with the
//! separator token of every cell kept next to the element it belongs to.

pub mod expressions;
pub mod statements;
pub mod ui;

pub use expressions::*;
pub use statements::*;
pub use ui::*;

/// A parsed source: a QML document or a plain JavaScript program
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Qml(UiProgram),
    Script(Program),
}
