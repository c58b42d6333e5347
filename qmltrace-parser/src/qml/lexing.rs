//! Lexer
//!
//!     Tokenization for QML documents and the JavaScript embedded in them.
//!
//!     The raw token set is a logos lexer (see [tokens]). Whitespace and comments never
//!     reach the parser; what the parser needs from them is whether a line break came
//!     before a token, which [Lexer] records on every [Lexeme] for automatic semicolon
//!     insertion.
//!
//!     QML words such as `import`, `property` or `on` are not reserved. They lex as
//!     identifiers and the parser looks at their text where the grammar expects them.
//!
//! Regular Expressions
//!
//!     A `/` in operand position starts a regular expression literal, everywhere else it is
//!     division. Only the parser knows which, so the lexer always produces the punctuator and
//!     the parser asks for a rescan ([Lexer::rescan_regexp]) when it needs a literal.

pub mod base_tokenization;
pub mod lexer;
pub mod tokens;

pub use base_tokenization::tokenize;
pub use lexer::{LexError, Lexeme, Lexer};
pub use tokens::Token;
