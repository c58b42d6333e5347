//! Output formats for trace records
//!
//! - text: the indented `+ Kind` / `- Kind` / `"token"` rendering
//! - jsonl: one JSON object per record

pub mod jsonl;
pub mod registry;
pub mod text;

pub use jsonl::JsonlFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use text::{render_text, TextFormatter};
