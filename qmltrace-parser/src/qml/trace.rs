//! Token-order tracing of syntax trees
//!
//!     [`Trace`] walks a tree depth-first and yields [`TraceRecord`]s: an Enter and an Exit
//!     for every node, with the node's own tokens reported as Literals in between, in the
//!     order they appear in the source. Printing the records with indentation by depth shows
//!     the tree structure and the original token sequence at the same time.
//!
//! Ordering
//!
//!     Which children and tokens a node visits, and in which order, is fixed per node kind
//!     in [rules]. Absent optional parts are skipped without leaving a record.
//!
//!     Cons lists nest one level per cell. Most lists are right-recursive (element, then the
//!     rest of the list); array elements and elisions are left-recursive (the rest of the
//!     list, then the last element). Both orders keep Literals in source order.
//!
//! Resource Use
//!
//!     The walk uses an explicit stack instead of recursion, so neither deep nesting nor
//!     long lists can exhaust the call stack. Nodes at or below [`TraceOptions::max_depth`]
//!     are reported as a single Truncated record and their subtrees skipped. The iterator
//!     is lazy: dropping it stops the traversal.

pub mod engine;
pub mod record;
mod rules;

pub use engine::{trace, Trace, TraceOptions};
pub use record::TraceRecord;
