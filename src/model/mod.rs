//! # Word Graph Model
//!
//! Plain DTOs shared by the graph, the path finder and callers.
//!
//! Design rule: no search state lives here. Nodes are frozen at build time
//! and queries keep their own bookkeeping.

pub mod node;
pub mod path;

pub use node::{Node, NodeId};
pub use path::{Path, Step};
