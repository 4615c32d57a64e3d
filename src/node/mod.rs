//! Traversable value abstraction.
//!
//! [`Node`] describes how a value is laid out (its [`Shape`], its elements or
//! fields, its indirection) and whether it carries the [`Validate`]
//! capability. Implementations for common standard library types live in
//! this module; host types implement `Node` by hand or with the
//! [`node!`](crate::node!) macro.

mod impls;
mod traits;

pub use traits::{AsNode, Node, Shape, Validate};
