//! `Node` implementations for standard library and dependency types.
//!
//! - scalars and maps are opaque: never descended into, no capability
//! - `Vec`, arrays and `VecDeque` are sequences
//! - `Box`, `&mut`, `Option` and the `parking_lot` locks are indirection;
//!   they forward every query to their target

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use tracing::trace;

use super::traits::{AsNode, Node, Shape, Validate};
use crate::traverse::{Elements, Fields};
use crate::ValidationResult;

macro_rules! opaque {
    ($($ty:ty),* $(,)?) => {
        $(impl Node for $ty {})*
    };
}

opaque!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
    std::time::Duration,
    std::path::PathBuf,
);

impl<K, V, S> Node for HashMap<K, V, S> {}

impl<T, S> Node for HashSet<T, S> {}

impl<K, V> Node for BTreeMap<K, V> {}

impl<T> Node for BTreeSet<T> {}

#[cfg(feature = "indexmap")]
impl<K, V, S> Node for indexmap::IndexMap<K, V, S> {}

#[cfg(feature = "indexmap")]
impl<T, S> Node for indexmap::IndexSet<T, S> {}

impl<T: Node> Node for Vec<T> {
    fn shape(&self) -> Shape {
        Shape::Sequence
    }

    fn visit_elements(&mut self, elements: &mut Elements) -> ValidationResult {
        elements.elements(self.iter_mut())
    }
}

impl<T: Node, const N: usize> Node for [T; N] {
    fn shape(&self) -> Shape {
        Shape::Sequence
    }

    fn visit_elements(&mut self, elements: &mut Elements) -> ValidationResult {
        elements.elements(self.iter_mut())
    }
}

impl<T: Node> Node for VecDeque<T> {
    fn shape(&self) -> Shape {
        Shape::Sequence
    }

    fn visit_elements(&mut self, elements: &mut Elements) -> ValidationResult {
        elements.elements(self.iter_mut())
    }
}

/// A plain pointer: always followed, even when its target is an empty slot.
impl<T: Node> Node for Box<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn resolve(&mut self) -> &mut dyn Node {
        (**self).resolve()
    }

    fn visit_elements(&mut self, elements: &mut Elements) -> ValidationResult {
        (**self).visit_elements(elements)
    }

    fn visit_fields(&mut self, fields: &mut Fields) -> ValidationResult {
        (**self).visit_fields(fields)
    }

    fn as_validate(&self) -> Option<&dyn Validate> {
        (**self).as_validate()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

/// A type-erased value. It is unwrapped only when it does not hold an
/// empty slot; an erased empty slot stays as it is and counts as null.
impl Node for Box<dyn Node> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn resolve(&mut self) -> &mut dyn Node {
        if (**self).is_null() {
            self.as_node_mut()
        } else {
            (**self).resolve()
        }
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn visit_elements(&mut self, elements: &mut Elements) -> ValidationResult {
        (**self).visit_elements(elements)
    }

    fn visit_fields(&mut self, fields: &mut Fields) -> ValidationResult {
        (**self).visit_fields(fields)
    }

    fn as_validate(&self) -> Option<&dyn Validate> {
        (**self).as_validate()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

/// A borrowed handle: fully transparent, including nullness.
impl<T: ?Sized + Node> Node for &mut T {
    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn resolve(&mut self) -> &mut dyn Node {
        (**self).resolve()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn visit_elements(&mut self, elements: &mut Elements) -> ValidationResult {
        (**self).visit_elements(elements)
    }

    fn visit_fields(&mut self, fields: &mut Fields) -> ValidationResult {
        (**self).visit_fields(fields)
    }

    fn as_validate(&self) -> Option<&dyn Validate> {
        (**self).as_validate()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

/// A nullable slot. An empty slot reached during descent is filled with
/// `T::default()` before it is checked.
impl<T: Node + Default> Node for Option<T> {
    fn shape(&self) -> Shape {
        self.as_ref().map_or(Shape::Scalar, |value| value.shape())
    }

    fn resolve(&mut self) -> &mut dyn Node {
        if self.is_none() {
            trace!(
                type_name = std::any::type_name::<T>(),
                "materializing default for empty slot"
            );
        }
        self.get_or_insert_with(T::default).resolve()
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn visit_elements(&mut self, elements: &mut Elements) -> ValidationResult {
        match self {
            Some(value) => value.visit_elements(elements),
            None => Ok(()),
        }
    }

    fn visit_fields(&mut self, fields: &mut Fields) -> ValidationResult {
        match self {
            Some(value) => value.visit_fields(fields),
            None => Ok(()),
        }
    }

    fn as_validate(&self) -> Option<&dyn Validate> {
        self.as_ref().and_then(|value| value.as_validate())
    }

    fn type_name(&self) -> &'static str {
        match self {
            Some(value) => value.type_name(),
            None => std::any::type_name::<Self>(),
        }
    }
}

// Locks forward what `get_mut` can reach. Shared queries would need the lock,
// so they describe the lock itself; traversal always resolves first.
impl<T: Node> Node for parking_lot::Mutex<T> {
    fn resolve(&mut self) -> &mut dyn Node {
        self.get_mut().resolve()
    }

    fn visit_elements(&mut self, elements: &mut Elements) -> ValidationResult {
        self.get_mut().visit_elements(elements)
    }

    fn visit_fields(&mut self, fields: &mut Fields) -> ValidationResult {
        self.get_mut().visit_fields(fields)
    }
}

impl<T: Node> Node for parking_lot::RwLock<T> {
    fn resolve(&mut self) -> &mut dyn Node {
        self.get_mut().resolve()
    }

    fn visit_elements(&mut self, elements: &mut Elements) -> ValidationResult {
        self.get_mut().visit_elements(elements)
    }

    fn visit_fields(&mut self, fields: &mut Fields) -> ValidationResult {
        self.get_mut().visit_fields(fields)
    }
}
