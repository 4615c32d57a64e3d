//! Field visibility classification.
//!
//! A record field is traversed only if it is public. Visibility is either
//! declared explicitly with [`Visibility`] or derived from the spelling of
//! the field's name by [`is_public_field`]: a name is public iff its first
//! character changes when lowercased.

/// Whether a record field takes part in traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// The field is descended into and checked.
    Public,
    /// The field is skipped entirely.
    Private,
}

impl Visibility {
    /// Classifies a field by the casing of its name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validity::Visibility;
    ///
    /// assert_eq!(Visibility::of_name("Email"), Visibility::Public);
    /// assert_eq!(Visibility::of_name("email"), Visibility::Private);
    /// assert_eq!(Visibility::of_name("_Email"), Visibility::Private);
    /// ```
    pub fn of_name(name: &str) -> Self {
        if is_public_field(name) {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }

    /// Returns true for [`Visibility::Public`].
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

/// Returns true if a field with this name is public.
///
/// Only the first character counts. Lowercase letters, digits, `_` and
/// every other caseless character are private, as is the empty name.
pub fn is_public_field(name: &str) -> bool {
    match name.chars().next() {
        Some(first) => first.to_lowercase().ne(std::iter::once(first)),
        None => false,
    }
}
