use thiserror::Error;

/// Errors raised while constructing a [`Tree`][crate::Tree].
///
/// Missing keys are not errors: [`Tree::find`][crate::Tree::find] returns `None` and
/// [`Tree::delete`][crate::Tree::delete] does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A tree was built from a collection without any keys.
    #[error("cannot build a tree from an empty collection of keys")]
    EmptyInput,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
