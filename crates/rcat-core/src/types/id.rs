//! Stable handles into the manager's recipe arena.

/// An opaque handle for a recipe owned by a [`RecipeManager`](crate::RecipeManager).
///
/// Handles are allocated monotonically by the manager and never reused
/// within one manager, so a stale handle simply fails to resolve instead of
/// pointing at a different recipe. The country index stores these handles
/// rather than copies of the recipes.
///
/// # Examples
///
/// ```
/// use rcat_core::RecipeId;
///
/// let a = RecipeId::new(1);
/// let b = RecipeId::new(1);
/// assert_eq!(a, b);
/// assert_eq!(a.as_u64(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecipeId(u64);

impl RecipeId {
    /// Creates a handle from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the handle that follows this one.
    #[inline]
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
