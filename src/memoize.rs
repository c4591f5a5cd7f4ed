use std::cell::OnceCell;

/// A lazily-computed value cached for the lifetime of the owning instance.
///
/// Embed one cell per memoized property; the computation passed to
/// [`get_or_compute`](Memoized::get_or_compute) runs at most once per cell,
/// no matter how many times the value is read. Cells are independent: nothing
/// is shared across instances.
///
/// Backed by [`std::cell::OnceCell`], so a cell is not `Sync`; single-threaded
/// access is assumed. A multi-threaded adaptation would use
/// `std::sync::OnceLock` instead.
///
/// # Example
/// ```rust
/// use payload_utils::memoize::Memoized;
///
/// struct Expensive {
///     answer: Memoized<i32>,
/// }
///
/// impl Expensive {
///     fn answer(&self) -> i32 {
///         *self.answer.get_or_compute(|| 42)
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Memoized<T> {
    cell: OnceCell<T>,
}

impl<T> Memoized<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the cached value, computing it first if absent.
    ///
    /// `compute` is invoked on the first call only; every later call returns
    /// the stored value unchanged.
    pub fn get_or_compute<F>(&self, compute: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(compute)
    }

    /// Peek at the cached value without computing it.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Whether the value has been computed yet.
    pub fn is_computed(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Memoized<T> {
    fn default() -> Self {
        Self::new()
    }
}
