//! Single-fire latch.

/// Holds a value that can be taken exactly once.
///
/// A latch is created per gesture instance and dropped with it, so a
/// second completion for the same gesture finds it already fired. There is
/// no way to re-arm a fired latch.
#[derive(Debug)]
pub struct Latch<T> {
    value: Option<T>,
}

impl<T> Latch<T> {
    /// A latch that will yield `value` on its first fire.
    pub fn armed(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// A latch with nothing to yield.
    pub fn disarmed() -> Self {
        Self { value: None }
    }

    /// Take the value. Every call after the first returns `None`.
    pub fn fire(&mut self) -> Option<T> {
        self.value.take()
    }

    pub fn is_armed(&self) -> bool {
        self.value.is_some()
    }
}

impl<T> Default for Latch<T> {
    fn default() -> Self {
        Self::disarmed()
    }
}
