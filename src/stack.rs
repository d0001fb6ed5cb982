#[cfg(feature = "tracing")]
use tracing::{instrument, Level};

pub const MAX_CAPACITY: usize = 100_000;
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid stack capacity: {0} (expected 0..={MAX_CAPACITY})")]
    InvalidCapacity(i64),
    #[error("stack overflow: capacity of {capacity} reached")]
    Overflow { capacity: usize },
    #[error("stack underflow: no item on stack")]
    Underflow,
}

/// Fixed-capacity LIFO stack of integers.
///
/// Storage is allocated once on construction and never grows, a push on a
/// full stack is an error instead of a reallocation.
#[derive(Debug, Clone)]
pub struct BoundedStack {
    data: Box<[i64]>,
    size: usize,
}

impl BoundedStack {
    pub fn new(capacity: i64) -> Result<Self, Error> {
        let capacity = usize::try_from(capacity)
            .ok()
            .filter(|capacity| *capacity <= MAX_CAPACITY)
            .ok_or(Error::InvalidCapacity(capacity))?;

        Ok(Self::alloc(capacity))
    }

    fn alloc(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            size: 0,
        }
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
        self.size = 0;
    }

    #[cfg_attr(feature = "tracing", instrument(level = Level::TRACE, skip(self), fields(size = self.size), err(level = Level::DEBUG)))]
    pub fn push(&mut self, value: i64) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::Overflow {
                capacity: self.capacity(),
            });
        }

        self.data[self.size] = value;
        self.size += 1;

        Ok(())
    }

    #[cfg_attr(feature = "tracing", instrument(level = Level::TRACE, skip_all, fields(size = self.size), ret, err(level = Level::DEBUG)))]
    pub fn pop(&mut self) -> Result<i64, Error> {
        if self.is_empty() {
            return Err(Error::Underflow);
        }

        self.size -= 1;
        Ok(self.data[self.size])
    }

    pub fn peek(&self) -> Option<i64> {
        self.as_slice().last().copied()
    }

    /// Live elements, bottom of the stack first.
    pub fn as_slice(&self) -> &[i64] {
        &self.data[..self.size]
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl Default for BoundedStack {
    fn default() -> Self {
        Self::alloc(DEFAULT_CAPACITY)
    }
}
