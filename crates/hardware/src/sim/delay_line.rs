//! Fixed-length delay line.
//!
//! A circular buffer that mirrors the pipeline's own delay: one value enters
//! per clock edge and the value that entered `len - 1` edges earlier is read
//! back. With `len` equal to the pipeline latency, the value read on the edge
//! where an output turns valid is the one pushed with that output's input.

/// Rotating buffer of exactly `len` slots.
#[derive(Clone, Debug)]
pub struct DelayLine<T> {
    slots: Vec<T>,
    /// Slot written by the next [`shift`](Self::shift).
    head: usize,
}

impl<T: Clone> DelayLine<T> {
    /// Creates a delay line with every slot holding `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn new(len: usize, fill: T) -> Self {
        assert!(len > 0, "delay line needs at least one slot");
        Self {
            slots: vec![fill; len],
            head: 0,
        }
    }
}

impl<T> DelayLine<T> {
    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: a delay line has at least one slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Clocks `value` in and returns the oldest value still held.
    ///
    /// The returned slot is the one the next shift will overwrite, so it is
    /// the value pushed `len - 1` shifts ago (or `value` itself for `len == 1`).
    pub fn shift(&mut self, value: T) -> &T {
        self.slots[self.head] = value;
        self.head = (self.head + 1) % self.slots.len();
        &self.slots[self.head]
    }

    /// Iterates from the oldest to the newest held value.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer)
    }
}
