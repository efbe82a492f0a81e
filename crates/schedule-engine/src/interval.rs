//! Overlap tests on same-day minute intervals.
//!
//! Intervals are half-open `[start, end)`: a class ending at 10:00 and another
//! starting at 10:00 can share a room.

/// A `[start, end)` range in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteRange {
    pub start: u32,
    pub end: u32,
}

impl MinuteRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// `true` when the range is empty or inverted.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `self` (the candidate) collides with `other` (a booked slot).
    ///
    /// Three cases: the candidate starts inside the booking, ends inside it,
    /// or swallows it whole. For non-empty ranges this is the same as
    /// `self.start < other.end && other.start < self.end`.
    pub fn overlaps(&self, other: &MinuteRange) -> bool {
        let (new_start, new_end) = (self.start, self.end);
        let (ev_start, ev_end) = (other.start, other.end);

        (new_start >= ev_start && new_start < ev_end)
            || (new_end > ev_start && new_end <= ev_end)
            || (new_start <= ev_start && new_end >= ev_end)
    }

    /// Length of the shared part of two ranges, 0 when they only touch.
    pub fn overlap_minutes(&self, other: &MinuteRange) -> u32 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        end.saturating_sub(start)
    }
}
