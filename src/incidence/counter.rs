//! Monotonic counter that supplies default edge ids.

use super::id::Id;

/// Issues `Id::Int(0)`, `Id::Int(1)`, … for edges added without an explicit id.
///
/// The counter only moves forward. An explicit integer id at or above the
/// current position pushes the counter past it; smaller or string ids leave
/// it untouched, and so does `i64::MAX`, which has no successor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdCounter {
    next: i64,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value the next call to [`issue`](Self::issue) starts from.
    #[inline]
    pub fn peek(&self) -> i64 {
        self.next
    }

    /// Hand out the next integer id for which `taken` is false.
    ///
    /// Once the counter reaches `i64::MAX` it stops advancing and the lowest
    /// free non-negative id is handed out instead.
    pub fn issue(&mut self, taken: impl Fn(&Id) -> bool) -> Id {
        while self.next < i64::MAX {
            let id = Id::Int(self.next);
            self.next += 1;
            if !taken(&id) {
                return id;
            }
        }
        let mut v = 0;
        while v < i64::MAX && taken(&Id::Int(v)) {
            v += 1;
        }
        Id::Int(v)
    }

    /// Record an explicitly supplied id so it is never issued again.
    #[inline]
    pub fn observe(&mut self, id: &Id) {
        if let Id::Int(v) = id {
            if *v >= self.next && *v < i64::MAX {
                self.next = v + 1;
            }
        }
    }
}
