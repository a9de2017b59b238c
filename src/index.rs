//! Modular index arithmetic for a ring of `cap` slots.
//! All functions expect `index < cap` and `cap > 0`, and never overflow for any `cap`.

/// The slot after `index`, wrapping to 0 past the last slot.
#[inline]
pub(crate) const fn next(index: usize, cap: usize) -> usize {
    if index + 1 == cap {
        0
    } else {
        index + 1
    }
}

/// The slot before `index`, wrapping to `cap - 1` before slot 0.
#[inline]
pub(crate) const fn prev(index: usize, cap: usize) -> usize {
    if index == 0 {
        cap - 1
    } else {
        index - 1
    }
}

/// Maps a logical offset from `front` onto its physical slot.
/// `logical` may be anything up to `cap`.
#[inline]
pub(crate) const fn physical(front: usize, logical: usize, cap: usize) -> usize {
    let to_end = cap - front;
    if logical < to_end {
        front + logical
    } else {
        logical - to_end
    }
}
