use std::cmp::Ordering;

/// Compare/swap access to the slots of an array-backed binary heap.
///
/// The sift walks below are written once against this trait. The plain queue
/// implements it directly over its `Vec`; the lookup queue's implementation
/// also rewrites its value→index map on every swap, which is what keeps the
/// map transactionally consistent through every repair.
pub(crate) trait HeapSlots {
    fn len(&self) -> usize;

    /// Compares the priorities stored at `i` and `j`.
    fn compare(&self, i: usize, j: usize) -> Ordering;

    /// Swaps slots `i` and `j`, along with any derived bookkeeping.
    fn swap(&mut self, i: usize, j: usize);
}

#[inline]
pub(crate) const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
pub(crate) const fn left(index: usize) -> usize {
    index * 2 + 1
}

#[inline]
pub(crate) const fn right(index: usize) -> usize {
    index * 2 + 2
}

/// Moves the element at `index` toward the root while it beats its parent.
///
/// `winner` is the comparison outcome that wins toward the root: `Less` for
/// a min heap, `Greater` for a max heap. Returns the final index.
pub(crate) fn sift_up<S: HeapSlots>(slots: &mut S, winner: Ordering, mut index: usize) -> usize {
    while index != 0 {
        let up = parent(index);
        if slots.compare(index, up) != winner {
            break;
        }
        slots.swap(index, up);
        index = up;
    }
    index
}

/// Moves the element at `index` away from the root while either child beats
/// it, always descending into the stronger child. Returns the final index.
pub(crate) fn sift_down<S: HeapSlots>(slots: &mut S, winner: Ordering, mut index: usize) -> usize {
    loop {
        let mut next = index;
        let l = left(index);
        if l < slots.len() && slots.compare(l, next) == winner {
            next = l;
        }
        let r = right(index);
        if r < slots.len() && slots.compare(r, next) == winner {
            next = r;
        }
        if next == index {
            return index;
        }
        slots.swap(index, next);
        index = next;
    }
}

/// Restores heap order over arbitrary contents by sifting every non-leaf
/// down, last parent first. O(n), unlike n repeated insertions.
pub(crate) fn heapify<S: HeapSlots>(slots: &mut S, winner: Ordering) {
    for index in (0..slots.len() / 2).rev() {
        sift_down(slots, winner, index);
    }
}
