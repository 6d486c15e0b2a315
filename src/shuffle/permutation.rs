//! Fisher–Yates shuffling, shared by both strategies.
//!
//! The swap sequence is produced lazily so the pair-swap strategy can turn
//! each step into a remote call without ever holding the playlist contents.

use rand::Rng;

/// Iterator over Fisher–Yates swap steps `(i, j)`, `i` running from
/// `len - 1` down to `1` and `j` drawn uniformly from `0..=i`.
pub struct SwapSteps<'r, R: ?Sized> {
    next: usize,
    rng: &'r mut R,
}

impl<R: Rng + ?Sized> Iterator for SwapSteps<'_, R> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == 0 {
            return None;
        }
        let i = self.next;
        self.next -= 1;
        Some((i, self.rng.random_range(0..=i)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.next, Some(self.next))
    }
}

impl<R: Rng + ?Sized> ExactSizeIterator for SwapSteps<'_, R> {}

pub fn swap_steps<R: Rng + ?Sized>(len: usize, rng: &mut R) -> SwapSteps<'_, R> {
    SwapSteps {
        next: len.saturating_sub(1),
        rng,
    }
}

/// Shuffles `items` in place, every ordering equally likely.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for (i, j) in swap_steps(items.len(), rng) {
        items.swap(i, j);
    }
}
