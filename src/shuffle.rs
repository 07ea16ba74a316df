//! Deterministic shuffles over arbitrary sequences.
//!
//! Neither shuffle uses randomness: the same input always yields the same
//! order. Both work on any element type, not only cards.

use core::fmt;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::error::ShuffleError;

/// The available shuffle techniques.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShuffleKind {
    /// Shrinking middle block moved to the top, see [`modified_overhand`].
    ModifiedOverhand,
    /// Alternating top/bottom placement, see [`mongean`].
    Mongean,
}

impl fmt::Display for ShuffleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ModifiedOverhand => "modified_overhand",
            Self::Mongean => "mongean",
        })
    }
}

/// Takes `count` items from the middle and moves them to the front, then
/// repeats with one item fewer until the block is empty.
///
/// When the parities of the length and the block size differ, the extra
/// item comes from below the exact center.
///
/// # Errors
///
/// Returns [`ShuffleError::CountOutOfRange`] if `count` exceeds the number
/// of items. The items are left untouched in that case.
///
/// # Example
///
/// ```
/// use bjsim::shuffle::modified_overhand;
///
/// let mut items: Vec<u32> = (0..52).collect();
/// modified_overhand(&mut items, 1).unwrap();
/// assert_eq!(items[0], 25);
/// assert_eq!(items[25], 24);
/// ```
pub fn modified_overhand<T>(items: &mut [T], count: usize) -> Result<(), ShuffleError> {
    let len = items.len();
    if count > len {
        return Err(ShuffleError::CountOutOfRange { count, len });
    }

    for block in (1..=count).rev() {
        let start = (len - block) / 2;
        let end = start + block;
        items[..end].rotate_right(block);
    }

    Ok(())
}

/// Performs a single mongean pass.
///
/// Items are taken from the top in order and placed alternately under and
/// over the growing pile, so the last item of an even-length sequence ends
/// on top. Twelve passes restore a 52-item sequence.
///
/// # Example
///
/// ```
/// use bjsim::shuffle::mongean;
///
/// let mut items = vec![0, 1, 2, 3, 4];
/// mongean(&mut items);
/// assert_eq!(items, [3, 1, 0, 2, 4]);
/// ```
pub fn mongean<T>(items: &mut Vec<T>) {
    let mut pile = VecDeque::with_capacity(items.len());
    for (index, item) in items.drain(..).enumerate() {
        if index % 2 == 1 {
            pile.push_front(item);
        } else {
            pile.push_back(item);
        }
    }
    items.extend(pile);
}
