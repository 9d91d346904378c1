//! Splitting the ticker list into request-sized groups.

use std::num::NonZeroUsize;
use std::slice::Chunks;

use super::ticker::Ticker;

/// Symbols per request accepted by the IEX Cloud batch endpoint.
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(n) => n,
    None => unreachable!(),
};

/// Partitions `tickers` into consecutive groups of at most `size`, in order.
///
/// The iterator is lazy and borrowing; calling `batches` again on the same
/// slice replays the same groups. An empty slice yields no groups.
pub fn batches(tickers: &[Ticker], size: NonZeroUsize) -> Chunks<'_, Ticker> {
    tickers.chunks(size.get())
}

/// Number of groups [`batches`] will yield.
pub fn batch_count(len: usize, size: NonZeroUsize) -> usize {
    len.div_ceil(size.get())
}
