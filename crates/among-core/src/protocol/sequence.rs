//! Thread-safe sequence counter for DATA records.
//!
//! Every DATA record carries a 16-bit sequence number so receivers can throw
//! away movement updates that arrive out of order.  The counter is per network
//! object; it wraps from `u16::MAX` back to 0, and receivers compare sequence
//! numbers with wrap-around in mind.
//!
//! The counter uses `AtomicU16`, so several threads producing updates for the
//! same object can share one counter without a lock.

use std::sync::atomic::{AtomicU16, Ordering};

use crate::protocol::messages::{DataPacket, Vector2};

/// A lock-free, wrapping counter for [`DataPacket::sequence`].
///
/// # Examples
///
/// ```rust
/// use among_core::protocol::SequenceCounter;
///
/// let counter = SequenceCounter::new();
/// assert_eq!(counter.next(), 0);
/// assert_eq!(counter.next(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SequenceCounter {
    inner: AtomicU16,
}

impl SequenceCounter {
    /// Creates a new counter starting at 0.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a counter whose first [`next`](Self::next) returns `value`.
    pub fn starting_at(value: u16) -> Self {
        Self {
            inner: AtomicU16::new(value),
        }
    }

    /// Returns the next sequence number and advances the counter.
    ///
    /// `Relaxed` is enough: the value only orders DATA records, it does not
    /// publish any other memory.
    pub fn next(&self) -> u16 {
        self.inner.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the value the next call to [`next`](Self::next) will produce.
    pub fn peek(&self) -> u16 {
        self.inner.load(Ordering::Relaxed)
    }

    /// Builds a DATA record for `net_id` stamped with the next sequence number.
    pub fn data_packet(&self, net_id: u32, position: Vector2, velocity: Vector2) -> DataPacket {
        DataPacket {
            net_id,
            sequence: self.next(),
            position,
            velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_counter_starts_at_zero_and_increments() {
        let counter = SequenceCounter::new();
        assert_eq!(counter.next(), 0);
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.peek(), 2);
    }

    #[test]
    fn test_counter_wraps_at_u16_max() {
        let counter = SequenceCounter::starting_at(u16::MAX);
        assert_eq!(counter.next(), u16::MAX);
        assert_eq!(counter.next(), 0);
    }

    #[test]
    fn test_data_packet_consumes_a_sequence_number() {
        let counter = SequenceCounter::starting_at(41);
        let packet = counter.data_packet(7, Vector2::new(1.0, 2.0), Vector2::ZERO);
        assert_eq!(packet.sequence, 41);
        assert_eq!(packet.net_id, 7);
        assert_eq!(counter.peek(), 42);
    }

    #[test]
    fn test_concurrent_callers_never_share_a_value() {
        let counter = Arc::new(SequenceCounter::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || (0..1000).map(|_| counter.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().expect("thread panicked") {
                assert!(seen.insert(value), "duplicate sequence number {value}");
            }
        }
        assert_eq!(seen.len(), 4000);
    }
}
