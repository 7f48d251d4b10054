//! Non-fatal findings reported while generating packets.
//!
//! Records the generator cannot lay out are skipped rather than aborting the
//! whole batch.  Each skip (or lossy fallback) is reported to a
//! [`DiagnosticSink`] supplied by the caller:
//!
//! - [`TracingSink`] logs through `tracing` at `WARN` level (the default).
//! - [`MemorySink`] keeps every diagnostic in memory so tests and tools can
//!   inspect exactly what was dropped.

use std::fmt;
use std::sync::Mutex;

use crate::protocol::messages::{pretty_tag, GameDataType, PayloadType, RpcFlag};

/// One non-fatal event raised during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A payload with this tag was dropped from the output entirely.
    UnsupportedPayload { payload_type: u8 },
    /// A game-data record with this tag was encoded as zero bytes.
    UnsupportedGameData { kind: u8 },
    /// An RPC with an unrecognised flag was written as raw data.
    DataOnlyRpc { flag: u8, data_len: usize },
    /// A string was cut down to fit its 1-byte length prefix.
    StringTruncated {
        field: &'static str,
        original_len: usize,
        written_len: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedPayload { payload_type } => write!(
                f,
                "packet of type {} wasn't able to be generated",
                pretty_tag::<PayloadType>(*payload_type)
            ),
            Diagnostic::UnsupportedGameData { kind } => write!(
                f,
                "game data packet of type {} wasn't able to be generated",
                pretty_tag::<GameDataType>(*kind)
            ),
            Diagnostic::DataOnlyRpc { flag, data_len } => write!(
                f,
                "generated data-only packet of type {} ({data_len} bytes)",
                pretty_tag::<RpcFlag>(*flag)
            ),
            Diagnostic::StringTruncated {
                field,
                original_len,
                written_len,
            } => write!(
                f,
                "string field `{field}` truncated from {original_len} to {written_len} bytes"
            ),
        }
    }
}

/// Receives diagnostics from a [`crate::PacketGenerator`].
///
/// Implementations must be cheap: `report` is called inline while encoding.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Logs every diagnostic with `tracing::warn!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::warn!(target: "among_core::generator", "{diagnostic}");
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything reported so far, in report order.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Removes and returns everything reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        match self.entries.lock() {
            Ok(mut entries) => std::mem::take(&mut *entries),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: &Diagnostic) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(diagnostic.clone()),
            Err(poisoned) => poisoned.into_inner().push(diagnostic.clone()),
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<S> {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}
