//! # among-core
//!
//! Outbound packet generator for the Among Us wire protocol.
//!
//! This crate turns typed, in-memory packet descriptions into the exact byte
//! sequence the game server and other clients expect.  It has no sockets,
//! no async runtime and no global state: every call is a pure function of its
//! input plus a [`GeneratorConfig`].
//!
//! # Architecture overview (for beginners)
//!
//! The protocol nests three layers of *tagged unions*:
//!
//! ```text
//! payload      [len:2][PayloadType:1][code:4]...        (GameData, JoinGame, ...)
//!  └─ game data  [len:2][GameDataType:1][net_id]...     (Data, Rpc, SceneChange)
//!      └─ rpc      [net_id][RpcFlag:1][body]            (CheckName, CheckColor, ...)
//! ```
//!
//! Every record starts with a 2-byte little-endian length and a 1-byte tag.
//! The length lets a receiver skip records it does not understand, so it must
//! be exact: one wrong length corrupts everything that follows in the stream.
//!
//! - **`protocol`** – message types, the record framer, the leaf codecs
//!   (packed integers, vectors, game options) and the generator itself.
//! - **`config`** – wire-compatibility switches, loadable from TOML.

pub mod config;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `among_core::PayloadPacket` instead of `among_core::protocol::messages::PayloadPacket`.
pub use config::{GeneratorConfig, LengthPolicy, StringOverflow};
pub use protocol::codec::{generate_payloads, GenerateError, PacketGenerator};
pub use protocol::diagnostics::{Diagnostic, DiagnosticSink, MemorySink, TracingSink};
pub use protocol::messages::{
    GameDataPacket, GameOptions, JoinGamePacket, PayloadPacket, RpcMessage, Vector2,
};
