//! Protocol module containing message types, leaf codecs and the generator.

pub mod codec;
pub mod diagnostics;
pub mod framing;
pub mod game_options;
pub mod messages;
pub mod pack;
pub mod sequence;
pub mod vector2;

pub use codec::{generate_payloads, GenerateError, PacketGenerator};
pub use messages::*;
pub use sequence::SequenceCounter;
