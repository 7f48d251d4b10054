//! Binary generator for outbound Among Us payloads.
//!
//! Wire format, outermost first:
//! ```text
//! payload    [len:2][PayloadType:1][code:i32]([recipient:packed])[game data...]
//! game data  [len:2][GameDataType:1][net_id:packed][...]
//! rpc        [len:2][GameDataType::Rpc:1][net_id:packed][RpcFlag:1][...]
//! ```
//! All multi-byte integers are little-endian.  Every `len` is computed before
//! its record is written: leaf records from a closed-form size, payloads from
//! their already-serialised game-data records.
//!
//! Records the generator cannot lay out are skipped and reported to the
//! [`DiagnosticSink`]; only contract violations (a non-request JOIN_GAME, an
//! oversized string or record) abort generation, and then no bytes at all are
//! returned.

use thiserror::Error;
use tracing::debug;

use crate::config::{GeneratorConfig, LengthPolicy, StringOverflow};
use crate::protocol::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::protocol::framing::{utf8_prefix, write_record_header, write_short_string};
use crate::protocol::messages::{
    DataPacket, GameDataPacket, GameDataType, JoinGamePacket, PayloadPacket, PayloadType,
    RpcMessage, RpcPacket, SceneChangePacket, JOIN_GAME_REQUEST_LEN, LEGACY_FIXED_LEN,
    MAX_STRING_LEN, OWNED_MAPS_ALL,
};
use crate::protocol::pack::{packed_len, write_packed};
use crate::protocol::vector2::VECTOR2_SIZE;

/// Errors that abort generation of a whole batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// A JOIN_GAME payload did not have the join-request shape.
    #[error("JOIN_GAME payload must be a join request, got the {shape} shape")]
    InvalidJoinGame { shape: &'static str },

    /// A string does not fit its 1-byte length prefix.
    #[error("string field `{field}` is {len} bytes, at most 255 fit a 1-byte length prefix")]
    StringTooLong { field: &'static str, len: usize },

    /// A record body does not fit the 2-byte length field.
    #[error("record with tag 0x{tag:02X} has a {len}-byte body, the length field holds at most 65535")]
    RecordTooLarge { tag: u8, len: usize },
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Generates `packets` with the default configuration, logging diagnostics
/// through `tracing`.
///
/// # Errors
///
/// Returns [`GenerateError`] if any packet violates the wire contract.
///
/// # Examples
///
/// ```rust
/// use among_core::{generate_payloads, JoinGamePacket, PayloadPacket};
///
/// let bytes = generate_payloads(&[PayloadPacket::JoinGame(JoinGamePacket::Request { code: 42 })])
///     .unwrap();
/// assert_eq!(bytes, vec![0x05, 0x00, 0x01, 0x2A, 0x00, 0x00, 0x00, 0x07]);
/// ```
pub fn generate_payloads(packets: &[PayloadPacket]) -> Result<Vec<u8>, GenerateError> {
    PacketGenerator::new().generate(packets)
}

/// Checks that a JOIN_GAME payload is a join request and returns its code.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidJoinGame`] for any other shape.
pub fn assert_join_request(packet: &JoinGamePacket) -> Result<i32, GenerateError> {
    match packet {
        JoinGamePacket::Request { code } => Ok(*code),
        JoinGamePacket::Error { .. } => Err(GenerateError::InvalidJoinGame { shape: "error" }),
    }
}

/// Turns payload packets into wire bytes.
///
/// Holds no mutable state, so one generator can serve any number of threads
/// as long as its sink is `Sync` (which [`DiagnosticSink`] requires).
#[derive(Debug, Clone, Default)]
pub struct PacketGenerator<S = TracingSink> {
    config: GeneratorConfig,
    sink: S,
}

impl PacketGenerator<TracingSink> {
    /// Creates a generator with the default configuration and tracing sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with `config` and the tracing sink.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self::with_sink(config, TracingSink)
    }
}

impl<S: DiagnosticSink> PacketGenerator<S> {
    /// Creates a generator that reports diagnostics to `sink`.
    pub fn with_sink(config: GeneratorConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Generates every packet in order and concatenates the results.
    ///
    /// Unsupported payloads contribute nothing.  There is no outer header:
    /// each payload frames itself.
    ///
    /// # Errors
    ///
    /// Returns the first [`GenerateError`]; no partial output is returned.
    pub fn generate(&self, packets: &[PayloadPacket]) -> Result<Vec<u8>, GenerateError> {
        let mut buf = Vec::new();
        let mut written = 0usize;
        for packet in packets {
            if self.write_payload(&mut buf, packet)? {
                written += 1;
            }
        }
        debug!(
            payloads = packets.len(),
            written,
            bytes = buf.len(),
            "generated payload batch"
        );
        Ok(buf)
    }

    /// Generates a single payload.
    ///
    /// Returns `None` when the payload is unsupported and was dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the payload violates the wire contract.
    pub fn generate_payload(&self, packet: &PayloadPacket) -> Result<Option<Vec<u8>>, GenerateError> {
        let mut buf = Vec::new();
        Ok(self.write_payload(&mut buf, packet)?.then_some(buf))
    }

    /// Generates a single game-data record, as it appears inside a payload.
    ///
    /// An unsupported record yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the record violates the wire contract.
    pub fn generate_game_data(&self, part: &GameDataPacket) -> Result<Vec<u8>, GenerateError> {
        let mut buf = Vec::new();
        self.write_game_data(&mut buf, part)?;
        Ok(buf)
    }

    // ── Payload layer ─────────────────────────────────────────────────────────

    /// Appends one payload to `buf`; returns `false` if it was dropped.
    fn write_payload(&self, buf: &mut Vec<u8>, packet: &PayloadPacket) -> Result<bool, GenerateError> {
        match packet {
            PayloadPacket::GameData(p) => {
                let parts = self.write_parts(&p.parts)?;
                write_record_header(buf, PayloadType::GameData as u8, 4 + parts.len())?;
                buf.extend_from_slice(&p.code.to_le_bytes());
                buf.extend_from_slice(&parts);
            }
            PayloadPacket::GameDataTo(p) => {
                let parts = self.write_parts(&p.parts)?;
                let len = 4 + packed_len(p.recipient) + parts.len();
                write_record_header(buf, PayloadType::GameDataTo as u8, len)?;
                buf.extend_from_slice(&p.code.to_le_bytes());
                write_packed(buf, p.recipient);
                buf.extend_from_slice(&parts);
            }
            PayloadPacket::JoinGame(join) => {
                let code = assert_join_request(join)?;
                write_record_header(
                    buf,
                    PayloadType::JoinGame as u8,
                    JOIN_GAME_REQUEST_LEN as usize,
                )?;
                buf.extend_from_slice(&code.to_le_bytes());
                buf.push(OWNED_MAPS_ALL);
            }
            PayloadPacket::Unsupported { payload_type } => {
                self.sink.report(&Diagnostic::UnsupportedPayload {
                    payload_type: *payload_type,
                });
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Serialises game-data records into a scratch buffer so the enclosing
    /// payload can measure them before writing its header.
    fn write_parts(&self, parts: &[GameDataPacket]) -> Result<Vec<u8>, GenerateError> {
        let mut buf = Vec::new();
        for part in parts {
            self.write_game_data(&mut buf, part)?;
        }
        Ok(buf)
    }

    // ── Game data layer ───────────────────────────────────────────────────────

    fn write_game_data(&self, buf: &mut Vec<u8>, part: &GameDataPacket) -> Result<(), GenerateError> {
        match part {
            GameDataPacket::Data(p) => self.write_data(buf, p),
            GameDataPacket::Rpc(p) => self.write_rpc(buf, p),
            GameDataPacket::SceneChange(p) => self.write_scene_change(buf, p),
            GameDataPacket::Unsupported { kind } => {
                self.sink.report(&Diagnostic::UnsupportedGameData { kind: *kind });
                Ok(())
            }
        }
    }

    fn write_data(&self, buf: &mut Vec<u8>, p: &DataPacket) -> Result<(), GenerateError> {
        let body_len = packed_len(p.net_id) + 2 + 2 * VECTOR2_SIZE;
        write_record_header(buf, GameDataType::Data as u8, self.declared_len(body_len))?;
        let start = buf.len();
        write_packed(buf, p.net_id);
        buf.extend_from_slice(&p.sequence.to_le_bytes());
        p.position.write(buf);
        p.velocity.write(buf);
        debug_assert_eq!(buf.len() - start, body_len);
        Ok(())
    }

    fn write_scene_change(&self, buf: &mut Vec<u8>, p: &SceneChangePacket) -> Result<(), GenerateError> {
        let location = self.fit_string("location", &p.location)?;
        let len = packed_len(p.player_id) + 1 + location.len();
        write_record_header(buf, GameDataType::SceneChange as u8, len)?;
        write_packed(buf, p.player_id);
        write_short_string(buf, location);
        Ok(())
    }

    // ── RPC layer ─────────────────────────────────────────────────────────────

    /// RPC records are framed with the game-data `Rpc` tag; the flag is the
    /// first body byte after the packed net id.
    fn write_rpc(&self, buf: &mut Vec<u8>, p: &RpcPacket) -> Result<(), GenerateError> {
        let id_len = packed_len(p.net_id);
        match &p.rpc {
            RpcMessage::SyncSettings(options) => {
                self.begin_rpc(buf, p, id_len + 1 + options.encoded_len())?;
                options.write(buf);
            }
            RpcMessage::CheckName { name } => {
                let name = self.fit_string("name", name)?;
                self.begin_rpc(buf, p, id_len + 2 + name.len())?;
                write_short_string(buf, name);
            }
            RpcMessage::CheckColor { color } => {
                self.begin_rpc(buf, p, id_len + 2)?;
                buf.push(*color);
            }
            RpcMessage::Unknown { flag, data } => {
                self.sink.report(&Diagnostic::DataOnlyRpc {
                    flag: *flag,
                    data_len: data.len(),
                });
                self.begin_rpc(buf, p, self.declared_len(id_len + 1 + data.len()))?;
                buf.extend_from_slice(data);
            }
        }
        Ok(())
    }

    fn begin_rpc(&self, buf: &mut Vec<u8>, p: &RpcPacket, declared_len: usize) -> Result<(), GenerateError> {
        write_record_header(buf, GameDataType::Rpc as u8, declared_len)?;
        write_packed(buf, p.net_id);
        buf.push(p.rpc.flag());
        Ok(())
    }

    // ── Policies ──────────────────────────────────────────────────────────────

    /// Length to declare for records the legacy generator hard-coded.
    fn declared_len(&self, computed: usize) -> usize {
        match self.config.length_policy {
            LengthPolicy::Computed => computed,
            LengthPolicy::Legacy => LEGACY_FIXED_LEN as usize,
        }
    }

    fn fit_string<'a>(&self, field: &'static str, s: &'a str) -> Result<&'a str, GenerateError> {
        if s.len() <= MAX_STRING_LEN {
            return Ok(s);
        }
        match self.config.string_overflow {
            StringOverflow::Reject => Err(GenerateError::StringTooLong { field, len: s.len() }),
            StringOverflow::Truncate => {
                let fitted = utf8_prefix(s, MAX_STRING_LEN);
                self.sink.report(&Diagnostic::StringTruncated {
                    field,
                    original_len: s.len(),
                    written_len: fitted.len(),
                });
                Ok(fitted)
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::diagnostics::{MemorySink, MockDiagnosticSink};
    use crate::protocol::messages::*;

    fn quiet_generator(config: GeneratorConfig) -> PacketGenerator<MockDiagnosticSink> {
        let mut sink = MockDiagnosticSink::new();
        sink.expect_report().never();
        PacketGenerator::with_sink(config, sink)
    }

    fn rpc(net_id: u32, rpc: RpcMessage) -> GameDataPacket {
        GameDataPacket::Rpc(RpcPacket { net_id, rpc })
    }

    fn game_data(code: i32, parts: Vec<GameDataPacket>) -> PayloadPacket {
        PayloadPacket::GameData(GameDataPayload { code, parts })
    }

    // ── JoinGame ─────────────────────────────────────────────────────────────

    #[test]
    fn test_join_game_request_is_eight_bytes() {
        let gen = quiet_generator(GeneratorConfig::default());
        let bytes = gen
            .generate(&[PayloadPacket::JoinGame(JoinGamePacket::Request { code: 42 })])
            .unwrap();
        assert_eq!(bytes, vec![0x05, 0x00, 0x01, 0x2A, 0x00, 0x00, 0x00, 0x07]);
    }

    #[test]
    fn test_join_game_negative_code_is_twos_complement() {
        let gen = quiet_generator(GeneratorConfig::default());
        let bytes = gen
            .generate(&[PayloadPacket::JoinGame(JoinGamePacket::Request { code: -2 })])
            .unwrap();
        assert_eq!(&bytes[3..7], &[0xFE, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_join_game_error_shape_is_fatal() {
        let gen = quiet_generator(GeneratorConfig::default());
        let result = gen.generate(&[
            game_data(1, vec![rpc(5, RpcMessage::CheckColor { color: 3 })]),
            PayloadPacket::JoinGame(JoinGamePacket::Error {
                reason: 3,
                message: None,
            }),
        ]);
        assert_eq!(result, Err(GenerateError::InvalidJoinGame { shape: "error" }));
    }

    // ── GameData / GameDataTo ────────────────────────────────────────────────

    #[test]
    fn test_check_color_inside_game_data() {
        let gen = quiet_generator(GeneratorConfig::default());
        let bytes = gen
            .generate(&[game_data(32, vec![rpc(5, RpcMessage::CheckColor { color: 3 })])])
            .unwrap();
        assert_eq!(
            bytes,
            vec![
                0x0A, 0x00, 0x05, 0x20, 0x00, 0x00, 0x00, // payload header + code
                0x03, 0x00, 0x02, 0x05, 0x07, 0x03, // rpc record
            ]
        );
    }

    #[test]
    fn test_game_data_to_packs_recipient_after_code() {
        let gen = quiet_generator(GeneratorConfig::default());
        let bytes = gen
            .generate(&[PayloadPacket::GameDataTo(GameDataToPayload {
                code: 1,
                recipient: 200,
                parts: vec![rpc(5, RpcMessage::CheckColor { color: 3 })],
            })])
            .unwrap();
        assert_eq!(
            bytes,
            vec![
                0x0C, 0x00, 0x06, 0x01, 0x00, 0x00, 0x00, 0xC8, 0x01, //
                0x03, 0x00, 0x02, 0x05, 0x07, 0x03,
            ]
        );
    }

    #[test]
    fn test_game_data_with_no_parts_declares_only_code() {
        let gen = quiet_generator(GeneratorConfig::default());
        let bytes = gen.generate(&[game_data(7, vec![])]).unwrap();
        assert_eq!(bytes, vec![0x04, 0x00, 0x05, 0x07, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_oversized_game_data_is_fatal() {
        let gen = quiet_generator(GeneratorConfig::default());
        let parts = vec![rpc(5, RpcMessage::CheckColor { color: 3 }); 11_000];
        let result = gen.generate(&[game_data(1, parts)]);
        assert_eq!(
            result,
            Err(GenerateError::RecordTooLarge {
                tag: PayloadType::GameData as u8,
                len: 4 + 6 * 11_000,
            })
        );
    }

    // ── Data ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_data_record_layout() {
        let gen = quiet_generator(GeneratorConfig::default());
        let bytes = gen
            .generate_game_data(&GameDataPacket::Data(DataPacket {
                net_id: 1,
                sequence: 3,
                position: Vector2::ZERO,
                velocity: Vector2::ZERO,
            }))
            .unwrap();
        assert_eq!(
            bytes,
            vec![0x0B, 0x00, 0x01, 0x01, 0x03, 0x00, 0x00, 0x80, 0x00, 0x80, 0x00, 0x80, 0x00, 0x80]
        );
    }

    #[test]
    fn test_data_record_computed_length_tracks_net_id_width() {
        let gen = quiet_generator(GeneratorConfig::default());
        let bytes = gen
            .generate_game_data(&GameDataPacket::Data(DataPacket {
                net_id: 300,
                sequence: 0,
                position: Vector2::ZERO,
                velocity: Vector2::ZERO,
            }))
            .unwrap();
        assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), 12);
        assert_eq!(bytes.len(), 3 + 12);
    }

    #[test]
    fn test_data_record_legacy_length_is_always_eleven() {
        let gen = quiet_generator(GeneratorConfig::legacy());
        let bytes = gen
            .generate_game_data(&GameDataPacket::Data(DataPacket {
                net_id: 300,
                sequence: 0,
                position: Vector2::ZERO,
                velocity: Vector2::ZERO,
            }))
            .unwrap();
        assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), LEGACY_FIXED_LEN);
        assert_eq!(bytes.len(), 3 + 12, "the body itself is unchanged");
    }

    // ── SceneChange ──────────────────────────────────────────────────────────

    #[test]
    fn test_scene_change_layout() {
        let gen = quiet_generator(GeneratorConfig::default());
        let bytes = gen
            .generate_game_data(&GameDataPacket::SceneChange(SceneChangePacket {
                player_id: 1,
                location: "Cafeteria".to_string(),
            }))
            .unwrap();
        let mut expected = vec![0x0B, 0x00, 0x06, 0x01, 0x09];
        expected.extend_from_slice(b"Cafeteria");
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_scene_change_overlong_location_rejected_by_default() {
        let gen = quiet_generator(GeneratorConfig::default());
        let result = gen.generate_game_data(&GameDataPacket::SceneChange(SceneChangePacket {
            player_id: 1,
            location: "x".repeat(256),
        }));
        assert_eq!(
            result,
            Err(GenerateError::StringTooLong {
                field: "location",
                len: 256
            })
        );
    }

    #[test]
    fn test_scene_change_exactly_255_bytes_is_accepted() {
        let gen = quiet_generator(GeneratorConfig::default());
        let bytes = gen
            .generate_game_data(&GameDataPacket::SceneChange(SceneChangePacket {
                player_id: 1,
                location: "x".repeat(255),
            }))
            .unwrap();
        assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), 1 + 1 + 255);
        assert_eq!(bytes[4], 0xFF);
    }

    // ── RPC ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_check_name_layout() {
        let gen = quiet_generator(GeneratorConfig::default());
        let bytes = gen
            .generate_game_data(&rpc(9, RpcMessage::CheckName { name: "Red".to_string() }))
            .unwrap();
        assert_eq!(bytes, vec![0x06, 0x00, 0x02, 0x09, 0x05, 0x03, b'R', b'e', b'd']);
    }

    #[test]
    fn test_check_name_truncates_when_configured() {
        let sink = MemorySink::new();
        let gen = PacketGenerator::with_sink(
            GeneratorConfig {
                string_overflow: StringOverflow::Truncate,
                ..GeneratorConfig::default()
            },
            &sink,
        );

        let bytes = gen
            .generate_game_data(&rpc(9, RpcMessage::CheckName { name: "a".repeat(300) }))
            .unwrap();

        assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), 1 + 2 + 255);
        assert_eq!(bytes[5], 0xFF);
        assert_eq!(bytes.len(), 3 + 1 + 2 + 255);
        assert_eq!(
            sink.entries(),
            vec![Diagnostic::StringTruncated {
                field: "name",
                original_len: 300,
                written_len: 255,
            }]
        );
    }

    #[test]
    fn test_sync_settings_length_includes_options_block() {
        let gen = quiet_generator(GeneratorConfig::default());
        let options = GameOptions::default();
        let bytes = gen
            .generate_game_data(&rpc(4, RpcMessage::SyncSettings(options.clone())))
            .unwrap();

        let declared = u16::from_le_bytes([bytes[0], bytes[1]]) as usize;
        assert_eq!(declared, 1 + 1 + options.encoded_len());
        assert_eq!(&bytes[2..5], &[0x02, 0x04, RpcFlag::SyncSettings as u8]);
        assert_eq!(bytes.len(), 3 + declared);
    }

    #[test]
    fn test_unknown_rpc_passes_data_through_and_warns() {
        let mut sink = MockDiagnosticSink::new();
        sink.expect_report()
            .withf(|d| *d == Diagnostic::DataOnlyRpc { flag: 13, data_len: 3 })
            .times(1)
            .return_const(());
        let gen = PacketGenerator::with_sink(GeneratorConfig::default(), sink);

        let bytes = gen
            .generate_game_data(&rpc(2, RpcMessage::Unknown { flag: 13, data: vec![1, 2, 3] }))
            .unwrap();

        assert_eq!(bytes, vec![0x05, 0x00, 0x02, 0x02, 0x0D, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_unknown_rpc_legacy_length_is_always_eleven() {
        let sink = MemorySink::new();
        let gen = PacketGenerator::with_sink(GeneratorConfig::legacy(), &sink);

        let bytes = gen
            .generate_game_data(&rpc(2, RpcMessage::Unknown { flag: 13, data: vec![1, 2, 3] }))
            .unwrap();

        assert_eq!(bytes, vec![0x0B, 0x00, 0x02, 0x02, 0x0D, 0x01, 0x02, 0x03]);
        assert_eq!(sink.entries().len(), 1);
    }

    #[test]
    fn test_legacy_policy_leaves_other_records_computed() {
        let gen = quiet_generator(GeneratorConfig::legacy());
        let bytes = gen
            .generate_game_data(&rpc(5, RpcMessage::CheckColor { color: 3 }))
            .unwrap();
        assert_eq!(bytes, vec![0x03, 0x00, 0x02, 0x05, 0x07, 0x03]);
    }

    // ── Unsupported variants ─────────────────────────────────────────────────

    #[test]
    fn test_unsupported_payload_contributes_nothing_and_warns() {
        let mut sink = MockDiagnosticSink::new();
        sink.expect_report()
            .withf(|d| *d == Diagnostic::UnsupportedPayload { payload_type: 0x0D })
            .times(1)
            .return_const(());
        let gen = PacketGenerator::with_sink(GeneratorConfig::default(), sink);

        let join = PayloadPacket::JoinGame(JoinGamePacket::Request { code: 42 });
        let bytes = gen
            .generate(&[
                join.clone(),
                PayloadPacket::Unsupported { payload_type: 0x0D },
                join,
            ])
            .unwrap();

        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes[..8], bytes[8..]);
    }

    #[test]
    fn test_generate_payload_returns_none_for_unsupported() {
        let sink = MemorySink::new();
        let gen = PacketGenerator::with_sink(GeneratorConfig::default(), &sink);
        let result = gen
            .generate_payload(&PayloadPacket::Unsupported { payload_type: 0x00 })
            .unwrap();
        assert!(result.is_none());
        assert_eq!(sink.entries().len(), 1);
    }

    #[test]
    fn test_unsupported_game_data_is_empty_and_parent_length_stays_consistent() {
        let mut sink = MockDiagnosticSink::new();
        sink.expect_report()
            .withf(|d| *d == Diagnostic::UnsupportedGameData { kind: 0x04 })
            .times(1)
            .return_const(());
        let gen = PacketGenerator::with_sink(GeneratorConfig::default(), sink);

        let with_unsupported = gen
            .generate(&[game_data(
                32,
                vec![
                    GameDataPacket::Unsupported { kind: 0x04 },
                    rpc(5, RpcMessage::CheckColor { color: 3 }),
                ],
            )])
            .unwrap();

        let quiet = quiet_generator(GeneratorConfig::default());
        let without = quiet
            .generate(&[game_data(32, vec![rpc(5, RpcMessage::CheckColor { color: 3 })])])
            .unwrap();

        assert_eq!(with_unsupported, without);
    }

    // ── Batches ──────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_batch_is_empty_buffer() {
        let gen = quiet_generator(GeneratorConfig::default());
        assert!(gen.generate(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_assert_join_request_returns_code() {
        assert_eq!(assert_join_request(&JoinGamePacket::Request { code: 9 }), Ok(9));
    }

    #[test]
    fn test_error_messages_name_the_offending_field() {
        let err = GenerateError::StringTooLong { field: "name", len: 300 };
        assert_eq!(
            err.to_string(),
            "string field `name` is 300 bytes, at most 255 fit a 1-byte length prefix"
        );
    }
}
