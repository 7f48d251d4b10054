//! All outbound Among Us protocol message types.
//!
//! Three tag enumerations identify records on the wire: [`PayloadType`] for
//! top-level payloads, [`GameDataType`] for game-data records nested in a
//! `GameData`/`GameDataTo` payload, and [`RpcFlag`] for RPC records.  The
//! packet enums ([`PayloadPacket`], [`GameDataPacket`], [`RpcMessage`]) each
//! carry an explicit catch-all variant for tags this crate cannot lay out.

use serde::{Deserialize, Serialize};

pub use crate::protocol::game_options::GameOptions;
pub use crate::protocol::vector2::Vector2;

// ── Protocol constants ────────────────────────────────────────────────────────

/// Size of the `[length:2][tag:1]` header that precedes every record.
pub const RECORD_HEADER_SIZE: usize = 3;

/// Longest string a single length-prefix byte can describe.
pub const MAX_STRING_LEN: usize = u8::MAX as usize;

/// Owned-maps bitmask sent with every join request (Skeld, Mira HQ, Polus).
pub const OWNED_MAPS_ALL: u8 = 0x07;

/// Declared length of a join request body: `code:4` + `owned_maps:1`.
pub const JOIN_GAME_REQUEST_LEN: u16 = 5;

/// Length the legacy generator declares for `Data` and data-only RPC records.
pub const LEGACY_FIXED_LEN: u16 = 11;

// ── Payload type codes ────────────────────────────────────────────────────────

/// Tag byte of a top-level payload record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PayloadType {
    HostGame = 0x00,
    JoinGame = 0x01,
    StartGame = 0x02,
    RemoveGame = 0x03,
    RemovePlayer = 0x04,
    GameData = 0x05,
    GameDataTo = 0x06,
    JoinedGame = 0x07,
    EndGame = 0x08,
    GetGameList = 0x09,
    AlterGame = 0x0A,
    KickPlayer = 0x0B,
    WaitForHost = 0x0C,
    Redirect = 0x0D,
    ReselectServer = 0x0E,
    GetGameListV2 = 0x10,
}

impl TryFrom<u8> for PayloadType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        match value {
            0x00 => Ok(PayloadType::HostGame),
            0x01 => Ok(PayloadType::JoinGame),
            0x02 => Ok(PayloadType::StartGame),
            0x03 => Ok(PayloadType::RemoveGame),
            0x04 => Ok(PayloadType::RemovePlayer),
            0x05 => Ok(PayloadType::GameData),
            0x06 => Ok(PayloadType::GameDataTo),
            0x07 => Ok(PayloadType::JoinedGame),
            0x08 => Ok(PayloadType::EndGame),
            0x09 => Ok(PayloadType::GetGameList),
            0x0A => Ok(PayloadType::AlterGame),
            0x0B => Ok(PayloadType::KickPlayer),
            0x0C => Ok(PayloadType::WaitForHost),
            0x0D => Ok(PayloadType::Redirect),
            0x0E => Ok(PayloadType::ReselectServer),
            0x10 => Ok(PayloadType::GetGameListV2),
            _ => Err(()),
        }
    }
}

// ── Game data type codes ──────────────────────────────────────────────────────

/// Tag byte of a game-data record inside a `GameData`/`GameDataTo` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GameDataType {
    Data = 0x01,
    Rpc = 0x02,
    Spawn = 0x04,
    Despawn = 0x05,
    SceneChange = 0x06,
    Ready = 0x07,
    ChangeSettings = 0x08,
}

impl TryFrom<u8> for GameDataType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        match value {
            0x01 => Ok(GameDataType::Data),
            0x02 => Ok(GameDataType::Rpc),
            0x04 => Ok(GameDataType::Spawn),
            0x05 => Ok(GameDataType::Despawn),
            0x06 => Ok(GameDataType::SceneChange),
            0x07 => Ok(GameDataType::Ready),
            0x08 => Ok(GameDataType::ChangeSettings),
            _ => Err(()),
        }
    }
}

// ── RPC flags ─────────────────────────────────────────────────────────────────

/// Flag byte identifying the call carried by an RPC record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RpcFlag {
    PlayAnimation = 0,
    CompleteTask = 1,
    SyncSettings = 2,
    SetInfected = 3,
    Exiled = 4,
    CheckName = 5,
    SetName = 6,
    CheckColor = 7,
    SetColor = 8,
    SetHat = 9,
    SetSkin = 10,
    ReportDeadBody = 11,
    MurderPlayer = 12,
    SendChat = 13,
    StartMeeting = 14,
    SetScanner = 15,
    SendChatNote = 16,
    SetPet = 17,
    SetStartCounter = 18,
    EnterVent = 19,
    ExitVent = 20,
    SnapTo = 21,
    Close = 22,
    VotingComplete = 23,
    CastVote = 24,
    ClearVote = 25,
    AddVote = 26,
    CloseDoorsOfType = 27,
    RepairSystem = 28,
    SetTasks = 29,
    UpdateGameData = 30,
}

impl TryFrom<u8> for RpcFlag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        const ALL: [RpcFlag; 31] = [
            RpcFlag::PlayAnimation,
            RpcFlag::CompleteTask,
            RpcFlag::SyncSettings,
            RpcFlag::SetInfected,
            RpcFlag::Exiled,
            RpcFlag::CheckName,
            RpcFlag::SetName,
            RpcFlag::CheckColor,
            RpcFlag::SetColor,
            RpcFlag::SetHat,
            RpcFlag::SetSkin,
            RpcFlag::ReportDeadBody,
            RpcFlag::MurderPlayer,
            RpcFlag::SendChat,
            RpcFlag::StartMeeting,
            RpcFlag::SetScanner,
            RpcFlag::SendChatNote,
            RpcFlag::SetPet,
            RpcFlag::SetStartCounter,
            RpcFlag::EnterVent,
            RpcFlag::ExitVent,
            RpcFlag::SnapTo,
            RpcFlag::Close,
            RpcFlag::VotingComplete,
            RpcFlag::CastVote,
            RpcFlag::ClearVote,
            RpcFlag::AddVote,
            RpcFlag::CloseDoorsOfType,
            RpcFlag::RepairSystem,
            RpcFlag::SetTasks,
            RpcFlag::UpdateGameData,
        ];
        ALL.get(value as usize).copied().ok_or(())
    }
}

/// Human-readable name of a tag byte, used in diagnostics.
///
/// Returns the variant name when `T` recognises the byte and `Unknown(0xNN)`
/// otherwise.
pub fn pretty_tag<T>(value: u8) -> String
where
    T: TryFrom<u8> + std::fmt::Debug,
{
    match T::try_from(value) {
        Ok(tag) => format!("{tag:?}"),
        Err(_) => format!("Unknown(0x{value:02X})"),
    }
}

// ── Payload packets ───────────────────────────────────────────────────────────

/// A top-level payload record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PayloadPacket {
    /// GAME_DATA (0x05): game-data records broadcast to the whole game.
    GameData(GameDataPayload),
    /// GAME_DATA_TO (0x06): game-data records addressed to one client.
    GameDataTo(GameDataToPayload),
    /// JOIN_GAME (0x01): join request (outbound) or join error (inbound only).
    JoinGame(JoinGamePacket),
    /// Any payload this crate cannot lay out; dropped with a diagnostic.
    Unsupported { payload_type: u8 },
}

impl PayloadPacket {
    /// Returns the tag byte this payload is written with.
    pub fn payload_type(&self) -> u8 {
        match self {
            PayloadPacket::GameData(_) => PayloadType::GameData as u8,
            PayloadPacket::GameDataTo(_) => PayloadType::GameDataTo as u8,
            PayloadPacket::JoinGame(_) => PayloadType::JoinGame as u8,
            PayloadPacket::Unsupported { payload_type } => *payload_type,
        }
    }
}

/// GAME_DATA body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDataPayload {
    /// Room code of the game the records belong to.
    pub code: i32,
    /// Game-data records, written in order.
    #[serde(default)]
    pub parts: Vec<GameDataPacket>,
}

/// GAME_DATA_TO body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDataToPayload {
    /// Room code of the game the records belong to.
    pub code: i32,
    /// Client id of the single recipient.
    pub recipient: u32,
    /// Game-data records, written in order.
    #[serde(default)]
    pub parts: Vec<GameDataPacket>,
}

/// The two shapes a JOIN_GAME payload takes on the wire.
///
/// Only [`JoinGamePacket::Request`] may be generated; the error shape is sent
/// by the server and exists here so decoded packets can be passed back in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum JoinGamePacket {
    /// Client asks to join the game with this room code.
    Request { code: i32 },
    /// Server refuses a join.
    Error {
        reason: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

// ── Game data packets ─────────────────────────────────────────────────────────

/// A game-data record nested inside a `GameData`/`GameDataTo` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameDataPacket {
    /// DATA (0x01): network transform update.
    Data(DataPacket),
    /// RPC (0x02): remote call on a network object.
    Rpc(RpcPacket),
    /// SCENE_CHANGE (0x06): a client moved to another scene.
    SceneChange(SceneChangePacket),
    /// Any game-data record this crate cannot lay out; encoded as zero bytes.
    Unsupported { kind: u8 },
}

impl GameDataPacket {
    /// Returns the tag byte this record is written with.
    pub fn kind(&self) -> u8 {
        match self {
            GameDataPacket::Data(_) => GameDataType::Data as u8,
            GameDataPacket::Rpc(_) => GameDataType::Rpc as u8,
            GameDataPacket::SceneChange(_) => GameDataType::SceneChange as u8,
            GameDataPacket::Unsupported { kind } => *kind,
        }
    }
}

/// DATA record: position and velocity of a network transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPacket {
    pub net_id: u32,
    /// Per-object update counter; see [`crate::protocol::SequenceCounter`].
    pub sequence: u16,
    pub position: Vector2,
    pub velocity: Vector2,
}

/// RPC record: a call on the network object `net_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcPacket {
    pub net_id: u32,
    pub rpc: RpcMessage,
}

/// SCENE_CHANGE record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneChangePacket {
    pub player_id: u32,
    /// Scene name, e.g. `"OnlineGame"`; at most 255 UTF-8 bytes.
    pub location: String,
}

// ── RPC messages ──────────────────────────────────────────────────────────────

/// The call carried by an [`RpcPacket`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum RpcMessage {
    /// SYNC_SETTINGS (2): host pushes the lobby options.
    SyncSettings(GameOptions),
    /// CHECK_NAME (5): ask the host to validate a player name.
    CheckName { name: String },
    /// CHECK_COLOR (7): ask the host to validate a player colour.
    CheckColor { color: u8 },
    /// Any other flag; `data` is written verbatim after the flag byte.
    Unknown {
        flag: u8,
        #[serde(default)]
        data: Vec<u8>,
    },
}

impl RpcMessage {
    /// Returns the flag byte this call is written with.
    pub fn flag(&self) -> u8 {
        match self {
            RpcMessage::SyncSettings(_) => RpcFlag::SyncSettings as u8,
            RpcMessage::CheckName { .. } => RpcFlag::CheckName as u8,
            RpcMessage::CheckColor { .. } => RpcFlag::CheckColor as u8,
            RpcMessage::Unknown { flag, .. } => *flag,
        }
    }
}
