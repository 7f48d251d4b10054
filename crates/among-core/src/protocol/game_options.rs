//! Lobby settings carried by the `SyncSettings` RPC.
//!
//! Wire format (version 4), preceded by the packed body length:
//! ```text
//! [version:1][max_players:1][language:4][map:1]
//! [player_speed:f32][crew_vision:f32][impostor_vision:f32][kill_cooldown:f32]
//! [common_tasks:1][long_tasks:1][short_tasks:1][emergency_meetings:i32]
//! [impostors:1][kill_distance:1][discussion_time:i32][voting_time:i32]
//! [is_default:1][emergency_cooldown:1][confirm_ejects:1][visual_tasks:1]
//! [anonymous_votes:1][task_bar_updates:1]
//! ```
//! The body is always 46 bytes, so the encoded block is always 47 bytes.

use serde::{Deserialize, Serialize};

use crate::protocol::pack::{packed_len, write_packed};

/// Options layout version this crate writes.
pub const GAME_OPTIONS_VERSION: u8 = 4;

/// Size of the options body, excluding the packed length prefix.
pub const GAME_OPTIONS_BODY_LEN: usize = 46;

/// Lobby settings.  `Default` matches the game's stock lobby.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub max_players: u8,
    /// Chat language bitmask (`1` = other, `256` = English, ...).
    pub language: u32,
    /// 0 = The Skeld, 1 = Mira HQ, 2 = Polus.
    pub map: u8,
    pub player_speed: f32,
    pub crew_vision: f32,
    pub impostor_vision: f32,
    /// Seconds.
    pub kill_cooldown: f32,
    pub common_tasks: u8,
    pub long_tasks: u8,
    pub short_tasks: u8,
    pub emergency_meetings: i32,
    pub impostors: u8,
    /// 0 = short, 1 = medium, 2 = long.
    pub kill_distance: u8,
    /// Seconds.
    pub discussion_time: i32,
    /// Seconds; 0 means unlimited.
    pub voting_time: i32,
    pub is_default: bool,
    /// Seconds.
    pub emergency_cooldown: u8,
    pub confirm_ejects: bool,
    pub visual_tasks: bool,
    pub anonymous_votes: bool,
    /// 0 = always, 1 = meetings, 2 = never.
    pub task_bar_updates: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_players: 10,
            language: 1,
            map: 0,
            player_speed: 1.0,
            crew_vision: 1.0,
            impostor_vision: 1.5,
            kill_cooldown: 45.0,
            common_tasks: 1,
            long_tasks: 1,
            short_tasks: 2,
            emergency_meetings: 1,
            impostors: 1,
            kill_distance: 1,
            discussion_time: 15,
            voting_time: 120,
            is_default: true,
            emergency_cooldown: 15,
            confirm_ejects: true,
            visual_tasks: true,
            anonymous_votes: false,
            task_bar_updates: 0,
        }
    }
}

impl GameOptions {
    /// Number of bytes [`GameOptions::write`] appends.
    pub fn encoded_len(&self) -> usize {
        packed_len(GAME_OPTIONS_BODY_LEN as u32) + GAME_OPTIONS_BODY_LEN
    }

    /// Appends the length-prefixed options block to `buf`.
    pub fn write(&self, buf: &mut Vec<u8>) {
        write_packed(buf, GAME_OPTIONS_BODY_LEN as u32);
        buf.push(GAME_OPTIONS_VERSION);
        buf.push(self.max_players);
        buf.extend_from_slice(&self.language.to_le_bytes());
        buf.push(self.map);
        buf.extend_from_slice(&self.player_speed.to_le_bytes());
        buf.extend_from_slice(&self.crew_vision.to_le_bytes());
        buf.extend_from_slice(&self.impostor_vision.to_le_bytes());
        buf.extend_from_slice(&self.kill_cooldown.to_le_bytes());
        buf.push(self.common_tasks);
        buf.push(self.long_tasks);
        buf.push(self.short_tasks);
        buf.extend_from_slice(&self.emergency_meetings.to_le_bytes());
        buf.push(self.impostors);
        buf.push(self.kill_distance);
        buf.extend_from_slice(&self.discussion_time.to_le_bytes());
        buf.extend_from_slice(&self.voting_time.to_le_bytes());
        buf.push(u8::from(self.is_default));
        buf.push(self.emergency_cooldown);
        buf.push(u8::from(self.confirm_ejects));
        buf.push(u8::from(self.visual_tasks));
        buf.push(u8::from(self.anonymous_votes));
        buf.push(self.task_bar_updates);
    }
}
