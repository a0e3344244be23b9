use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Piece;

/// Session settings chosen by the UI shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameOptions {
    allow_undo: bool,
    auto_promote: Option<Piece>,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            allow_undo: true,
            auto_promote: None,
        }
    }
}

impl GameOptions {
    /// Whether `request_undo` takes moves back
    #[must_use]
    pub const fn allow_undo(&self) -> bool {
        self.allow_undo
    }

    /// Piece every promotion is resolved with immediately, instead of
    /// waiting for `choose_promotion`. Never a king or pawn, even when the
    /// options were deserialized from elsewhere.
    #[must_use]
    pub fn auto_promote(&self) -> Option<Piece> {
        self.auto_promote.filter(|kind| kind.is_promotion_choice())
    }

    pub fn set_allow_undo(&mut self, allow: bool) {
        self.allow_undo = allow;
    }

    /// Returns false and leaves the setting alone for a non-promotable kind.
    pub fn set_auto_promote(&mut self, piece: Option<Piece>) -> bool {
        match piece {
            Some(kind) if !kind.is_promotion_choice() => {
                warn!("ignoring auto-promotion to {kind}");
                false
            }
            _ => {
                self.auto_promote = piece;
                true
            }
        }
    }

    #[must_use]
    pub const fn with_undo(mut self, allow: bool) -> Self {
        self.allow_undo = allow;
        self
    }

    /// Promote automatically to `piece`; non-promotable kinds are ignored.
    #[must_use]
    pub fn with_auto_promote(mut self, piece: Option<Piece>) -> Self {
        self.set_auto_promote(piece);
        self
    }

    /// Apply a named option from a settings panel.
    ///
    /// Names are case-insensitive (`allow undo`, `auto promote`). Returns
    /// false for an unknown name or an unparseable value.
    pub fn apply_option(&mut self, name: &str, value: Option<&str>) -> bool {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value.map(str::trim);
        match normalized.as_str() {
            "allow undo" | "undo" => match value.and_then(|v| v.parse::<bool>().ok()) {
                Some(allow) => {
                    self.allow_undo = allow;
                    true
                }
                None => false,
            },
            "auto promote" | "autopromote" => match value {
                None | Some("") | Some("none") => {
                    self.auto_promote = None;
                    true
                }
                Some(v) => {
                    let mut chars = v.chars();
                    match (chars.next().and_then(Piece::from_char), chars.next()) {
                        (Some(kind), None) if kind.is_promotion_choice() => {
                            self.auto_promote = Some(kind);
                            true
                        }
                        _ => {
                            warn!("invalid auto promote value '{v}'");
                            false
                        }
                    }
                }
            },
            _ => {
                warn!("unknown option '{name}'");
                false
            }
        }
    }
}
