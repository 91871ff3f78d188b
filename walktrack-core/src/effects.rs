//! Side effects requested by tracker commands.
//!
//! Commands never touch storage, timers or the DOM. They return a list of
//! [`Effect`]s and the adapter layer carries them out in order.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::format::{format_grouped, format_km};
use crate::prefs::Screen;
use crate::session::TickGeneration;
use crate::storage::SettingKey;

/// User-facing notification, rendered as a toast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    InsufficientFunds { shortfall: u32 },
    Redeemed { balance: u32 },
    SessionSaved { distance_km: f64 },
    PremiumActivated { bonus: u32 },
    PremiumAlreadyActive,
    ProfileUpdated { name: String },
    InvalidName,
    ChallengeJoined,
}

impl Notice {
    /// i18n key prefix; the title lives under `.title`, the detail under `.detail`.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::InsufficientFunds { .. } => "toast.insufficient",
            Self::Redeemed { .. } => "toast.redeemed",
            Self::SessionSaved { .. } => "toast.session_saved",
            Self::PremiumActivated { .. } => "toast.premium_activated",
            Self::PremiumAlreadyActive => "toast.premium_active",
            Self::ProfileUpdated { .. } => "toast.profile_updated",
            Self::InvalidName => "toast.invalid_name",
            Self::ChallengeJoined => "toast.challenge_joined",
        }
    }

    /// Interpolation arguments for the detail line, already formatted for display.
    #[must_use]
    pub fn args(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::InsufficientFunds { shortfall } => {
                vec![("missing", shortfall.to_string())]
            }
            Self::Redeemed { balance } => {
                vec![("balance", format_grouped(u64::from(*balance)))]
            }
            Self::SessionSaved { distance_km } => vec![("distance", format_km(*distance_km))],
            Self::PremiumActivated { bonus } => vec![("bonus", bonus.to_string())],
            Self::ProfileUpdated { name } => vec![("name", name.clone())],
            Self::PremiumAlreadyActive | Self::InvalidName | Self::ChallengeJoined => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// Write a setting; last write wins.
    Persist { key: SettingKey, value: String },
    Notify(Notice),
    /// Cancel any running ticker, then install one stamped with this generation.
    StartTicker { generation: TickGeneration },
    /// Cancel the running ticker before anything else happens.
    StopTicker,
    Navigate { screen: Screen },
}

impl Effect {
    #[must_use]
    pub fn persist(key: SettingKey, value: impl Into<String>) -> Self {
        Self::Persist {
            key,
            value: value.into(),
        }
    }
}

pub type Effects = SmallVec<[Effect; 4]>;
