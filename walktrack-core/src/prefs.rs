//! Display preferences and navigation targets.
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored choice first, then the system colour-scheme preference.
    #[must_use]
    pub fn resolve(saved: Option<Self>, system_prefers_light: bool) -> Self {
        saved.unwrap_or(if system_prefers_light {
            Self::Light
        } else {
            Self::Dark
        })
    }

    /// i18n key for the toggle button, which offers the other mode.
    #[must_use]
    pub const fn toggle_label_key(self) -> &'static str {
        match self {
            Self::Light => "theme.to_dark",
            Self::Dark => "theme.to_light",
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Activity,
    Routes,
    Rewards,
    Profile,
}

impl Screen {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Activity,
        Self::Routes,
        Self::Rewards,
        Self::Profile,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Activity => "activity",
            Self::Routes => "routes",
            Self::Rewards => "rewards",
            Self::Profile => "profile",
        }
    }

    #[must_use]
    pub fn label_key(self) -> String {
        format!("nav.{}", self.as_str())
    }
}
