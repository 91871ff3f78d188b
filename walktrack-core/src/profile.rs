//! Profile name handling for onboarding.
//!
//! Names may contain Latin letters (including the Spanish accented set) and
//! single spaces, and must be at least two characters once trimmed.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::{FALLBACK_INITIALS, MIN_NAME_CHARS};

const ACCENTED: &str = "ÁÉÍÓÚÜÑáéíóúüñ";

static NAME_PATTERN: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^[A-Za-zÁÉÍÓÚÜÑáéíóúüñ ]+$"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("name must use only letters and spaces")]
    InvalidName,
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == ' ' || ACCENTED.contains(c)
}

/// Strip disallowed characters and collapse repeated spaces, as the input is typed.
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = false;
    for c in raw.chars().filter(|c| is_allowed_char(*c)) {
        if c == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(c);
    }
    out
}

#[must_use]
pub fn is_valid_name(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return false;
    }
    NAME_PATTERN
        .as_ref()
        .is_ok_and(|pattern| pattern.is_match(trimmed))
}

/// Up to two uppercase initials, one per leading word. `WT` when there are none.
#[must_use]
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        FALLBACK_INITIALS.to_string()
    } else {
        letters
    }
}

/// A name that passed validation, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileName(String);

impl ProfileName {
    /// Sanitize and validate raw input.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidName`] when the cleaned input is too
    /// short or still contains characters outside the allowed set.
    pub fn parse(raw: &str) -> Result<Self, ProfileError> {
        let cleaned = sanitize_name(raw);
        Self::validated(&cleaned)
    }

    /// Validate without sanitizing, for values read back from storage.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidName`] if `raw` is not a valid name as-is.
    pub fn validated(raw: &str) -> Result<Self, ProfileError> {
        if is_valid_name(raw) {
            Ok(Self(raw.trim().to_string()))
        } else {
            Err(ProfileError::InvalidName)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.0)
    }
}

impl TryFrom<String> for ProfileName {
    type Error = ProfileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validated(&value)
    }
}

impl From<ProfileName> for String {
    fn from(value: ProfileName) -> Self {
        value.0
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who the page greets, and whether onboarding still needs to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    name: Option<ProfileName>,
    placeholder: String,
}

impl Profile {
    #[must_use]
    pub fn new(name: Option<ProfileName>, placeholder: impl Into<String>) -> Self {
        Self {
            name,
            placeholder: placeholder.into(),
        }
    }

    /// The name to show; the placeholder until onboarding completes.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_ref()
            .map_or(self.placeholder.as_str(), ProfileName::as_str)
    }

    #[must_use]
    pub fn initials(&self) -> String {
        initials(self.display_name())
    }

    pub fn set_name(&mut self, name: ProfileName) {
        self.name = Some(name);
    }
}
