//! Route catalog entries and the filter that decides which ones are shown.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_MAX_DISTANCE_KM;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    Walk,
    Bike,
}

impl RouteKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Bike => "bike",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub name: String,
    pub kind: RouteKind,
    pub distance_km: f64,
    #[serde(default)]
    pub safe: bool,
}

/// Toggle chips in the route filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterChip {
    Kind(RouteKind),
    Safe,
}

impl FilterChip {
    pub const ALL: [Self; 3] = [
        Self::Kind(RouteKind::Walk),
        Self::Kind(RouteKind::Bike),
        Self::Safe,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Kind(kind) => kind.as_str(),
            Self::Safe => "safe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter chip `{0}`")]
pub struct UnknownChip(pub String);

impl FromStr for FilterChip {
    type Err = UnknownChip;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walk" => Ok(Self::Kind(RouteKind::Walk)),
            "bike" => Ok(Self::Kind(RouteKind::Bike)),
            "safe" => Ok(Self::Safe),
            other => Err(UnknownChip(other.to_string())),
        }
    }
}

/// Filter state driven by the chips and the distance slider.
///
/// An empty kind set means no kind restriction, not "nothing passes".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteFilter {
    max_distance_km: f64,
    active_kinds: BTreeSet<RouteKind>,
    safe_only: bool,
}

impl Default for RouteFilter {
    fn default() -> Self {
        Self::with_max_distance(DEFAULT_MAX_DISTANCE_KM)
    }
}

impl RouteFilter {
    #[must_use]
    pub fn with_max_distance(max_distance_km: f64) -> Self {
        let mut filter = Self {
            max_distance_km: 0.0,
            active_kinds: BTreeSet::new(),
            safe_only: false,
        };
        filter.set_max_distance(max_distance_km);
        filter
    }

    #[must_use]
    pub const fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }

    #[must_use]
    pub const fn active_kinds(&self) -> &BTreeSet<RouteKind> {
        &self.active_kinds
    }

    #[must_use]
    pub const fn safe_only(&self) -> bool {
        self.safe_only
    }

    /// Set the slider value. Negative values clamp to zero, non-finite ones are ignored.
    pub fn set_max_distance(&mut self, km: f64) {
        if km.is_finite() {
            self.max_distance_km = km.max(0.0);
        }
    }

    pub fn set_kind(&mut self, kind: RouteKind, active: bool) {
        if active {
            self.active_kinds.insert(kind);
        } else {
            self.active_kinds.remove(&kind);
        }
    }

    pub const fn set_safe_only(&mut self, safe_only: bool) {
        self.safe_only = safe_only;
    }

    #[must_use]
    pub fn is_chip_active(&self, chip: FilterChip) -> bool {
        match chip {
            FilterChip::Kind(kind) => self.active_kinds.contains(&kind),
            FilterChip::Safe => self.safe_only,
        }
    }

    /// Flip a chip. Returns whether it is active afterwards.
    pub fn toggle(&mut self, chip: FilterChip) -> bool {
        let next = !self.is_chip_active(chip);
        match chip {
            FilterChip::Kind(kind) => self.set_kind(kind, next),
            FilterChip::Safe => self.safe_only = next,
        }
        next
    }

    #[must_use]
    pub fn is_visible(&self, route: &Route) -> bool {
        let matches_kind = self.active_kinds.is_empty() || self.active_kinds.contains(&route.kind);
        let matches_safety = !self.safe_only || route.safe;
        let matches_distance = route.distance_km <= self.max_distance_km;
        matches_kind && matches_safety && matches_distance
    }

    /// Routes that pass the filter, in catalog order.
    pub fn visible<'a>(&'a self, routes: &'a [Route]) -> impl Iterator<Item = &'a Route> + 'a {
        routes.iter().filter(move |route| self.is_visible(route))
    }

    /// Drives the empty-state indicator.
    #[must_use]
    pub fn any_visible(&self, routes: &[Route]) -> bool {
        routes.iter().any(|route| self.is_visible(route))
    }
}
