//! Tracker controller.
//!
//! Owns every piece of page state and exposes one method per user command.
//! Commands mutate state and return the [`Effects`] the adapter must carry
//! out; getters derive the text the rendering layer shows.
use rand::Rng;
use serde::Serialize;
use smallvec::smallvec;

use crate::clock::{TimestampMs, elapsed_seconds};
use crate::config::{Catalog, Reward, TrackerConfig};
use crate::effects::{Effect, Effects, Notice};
use crate::format::{format_grouped, format_hms};
use crate::history::{ActivityEntry, ActivityHistory};
use crate::ledger::{LedgerError, PointsLedger};
use crate::prefs::{Screen, Theme};
use crate::profile::{Profile, ProfileName};
use crate::routes::{FilterChip, Route, RouteFilter};
use crate::session::{ActivitySession, FinishedSession, SessionStatus, TickGeneration};
use crate::storage::{PersistedSettings, SettingKey};

/// Which session buttons are usable, and what the start button says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionControls {
    pub start_enabled: bool,
    pub pause_enabled: bool,
    pub finish_enabled: bool,
    /// i18n key: `session.start` or `session.resume`.
    pub start_label_key: &'static str,
}

impl SessionControls {
    #[must_use]
    pub const fn for_status(status: SessionStatus) -> Self {
        Self {
            start_enabled: !matches!(status, SessionStatus::Running),
            pause_enabled: matches!(status, SessionStatus::Running),
            finish_enabled: !matches!(status, SessionStatus::Idle),
            start_label_key: match status {
                SessionStatus::Paused => "session.resume",
                SessionStatus::Idle | SessionStatus::Running => "session.start",
            },
        }
    }
}

/// i18n key of the live status badge.
#[must_use]
pub const fn status_label_key(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Running => "session.status.running",
        SessionStatus::Paused => "session.status.paused",
        SessionStatus::Idle => "session.status.idle",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tracker {
    config: TrackerConfig,
    session: ActivitySession,
    ledger: PointsLedger,
    filter: RouteFilter,
    routes: Vec<Route>,
    rewards: Vec<Reward>,
    history: ActivityHistory,
    profile: Profile,
    premium: bool,
    theme: Theme,
    lifetime_steps: u64,
    screen: Screen,
    onboarding_open: bool,
}

impl Tracker {
    /// Build the tracker from configuration, catalog and whatever was persisted.
    #[must_use]
    pub fn new(
        config: TrackerConfig,
        catalog: Catalog,
        settings: PersistedSettings,
        system_prefers_light: bool,
    ) -> Self {
        let ledger = PointsLedger::with_balance(settings.points.unwrap_or(config.default_points));
        let filter = RouteFilter::with_max_distance(config.default_max_distance_km);
        let onboarding_open = settings.username.is_none();
        let profile = Profile::new(settings.username, config.default_display_name.clone());
        Self {
            ledger,
            filter,
            routes: catalog.routes,
            rewards: catalog.rewards,
            history: ActivityHistory::from_entries(catalog.activities),
            profile,
            premium: settings.premium,
            theme: Theme::resolve(settings.theme, system_prefers_light),
            lifetime_steps: config.starting_lifetime_steps,
            session: ActivitySession::new(),
            screen: Screen::default(),
            onboarding_open,
            config,
        }
    }

    /// Writes performed once the page has loaded: the resolved theme and balance.
    #[must_use]
    pub fn boot_effects(&self) -> Effects {
        smallvec![
            Effect::persist(SettingKey::Theme, self.theme.as_str()),
            self.persist_balance(),
        ]
    }

    // Session ----------------------------------------------------------------

    /// Start or resume the session and switch to the activity screen.
    pub fn start(&mut self, now_ms: TimestampMs) -> Effects {
        let Some(generation) = self.session.start(now_ms) else {
            return Effects::new();
        };
        self.screen = Screen::Activity;
        smallvec![
            Effect::StartTicker { generation },
            Effect::Navigate {
                screen: Screen::Activity
            },
        ]
    }

    pub fn pause(&mut self, now_ms: TimestampMs) -> Effects {
        if self.session.pause(now_ms).is_none() {
            return Effects::new();
        }
        smallvec![Effect::StopTicker]
    }

    /// Close the session, log it and add its steps to the lifetime total.
    pub fn finish(&mut self, now_ms: TimestampMs) -> Effects {
        let Some(FinishedSession { summary, steps, .. }) =
            self.session.finish(now_ms, &self.config)
        else {
            return Effects::new();
        };
        self.lifetime_steps = self.lifetime_steps.saturating_add(u64::from(steps));
        self.history.record(ActivityEntry::from(&summary));
        smallvec![
            Effect::StopTicker,
            Effect::Notify(Notice::SessionSaved {
                distance_km: summary.distance_km,
            }),
        ]
    }

    /// Apply a ticker firing. Returns the steps added, `None` for stale ticks.
    pub fn tick<R: Rng + ?Sized>(&mut self, generation: TickGeneration, rng: &mut R) -> Option<u32> {
        self.session.tick(generation, rng, self.config.step_increment)
    }

    // Points -----------------------------------------------------------------

    /// Spend `cost` points.
    pub fn redeem(&mut self, cost: u32) -> Effects {
        match self.ledger.debit(cost) {
            Ok(balance) => smallvec![
                self.persist_balance(),
                Effect::Notify(Notice::Redeemed { balance }),
            ],
            Err(LedgerError::InsufficientFunds { shortfall }) => {
                log::debug!("redeem of {cost} rejected, short by {shortfall}");
                smallvec![Effect::Notify(Notice::InsufficientFunds { shortfall })]
            }
        }
    }

    /// Spend the cost of a catalog reward. Unknown ids are ignored.
    pub fn redeem_reward(&mut self, reward_id: &str) -> Effects {
        let Some(cost) = self.reward(reward_id).map(|reward| reward.cost) else {
            log::warn!("redeem requested for unknown reward `{reward_id}`");
            return Effects::new();
        };
        self.redeem(cost)
    }

    /// One-time upgrade with a welcome bonus.
    pub fn activate_premium(&mut self) -> Effects {
        if self.premium {
            return smallvec![Effect::Notify(Notice::PremiumAlreadyActive)];
        }
        self.premium = true;
        let bonus = self.config.premium_bonus;
        self.ledger.grant_one_time_bonus(bonus);
        smallvec![
            Effect::persist(SettingKey::Premium, "true"),
            self.persist_balance(),
            Effect::Notify(Notice::PremiumActivated { bonus }),
        ]
    }

    // Profile ----------------------------------------------------------------

    /// Submit the onboarding form.
    pub fn complete_onboarding(&mut self, raw_name: &str) -> Effects {
        match ProfileName::parse(raw_name) {
            Ok(name) => {
                let effects = smallvec![
                    Effect::persist(SettingKey::Username, name.as_str()),
                    Effect::Notify(Notice::ProfileUpdated {
                        name: name.as_str().to_string(),
                    }),
                ];
                self.profile.set_name(name);
                self.onboarding_open = false;
                effects
            }
            Err(err) => {
                log::debug!("onboarding rejected: {err}");
                smallvec![Effect::Notify(Notice::InvalidName)]
            }
        }
    }

    // Preferences and navigation ---------------------------------------------

    pub fn set_theme(&mut self, theme: Theme) -> Effects {
        self.theme = theme;
        smallvec![Effect::persist(SettingKey::Theme, theme.as_str())]
    }

    pub fn toggle_theme(&mut self) -> Effects {
        self.set_theme(self.theme.toggled())
    }

    pub fn navigate(&mut self, screen: Screen) -> Effects {
        self.screen = screen;
        smallvec![Effect::Navigate { screen }]
    }

    #[must_use]
    pub fn join_challenge(&self) -> Effects {
        smallvec![Effect::Notify(Notice::ChallengeJoined)]
    }

    // Route filter -----------------------------------------------------------

    /// Flip a filter chip by its key. Unknown keys are ignored.
    pub fn toggle_filter_chip(&mut self, key: &str) -> Option<bool> {
        match key.parse::<FilterChip>() {
            Ok(chip) => Some(self.filter.toggle(chip)),
            Err(err) => {
                log::debug!("{err}");
                None
            }
        }
    }

    pub fn set_max_distance(&mut self, km: f64) {
        self.filter.set_max_distance(km);
    }

    // Getters ----------------------------------------------------------------

    #[must_use]
    pub const fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[must_use]
    pub const fn session(&self) -> &ActivitySession {
        &self.session
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.session.status()
    }

    #[must_use]
    pub fn elapsed_seconds(&self, now_ms: TimestampMs) -> u64 {
        elapsed_seconds(&self.session, now_ms)
    }

    /// Elapsed time as `HH:MM:SS`.
    #[must_use]
    pub fn elapsed_display(&self, now_ms: TimestampMs) -> String {
        format_hms(self.elapsed_seconds(now_ms))
    }

    #[must_use]
    pub const fn session_steps(&self) -> u32 {
        self.session.steps()
    }

    /// Lifetime steps including the session in progress.
    #[must_use]
    pub fn total_steps(&self) -> u64 {
        self.lifetime_steps.saturating_add(u64::from(self.session.steps()))
    }

    #[must_use]
    pub fn total_steps_display(&self) -> String {
        format_grouped(self.total_steps())
    }

    #[must_use]
    pub const fn balance(&self) -> u32 {
        self.ledger.balance()
    }

    #[must_use]
    pub fn balance_display(&self) -> String {
        format_grouped(u64::from(self.ledger.balance()))
    }

    #[must_use]
    pub const fn can_afford(&self, cost: u32) -> bool {
        self.ledger.can_afford(cost)
    }

    #[must_use]
    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    #[must_use]
    pub fn reward(&self, reward_id: &str) -> Option<&Reward> {
        self.rewards.iter().find(|reward| reward.id == reward_id)
    }

    #[must_use]
    pub const fn controls(&self) -> SessionControls {
        SessionControls::for_status(self.session.status())
    }

    #[must_use]
    pub const fn filter(&self) -> &RouteFilter {
        &self.filter
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Every route paired with its visibility under the current filter.
    pub fn route_visibility(&self) -> impl Iterator<Item = (&Route, bool)> + '_ {
        self.routes
            .iter()
            .map(|route| (route, self.filter.is_visible(route)))
    }

    #[must_use]
    pub fn any_route_visible(&self) -> bool {
        self.filter.any_visible(&self.routes)
    }

    #[must_use]
    pub const fn history(&self) -> &ActivityHistory {
        &self.history
    }

    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub const fn onboarding_open(&self) -> bool {
        self.onboarding_open
    }

    #[must_use]
    pub const fn is_premium(&self) -> bool {
        self.premium
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    fn persist_balance(&self) -> Effect {
        Effect::persist(SettingKey::Points, self.ledger.balance().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::RouteKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn catalog() -> Catalog {
        Catalog {
            routes: vec![
                Route {
                    id: "parque".into(),
                    name: "Parque del Oeste".into(),
                    kind: RouteKind::Walk,
                    distance_km: 3.5,
                    safe: true,
                },
                Route {
                    id: "ribera".into(),
                    name: "Ribera del río".into(),
                    kind: RouteKind::Bike,
                    distance_km: 10.0,
                    safe: false,
                },
            ],
            rewards: vec![Reward {
                id: "coffee".into(),
                title: "Café".into(),
                desc: String::new(),
                cost: 300,
            }],
            activities: Vec::new(),
        }
    }

    fn tracker_with_points(points: u32) -> Tracker {
        let settings = PersistedSettings {
            points: Some(points),
            ..PersistedSettings::default()
        };
        Tracker::new(TrackerConfig::default_config(), catalog(), settings, false)
    }

    #[test]
    fn defaults_apply_without_persisted_settings() {
        let tracker = Tracker::new(
            TrackerConfig::default_config(),
            Catalog::empty(),
            PersistedSettings::default(),
            true,
        );
        assert_eq!(tracker.balance(), 1250);
        assert_eq!(tracker.theme(), Theme::Light);
        assert!(tracker.onboarding_open());
        assert_eq!(tracker.profile().display_name(), "Tu nombre");
        assert_eq!(tracker.total_steps_display(), "8432");
    }

    #[test]
    fn boot_effects_persist_theme_and_balance() {
        let tracker = tracker_with_points(77);
        let effects = tracker.boot_effects();
        assert_eq!(
            effects.as_slice(),
            &[
                Effect::persist(SettingKey::Theme, "dark"),
                Effect::persist(SettingKey::Points, "77"),
            ]
        );
    }

    #[test]
    fn start_requests_ticker_and_navigation() {
        let mut tracker = tracker_with_points(0);
        let effects = tracker.start(0);
        assert!(matches!(effects[0], Effect::StartTicker { .. }));
        assert_eq!(
            effects[1],
            Effect::Navigate {
                screen: Screen::Activity
            }
        );
        assert_eq!(tracker.screen(), Screen::Activity);
        assert!(tracker.start(1_000).is_empty());
    }

    #[test]
    fn controls_follow_status() {
        let mut tracker = tracker_with_points(0);
        let idle = tracker.controls();
        assert!(idle.start_enabled && !idle.pause_enabled && !idle.finish_enabled);

        tracker.start(0);
        let running = tracker.controls();
        assert!(!running.start_enabled && running.pause_enabled && running.finish_enabled);

        assert_eq!(tracker.pause(1_000).as_slice(), &[Effect::StopTicker]);
        assert!(tracker.pause(2_000).is_empty());
        let paused = tracker.controls();
        assert!(paused.start_enabled && !paused.pause_enabled && paused.finish_enabled);
        assert_eq!(paused.start_label_key, "session.resume");
        assert_eq!(status_label_key(tracker.status()), "session.status.paused");
    }

    #[test]
    fn finish_records_history_and_lifetime_steps() {
        let mut tracker = tracker_with_points(0);
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let before = tracker.total_steps();
        tracker.start(0);
        let generation = tracker.session().generation();
        let mut added = 0_u64;
        for _ in 0..10 {
            added += u64::from(tracker.tick(generation, &mut rng).unwrap());
        }
        assert_eq!(tracker.total_steps(), before + added);

        let effects = tracker.finish(10_000);
        assert_eq!(effects[0], Effect::StopTicker);
        assert!(matches!(
            effects[1],
            Effect::Notify(Notice::SessionSaved { .. })
        ));
        assert_eq!(tracker.total_steps(), before + added);
        assert_eq!(tracker.session_steps(), 0);
        assert_eq!(tracker.history().len(), 1);
        assert!(tracker.finish(11_000).is_empty());
    }

    #[test]
    fn redeem_reports_shortfall_without_persisting() {
        let mut tracker = tracker_with_points(100);
        let effects = tracker.redeem(150);
        assert_eq!(
            effects.as_slice(),
            &[Effect::Notify(Notice::InsufficientFunds { shortfall: 50 })]
        );
        assert_eq!(tracker.balance(), 100);

        let effects = tracker.redeem(60);
        assert_eq!(
            effects.as_slice(),
            &[
                Effect::persist(SettingKey::Points, "40"),
                Effect::Notify(Notice::Redeemed { balance: 40 }),
            ]
        );
    }

    #[test]
    fn redeem_reward_uses_catalog_cost() {
        let mut tracker = tracker_with_points(500);
        assert!(tracker.can_afford(300));
        tracker.redeem_reward("coffee");
        assert_eq!(tracker.balance(), 200);
        assert!(!tracker.can_afford(300));
        assert!(tracker.redeem_reward("unknown").is_empty());
        assert_eq!(tracker.balance(), 200);
    }

    #[test]
    fn premium_bonus_is_granted_once() {
        let mut tracker = tracker_with_points(10);
        let effects = tracker.activate_premium();
        assert_eq!(effects[0], Effect::persist(SettingKey::Premium, "true"));
        assert_eq!(effects[1], Effect::persist(SettingKey::Points, "160"));
        assert!(tracker.is_premium());

        let again = tracker.activate_premium();
        assert_eq!(
            again.as_slice(),
            &[Effect::Notify(Notice::PremiumAlreadyActive)]
        );
        assert_eq!(tracker.balance(), 160);
    }

    #[test]
    fn onboarding_accepts_valid_names_only() {
        let mut tracker = tracker_with_points(0);
        let rejected = tracker.complete_onboarding("7");
        assert_eq!(rejected.as_slice(), &[Effect::Notify(Notice::InvalidName)]);
        assert!(tracker.onboarding_open());

        let accepted = tracker.complete_onboarding(" Pilar  Ruiz ");
        assert_eq!(
            accepted[0],
            Effect::persist(SettingKey::Username, "Pilar Ruiz")
        );
        assert!(!tracker.onboarding_open());
        assert_eq!(tracker.profile().initials(), "PR");
    }

    #[test]
    fn theme_toggle_persists() {
        let mut tracker = tracker_with_points(0);
        let effects = tracker.toggle_theme();
        assert_eq!(tracker.theme(), Theme::Light);
        assert_eq!(
            effects.as_slice(),
            &[Effect::persist(SettingKey::Theme, "light")]
        );
    }

    #[test]
    fn filter_chips_drive_route_visibility() {
        let mut tracker = tracker_with_points(0);
        assert!(tracker.route_visibility().all(|(_, visible)| visible));

        assert_eq!(tracker.toggle_filter_chip("walk"), Some(true));
        let visible: Vec<_> = tracker
            .route_visibility()
            .filter(|(_, visible)| *visible)
            .map(|(route, _)| route.id.as_str())
            .collect();
        assert_eq!(visible, vec!["parque"]);

        tracker.set_max_distance(2.0);
        assert!(!tracker.any_route_visible());
        assert_eq!(tracker.toggle_filter_chip("hike"), None);
    }
}
