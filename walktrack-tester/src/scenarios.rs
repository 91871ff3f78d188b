//! Scripted scenarios replayed against the tracker core.
//!
//! Every scenario gets a fresh [`ScenarioCtx`]: a seeded RNG, a clock that
//! only moves when the script says so and the shipped configuration.
use anyhow::{Context, Result, anyhow, ensure};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use walktrack_core::{
    ActivitySession, Clock, Effect, Effects, LedgerError, ManualClock, MemoryStore, Notice,
    PointsLedger, Route, RouteFilter, RouteKind, Screen, SessionStatus, SettingKey,
    SettingsStore, TickGeneration, Tracker, boot_tracker, persist_effects,
};

use crate::assets::TesterAssets;

pub struct ScenarioCtx<'a> {
    pub seed: u64,
    pub rng: ChaCha20Rng,
    pub clock: ManualClock,
    pub assets: &'a TesterAssets,
    pub verbose: bool,
}

impl<'a> ScenarioCtx<'a> {
    #[must_use]
    pub fn new(assets: &'a TesterAssets, seed: u64, verbose: bool) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            clock: ManualClock::at(0),
            assets,
            verbose,
        }
    }

    /// Boot a tracker against `store`, as a first page load would.
    pub fn boot(&self, store: &MemoryStore) -> Result<Tracker> {
        let tracker = boot_tracker(
            self.assets.config.clone(),
            self.assets.catalog.clone(),
            store,
            false,
        )
        .context("booting tracker")?;
        persist_effects(store, &tracker.boot_effects()).context("persisting boot effects")?;
        Ok(tracker)
    }

    /// Advance the clock one second and fire the ticker `count` times.
    pub fn tick(&mut self, tracker: &mut Tracker, generation: TickGeneration, count: u32) -> u32 {
        let mut added = 0;
        for _ in 0..count {
            self.clock.advance_secs(1);
            added += tracker.tick(generation, &mut self.rng).unwrap_or(0);
        }
        added
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub run: fn(&mut ScenarioCtx<'_>) -> Result<()>,
}

pub fn catalog() -> Vec<TestScenario> {
    vec![
        TestScenario {
            key: "smoke",
            name: "Smoke Test",
            run: smoke,
        },
        TestScenario {
            key: "five-ticks",
            name: "Five Ticks Of Steps",
            run: five_ticks,
        },
        TestScenario {
            key: "pause-resume",
            name: "Pause, Resume And Finish",
            run: pause_resume_finish,
        },
        TestScenario {
            key: "stale-ticks",
            name: "Stale Ticker Is Ignored",
            run: stale_ticks,
        },
        TestScenario {
            key: "ledger-shortfall",
            name: "Ledger Rejects Overdraw",
            run: ledger_shortfall,
        },
        TestScenario {
            key: "route-filter",
            name: "Bike Route Filtering",
            run: route_filter,
        },
        TestScenario {
            key: "premium-once",
            name: "Premium Bonus Granted Once",
            run: premium_once,
        },
        TestScenario {
            key: "onboarding",
            name: "Onboarding Name Validation",
            run: onboarding,
        },
        TestScenario {
            key: "persistence",
            name: "Settings Survive A Reload",
            run: persistence,
        },
    ]
}

pub fn find_scenario(key: &str) -> Option<TestScenario> {
    let key = key.to_lowercase();
    catalog().into_iter().find(|scenario| scenario.key == key)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog()
        .into_iter()
        .map(|scenario| (scenario.key, scenario.name))
        .collect()
}

fn start_generation(effects: &Effects) -> Result<TickGeneration> {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartTicker { generation } => Some(*generation),
            _ => None,
        })
        .ok_or_else(|| anyhow!("start did not request a ticker: {effects:?}"))
}

fn notices(effects: &Effects) -> Vec<&Notice> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Notify(notice) => Some(notice),
            _ => None,
        })
        .collect()
}

fn smoke(ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let store = MemoryStore::new();
    let mut tracker = ctx.boot(&store)?;
    let history_before = tracker.history().len();

    let generation = start_generation(&tracker.start(ctx.clock.now_ms()))?;
    ensure!(tracker.screen() == Screen::Activity, "start should open the activity screen");
    let steps = ctx.tick(&mut tracker, generation, 30);
    ensure!(tracker.session_steps() == steps, "session steps should match ticks");

    let effects = tracker.finish(ctx.clock.now_ms());
    ensure!(
        matches!(notices(&effects).as_slice(), [Notice::SessionSaved { .. }]),
        "finish should announce the saved session, got {effects:?}"
    );
    ensure!(tracker.status() == SessionStatus::Idle, "finish should return to idle");
    ensure!(
        tracker.history().len() == history_before + 1,
        "finished session should be logged"
    );
    Ok(())
}

fn five_ticks(ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let store = MemoryStore::new();
    let mut tracker = ctx.boot(&store)?;
    let generation = start_generation(&tracker.start(ctx.clock.now_ms()))?;
    ensure!(tracker.session_steps() == 0, "fresh session should start at 0 steps");

    ctx.tick(&mut tracker, generation, 5);
    let steps = tracker.session_steps();
    ensure!((15..=45).contains(&steps), "5 ticks gave {steps} steps, expected 15..=45");
    ensure!(
        tracker.elapsed_display(ctx.clock.now_ms()) == "00:00:05",
        "elapsed should read 00:00:05"
    );
    ensure!(
        tracker.total_steps() == ctx.assets.config.starting_lifetime_steps + u64::from(steps),
        "session steps should count towards the total"
    );
    Ok(())
}

fn pause_resume_finish(ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let mut session = ActivitySession::new();
    let range = ctx.assets.config.step_increment;
    let generation = session
        .start(ctx.clock.now_ms())
        .context("start from idle")?;
    for _ in 0..5 {
        ctx.clock.advance_secs(1);
        session.tick(generation, &mut ctx.rng, range);
    }

    let frozen = session.pause(ctx.clock.now_ms()).context("pause while running")?;
    ensure!(frozen == 5, "paused at {frozen}s, expected 5s");
    let steps_at_pause = session.steps();
    ctx.clock.advance_secs(30);
    ensure!(
        session.tick(generation, &mut ctx.rng, range).is_none(),
        "ticks while paused must not add steps"
    );
    ensure!(session.steps() == steps_at_pause, "steps should freeze while paused");

    session.start(ctx.clock.now_ms()).context("resume")?;
    ctx.clock.advance_secs(60);
    let finished = session
        .finish(ctx.clock.now_ms(), &ctx.assets.config)
        .context("finish")?;
    ensure!(
        finished.elapsed_seconds == 65,
        "elapsed {} != 65",
        finished.elapsed_seconds
    );
    ensure!(finished.summary.minutes == 1, "minutes {} != 1", finished.summary.minutes);
    ensure!(
        finished.summary.distance_km >= 0.2,
        "distance {} below the 0.2 km floor",
        finished.summary.distance_km
    );
    Ok(())
}

fn stale_ticks(ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let store = MemoryStore::new();
    let mut tracker = ctx.boot(&store)?;
    let first = start_generation(&tracker.start(ctx.clock.now_ms()))?;
    ctx.tick(&mut tracker, first, 2);
    let _ = tracker.pause(ctx.clock.now_ms());
    let second = start_generation(&tracker.start(ctx.clock.now_ms()))?;
    ensure!(second > first, "resume should bump the tick generation");

    let before = tracker.session_steps();
    ensure!(
        tracker.tick(first, &mut ctx.rng).is_none(),
        "tick from the cancelled ticker was applied"
    );
    ensure!(tracker.session_steps() == before, "stale tick changed the step count");
    ensure!(
        tracker.tick(second, &mut ctx.rng).is_some(),
        "current ticker should still count"
    );
    ensure!(
        tracker.start(ctx.clock.now_ms()).is_empty(),
        "start while running should be a no-op"
    );
    Ok(())
}

fn ledger_shortfall(_ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let mut ledger = PointsLedger::with_balance(100);
    ensure!(
        ledger.debit(150) == Err(LedgerError::InsufficientFunds { shortfall: 50 }),
        "overdraw should fail with shortfall 50"
    );
    ensure!(ledger.balance() == 100, "failed debit changed the balance");
    let balance = ledger.debit(60).context("debit within balance")?;
    ensure!(balance == 40, "balance {balance} != 40");
    Ok(())
}

fn route_filter(_ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let route = Route {
        id: "madrid-rio".to_string(),
        name: "Madrid Río".to_string(),
        kind: RouteKind::Bike,
        distance_km: 10.0,
        safe: false,
    };

    let short = RouteFilter::with_max_distance(5.0);
    ensure!(!short.is_visible(&route), "10 km route passed a 5 km limit");

    let mut walk_only = RouteFilter::with_max_distance(15.0);
    walk_only.set_kind(RouteKind::Walk, true);
    ensure!(!walk_only.is_visible(&route), "bike route passed a walk-only filter");

    walk_only.set_kind(RouteKind::Walk, false);
    ensure!(walk_only.is_visible(&route), "empty kind set should admit bikes");

    walk_only.set_safe_only(true);
    ensure!(!walk_only.is_visible(&route), "unsafe route passed the safe filter");
    Ok(())
}

fn premium_once(ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let store = MemoryStore::new();
    let mut tracker = ctx.boot(&store)?;
    let before = tracker.balance();
    let bonus = ctx.assets.config.premium_bonus;

    let effects = tracker.activate_premium();
    persist_effects(&store, &effects).context("persisting premium")?;
    ensure!(tracker.is_premium(), "upgrade did not stick");
    ensure!(tracker.balance() == before + bonus, "bonus not credited");
    ensure!(
        store.read(SettingKey::Premium)?.as_deref() == Some("true"),
        "premium flag not persisted"
    );

    let again = tracker.activate_premium();
    ensure!(
        matches!(notices(&again).as_slice(), [Notice::PremiumAlreadyActive]),
        "second upgrade should only notify, got {again:?}"
    );
    ensure!(tracker.balance() == before + bonus, "bonus granted twice");
    Ok(())
}

fn onboarding(ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let store = MemoryStore::new();
    let mut tracker = ctx.boot(&store)?;
    ensure!(tracker.onboarding_open(), "first run should prompt for a name");

    for rejected in ["A", "   ", "42"] {
        let effects = tracker.complete_onboarding(rejected);
        ensure!(
            matches!(notices(&effects).as_slice(), [Notice::InvalidName]),
            "`{rejected}` should be rejected"
        );
        ensure!(tracker.onboarding_open(), "rejected name closed the prompt");
    }

    let effects = tracker.complete_onboarding("  Inés   Ortega ");
    persist_effects(&store, &effects).context("persisting name")?;
    ensure!(!tracker.onboarding_open(), "valid name should close the prompt");
    ensure!(
        tracker.profile().display_name() == "Inés Ortega",
        "name stored as `{}`",
        tracker.profile().display_name()
    );
    ensure!(tracker.profile().initials() == "IO", "initials should be IO");
    ensure!(
        store.read(SettingKey::Username)?.as_deref() == Some("Inés Ortega"),
        "name not persisted"
    );
    Ok(())
}

fn persistence(ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let store = MemoryStore::new();
    let mut tracker = ctx.boot(&store)?;
    let default_points = ctx.assets.config.default_points;
    ensure!(
        store.read(SettingKey::Points)?.as_deref() == Some(default_points.to_string().as_str()),
        "boot should persist the starting balance"
    );

    let cost = tracker
        .reward("cafe")
        .map(|reward| reward.cost)
        .context("catalog should offer `cafe`")?;
    persist_effects(&store, &tracker.redeem_reward("cafe")).context("persisting redemption")?;
    persist_effects(&store, &tracker.toggle_theme()).context("persisting theme")?;
    persist_effects(&store, &tracker.complete_onboarding("Nuria")).context("persisting name")?;
    let theme = tracker.theme();

    let reloaded = ctx.boot(&store)?;
    ensure!(
        reloaded.balance() == default_points - cost,
        "balance {} after reload, expected {}",
        reloaded.balance(),
        default_points - cost
    );
    ensure!(reloaded.theme() == theme, "theme lost on reload");
    ensure!(!reloaded.onboarding_open(), "stored name should skip onboarding");
    ensure!(reloaded.status() == SessionStatus::Idle, "sessions do not survive reloads");
    if ctx.verbose {
        println!(
            "    seed {} reloaded with balance {}",
            ctx.seed,
            reloaded.balance()
        );
    }
    Ok(())
}
