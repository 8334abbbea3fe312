//! Session engine — the core of the game.
//!
//! `SessionEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `SessionSnapshot`s. Completely headless
//! (no renderer dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use log::warn;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use outbreak_core::commands::PlayerCommand;
use outbreak_core::components::*;
use outbreak_core::constants::*;
use outbreak_core::enums::{AgentLifecycle, BuffKind, Difficulty, SessionPhase};
use outbreak_core::events::GameEvent;
use outbreak_core::state::SessionSnapshot;
use outbreak_core::types::{ticks_from_secs, Position, SimTime, Velocity};

use crate::hooks::{ProgressSnapshot, SessionHooks};
use crate::session::{BuffTable, PendingWaveCompletion, SessionStats};
use crate::systems;
use crate::systems::combat::HitResolution;
use crate::systems::wave_director::{SpawnSequence, WaveConfig};
use crate::world_setup;

/// Configuration for starting a new session.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Starting difficulty (changeable from the menu).
    pub difficulty: Difficulty,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            difficulty: Difficulty::default(),
        }
    }
}

/// The session engine. Owns the ECS world and all session state.
pub struct SessionEngine {
    world: World,
    time: SimTime,
    phase: SessionPhase,
    difficulty: Difficulty,
    rng: ChaCha8Rng,
    next_agent_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,

    stats: SessionStats,
    buffs: BuffTable,
    player_position: Position,
    spawn_sequence: Option<SpawnSequence>,
    active_wave_config: Option<WaveConfig>,
    pending_completion: Option<PendingWaveCompletion>,
    next_wave_at_tick: Option<u64>,
    next_regen_tick: u64,
    next_autosave_tick: u64,
    hooks: SessionHooks,
}

impl SessionEngine {
    /// Create a new session engine with default (in-memory) hooks.
    pub fn new(config: SimConfig) -> Self {
        Self::with_hooks(config, SessionHooks::default())
    }

    /// Create a new session engine with injected boundary hooks.
    pub fn with_hooks(config: SimConfig, hooks: SessionHooks) -> Self {
        let mut stats = SessionStats::default();
        match hooks.persistence.high_score() {
            Ok(score) => stats.high_score = score,
            Err(e) => warn!("could not load high score: {e}"),
        }

        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SessionPhase::default(),
            difficulty: config.difficulty,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_agent_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            stats,
            buffs: BuffTable::default(),
            player_position: Position::default(),
            spawn_sequence: None,
            active_wave_config: None,
            pending_completion: None,
            next_wave_at_tick: None,
            next_regen_tick: 0,
            next_autosave_tick: 0,
            hooks,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the session by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SessionSnapshot {
        self.process_commands();

        if self.phase == SessionPhase::Playing {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            self.time,
            self.phase,
            self.difficulty,
            &self.stats,
            &self.buffs,
            events,
        )
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the selected difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the session stats.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Get a read-only reference to the buff table.
    pub fn buffs(&self) -> &BuffTable {
        &self.buffs
    }

    /// Spawn an agent directly with fixed hp at a position (for tests that
    /// need precise placement, bypassing the wave director).
    #[cfg(test)]
    pub fn spawn_test_agent(&mut self, hp: i32, position: Position) -> u32 {
        let id = self.next_agent_id;
        self.next_agent_id += 1;
        self.world.spawn((
            Hostile,
            AgentId { id },
            position,
            Velocity::new(0.0, 0.0, 0.0),
            Health { hp, max_hp: hp },
            Locomotion { speed: 1.0 },
            AttackState::default(),
            Lifecycle {
                state: AgentLifecycle::Alive,
                since_tick: self.time.tick,
            },
            GroanTimer {
                remaining_secs: AGENT_GROAN_MIN_SECS,
            },
        ));
        self.stats.enemies_alive += 1;
        self.stats.enemies_spawned += 1;
        id
    }

    /// Drop a pickup directly at a position (for tests).
    #[cfg(test)]
    pub fn force_spawn_pickup(&mut self, kind: BuffKind, position: Position) {
        world_setup::spawn_pickup(&mut self.world, kind, position, self.time.tick);
    }

    /// Overwrite the player's hp (for tests).
    #[cfg(test)]
    pub fn set_player_hp(&mut self, hp: i32) {
        self.stats.hp = hp;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Invalid-state commands are ignored.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetDifficulty { difficulty } => {
                if self.phase == SessionPhase::Menu {
                    self.difficulty = difficulty;
                }
            }
            PlayerCommand::Start => {
                if self.phase == SessionPhase::Menu {
                    self.begin_session();
                }
            }
            PlayerCommand::Restart => {
                if self.phase == SessionPhase::GameOver {
                    self.reset_to_menu();
                }
            }
            PlayerCommand::SetPlayerTransform { position } => {
                self.player_position = position;
                for (_entity, (_player, pos)) in
                    self.world.query_mut::<(&Player, &mut Position)>()
                {
                    *pos = position;
                }
            }
            PlayerCommand::FireHitscan { origin, direction } => {
                if self.phase == SessionPhase::Playing && self.stats.alive {
                    let hit = systems::combat::resolve_hitscan(&self.world, origin, direction);
                    if let Some(hit) = hit {
                        let damage = if self.buffs.is_active(BuffKind::Instakill) {
                            HITSCAN_INSTAKILL_DAMAGE
                        } else {
                            HITSCAN_BASE_DAMAGE
                        };
                        let score = if hit.headshot {
                            HEADSHOT_SCORE
                        } else {
                            BODY_HIT_SCORE
                        };
                        self.apply_hit(hit, damage, score);
                    }
                }
            }
            PlayerCommand::MeleeStrike { origin, direction } => {
                if self.phase == SessionPhase::Playing && self.stats.alive {
                    let hit = systems::combat::resolve_melee(&self.world, origin, direction);
                    if let Some(hit) = hit {
                        self.apply_hit(hit, MELEE_DAMAGE, MELEE_SCORE);
                    }
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.tick;

        // 1. Wave spawning
        let outcome = systems::wave_director::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_sequence,
            &mut self.next_agent_id,
            now,
            &mut self.events,
        );
        self.stats.enemies_spawned += outcome.spawned;
        self.stats.enemies_alive += outcome.spawned;

        // 2. Agent behavior (seek + attack decisions + groans)
        let attacks = systems::behavior::run(
            &mut self.world,
            &mut self.rng,
            self.player_position,
            &mut self.events,
        );
        for _attack in &attacks {
            self.apply_player_damage();
            if self.phase != SessionPhase::Playing {
                break;
            }
        }

        // 3. Movement integration
        systems::movement::run(&mut self.world);

        // 4. Pickup collection + expiry
        if self.phase == SessionPhase::Playing {
            let collected = systems::powerups::run(
                &mut self.world,
                self.player_position,
                now,
                &mut self.despawn_buffer,
                &mut self.events,
            );
            for kind in collected {
                self.activate_buff(kind);
            }
        }

        // 5. Buff expiry
        for kind in self.buffs.expire_due(now) {
            self.events.push(GameEvent::BuffExpired { kind });
            if kind == BuffKind::Speed {
                self.hooks.movement.scale_speed(1.0 / SPEED_BUFF_FACTOR);
            }
        }

        // 6. Wave completion commit + next-wave start
        if let Some(pending) = self.pending_completion {
            if now >= pending.due_tick {
                self.pending_completion = None;
                self.commit_wave_completion();
            }
        }
        if let Some(due) = self.next_wave_at_tick {
            if now >= due && self.phase == SessionPhase::Playing {
                self.next_wave_at_tick = None;
                self.start_wave(self.stats.wave);
            }
        }

        // 7. Health regeneration
        if now >= self.next_regen_tick {
            self.next_regen_tick = now + ticks_from_secs(HEALTH_REGEN_INTERVAL_SECS);
            if self.stats.alive && self.stats.hp < self.stats.max_hp {
                self.stats.hp = (self.stats.hp + HEALTH_REGEN_AMOUNT).min(self.stats.max_hp);
            }
        }

        // 8. Progress autosave
        if now >= self.next_autosave_tick {
            self.next_autosave_tick = now + ticks_from_secs(AUTOSAVE_INTERVAL_SECS);
            self.save_progress();
        }

        // 9. Cleanup (expired dying agents, claimed pickups)
        systems::cleanup::run(&mut self.world, now, &mut self.despawn_buffer);
    }

    /// Start a fresh play-through from the menu.
    fn begin_session(&mut self) {
        self.world = World::new();
        world_setup::spawn_player(&mut self.world);

        self.time = SimTime::default();
        self.stats.reset();
        self.buffs = BuffTable::default();
        self.next_agent_id = 0;
        self.despawn_buffer.clear();
        self.player_position = Position::default();
        self.pending_completion = None;
        self.next_wave_at_tick = None;
        self.next_regen_tick = ticks_from_secs(HEALTH_REGEN_INTERVAL_SECS);
        self.next_autosave_tick = ticks_from_secs(AUTOSAVE_INTERVAL_SECS);
        self.phase = SessionPhase::Playing;

        self.start_wave(1);
    }

    /// Tear a finished session down to the menu, keeping only the
    /// persisted high score and the selected difficulty.
    fn reset_to_menu(&mut self) {
        self.world = World::new();
        self.time = SimTime::default();
        self.stats.reset();
        self.buffs = BuffTable::default();
        self.spawn_sequence = None;
        self.active_wave_config = None;
        self.pending_completion = None;
        self.next_wave_at_tick = None;
        self.despawn_buffer.clear();
        self.events.clear();
        self.phase = SessionPhase::Menu;
    }

    /// Begin a wave: compute its config once and arm the spawn sequence.
    fn start_wave(&mut self, wave: u32) {
        let config = WaveConfig::compute(wave, self.difficulty);
        self.stats.wave = wave;
        self.stats.enemies_spawned = 0;
        self.active_wave_config = Some(config);
        self.spawn_sequence = Some(SpawnSequence::begin(config, self.time.tick));
        self.events.push(GameEvent::WaveStarted {
            wave,
            count: config.count,
        });
    }

    /// Apply a resolved hit: feedback event, score, damage, kill handling.
    /// Headshots double the base damage.
    fn apply_hit(&mut self, hit: HitResolution, base_damage: i32, score: u32) {
        self.events.push(GameEvent::HitMarker {
            position: hit.point,
            headshot: hit.headshot,
        });
        self.stats.score += score;

        let damage = if hit.headshot {
            base_damage * 2
        } else {
            base_damage
        };
        let dead = match self.world.get::<&mut Health>(hit.entity) {
            Ok(mut health) => {
                health.hp -= damage;
                health.hp <= 0
            }
            Err(_) => false,
        };

        if dead {
            self.kill_agent(hit.entity, hit.agent_id);
        }
    }

    /// Transition an agent to Dying, roll a pickup drop, and schedule the
    /// wave-completion check if this was the last one.
    fn kill_agent(&mut self, entity: hecs::Entity, agent_id: u32) {
        let position = match self.world.get::<&Position>(entity) {
            Ok(pos) => *pos,
            Err(_) => return,
        };

        if let Ok(mut lifecycle) = self.world.get::<&mut Lifecycle>(entity) {
            if lifecycle.state != AgentLifecycle::Alive {
                return;
            }
            lifecycle.state = AgentLifecycle::Dying;
            lifecycle.since_tick = self.time.tick;
        }
        if let Ok(mut velocity) = self.world.get::<&mut Velocity>(entity) {
            *velocity = Velocity::new(0.0, 0.0, 0.0);
        }

        self.stats.enemies_alive = self.stats.enemies_alive.saturating_sub(1);
        self.events.push(GameEvent::AgentKilled {
            id: agent_id,
            position,
        });

        if self.rng.gen_bool(PICKUP_DROP_CHANCE) {
            let kind = BuffKind::ALL[self.rng.gen_range(0..BuffKind::ALL.len())];
            world_setup::spawn_pickup(&mut self.world, kind, position, self.time.tick);
            self.events.push(GameEvent::PickupSpawned { kind, position });
        }

        if self.spawn_sequence.is_none() && self.stats.enemies_alive == 0 {
            self.pending_completion = Some(PendingWaveCompletion {
                due_tick: self.time.tick + ticks_from_secs(WAVE_COMPLETE_GRACE_SECS),
            });
        }
    }

    /// Commit a scheduled wave completion. Re-validates that the session
    /// is still Playing and the wave is still actually clear, so a death
    /// or kill inside the grace window cancels the commit.
    fn commit_wave_completion(&mut self) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        if self.spawn_sequence.is_some() || self.stats.enemies_alive > 0 {
            return;
        }

        // The bonus is computed with the incremented wave number.
        let completed = self.stats.wave;
        self.stats.wave = completed + 1;
        let bonus = self.stats.wave * WAVE_BONUS_PER_WAVE;
        self.stats.score += bonus;
        self.events.push(GameEvent::WaveCompleted {
            wave: completed,
            bonus,
        });
        self.save_progress();

        self.active_wave_config = None;
        self.next_wave_at_tick = Some(self.time.tick + ticks_from_secs(NEXT_WAVE_DELAY_SECS));
    }

    /// Resolve one agent attack against the player. The shield buff makes
    /// this a complete no-op; otherwise damage scales with difficulty.
    fn apply_player_damage(&mut self) {
        if !self.stats.alive || self.buffs.is_active(BuffKind::Shield) {
            return;
        }

        let damage = (INCOMING_ATTACK_DAMAGE * self.difficulty.damage_multiplier()).ceil() as i32;
        self.stats.hp -= damage;
        self.events.push(GameEvent::PlayerHit {
            damage,
            hp_remaining: self.stats.hp,
        });

        if self.stats.hp <= 0 {
            self.stats.hp = 0;
            self.game_over();
        }
    }

    /// End the session: halt spawning, cancel buffs (unwinding the speed
    /// side effect), persist the high score, and emit the final event.
    fn game_over(&mut self) {
        self.phase = SessionPhase::GameOver;
        self.stats.alive = false;
        self.spawn_sequence = None;
        self.active_wave_config = None;
        self.pending_completion = None;
        self.next_wave_at_tick = None;

        for kind in self.buffs.clear() {
            if kind == BuffKind::Speed {
                self.hooks.movement.scale_speed(1.0 / SPEED_BUFF_FACTOR);
            }
        }

        if self.stats.score > self.stats.high_score {
            self.stats.high_score = self.stats.score;
            if let Err(e) = self.hooks.persistence.save_high_score(self.stats.score) {
                warn!("could not save high score: {e}");
            }
        }
        self.save_progress();

        self.events.push(GameEvent::GameOver {
            score: self.stats.score,
            wave: self.stats.wave,
        });
    }

    /// Activate or refresh a buff from a collected pickup.
    ///
    /// Refresh resets the timer without re-applying side effects; maxammo's
    /// refill is the exception and fires on every collection.
    fn activate_buff(&mut self, kind: BuffKind) {
        let was_active = self.buffs.activate(kind, self.time.tick);
        self.events.push(GameEvent::BuffActivated {
            kind,
            duration_secs: kind.duration_secs(),
        });

        match kind {
            BuffKind::MaxAmmo => self.hooks.weapon.refill_ammo(),
            BuffKind::Speed => {
                if !was_active {
                    self.hooks.movement.scale_speed(SPEED_BUFF_FACTOR);
                }
            }
            BuffKind::Instakill | BuffKind::Shield => {}
        }
    }

    /// Persist current progress. Failures are logged and swallowed; the
    /// session keeps running with no storage at all.
    fn save_progress(&mut self) {
        let progress = ProgressSnapshot {
            wave: self.stats.wave,
            score: self.stats.score,
            timestamp_ticks: self.time.tick,
        };
        if let Err(e) = self.hooks.persistence.save_progress(&progress) {
            warn!("could not save progress: {e}");
        }
    }
}
