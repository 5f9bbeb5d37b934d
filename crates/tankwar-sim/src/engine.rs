//! Match engine — the core of the game.
//!
//! `MatchEngine` owns the hecs ECS world, processes match commands, runs
//! all systems in a fixed order, and produces `MatchSnapshot`s. Completely
//! headless, enabling deterministic testing: the same seed and input
//! sequence reproduce the same match tick for tick.

use std::collections::VecDeque;

use hecs::World;
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tankwar_core::commands::{InputState, MatchCommand};
use tankwar_core::components::{Active, Enemy, Player};
use tankwar_core::constants::SCORE_WIN_BONUS;
use tankwar_core::enums::MatchPhase;
use tankwar_core::events::GameEvent;
use tankwar_core::state::{MatchSnapshot, MatchState};
use tankwar_core::types::SimTime;

use tankwar_enemy_ai::registry::ChaserRegistry;
use tankwar_field::obstacles::ObstacleSet;

use crate::bus::EventBus;
use crate::systems;
use crate::world_setup;

/// Configuration for a new match engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same match.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The match engine. Owns the ECS world and all per-match state.
pub struct MatchEngine {
    world: World,
    time: SimTime,
    phase: MatchPhase,
    seed: u64,
    rng: ChaCha8Rng,
    state: MatchState,
    bus: EventBus,
    chasers: ChaserRegistry,
    obstacles: ObstacleSet,
    command_queue: VecDeque<MatchCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    next_agent_id: u32,
    match_ended: bool,
    player_won: bool,
    objective_collected: bool,
}

impl MatchEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: MatchPhase::default(),
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            state: MatchState::default(),
            bus: EventBus::new(),
            chasers: ChaserRegistry::new(),
            obstacles: ObstacleSet::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            next_agent_id: 0,
            match_ended: false,
            player_won: false,
            objective_collected: false,
        }
    }

    /// Register an event subscriber. Call before starting the match.
    pub fn subscribe(&mut self, callback: impl FnMut(&GameEvent) + 'static) {
        self.bus.subscribe(callback);
    }

    /// Queue a match command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: MatchCommand) {
        self.command_queue.push_back(command);
    }

    /// Build (or rebuild) the world and begin simulating.
    pub fn start_match(&mut self) {
        self.clear_match_state();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        world_setup::setup_match(&mut self.world, &mut self.rng, &mut self.next_agent_id);
        self.phase = MatchPhase::Active;
        debug!("match started (seed {})", self.seed);
    }

    /// Drop everything and return to the idle phase.
    pub fn reset(&mut self) {
        self.clear_match_state();
        self.phase = MatchPhase::Idle;
        debug!("match reset");
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputState) -> MatchSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::Active {
            self.run_systems(input);
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        for event in &events {
            self.bus.publish(event);
        }

        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            &self.state,
            self.match_ended,
            self.player_won,
            self.objective_collected,
            events,
        )
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for tests.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn match_state(&self) -> &MatchState {
        &self.state
    }

    fn clear_match_state(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.state.reset();
        self.chasers.clear();
        self.command_queue.clear();
        self.events.clear();
        self.next_agent_id = 0;
        self.match_ended = false;
        self.player_won = false;
        self.objective_collected = false;
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                MatchCommand::StartMatch => self.start_match(),
                MatchCommand::Reset => self.reset(),
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputState) {
        // 1. Missile flight
        systems::missiles::advance(&mut self.world);
        // 2. Missile collisions, damage, scoring
        systems::combat::resolve(
            &mut self.world,
            &mut self.state,
            &mut self.events,
            self.time.tick,
        );
        // 3. Breakable wall visual state
        systems::walls::update_damage_flags(&mut self.world);
        // 4. Explosion animation
        systems::effects::advance(&mut self.world, self.time.tick);
        // 5. Collidable picture for this tick
        systems::obstacles::rebuild(&self.world, &mut self.obstacles);
        // 6. Player movement and fire
        systems::player::run(&mut self.world, input, &self.obstacles, self.time.tick);
        // 7. Enemy AI decisions
        systems::enemy_ai::run(
            &mut self.world,
            &self.obstacles,
            &mut self.chasers,
            &mut self.rng,
            self.time.tick,
        );
        // 8. Objective threat timer
        systems::objective::run(&mut self.world, self.time.tick);
        // 9. Medkit and objective pickups
        systems::pickups::run(
            &mut self.world,
            &mut self.state,
            &mut self.events,
            &mut self.objective_collected,
        );
        // 10. Win/lose evaluation (latched)
        self.evaluate_match_end();
        // 11. Despawn retired transients
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn evaluate_match_end(&mut self) {
        if self.match_ended {
            return;
        }

        let player_alive = self
            .world
            .query::<(&Player, &Active)>()
            .iter()
            .any(|(_, (_, active))| active.0);
        let enemies_remaining = self
            .world
            .query::<(&Enemy, &Active)>()
            .iter()
            .filter(|(_, (_, active))| active.0)
            .count();

        if !player_alive || enemies_remaining == 0 {
            let won = player_alive && enemies_remaining == 0;
            if won {
                self.state.add_score(SCORE_WIN_BONUS);
            }
            self.match_ended = true;
            self.player_won = won;
            self.phase = MatchPhase::Complete;
            self.events.push(GameEvent::MatchEnded { player_won: won });
            debug!("match ended, player_won={}", won);
        }
    }
}
