//! # Game State Module
//!
//! The simulation root. `GameState` owns the generated world, the player, enemies, NPCs
//! and the progression store, and advances them one tick per host frame.
//!
//! Everything the host needs to react to (sounds, notifications, dialogue boxes) leaves
//! through the outbound event queue, drained with [`GameState::drain_events`].

use crate::config::{PLAYER_START, RESPAWN_DELAY_MS};
use crate::generation::utils::{create_rng, generate_validated};
use crate::{
    find_entrance, update_enemy, village_npcs, CaveGenerator, DialogueNode, EncounterGenerator,
    Enemy, EntityId, EventQueue, GameEvent, GenerationConfig, MapKind, MessageImportance, Npc,
    OverworldGenerator, Player, Position, ProgressionStore, QuestCompletion, SpawnPoint, TickInput,
    TileMap, Vec2, WildgroveError, WildgroveResult, ATTACK_RADIUS, ATTACK_RANGE,
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Running totals for the session summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Number of enemies defeated
    pub enemies_defeated: u32,
    /// Total damage dealt to enemies
    pub damage_dealt: u64,
    /// Total damage taken
    pub damage_taken: u64,
    /// Number of times the player has died
    pub deaths: u32,
    /// Gold from kills and quests
    pub gold_earned: u64,
    /// Experience from kills
    pub exp_earned: u64,
    /// Potions drunk
    pub potions_used: u32,
    /// Swings started
    pub attacks_made: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlayerAttack { .. } => {
                self.attacks_made += 1;
            }
            GameEvent::EnemyDamaged { damage, .. } => {
                self.damage_dealt += *damage as u64;
            }
            GameEvent::EnemyKilled { gold, exp, .. } => {
                self.enemies_defeated += 1;
                self.gold_earned += *gold as u64;
                self.exp_earned += *exp as u64;
            }
            GameEvent::QuestCompleted { gold, .. } => {
                self.gold_earned += *gold as u64;
            }
            GameEvent::PlayerDamaged { damage, .. } => {
                self.damage_taken += *damage as u64;
            }
            GameEvent::PlayerHealed { .. } => {
                self.potions_used += 1;
            }
            GameEvent::PlayerDied => {
                self.deaths += 1;
            }
            _ => {}
        }
    }
}

/// Central game state containing all simulation data.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Configuration the world was generated from
    pub config: GenerationConfig,
    /// The generated tile grid
    pub world: TileMap,
    /// Player stats, inventory and quests
    pub progression: ProgressionStore,
    /// Player movement and combat state
    pub player: Player,
    /// Living enemies
    pub enemies: Vec<Enemy>,
    /// Village characters
    pub npcs: Vec<Npc>,
    /// Simulation clock in milliseconds
    pub clock_ms: u64,
    /// Ticks processed so far
    pub tick_number: u64,
    /// Where the player starts and respawns
    pub spawn_point: Vec2,
    /// Session totals
    pub statistics: GameStatistics,
    events: EventQueue,
    rng: StdRng,
    active_dialogue: Option<EntityId>,
    respawn_at_ms: Option<u64>,
}

impl GameState {
    /// Generates a world and populates it.
    ///
    /// Overworlds get the village NPCs and start the player at the village; caves start
    /// the player at the entrance of their largest open area.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildgrove::{GameState, GenerationConfig};
    ///
    /// let state = GameState::new(GenerationConfig::new(42)).unwrap();
    /// assert_eq!(state.world.width, 100);
    /// assert_eq!(state.enemies.len(), 10);
    /// assert_eq!(state.npcs.len(), 3);
    /// ```
    pub fn new(config: GenerationConfig) -> WildgroveResult<Self> {
        config.validate()?;
        let mut rng = create_rng(&config);

        let world: TileMap = match config.map_kind {
            MapKind::Overworld => generate_validated(&OverworldGenerator::new(), &config, &mut rng)?,
            MapKind::Cave => generate_validated(&CaveGenerator::new(), &config, &mut rng)?,
        };
        let spawns: Vec<SpawnPoint> =
            generate_validated(&EncounterGenerator::new(&world), &config, &mut rng)?;

        let (spawn_point, npcs) = match config.map_kind {
            MapKind::Overworld => (Vec2::from(PLAYER_START), village_npcs()?),
            MapKind::Cave => {
                let entrance = find_entrance(&world).ok_or_else(|| {
                    WildgroveError::GenerationFailed("cave has no entrance".to_string())
                })?;
                (entrance.world_center(world.tile_size), Vec::new())
            }
        };

        let enemies: Vec<Enemy> = spawns
            .iter()
            .map(|spawn| Enemy::new(spawn.kind, spawn.position))
            .collect();

        info!(
            "Generated {:?} world {}x{} (seed {}) with {} enemies and {} NPCs",
            config.map_kind,
            world.width,
            world.height,
            config.seed,
            enemies.len(),
            npcs.len()
        );

        Ok(Self {
            config,
            world,
            progression: ProgressionStore::new(),
            player: Player::new(spawn_point),
            enemies,
            npcs,
            clock_ms: 0,
            tick_number: 0,
            spawn_point,
            statistics: GameStatistics::new(),
            events: EventQueue::new(),
            rng,
            active_dialogue: None,
            respawn_at_ms: None,
        })
    }

    /// Wraps an existing map with no enemies or NPCs, starting at the village start.
    pub fn new_with_world(world: TileMap, seed: u64) -> Self {
        let config = GenerationConfig {
            width: world.width.saturating_mul(world.tile_size),
            height: world.height.saturating_mul(world.tile_size),
            tile_size: world.tile_size,
            ..GenerationConfig::new(seed)
        };
        let spawn_point = Vec2::from(PLAYER_START);

        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
            world,
            progression: ProgressionStore::new(),
            player: Player::new(spawn_point),
            enemies: Vec::new(),
            npcs: Vec::new(),
            clock_ms: 0,
            tick_number: 0,
            spawn_point,
            statistics: GameStatistics::new(),
            events: EventQueue::new(),
            active_dialogue: None,
            respawn_at_ms: None,
        }
    }

    /// Adds an enemy, returning its id.
    pub fn add_enemy(&mut self, enemy: Enemy) -> EntityId {
        let id = enemy.id;
        self.enemies.push(enemy);
        id
    }

    /// Adds an NPC, returning its id.
    pub fn add_npc(&mut self, npc: Npc) -> EntityId {
        let id = npc.id;
        self.npcs.push(npc);
        id
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn npc(&self, id: EntityId) -> Option<&Npc> {
        self.npcs.iter().find(|n| n.id == id)
    }

    /// The NPC the player is talking to, if any.
    pub fn active_dialogue(&self) -> Option<EntityId> {
        self.active_dialogue
    }

    /// Whether the player is dead and waiting to respawn.
    pub fn is_player_dead(&self) -> bool {
        self.progression.is_dead()
    }

    /// Events waiting to be drained.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Removes and returns all queued events in emission order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Advances the simulation by one host frame and returns the player's velocity.
    ///
    /// Unknown ids and unaffordable actions are logged and skipped; only errors that
    /// leave the state unusable are returned.
    pub fn tick(&mut self, input: &TickInput) -> WildgroveResult<Vec2> {
        self.clock_ms += input.delta_ms;
        self.tick_number += 1;

        if self.progression.is_dead() {
            let respawn_at = *self
                .respawn_at_ms
                .get_or_insert(self.clock_ms + RESPAWN_DELAY_MS);
            if self.clock_ms >= respawn_at {
                self.respawn();
            }
            return Ok(Vec2::zero());
        }

        self.player.position = input.player_position;

        if input.use_potion {
            self.drink_potion();
        }
        if input.toggle_inventory {
            self.emit(GameEvent::InventoryToggled);
        }
        if let Some(index) = input.dialogue_choice {
            let result = self.choose_dialogue(index);
            recover(result)?;
        }
        if input.interact {
            self.interact();
        }
        if input.attack {
            let damage = self.progression.player_attack_damage();
            if let Some(event) = self.player.try_attack(damage, self.clock_ms) {
                let origin = self.player.attack_origin();
                self.emit(event);
                self.resolve_player_attack(origin, damage, ATTACK_RADIUS);
            }
        }

        let velocity = self.player.update_movement(&input.movement, self.clock_ms);

        let player_position = self.player.position;
        for i in 0..self.enemies.len() {
            let attack = update_enemy(
                &mut self.enemies[i],
                player_position,
                self.clock_ms,
                &mut self.rng,
            );
            let Some(event) = attack else { continue };

            let (enemy_position, damage) = (self.enemies[i].position, self.enemies[i].damage);
            self.emit(event);
            if enemy_position.distance(player_position) < ATTACK_RANGE {
                self.damage_player(damage);
                if self.progression.is_dead() {
                    return Ok(Vec2::zero());
                }
            }
        }

        Ok(velocity)
    }

    /// Moves the player and enemies along their velocities, stopping at colliding cells.
    ///
    /// For hosts without their own physics.
    pub fn apply_motion(&mut self, delta_ms: u64) {
        if !self.progression.is_dead() {
            if let Some(next) = self.step(self.player.position, self.player.velocity, delta_ms) {
                self.player.position = next;
            }
        }

        for i in 0..self.enemies.len() {
            let enemy = &self.enemies[i];
            if let Some(next) = self.step(enemy.position, enemy.velocity, delta_ms) {
                self.enemies[i].position = next;
            }
        }
    }

    fn step(&self, from: Vec2, velocity: Vec2, delta_ms: u64) -> Option<Vec2> {
        let next = from.integrate(velocity, delta_ms);
        if next == from {
            return None;
        }
        self.world
            .is_walkable(Position::from_world(next, self.world.tile_size))
            .then_some(next)
    }

    /// Completes a quest, paying its gold and announcing it.
    pub fn complete_quest(&mut self, quest_id: &str) -> WildgroveResult<QuestCompletion> {
        let completion = self.progression.complete_quest(quest_id)?;
        let title = self
            .progression
            .quest(quest_id)
            .map(|q| q.title.clone())
            .unwrap_or_else(|| quest_id.to_string());

        self.emit(GameEvent::QuestCompleted {
            quest_id: quest_id.to_string(),
            gold: completion.gold_granted,
        });
        self.emit(GameEvent::message(
            format!("Quest Complete: {}", title),
            MessageImportance::Success,
        ));
        Ok(completion)
    }

    fn emit(&mut self, event: GameEvent) {
        self.statistics.update_from_event(&event);
        self.events.push(event);
    }

    fn resolve_player_attack(&mut self, origin: Vec2, damage: u32, radius: f32) {
        let mut hits = Vec::new();
        for enemy in self.enemies.iter_mut() {
            if !enemy.is_alive() || enemy.position.distance(origin) >= radius {
                continue;
            }
            let before = enemy.health;
            let reward = enemy.take_damage(damage, &mut self.rng);
            hits.push((
                enemy.id,
                enemy.kind,
                enemy.position,
                before - enemy.health,
                enemy.health,
                reward,
            ));
        }

        for (enemy_id, kind, position, dealt, health, reward) in hits {
            self.emit(GameEvent::EnemyDamaged {
                enemy_id,
                damage: dealt,
                health,
            });

            let Some(reward) = reward else { continue };
            self.progression.add_gold(reward.gold);
            let levels = self.progression.add_exp(reward.exp);
            debug!(
                "{} {} killed for {} gold and {} exp",
                kind, enemy_id, reward.gold, reward.exp
            );

            self.emit(GameEvent::EnemyKilled {
                enemy_id,
                kind,
                position,
                gold: reward.gold,
                exp: reward.exp,
            });
            self.emit(GameEvent::message(
                format!("+{} Gold, +{} XP", reward.gold, reward.exp),
                MessageImportance::Success,
            ));
            if levels > 0 {
                self.emit(GameEvent::LevelUp {
                    level: self.progression.level,
                    max_health: self.progression.max_health,
                });
                self.emit(GameEvent::message(
                    format!("Level Up! You are now level {}", self.progression.level),
                    MessageImportance::Success,
                ));
            }
        }

        self.enemies.retain(|e| e.is_alive());
    }

    fn drink_potion(&mut self) {
        match self.progression.use_potion() {
            Ok(amount) => {
                self.emit(GameEvent::PlayerHealed {
                    amount,
                    health: self.progression.health,
                });
                self.emit(GameEvent::message("Health Restored!", MessageImportance::Success));
            }
            Err(err) => {
                debug!("Potion refused: {}", err);
                self.emit(GameEvent::message("No potions left!", MessageImportance::Warning));
            }
        }
    }

    /// Opens a conversation with the first NPC in range, unless one is already open.
    fn interact(&mut self) {
        if self.active_dialogue.is_some() {
            return;
        }

        let player = self.player.position;
        let opened = self
            .npcs
            .iter()
            .find(|npc| npc.can_interact(player))
            .and_then(|npc| npc.interact().map(|node| dialogue_opened(npc.id, node)));

        if let Some((npc_id, event)) = opened {
            debug!("Opened dialogue with {}", npc_id);
            self.active_dialogue = Some(npc_id);
            self.emit(event);
        }
    }

    fn choose_dialogue(&mut self, index: usize) -> WildgroveResult<()> {
        let Some(npc_id) = self.active_dialogue else {
            debug!("Dialogue choice {} with no open dialogue", index);
            return Ok(());
        };

        let npc = self
            .npcs
            .iter_mut()
            .find(|n| n.id == npc_id)
            .ok_or_else(|| WildgroveError::not_found("npc", npc_id.to_string()))?;
        let node_id = npc.current_node_id().to_string();
        let outcome = npc.dialogue.select(&node_id, index, &mut self.progression)?;

        let opened = match &outcome.next {
            Some(next) => {
                npc.set_dialogue_node(next)?;
                npc.interact().map(|node| dialogue_opened(npc_id, node).1)
            }
            None => None,
        };

        for event in outcome.events {
            self.emit(event);
        }
        match opened {
            Some(event) => self.emit(event),
            None => {
                self.active_dialogue = None;
                self.emit(GameEvent::DialogueClosed { npc_id });
            }
        }
        Ok(())
    }

    fn damage_player(&mut self, damage: u32) {
        let health = self.progression.take_damage(damage);
        self.emit(GameEvent::PlayerDamaged { damage, health });

        if health == 0 {
            info!("Player died at tick {}", self.tick_number);
            self.player.halt();
            self.respawn_at_ms = Some(self.clock_ms + RESPAWN_DELAY_MS);
            if let Some(npc_id) = self.active_dialogue.take() {
                self.emit(GameEvent::DialogueClosed { npc_id });
            }
            self.emit(GameEvent::PlayerDied);
            self.emit(GameEvent::message("You have died...", MessageImportance::Critical));
        }
    }

    fn respawn(&mut self) {
        self.progression.restore_full_health();
        self.player.position = self.spawn_point;
        self.player.halt();
        self.respawn_at_ms = None;
        info!("Player respawned at ({}, {})", self.spawn_point.x, self.spawn_point.y);

        self.emit(GameEvent::PlayerRespawned {
            position: self.spawn_point,
        });
        let text = match self.config.map_kind {
            MapKind::Overworld => "Respawned at village",
            MapKind::Cave => "Respawned at cave entrance",
        };
        self.emit(GameEvent::message(text, MessageImportance::Success));
    }
}

fn dialogue_opened(npc_id: EntityId, node: &DialogueNode) -> (EntityId, GameEvent) {
    (
        npc_id,
        GameEvent::DialogueOpened {
            npc_id,
            node_id: node.id.clone(),
            speaker: node.speaker.clone(),
            text: node.text.clone(),
            choices: node.choice_texts(),
        },
    )
}

/// Logs and swallows errors the simulation can carry on from.
fn recover(result: WildgroveResult<()>) -> WildgroveResult<()> {
    match result {
        Err(err) if err.is_recoverable() => {
            warn!("Ignoring {}", err);
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{elder_dialogue, EnemyKind, MoveIntent, NpcKind, TileType};

    fn open_state() -> GameState {
        GameState::new_with_world(TileMap::new(40, 30, 32, TileType::Grass), 7)
    }

    fn input_at(state: &GameState, delta_ms: u64) -> TickInput {
        TickInput::idle(delta_ms, state.player.position)
    }

    #[test]
    fn test_new_overworld() {
        let state = GameState::new(GenerationConfig::for_testing(9)).unwrap();
        assert_eq!(state.world.width, 40);
        assert_eq!(state.npcs.len(), 3);
        assert_eq!(state.enemies.len(), 3);
        assert_eq!(state.spawn_point, Vec2::new(640.0, 360.0));
        assert_eq!(state.progression.level, 1);
    }

    #[test]
    fn test_new_cave_starts_on_open_ground() {
        let state = GameState::new(GenerationConfig::for_cave(4)).unwrap();
        assert!(state.npcs.is_empty());
        let cell = Position::from_world(state.spawn_point, state.world.tile_size);
        assert!(state.world.is_walkable(cell));
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let mut config = GenerationConfig::new(1);
        config.tile_size = 0;
        assert!(matches!(
            GameState::new(config),
            Err(WildgroveError::Configuration(_))
        ));
    }

    #[test]
    fn test_tick_returns_movement_velocity() {
        let mut state = open_state();
        let mut input = input_at(&state, 16);
        input.movement = MoveIntent {
            right: true,
            ..MoveIntent::none()
        };
        let velocity = state.tick(&input).unwrap();
        assert_eq!(velocity, Vec2::new(160.0, 0.0));
        assert_eq!(state.clock_ms, 16);
        assert_eq!(state.tick_number, 1);
    }

    #[test]
    fn test_attack_kills_enemy_and_pays_out() {
        let mut state = open_state();
        let start = state.player.position;
        let mut slime = Enemy::new(EnemyKind::Slime, Vec2::new(start.x + 40.0, start.y));
        slime.health = 5;
        let id = state.add_enemy(slime);

        let mut input = input_at(&state, 16);
        input.attack = true;
        state.tick(&input).unwrap();

        assert!(state.enemy(id).is_none());
        let events = state.drain_events();
        let gold = events
            .iter()
            .find_map(|e| match e {
                GameEvent::EnemyKilled { gold, exp, .. } => {
                    assert_eq!(*exp, 60);
                    Some(*gold)
                }
                _ => None,
            })
            .unwrap();
        assert!((5..=15).contains(&gold));
        assert_eq!(state.progression.gold, gold);
        assert_eq!(state.progression.experience, 60);
        assert_eq!(state.statistics.enemies_defeated, 1);
        assert_eq!(state.statistics.damage_dealt, 5);
    }

    #[test]
    fn test_enemy_hits_player_after_cooldown() {
        let mut state = open_state();
        let start = state.player.position;
        state.add_enemy(Enemy::new(EnemyKind::Skeleton, Vec2::new(start.x + 20.0, start.y)));

        state.tick(&input_at(&state, 500)).unwrap();
        assert_eq!(state.progression.health, 100);

        state.tick(&input_at(&state, 500)).unwrap();
        assert_eq!(state.progression.health, 90);
        assert!(state
            .drain_events()
            .contains(&GameEvent::PlayerDamaged {
                damage: 10,
                health: 90
            }));
    }

    #[test]
    fn test_death_and_respawn() {
        let mut state = open_state();
        let start = state.player.position;
        state.progression.health = 5;
        state.add_enemy(Enemy::new(EnemyKind::Goblin, Vec2::new(start.x + 10.0, start.y)));

        state.tick(&input_at(&state, 1000)).unwrap();
        assert!(state.is_player_dead());
        assert!(state.drain_events().contains(&GameEvent::PlayerDied));
        assert_eq!(state.statistics.deaths, 1);

        // Dead players ignore input until the timer runs out
        let mut input = input_at(&state, 1000);
        input.use_potion = true;
        state.tick(&input).unwrap();
        assert!(state.is_player_dead());
        assert_eq!(state.progression.potion_count(), 3);

        state.tick(&input_at(&state, 1000)).unwrap();
        assert!(!state.is_player_dead());
        assert_eq!(state.progression.health, state.progression.max_health);
        assert_eq!(state.player.position, Vec2::new(640.0, 360.0));
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::PlayerRespawned {
            position: Vec2::new(640.0, 360.0)
        }));
        assert!(events.contains(&GameEvent::message(
            "Respawned at village",
            MessageImportance::Success
        )));
    }

    #[test]
    fn test_cave_respawn_names_the_entrance() {
        let mut state = GameState::new(GenerationConfig::for_cave(4)).unwrap();
        state.enemies.clear();
        state.progression.health = 5;
        let entrance = state.spawn_point;
        state.add_enemy(Enemy::new(EnemyKind::Goblin, entrance));

        state.tick(&input_at(&state, 1000)).unwrap();
        assert!(state.is_player_dead());
        state.enemies.clear();
        state.drain_events();

        state.tick(&input_at(&state, 2000)).unwrap();
        assert!(!state.is_player_dead());
        assert_eq!(state.player.position, entrance);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::message(
            "Respawned at cave entrance",
            MessageImportance::Success
        )));
        assert!(!events.iter().any(|e| matches!(
            e,
            GameEvent::Message { text, .. } if text.contains("village")
        )));
    }

    #[test]
    fn test_potion_heals_and_reports_empty() {
        let mut state = open_state();
        state.progression.health = 40;
        let mut input = input_at(&state, 16);
        input.use_potion = true;

        state.tick(&input).unwrap();
        assert_eq!(state.progression.health, 90);
        assert_eq!(state.progression.potion_count(), 2);

        state.progression.remove_item("potion1", 2).unwrap();
        state.drain_events();
        state.tick(&input).unwrap();
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::message("No potions left!", MessageImportance::Warning)]
        );
    }

    #[test]
    fn test_dialogue_through_ticks() {
        let mut state = open_state();
        let start = state.player.position;
        let elder = Npc::new(NpcKind::Villager, "Village Elder", start, elder_dialogue()).unwrap();
        let elder_id = state.add_npc(elder);
        state.progression.quests.iter_mut().for_each(|q| q.active = false);

        let mut input = input_at(&state, 16);
        input.interact = true;
        state.tick(&input).unwrap();
        assert_eq!(state.active_dialogue(), Some(elder_id));

        let mut input = input_at(&state, 16);
        input.dialogue_choice = Some(1);
        state.tick(&input).unwrap();
        assert!(state.progression.quest("main_quest_1").unwrap().active);
        assert_eq!(state.npc(elder_id).unwrap().current_node_id(), "elder_accept");

        // Leaving from the accept node closes the conversation
        let mut input = input_at(&state, 16);
        input.dialogue_choice = Some(0);
        state.tick(&input).unwrap();
        assert_eq!(state.active_dialogue(), None);
        assert!(state
            .drain_events()
            .contains(&GameEvent::DialogueClosed { npc_id: elder_id }));
    }

    #[test]
    fn test_bad_dialogue_choice_is_ignored() {
        let mut state = open_state();
        let start = state.player.position;
        state.add_npc(Npc::new(NpcKind::Villager, "Elder", start, elder_dialogue()).unwrap());

        let mut input = input_at(&state, 16);
        input.interact = true;
        state.tick(&input).unwrap();

        let mut input = input_at(&state, 16);
        input.dialogue_choice = Some(42);
        assert!(state.tick(&input).is_ok());
        assert!(state.active_dialogue().is_some());
    }

    #[test]
    fn test_complete_quest_emits_reward() {
        let mut state = open_state();
        let completion = state.complete_quest("main_quest_1").unwrap();
        assert_eq!(completion.gold_granted, 50);
        assert_eq!(state.progression.gold, 50);
        assert_eq!(state.statistics.gold_earned, 50);
        assert!(state.complete_quest("nope").is_err());
    }

    #[test]
    fn test_apply_motion_respects_collision() {
        let mut world = TileMap::new(40, 30, 32, TileType::Grass);
        world.place_object(Position::new(23, 11), TileType::Wall, true);
        let mut state = GameState::new_with_world(world, 1);

        state.player.velocity = Vec2::new(160.0, 0.0);
        state.apply_motion(500);
        assert_eq!(state.player.position, Vec2::new(720.0, 360.0));

        state.player.velocity = Vec2::new(64.0, 0.0);
        state.apply_motion(500);
        assert_eq!(state.player.position, Vec2::new(720.0, 360.0));
    }
}
