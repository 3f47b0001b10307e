//! A playable world: map, explorer and the autotile rules that draw it

use crate::TilefogError;
use rand::rngs::SmallRng;
use tilefog_autotile::{classify_at, init_rule_table, sprite_keys, Classification, RuleTable};
use tilefog_core::{
    create_world, random_movement_cost, world_rng, Direction, Explorer, TilePos, WalkOutcome,
    WorldConfig, WorldMap,
};

/// Owns everything a frontend needs to run and draw one world.
///
/// The rule table is built once when the session starts and never changes.
#[derive(Debug)]
pub struct Session {
    pub map: WorldMap,
    pub explorer: Explorer,
    rules: RuleTable,
    rng: SmallRng,
}

impl Session {
    /// Generate a world from `config` and spawn the explorer in it
    pub fn new(config: &WorldConfig) -> Result<Self, TilefogError> {
        config.validate()?;
        let rules = init_rule_table()?;
        let (map, explorer) = create_world(config)?;
        // offset the seed so movement costs don't replay the generation stream
        let rng = world_rng(&tilefog_core::WorldGenConfig {
            seed: config.world.seed.map(|s| s.wrapping_add(1)),
            ..config.world.clone()
        });
        tracing::info!(
            width = map.width(),
            height = map.height(),
            "started tilefog session"
        );
        Ok(Self {
            map,
            explorer,
            rules,
            rng,
        })
    }

    /// Start a session on an existing map
    pub fn with_map(
        mut map: WorldMap,
        explorer_image: &str,
        start: TilePos,
        movement_points: u32,
        rng: SmallRng,
    ) -> Result<Self, TilefogError> {
        let rules = init_rule_table()?;
        let explorer = Explorer::spawn(
            &mut map,
            tilefog_core::TileContent::new(explorer_image),
            start,
            movement_points,
        )?;
        Ok(Self {
            map,
            explorer,
            rules,
            rng,
        })
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Walk one step, paying a random 1 or 5 movement points
    pub fn walk(&mut self, direction: Direction) -> Result<WalkOutcome, TilefogError> {
        let rng = &mut self.rng;
        let outcome = self
            .explorer
            .walk(&mut self.map, direction, |_| random_movement_cost(rng))?;
        Ok(outcome)
    }

    pub fn classify_at(&self, pos: TilePos) -> Option<Classification<'_>> {
        classify_at(pos, &self.map, &self.rules)
    }

    /// Sprite key for every tile, fog for undiscovered ones
    pub fn sprite_keys(&self) -> Vec<String> {
        sprite_keys(&self.map, &self.rules)
    }
}
