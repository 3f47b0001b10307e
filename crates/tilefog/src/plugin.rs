//! Bevy integration
//!
//! [`TilefogPlugin`] builds the autotile rule table once while the app is
//! being assembled and stores it as the [`AutotileRules`] resource. Whenever
//! the [`WorldMapResource`] changes, [`TileSprites`] is recomputed so a
//! rendering system only has to look the keys up.
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use tilefog::prelude::*;
//!
//! App::new()
//!     .add_plugins((DefaultPlugins, TilefogPlugin))
//!     .insert_resource(WorldMapResource(WorldMap::from_rows(&["rgr"])?))
//!     .run();
//! ```

use bevy::prelude::*;
use tilefog_autotile::{init_rule_table, sprite_keys, RuleTable};
use tilefog_core::WorldMap;

/// The process-wide autotile rules, immutable after startup
#[derive(Resource, Debug)]
pub struct AutotileRules(pub RuleTable);

/// The world currently being shown
#[derive(Resource, Debug)]
pub struct WorldMapResource(pub WorldMap);

/// Sprite key per tile, in map index order
#[derive(Resource, Debug, Default)]
pub struct TileSprites {
    pub keys: Vec<String>,
}

/// Registers [`AutotileRules`] and keeps [`TileSprites`] in sync with the map
pub struct TilefogPlugin;

impl Plugin for TilefogPlugin {
    fn build(&self, app: &mut App) {
        // A corrupt built-in table is a programming error; refuse to start.
        let rules = init_rule_table()
            .unwrap_or_else(|e| panic!("tilefog autotile rule table is invalid: {e}"));

        app.insert_resource(AutotileRules(rules))
            .init_resource::<TileSprites>()
            .add_systems(
                Update,
                refresh_tile_sprites.run_if(resource_exists_and_changed::<WorldMapResource>),
            );
    }
}

fn refresh_tile_sprites(
    map: Res<WorldMapResource>,
    rules: Res<AutotileRules>,
    mut sprites: ResMut<TileSprites>,
) {
    sprites.keys = sprite_keys(&map.0, &rules.0);
    tracing::debug!(tiles = sprites.keys.len(), "refreshed tile sprites");
}
