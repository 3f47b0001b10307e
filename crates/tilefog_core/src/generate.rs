//! Random world generation

use crate::{MapError, TileCategory, WorldGenConfig, WorldMap};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// RNG for a config: seeded when `seed` is set, from entropy otherwise
pub fn world_rng(config: &WorldGenConfig) -> SmallRng {
    match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

/// Generate a map where each tile is independently river with
/// probability `river_chance`, grass otherwise.
pub fn generate_world(
    config: &WorldGenConfig,
    rng: &mut impl Rng,
) -> Result<WorldMap, MapError> {
    let size = WorldMap::tile_count(config.width, config.height)?;
    let chance = if config.river_chance.is_nan() {
        0.0
    } else {
        config.river_chance.clamp(0.0, 1.0)
    };
    let categories: Vec<TileCategory> = (0..size)
        .map(|_| {
            if rng.gen_bool(chance) {
                TileCategory::River
            } else {
                TileCategory::Grass
            }
        })
        .collect();

    let map = WorldMap::build(config.width, config.height, categories);
    tracing::debug!(
        width = config.width,
        height = config.height,
        river_chance = chance,
        "generated world"
    );
    Ok(map)
}
