//! Level table and session progress.
//!
//! Stored in `SimulationEngine`, NOT in the physics world.

use arena_core::enums::LevelTheme;

/// Arena parameters for one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    pub theme: LevelTheme,
    /// Half-size of the square arena (walls sit at ±arena_size).
    pub arena_size: f32,
    pub obstacle_count: usize,
    /// Seconds between enemy spawns.
    pub spawn_interval: f64,
    /// Cap on concurrently live enemies.
    pub max_enemies: usize,
}

const LEVEL_CONFIGS: [LevelConfig; 3] = [
    LevelConfig {
        theme: LevelTheme::Neon,
        arena_size: 40.0,
        obstacle_count: 12,
        spawn_interval: 3.0,
        max_enemies: 8,
    },
    LevelConfig {
        theme: LevelTheme::Industrial,
        arena_size: 45.0,
        obstacle_count: 15,
        spawn_interval: 2.5,
        max_enemies: 10,
    },
    LevelConfig {
        theme: LevelTheme::Cyber,
        arena_size: 50.0,
        obstacle_count: 18,
        spawn_interval: 2.0,
        max_enemies: 12,
    },
];

/// Config for a 1-based level. Themes cycle every three levels.
pub fn level_config(level: u32) -> LevelConfig {
    let index = level.saturating_sub(1) as usize % LEVEL_CONFIGS.len();
    LEVEL_CONFIGS[index]
}

/// Running score and level state for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub score: u32,
    pub kills: u32,
    /// 1-based.
    pub level: u32,
    /// Kills since the last level-up.
    pub level_kills: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            score: 0,
            kills: 0,
            level: 1,
            level_kills: 0,
        }
    }
}

impl Progress {
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Count a kill worth `points`. Returns `true` if it completed the level.
    pub fn record_kill(&mut self, points: u32, kills_per_level: u32) -> bool {
        self.add_score(points);
        self.kills += 1;
        self.level_kills += 1;
        if self.level_kills >= kills_per_level {
            self.level += 1;
            self.level_kills = 0;
            true
        } else {
            false
        }
    }

    pub fn difficulty(&self) -> u32 {
        arena_ai::spawn::difficulty(self.level, self.kills)
    }
}
