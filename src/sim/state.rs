//! World state and game lifecycle
//!
//! The [`World`] owns every sprite, the staging buffer for sprites spawned
//! mid-frame, the player craft, score and frame counter. Lifecycle commands
//! (`start`, `pause`, `destroy`) are safe to call in any state.

use serde::{Deserialize, Serialize};

use super::craft::Craft;
use super::rect::Rect;
use super::spawner::Spawner;
use super::sprite::{AwardKind, Sprite, SpriteIds};
use crate::error::GameError;
use crate::settings::Settings;
use crate::surface::{AssetInfo, AssetTable};

/// Game lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    Started,
    Paused,
    Over,
    /// No session; the initial state
    #[default]
    Destroyed,
}

/// The simulated world
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) settings: Settings,
    pub(crate) status: GameStatus,
    pub(crate) assets: Option<AssetTable>,
    pub(crate) craft: Option<Craft>,
    /// Live sprites, in insertion order
    pub(crate) sprites: Vec<Sprite>,
    /// Sprites spawned during a frame; merged at the start of the next one
    pub(crate) pending: Vec<Sprite>,
    pub(crate) spawner: Spawner,
    pub(crate) ids: SpriteIds,
    /// Frames simulated since (re)start
    pub(crate) frame: u64,
    pub(crate) score: u64,
    /// Continue/restart button from the last dialog drawn
    pub(crate) dialog_button: Option<Rect>,
}

impl World {
    pub fn new(settings: Settings) -> Self {
        let spawner = Spawner::new(settings.seed);
        Self {
            settings,
            status: GameStatus::Destroyed,
            assets: None,
            craft: None,
            sprites: Vec::new(),
            pending: Vec::new(),
            spawner,
            ids: SpriteIds::default(),
            frame: 0,
            score: 0,
            dialog_button: None,
        }
    }

    /// Start a new session with the host's assets.
    ///
    /// Always tears down the current session first. Fails without starting
    /// if the asset list is short or contains an empty bitmap.
    pub fn start(&mut self, assets: Vec<AssetInfo>) -> Result<(), GameError> {
        self.destroy();
        let table = AssetTable::new(assets)?;
        self.assets = Some(table);
        self.begin();
        Ok(())
    }

    /// Restart after game over, keeping the loaded assets.
    /// The spawner is reseeded so every session replays from `Settings::seed`.
    pub(crate) fn restart(&mut self) {
        self.reset();
        self.begin();
    }

    fn begin(&mut self) {
        let Some(assets) = &self.assets else {
            return;
        };
        self.craft = Some(Craft::new(assets));
        self.spawner = Spawner::new(self.settings.seed);
        self.status = GameStatus::Started;
        log::info!("Game started");
    }

    /// STARTED -> PAUSED; no-op otherwise
    pub fn pause(&mut self) {
        if self.status == GameStatus::Started {
            self.status = GameStatus::Paused;
            log::info!("Game paused at frame {}", self.frame);
        }
    }

    /// PAUSED -> STARTED; no-op otherwise
    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Started;
            log::info!("Game resumed");
        }
    }

    /// Tear down the session and release the assets
    pub fn destroy(&mut self) {
        let was = self.status;
        self.reset();
        self.assets = None;
        if was != GameStatus::Destroyed {
            log::info!("Game destroyed");
        }
    }

    /// Back to DESTROYED with empty world; assets are kept
    fn reset(&mut self) {
        self.status = GameStatus::Destroyed;
        self.frame = 0;
        self.score = 0;
        self.craft = None;
        for sprite in &mut self.sprites {
            sprite.destroy();
        }
        self.sprites.clear();
        self.pending.clear();
        self.dialog_button = None;
    }

    /// Stage a sprite for the next frame
    pub fn add_sprite(&mut self, sprite: Sprite) {
        self.pending.push(sprite);
    }

    pub(crate) fn add_score(&mut self, value: u64) {
        self.score += value;
    }

    // === Queries ===

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn craft(&self) -> Option<&Craft> {
        self.craft.as_ref()
    }

    pub fn bomb_count(&self) -> u32 {
        self.craft.as_ref().map_or(0, Craft::bombs)
    }

    /// Live set, including sprites destroyed this frame but not yet removed
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Continue/restart button of the last dialog drawn
    pub fn dialog_button(&self) -> Option<Rect> {
        self.dialog_button
    }

    fn alive(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter().filter(|s| !s.is_destroyed())
    }

    pub fn alive_enemies(&self) -> Vec<&Sprite> {
        self.alive().filter(|s| s.is_enemy()).collect()
    }

    pub fn alive_bullets(&self) -> Vec<&Sprite> {
        self.alive().filter(|s| s.is_bullet()).collect()
    }

    pub fn alive_bomb_awards(&self) -> Vec<&Sprite> {
        self.alive()
            .filter(|s| s.award_kind() == Some(AwardKind::Bomb))
            .collect()
    }

    pub fn alive_bullet_awards(&self) -> Vec<&Sprite> {
        self.alive()
            .filter(|s| s.award_kind() == Some(AwardKind::Bullet))
            .collect()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::REQUIRED_ASSETS;
    use crate::sim::sprite::SpriteKind;

    pub(crate) fn asset_list() -> Vec<AssetInfo> {
        let sizes = [
            (60.0, 40.0),
            (700.0, 50.0),
            (6.0, 14.0),
            (6.0, 14.0),
            (30.0, 20.0),
            (50.0, 40.0),
            (100.0, 80.0),
            (30.0, 40.0),
            (30.0, 40.0),
            (20.0, 20.0),
            (20.0, 20.0),
            (20.0, 30.0),
        ];
        sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| AssetInfo::new(100 + i as u32, w, h))
            .collect()
    }

    #[test]
    fn test_initial_state_destroyed() {
        let world = World::default();
        assert_eq!(world.status(), GameStatus::Destroyed);
        assert!(world.craft().is_none());
    }

    #[test]
    fn test_start_allocates_one_craft() {
        let mut world = World::default();
        world.start(asset_list()).unwrap();
        assert_eq!(world.status(), GameStatus::Started);
        assert!(world.craft().is_some());
        assert_eq!(world.score(), 0);
        assert_eq!(world.frame(), 0);
    }

    #[test]
    fn test_start_with_too_few_assets_fails_fast() {
        let mut world = World::default();
        let mut assets = asset_list();
        assets.pop();
        let err = world.start(assets).unwrap_err();
        assert_eq!(
            err,
            GameError::TooFewAssets {
                supplied: REQUIRED_ASSETS - 1,
                required: REQUIRED_ASSETS
            }
        );
        assert_eq!(world.status(), GameStatus::Destroyed);
        assert!(world.craft().is_none());
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut world = World::default();
        world.start(asset_list()).unwrap();
        world.pause();
        world.frame = 42;
        world.pause();
        world.pause();
        assert_eq!(world.status(), GameStatus::Paused);
        assert_eq!(world.frame(), 42);
    }

    #[test]
    fn test_invalid_transitions_are_noops() {
        let mut world = World::default();
        world.pause();
        assert_eq!(world.status(), GameStatus::Destroyed);
        world.resume();
        assert_eq!(world.status(), GameStatus::Destroyed);

        world.start(asset_list()).unwrap();
        world.resume();
        assert_eq!(world.status(), GameStatus::Started);
    }

    #[test]
    fn test_destroy_twice_resets() {
        let mut world = World::default();
        world.start(asset_list()).unwrap();
        world.add_score(500);
        world.destroy();
        world.destroy();
        assert_eq!(world.status(), GameStatus::Destroyed);
        assert_eq!(world.score(), 0);
        assert_eq!(world.frame(), 0);
        assert!(world.craft().is_none());
        assert!(world.sprites().is_empty());
        assert_eq!(world.pending_len(), 0);
    }

    #[test]
    fn test_restart_resets_score_and_frame() {
        let mut world = World::default();
        world.start(asset_list()).unwrap();
        world.add_score(1000);
        world.frame = 99;
        world.status = GameStatus::Over;
        world.restart();
        assert_eq!(world.status(), GameStatus::Started);
        assert_eq!(world.score(), 0);
        assert_eq!(world.frame(), 0);
        assert!(world.craft().is_some());
        assert!(world.assets.is_some());
    }

    #[test]
    fn test_restart_replays_spawn_sequence() {
        let mut world = World::default();
        world.start(asset_list()).unwrap();
        let assets = world.assets.clone().unwrap();
        let mut ids = SpriteIds::default();
        let mut spawn_run = |world: &mut World| -> Vec<(SpriteKind, Vec2, f32)> {
            (0..40u64)
                .map(|call| {
                    let s = world.spawner.spawn(call * 30, 360.0, &assets, &mut ids);
                    (s.kind, s.pos, s.speed)
                })
                .collect()
        };

        let first = spawn_run(&mut world);
        world.status = GameStatus::Over;
        world.restart();
        let second = spawn_run(&mut world);
        assert_eq!(first, second);
    }
}
