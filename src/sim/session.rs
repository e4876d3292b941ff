//! Host-facing game session
//!
//! Pairs the [`World`] with its gesture classifier so a host only deals with
//! lifecycle commands, raw touch events and one `advance` per display refresh.

use super::gesture::{GestureClassifier, TouchEvent};
use super::state::{GameStatus, World};
use crate::error::GameError;
use crate::settings::Settings;
use crate::surface::{AssetInfo, DrawSurface};

#[derive(Debug, Clone, Default)]
pub struct Session {
    world: World,
    gestures: GestureClassifier,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            world: World::new(settings),
            gestures: GestureClassifier::new(),
        }
    }

    /// Start (or fully restart) with the host's assets
    pub fn start(&mut self, assets: Vec<AssetInfo>) -> Result<(), GameError> {
        self.gestures = GestureClassifier::new();
        self.world.start(assets)
    }

    pub fn pause(&mut self) {
        self.world.pause();
    }

    pub fn destroy(&mut self) {
        self.world.destroy();
        self.gestures = GestureClassifier::new();
    }

    pub fn touch(&mut self, event: TouchEvent) {
        self.world.on_touch(&mut self.gestures, event);
    }

    /// Advance and draw one frame at host time `now_ms`
    pub fn advance<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, now_ms: u64) {
        self.world.advance(&mut self.gestures, surface, now_ms);
    }

    pub fn status(&self) -> GameStatus {
        self.world.status()
    }

    pub fn score(&self) -> u64 {
        self.world.score()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn gestures(&self) -> &GestureClassifier {
        &self.gestures
    }
}
