//! Per-frame simulation step
//!
//! One call to [`World::advance`] confirms pending clicks, then runs the step
//! for the current status. A running frame is two-phase: the render phase
//! updates, draws and collides every sprite that was alive at its start
//! (sprites killed here are still drawn this frame), then the cleanup phase
//! drops everything destroyed so the next frame never sees it.

use glam::Vec2;

use super::collision::{self, Spawns};
use super::gesture::{Gesture, GestureClassifier, TouchEvent};
use super::spawner::is_spawn_frame;
use super::state::{GameStatus, World};
use crate::surface::DrawSurface;
use crate::ui;

impl World {
    /// Advance and draw one frame. Must not be called re-entrantly.
    pub fn advance<S: DrawSurface + ?Sized>(
        &mut self,
        gestures: &mut GestureClassifier,
        surface: &mut S,
        now_ms: u64,
    ) {
        if let Some(Gesture::SingleClick(pos)) = gestures.poll(now_ms) {
            self.on_single_click(pos);
        }

        match self.status {
            GameStatus::Started => self.step_started(surface),
            GameStatus::Paused => self.draw_paused(surface),
            GameStatus::Over => self.draw_over(surface),
            GameStatus::Destroyed => {}
        }
    }

    /// Feed a raw touch event. Moves the craft on drag; double click drops a bomb.
    pub fn on_touch(&mut self, gestures: &mut GestureClassifier, event: TouchEvent) {
        let Some(gesture) = gestures.on_touch(event) else {
            return;
        };
        if self.status != GameStatus::Started {
            return;
        }
        match gesture {
            Gesture::Move(pos) => {
                if let Some(craft) = self.craft.as_mut() {
                    craft.center_to(pos);
                }
            }
            Gesture::DoubleClick(_) => self.bomb(),
            Gesture::SingleClick(_) => {}
        }
    }

    /// Spend a bomb to destroy every enemy on screen
    pub fn bomb(&mut self) {
        if self.status != GameStatus::Started {
            return;
        }
        let (Some(craft), Some(assets)) = (self.craft.as_mut(), self.assets.as_ref()) else {
            return;
        };
        if !craft.take_bomb() {
            return;
        }

        let mut spawns = Spawns {
            assets,
            ids: &mut self.ids,
            pending: &mut self.pending,
        };
        let gained = collision::detonate_all_enemies(&mut self.sprites, &mut spawns);
        self.score += gained;
        log::debug!("Bomb detonated (+{}), {} left", gained, craft.bombs());
    }

    fn on_single_click(&mut self, pos: Vec2) {
        match self.status {
            GameStatus::Started => {
                let Some(assets) = &self.assets else {
                    return;
                };
                if ui::pause_button_rect(self.status, assets, self.settings.density).contains(pos) {
                    self.pause();
                }
            }
            GameStatus::Paused => {
                if self.dialog_button.is_some_and(|b| b.contains(pos)) {
                    self.resume();
                }
            }
            GameStatus::Over => {
                if self.dialog_button.is_some_and(|b| b.contains(pos)) {
                    log::info!("Restarting");
                    self.restart();
                }
            }
            GameStatus::Destroyed => {}
        }
    }

    fn step_started<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        let Some(assets) = self.assets.as_ref() else {
            return;
        };
        let canvas = Vec2::new(surface.width(), surface.height());
        let density = self.settings.density;

        ui::draw_score_and_bombs(
            surface,
            assets,
            &self.settings,
            self.status,
            self.score,
            self.craft.as_ref().filter(|c| !c.is_destroyed()).map_or(0, |c| c.bombs()),
        );

        if self.frame == 0 {
            if let Some(craft) = self.craft.as_mut() {
                let center = Vec2::new(canvas.x / 2.0, canvas.y - craft.size.y / 2.0);
                craft.center_to(center);
            }
        }

        self.sprites.append(&mut self.pending);
        collision::destroy_passed_bullets(&mut self.sprites, self.craft.as_ref());
        self.sprites.retain(|s| !s.is_destroyed());

        if is_spawn_frame(self.frame) {
            let sprite = self.spawner.spawn(self.frame, canvas.x, assets, &mut self.ids);
            self.pending.push(sprite);
        }
        self.frame += 1;

        // Render phase
        let mut spawns = Spawns {
            assets,
            ids: &mut self.ids,
            pending: &mut self.pending,
        };
        for i in 0..self.sprites.len() {
            let sprite = &mut self.sprites[i];
            if sprite.is_destroyed() {
                continue;
            }
            sprite.update(density);
            sprite.draw(surface);
            sprite.after_draw(canvas.y, density);
            if sprite.is_enemy() {
                self.score += collision::resolve_bullet_hits(&mut self.sprites, i, &mut spawns);
            }
        }

        if let Some(craft) = self.craft.as_mut() {
            craft.update(canvas, assets, spawns.ids, spawns.pending);
            craft.draw(surface);
            collision::resolve_craft(craft, &mut self.sprites, &mut spawns);
            craft.after_draw();
            if craft.is_destroyed() {
                self.status = GameStatus::Over;
                log::info!("Game over: score {} after {} frames", self.score, self.frame);
            }
        }

        // Cleanup phase
        self.sprites.retain(|s| !s.is_destroyed());
    }

    fn draw_paused<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        let Some(assets) = self.assets.as_ref() else {
            return;
        };
        ui::draw_score_and_bombs(
            surface,
            assets,
            &self.settings,
            self.status,
            self.score,
            self.craft.as_ref().filter(|c| !c.is_destroyed()).map_or(0, |c| c.bombs()),
        );

        for sprite in &self.sprites {
            sprite.draw(surface);
        }
        if let Some(craft) = &self.craft {
            craft.draw(surface);
        }

        self.dialog_button = Some(ui::draw_score_dialog(surface, &self.settings, self.score, "carry on"));
    }

    fn draw_over<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        self.dialog_button = Some(ui::draw_score_dialog(surface, &self.settings, self.score, "Restart"));
    }
}
