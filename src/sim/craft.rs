//! The player's craft

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::sprite::{AwardKind, BulletTier, Sprite, SpriteIds};
use crate::consts::*;
use crate::surface::{AssetSlot, AssetTable, DrawSurface};

/// Player craft. At most one exists per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Craft {
    /// Host bitmap id
    pub asset: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    bombs: u32,
    /// Volleys left in double-bullet mode (0 = single mode)
    double_volleys: u32,
    /// Frames this craft has been advanced
    frame: u64,
    destroyed: bool,
}

impl Craft {
    pub fn new(assets: &AssetTable) -> Self {
        let info = assets.get(AssetSlot::Craft);
        Self {
            asset: info.id,
            pos: Vec2::ZERO,
            size: info.size(),
            bombs: 0,
            double_volleys: 0,
            frame: 0,
            destroyed: false,
        }
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[inline]
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn bombs(&self) -> u32 {
        self.bombs
    }

    pub fn is_double_bullet(&self) -> bool {
        self.double_volleys > 0
    }

    pub fn center_to(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    /// Keep the craft fully on the canvas
    pub fn clamp_to(&mut self, canvas: Vec2) {
        let max = (canvas - self.size).max(Vec2::ZERO);
        self.pos = self.pos.clamp(Vec2::ZERO, max);
    }

    /// Apply a collected reward
    pub fn collect(&mut self, award: AwardKind) {
        match award {
            AwardKind::Bomb => self.bombs += 1,
            AwardKind::Bullet => self.double_volleys = DOUBLE_BULLET_VOLLEYS,
        }
    }

    /// Spend one bomb. Returns false when there is nothing to spend.
    pub fn take_bomb(&mut self) -> bool {
        if self.destroyed || self.bombs == 0 {
            return false;
        }
        self.bombs -= 1;
        true
    }

    /// Clamp to the canvas and fire on the fire cadence. New bullets go to `pending`.
    pub fn update(
        &mut self,
        canvas: Vec2,
        assets: &AssetTable,
        ids: &mut SpriteIds,
        pending: &mut Vec<Sprite>,
    ) {
        if self.destroyed {
            return;
        }
        self.clamp_to(canvas);
        if self.frame % FIRE_INTERVAL_FRAMES == 0 {
            self.fire(assets, ids, pending);
        }
    }

    fn fire(&mut self, assets: &AssetTable, ids: &mut SpriteIds, pending: &mut Vec<Sprite>) {
        let center_x = self.pos.x + self.size.x / 2.0;
        let bottom_y = self.pos.y - BULLET_GAP;

        if self.double_volleys == 0 {
            pending.push(Sprite::bullet(
                ids.next_id(),
                BulletTier::Yellow,
                assets,
                center_x,
                bottom_y,
            ));
        } else {
            let offset = self.size.x / 4.0;
            for x in [center_x - offset, center_x + offset] {
                pending.push(Sprite::bullet(
                    ids.next_id(),
                    BulletTier::Blue,
                    assets,
                    x,
                    bottom_y,
                ));
            }
            self.double_volleys -= 1;
        }
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if !self.destroyed {
            surface.draw_bitmap(self.asset, None, self.pos);
        }
    }

    pub fn after_draw(&mut self) {
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sprite::tests::test_assets;

    fn advance(craft: &mut Craft, frames: usize, pending: &mut Vec<Sprite>) {
        let assets = test_assets();
        let mut ids = SpriteIds::default();
        for _ in 0..frames {
            craft.update(Vec2::new(360.0, 560.0), &assets, &mut ids, pending);
            craft.after_draw();
        }
    }

    #[test]
    fn test_fires_on_cadence() {
        let mut craft = Craft::new(&test_assets());
        craft.center_to(Vec2::new(180.0, 500.0));
        let mut pending = Vec::new();
        advance(&mut craft, 15, &mut pending);
        // frames 0, 7, 14
        assert_eq!(pending.len(), 3);
        let bullet = &pending[0];
        assert!(bullet.is_bullet());
        assert_eq!(bullet.pos.y + bullet.size.y, craft.pos.y - BULLET_GAP);
        assert_eq!(bullet.pos.x + bullet.size.x / 2.0, 180.0);
    }

    #[test]
    fn test_double_bullets_expire() {
        let mut craft = Craft::new(&test_assets());
        craft.collect(AwardKind::Bullet);
        assert!(craft.is_double_bullet());

        let mut pending = Vec::new();
        let frames = (DOUBLE_BULLET_VOLLEYS as u64 * FIRE_INTERVAL_FRAMES) as usize;
        advance(&mut craft, frames, &mut pending);
        assert_eq!(pending.len(), 2 * DOUBLE_BULLET_VOLLEYS as usize);
        assert!(!craft.is_double_bullet());

        pending.clear();
        advance(&mut craft, 1, &mut pending);
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn test_clamped_inside_canvas() {
        let mut craft = Craft::new(&test_assets());
        craft.center_to(Vec2::new(-100.0, 1000.0));
        craft.clamp_to(Vec2::new(360.0, 560.0));
        assert_eq!(craft.pos, Vec2::new(0.0, 520.0));
    }

    #[test]
    fn test_bombs() {
        let mut craft = Craft::new(&test_assets());
        assert!(!craft.take_bomb());
        craft.collect(AwardKind::Bomb);
        craft.collect(AwardKind::Bomb);
        assert_eq!(craft.bombs(), 2);
        assert!(craft.take_bomb());
        assert_eq!(craft.bombs(), 1);
    }
}
