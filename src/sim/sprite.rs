//! Sprites: every non-player object on screen
//!
//! One struct carries the shared state (position, size, speed, destroyed
//! flag, own frame counter); per-kind data lives in [`SpriteKind`]. A frame
//! drives each live sprite through `update` -> `draw` -> `after_draw`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::surface::{AssetSlot, AssetTable, DrawSurface};

/// Enemy plane tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyTier {
    Small,
    Middle,
    Big,
}

impl EnemyTier {
    /// Map an entry of the weighted spawn table to a tier
    pub fn from_table(entry: u8) -> Self {
        match entry {
            0 => EnemyTier::Small,
            1 => EnemyTier::Middle,
            _ => EnemyTier::Big,
        }
    }

    pub fn slot(self) -> AssetSlot {
        match self {
            EnemyTier::Small => AssetSlot::SmallEnemy,
            EnemyTier::Middle => AssetSlot::MiddleEnemy,
            EnemyTier::Big => AssetSlot::BigEnemy,
        }
    }

    /// Hit points on spawn
    pub fn power(self) -> i32 {
        match self {
            EnemyTier::Small => SMALL_ENEMY.0,
            EnemyTier::Middle => MIDDLE_ENEMY.0,
            EnemyTier::Big => BIG_ENEMY.0,
        }
    }

    /// Score awarded when destroyed
    pub fn value(self) -> u64 {
        match self {
            EnemyTier::Small => SMALL_ENEMY.1,
            EnemyTier::Middle => MIDDLE_ENEMY.1,
            EnemyTier::Big => BIG_ENEMY.1,
        }
    }
}

/// Collectible rewards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwardKind {
    /// +1 bomb
    Bomb,
    /// Switches the craft to double bullets
    Bullet,
}

impl AwardKind {
    pub fn slot(self) -> AssetSlot {
        match self {
            AwardKind::Bomb => AssetSlot::BombAward,
            AwardKind::Bullet => AssetSlot::BulletAward,
        }
    }
}

/// Reward flight path: fall, climb back off the top, then dive through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwardPhase {
    Falling,
    Climbing,
    Diving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletTier {
    /// Single-bullet mode
    Yellow,
    /// Double-bullet mode
    Blue,
}

impl BulletTier {
    pub fn slot(self) -> AssetSlot {
        match self {
            BulletTier::Yellow => AssetSlot::YellowBullet,
            BulletTier::Blue => AssetSlot::BlueBullet,
        }
    }
}

/// Per-kind sprite data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpriteKind {
    Enemy { tier: EnemyTier, power: i32 },
    Bullet { tier: BulletTier },
    Award { kind: AwardKind, phase: AwardPhase },
    /// Visual only; `cell_width` is one cell of the explosion sheet
    Explosion { cell_width: f32 },
}

/// Monotonic sprite id source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteIds {
    next: u32,
}

impl SpriteIds {
    pub fn next_id(&mut self) -> u32 {
        self.next += 1;
        self.next
    }
}

/// A simulated object owned by the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub id: u32,
    pub kind: SpriteKind,
    /// Host bitmap id
    pub asset: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical speed in pixels/frame before density scaling (negative = up)
    pub speed: f32,
    /// Frames this sprite has been drawn
    pub frame: u64,
    destroyed: bool,
}

impl Sprite {
    fn with_kind(id: u32, kind: SpriteKind, asset: u32, size: Vec2, speed: f32) -> Self {
        Self {
            id,
            kind,
            asset,
            pos: Vec2::ZERO,
            size,
            speed,
            frame: 0,
            destroyed: false,
        }
    }

    pub fn enemy(id: u32, tier: EnemyTier, assets: &AssetTable) -> Self {
        let info = assets.get(tier.slot());
        let kind = SpriteKind::Enemy {
            tier,
            power: tier.power(),
        };
        Self::with_kind(id, kind, info.id, info.size(), BASE_SPEED)
    }

    pub fn award(id: u32, kind: AwardKind, assets: &AssetTable) -> Self {
        let info = assets.get(kind.slot());
        let kind = SpriteKind::Award {
            kind,
            phase: AwardPhase::Falling,
        };
        Self::with_kind(id, kind, info.id, info.size(), BASE_SPEED)
    }

    /// Bullet horizontally centred on `center_x` with its bottom edge at `bottom_y`
    pub fn bullet(id: u32, tier: BulletTier, assets: &AssetTable, center_x: f32, bottom_y: f32) -> Self {
        let info = assets.get(tier.slot());
        let mut bullet = Self::with_kind(
            id,
            SpriteKind::Bullet { tier },
            info.id,
            info.size(),
            BULLET_SPEED,
        );
        bullet.pos = Vec2::new(center_x - info.width / 2.0, bottom_y - info.height);
        bullet
    }

    /// Explosion centred on `center`
    pub fn explosion(id: u32, assets: &AssetTable, center: Vec2) -> Self {
        let info = assets.get(AssetSlot::Explosion);
        let cell_width = info.width / EXPLOSION_CELLS as f32;
        let size = Vec2::new(cell_width, info.height);
        let mut explosion = Self::with_kind(
            id,
            SpriteKind::Explosion { cell_width },
            info.id,
            size,
            0.0,
        );
        explosion.center_to(center);
        explosion
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

    pub fn center_to(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, SpriteKind::Enemy { .. })
    }

    pub fn is_bullet(&self) -> bool {
        matches!(self.kind, SpriteKind::Bullet { .. })
    }

    pub fn award_kind(&self) -> Option<AwardKind> {
        match self.kind {
            SpriteKind::Award { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Remaining hit points, for enemies
    pub fn power(&self) -> Option<i32> {
        match self.kind {
            SpriteKind::Enemy { power, .. } => Some(power),
            _ => None,
        }
    }

    /// Score value, for enemies
    pub fn value(&self) -> Option<u64> {
        match self.kind {
            SpriteKind::Enemy { tier, .. } => Some(tier.value()),
            _ => None,
        }
    }

    /// Apply bullet damage to an enemy. Returns true if this hit killed it.
    pub fn take_hit(&mut self, damage: i32) -> bool {
        if self.destroyed {
            return false;
        }
        if let SpriteKind::Enemy { ref mut power, .. } = self.kind {
            *power -= damage;
            if *power <= 0 {
                self.destroyed = true;
                return true;
            }
        }
        false
    }

    /// Autonomous movement. Explosions stay put.
    pub fn update(&mut self, density: f32) {
        if self.destroyed {
            return;
        }
        if !matches!(self.kind, SpriteKind::Explosion { .. }) {
            self.pos.y += self.speed * density;
        }
    }

    /// Render at the current position without changing any state
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if self.destroyed {
            return;
        }
        match self.kind {
            SpriteKind::Explosion { cell_width } => {
                let cell = (self.frame / EXPLOSION_TICKS_PER_CELL as u64) as f32;
                let src = Rect::new(cell * cell_width, 0.0, (cell + 1.0) * cell_width, self.size.y);
                surface.draw_bitmap(self.asset, Some(src), self.pos);
            }
            _ => surface.draw_bitmap(self.asset, None, self.pos),
        }
    }

    /// Per-kind bounds checks and lifecycle after the sprite was drawn
    pub fn after_draw(&mut self, canvas_height: f32, density: f32) {
        self.frame += 1;
        if self.destroyed {
            return;
        }

        match self.kind {
            SpriteKind::Enemy { .. } => {
                if self.pos.y >= canvas_height {
                    self.destroyed = true;
                }
            }
            SpriteKind::Bullet { .. } => {
                if self.pos.y + self.size.y <= 0.0 {
                    self.destroyed = true;
                }
            }
            SpriteKind::Award { ref mut phase, .. } => {
                let bottom = self.pos.y + self.size.y;
                match *phase {
                    AwardPhase::Falling => {
                        if bottom >= canvas_height * REWARD_TURN_FRACTION {
                            self.speed = REWARD_CLIMB_SPEED;
                            *phase = AwardPhase::Climbing;
                        }
                    }
                    AwardPhase::Climbing => {
                        if bottom + self.speed * density <= 0.0 {
                            self.speed = REWARD_DIVE_SPEED;
                            *phase = AwardPhase::Diving;
                        }
                    }
                    AwardPhase::Diving => {
                        if self.pos.y >= canvas_height {
                            self.destroyed = true;
                        }
                    }
                }
            }
            SpriteKind::Explosion { .. } => {
                let lifetime = (EXPLOSION_CELLS * EXPLOSION_TICKS_PER_CELL) as u64;
                if self.frame >= lifetime {
                    self.destroyed = true;
                }
            }
        }
    }
}
