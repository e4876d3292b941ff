//! Drawing capability supplied by the host
//!
//! The core never loads or decodes images. The host hands over an
//! [`AssetTable`] describing pre-loaded bitmaps (id + pixel size) and a
//! [`DrawSurface`] for each frame; the simulation addresses bitmaps by id.

pub mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::REQUIRED_ASSETS;
use crate::error::GameError;
use crate::sim::Rect;

/// Fixed meaning of each position in the asset list handed to `start()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetSlot {
    Craft,
    /// Horizontal sheet of explosion cells
    Explosion,
    YellowBullet,
    BlueBullet,
    SmallEnemy,
    MiddleEnemy,
    BigEnemy,
    BombAward,
    BulletAward,
    PauseIcon,
    ResumeIcon,
    BombIcon,
}

impl AssetSlot {
    pub const ALL: [AssetSlot; REQUIRED_ASSETS] = [
        AssetSlot::Craft,
        AssetSlot::Explosion,
        AssetSlot::YellowBullet,
        AssetSlot::BlueBullet,
        AssetSlot::SmallEnemy,
        AssetSlot::MiddleEnemy,
        AssetSlot::BigEnemy,
        AssetSlot::BombAward,
        AssetSlot::BulletAward,
        AssetSlot::PauseIcon,
        AssetSlot::ResumeIcon,
        AssetSlot::BombIcon,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A pre-loaded bitmap known to the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Host-side identifier passed back in draw calls
    pub id: u32,
    pub width: f32,
    pub height: f32,
}

impl AssetInfo {
    pub fn new(id: u32, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Validated set of assets, one per [`AssetSlot`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetTable {
    assets: Vec<AssetInfo>,
}

impl AssetTable {
    /// Validate the host's asset list. Extra trailing assets are ignored.
    pub fn new(assets: Vec<AssetInfo>) -> Result<Self, GameError> {
        if assets.len() < REQUIRED_ASSETS {
            return Err(GameError::TooFewAssets {
                supplied: assets.len(),
                required: REQUIRED_ASSETS,
            });
        }
        for slot in AssetSlot::ALL {
            let info = &assets[slot.index()];
            if !(info.width > 0.0 && info.height > 0.0) {
                return Err(GameError::EmptyAsset { slot });
            }
        }
        Ok(Self { assets })
    }

    #[inline]
    pub fn get(&self, slot: AssetSlot) -> AssetInfo {
        self.assets[slot.index()]
    }
}

/// Text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
}

/// Rectangle paint mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RectStyle {
    Fill { color: u32 },
    Stroke { color: u32, width: f32 },
}

/// Canvas the core draws one frame onto
pub trait DrawSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Draw a bitmap with its top-left corner at `pos`. `src` selects a
    /// sub-rectangle of the bitmap (sprite sheets); `None` draws it whole.
    fn draw_bitmap(&mut self, asset: u32, src: Option<Rect>, pos: Vec2);
    fn draw_rect(&mut self, rect: Rect, style: RectStyle);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: u32, width: f32);
    /// `pos.y` is the text baseline
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign);
}
