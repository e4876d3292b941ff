//! HUD and dialog layout
//!
//! Only layout and draw calls live here; the frame loop decides when each
//! piece is shown and what a click on a button does.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{GameStatus, Rect};
use crate::surface::{AssetSlot, AssetTable, DrawSurface, RectStyle, TextAlign};

/// Dialog layout is proportional to this reference canvas
const REF_WIDTH: f32 = 360.0;
const REF_HEIGHT: f32 = 558.0;

const DIALOG_FILL: u32 = 0xFFD7DDDE;
const DIALOG_STROKE: u32 = 0xFF515151;

/// Icon in the top-left corner: pause while running, resume otherwise
fn pause_icon(status: GameStatus) -> AssetSlot {
    if status == GameStatus::Started {
        AssetSlot::PauseIcon
    } else {
        AssetSlot::ResumeIcon
    }
}

/// Hit region of the pause/resume icon
pub fn pause_button_rect(status: GameStatus, assets: &AssetTable, density: f32) -> Rect {
    let icon = assets.get(pause_icon(status));
    Rect::from_pos_size(Vec2::splat(15.0 * density), icon.size())
}

/// Score next to the pause icon, bomb counter bottom-left (only when `bombs > 0`)
pub fn draw_score_and_bombs<S: DrawSurface + ?Sized>(
    surface: &mut S,
    assets: &AssetTable,
    settings: &Settings,
    status: GameStatus,
    score: u64,
    bombs: u32,
) {
    let density = settings.density;
    let font_size = settings.scaled_font_size();

    let icon = assets.get(pause_icon(status));
    let pause = pause_button_rect(status, assets, density);
    surface.draw_bitmap(icon.id, None, Vec2::new(pause.left, pause.top));

    let score_pos = Vec2::new(
        pause.left + pause.width() + 20.0 * density,
        font_size + pause.top + pause.height() / 2.0 - font_size / 2.0,
    );
    surface.draw_text(&score.to_string(), score_pos, font_size, TextAlign::Left);

    if bombs > 0 {
        let bomb = assets.get(AssetSlot::BombIcon);
        let bomb_top = surface.height() - bomb.height;
        surface.draw_bitmap(bomb.id, None, Vec2::new(0.0, bomb_top));
        let count_pos = Vec2::new(
            bomb.width + 10.0 * density,
            font_size + bomb_top + bomb.height / 2.0 - font_size / 2.0,
        );
        surface.draw_text(&format!("X {bombs}"), count_pos, font_size, TextAlign::Left);
    }
}

/// Draw the score dialog with a single button labelled `label`.
///
/// Returns the button's hit region in canvas coordinates.
pub fn draw_score_dialog<S: DrawSurface + ?Sized>(
    surface: &mut S,
    settings: &Settings,
    score: u64,
    label: &str,
) -> Rect {
    let cw = surface.width();
    let ch = surface.height();
    let font_size = settings.scaled_dialog_font_size();
    let border = settings.border_size * settings.density;

    let w1 = (20.0 / REF_WIDTH * cw).floor();
    let w2 = cw - 2.0 * w1;
    let button_width = (140.0 / REF_WIDTH * cw).floor();

    let h1 = (150.0 / REF_HEIGHT * ch).floor();
    let h2 = (60.0 / REF_HEIGHT * ch).floor();
    let h3 = (124.0 / REF_HEIGHT * ch).floor();
    let h4 = (76.0 / REF_HEIGHT * ch).floor();
    let button_height = (42.0 / REF_HEIGHT * ch).floor();

    let panel = Rect::new(w1, h1, w1 + w2, ch - h1);
    surface.draw_rect(panel, RectStyle::Fill { color: DIALOG_FILL });
    surface.draw_rect(
        panel,
        RectStyle::Stroke {
            color: DIALOG_STROKE,
            width: border,
        },
    );

    let center_x = w1 + w2 / 2.0;
    let baseline = |top: f32, height: f32| top + (height - font_size) / 2.0 + font_size;

    surface.draw_text("Score", Vec2::new(center_x, baseline(h1, h2)), font_size, TextAlign::Center);

    let score_top = h1 + h2;
    surface.draw_line(Vec2::new(w1, score_top), Vec2::new(w1 + w2, score_top), DIALOG_STROKE, border);
    surface.draw_text(
        &score.to_string(),
        Vec2::new(center_x, baseline(score_top, h3)),
        font_size,
        TextAlign::Center,
    );

    let footer_top = score_top + h3;
    surface.draw_line(Vec2::new(w1, footer_top), Vec2::new(w1 + w2, footer_top), DIALOG_STROKE, border);

    let button_left = ((w2 - button_width) / 2.0).floor();
    let button_top = ((h4 - button_height) / 2.0).floor();
    let button = Rect::new(
        w1 + button_left,
        footer_top + button_top,
        w1 + button_left + button_width,
        footer_top + button_top + button_height,
    );
    surface.draw_rect(
        button,
        RectStyle::Stroke {
            color: DIALOG_STROKE,
            width: border,
        },
    );
    surface.draw_text(
        label,
        Vec2::new(center_x, baseline(button.top, button.height())),
        font_size,
        TextAlign::Center,
    );

    button
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sprite::tests::test_assets;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn test_dialog_button_on_reference_canvas() {
        let mut surface = RecordingSurface::new(360.0, 558.0);
        let button = draw_score_dialog(&mut surface, &Settings::default(), 1234, "Restart");
        assert_eq!(button, Rect::new(110.0, 351.0, 250.0, 393.0));
        let texts: Vec<&str> = surface.texts().collect();
        assert_eq!(texts, vec!["Score", "1234", "Restart"]);
    }

    #[test]
    fn test_dialog_scales_stroke_and_font_with_density() {
        let settings = Settings {
            density: 2.0,
            ..Settings::default()
        };
        let mut surface = RecordingSurface::new(720.0, 1116.0);
        draw_score_dialog(&mut surface, &settings, 7, "carry on");

        let lines: Vec<(u32, f32)> = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { color, width, .. } => Some((*color, *width)),
                _ => None,
            })
            .collect();
        assert_eq!(lines, vec![(DIALOG_STROKE, 4.0), (DIALOG_STROKE, 4.0)]);
        assert!(surface.commands.iter().all(|c| match c {
            DrawCommand::Text { size, .. } => *size == 40.0,
            _ => true,
        }));
    }

    #[test]
    fn test_score_sits_right_of_pause_icon() {
        let assets = test_assets();
        let mut surface = RecordingSurface::new(360.0, 558.0);
        draw_score_and_bombs(&mut surface, &assets, &Settings::default(), GameStatus::Started, 42, 0);
        let score = surface.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, pos, size, .. } if text == "42" => Some((*pos, *size)),
            _ => None,
        });
        // Icon is 20x20 at (15, 15); 12px font centred on it
        assert_eq!(score, Some((Vec2::new(55.0, 31.0), 12.0)));
    }

    #[test]
    fn test_bomb_counter_hidden_without_bombs() {
        let assets = test_assets();
        let settings = Settings::default();
        let mut surface = RecordingSurface::new(360.0, 558.0);
        draw_score_and_bombs(&mut surface, &assets, &settings, GameStatus::Started, 0, 0);
        assert_eq!(surface.bitmap_count(assets.get(AssetSlot::BombIcon).id), 0);

        surface.clear();
        draw_score_and_bombs(&mut surface, &assets, &settings, GameStatus::Started, 0, 2);
        assert_eq!(surface.bitmap_count(assets.get(AssetSlot::BombIcon).id), 1);
        assert!(surface.texts().any(|t| t == "X 2"));
    }

    #[test]
    fn test_pause_icon_follows_status() {
        let assets = test_assets();
        let settings = Settings::default();
        let mut surface = RecordingSurface::new(360.0, 558.0);
        draw_score_and_bombs(&mut surface, &assets, &settings, GameStatus::Paused, 0, 0);
        assert_eq!(surface.bitmap_count(assets.get(AssetSlot::ResumeIcon).id), 1);
        assert_eq!(surface.bitmap_count(assets.get(AssetSlot::PauseIcon).id), 0);

        let rect = pause_button_rect(GameStatus::Started, &assets, 2.0);
        assert_eq!(rect, Rect::new(30.0, 30.0, 50.0, 50.0));
    }
}
