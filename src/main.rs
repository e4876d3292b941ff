//! Space Patrol headless driver
//!
//! Runs a scripted session against a recording surface and prints a JSON
//! summary. Real hosts embed the library and supply their own surface.

#[cfg(not(target_arch = "wasm32"))]
mod driver {
    use serde::Serialize;

    use space_patrol::sim::{GameStatus, Session, TouchEvent};
    use space_patrol::surface::{AssetInfo, AssetSlot, DrawCommand, RecordingSurface};
    use space_patrol::Settings;

    const CANVAS_WIDTH: f32 = 360.0;
    const CANVAS_HEIGHT: f32 = 558.0;
    const FRAME_MS: u64 = 16;
    const MAX_FRAMES: u64 = 5000;

    #[derive(Debug, Serialize)]
    struct Summary {
        status: GameStatus,
        score: u64,
        frames: u64,
        bombs_left: u32,
        draw_commands: usize,
        bitmaps: usize,
    }

    fn demo_assets() -> Vec<AssetInfo> {
        AssetSlot::ALL
            .iter()
            .map(|&slot| {
                let (w, h) = match slot {
                    AssetSlot::Craft => (60.0, 40.0),
                    AssetSlot::Explosion => (700.0, 50.0),
                    AssetSlot::YellowBullet | AssetSlot::BlueBullet => (6.0, 14.0),
                    AssetSlot::SmallEnemy => (34.0, 24.0),
                    AssetSlot::MiddleEnemy => (46.0, 60.0),
                    AssetSlot::BigEnemy => (110.0, 164.0),
                    AssetSlot::BombAward | AssetSlot::BulletAward => (30.0, 48.0),
                    AssetSlot::PauseIcon | AssetSlot::ResumeIcon => (24.0, 24.0),
                    AssetSlot::BombIcon => (20.0, 30.0),
                };
                AssetInfo::new(slot.index() as u32, w, h)
            })
            .collect()
    }

    /// Touch script: sweep the craft left and right, dropping a bomb every
    /// few seconds with a quick double tap.
    fn script(frame: u64, now_ms: u64) -> Vec<TouchEvent> {
        let cycle = frame % 240;
        let y = CANVAS_HEIGHT - 60.0;
        match cycle {
            0 => vec![TouchEvent::down(CANVAS_WIDTH / 2.0, y, now_ms)],
            1..=119 => {
                let x = 40.0 + (CANVAS_WIDTH - 80.0) * cycle as f32 / 120.0;
                vec![TouchEvent::moved(x, y, now_ms)]
            }
            120..=199 => {
                let x = CANVAS_WIDTH - 40.0 - (CANVAS_WIDTH - 80.0) * (cycle - 120) as f32 / 80.0;
                vec![TouchEvent::moved(x, y, now_ms)]
            }
            200 => vec![TouchEvent::up(40.0, y, now_ms)],
            220 | 226 => vec![
                TouchEvent::down(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0, now_ms),
                TouchEvent::up(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0, now_ms + 30),
            ],
            _ => Vec::new(),
        }
    }

    pub fn run() {
        let settings = Settings::load();
        log::info!("Settings: {:?}", settings);

        let mut session = Session::new(settings);
        if let Err(e) = session.start(demo_assets()) {
            log::error!("Failed to start: {}", e);
            std::process::exit(1);
        }

        let mut surface = RecordingSurface::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        let mut draw_commands = 0;
        let mut bitmaps = 0;
        let mut frames = 0;
        while frames < MAX_FRAMES && session.status() == GameStatus::Started {
            let now_ms = frames * FRAME_MS;
            for event in script(frames, now_ms) {
                session.touch(event);
            }

            surface.clear();
            session.advance(&mut surface, now_ms);
            draw_commands += surface.commands.len();
            bitmaps += surface
                .commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::Bitmap { .. }))
                .count();
            frames += 1;
        }

        let summary = Summary {
            status: session.status(),
            score: session.score(),
            frames,
            bombs_left: session.world().bomb_count(),
            draw_commands,
            bitmaps,
        };
        log::info!("Session finished after {} frames with score {}", frames, summary.score);

        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize summary: {}", e),
        }
        session.destroy();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Space Patrol (headless) starting...");
    driver::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on wasm
}
