//! Touch gesture classification
//!
//! Raw down/move/up events become MOVE, DOUBLE_CLICK and (deferred)
//! SINGLE_CLICK gestures. A completed click is not reported straight away:
//! it waits `DOUBLE_CLICK_WINDOW_MS` for a second click that would turn the
//! pair into a double click. Confirmation is polled once per frame via
//! [`GestureClassifier::poll`]; there is no timer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DOUBLE_CLICK_WINDOW_MS, SINGLE_CLICK_MAX_MS};

/// Raw touch phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
}

/// Raw touch event with a monotonic timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub pos: Vec2,
    pub time_ms: u64,
}

impl TouchEvent {
    pub fn down(x: f32, y: f32, time_ms: u64) -> Self {
        Self {
            phase: TouchPhase::Down,
            pos: Vec2::new(x, y),
            time_ms,
        }
    }

    pub fn moved(x: f32, y: f32, time_ms: u64) -> Self {
        Self {
            phase: TouchPhase::Move,
            pos: Vec2::new(x, y),
            time_ms,
        }
    }

    pub fn up(x: f32, y: f32, time_ms: u64) -> Self {
        Self {
            phase: TouchPhase::Up,
            pos: Vec2::new(x, y),
            time_ms,
        }
    }
}

/// Classified gesture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    /// Drag; emitted once per move event after the click threshold
    Move(Vec2),
    SingleClick(Vec2),
    DoubleClick(Vec2),
}

/// Click confirmation state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ClickState {
    #[default]
    Idle,
    /// A click completed at `since_ms` and may still become a double click
    Pending { since_ms: u64, pos: Vec2 },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureClassifier {
    state: ClickState,
    down_ms: Option<u64>,
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ClickState {
        self.state
    }

    /// Feed one raw event. Never returns `SingleClick`; see [`Self::poll`].
    pub fn on_touch(&mut self, event: TouchEvent) -> Option<Gesture> {
        if let ClickState::Pending { ref mut pos, .. } = self.state {
            *pos = event.pos;
        }

        match event.phase {
            TouchPhase::Down => {
                self.down_ms = Some(event.time_ms);
                None
            }
            TouchPhase::Move => {
                let held = self
                    .down_ms
                    .map_or(u64::MAX, |down| event.time_ms.saturating_sub(down));
                (held > SINGLE_CLICK_MAX_MS).then_some(Gesture::Move(event.pos))
            }
            TouchPhase::Up => self.on_up(event),
        }
    }

    fn on_up(&mut self, event: TouchEvent) -> Option<Gesture> {
        let down = self.down_ms?;
        if event.time_ms.saturating_sub(down) > SINGLE_CLICK_MAX_MS {
            return None;
        }

        if let ClickState::Pending { since_ms, .. } = self.state {
            if event.time_ms.saturating_sub(since_ms) <= DOUBLE_CLICK_WINDOW_MS {
                self.reset();
                log::debug!("Double click at {:?}", event.pos);
                return Some(Gesture::DoubleClick(event.pos));
            }
        }

        self.state = ClickState::Pending {
            since_ms: event.time_ms,
            pos: event.pos,
        };
        None
    }

    /// Called once per frame: confirm a pending click whose window has closed
    pub fn poll(&mut self, now_ms: u64) -> Option<Gesture> {
        let ClickState::Pending { since_ms, pos } = self.state else {
            return None;
        };
        if now_ms.saturating_sub(since_ms) < DOUBLE_CLICK_WINDOW_MS {
            return None;
        }
        self.reset();
        log::debug!("Single click at {:?}", pos);
        Some(Gesture::SingleClick(pos))
    }

    fn reset(&mut self) {
        self.state = ClickState::Idle;
        self.down_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn click(g: &mut GestureClassifier, at_ms: u64) -> Option<Gesture> {
        g.on_touch(TouchEvent::down(10.0, 10.0, at_ms));
        g.on_touch(TouchEvent::up(10.0, 10.0, at_ms + 50))
    }

    #[test]
    fn test_two_quick_clicks_make_one_double_click() {
        let mut g = GestureClassifier::new();
        let mut gestures = Vec::new();

        gestures.extend(click(&mut g, 1000));
        for now in (1050..1200).step_by(16) {
            gestures.extend(g.poll(now));
        }
        // Second up 150ms after the first
        gestures.extend(click(&mut g, 1150));
        for now in (1200..2000).step_by(16) {
            gestures.extend(g.poll(now));
        }

        assert_eq!(gestures.len(), 1);
        assert!(matches!(gestures[0], Gesture::DoubleClick(_)));
        assert_eq!(g.state(), ClickState::Idle);
    }

    #[test]
    fn test_lone_click_confirmed_after_window() {
        let mut g = GestureClassifier::new();
        assert_eq!(click(&mut g, 1000), None);
        let up_ms = 1050;

        let mut confirmed_at = None;
        for now in (up_ms..up_ms + 1000).step_by(16) {
            if let Some(gesture) = g.poll(now) {
                assert_eq!(gesture, Gesture::SingleClick(Vec2::new(10.0, 10.0)));
                assert!(confirmed_at.is_none());
                confirmed_at = Some(now);
            }
        }
        let confirmed_at = confirmed_at.unwrap();
        assert!(confirmed_at >= up_ms + DOUBLE_CLICK_WINDOW_MS);
    }

    #[test]
    fn test_long_press_is_not_a_click() {
        let mut g = GestureClassifier::new();
        g.on_touch(TouchEvent::down(0.0, 0.0, 0));
        assert_eq!(g.on_touch(TouchEvent::up(0.0, 0.0, 201)), None);
        assert_eq!(g.poll(10_000), None);
    }

    #[test]
    fn test_drag_after_threshold() {
        let mut g = GestureClassifier::new();
        g.on_touch(TouchEvent::down(0.0, 0.0, 0));
        assert_eq!(g.on_touch(TouchEvent::moved(5.0, 5.0, 100)), None);
        assert_eq!(g.on_touch(TouchEvent::moved(6.0, 6.0, 200)), None);
        assert_eq!(
            g.on_touch(TouchEvent::moved(7.0, 7.0, 201)),
            Some(Gesture::Move(Vec2::new(7.0, 7.0)))
        );
        assert_eq!(
            g.on_touch(TouchEvent::moved(8.0, 9.0, 220)),
            Some(Gesture::Move(Vec2::new(8.0, 9.0)))
        );
    }

    #[test]
    fn test_confirmed_click_uses_latest_position() {
        let mut g = GestureClassifier::new();
        click(&mut g, 0);
        g.on_touch(TouchEvent::down(40.0, 60.0, 100));
        assert_eq!(g.poll(400), Some(Gesture::SingleClick(Vec2::new(40.0, 60.0))));
    }

    #[test]
    fn test_slow_second_click_starts_new_pending() {
        let mut g = GestureClassifier::new();
        click(&mut g, 0);
        // 400ms later, no poll in between: not a double click
        assert_eq!(click(&mut g, 400), None);
        assert!(matches!(g.state(), ClickState::Pending { since_ms: 450, .. }));
    }

    proptest! {
        #[test]
        fn prop_single_click_never_early(gap in 0u64..2000, press in 0u64..=200) {
            let mut g = GestureClassifier::new();
            g.on_touch(TouchEvent::down(1.0, 1.0, 5000));
            prop_assert_eq!(g.on_touch(TouchEvent::up(1.0, 1.0, 5000 + press)), None);
            let up_ms = 5000 + press;
            let result = g.poll(up_ms + gap);
            if gap < DOUBLE_CLICK_WINDOW_MS {
                prop_assert_eq!(result, None);
            } else {
                prop_assert!(matches!(result, Some(Gesture::SingleClick(_))));
            }
        }
    }
}
