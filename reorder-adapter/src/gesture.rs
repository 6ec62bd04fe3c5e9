use reorder::Point;

use crate::Easing;

/// Thresholds and timings for reorder gestures.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// How long a pointer must be held still before a long-press fires (default: 500ms).
    pub long_press_ms: u64,
    /// Distance a pointer may wander before a pending long-press is abandoned (default: 8.0).
    pub touch_slop: f32,
    /// Duration of the drop animation after release (default: 150ms).
    pub settle_ms: u64,
    pub settle_easing: Easing,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_ms: 500,
            touch_slop: 8.0,
            settle_ms: 150,
            settle_easing: Easing::SmoothStep,
        }
    }
}

impl GestureConfig {
    pub fn with_long_press_ms(mut self, long_press_ms: u64) -> Self {
        self.long_press_ms = long_press_ms;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_settle(mut self, settle_ms: u64, settle_easing: Easing) -> Self {
        self.settle_ms = settle_ms;
        self.settle_easing = settle_easing;
        self
    }
}

/// A raw pointer event as delivered by the host platform.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEvent {
    Down { id: u64, pos: Point, now_ms: u64 },
    Move { id: u64, pos: Point, now_ms: u64 },
    Up { id: u64, pos: Point, now_ms: u64 },
    /// The platform took the gesture away (e.g. a parent started scrolling).
    Cancel { id: u64, now_ms: u64 },
}

impl PointerEvent {
    pub fn id(&self) -> u64 {
        match *self {
            Self::Down { id, .. }
            | Self::Move { id, .. }
            | Self::Up { id, .. }
            | Self::Cancel { id, .. } => id,
        }
    }

    pub fn now_ms(&self) -> u64 {
        match *self {
            Self::Down { now_ms, .. }
            | Self::Move { now_ms, .. }
            | Self::Up { now_ms, .. }
            | Self::Cancel { now_ms, .. } => now_ms,
        }
    }
}

/// What the recognizer made of the pointer stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// The pointer was held still long enough; `pos` is where it went down.
    LongPress { pos: Point },
    /// Vertical movement since the previous event, while a long-press is held.
    DragMove { delta: f32 },
    DragEnd,
    DragCancel,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    /// Down, waiting for the long-press delay.
    Pressed { id: u64, origin: Point, down_ms: u64 },
    /// Long-press fired; reporting deltas.
    Dragging { id: u64, last_y: f32 },
    /// Not a reorder gesture; swallow the rest of this pointer.
    Ignored { id: u64 },
}

/// Turns a single pointer's raw events into long-press drag gestures.
///
/// Only the first pointer down is tracked; events from other pointers are ignored until it is
/// released. Call [`LongPressRecognizer::tick`] periodically so a pointer held perfectly still
/// (which produces no move events) still fires.
#[derive(Clone, Debug, Default)]
pub struct LongPressRecognizer {
    config: GestureConfig,
    phase: Phase,
}

impl LongPressRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.phase, Phase::Pressed { .. })
    }

    /// Processes one raw event.
    pub fn process(&mut self, event: PointerEvent) -> Option<GestureEvent> {
        match (self.phase, event) {
            (Phase::Idle, PointerEvent::Down { id, pos, now_ms }) => {
                self.phase = Phase::Pressed {
                    id,
                    origin: pos,
                    down_ms: now_ms,
                };
                None
            }
            (Phase::Pressed { id, origin, down_ms }, PointerEvent::Move { id: ev, pos, now_ms })
                if id == ev =>
            {
                // A delay that elapsed before this move already made it a long-press.
                if self.long_press_due(down_ms, now_ms) {
                    return Some(self.fire(id, origin, pos.y));
                }
                if self.beyond_slop(origin, pos) {
                    adebug!(id, "LongPressRecognizer: moved beyond slop, not a reorder");
                    self.phase = Phase::Ignored { id };
                }
                None
            }
            (Phase::Dragging { id, last_y }, PointerEvent::Move { id: ev, pos, .. })
                if id == ev =>
            {
                let delta = pos.y - last_y;
                self.phase = Phase::Dragging { id, last_y: pos.y };
                (delta != 0.0 && delta.is_finite()).then_some(GestureEvent::DragMove { delta })
            }
            (Phase::Dragging { id, .. }, PointerEvent::Up { id: ev, .. }) if id == ev => {
                self.phase = Phase::Idle;
                Some(GestureEvent::DragEnd)
            }
            (Phase::Dragging { id, .. }, PointerEvent::Cancel { id: ev, .. }) if id == ev => {
                self.phase = Phase::Idle;
                Some(GestureEvent::DragCancel)
            }
            (
                Phase::Pressed { id, .. } | Phase::Ignored { id },
                PointerEvent::Up { id: ev, .. } | PointerEvent::Cancel { id: ev, .. },
            ) if id == ev => {
                self.phase = Phase::Idle;
                None
            }
            _ => None,
        }
    }

    /// Fires a pending long-press once the delay has elapsed.
    pub fn tick(&mut self, now_ms: u64) -> Option<GestureEvent> {
        let Phase::Pressed { id, origin, down_ms } = self.phase else {
            return None;
        };
        if !self.long_press_due(down_ms, now_ms) {
            return None;
        }
        Some(self.fire(id, origin, origin.y))
    }

    /// Abandons the current pointer: the rest of its events are swallowed.
    ///
    /// Adapters call this when a long-press lands outside any drag handle.
    pub fn ignore_current(&mut self) {
        self.phase = match self.phase {
            Phase::Pressed { id, .. } | Phase::Dragging { id, .. } | Phase::Ignored { id } => {
                Phase::Ignored { id }
            }
            Phase::Idle => Phase::Idle,
        };
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    fn fire(&mut self, id: u64, origin: Point, last_y: f32) -> GestureEvent {
        adebug!(id, x = origin.x, y = origin.y, "LongPressRecognizer: long press");
        self.phase = Phase::Dragging { id, last_y };
        GestureEvent::LongPress { pos: origin }
    }

    fn long_press_due(&self, down_ms: u64, now_ms: u64) -> bool {
        now_ms.saturating_sub(down_ms) >= self.config.long_press_ms
    }

    fn beyond_slop(&self, origin: Point, pos: Point) -> bool {
        let dx = pos.x - origin.x;
        let dy = pos.y - origin.y;
        let slop = self.config.touch_slop;
        dx * dx + dy * dy > slop * slop
    }
}
