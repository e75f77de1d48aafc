//! A single draggable, resizable app window
//!
//! All state changes come from pointer events routed in by the owner. The
//! window never looks at its siblings; stacking is the shell's business.

use bitflags::bitflags;
use glam::Vec2;

use crate::apps::AppId;
use crate::config::DesktopConfig;
use crate::geometry::Rect;

bitflags! {
    /// Edges a resize grabs; corners combine two flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ResizeDirection: u8 {
        const N = 1 << 0;
        const S = 1 << 1;
        const E = 1 << 2;
        const W = 1 << 3;
        const NE = Self::N.bits() | Self::E.bits();
        const NW = Self::N.bits() | Self::W.bits();
        const SE = Self::S.bits() | Self::E.bits();
        const SW = Self::S.bits() | Self::W.bits();
    }
}

impl ResizeDirection {
    /// Parse a handle name such as `"n"`, `"se"` or `"w"`
    pub fn parse(handle: &str) -> Option<Self> {
        let mut direction = Self::empty();
        for c in handle.chars() {
            direction |= match c.to_ascii_lowercase() {
                'n' => Self::N,
                's' => Self::S,
                'e' => Self::E,
                'w' => Self::W,
                _ => return None,
            };
        }
        let opposed = direction.contains(Self::N | Self::S) || direction.contains(Self::E | Self::W);
        if direction.is_empty() || opposed {
            return None;
        }
        Some(direction)
    }
}

/// Pointer interaction in progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging {
        offset: Vec2, // Pointer position relative to the top-left corner
    },
    Resizing {
        direction: ResizeDirection,
    },
}

/// Tells the owner to take the window off the desktop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSignal {
    Close,
}

#[derive(Debug, Clone)]
pub struct AppWindow {
    pub app: AppId,
    pub title: String,
    pub rect: Rect,
    pub z: u32,
    pub minimized: bool,
    pub maximized: bool,
    saved: Option<Rect>, // Geometry before maximizing
    interaction: Interaction,
    min_size: Vec2,
    maximize_origin: Vec2,
    maximize_margin: Vec2,
}

impl AppWindow {
    pub fn new(app: AppId, pos: Vec2, size: Vec2, config: &DesktopConfig) -> Self {
        Self {
            app,
            title: app.title().to_string(),
            rect: Rect::new(pos, size.max(config.min_size)),
            z: 0,
            minimized: false,
            maximized: false,
            saved: None,
            interaction: Interaction::Idle,
            min_size: config.min_size,
            maximize_origin: config.maximize_origin,
            maximize_margin: config.maximize_margin,
        }
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.interaction, Interaction::Resizing { .. })
    }

    pub fn is_interacting(&self) -> bool {
        self.interaction != Interaction::Idle
    }

    /// Pointer pressed on the title bar
    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.interaction = Interaction::Dragging {
            offset: pointer - self.rect.pos,
        };
    }

    /// Pointer pressed on a resize handle
    pub fn begin_resize(&mut self, direction: ResizeDirection) {
        if direction.is_empty() {
            return;
        }
        self.interaction = Interaction::Resizing { direction };
    }

    /// Apply a pointer move to the active drag or resize; false when idle
    pub fn on_pointer_move(&mut self, pointer: Vec2) -> bool {
        match self.interaction {
            Interaction::Idle => false,
            Interaction::Dragging { offset } => {
                self.rect.pos = pointer - offset;
                true
            }
            Interaction::Resizing { direction } => {
                self.resize_to(direction, pointer);
                true
            }
        }
    }

    fn resize_to(&mut self, direction: ResizeDirection, pointer: Vec2) {
        let min = self.min_size;
        let rect = &mut self.rect;

        if direction.contains(ResizeDirection::E) {
            rect.size.x = (pointer.x - rect.pos.x).max(min.x);
        }
        if direction.contains(ResizeDirection::S) {
            rect.size.y = (pointer.y - rect.pos.y).max(min.y);
        }
        // Left and top edges move the position; the opposite edge stays put
        if direction.contains(ResizeDirection::W) {
            let right = rect.right();
            rect.size.x = (right - pointer.x).max(min.x);
            rect.pos.x = right - rect.size.x;
        }
        if direction.contains(ResizeDirection::N) {
            let bottom = rect.bottom();
            rect.size.y = (bottom - pointer.y).max(min.y);
            rect.pos.y = bottom - rect.size.y;
        }
    }

    /// Pointer released anywhere on the page
    pub fn end_interaction(&mut self) {
        self.interaction = Interaction::Idle;
    }

    /// Geometry a maximized window takes in `viewport`
    pub fn maximized_rect(&self, viewport: Vec2) -> Rect {
        Rect::new(
            self.maximize_origin,
            (viewport - self.maximize_margin).max(self.min_size),
        )
    }

    pub fn maximize(&mut self, viewport: Vec2) {
        if self.maximized {
            return;
        }
        self.saved = Some(self.rect);
        self.rect = self.maximized_rect(viewport);
        self.maximized = true;
        log::debug!("Maximized {}", self.app.id());
    }

    pub fn restore(&mut self) {
        if !self.maximized {
            return;
        }
        if let Some(saved) = self.saved.take() {
            self.rect = saved;
        }
        self.maximized = false;
        log::debug!("Restored {}", self.app.id());
    }

    pub fn toggle_maximize(&mut self, viewport: Vec2) {
        if self.maximized {
            self.restore();
        } else {
            self.maximize(viewport);
        }
    }

    /// Minimizing dismisses the window
    pub fn minimize(&mut self) -> WindowSignal {
        self.minimized = true;
        self.interaction = Interaction::Idle;
        WindowSignal::Close
    }

    pub fn close(&mut self) -> WindowSignal {
        self.interaction = Interaction::Idle;
        WindowSignal::Close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> AppWindow {
        AppWindow::new(
            AppId::About,
            Vec2::new(100.0, 100.0),
            Vec2::new(750.0, 625.0),
            &DesktopConfig::new(),
        )
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(ResizeDirection::parse("n"), Some(ResizeDirection::N));
        assert_eq!(ResizeDirection::parse("se"), Some(ResizeDirection::SE));
        assert_eq!(ResizeDirection::parse("NW"), Some(ResizeDirection::NW));
        assert_eq!(ResizeDirection::parse(""), None);
        assert_eq!(ResizeDirection::parse("ns"), None);
        assert_eq!(ResizeDirection::parse("x"), None);
    }

    #[test]
    fn test_drag_keeps_grab_offset() {
        let mut window = window();
        window.begin_drag(Vec2::new(130.0, 110.0));
        assert!(window.is_dragging());

        window.on_pointer_move(Vec2::new(300.0, 400.0));
        assert_eq!(window.rect.pos, Vec2::new(270.0, 390.0));
        assert_eq!(window.rect.size, Vec2::new(750.0, 625.0), "Drag never resizes");

        window.end_interaction();
        assert!(!window.on_pointer_move(Vec2::new(0.0, 0.0)));
        assert_eq!(window.rect.pos, Vec2::new(270.0, 390.0));
    }

    #[test]
    fn test_resize_east_south() {
        let mut window = window();
        window.begin_resize(ResizeDirection::SE);
        window.on_pointer_move(Vec2::new(700.0, 600.0));
        assert_eq!(window.rect.size, Vec2::new(600.0, 500.0));
        assert_eq!(window.rect.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut window = window();
        window.begin_resize(ResizeDirection::SE);
        window.on_pointer_move(Vec2::new(0.0, 0.0));
        assert_eq!(window.rect.size, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_resize_west_keeps_right_edge() {
        let mut window = window();
        let right = window.rect.right();
        window.begin_resize(ResizeDirection::W);

        window.on_pointer_move(Vec2::new(50.0, 0.0));
        assert_eq!(window.rect.pos.x, 50.0);
        assert_eq!(window.rect.right(), right);

        // Past the minimum the window stops shrinking and stays anchored
        window.on_pointer_move(Vec2::new(800.0, 0.0));
        assert_eq!(window.rect.size.x, 400.0);
        assert_eq!(window.rect.right(), right);
    }

    #[test]
    fn test_resize_north_keeps_bottom_edge() {
        let mut window = window();
        let bottom = window.rect.bottom();
        window.begin_resize(ResizeDirection::N);
        window.on_pointer_move(Vec2::new(0.0, 20.0));
        assert_eq!(window.rect.pos.y, 20.0);
        assert_eq!(window.rect.bottom(), bottom);
    }

    #[test]
    fn test_maximize_then_restore() {
        let mut window = window();
        let before = window.rect;

        window.maximize(Vec2::new(1440.0, 900.0));
        assert!(window.maximized);
        assert_eq!(window.rect.pos, Vec2::new(20.0, 50.0));
        assert_eq!(window.rect.size, Vec2::new(1400.0, 800.0));

        // Idempotent
        window.maximize(Vec2::new(1000.0, 700.0));
        assert_eq!(window.rect.size, Vec2::new(1400.0, 800.0));

        window.restore();
        assert!(!window.maximized);
        assert_eq!(window.rect, before);
        window.restore();
        assert_eq!(window.rect, before);
    }

    #[test]
    fn test_maximize_in_tiny_viewport_respects_minimum() {
        let mut window = window();
        window.maximize(Vec2::new(300.0, 200.0));
        assert_eq!(window.rect.size, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_minimize_and_close_signal_owner() {
        let mut window = window();
        window.begin_drag(Vec2::ZERO);
        assert_eq!(window.minimize(), WindowSignal::Close);
        assert!(window.minimized);
        assert!(!window.is_interacting());
        assert_eq!(window.close(), WindowSignal::Close);
    }
}
