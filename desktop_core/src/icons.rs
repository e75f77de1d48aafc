use glam::Vec2;
use serde::Serialize;

use crate::apps::AppId;
use crate::config::DesktopConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconId {
    Beach,
    Gallery,
    Projects,
    Mail,
    Game,
}

impl IconId {
    /// Column order, top to bottom
    pub const ALL: [IconId; 5] = [
        IconId::Beach,
        IconId::Gallery,
        IconId::Projects,
        IconId::Mail,
        IconId::Game,
    ];

    pub fn id(self) -> &'static str {
        match self {
            IconId::Beach => "beach",
            IconId::Gallery => "gallery",
            IconId::Projects => "projects",
            IconId::Mail => "mail",
            IconId::Game => "game",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            IconId::Beach => "Beach",
            IconId::Gallery => "Gallery",
            IconId::Projects => "My Projects",
            IconId::Mail => "Mail",
            IconId::Game => "Pong Game",
        }
    }

    pub fn action(self) -> IconAction {
        match self {
            IconId::Beach => IconAction::ReturnToLanding,
            IconId::Gallery => IconAction::Open(AppId::Gallery),
            IconId::Projects => IconAction::Open(AppId::Projects),
            IconId::Mail => IconAction::Open(AppId::Contact),
            IconId::Game => IconAction::Open(AppId::Game),
        }
    }
}

/// What clicking an icon does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconAction {
    Open(AppId),
    ReturnToLanding,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesktopIcon {
    pub id: IconId,
    pub label: &'static str,
    pub pos: Vec2,
}

/// An icon drag in progress
#[derive(Debug, Clone, Copy, PartialEq)]
struct IconDrag {
    id: IconId,
    offset: Vec2,
}

/// The column of draggable desktop icons
#[derive(Debug, Clone)]
pub struct IconLayer {
    icons: Vec<DesktopIcon>,
    drag: Option<IconDrag>,
    moved: bool, // The last press turned into a drag
}

impl IconLayer {
    pub fn new(viewport: Vec2, config: &DesktopConfig) -> Self {
        let mut layer = Self {
            icons: IconId::ALL
                .into_iter()
                .map(|id| DesktopIcon {
                    id,
                    label: id.label(),
                    pos: Vec2::ZERO,
                })
                .collect(),
            drag: None,
            moved: false,
        };
        layer.layout(viewport, config);
        layer
    }

    /// Line the icons up along the right edge of the viewport
    pub fn layout(&mut self, viewport: Vec2, config: &DesktopConfig) {
        for (i, icon) in self.icons.iter_mut().enumerate() {
            icon.pos = Vec2::new(
                viewport.x - config.icon_inset,
                config.icon_top + i as f32 * config.icon_spacing,
            );
        }
    }

    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    pub fn get(&self, id: IconId) -> Option<&DesktopIcon> {
        self.icons.iter().find(|icon| icon.id == id)
    }

    pub fn dragging(&self) -> Option<IconId> {
        self.drag.map(|drag| drag.id)
    }

    pub fn pointer_down(&mut self, id: IconId, pointer: Vec2) {
        let Some(icon) = self.get(id) else {
            return;
        };
        self.drag = Some(IconDrag {
            id,
            offset: pointer - icon.pos,
        });
        self.moved = false;
    }

    /// Move the dragged icon; false when no icon is held
    pub fn pointer_move(&mut self, pointer: Vec2) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        if let Some(icon) = self.icons.iter_mut().find(|icon| icon.id == drag.id) {
            icon.pos = pointer - drag.offset;
            self.moved = true;
        }
        true
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// The click that ends a press; swallowed when the press became a drag
    pub fn click(&self, id: IconId) -> Option<IconAction> {
        if self.drag.is_some() || self.moved {
            return None;
        }
        Some(id.action())
    }
}
