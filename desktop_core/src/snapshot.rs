use glam::Vec2;
use serde::Serialize;

use crate::apps::AppId;
use crate::geometry::Rect;
use crate::icons::DesktopIcon;
use crate::scene::Scene;
use crate::shell::Desktop;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSnapshot {
    pub app: AppId,
    pub title: String,
    pub rect: Rect,
    pub z: u32,
    pub maximized: bool,
    pub dragging: bool,
    pub resizing: bool,
}

/// Serializable view of the desktop, handed to the page after each change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesktopSnapshot {
    pub scene: Scene,
    pub viewport: Vec2,
    /// Bottom of the stack first
    pub windows: Vec<WindowSnapshot>,
    pub icons: Vec<DesktopIcon>,
    pub dragging_icon: Option<String>,
}

impl DesktopSnapshot {
    pub fn capture(desktop: &Desktop) -> Self {
        let mut windows: Vec<WindowSnapshot> = desktop
            .windows()
            .iter()
            .map(|w| WindowSnapshot {
                app: w.app,
                title: w.title.clone(),
                rect: w.rect,
                z: w.z,
                maximized: w.maximized,
                dragging: w.is_dragging(),
                resizing: w.is_resizing(),
            })
            .collect();
        windows.sort_by_key(|w| w.z);

        Self {
            scene: desktop.scene(),
            viewport: desktop.viewport(),
            windows,
            icons: desktop.icons().icons().to_vec(),
            dragging_icon: desktop.icons().dragging().map(|id| id.id().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::OpenSource;

    #[test]
    fn test_snapshot_orders_windows_by_stack() {
        let mut desktop = Desktop::default();
        desktop.enter();
        desktop.open(AppId::About, OpenSource::Dock);
        desktop.open(AppId::Skills, OpenSource::Dock);
        desktop.focus(AppId::About);

        let snapshot = DesktopSnapshot::capture(&desktop);
        assert_eq!(snapshot.scene, Scene::Desktop);
        let apps: Vec<AppId> = snapshot.windows.iter().map(|w| w.app).collect();
        assert_eq!(apps, vec![AppId::Skills, AppId::About]);
        assert_eq!(snapshot.icons.len(), 5);
    }

    #[test]
    fn test_snapshot_serializes_lowercase_ids() {
        let mut desktop = Desktop::default();
        desktop.enter();
        desktop.open(AppId::Game, OpenSource::Desktop);

        let json = serde_json::to_value(DesktopSnapshot::capture(&desktop)).unwrap();
        assert_eq!(json["scene"], "desktop");
        assert_eq!(json["windows"][0]["app"], "game");
        assert_eq!(json["windows"][0]["title"], "Super Pong");
        assert_eq!(json["icons"][0]["id"], "beach");
        assert_eq!(json["icons"][2]["label"], "My Projects");
    }
}
