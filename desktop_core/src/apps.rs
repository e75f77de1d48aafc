use glam::Vec2;
use serde::Serialize;

use crate::config::DesktopConfig;

/// Every app the desktop can open, one window each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    About,
    Skills,
    Projects,
    Contact,
    Gallery,
    Resume,
    Game,
}

impl AppId {
    pub const ALL: [AppId; 7] = [
        AppId::About,
        AppId::Skills,
        AppId::Projects,
        AppId::Contact,
        AppId::Gallery,
        AppId::Resume,
        AppId::Game,
    ];

    pub fn id(self) -> &'static str {
        match self {
            AppId::About => "about",
            AppId::Skills => "skills",
            AppId::Projects => "projects",
            AppId::Contact => "contact",
            AppId::Gallery => "gallery",
            AppId::Resume => "resume",
            AppId::Game => "game",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            AppId::About => "About Me",
            AppId::Skills => "My Skills",
            AppId::Projects => "My Projects",
            AppId::Contact => "Contact Me",
            AppId::Gallery => "Gallery",
            AppId::Resume => "Resume",
            AppId::Game => "Super Pong",
        }
    }

    pub fn initial_size(self, config: &DesktopConfig) -> Vec2 {
        match self {
            AppId::Game => config.game_size,
            _ => config.default_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip_for_every_app() {
        for app in AppId::ALL {
            assert_eq!(AppId::from_id(app.id()), Some(app));
        }
        assert_eq!(AppId::from_id("files"), None);
    }

    #[test]
    fn test_game_window_size() {
        let config = DesktopConfig::new();
        assert_eq!(AppId::Game.initial_size(&config), Vec2::new(800.0, 500.0));
        assert_eq!(AppId::About.initial_size(&config), Vec2::new(750.0, 625.0));
        assert_eq!(AppId::Game.title(), "Super Pong");
    }
}
