use glam::Vec2;

use crate::params::Params;

/// Desktop shell configuration
#[derive(Debug, Clone)]
pub struct DesktopConfig {
    pub min_size: Vec2,
    pub default_size: Vec2,
    pub game_size: Vec2,
    pub maximize_origin: Vec2,
    /// Total horizontal and vertical space left free around a maximized window
    pub maximize_margin: Vec2,
    pub icon_inset: f32,
    pub icon_top: f32,
    pub icon_spacing: f32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            min_size: Vec2::new(Params::WINDOW_MIN_WIDTH, Params::WINDOW_MIN_HEIGHT),
            default_size: Vec2::new(Params::WINDOW_DEFAULT_WIDTH, Params::WINDOW_DEFAULT_HEIGHT),
            game_size: Vec2::new(Params::GAME_WINDOW_WIDTH, Params::GAME_WINDOW_HEIGHT),
            maximize_origin: Vec2::new(Params::MAXIMIZE_X, Params::MAXIMIZE_Y),
            maximize_margin: Vec2::new(Params::MAXIMIZE_MARGIN_X, Params::MAXIMIZE_MARGIN_Y),
            icon_inset: Params::ICON_INSET,
            icon_top: Params::ICON_TOP,
            icon_spacing: Params::ICON_SPACING,
        }
    }
}

impl DesktopConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_params() {
        let config = DesktopConfig::new();
        assert_eq!(config.min_size, Vec2::new(400.0, 300.0));
        assert_eq!(config.default_size, Vec2::new(750.0, 625.0));
        assert_eq!(config.maximize_origin, Vec2::new(20.0, 50.0));
    }
}
