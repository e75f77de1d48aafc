/// Layout constants for the desktop shell
///
/// Pixel units, origin at the viewport's top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Windows
    pub const WINDOW_MIN_WIDTH: f32 = 400.0;
    pub const WINDOW_MIN_HEIGHT: f32 = 300.0;
    pub const WINDOW_DEFAULT_WIDTH: f32 = 750.0;
    pub const WINDOW_DEFAULT_HEIGHT: f32 = 625.0;
    pub const GAME_WINDOW_WIDTH: f32 = 800.0;
    pub const GAME_WINDOW_HEIGHT: f32 = 500.0;

    // Maximized geometry: origin and the space left around the window
    pub const MAXIMIZE_X: f32 = 20.0;
    pub const MAXIMIZE_Y: f32 = 50.0;
    pub const MAXIMIZE_MARGIN_X: f32 = 40.0;
    pub const MAXIMIZE_MARGIN_Y: f32 = 100.0;

    // Desktop icons, one column along the right edge
    pub const ICON_INSET: f32 = 150.0;
    pub const ICON_TOP: f32 = 50.0;
    pub const ICON_SPACING: f32 = 100.0;

    // Viewport assumed until the host reports one
    pub const VIEWPORT_WIDTH: f32 = 1200.0;
    pub const VIEWPORT_HEIGHT: f32 = 800.0;
}
