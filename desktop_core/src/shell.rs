//! The desktop shell: open windows, stacking order, icons and scene
//!
//! Stacking is an explicit `z` on each window, bumped by [`Desktop::focus`].

use glam::Vec2;

use crate::apps::AppId;
use crate::config::DesktopConfig;
use crate::geometry::Rect;
use crate::icons::{IconAction, IconId, IconLayer};
use crate::params::Params;
use crate::scene::{Scene, SceneAction, SceneFsm, TransitionResult};
use crate::window::{AppWindow, ResizeDirection, WindowSignal};

/// Where an open request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenSource {
    /// Desktop icon; replaces the open set
    Desktop,
    /// Dock; adds to the open set
    Dock,
    /// Menu bar; adds to the open set
    Menu,
}

impl OpenSource {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "desktop" => Some(OpenSource::Desktop),
            "dock" => Some(OpenSource::Dock),
            "menu" => Some(OpenSource::Menu),
            _ => None,
        }
    }
}

/// What an open request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Added,
    Replaced,
    Focused,
}

pub struct Desktop {
    config: DesktopConfig,
    viewport: Vec2,
    windows: Vec<AppWindow>,
    next_z: u32,
    icons: IconLayer,
    icons_placed: bool, // Laid out against a real viewport
    scene: SceneFsm,
}

impl Desktop {
    pub fn new(config: DesktopConfig) -> Self {
        let viewport = Vec2::new(Params::VIEWPORT_WIDTH, Params::VIEWPORT_HEIGHT);
        Self {
            icons: IconLayer::new(viewport, &config),
            config,
            viewport,
            windows: Vec::new(),
            next_z: 1,
            icons_placed: false,
            scene: SceneFsm::new(),
        }
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// The browser window changed size
    ///
    /// Icons are lined up against the first viewport only; later resizes
    /// leave them where they are, including where the user dragged them.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport.max(Vec2::ZERO);
        if !self.icons_placed {
            self.icons.layout(self.viewport, &self.config);
            self.icons_placed = true;
        }
    }

    // Scenes

    pub fn scene(&self) -> Scene {
        self.scene.state()
    }

    pub fn enter(&mut self) -> TransitionResult {
        self.scene.transition(SceneAction::Enter)
    }

    /// Back to the landing page; every window closes
    pub fn return_to_landing(&mut self) -> TransitionResult {
        let result = self.scene.transition(SceneAction::ReturnToLanding);
        if result.success {
            self.windows.clear();
            self.icons.pointer_up();
            log::info!("Returned to landing");
        }
        result
    }

    // Windows

    pub fn is_open(&self, app: AppId) -> bool {
        self.windows.iter().any(|w| w.app == app)
    }

    pub fn window(&self, app: AppId) -> Option<&AppWindow> {
        self.windows.iter().find(|w| w.app == app)
    }

    pub fn window_mut(&mut self, app: AppId) -> Option<&mut AppWindow> {
        self.windows.iter_mut().find(|w| w.app == app)
    }

    /// Open apps, bottom of the stack first
    pub fn open_apps(&self) -> Vec<AppId> {
        let mut windows: Vec<&AppWindow> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z);
        windows.into_iter().map(|w| w.app).collect()
    }

    pub fn windows(&self) -> &[AppWindow] {
        &self.windows
    }

    pub fn top_most(&self) -> Option<AppId> {
        self.windows.iter().max_by_key(|w| w.z).map(|w| w.app)
    }

    /// Open an app
    ///
    /// Contact always ends up as the only window unless it is already
    /// open. An app that is already open is brought to the front. Desktop
    /// icons replace the open set; the dock and menu add to it.
    pub fn open(&mut self, app: AppId, source: OpenSource) -> OpenOutcome {
        if self.is_open(app) {
            self.focus(app);
            return OpenOutcome::Focused;
        }

        let outcome = if app == AppId::Contact || source == OpenSource::Desktop {
            self.windows.clear();
            OpenOutcome::Replaced
        } else {
            OpenOutcome::Added
        };

        let size = app.initial_size(&self.config);
        let rect = Rect::centered(self.viewport, size);
        let mut window = AppWindow::new(app, rect.pos, size, &self.config);
        window.z = self.bump_z();
        self.windows.push(window);

        log::info!("Opened {} ({:?}, {:?})", app.id(), source, outcome);
        outcome
    }

    pub fn close(&mut self, app: AppId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.app != app);
        let closed = self.windows.len() != before;
        if closed {
            log::info!("Closed {}", app.id());
        }
        closed
    }

    pub fn minimize(&mut self, app: AppId) -> bool {
        match self.window_mut(app).map(|w| w.minimize()) {
            Some(WindowSignal::Close) => self.close(app),
            None => false,
        }
    }

    pub fn toggle_maximize(&mut self, app: AppId) {
        let viewport = self.viewport;
        if let Some(window) = self.window_mut(app) {
            window.toggle_maximize(viewport);
        }
    }

    /// Raise `app` above every other window
    pub fn focus(&mut self, app: AppId) {
        if self.top_most() == Some(app) {
            return;
        }
        let z = self.bump_z();
        if let Some(window) = self.window_mut(app) {
            window.z = z;
        }
    }

    fn bump_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    // Pointer routing

    pub fn begin_drag(&mut self, app: AppId, pointer: Vec2) {
        self.focus(app);
        if let Some(window) = self.window_mut(app) {
            window.begin_drag(pointer);
        }
    }

    pub fn begin_resize(&mut self, app: AppId, direction: ResizeDirection) {
        self.focus(app);
        if let Some(window) = self.window_mut(app) {
            window.begin_resize(direction);
        }
    }

    /// True while a window or an icon is following the pointer; the host
    /// listens for document-wide moves only then
    pub fn is_interacting(&self) -> bool {
        self.icons.dragging().is_some() || self.windows.iter().any(|w| w.is_interacting())
    }

    pub fn pointer_move(&mut self, pointer: Vec2) -> bool {
        if self.icons.pointer_move(pointer) {
            return true;
        }
        self.windows
            .iter_mut()
            .filter(|w| w.is_interacting())
            .fold(false, |moved, w| w.on_pointer_move(pointer) || moved)
    }

    pub fn pointer_up(&mut self) {
        self.icons.pointer_up();
        for window in &mut self.windows {
            window.end_interaction();
        }
    }

    // Icons

    pub fn icons(&self) -> &IconLayer {
        &self.icons
    }

    pub fn icon_pointer_down(&mut self, id: IconId, pointer: Vec2) {
        self.icons.pointer_down(id, pointer);
    }

    /// Click on a desktop icon; returns the action taken, if any
    pub fn icon_click(&mut self, id: IconId) -> Option<IconAction> {
        let action = self.icons.click(id)?;
        match action {
            IconAction::Open(app) => {
                self.open(app, OpenSource::Desktop);
            }
            IconAction::ReturnToLanding => {
                self.return_to_landing();
            }
        }
        Some(action)
    }
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> Desktop {
        let mut desktop = Desktop::default();
        desktop.enter();
        desktop
    }

    #[test]
    fn test_open_source_from_id() {
        assert_eq!(OpenSource::from_id("dock"), Some(OpenSource::Dock));
        assert_eq!(OpenSource::from_id("desktop"), Some(OpenSource::Desktop));
        assert_eq!(OpenSource::from_id("taskbar"), None);
    }

    #[test]
    fn test_window_opens_centered() {
        let mut desktop = desktop();
        desktop.open(AppId::About, OpenSource::Dock);
        let window = desktop.window(AppId::About).unwrap();
        assert_eq!(window.rect.pos, Vec2::new(225.0, 87.5));
        assert_eq!(window.title, "About Me");

        desktop.open(AppId::Game, OpenSource::Dock);
        let game = desktop.window(AppId::Game).unwrap();
        assert_eq!(game.rect.pos, Vec2::new(200.0, 150.0));
        assert_eq!(game.rect.size, Vec2::new(800.0, 500.0));
    }

    #[test]
    fn test_contact_replaces_everything() {
        let mut desktop = desktop();
        desktop.open(AppId::About, OpenSource::Dock);
        desktop.open(AppId::Projects, OpenSource::Dock);

        assert_eq!(desktop.open(AppId::Contact, OpenSource::Dock), OpenOutcome::Replaced);
        assert_eq!(desktop.open_apps(), vec![AppId::Contact]);

        assert_eq!(desktop.open(AppId::About, OpenSource::Dock), OpenOutcome::Added);
        assert_eq!(desktop.open_apps(), vec![AppId::Contact, AppId::About]);
    }

    #[test]
    fn test_open_contact_again_focuses() {
        let mut desktop = desktop();
        desktop.open(AppId::Contact, OpenSource::Menu);
        desktop.open(AppId::Skills, OpenSource::Dock);

        assert_eq!(desktop.open(AppId::Contact, OpenSource::Dock), OpenOutcome::Focused);
        assert_eq!(desktop.open_apps(), vec![AppId::Skills, AppId::Contact]);
    }

    #[test]
    fn test_desktop_source_replaces() {
        let mut desktop = desktop();
        desktop.open(AppId::About, OpenSource::Dock);
        desktop.open(AppId::Resume, OpenSource::Dock);
        assert_eq!(desktop.open(AppId::Game, OpenSource::Desktop), OpenOutcome::Replaced);
        assert_eq!(desktop.open_apps(), vec![AppId::Game]);
    }

    #[test]
    fn test_reopen_brings_to_front() {
        let mut desktop = desktop();
        desktop.open(AppId::About, OpenSource::Dock);
        desktop.open(AppId::Skills, OpenSource::Dock);
        assert_eq!(desktop.top_most(), Some(AppId::Skills));

        assert_eq!(desktop.open(AppId::About, OpenSource::Dock), OpenOutcome::Focused);
        assert_eq!(desktop.top_most(), Some(AppId::About));
        assert_eq!(desktop.windows().len(), 2);
    }

    #[test]
    fn test_close_and_minimize_remove_window() {
        let mut desktop = desktop();
        desktop.open(AppId::About, OpenSource::Dock);
        desktop.open(AppId::Skills, OpenSource::Dock);

        assert!(desktop.close(AppId::About));
        assert!(!desktop.close(AppId::About));
        assert!(desktop.minimize(AppId::Skills));
        assert!(desktop.open_apps().is_empty());
    }

    #[test]
    fn test_drag_focuses_and_routes_pointer() {
        let mut desktop = desktop();
        desktop.open(AppId::About, OpenSource::Dock);
        desktop.open(AppId::Skills, OpenSource::Dock);

        desktop.begin_drag(AppId::About, Vec2::new(235.0, 97.5));
        assert_eq!(desktop.top_most(), Some(AppId::About));
        assert!(desktop.is_interacting());

        assert!(desktop.pointer_move(Vec2::new(60.0, 60.0)));
        assert_eq!(desktop.window(AppId::About).unwrap().rect.pos, Vec2::new(50.0, 50.0));
        assert_eq!(
            desktop.window(AppId::Skills).unwrap().rect.pos,
            Vec2::new(225.0, 87.5),
            "Other windows untouched"
        );

        desktop.pointer_up();
        assert!(!desktop.is_interacting());
        assert!(!desktop.pointer_move(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_resize_routed() {
        let mut desktop = desktop();
        desktop.open(AppId::About, OpenSource::Dock);
        desktop.begin_resize(AppId::About, ResizeDirection::E);
        desktop.pointer_move(Vec2::new(0.0, 0.0));
        desktop.pointer_up();
        assert_eq!(desktop.window(AppId::About).unwrap().rect.size.x, 400.0);
    }

    #[test]
    fn test_resize_keeps_dragged_icons() {
        let mut desktop = desktop();
        desktop.set_viewport(Vec2::new(1200.0, 800.0));
        desktop.icon_pointer_down(IconId::Gallery, Vec2::new(1060.0, 160.0));
        desktop.pointer_move(Vec2::new(310.0, 310.0));
        desktop.pointer_up();
        assert_eq!(desktop.icons().get(IconId::Gallery).unwrap().pos, Vec2::new(300.0, 300.0));

        desktop.set_viewport(Vec2::new(1210.0, 800.0));
        assert_eq!(desktop.icons().get(IconId::Gallery).unwrap().pos, Vec2::new(300.0, 300.0));
        assert_eq!(desktop.icons().get(IconId::Beach).unwrap().pos, Vec2::new(1050.0, 50.0));
        assert_eq!(desktop.viewport(), Vec2::new(1210.0, 800.0));
    }

    #[test]
    fn test_maximize_uses_viewport() {
        let mut desktop = desktop();
        desktop.set_viewport(Vec2::new(1440.0, 900.0));
        desktop.open(AppId::Gallery, OpenSource::Dock);
        desktop.toggle_maximize(AppId::Gallery);
        let window = desktop.window(AppId::Gallery).unwrap();
        assert!(window.maximized);
        assert_eq!(window.rect.size, Vec2::new(1400.0, 800.0));
    }

    #[test]
    fn test_icon_click_opens_and_replaces() {
        let mut desktop = desktop();
        desktop.open(AppId::About, OpenSource::Dock);

        desktop.icon_pointer_down(IconId::Game, Vec2::new(1060.0, 460.0));
        desktop.pointer_up();
        assert_eq!(
            desktop.icon_click(IconId::Game),
            Some(IconAction::Open(AppId::Game))
        );
        assert_eq!(desktop.open_apps(), vec![AppId::Game]);
    }

    #[test]
    fn test_icon_drag_suppresses_click() {
        let mut desktop = desktop();
        desktop.icon_pointer_down(IconId::Mail, Vec2::new(1060.0, 360.0));
        assert!(desktop.is_interacting());
        desktop.pointer_move(Vec2::new(700.0, 500.0));
        desktop.pointer_up();

        assert_eq!(desktop.icon_click(IconId::Mail), None);
        assert!(desktop.open_apps().is_empty());
    }

    #[test]
    fn test_beach_icon_returns_to_landing() {
        let mut desktop = desktop();
        desktop.open(AppId::About, OpenSource::Dock);
        desktop.icon_pointer_down(IconId::Beach, Vec2::new(1060.0, 60.0));
        desktop.pointer_up();

        assert_eq!(
            desktop.icon_click(IconId::Beach),
            Some(IconAction::ReturnToLanding)
        );
        assert_eq!(desktop.scene(), Scene::Landing);
        assert!(desktop.windows().is_empty());
    }
}
