//! Browser bindings for the desktop shell
//!
//! The page renders windows and icons from JSON snapshots; every change
//! made here (including ones driven by document listeners) is pushed to
//! the `on_change` callback.

use std::cell::RefCell;
use std::rc::Rc;

use desktop_core::{
    AppId, Desktop, DesktopConfig, DesktopSnapshot, IconAction, IconId, OpenOutcome, OpenSource,
    ResizeDirection,
};
use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::audio::Sound;
use crate::error::{document, ClientError, ClientResult};
use crate::input;
use crate::listeners::PointerListeners;

struct Shared {
    desktop: Desktop,
    on_change: Option<js_sys::Function>,
}

#[wasm_bindgen]
pub struct DesktopClient {
    shared: Rc<RefCell<Shared>>,
    listeners: PointerListeners,
    click: Option<Sound>,
}

#[wasm_bindgen]
impl DesktopClient {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<DesktopClient, JsValue> {
        Ok(Self::create(Vec2::new(width, height))?)
    }

    /// Called with the snapshot JSON after every change
    pub fn set_on_change(&mut self, callback: js_sys::Function) {
        self.shared.borrow_mut().on_change = Some(callback);
    }

    pub fn snapshot(&self) -> Result<String, JsValue> {
        Ok(snapshot_json(&self.shared.borrow().desktop)?)
    }

    pub fn scene(&self) -> String {
        match self.shared.borrow().desktop.scene() {
            desktop_core::Scene::Landing => "landing".to_string(),
            desktop_core::Scene::Desktop => "desktop".to_string(),
        }
    }

    /// Click on the landing page
    pub fn enter(&mut self) -> bool {
        self.play_click();
        let result = self.shared.borrow_mut().desktop.enter();
        self.changed_if(result.success)
    }

    /// Beach icon or "Shut Down"
    pub fn return_to_landing(&mut self) -> bool {
        self.listeners.detach();
        let result = self.shared.borrow_mut().desktop.return_to_landing();
        self.changed_if(result.success)
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.shared
            .borrow_mut()
            .desktop
            .set_viewport(Vec2::new(width, height));
        notify(&self.shared);
    }

    /// Open `app` from `source` ("desktop", "dock" or "menu"); returns
    /// "added", "replaced" or "focused"
    pub fn open(&mut self, app: &str, source: &str) -> Result<String, JsValue> {
        let app = parse_app(app)?;
        let source = OpenSource::from_id(source)
            .ok_or_else(|| ClientError::UnknownSource(source.to_string()))?;
        self.play_click();
        let outcome = self.shared.borrow_mut().desktop.open(app, source);
        notify(&self.shared);
        Ok(match outcome {
            OpenOutcome::Added => "added",
            OpenOutcome::Replaced => "replaced",
            OpenOutcome::Focused => "focused",
        }
        .to_string())
    }

    pub fn close(&mut self, app: &str) -> Result<bool, JsValue> {
        let app = parse_app(app)?;
        self.play_click();
        let closed = self.shared.borrow_mut().desktop.close(app);
        Ok(self.changed_if(closed))
    }

    pub fn minimize(&mut self, app: &str) -> Result<bool, JsValue> {
        let app = parse_app(app)?;
        let closed = self.shared.borrow_mut().desktop.minimize(app);
        Ok(self.changed_if(closed))
    }

    pub fn toggle_maximize(&mut self, app: &str) -> Result<(), JsValue> {
        let app = parse_app(app)?;
        self.shared.borrow_mut().desktop.toggle_maximize(app);
        notify(&self.shared);
        Ok(())
    }

    pub fn focus(&mut self, app: &str) -> Result<(), JsValue> {
        let app = parse_app(app)?;
        self.shared.borrow_mut().desktop.focus(app);
        notify(&self.shared);
        Ok(())
    }

    /// Mouse down on a title bar at client point (`x`, `y`)
    pub fn begin_drag(&mut self, app: &str, x: f32, y: f32) -> Result<(), JsValue> {
        let app = parse_app(app)?;
        self.shared
            .borrow_mut()
            .desktop
            .begin_drag(app, Vec2::new(x, y));
        self.listen()
    }

    /// Mouse down on a resize handle ("n", "se", ...)
    pub fn begin_resize(&mut self, app: &str, handle: &str) -> Result<(), JsValue> {
        let app = parse_app(app)?;
        let direction = ResizeDirection::parse(handle)
            .ok_or_else(|| ClientError::UnknownHandle(handle.to_string()))?;
        self.shared.borrow_mut().desktop.begin_resize(app, direction);
        self.listen()
    }

    pub fn icon_pointer_down(&mut self, icon: &str, x: f32, y: f32) -> Result<(), JsValue> {
        let icon = parse_icon(icon)?;
        self.shared
            .borrow_mut()
            .desktop
            .icon_pointer_down(icon, Vec2::new(x, y));
        self.listen()
    }

    /// Click on a desktop icon. Returns "open" or "landing", or nothing when
    /// the click ended a drag.
    pub fn icon_click(&mut self, icon: &str) -> Result<Option<String>, JsValue> {
        let icon = parse_icon(icon)?;
        let action = self.shared.borrow_mut().desktop.icon_click(icon);
        let Some(action) = action else {
            return Ok(None);
        };
        self.play_click();
        if action == IconAction::ReturnToLanding {
            self.listeners.detach();
        }
        notify(&self.shared);
        Ok(Some(
            match action {
                IconAction::Open(_) => "open",
                IconAction::ReturnToLanding => "landing",
            }
            .to_string(),
        ))
    }

    pub fn is_interacting(&self) -> bool {
        self.shared.borrow().desktop.is_interacting()
    }

    /// Remove document listeners and drop the change callback
    pub fn destroy(&mut self) {
        self.listeners.detach();
        self.shared.borrow_mut().on_change = None;
    }
}

impl DesktopClient {
    fn create(viewport: Vec2) -> ClientResult<Self> {
        let shared = Rc::new(RefCell::new(Shared {
            desktop: Desktop::new(DesktopConfig::new()),
            on_change: None,
        }));
        shared.borrow_mut().desktop.set_viewport(viewport);

        let listeners = {
            let on_move = shared.clone();
            let on_up = shared.clone();
            PointerListeners::new(
                document()?,
                move |event| {
                    let moved = on_move
                        .borrow_mut()
                        .desktop
                        .pointer_move(input::client_point(event));
                    if moved {
                        notify(&on_move);
                    }
                },
                move |_event| {
                    on_up.borrow_mut().desktop.pointer_up();
                    notify(&on_up);
                },
            )
        };

        let click = match Sound::click() {
            Ok(sound) => Some(sound),
            Err(err) => {
                log::warn!("Sound unavailable: {}", err);
                None
            }
        };

        log::info!("Desktop ready ({}x{})", viewport.x, viewport.y);
        Ok(Self {
            shared,
            listeners,
            click,
        })
    }

    fn play_click(&self) {
        if let Some(sound) = &self.click {
            sound.play();
        }
    }

    /// Start following the pointer if a window or icon grabbed it
    fn listen(&mut self) -> Result<(), JsValue> {
        let interacting = self.shared.borrow().desktop.is_interacting();
        if interacting {
            self.listeners.attach()?;
        }
        notify(&self.shared);
        Ok(())
    }

    fn changed_if(&self, changed: bool) -> bool {
        if changed {
            notify(&self.shared);
        }
        changed
    }
}

fn parse_app(id: &str) -> ClientResult<AppId> {
    AppId::from_id(id).ok_or_else(|| ClientError::UnknownApp(id.to_string()))
}

fn parse_icon(id: &str) -> ClientResult<IconId> {
    IconId::from_id(id).ok_or_else(|| ClientError::UnknownIcon(id.to_string()))
}

fn snapshot_json(desktop: &Desktop) -> ClientResult<String> {
    Ok(serde_json::to_string(&DesktopSnapshot::capture(desktop))?)
}

/// Push the current snapshot to the page. The shared borrow is released
/// before the callback runs.
fn notify(shared: &Rc<RefCell<Shared>>) {
    let (json, callback) = {
        let state = shared.borrow();
        (snapshot_json(&state.desktop), state.on_change.clone())
    };
    let Some(callback) = callback else {
        return;
    };
    match json {
        Ok(json) => {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                log::warn!("on_change threw: {:?}", err);
            }
        }
        Err(err) => log::warn!("Snapshot failed: {}", err),
    }
}
