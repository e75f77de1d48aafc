//! Browser host for the Pong simulation
//!
//! Owns the game, the renderer and the animation-frame loop. The loop
//! reschedules itself only while the game is running; `destroy` (or
//! dropping the client) cancels the pending frame and removes listeners.

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, Events, Params, PongGame};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::audio::Sound;
use crate::error::{window, ClientResult};
use crate::input;
use crate::renderer::Renderer;

/// dt used for the first frame after (re)starting
const FIRST_FRAME_DT: f32 = 1.0 / 60.0;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct PongLoop {
    game: PongGame,
    renderer: Renderer,
    canvas: HtmlCanvasElement,
    last_time: Option<f64>,
    frame_id: Option<i32>,
    hit_sound: Option<Sound>,
}

impl PongLoop {
    /// One animation frame: advance by wall-clock dt and redraw
    fn advance(&mut self, time: f64) {
        let dt = match self.last_time {
            Some(last) => ((time - last) / 1000.0) as f32,
            None => FIRST_FRAME_DT,
        };
        self.last_time = Some(time);

        let events = self.game.tick(dt).clone();
        self.react(&events);
        self.render();
    }

    fn react(&self, events: &Events) {
        if let Some(side) = events.ball_hit_paddle {
            log::debug!("Paddle hit by {:?}", side);
            if let Some(sound) = &self.hit_sound {
                sound.play();
            }
        }
        if let Some(side) = events.scored {
            let score = self.game.score();
            log::debug!("{:?} scored ({}-{})", side, score.player, score.computer);
        }
        if let Some(kind) = events.power_up_collected {
            log::debug!("Power-up collected: {:?}", kind);
        }
    }

    fn render(&mut self) {
        let frame = self.game.frame();
        if let Err(err) = self.renderer.draw(&frame) {
            log::warn!("Frame skipped: {}", err);
        }
    }
}

#[wasm_bindgen]
pub struct PongClient {
    inner: Rc<RefCell<PongLoop>>,
    frame_cb: FrameCallback,
    pointer_cb: Option<Closure<dyn FnMut(MouseEvent)>>,
    touch_cb: Option<Closure<dyn FnMut(TouchEvent)>>,
}

/// Create a Pong client drawing into `canvas`. The field takes the canvas'
/// CSS size; the game stays idle until `start` is called.
#[wasm_bindgen]
pub async fn create_pong(canvas: HtmlCanvasElement) -> Result<PongClient, JsValue> {
    Ok(PongClient::new(canvas).await?)
}

impl PongClient {
    async fn new(canvas: HtmlCanvasElement) -> ClientResult<Self> {
        let field = css_size(&canvas);
        size_backing_store(&canvas, field)?;

        let renderer = Renderer::new(canvas.clone(), (field.x, field.y)).await?;
        let seed = js_sys::Date::now() as u64;
        let mut game = PongGame::new(Config::new(), seed);
        game.resize(field.x, field.y);
        log::info!("Pong initialized with seed: {}", seed);

        let hit_sound = match Sound::click() {
            Ok(sound) => Some(sound),
            Err(err) => {
                log::warn!("Sound unavailable: {}", err);
                None
            }
        };

        let inner = Rc::new(RefCell::new(PongLoop {
            game,
            renderer,
            canvas: canvas.clone(),
            last_time: None,
            frame_id: None,
            hit_sound,
        }));

        let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
        {
            let inner = inner.clone();
            let reschedule = frame_cb.clone();
            *frame_cb.borrow_mut() = Some(Closure::new(move |time: f64| {
                let running = {
                    let mut state = inner.borrow_mut();
                    state.frame_id = None;
                    state.advance(time);
                    state.game.is_running()
                };
                if running {
                    if let Err(err) = request_frame(&inner, &reschedule) {
                        log::warn!("Could not schedule frame: {}", err);
                    }
                }
            }));
        }

        let pointer_cb = {
            let inner = inner.clone();
            let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let mut state = inner.borrow_mut();
                let field = Vec2::new(state.game.field.width, state.game.field.height);
                let point = input::field_point(&event, &state.canvas, field);
                state.game.pointer_move(point.y);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure
        };

        // First finger steers the paddle; the page must not scroll under it
        let touch_cb = {
            let inner = inner.clone();
            let closure = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let Some(touch) = event.touches().get(0) else {
                    return;
                };
                let mut state = inner.borrow_mut();
                let field = Vec2::new(state.game.field.width, state.game.field.height);
                let client = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                let point = input::client_to_field(client, &state.canvas, field);
                state.game.pointer_move(point.y);
            });
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure
        };

        inner.borrow_mut().render();

        Ok(Self {
            inner,
            frame_cb,
            pointer_cb: Some(pointer_cb),
            touch_cb: Some(touch_cb),
        })
    }

    fn teardown(&mut self) {
        let frame_id = self.inner.borrow_mut().frame_id.take();
        if let (Some(id), Some(win)) = (frame_id, web_sys::window()) {
            let _ = win.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself
        self.frame_cb.borrow_mut().take();

        if let Some(closure) = self.pointer_cb.take() {
            let state = self.inner.borrow();
            let _ = state
                .canvas
                .remove_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        }
        if let Some(closure) = self.touch_cb.take() {
            let state = self.inner.borrow();
            let _ = state
                .canvas
                .remove_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        }
    }
}

#[wasm_bindgen]
impl PongClient {
    /// Leave the start screen. Returns false if already running.
    pub fn start(&mut self) -> Result<bool, JsValue> {
        let result = {
            let mut state = self.inner.borrow_mut();
            let result = state.game.start();
            if result.success {
                state.last_time = None;
            }
            result
        };
        if !result.success {
            return Ok(false);
        }
        log::info!("Pong: {:?} -> {:?}", result.from_state, result.to_state);
        if self.inner.borrow().frame_id.is_none() {
            request_frame(&self.inner, &self.frame_cb)?;
        }
        Ok(true)
    }

    /// Host container resized to `width` x `height` CSS pixels
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        let mut state = self.inner.borrow_mut();
        let size = Vec2::new(width, height).max(Vec2::ONE);
        let (w, h) = size_backing_store(&state.canvas, size)?;
        state.renderer.resize(w, h);
        state.game.resize(size.x, size.y);
        if !state.game.is_running() {
            state.render();
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().game.is_running()
    }

    /// "idle" or "running"
    pub fn state(&self) -> String {
        self.inner.borrow().game.state_string().to_string()
    }

    pub fn player_score(&self) -> u32 {
        self.inner.borrow().game.score().player
    }

    pub fn computer_score(&self) -> u32 {
        self.inner.borrow().game.score().computer
    }

    /// Cancel the pending frame and detach listeners
    pub fn destroy(&mut self) {
        self.teardown();
        log::info!("Pong torn down");
    }
}

impl Drop for PongClient {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn request_frame(inner: &Rc<RefCell<PongLoop>>, frame_cb: &FrameCallback) -> ClientResult<()> {
    let callback = frame_cb.borrow();
    if let Some(closure) = callback.as_ref() {
        let id = window()?.request_animation_frame(closure.as_ref().unchecked_ref())?;
        inner.borrow_mut().frame_id = Some(id);
    }
    Ok(())
}

fn css_size(canvas: &HtmlCanvasElement) -> Vec2 {
    let w = canvas.client_width() as f32;
    let h = canvas.client_height() as f32;
    if w > 0.0 && h > 0.0 {
        Vec2::new(w, h)
    } else {
        Vec2::new(Params::FIELD_WIDTH, Params::FIELD_HEIGHT)
    }
}

/// Size the canvas backing store for the device pixel ratio
fn size_backing_store(canvas: &HtmlCanvasElement, css: Vec2) -> ClientResult<(u32, u32)> {
    let dpr = window()?.device_pixel_ratio() as f32;
    let width = (css.x * dpr).round().max(1.0) as u32;
    let height = (css.y * dpr).round().max(1.0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    Ok((width, height))
}
