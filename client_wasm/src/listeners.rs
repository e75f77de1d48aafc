//! Document-level pointer listeners
//!
//! Registered when a drag or resize begins and removed on the following
//! mouseup, so a release outside the grabbed element still ends the
//! interaction. The closures live as long as their owner; only the
//! registration comes and goes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

type Handler = Closure<dyn FnMut(MouseEvent)>;

pub struct PointerListeners {
    document: Document,
    on_move: Handler,
    on_up: Handler,
    attached: Rc<Cell<bool>>,
}

impl PointerListeners {
    pub fn new(
        document: Document,
        mut on_move: impl FnMut(&MouseEvent) + 'static,
        mut on_up: impl FnMut(&MouseEvent) + 'static,
    ) -> Self {
        let attached = Rc::new(Cell::new(false));
        let on_move = Handler::new(move |event: MouseEvent| on_move(&event));

        // The up handler detaches both listeners; it needs its own function
        // reference, which only exists after construction
        let up_slot: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
        let on_up = {
            let document = document.clone();
            let move_fn: js_sys::Function = on_move.as_ref().unchecked_ref::<js_sys::Function>().clone();
            let up_slot = up_slot.clone();
            let attached = attached.clone();
            Handler::new(move |event: MouseEvent| {
                on_up(&event);
                let _ = document.remove_event_listener_with_callback("mousemove", &move_fn);
                if let Some(up_fn) = up_slot.borrow().as_ref() {
                    let _ = document.remove_event_listener_with_callback("mouseup", up_fn);
                }
                attached.set(false);
            })
        };
        *up_slot.borrow_mut() = Some(on_up.as_ref().unchecked_ref::<js_sys::Function>().clone());

        Self {
            document,
            on_move,
            on_up,
            attached,
        }
    }

    pub fn attach(&self) -> Result<(), JsValue> {
        if self.attached.get() {
            return Ok(());
        }
        self.document
            .add_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref())?;
        self.document
            .add_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref())?;
        self.attached.set(true);
        log::debug!("Pointer listeners attached");
        Ok(())
    }

    pub fn detach(&self) {
        if !self.attached.get() {
            return;
        }
        let _ = self
            .document
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref());
        self.attached.set(false);
        log::debug!("Pointer listeners detached");
    }
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        self.detach();
    }
}
