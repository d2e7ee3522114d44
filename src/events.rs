//! Input listener wiring.
//!
//! Every closure registered here is retained in a `ListenerSet` so teardown
//! can remove the exact handler it added; nothing is forgotten to the JS
//! heap. Handlers run serialized on the main thread and mutate shared state
//! synchronously, in event order.

use crate::dom;
use crate::expression;
use crate::input::{PointerState, Viewport};
use crate::rotation::RotationState;
use crate::ui;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Owns registered event listeners for the lifetime of the app and detaches
/// them all on disposal (or drop), whichever comes first.
#[derive(Default)]
pub struct ListenerSet {
    entries: Vec<Listener>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::<dyn FnMut(web::Event)>::new(handler);
        if target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to attach {} listener", event);
        }
        self.entries.push(Listener {
            target: target.clone(),
            event,
            closure,
        });
    }

    pub fn detach_all(&mut self) {
        for l in self.entries.drain(..) {
            let _ = l
                .target
                .remove_event_listener_with_callback(l.event, l.closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.detach_all();
    }
}

pub struct InputWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub viewport: Rc<RefCell<Viewport>>,
    pub rotation: Rc<RefCell<RotationState>>,
    pub creature: Rc<ui::CreatureView>,
    pub cursor: Rc<ui::CursorView>,
}

pub fn wire_input_handlers(listeners: &mut ListenerSet, w: InputWiring) {
    let target: &web::EventTarget = w.window.as_ref();

    // wheel -> rotation target, applied synchronously per event
    {
        let rotation = w.rotation.clone();
        listeners.listen(target, "wheel", move |ev| {
            let ev: &web::WheelEvent = ev.unchecked_ref();
            rotation.borrow_mut().apply_scroll(ev.delta_y());
        });
    }

    // pointermove -> pointer state, cursor overlay, creature expression
    {
        let pointer = w.pointer.clone();
        let viewport = w.viewport.clone();
        let creature = w.creature.clone();
        let cursor = w.cursor.clone();
        listeners.listen(target, "pointermove", move |ev| {
            let ev: &web::PointerEvent = ev.unchecked_ref();
            let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
            pointer.borrow_mut().set(x, y);
            cursor.update(x, y);
            let expr = expression::expression(Some(Vec2::new(x, y)), viewport.borrow().size());
            creature.apply(&expr);
        });
    }

    // resize -> canvas backing size + viewport; the GPU surface follows the
    // canvas size on the next frame
    {
        let window = w.window.clone();
        let canvas = w.canvas.clone();
        let pointer = w.pointer.clone();
        let viewport = w.viewport.clone();
        let creature = w.creature.clone();
        listeners.listen(target, "resize", move |_| {
            dom::sync_canvas_backing_size(&canvas);
            let (vw, vh) = dom::viewport_size(&window);
            *viewport.borrow_mut() = Viewport::new(vw, vh);
            let expr = expression::expression(pointer.borrow().position(), viewport.borrow().size());
            creature.apply(&expr);
        });
    }
}
