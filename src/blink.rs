//! Timeout driver for the blink state machine.
//!
//! A single self-rescheduling timer advances `BlinkMachine` and mirrors its
//! eye state into the creature view. Only one timeout is ever pending; its
//! handle is kept so teardown can clear it deterministically.

use crate::constants::FIRST_BLINK_DELAY_MS;
use crate::expression::BlinkMachine;
use crate::ui::CreatureView;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct BlinkDriver {
    cancelled: Rc<Cell<bool>>,
    timeout_id: Rc<Cell<Option<i32>>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

pub fn start(creature: Rc<CreatureView>) -> BlinkDriver {
    let cancelled = Rc::new(Cell::new(false));
    let timeout_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let machine = RefCell::new(BlinkMachine::new());
    let rng = RefCell::new(StdRng::from_entropy());

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let cancelled_tick = cancelled.clone();
    let timeout_tick = timeout_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled_tick.get() {
            return;
        }
        let step = machine.borrow_mut().advance(&mut *rng.borrow_mut());
        creature.set_blinking(step.eyes_closed);
        timeout_tick.set(schedule(&tick_clone, step.next_delay_ms));
    }) as Box<dyn FnMut()>));

    timeout_id.set(schedule(&tick, FIRST_BLINK_DELAY_MS));

    BlinkDriver {
        cancelled,
        timeout_id,
        _tick: tick,
    }
}

fn schedule(
    tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    delay_ms: u32,
) -> Option<i32> {
    let window = web::window()?;
    let guard = tick.borrow();
    let closure = guard.as_ref()?;
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms as i32,
        )
        .ok()
}

impl BlinkDriver {
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(id) = self.timeout_id.take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(id);
            }
        }
    }
}
