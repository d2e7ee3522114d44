//! The render loop.
//!
//! One requestAnimationFrame chain per mounted scene. Each frame performs
//! the decay-then-smooth rotation update atomically, then draws. A render
//! failure stops the chain; unmounting cancels the pending frame request
//! before resources are released.

use crate::render;
use crate::room::RoomGeometry;
use crate::rotation::RotationState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub rotation: Rc<RefCell<RotationState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl FrameContext<'_> {
    pub fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let rotation_y = {
            let mut rot = self.rotation.borrow_mut();
            rot.step();
            rot.current
        };
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            gpu.render(rotation_y)?;
        }
        Ok(())
    }
}

/// Initialize the GPU state for a canvas, or log and return `None` so the
/// rest of the app keeps running without the scene.
pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    room: &dyn RoomGeometry,
    pattern: &[u8],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, room, pattern).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}; room scene disabled", e);
            None
        }
    }
}

/// Handle to a running loop. `cancel` prevents any further frame from
/// executing and revokes the already-scheduled frame request.
pub struct LoopHandle {
    mounted: Rc<Cell<bool>>,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.mounted.set(false);
        if let Some(id) = self.frame_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let mounted = Rc::new(Cell::new(true));
    let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mounted_tick = mounted.clone();
    let frame_id_tick = frame_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !mounted_tick.get() {
            return;
        }
        if let Err(e) = frame_ctx.borrow_mut().frame() {
            log::error!("render error: {:?}; stopping render loop", e);
            mounted_tick.set(false);
            frame_id_tick.set(None);
            return;
        }
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                frame_id_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            frame_id.set(Some(id));
        }
    }

    LoopHandle { mounted, frame_id }
}
