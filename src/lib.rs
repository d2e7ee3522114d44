#![cfg(target_arch = "wasm32")]
//! Animated landing core: a scroll-driven patterned room rendered with
//! WebGPU over a transparent canvas, a pointer-reactive creature, and a
//! crosshair cursor overlay. The navigation/content layer is external and
//! only reads UI state; nothing here persists beyond the page.

mod blink;
mod constants;
mod dom;
mod events;
mod expression;
mod frame;
mod input;
mod pattern;
mod render;
mod room;
mod rotation;
mod ui;

use crate::input::{PointerState, Viewport};
use crate::rotation::RotationState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("atrium-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some((_, document)) = dom::window_document() {
                dom::fail_loading(&document, "Failed to start the landing scene.");
            }
        }
    });
    Ok(())
}

/// Everything the running app owns. Held in a thread-local slot so
/// `shutdown` can tear it down from JS.
struct App {
    listeners: events::ListenerSet,
    render_loop: Option<frame::LoopHandle>,
    blink: blink::BlinkDriver,
    frame_ctx: Rc<RefCell<frame::FrameContext<'static>>>,
    canvas: web::HtmlCanvasElement,
    creature: Rc<ui::CreatureView>,
    cursor: Rc<ui::CursorView>,
}

impl App {
    /// Teardown in dependency order: input listeners first so no callback
    /// can observe released state, then the pending frame request and blink
    /// timer, then the GPU resources, and finally the DOM nodes.
    fn dispose(&mut self) {
        self.listeners.detach_all();
        if let Some(handle) = self.render_loop.take() {
            handle.cancel();
        }
        self.blink.cancel();
        self.frame_ctx.borrow_mut().gpu = None;
        self.canvas.remove();
        self.creature.unmount();
        self.cursor.unmount();
        log::info!("scene disposed");
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Dispose the running scene. Safe to call at any time, including before
/// startup finished or after a failed GPU init; later calls no-op.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|slot| {
        if let Some(mut app) = slot.borrow_mut().take() {
            app.dispose();
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let started = Instant::now();
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let container = dom::ensure_container(&document)
        .ok_or_else(|| anyhow::anyhow!("no mount container"))?;
    let canvas = dom::create_canvas(&document, &container)?;
    dom::sync_canvas_backing_size(&canvas);

    // Shared UI state, owned here and injected into every consumer.
    let (vw, vh) = dom::viewport_size(&window);
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let viewport = Rc::new(RefCell::new(Viewport::new(vw, vh)));
    let rotation = Rc::new(RefCell::new(RotationState::new()));

    let creature = Rc::new(ui::CreatureView::mount(&document)?);
    let cursor = Rc::new(ui::CursorView::mount(&document)?);

    // Room scene. GPU failure is not fatal: the creature and cursor keep
    // working, only the render loop is skipped.
    let geometry = room::for_variant(container.get_attribute("data-room").as_deref());
    let pattern_pixels = pattern::generate();
    let gpu = frame::init_gpu(&canvas, geometry.as_ref(), &pattern_pixels).await;
    let gpu_ready = gpu.is_some();
    if gpu_ready {
        log::info!(
            "webgpu ready ({} room) in {} ms",
            geometry.label(),
            started.elapsed().as_millis()
        );
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        rotation: rotation.clone(),
        canvas: canvas.clone(),
        gpu,
    }));

    let mut listeners = events::ListenerSet::new();
    events::wire_input_handlers(
        &mut listeners,
        events::InputWiring {
            window: window.clone(),
            canvas: canvas.clone(),
            pointer,
            viewport,
            rotation,
            creature: creature.clone(),
            cursor: cursor.clone(),
        },
    );

    let render_loop = gpu_ready.then(|| frame::start_loop(frame_ctx.clone()));
    let blink = blink::start(creature.clone());

    dom::hide_loading(&document);

    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            listeners,
            render_loop,
            blink,
            frame_ctx,
            canvas,
            creature,
            cursor,
        });
    });
    Ok(())
}
