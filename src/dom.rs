use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Viewport dimensions in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w as f32, h as f32)
}

/// Keep the canvas backing store sized to CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Find the room mount node, or create one filling the viewport. The scene
/// layer sits above the creature and ignores pointer events.
pub fn ensure_container(document: &web::Document) -> Option<web::Element> {
    if let Some(el) = document.get_element_by_id("room") {
        return Some(el);
    }
    let el = document.create_element("div").ok()?;
    el.set_id("room");
    let _ = el.set_attribute(
        "style",
        "position:absolute;top:0;left:0;right:0;bottom:0;z-index:2;\
         pointer-events:none;background:transparent;",
    );
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

/// Create the render canvas inside the mount container.
pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let _ = canvas.set_attribute("style", "width:100%;height:100%;display:block;background:transparent;");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(canvas)
}

/// Hide the optional boot placeholder once startup succeeds.
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("loading") {
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Surface a startup failure in the boot placeholder, when one exists.
pub fn fail_loading(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id("loading") {
        el.set_text_content(Some(message));
        let _ = el.set_attribute("style", "color:red");
    }
}
