//! DOM views: the creature and the cursor overlay.
//!
//! Both are thin shells over the pure expression math: they only translate
//! derived values into attributes on a handful of elements. Each view owns
//! the nodes it created and removes them on unmount.

use crate::constants::CURSOR_SQUARE_PX;
use crate::expression::{body_scale, mouth_path, Expression};
use std::cell::Cell;
use wasm_bindgen::JsValue;
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Creature viewbox layout
const EYE_LEFT_X: f32 = 40.0;
const EYE_RIGHT_X: f32 = 64.0;
const EYE_Y: f32 = 40.0;
const EYE_RADIUS: f32 = 4.0;
const BLINK_EYE_SCALE_Y: f32 = 0.1;

const BODY_PATH: &str = "M 52.5,3.5 C 27.0,3.5 6.5,20.0 4.0,44.0 \
C 1.5,67.0 13.0,91.0 36.0,99.0 C 58.0,106.5 84.0,96.0 94.5,75.5 \
C 104.0,56.0 102.0,30.0 88.0,15.5 C 79.0,6.0 65.5,3.5 52.5,3.5 Z";

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!(format!("{:?}", e))
}

// ---------------- Creature ----------------

/// The on-screen figure: a white body with two tracking eyes and a mouth
/// whose curvature follows happiness. Centered over the viewport, behind
/// the room layer, ignoring pointer events.
pub struct CreatureView {
    wrapper: web::Element,
    body: web::Element,
    left_eye: web::Element,
    right_eye: web::Element,
    mouth: web::Element,
    eye_offset: Cell<(f32, f32)>,
    blinking: Cell<bool>,
}

impl CreatureView {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let wrapper = document.create_element("div").map_err(js_err)?;
        let _ = wrapper.set_attribute(
            "style",
            "position:absolute;top:0;left:0;right:0;bottom:0;display:flex;\
             align-items:center;justify-content:center;pointer-events:none;z-index:1;",
        );

        let body = document.create_element("div").map_err(js_err)?;
        set_body_scale(&body, 1.0);

        let svg = document.create_element_ns(Some(SVG_NS), "svg").map_err(js_err)?;
        let _ = svg.set_attribute("viewBox", "0 0 105 105");
        let _ = svg.set_attribute("preserveAspectRatio", "xMidYMid meet");
        let _ = svg.set_attribute("style", "width:100%;height:100%;");
        let _ = svg.set_attribute("aria-hidden", "true");

        let outline = document.create_element_ns(Some(SVG_NS), "path").map_err(js_err)?;
        let _ = outline.set_attribute("d", BODY_PATH);
        let _ = outline.set_attribute("fill", "white");

        let left_eye = make_eye(document, EYE_LEFT_X)?;
        let right_eye = make_eye(document, EYE_RIGHT_X)?;

        let mouth = document.create_element_ns(Some(SVG_NS), "path").map_err(js_err)?;
        let _ = mouth.set_attribute("d", &mouth_path(0.0));
        let _ = mouth.set_attribute("stroke", "black");
        let _ = mouth.set_attribute("stroke-width", "3");
        let _ = mouth.set_attribute("stroke-linecap", "round");
        let _ = mouth.set_attribute("fill", "transparent");

        svg.append_child(&outline).map_err(js_err)?;
        svg.append_child(&left_eye).map_err(js_err)?;
        svg.append_child(&right_eye).map_err(js_err)?;
        svg.append_child(&mouth).map_err(js_err)?;
        body.append_child(&svg).map_err(js_err)?;
        wrapper.append_child(&body).map_err(js_err)?;
        document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no document body"))?
            .append_child(&wrapper)
            .map_err(js_err)?;

        Ok(Self {
            wrapper,
            body,
            left_eye,
            right_eye,
            mouth,
            eye_offset: Cell::new((0.0, 0.0)),
            blinking: Cell::new(false),
        })
    }

    /// Mirror a derived expression into the DOM.
    pub fn apply(&self, expr: &Expression) {
        set_body_scale(&self.body, body_scale(expr.happiness));
        let _ = self.mouth.set_attribute("d", &mouth_path(expr.happiness));
        if let Some(offset) = expr.eye_offset {
            self.eye_offset.set((offset.x, offset.y));
        }
        self.refresh_eyes();
    }

    pub fn set_blinking(&self, closed: bool) {
        self.blinking.set(closed);
        self.refresh_eyes();
    }

    /// Blinking squashes each eye about its own center and drops the look
    /// offset for the duration, like a real lid closing.
    fn refresh_eyes(&self) {
        let transform = if self.blinking.get() {
            format!(
                "translate(0 {:.2}) scale(1 {})",
                EYE_Y * (1.0 - BLINK_EYE_SCALE_Y),
                BLINK_EYE_SCALE_Y
            )
        } else {
            let (dx, dy) = self.eye_offset.get();
            format!("translate({:.2} {:.2})", dx, dy)
        };
        let _ = self.left_eye.set_attribute("transform", &transform);
        let _ = self.right_eye.set_attribute("transform", &transform);
    }

    pub fn unmount(&self) {
        self.wrapper.remove();
    }
}

fn make_eye(document: &web::Document, cx: f32) -> anyhow::Result<web::Element> {
    let eye = document.create_element_ns(Some(SVG_NS), "circle").map_err(js_err)?;
    let _ = eye.set_attribute("cx", &format!("{}", cx));
    let _ = eye.set_attribute("cy", &format!("{}", EYE_Y));
    let _ = eye.set_attribute("r", &format!("{}", EYE_RADIUS));
    let _ = eye.set_attribute("fill", "black");
    Ok(eye)
}

fn set_body_scale(body: &web::Element, scale: f32) {
    let _ = body.set_attribute(
        "style",
        &format!(
            "position:relative;width:7.5vmin;height:7.5vmin;min-width:30px;\
             transform:scale({:.4});transition:transform 0.3s ease-out;",
            scale
        ),
    );
}

// ---------------- Cursor overlay ----------------

const CURSOR_BASE: &str =
    "position:fixed;background:#fff;pointer-events:none;z-index:10000;mix-blend-mode:difference;";

/// Crosshair lines through the pointer plus a small square centered on it.
/// Purely derived from the pointer position; hidden until the pointer has
/// been seen at least once.
pub struct CursorView {
    horizontal: web::Element,
    vertical: web::Element,
    square: web::Element,
}

impl CursorView {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no document body"))?;
        Ok(Self {
            horizontal: make_shape(document, &body)?,
            vertical: make_shape(document, &body)?,
            square: make_shape(document, &body)?,
        })
    }

    pub fn update(&self, x: f32, y: f32) {
        let _ = self.horizontal.set_attribute(
            "style",
            &format!("{}top:{:.1}px;left:0;width:100%;height:1px;", CURSOR_BASE, y),
        );
        let _ = self.vertical.set_attribute(
            "style",
            &format!("{}top:0;left:{:.1}px;width:1px;height:100%;", CURSOR_BASE, x),
        );
        let _ = self.square.set_attribute(
            "style",
            &format!(
                "{}top:{:.1}px;left:{:.1}px;width:{px}px;height:{px}px;\
                 transform:translate(-50%,-50%);",
                CURSOR_BASE,
                y,
                x,
                px = CURSOR_SQUARE_PX
            ),
        );
    }

    pub fn unmount(&self) {
        self.horizontal.remove();
        self.vertical.remove();
        self.square.remove();
    }
}

fn make_shape(document: &web::Document, body: &web::HtmlElement) -> anyhow::Result<web::Element> {
    let el = document.create_element("div").map_err(js_err)?;
    let _ = el.set_attribute("style", &format!("{}display:none;", CURSOR_BASE));
    body.append_child(&el).map_err(js_err)?;
    Ok(el)
}
