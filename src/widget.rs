//! Glue for the embedded Pong widget.
//!
//! The widget is an opaque JS component: we hand it a container element and
//! an option bag, and never control or observe its internals afterwards.

use js_sys::{Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// Hard cap on the widget's rendered width, px.
pub const MAX_WIDGET_WIDTH: f64 = 800.0;

const CONTAINER_ID: &str = "np-game";

#[wasm_bindgen]
extern "C" {
    /// `PongMini.mount(container, options)` provided by the host page.
    #[wasm_bindgen(catch, js_namespace = PongMini, js_name = mount)]
    fn pong_mount(container: &HtmlElement, options: &JsValue) -> Result<(), JsValue>;
}

/// Recognized widget options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PongOptions {
    /// Widget resizes with its container.
    pub responsive: bool,
    /// Visual shadow effect on the widget.
    pub shadow: bool,
    /// Hard cap on rendered width, px.
    pub max_width: f64,
}

impl PongOptions {
    /// Defaults for a given viewport width: responsive, no shadow, width
    /// capped at min(90% of the viewport, [`MAX_WIDGET_WIDTH`]).
    pub fn for_viewport(viewport_width: f64) -> Self {
        Self {
            responsive: true,
            shadow: false,
            max_width: (viewport_width * 0.9).min(MAX_WIDGET_WIDTH),
        }
    }

    fn to_js(self) -> Result<JsValue, JsValue> {
        let obj = Object::new();
        Reflect::set(&obj, &"responsive".into(), &self.responsive.into())?;
        Reflect::set(&obj, &"shadow".into(), &self.shadow.into())?;
        Reflect::set(&obj, &"maxWidth".into(), &self.max_width.into())?;
        Ok(obj.into())
    }
}

/// Create (or reuse) the centered game container and hand it to the widget.
pub fn mount_widget() -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let container: HtmlElement = if let Some(el) = doc.get_element_by_id(CONTAINER_ID) {
        el.dyn_into()?
    } else {
        let el: HtmlElement = doc.create_element("div")?.dyn_into()?;
        el.set_id(CONTAINER_ID);
        el.set_attribute(
            "style",
            "position:relative; z-index:10; display:flex; justify-content:center; \
             align-items:center; min-height:100vh;",
        )?;
        body.append_child(&el)?;
        el
    };

    let viewport_width = win.inner_width()?.as_f64().unwrap_or(0.0);
    let options = PongOptions::for_viewport(viewport_width);
    pong_mount(&container, &options.to_js()?)
}
