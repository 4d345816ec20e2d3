//! DOM-facing ambient animator.
//!
//! Owns the backdrop element tree and advances the [`sim::Starfield`] once
//! per `requestAnimationFrame` tick, pushing derived positions straight into
//! element style attributes instead of going through any declarative render
//! path. Shooting-star elements are created and detached dynamically; their
//! order always mirrors the simulation's live star records.

pub mod color;
mod decor;
pub mod sim;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, console, window};

use sim::{Particle, ShootingStar, Starfield, Viewport};

const ROOT_ID: &str = "np-backdrop";
const PARTICLE_SIZE_PX: f64 = 3.0;
const STAR_SIZE_PX: f64 = 4.0;

struct BackdropState {
    root: HtmlElement,
    sim: Starfield,
    particle_els: Vec<Element>,
    star_els: Vec<Element>,
    raf_handle: i32,
}

thread_local! {
    static BACKDROP: RefCell<Option<BackdropState>> = RefCell::new(None);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

thread_local! {
    static FRAME: RefCell<Option<FrameCallback>> = RefCell::new(None);
}

/// Build the backdrop element tree, seed the simulation and start the frame
/// loop. A second call while the backdrop is live is a no-op.
pub fn start_backdrop() -> Result<(), JsValue> {
    if BACKDROP.with(|cell| cell.borrow().is_some()) {
        return Ok(());
    }

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let root: HtmlElement = if let Some(el) = doc.get_element_by_id(ROOT_ID) {
        el.dyn_into()?
    } else {
        let el: HtmlElement = doc.create_element("div")?.dyn_into()?;
        el.set_id(ROOT_ID);
        el.set_attribute(
            "style",
            "position:fixed; inset:0; overflow:hidden; pointer-events:none; z-index:0; \
             background:radial-gradient(ellipse at bottom, #1b2735 0%, #090a0f 100%);",
        )?;
        body.append_child(&el)?;
        el
    };

    decor::mount_decorations(&doc, &root)?;

    let field = Starfield::new(current_viewport(), rand::random());
    let mut particle_els = Vec::with_capacity(field.particles().len());
    for particle in field.particles() {
        let el = doc.create_element("div")?;
        el.set_class_name("particle");
        el.set_attribute("style", &particle_style(particle))?;
        root.append_child(&el)?;
        particle_els.push(el);
    }

    console::log_1(&format!("backdrop: seeded {} particles", particle_els.len()).into());

    BACKDROP.with(|cell| {
        cell.replace(Some(BackdropState {
            root,
            sim: field,
            particle_els,
            star_els: Vec::new(),
            raf_handle: 0,
        }))
    });
    start_frame_loop();
    Ok(())
}

/// Cancel the pending frame callback and detach the backdrop element tree,
/// shooting stars included. Safe to call with no backdrop running.
pub fn stop_backdrop() {
    let state = BACKDROP.with(|cell| cell.borrow_mut().take());
    if let Some(state) = state {
        if let Some(win) = window() {
            win.cancel_animation_frame(state.raf_handle).ok();
        }
        // Removing the root detaches particles, stars and decorations with it.
        if let Some(parent) = state.root.parent_node() {
            parent.remove_child(&state.root).ok();
        }
        console::log_1(&JsValue::from_str("backdrop: stopped"));
    }
    FRAME.with(|slot| {
        if let Some(cb) = slot.borrow_mut().take() {
            // Drop the closure as well; it holds the other half of the Rc.
            cb.borrow_mut().take();
        }
    });
}

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let running = BACKDROP.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                tick(state);
                true
            } else {
                false
            }
        });
        if !running {
            return;
        }
        if let Some(win) = window() {
            if let Ok(handle) =
                win.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            {
                store_raf_handle(handle);
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(win) = window() {
        if let Ok(handle) =
            win.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            store_raf_handle(handle);
        }
    }
    FRAME.with(|slot| slot.replace(Some(g)));
}

fn store_raf_handle(handle: i32) {
    BACKDROP.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            state.raf_handle = handle;
        }
    });
}

/// One animation tick: advance the simulation, then mirror the report into
/// the element tree.
fn tick(state: &mut BackdropState) {
    let viewport = current_viewport();
    let report = state.sim.step(viewport);

    for (particle, el) in state.sim.particles().iter().zip(&state.particle_els) {
        el.set_attribute("style", &particle_style(particle)).ok();
    }

    // Retired indices are pre-step and ascending; remove back-to-front.
    for &idx in report.retired.iter().rev() {
        if idx < state.star_els.len() {
            let el = state.star_els.remove(idx);
            if let Some(parent) = el.parent_node() {
                parent.remove_child(&el).ok();
            }
        }
    }

    for (star, el) in state.sim.stars().iter().zip(&state.star_els) {
        el.set_attribute("style", &star_style(star)).ok();
    }

    if report.spawned {
        if let (Some(star), Some(doc)) = (state.sim.stars().last(), document()) {
            if let Ok(el) = doc.create_element("div") {
                el.set_class_name("shooting-star");
                el.set_attribute("style", &star_style(star)).ok();
                state.root.append_child(&el).ok();
                state.star_els.push(el);
            }
        }
    }
}

fn particle_style(particle: &Particle) -> String {
    format!(
        "position:absolute; left:{x:.2}px; top:{y:.2}px; width:{size}px; height:{size}px; \
         border-radius:50%; background:{color}; box-shadow:0 0 6px {color}; z-index:1;",
        x = particle.x,
        y = particle.y,
        size = PARTICLE_SIZE_PX,
        color = particle.color,
    )
}

fn star_style(star: &ShootingStar) -> String {
    format!(
        "position:absolute; left:{x:.2}px; top:{y:.2}px; opacity:{opacity:.3}; \
         width:{size}px; height:{size}px; background:#fff; border-radius:50%; \
         box-shadow:0 0 8px #fff, 0 0 16px #87ceeb, 0 0 24px #87ceeb; z-index:5;",
        x = star.x,
        y = star.y,
        opacity = star.opacity,
        size = STAR_SIZE_PX,
    )
}

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// The viewport is re-read every tick; there is no resize subscription.
fn current_viewport() -> Viewport {
    let (width, height) = window()
        .map(|w| {
            (
                w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
            )
        })
        .unwrap_or((0.0, 0.0));
    Viewport::new(width, height)
}
