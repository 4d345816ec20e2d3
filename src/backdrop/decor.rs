//! Static orbiting decorations: a sun, four drifting planets and a ringed
//! Saturn. Their motion is CSS-keyframe-driven; the per-frame simulation
//! never touches these nodes.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

const STYLE_ID: &str = "np-decor-css";

const DECOR_CSS: &str = "\
@keyframes np-drift { 0% { transform: translate(0, 0); } 50% { transform: translate(14px, -10px); } 100% { transform: translate(0, 0); } }\n\
@keyframes np-spin { from { transform: rotate(-18deg); } to { transform: rotate(342deg); } }\n";

struct PlanetSpec {
    left: &'static str,
    top: &'static str,
    size: f64,
    gradient: &'static str,
    drift_secs: f64,
}

const PLANETS: [PlanetSpec; 4] = [
    PlanetSpec {
        left: "12%",
        top: "18%",
        size: 26.0,
        gradient: "radial-gradient(circle at 30% 30%, #ff9e6d, #b3541e)",
        drift_secs: 26.0,
    },
    PlanetSpec {
        left: "78%",
        top: "12%",
        size: 18.0,
        gradient: "radial-gradient(circle at 30% 30%, #9bd0ff, #2a5d9c)",
        drift_secs: 34.0,
    },
    PlanetSpec {
        left: "85%",
        top: "68%",
        size: 34.0,
        gradient: "radial-gradient(circle at 30% 30%, #d8a6ff, #6b2f9c)",
        drift_secs: 42.0,
    },
    PlanetSpec {
        left: "8%",
        top: "74%",
        size: 14.0,
        gradient: "radial-gradient(circle at 30% 30%, #ffd1e8, #b03a7e)",
        drift_secs: 22.0,
    },
];

pub(super) fn mount_decorations(doc: &Document, root: &Element) -> Result<(), JsValue> {
    if doc.get_element_by_id(STYLE_ID).is_none() {
        let style = doc.create_element("style")?;
        style.set_id(STYLE_ID);
        style.set_text_content(Some(DECOR_CSS));
        root.append_child(&style)?;
    }

    let sun = doc.create_element("div")?;
    sun.set_class_name("sun");
    sun.set_attribute(
        "style",
        "position:absolute; left:6%; top:8%; width:90px; height:90px; border-radius:50%; \
         background:radial-gradient(circle at 35% 35%, #fff7c4, #ffb347 55%, #ff8c00); \
         box-shadow:0 0 40px #ffb347, 0 0 90px rgba(255,140,0,0.45); z-index:1;",
    )?;
    root.append_child(&sun)?;

    for (idx, spec) in PLANETS.iter().enumerate() {
        let planet = doc.create_element("div")?;
        planet.set_class_name(&format!("planet planet-{}", idx + 1));
        planet.set_attribute(
            "style",
            &format!(
                "position:absolute; left:{left}; top:{top}; width:{size}px; height:{size}px; \
                 border-radius:50%; background:{gradient}; \
                 animation:np-drift {secs}s ease-in-out infinite; z-index:1;",
                left = spec.left,
                top = spec.top,
                size = spec.size,
                gradient = spec.gradient,
                secs = spec.drift_secs,
            ),
        )?;
        root.append_child(&planet)?;
    }

    let saturn = doc.create_element("div")?;
    saturn.set_class_name("saturn");
    saturn.set_attribute(
        "style",
        "position:absolute; left:64%; top:78%; width:60px; height:60px; z-index:1;",
    )?;
    let rings = doc.create_element("div")?;
    rings.set_class_name("saturn-rings");
    rings.set_attribute(
        "style",
        "position:absolute; left:-14px; top:22px; width:88px; height:16px; \
         border:2px solid rgba(222,184,135,0.7); border-radius:50%; \
         animation:np-spin 60s linear infinite;",
    )?;
    let body = doc.create_element("div")?;
    body.set_class_name("saturn-planet");
    body.set_attribute(
        "style",
        "position:absolute; left:10px; top:10px; width:40px; height:40px; border-radius:50%; \
         background:radial-gradient(circle at 30% 30%, #f5deb3, #c8964b);",
    )?;
    saturn.append_child(&rings)?;
    saturn.append_child(&body)?;
    root.append_child(&saturn)?;

    Ok(())
}
