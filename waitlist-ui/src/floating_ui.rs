//! Floating UI bindings
//!
//! Typed wrapper over `@floating-ui/dom`'s `computePosition`, used to place the
//! country dropdown under its trigger. The library is expected on
//! `window.FloatingUIDOM` (the host page loads it from a script tag).

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Where the floating element sits relative to its anchor
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Placement {
    #[default]
    Bottom,
    BottomStart,
    BottomEnd,
    Top,
    TopStart,
}

impl Placement {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Top => "top",
            Self::TopStart => "top-start",
        }
    }
}

/// Coordinates to translate the floating element to
#[derive(Debug, Clone, Copy, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default)]
pub struct PositionOptions {
    pub placement: Placement,
    pub offset: Option<f64>,
    /// Flip to the opposite side when there is no room
    pub flip: bool,
    /// Slide along the axis to stay in the viewport
    pub shift: bool,
}

fn function(target: &JsValue, name: &str) -> Result<js_sys::Function, JsValue> {
    js_sys::Reflect::get(target, &name.into())?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| JsValue::from_str(&format!("FloatingUIDOM.{name} is not a function")))
}

/// Compute where `floating` should go relative to `reference`.
pub async fn compute_position(
    reference: &web_sys::Element,
    floating: &web_sys::Element,
    options: PositionOptions,
) -> Result<Position, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let lib = js_sys::Reflect::get(&window, &"FloatingUIDOM".into())?;

    let middleware = js_sys::Array::new();
    if let Some(offset) = options.offset {
        middleware.push(&function(&lib, "offset")?.call1(&JsValue::NULL, &offset.into())?);
    }
    if options.flip {
        middleware.push(&function(&lib, "flip")?.call0(&JsValue::NULL)?);
    }
    if options.shift {
        middleware.push(&function(&lib, "shift")?.call0(&JsValue::NULL)?);
    }

    let opts = js_sys::Object::new();
    js_sys::Reflect::set(&opts, &"placement".into(), &options.placement.as_str().into())?;
    js_sys::Reflect::set(&opts, &"middleware".into(), &middleware)?;

    let promise = function(&lib, "computePosition")?
        .call3(&JsValue::NULL, reference, floating, &opts)?
        .dyn_into::<js_sys::Promise>()?;
    let result = wasm_bindgen_futures::JsFuture::from(promise).await?;

    let coord = |name: &str| {
        js_sys::Reflect::get(&result, &name.into())
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    };

    Ok(Position {
        x: coord("x"),
        y: coord("y"),
    })
}
