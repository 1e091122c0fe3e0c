//! Raw DOM wiring for the signature hover effect.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CssStyleDeclaration, SvgElement};

use super::fill;

/// Listener closures bound to the signature element.
///
/// Dropping the binding does not detach the listeners, so it must be held
/// for as long as the element can receive pointer events.
pub struct HoverBinding {
	_enter: Closure<dyn FnMut()>,
	_leave: Closure<dyn FnMut()>,
}

/// Look up the element with `id` and wire the hover listeners onto it.
///
/// Returns `None` without touching the page when there is no such element
/// (or it is not an SVG node). The rest of the page keeps working; the
/// hover effect just never happens.
pub fn attach(id: &str) -> Option<HoverBinding> {
	let document = web_sys::window()?.document()?;
	let Some(element) = document.get_element_by_id(id) else {
		debug!("#{id} not in document, hover effect disabled");
		return None;
	};
	let svg: SvgElement = match element.dyn_into() {
		Ok(svg) => svg,
		Err(_) => {
			debug!("#{id} is not an SVG element, hover effect disabled");
			return None;
		}
	};
	let style = svg.style();

	let enter_style = style.clone();
	let enter: Closure<dyn FnMut()> = Closure::new(move || {
		set_fill(&enter_style, &fill::random_fill());
	});
	let leave: Closure<dyn FnMut()> = Closure::new(move || {
		set_fill(&style, "");
	});

	let _ = svg.add_event_listener_with_callback("mouseover", enter.as_ref().unchecked_ref());
	let _ = svg.add_event_listener_with_callback("mouseout", leave.as_ref().unchecked_ref());
	debug!("hover effect bound to #{id}");

	Some(HoverBinding {
		_enter: enter,
		_leave: leave,
	})
}

// The empty string clears the inline declaration, so the element's own
// fill shows through again.
fn set_fill(style: &CssStyleDeclaration, value: &str) {
	let _ = style.set_property("fill", value);
}
