use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::hover::{self, HoverBinding};

/// Id the hover wiring looks up once the page has mounted.
pub const SIGNATURE_ID: &str = "my-signature";

/// Inline signature graphic with a randomized hover fill.
///
/// The SVG carries its resting color as a `fill` presentation attribute, so
/// clearing the inline override on mouse-out falls back to it.
#[component]
pub fn Signature() -> impl IntoView {
	let svg_ref = NodeRef::<leptos::svg::Svg>::new();
	let binding: Rc<RefCell<Option<HoverBinding>>> = Rc::new(RefCell::new(None));
	let binding_init = binding.clone();

	Effect::new(move |_| {
		// The ref fills in once the element is in the document; until then
		// a lookup by id would miss.
		let Some(_svg) = svg_ref.get() else {
			return;
		};
		if binding_init.borrow().is_some() {
			return;
		}
		*binding_init.borrow_mut() = hover::attach(SIGNATURE_ID);
	});

	view! {
		<svg
			node_ref=svg_ref
			id=SIGNATURE_ID
			class="signature"
			viewBox="0 0 240 80"
			width="240"
			height="80"
			fill="#22223b"
			role="img"
			aria-label="signature"
		>
			// the big looping initial
			<path d="M34 62 C18 60 12 48 18 36 C25 22 44 14 52 22 C58 28 50 40 40 48 C32 54 24 58 18 58 C30 64 44 60 54 50 C50 58 42 64 34 62 Z" />
			// connected lowercase run
			<path d="M62 52 C68 42 76 40 78 46 C80 51 74 56 68 56 C74 58 80 54 84 48 C86 52 90 54 94 50 C98 46 100 48 98 52 C96 56 102 58 108 50 C110 54 116 56 122 50 C126 46 130 48 128 53 C126 57 132 58 138 51 L140 54 C132 62 124 60 122 55 C116 61 108 61 104 55 C98 61 92 60 90 55 C84 61 74 62 70 56 C66 60 60 58 62 52 Z" />
			// trailing flourish underline
			<path d="M58 68 C94 74 150 72 196 62 C204 60 210 62 206 65 C164 76 98 78 56 71 Z" />
		</svg>
	}
}
