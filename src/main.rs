//! CSR entry point.

use leptos::prelude::*;
use signature_hover::{App, init_logging};

fn main() {
	init_logging();

	leptos::mount::mount_to_body(|| view! { <App /> })
}
