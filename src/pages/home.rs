use leptos::prelude::*;

use crate::components::signature::Signature;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="home">
				<h1>"Thanks for stopping by"</h1>
				<p class="subtitle">"Hover over the signature to shuffle its color."</p>
				<Signature />
			</main>
		</ErrorBoundary>
	}
}
