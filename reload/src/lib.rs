use common::{AppError, LinkStore, Message, notify, panel::open_viewer_panel};
use dioxus::prelude::*;
use wasm_bindgen::prelude::*;

#[derive(Clone, PartialEq)]
enum Phase {
	Idle,
	Working,
	NothingStored,
	Closed,
	Failed(AppError),
}

#[wasm_bindgen]
pub fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());
	dioxus::launch(App);
}

async fn reopen(mut phase: Signal<Phase>) {
	phase.set(Phase::Working);

	let browser = match webext_api::init() {
		Ok(b) => b,
		Err(e) => {
			phase.set(Phase::Failed(AppError::Extension(e.to_string())));
			return;
		},
	};

	let store = LinkStore::new(&browser);
	let stored = store.get().await;
	if !stored.is_configured() {
		phase.set(Phase::NothingStored);
		return;
	}

	// Refresh the timestamp so the reopen shows up in diagnostics.
	let refreshed = match store.set(&stored.doc_link).await {
		Ok(s) => s,
		Err(e) => {
			phase.set(Phase::Failed(e));
			return;
		},
	};

	if let Err(e) = open_viewer_panel(&browser).await {
		phase.set(Phase::Failed(e));
		return;
	}

	notify(&browser, &Message::LoadDoc { doc_link: refreshed.doc_link, updated_at: refreshed.updated_at, source: Some("reload".into()) }).await;
	notify(&browser, &Message::DocumentOpened).await;

	phase.set(Phase::Closed);
	if let Some(window) = web_sys::window() {
		let _ = window.close();
	}
}

#[component]
fn App() -> Element {
	let phase = use_signal(|| Phase::Idle);
	let is_working = matches!(phase(), Phase::Working);

	rsx! {
		div { class: "w-64 p-4 bg-white",
			h1 { class: "text-lg font-bold text-gray-800 mb-3", "Reopen your document" }
			button {
				class: "w-full px-4 py-2 text-white font-semibold rounded-md shadow-sm transition-colors duration-200 ease-in-out bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 disabled:cursor-not-allowed",
				disabled: is_working,
				onclick: move |_| {
					spawn(reopen(phase));
				},
				if is_working {
					"Opening\u{2026}"
				} else {
					"Open in side panel"
				}
			}
			match phase() {
				Phase::NothingStored => rsx! {
					p { class: "mt-3 text-sm text-gray-600",
						"No document link is stored yet. Open the extension popup and enter one first."
					}
				},
				Phase::Failed(error) => rsx! {
					p { class: "mt-3 text-sm text-red-600 whitespace-pre-line", "{error}" }
				},
				_ => rsx! {},
			}
		}
	}
}
