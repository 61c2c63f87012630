use common::{AppError, LinkStore, Message, is_valid_doc_link, notify, panel::open_viewer_panel};
use dioxus::prelude::*;
use wasm_bindgen::prelude::*;

/// Submit progress, kept explicit so the UI can disable the button and say
/// where a failure happened.
#[derive(Clone, PartialEq)]
enum Phase {
	Idle,
	Validating,
	Persisting,
	Notifying,
	OpeningPanel,
	Closed,
	Failed(AppError),
}

impl Phase {
	fn busy(&self) -> bool {
		matches!(self, Phase::Validating | Phase::Persisting | Phase::Notifying | Phase::OpeningPanel)
	}
}

#[wasm_bindgen]
pub fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());
	dioxus::launch(App);
}

async fn submit(mut phase: Signal<Phase>, doc_link: String) {
	phase.set(Phase::Validating);
	let doc_link = doc_link.trim().to_string();
	if doc_link.is_empty() {
		phase.set(Phase::Failed(AppError::EmptyLink));
		return;
	}
	if !is_valid_doc_link(&doc_link) {
		phase.set(Phase::Failed(AppError::InvalidLink));
		return;
	}

	let browser = match webext_api::init() {
		Ok(b) => b,
		Err(e) => {
			phase.set(Phase::Failed(AppError::Extension(e.to_string())));
			return;
		},
	};

	phase.set(Phase::Persisting);
	if let Err(e) = LinkStore::new(&browser).set(&doc_link).await {
		phase.set(Phase::Failed(e));
		return;
	}

	// The sidebar may not be open yet; the storage write above is the durable
	// path, these are the fast path.
	phase.set(Phase::Notifying);
	notify(&browser, &Message::LoadDoc { doc_link: doc_link.clone(), updated_at: None, source: None }).await;
	notify(&browser, &Message::DocumentOpened).await;

	phase.set(Phase::OpeningPanel);
	match open_viewer_panel(&browser).await {
		Ok(()) => {
			phase.set(Phase::Closed);
			if let Some(window) = web_sys::window() {
				let _ = window.close();
			}
		},
		// The link is saved; show the hint and leave the popup open for a retry.
		Err(e) => phase.set(Phase::Failed(e)),
	}
}

#[component]
fn App() -> Element {
	let mut doc_link = use_signal(String::new);
	let phase = use_signal(|| Phase::Idle);

	use_effect(move || {
		spawn(async move {
			if let Ok(browser) = webext_api::init() {
				let stored = LinkStore::new(&browser).get().await;
				if stored.is_configured() {
					doc_link.set(stored.doc_link);
				}
			}
		});
	});

	let is_busy = phase().busy();

	rsx! {
		div { class: "w-80 p-4 bg-white",
			h1 { class: "text-lg font-bold text-gray-800 mb-3", "Open a document in the side panel" }
			input {
				class: "w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
				r#type: "text",
				placeholder: "https://docs.qq.com/... or https://xxx.feishu.cn/...",
				value: "{doc_link}",
				oninput: move |evt| doc_link.set(evt.value()),
				onkeydown: move |evt| {
					if evt.key() == Key::Enter && !is_busy {
						spawn(submit(phase, doc_link()));
					}
				},
			}
			button {
				class: "w-full mt-3 px-4 py-2 text-white font-semibold rounded-md shadow-sm transition-colors duration-200 ease-in-out bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 disabled:cursor-not-allowed",
				disabled: is_busy,
				onclick: move |_| {
					spawn(submit(phase, doc_link()));
				},
				if is_busy {
					"Opening\u{2026}"
				} else {
					"Open in side panel"
				}
			}
			match phase() {
				Phase::Failed(error) => rsx! {
					p { class: "mt-3 text-sm text-red-600 whitespace-pre-line", "{error}" }
				},
				Phase::Closed => rsx! {
					p { class: "mt-3 text-sm text-gray-500", "The document is opening in the side panel." }
				},
				_ => rsx! {},
			}
		}
	}
}
