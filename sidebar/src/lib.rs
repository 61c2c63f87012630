use common::{
	ENTRY_POPUP_PAGE, LinkStore, Message,
	store::DOC_LINK_KEY,
	viewer::{FrameContent, Overlay, ViewerState},
};
use dioxus::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());
	dioxus::launch(App);
}

/// Clears the stored link and hands the action icon back to the entry popup.
/// Any failure leaves a sticky notice asking for a manual retry; the frame
/// has already been blanked by `begin_reset`.
async fn reset(mut viewer: Signal<ViewerState>) {
	viewer.write().begin_reset();

	let browser = match webext_api::init() {
		Ok(b) => b,
		Err(e) => {
			log::error!("[sidebar] Failed to initialize: {e}");
			viewer.write().reset_failed();
			return;
		},
	};

	if let Err(e) = LinkStore::new(&browser).clear().await {
		log::error!("[sidebar] Clearing the stored link failed: {e}");
		viewer.write().reset_failed();
		return;
	}

	let action = browser.action();
	if let Err(e) = action.set_popup(ENTRY_POPUP_PAGE).await {
		log::error!("[sidebar] Switching the action popup failed: {e}");
		viewer.write().reset_failed();
		return;
	}

	viewer.write().reset_complete();

	// Presenting the popup can require a user gesture; losing it only means
	// the user clicks the action icon themselves.
	if let Err(e) = action.open_popup().await {
		log::debug!("[sidebar] Could not present the popup: {e}");
	}
}

#[component]
fn App() -> Element {
	let mut viewer = use_signal(ViewerState::default);

	use_effect(move || {
		let browser = match webext_api::init() {
			Ok(b) => b,
			Err(e) => {
				log::error!("[sidebar] Failed to initialize: {e}");
				return;
			},
		};

		// Durable source of truth first; both listeners below funnel into the
		// same idempotent `load_document`, so order and duplication are free.
		spawn({
			let browser = browser.clone();
			async move {
				let stored = LinkStore::new(&browser).get().await;
				viewer.set(ViewerState::init(&stored));
			}
		});

		match browser.runtime().on_message::<Message>() {
			Ok(listener) => {
				let attached = listener.add_listener(move |msg, _| match msg {
					Message::LoadDoc { doc_link, .. } => {
						viewer.write().load_document(&doc_link);
					},
					Message::ReloadDoc => {
						viewer.write().reload_requested();
					},
					Message::DocumentOpened => {},
				});
				match attached {
					Ok(handle) => handle.forget(),
					Err(e) => log::error!("[sidebar] Failed to attach the message listener: {e}"),
				}
			},
			Err(e) => log::error!("[sidebar] Failed to get the message listener: {e}"),
		}

		match browser.storage().on_changed() {
			Ok(events) => {
				let attached = events.add_listener(move |changes, area| {
					if area != "local" {
						return;
					}
					if let Some(change) = changes.get(DOC_LINK_KEY) {
						match change.new_value_as_str() {
							Some(link) if !link.is_empty() => {
								viewer.write().load_document(link);
							},
							_ => viewer.write().link_cleared(),
						}
					}
				});
				match attached {
					Ok(handle) => handle.forget(),
					Err(e) => log::error!("[sidebar] Failed to attach the storage listener: {e}"),
				}
			},
			Err(e) => log::error!("[sidebar] Failed to watch storage changes: {e}"),
		}
	});

	let state = viewer();

	rsx! {
		div { class: "relative flex h-screen w-full flex-col bg-gray-50",
			div { class: "flex items-center justify-between border-b border-gray-200 bg-white px-3 py-2",
				span { class: "text-sm font-semibold text-gray-700", "DocPanel" }
				button {
					class: "rounded-md bg-gray-100 px-3 py-1 text-xs font-medium text-gray-600 hover:bg-gray-200",
					onclick: move |_| {
						spawn(reset(viewer));
					},
					"Enter a new link"
				}
			}
			div { class: "relative flex-1",
				match state.frame() {
					FrameContent::Blank => rsx! {
						div { class: "h-full w-full" }
					},
					FrameContent::Url(link) => rsx! {
						iframe {
							key: "{state.generation()}",
							class: "h-full w-full border-0",
							src: "{link}",
							onload: move |_| {
								viewer.write().frame_loaded();
							},
							onerror: move |_| {
								viewer.write().frame_failed();
							},
						}
					},
					FrameContent::Placeholder(text) => rsx! {
						div { class: "flex h-full w-full items-center justify-center px-6 text-center text-sm text-gray-500",
							"{text}"
						}
					},
				}
				match state.overlay() {
					Overlay::Hidden => rsx! {},
					Overlay::Loading => rsx! {
						div { class: "absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 rounded-lg bg-white px-5 py-4 text-sm text-gray-700 shadow-lg",
							"Loading the document\u{2026}"
						}
					},
					Overlay::Notice { text, .. } => rsx! {
						div { class: "absolute left-1/2 top-1/2 w-4/5 -translate-x-1/2 -translate-y-1/2 rounded-lg bg-white px-5 py-4 text-center text-sm text-gray-700 shadow-lg",
							"{text}"
						}
					},
				}
			}
		}
	}
}
