use common::{ENTRY_POPUP_PAGE, LinkStore, Message, RELOAD_POPUP_PAGE};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let browser = match webext_api::init() {
		Ok(b) => b,
		Err(e) => {
			log::error!("[background] Failed to initialize: {e}");
			return;
		},
	};

	// The action popup does not survive a browser restart on its own:
	// reconcile it with whatever the store still holds.
	wasm_bindgen_futures::spawn_local({
		let browser = browser.clone();
		async move {
			let stored = LinkStore::new(&browser).get().await;
			let page = if stored.is_configured() { RELOAD_POPUP_PAGE } else { ENTRY_POPUP_PAGE };
			if let Err(e) = browser.action().set_popup(page).await {
				log::error!("[background] Failed to sync the action popup: {e}");
			}
		}
	});

	let listener = match browser.runtime().on_message::<Message>() {
		Ok(l) => l,
		Err(e) => {
			log::error!("[background] Failed to get listener: {e}");
			return;
		},
	};

	// Once a document has been opened, the next click on the action icon
	// should offer the quick-reopen popup instead of the entry form.
	let attached = listener.add_listener(move |msg, _| {
		if let Message::DocumentOpened = msg {
			let browser = browser.clone();
			wasm_bindgen_futures::spawn_local(async move {
				if let Err(e) = browser.action().set_popup(RELOAD_POPUP_PAGE).await {
					log::error!("[background] Failed to switch the popup: {e}");
				}
			});
		}
	});
	match attached {
		Ok(handle) => handle.forget(),
		Err(e) => log::error!("[background] Failed to attach listener: {e}"),
	}
}
