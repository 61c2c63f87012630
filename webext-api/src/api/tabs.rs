use crate::{
	error::ExtensionError,
	types::TabInfo,
	utils::{call_async_fn, get_api_namespace},
};
use js_sys::Object;
use wasm_bindgen::JsCast;

#[derive(Clone)]
pub struct Tabs {
	api: Object,
}

impl Tabs {
	pub(crate) fn new(api_root: &Object) -> Self {
		let api = get_api_namespace(api_root, "tabs").expect("`tabs` API not available");
		Self { api }
	}

	/// The active tab of the last-focused window. Queried from a popup this is
	/// the tab the popup was opened over, not the popup itself.
	pub async fn get_active(&self) -> Result<TabInfo, ExtensionError> {
		let query = Object::new();
		js_sys::Reflect::set(&query, &"active".into(), &true.into())?;
		js_sys::Reflect::set(&query, &"lastFocusedWindow".into(), &true.into())?;
		let tabs = call_async_fn(&self.api, "query", &[query.into()][..]).await?;
		let tabs_array: js_sys::Array = tabs.dyn_into()?;
		if let Some(tab) = tabs_array.iter().next() { serde_wasm_bindgen::from_value(tab).map_err(Into::into) } else { Err(ExtensionError::TabNotFound) }
	}
}
