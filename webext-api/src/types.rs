use crate::error::ExtensionError;
use js_sys::{Function, Object};
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, prelude::*};

pub struct ListenerHandle<T: ?Sized> {
	target: Object,
	closure: Closure<T>,
}

impl<T: ?Sized> Drop for ListenerHandle<T> {
	fn drop(&mut self) {
		if let Ok(remove_listener_fn) = js_sys::Reflect::get(&self.target, &"removeListener".into()).and_then(|v| v.dyn_into::<Function>()) {
			let _ = remove_listener_fn.call1(&self.target, self.closure.as_ref());
		}
	}
}

impl<T: ?Sized> ListenerHandle<T> {
	/// Leaves the listener attached for the lifetime of the page.
	pub fn forget(self) {
		let _ = std::mem::ManuallyDrop::new(self);
	}
}

pub(crate) fn attach_listener<T: ?Sized + 'static>(target: &Object, closure: Closure<T>) -> Result<ListenerHandle<T>, ExtensionError> {
	let add_listener_fn: Function =
		js_sys::Reflect::get(target, &"addListener".into())?.dyn_into().map_err(|_| ExtensionError::ApiNotFound("addListener".to_string()))?;
	add_listener_fn.call1(target, closure.as_ref())?;
	Ok(ListenerHandle { target: target.clone(), closure })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowserType {
	Chrome,
	Firefox,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
	pub id: Option<u32>,
	pub title: Option<String>,
	pub url: Option<String>,
	pub active: bool,
	pub window_id: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSender {
	pub id: Option<String>,
	pub url: Option<String>,
	pub tab: Option<TabInfo>,
}

/// One entry of a `storage.onChanged` event, keyed by the storage key that changed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageChange {
	#[serde(default)]
	pub old_value: Option<serde_json::Value>,
	#[serde(default)]
	pub new_value: Option<serde_json::Value>,
}

impl StorageChange {
	pub fn new_value_as_str(&self) -> Option<&str> {
		self.new_value.as_ref().and_then(|v| v.as_str())
	}
}
