use crate::{
	error::ExtensionError,
	types::{ListenerHandle, StorageChange, attach_listener},
	utils::{call_async_fn, get_api_namespace},
};
use js_sys::Object;
use serde::{Serialize, de::DeserializeOwned};
use serde_wasm_bindgen::to_value;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

#[derive(Clone)]
pub struct Storage {
	api: Object,
}

impl Storage {
	pub(crate) fn new(api_root: &Object) -> Self {
		let api = get_api_namespace(api_root, "storage").expect("`storage` API not available");
		Self { api }
	}

	pub fn local(&self) -> StorageArea {
		let local_api = get_api_namespace(&self.api, "local").expect("`storage.local` API not available");
		StorageArea { api: local_api }
	}

	pub fn on_changed(&self) -> Result<OnStorageChanged, ExtensionError> {
		Ok(OnStorageChanged(get_api_namespace(&self.api, "onChanged")?))
	}
}

#[derive(Clone)]
pub struct StorageArea {
	api: Object,
}

impl StorageArea {
	/// Reads `keys` and deserializes the returned record as one value, so a
	/// multi-field struct with `#[serde(default)]` fields reads atomically.
	pub async fn get<T: DeserializeOwned>(&self, keys: &[&str]) -> Result<T, ExtensionError> {
		let key_list = keys.iter().map(|k| JsValue::from_str(k)).collect::<js_sys::Array>();
		let result = call_async_fn(&self.api, "get", &[key_list.into()][..]).await?;
		serde_wasm_bindgen::from_value(result).map_err(Into::into)
	}

	/// Writes every field of `items` in a single `set` call.
	pub async fn set<T: Serialize>(&self, items: &T) -> Result<(), ExtensionError> {
		call_async_fn(&self.api, "set", &[to_value(items)?][..]).await?;
		Ok(())
	}

	pub async fn remove(&self, keys: &[&str]) -> Result<(), ExtensionError> {
		let key_list = keys.iter().map(|k| JsValue::from_str(k)).collect::<js_sys::Array>();
		call_async_fn(&self.api, "remove", &[key_list.into()][..]).await?;
		Ok(())
	}
}

pub struct OnStorageChanged(Object);

impl OnStorageChanged {
	/// Callback receives the per-key change records and the area name
	/// (`"local"`, `"sync"`, ...).
	pub fn add_listener(
		&self,
		mut callback: impl FnMut(HashMap<String, StorageChange>, String) + 'static,
	) -> Result<ListenerHandle<dyn FnMut(JsValue, JsValue)>, ExtensionError> {
		attach_listener(
			&self.0,
			Closure::wrap(Box::new(move |changes: JsValue, area: JsValue| {
				if let (Ok(changes), Some(area)) = (serde_wasm_bindgen::from_value(changes), area.as_string()) {
					callback(changes, area);
				}
			}) as Box<dyn FnMut(JsValue, JsValue)>),
		)
	}
}
