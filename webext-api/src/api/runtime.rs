use crate::{
	error::ExtensionError,
	types::{ListenerHandle, MessageSender, attach_listener},
	utils::{call_async_fn_and_de, get_api_namespace},
};
use js_sys::Object;
use serde::{Serialize, de::DeserializeOwned};
use serde_wasm_bindgen::to_value;
use std::marker::PhantomData;
use wasm_bindgen::{JsValue, prelude::*};

#[derive(Clone)]
pub struct Runtime {
	api: Object,
}

impl Runtime {
	pub(crate) fn new(api_root: &Object) -> Self {
		let api = get_api_namespace(api_root, "runtime").expect("`runtime` API not available");
		Self { api }
	}

	/// Delivery is at-most-once: the returned future rejects when no listener
	/// is attached on the other side, and callers decide what that means.
	pub async fn send_message<M: Serialize, R: DeserializeOwned>(&self, message: &M) -> Result<R, ExtensionError> {
		call_async_fn_and_de(&self.api, "sendMessage", &[to_value(message)?][..]).await
	}

	pub fn on_message<T: DeserializeOwned + 'static>(&self) -> Result<OnMessage<T>, ExtensionError> {
		Ok(OnMessage::new(get_api_namespace(&self.api, "onMessage")?))
	}
}

pub struct OnMessage<T: DeserializeOwned + 'static> {
	api: Object,
	_phantom: PhantomData<T>,
}

impl<T: DeserializeOwned + 'static> OnMessage<T> {
	fn new(api: Object) -> Self {
		Self { api, _phantom: PhantomData }
	}

	pub fn add_listener(
		&self,
		mut callback: impl FnMut(T, MessageSender) + 'static,
	) -> Result<ListenerHandle<dyn FnMut(JsValue, JsValue, JsValue)>, ExtensionError> {
		attach_listener(
			&self.api,
			Closure::wrap(Box::new(move |message, sender, _| {
				if let (Ok(msg), Ok(sender)) = (serde_wasm_bindgen::from_value(message), serde_wasm_bindgen::from_value(sender)) {
					callback(msg, sender);
				}
			}) as Box<dyn FnMut(JsValue, JsValue, JsValue)>),
		)
	}
}
