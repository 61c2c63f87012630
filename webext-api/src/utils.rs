use crate::error::ExtensionError;
use js_sys::{Function, Object, Promise, Reflect};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

pub fn get_api_namespace(root: &JsValue, name: &str) -> Result<Object, ExtensionError> {
	Reflect::get(root, &name.into())
		.map_err(|_| ExtensionError::ApiNotFound(name.to_string()))?
		.dyn_into()
		.map_err(|_| ExtensionError::ApiNotFound(name.to_string()))
}

pub async fn call_async_fn(api: &Object, method: &str, args: &[JsValue]) -> Result<JsValue, ExtensionError> {
	let func: Function = Reflect::get(api, &method.into())?.dyn_into()?;
	let js_args = args.iter().cloned().collect::<js_sys::Array>();
	let promise: Promise = func.apply(&api.into(), &js_args)?.dyn_into()?;
	JsFuture::from(promise).await.map_err(Into::into)
}

pub async fn call_async_fn_and_de<T: DeserializeOwned>(api: &Object, method: &str, args: &[JsValue]) -> Result<T, ExtensionError> {
	let result = call_async_fn(api, method, args).await?;
	serde_wasm_bindgen::from_value(result).map_err(Into::into)
}

/// Invokes `method` in the callback calling convention, bridging the trailing
/// callback into a future. `runtime.lastError` is checked inside the callback,
/// which is the only place the host exposes it.
pub async fn call_callback_fn(api_root: &Object, api: &Object, method: &str, args: &[JsValue]) -> Result<JsValue, ExtensionError> {
	let func: Function = Reflect::get(api, &method.into())?.dyn_into()?;
	let this = JsValue::from(api);

	let promise = Promise::new(&mut |resolve, reject| {
		let callback = {
			let api_root = api_root.clone();
			let reject = reject.clone();
			Closure::once_into_js(move |value: JsValue| {
				match runtime_last_error(&api_root) {
					Some(err) => {
						let _ = reject.call1(&JsValue::UNDEFINED, &err);
					},
					None => {
						let _ = resolve.call1(&JsValue::UNDEFINED, &value);
					},
				}
			})
		};
		let call_args = args.iter().cloned().collect::<js_sys::Array>();
		call_args.push(&callback);
		if let Err(e) = func.apply(&this, &call_args) {
			let _ = reject.call1(&JsValue::UNDEFINED, &e);
		}
	});

	JsFuture::from(promise).await.map_err(Into::into)
}

pub(crate) fn runtime_last_error(api_root: &Object) -> Option<JsValue> {
	let runtime = Reflect::get(api_root, &"runtime".into()).ok()?;
	let err = Reflect::get(&runtime, &"lastError".into()).ok()?;
	if err.is_undefined() || err.is_null() { None } else { Some(err) }
}
