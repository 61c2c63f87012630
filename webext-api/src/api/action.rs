use crate::{
	error::ExtensionError,
	types::BrowserType,
	utils::{call_async_fn, get_api_namespace},
};
use js_sys::{Object, Reflect};

#[derive(Clone)]
pub struct Action {
	api: Object,
}

impl Action {
	pub(crate) fn new(api_root: &Object, browser_type: BrowserType) -> Self {
		let api = match browser_type {
			BrowserType::Firefox => get_api_namespace(api_root, "action").or_else(|_| get_api_namespace(api_root, "browserAction")),
			_ => get_api_namespace(api_root, "action"),
		}
		.expect("Could not find action API namespace");
		Self { api }
	}

	/// Points the action icon's default popup at `path`.
	pub async fn set_popup(&self, path: &str) -> Result<(), ExtensionError> {
		let details = Object::new();
		Reflect::set(&details, &"popup".into(), &path.into())?;
		call_async_fn(&self.api, "setPopup", &[details.into()][..]).await?;
		Ok(())
	}

	/// Programmatically presents the action popup. Hosts may reject this
	/// outside a user gesture; callers treat that as non-fatal.
	pub async fn open_popup(&self) -> Result<(), ExtensionError> {
		call_async_fn(&self.api, "openPopup", &[]).await?;
		Ok(())
	}
}
