use crate::{
	error::ExtensionError,
	types::BrowserType,
	utils::{call_async_fn, call_callback_fn, get_api_namespace},
};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

/// Where a panel call should be scoped. Resolved fresh for every open attempt
/// from the active tab; never cached.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PanelTarget {
	pub tab_id: Option<u32>,
	pub window_id: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelScope {
	Tab(u32),
	Window(u32),
	Unscoped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallStyle {
	Promise,
	Callback,
}

/// Argument variants for `sidePanel.setOptions`, most specific first. Each
/// variant is tried promise-style before callback-style; the first call that
/// resolves wins.
fn configure_attempts(target: PanelTarget) -> Vec<(PanelScope, CallStyle)> {
	let mut scopes = Vec::new();
	if let Some(id) = target.tab_id {
		scopes.push(PanelScope::Tab(id));
	}
	scopes.push(PanelScope::Unscoped);
	with_styles(scopes)
}

/// Argument variants for `sidePanel.open`: tab-scoped, then window-scoped,
/// then no argument at all.
fn open_attempts(target: PanelTarget) -> Vec<(PanelScope, CallStyle)> {
	let mut scopes = Vec::new();
	if let Some(id) = target.tab_id {
		scopes.push(PanelScope::Tab(id));
	}
	if let Some(id) = target.window_id {
		scopes.push(PanelScope::Window(id));
	}
	scopes.push(PanelScope::Unscoped);
	with_styles(scopes)
}

fn with_styles(scopes: Vec<PanelScope>) -> Vec<(PanelScope, CallStyle)> {
	scopes.into_iter().flat_map(|scope| [(scope, CallStyle::Promise), (scope, CallStyle::Callback)]).collect()
}

#[derive(Clone)]
pub struct SidePanel {
	api_root: Object,
	browser_type: BrowserType,
}

impl SidePanel {
	pub(crate) fn new(api_root: &Object, browser_type: BrowserType) -> Self {
		Self { api_root: api_root.clone(), browser_type }
	}

	/// Enables the panel and points it at `path`. Hosts disagree on whether
	/// `setOptions` takes a tab scope and whether it returns a promise, so the
	/// argument variants are exhausted in priority order.
	pub async fn configure(&self, path: &str, target: PanelTarget) -> Result<(), ExtensionError> {
		match self.browser_type {
			BrowserType::Chrome => {
				let api = get_api_namespace(&self.api_root, "sidePanel")?;
				self
					.exhaust(&api, "setOptions", configure_attempts(target), |scope| {
						let options = Object::new();
						Reflect::set(&options, &"enabled".into(), &true.into())?;
						Reflect::set(&options, &"path".into(), &path.into())?;
						if let PanelScope::Tab(id) = scope {
							Reflect::set(&options, &"tabId".into(), &id.into())?;
						}
						Ok(Some(options))
					})
					.await
			},
			BrowserType::Firefox => {
				let api = get_api_namespace(&self.api_root, "sidebarAction")?;
				let options = Object::new();
				Reflect::set(&options, &"panel".into(), &path.into())?;
				call_async_fn(&api, "setPanel", &[options.into()][..]).await?;
				Ok(())
			},
		}
	}

	/// Makes the panel visible. Same variant exhaustion as [`Self::configure`],
	/// with a window-scoped shape between the tab-scoped and bare forms.
	pub async fn open(&self, target: PanelTarget) -> Result<(), ExtensionError> {
		match self.browser_type {
			BrowserType::Chrome => {
				let api = get_api_namespace(&self.api_root, "sidePanel")?;
				self
					.exhaust(&api, "open", open_attempts(target), |scope| match scope {
						PanelScope::Tab(id) => {
							let options = Object::new();
							Reflect::set(&options, &"tabId".into(), &id.into())?;
							Ok(Some(options))
						},
						PanelScope::Window(id) => {
							let options = Object::new();
							Reflect::set(&options, &"windowId".into(), &id.into())?;
							Ok(Some(options))
						},
						PanelScope::Unscoped => Ok(None),
					})
					.await
			},
			BrowserType::Firefox => {
				let api = get_api_namespace(&self.api_root, "sidebarAction")?;
				call_async_fn(&api, "open", &[][..]).await?;
				Ok(())
			},
		}
	}

	async fn exhaust(
		&self,
		api: &Object,
		method: &str,
		attempts: Vec<(PanelScope, CallStyle)>,
		build: impl Fn(PanelScope) -> Result<Option<Object>, ExtensionError>,
	) -> Result<(), ExtensionError> {
		let mut last_err = ExtensionError::ApiNotFound(method.to_string());
		for (scope, style) in attempts {
			let args: Vec<JsValue> = match build(scope)? {
				Some(options) => vec![options.into()],
				None => Vec::new(),
			};
			let result = match style {
				CallStyle::Promise => call_async_fn(api, method, &args).await,
				CallStyle::Callback => call_callback_fn(&self.api_root, api, method, &args).await,
			};
			match result {
				Ok(_) => return Ok(()),
				Err(e) => last_err = e,
			}
		}
		Err(last_err)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TARGET: PanelTarget = PanelTarget { tab_id: Some(7), window_id: Some(3) };

	#[test]
	fn configure_tries_tab_scope_before_unscoped() {
		let attempts = configure_attempts(TARGET);
		assert_eq!(
			attempts,
			vec![
				(PanelScope::Tab(7), CallStyle::Promise),
				(PanelScope::Tab(7), CallStyle::Callback),
				(PanelScope::Unscoped, CallStyle::Promise),
				(PanelScope::Unscoped, CallStyle::Callback),
			]
		);
	}

	#[test]
	fn configure_without_tab_is_unscoped_only() {
		let attempts = configure_attempts(PanelTarget::default());
		assert_eq!(attempts, vec![(PanelScope::Unscoped, CallStyle::Promise), (PanelScope::Unscoped, CallStyle::Callback)]);
	}

	#[test]
	fn open_tries_tab_then_window_then_bare() {
		let scopes: Vec<PanelScope> = open_attempts(TARGET).into_iter().map(|(scope, _)| scope).collect();
		assert_eq!(
			scopes,
			vec![PanelScope::Tab(7), PanelScope::Tab(7), PanelScope::Window(3), PanelScope::Window(3), PanelScope::Unscoped, PanelScope::Unscoped]
		);
	}

	#[test]
	fn promise_style_precedes_callback_style_within_each_scope() {
		for attempts in [configure_attempts(TARGET), open_attempts(TARGET)] {
			for pair in attempts.chunks(2) {
				assert_eq!(pair[0].0, pair[1].0);
				assert_eq!(pair[0].1, CallStyle::Promise);
				assert_eq!(pair[1].1, CallStyle::Callback);
			}
		}
	}

	#[test]
	fn open_without_window_still_ends_bare() {
		let attempts = open_attempts(PanelTarget { tab_id: None, window_id: None });
		assert_eq!(attempts, vec![(PanelScope::Unscoped, CallStyle::Promise), (PanelScope::Unscoped, CallStyle::Callback)]);
	}
}
