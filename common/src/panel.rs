use crate::{AppError, SIDEBAR_PAGE};
use webext_api::{Browser, api::PanelTarget, error::ExtensionError};

/// Enables the side panel, points it at the sidebar page and makes it
/// visible. The target is resolved fresh from the active tab of the
/// last-focused window; a missing tab only loses the scoping, not the open.
/// By the time this runs the link is already persisted, so every failure
/// leaves a retryable state behind.
pub async fn open_viewer_panel(browser: &Browser) -> Result<(), AppError> {
	let target = match browser.tabs().get_active().await {
		Ok(tab) => PanelTarget { tab_id: tab.id, window_id: Some(tab.window_id) },
		Err(e) => {
			log::debug!("no active tab to scope the panel to: {e}");
			PanelTarget::default()
		},
	};

	let panel = browser.side_panel();
	panel.configure(SIDEBAR_PAGE, target).await.map_err(panel_error)?;
	panel.open(target).await.map_err(panel_error)?;
	Ok(())
}

fn panel_error(e: ExtensionError) -> AppError {
	match e {
		ExtensionError::ApiNotFound(_) => AppError::PanelUnavailable,
		other => AppError::PanelOpenFailed(other.to_string()),
	}
}
