use thiserror::Error;

/// Shown whenever the host refuses to open the panel, whatever the cause.
pub const PANEL_REMEDIATION: &str = "To open the side panel:\n\
	- enable side panel display for this extension in the browser's extension settings\n\
	- click the browser's side panel icon once so it registers this extension's panel\n\
	- check that your browser version supports the side panel API";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
	#[error("Please enter a document link.")]
	EmptyLink,

	#[error("Please enter a valid Tencent Docs or Feishu document link.")]
	InvalidLink,

	#[error("This browser does not expose a side panel API.\n{hint}", hint = PANEL_REMEDIATION)]
	PanelUnavailable,

	#[error("The side panel could not be opened: {0}\n{hint}", hint = PANEL_REMEDIATION)]
	PanelOpenFailed(String),

	#[error("Saving the document link failed: {0}")]
	Storage(String),

	#[error("An internal extension error occurred: {0}")]
	Extension(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn panel_failures_carry_the_remediation_hint() {
		for err in [AppError::PanelUnavailable, AppError::PanelOpenFailed("no matching signature".into())] {
			assert!(err.to_string().contains("side panel icon once"));
		}
		assert!(AppError::PanelOpenFailed("no matching signature".into()).to_string().contains("no matching signature"));
	}

	#[test]
	fn validation_errors_stay_inline_sized() {
		assert!(!AppError::EmptyLink.to_string().contains('\n'));
		assert!(!AppError::InvalidLink.to_string().contains('\n'));
	}
}
