pub mod error;
pub mod link;
pub mod messaging;
pub mod panel;
pub mod store;
pub mod viewer;

pub use error::AppError;
pub use link::is_valid_doc_link;
pub use messaging::{Delivery, notify};
pub use store::{LinkStore, StoredLink};

use serde::{Deserialize, Serialize};

/// Packaged page paths, shared by every surface and the manifest.
pub const ENTRY_POPUP_PAGE: &str = "popup.html";
pub const RELOAD_POPUP_PAGE: &str = "reload.html";
pub const SIDEBAR_PAGE: &str = "sidebar.html";

/// The wire schema between surfaces. Tagged by an `action` field so the
/// payload stays readable in the host's message inspector.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Message {
	DocumentOpened,
	#[serde(rename_all = "camelCase")]
	LoadDoc {
		doc_link: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		updated_at: Option<i64>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		source: Option<String>,
	},
	ReloadDoc,
}

impl Message {
	pub fn action(&self) -> &'static str {
		match self {
			Message::DocumentOpened => "documentOpened",
			Message::LoadDoc { .. } => "loadDoc",
			Message::ReloadDoc => "reloadDoc",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_are_tagged_by_action() {
		let json = serde_json::to_value(&Message::DocumentOpened).unwrap();
		assert_eq!(json, serde_json::json!({"action": "documentOpened"}));

		let json = serde_json::to_value(&Message::ReloadDoc).unwrap();
		assert_eq!(json, serde_json::json!({"action": "reloadDoc"}));
	}

	#[test]
	fn load_doc_omits_absent_fields() {
		let msg = Message::LoadDoc { doc_link: "https://docs.qq.com/doc/abc".into(), updated_at: None, source: None };
		assert_eq!(serde_json::to_value(&msg).unwrap(), serde_json::json!({"action": "loadDoc", "docLink": "https://docs.qq.com/doc/abc"}));
	}

	#[test]
	fn load_doc_round_trips_with_source() {
		let json = serde_json::json!({"action": "loadDoc", "docLink": "https://www.feishu.cn/docx/x", "updatedAt": 1700000000000i64, "source": "reload"});
		let msg: Message = serde_json::from_value(json).unwrap();
		assert_eq!(
			msg,
			Message::LoadDoc { doc_link: "https://www.feishu.cn/docx/x".into(), updated_at: Some(1_700_000_000_000), source: Some("reload".into()) }
		);
	}
}
