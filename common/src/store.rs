use crate::AppError;
use serde::{Deserialize, Serialize};
use webext_api::{Browser, api::StorageArea};

pub const DOC_LINK_KEY: &str = "docLink";
pub const UPDATED_AT_KEY: &str = "updatedAt";

/// The one persisted record. An empty `doc_link` means no link is configured.
/// `updated_at` is stamped on every write and used for diagnostics only.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredLink {
	pub doc_link: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub updated_at: Option<i64>,
}

impl StoredLink {
	pub fn is_configured(&self) -> bool {
		!self.doc_link.is_empty()
	}
}

/// Wrapper over `storage.local` holding the stored link under fixed keys.
/// Validation happens before `set` is called, never here.
#[derive(Clone)]
pub struct LinkStore {
	area: StorageArea,
}

impl LinkStore {
	pub fn new(browser: &Browser) -> Self {
		Self { area: browser.storage().local() }
	}

	/// Never fails: an unreadable record degrades to "nothing stored".
	pub async fn get(&self) -> StoredLink {
		match self.area.get(&[DOC_LINK_KEY, UPDATED_AT_KEY]).await {
			Ok(stored) => stored,
			Err(e) => {
				log::warn!("reading the stored link failed: {e}");
				StoredLink::default()
			},
		}
	}

	/// Overwrites both fields in a single write and returns what was stored.
	pub async fn set(&self, doc_link: &str) -> Result<StoredLink, AppError> {
		let stored = StoredLink { doc_link: doc_link.to_string(), updated_at: Some(chrono::Utc::now().timestamp_millis()) };
		self.area.set(&stored).await.map_err(|e| AppError::Storage(e.to_string()))?;
		Ok(stored)
	}

	/// Removes both fields; the viewer's empty state takes over from here.
	pub async fn clear(&self) -> Result<(), AppError> {
		self.area.remove(&[DOC_LINK_KEY, UPDATED_AT_KEY]).await.map_err(|e| AppError::Storage(e.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn serializes_under_the_fixed_keys() {
		let stored = StoredLink { doc_link: "https://docs.qq.com/doc/abc".into(), updated_at: Some(1_700_000_000_000) };
		assert_eq!(
			serde_json::to_value(&stored).unwrap(),
			serde_json::json!({"docLink": "https://docs.qq.com/doc/abc", "updatedAt": 1_700_000_000_000i64})
		);
	}

	#[test]
	fn missing_fields_read_as_unconfigured() {
		let stored: StoredLink = serde_json::from_value(serde_json::json!({})).unwrap();
		assert_eq!(stored, StoredLink::default());
		assert!(!stored.is_configured());
	}

	#[test]
	fn timestamp_is_omitted_when_absent() {
		let stored = StoredLink { doc_link: "https://docs.qq.com/doc/abc".into(), updated_at: None };
		assert_eq!(serde_json::to_value(&stored).unwrap(), serde_json::json!({"docLink": "https://docs.qq.com/doc/abc"}));
	}
}
