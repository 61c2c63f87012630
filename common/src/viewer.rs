use crate::StoredLink;

pub const NO_LINK_NOTICE: &str = "No document link is configured yet. Open the extension popup and enter one.";
pub const LOAD_FAILED_NOTICE: &str =
	"The document failed to load. Check that the link is correct, that the owner allows embedding, and that third-party cookies are not blocked.";
pub const RESETTING_NOTICE: &str = "Clearing the stored link\u{2026}";
pub const RESET_FAILED_NOTICE: &str = "Resetting failed. Press the button again or clear the link from the popup.";
pub const NEW_LINK_PROMPT: &str = "Enter a new document link in the popup\u{2026}";

/// What the embedded frame is showing: nothing, a document by reference, or
/// an inline placeholder page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameContent {
	Blank,
	Url(String),
	Placeholder(&'static str),
}

/// The status layer above the frame. Sticky notices survive frame load
/// events and stay up until another transition replaces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
	Hidden,
	Loading,
	Notice { text: &'static str, sticky: bool },
}

/// All sidebar state, explicit and shared-nothing: two independent producers
/// (messages and storage-change events) may feed [`ViewerState::load_document`]
/// in any order, or only one of them, and converge on the same state.
///
/// `generation` is the identity of the frame element; bumping it forces a
/// fresh navigation even when the URL text is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
	current_link: String,
	frame: FrameContent,
	overlay: Overlay,
	generation: u32,
}

impl Default for ViewerState {
	fn default() -> Self {
		Self { current_link: String::new(), frame: FrameContent::Blank, overlay: Overlay::Hidden, generation: 0 }
	}
}

impl ViewerState {
	pub fn init(stored: &StoredLink) -> Self {
		let mut state = Self::default();
		if stored.is_configured() {
			state.load_document(&stored.doc_link);
		} else {
			state.overlay = Overlay::Notice { text: NO_LINK_NOTICE, sticky: true };
		}
		state
	}

	pub fn current_link(&self) -> &str {
		&self.current_link
	}

	pub fn frame(&self) -> &FrameContent {
		&self.frame
	}

	pub fn overlay(&self) -> &Overlay {
		&self.overlay
	}

	pub fn generation(&self) -> u32 {
		self.generation
	}

	/// Idempotent: a link the frame is already pointed at is a no-op, so the
	/// duplicate of a message/storage-change pair causes no overlay flash and
	/// no second navigation. Returns whether anything changed.
	pub fn load_document(&mut self, link: &str) -> bool {
		if link.is_empty() {
			return false;
		}
		if self.current_link == link && self.frame == FrameContent::Url(link.to_string()) {
			return false;
		}
		self.current_link = link.to_string();
		self.frame = FrameContent::Url(link.to_string());
		self.overlay = Overlay::Loading;
		self.generation = self.generation.wrapping_add(1);
		true
	}

	/// Storage-change with the link removed: some surface reset the
	/// extension, possibly this one.
	pub fn link_cleared(&mut self) {
		self.current_link.clear();
		self.frame = FrameContent::Placeholder(NEW_LINK_PROMPT);
		self.overlay = Overlay::Notice { text: NO_LINK_NOTICE, sticky: true };
	}

	pub fn frame_loaded(&mut self) {
		if !matches!(self.overlay, Overlay::Notice { sticky: true, .. }) {
			self.overlay = Overlay::Hidden;
		}
	}

	pub fn frame_failed(&mut self) {
		self.overlay = Overlay::Notice { text: LOAD_FAILED_NOTICE, sticky: true };
		self.frame = FrameContent::Placeholder(LOAD_FAILED_NOTICE);
	}

	/// Forces the frame to renavigate to its current document. Returns
	/// whether there was a document to reload.
	pub fn reload_requested(&mut self) -> bool {
		if matches!(self.frame, FrameContent::Url(_)) {
			self.overlay = Overlay::Loading;
			self.generation = self.generation.wrapping_add(1);
			true
		} else {
			false
		}
	}

	pub fn begin_reset(&mut self) {
		self.current_link.clear();
		self.frame = FrameContent::Placeholder(NEW_LINK_PROMPT);
		self.overlay = Overlay::Notice { text: RESETTING_NOTICE, sticky: true };
	}

	pub fn reset_complete(&mut self) {
		self.overlay = Overlay::Notice { text: NO_LINK_NOTICE, sticky: true };
	}

	pub fn reset_failed(&mut self) {
		self.overlay = Overlay::Notice { text: RESET_FAILED_NOTICE, sticky: true };
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const LINK: &str = "https://docs.qq.com/doc/abc123";
	const OTHER: &str = "https://example.feishu.cn/docx/xyz";

	fn loaded(link: &str) -> ViewerState {
		let mut state = ViewerState::default();
		state.load_document(link);
		state.frame_loaded();
		state
	}

	#[test]
	fn init_without_a_link_shows_the_empty_state() {
		let state = ViewerState::init(&StoredLink::default());
		assert_eq!(state.frame(), &FrameContent::Blank);
		assert_eq!(state.overlay(), &Overlay::Notice { text: NO_LINK_NOTICE, sticky: true });
	}

	#[test]
	fn init_with_a_link_starts_loading_it() {
		let state = ViewerState::init(&StoredLink { doc_link: LINK.into(), updated_at: Some(1) });
		assert_eq!(state.frame(), &FrameContent::Url(LINK.into()));
		assert_eq!(state.overlay(), &Overlay::Loading);
	}

	#[test]
	fn load_document_is_idempotent() {
		let mut state = loaded(LINK);
		let generation = state.generation();
		assert!(!state.load_document(LINK));
		assert_eq!(state.generation(), generation);
		assert_eq!(state.overlay(), &Overlay::Hidden);
	}

	#[test]
	fn duplicate_triggers_converge_to_one_navigation() {
		// The fast path (message) and the durable path (storage change) may
		// both arrive, in either order; only the first one navigates.
		let mut state = ViewerState::default();
		assert!(state.load_document(LINK));
		let generation = state.generation();
		assert!(!state.load_document(LINK));
		assert_eq!(state.generation(), generation);
		assert_eq!(state.current_link(), LINK);
	}

	#[test]
	fn switching_links_navigates_and_shows_loading() {
		let mut state = loaded(LINK);
		let generation = state.generation();
		assert!(state.load_document(OTHER));
		assert_eq!(state.generation(), generation + 1);
		assert_eq!(state.frame(), &FrameContent::Url(OTHER.into()));
		assert_eq!(state.overlay(), &Overlay::Loading);
	}

	#[test]
	fn empty_link_is_ignored() {
		let mut state = loaded(LINK);
		assert!(!state.load_document(""));
		assert_eq!(state.current_link(), LINK);
	}

	#[test]
	fn frame_load_clears_the_transient_overlay() {
		let mut state = ViewerState::default();
		state.load_document(LINK);
		state.frame_loaded();
		assert_eq!(state.overlay(), &Overlay::Hidden);
	}

	#[test]
	fn sticky_notices_survive_frame_load() {
		let mut state = ViewerState::default();
		state.frame_failed();
		state.frame_loaded();
		assert_eq!(state.overlay(), &Overlay::Notice { text: LOAD_FAILED_NOTICE, sticky: true });
	}

	#[test]
	fn frame_failure_swaps_in_the_placeholder() {
		let mut state = ViewerState::default();
		state.load_document(LINK);
		state.frame_failed();
		assert_eq!(state.frame(), &FrameContent::Placeholder(LOAD_FAILED_NOTICE));
	}

	#[test]
	fn recovery_after_failure_loads_the_new_link() {
		let mut state = ViewerState::default();
		state.load_document(LINK);
		state.frame_failed();
		assert!(state.load_document(OTHER));
		assert_eq!(state.frame(), &FrameContent::Url(OTHER.into()));
		assert_eq!(state.overlay(), &Overlay::Loading);
	}

	#[test]
	fn reload_renavigates_only_when_a_document_is_shown() {
		let mut state = loaded(LINK);
		let generation = state.generation();
		assert!(state.reload_requested());
		assert_eq!(state.generation(), generation + 1);

		let mut empty = ViewerState::init(&StoredLink::default());
		assert!(!empty.reload_requested());
	}

	#[test]
	fn reset_walks_through_notice_to_empty_state() {
		let mut state = loaded(LINK);
		state.begin_reset();
		assert_eq!(state.overlay(), &Overlay::Notice { text: RESETTING_NOTICE, sticky: true });
		assert_eq!(state.frame(), &FrameContent::Placeholder(NEW_LINK_PROMPT));
		assert_eq!(state.current_link(), "");

		state.reset_complete();
		assert_eq!(state.overlay(), &Overlay::Notice { text: NO_LINK_NOTICE, sticky: true });
	}

	#[test]
	fn failed_reset_asks_for_a_manual_retry() {
		let mut state = loaded(LINK);
		state.begin_reset();
		state.reset_failed();
		assert_eq!(state.overlay(), &Overlay::Notice { text: RESET_FAILED_NOTICE, sticky: true });
	}

	#[test]
	fn storage_clear_from_another_surface_empties_the_viewer() {
		let mut state = loaded(LINK);
		state.link_cleared();
		assert_eq!(state.current_link(), "");
		assert_eq!(state.frame(), &FrameContent::Placeholder(NEW_LINK_PROMPT));
		assert_eq!(state.overlay(), &Overlay::Notice { text: NO_LINK_NOTICE, sticky: true });
	}
}
