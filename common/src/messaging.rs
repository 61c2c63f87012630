use crate::Message;
use webext_api::Browser;

/// Substring the host puts in the rejection when nobody is listening.
const NO_RECEIVER_MARKER: &str = "Receiving end does not exist";

/// Outcome of a best-effort send. `NoReceiver` is an expected condition, not
/// a failure: the sidebar is simply not open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
	Delivered,
	NoReceiver,
	Failed(String),
}

pub fn classify_send_error(message: &str) -> Delivery {
	if message.contains(NO_RECEIVER_MARKER) { Delivery::NoReceiver } else { Delivery::Failed(message.to_string()) }
}

/// Fire-and-forget notification. Awaited so ordering within one user action
/// holds, but no failure here ever reaches the user or stops the caller's
/// remaining steps.
pub async fn notify(browser: &Browser, message: &Message) -> Delivery {
	match browser.runtime().send_message::<_, ()>(message).await {
		Ok(()) => Delivery::Delivered,
		Err(e) => {
			let outcome = classify_send_error(&e.to_string());
			match &outcome {
				Delivery::NoReceiver => log::debug!("no receiver for `{}`", message.action()),
				Delivery::Failed(reason) => log::warn!("sending `{}` failed: {reason}", message.action()),
				Delivery::Delivered => {},
			}
			outcome
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_receiver_is_not_a_failure() {
		let outcome = classify_send_error("The browser API returned an error: Could not establish connection. Receiving end does not exist.");
		assert_eq!(outcome, Delivery::NoReceiver);
	}

	#[test]
	fn anything_else_is_reported_as_failed() {
		let outcome = classify_send_error("The message port closed before a response was received.");
		assert_eq!(outcome, Delivery::Failed("The message port closed before a response was received.".into()));
	}
}
