use url::Url;

const ALLOWED_DOMAINS: [&str; 4] = ["docs.qq.com", "doc.weixin.qq.com", "feishu.cn", "larksuite.com"];

/// True iff `input` parses as an absolute URL whose hostname contains one of
/// the supported document services. Matching is by containment, not suffix:
/// any subdomain passes, and so does a hostname that merely embeds an allowed
/// domain (`docs.qq.com.attacker.example`). Parse failures are `false`; this
/// never panics.
pub fn is_valid_doc_link(input: &str) -> bool {
	let Ok(url) = Url::parse(input) else {
		return false;
	};
	let Some(host) = url.host_str() else {
		return false;
	};
	ALLOWED_DOMAINS.iter().any(|domain| host.contains(domain))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_each_supported_service() {
		assert!(is_valid_doc_link("https://docs.qq.com/doc/abc123"));
		assert!(is_valid_doc_link("https://doc.weixin.qq.com/doc/w3_m_ABC"));
		assert!(is_valid_doc_link("https://example.feishu.cn/docx/xyz"));
		assert!(is_valid_doc_link("https://example.larksuite.com/docx/xyz"));
	}

	#[test]
	fn accepts_subdomains_and_paths() {
		assert!(is_valid_doc_link("https://www.docs.qq.com/sheet/abc?tab=1"));
		assert!(is_valid_doc_link("https://team.feishu.cn/wiki/ABC#heading"));
	}

	#[test]
	fn rejects_unrelated_hosts() {
		assert!(!is_valid_doc_link("https://evil.com/not-a-doc"));
		assert!(!is_valid_doc_link("https://docs.google.com/document/d/abc"));
		assert!(!is_valid_doc_link("https://qq.com/doc"));
	}

	#[test]
	fn rejects_anything_that_does_not_parse_as_absolute() {
		assert!(!is_valid_doc_link(""));
		assert!(!is_valid_doc_link("docs.qq.com/doc/abc"));
		assert!(!is_valid_doc_link("not a url"));
		assert!(!is_valid_doc_link("https://"));
	}

	#[test]
	fn rejects_hostless_schemes() {
		assert!(!is_valid_doc_link("mailto:user@docs.qq.com"));
	}

	#[test]
	fn accepts_any_host_containing_an_allowed_domain() {
		// Containment matching: an embedded allowed domain is enough.
		assert!(is_valid_doc_link("https://docs.qq.com.attacker.example/doc/abc"));
		assert!(is_valid_doc_link("https://my-feishu.cn/docx/abc"));
	}
}
