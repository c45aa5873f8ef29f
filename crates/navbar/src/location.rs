//! The address field and its read-only "pretty" rendering.

use omnibox::{has_dat_key_prefix, pretty_hash};
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtocolClass {
    Plain,
    Secure,
    PeerToPeer,
}

/// How the address is shown while the field is not being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrettyLocation {
    /// Not a url we split up; shown as typed.
    Raw(String),
    Parts {
        /// Scheme without the trailing `:`.
        protocol: String,
        class: ProtocolClass,
        host: String,
        /// Path, query and fragment.
        path: String,
    },
}

pub fn pretty_location(value: &str) -> PrettyLocation {
    let splittable = ["dat:", "http:", "https:"]
        .iter()
        .any(|scheme| value.starts_with(scheme));
    if !splittable {
        return PrettyLocation::Raw(value.to_string());
    }

    // invalid url, show it as typed
    let Ok(url) = Url::parse(value) else {
        return PrettyLocation::Raw(value.to_string());
    };
    let Some(host) = url.host_str() else {
        return PrettyLocation::Raw(value.to_string());
    };

    let protocol = url.scheme().to_string();
    let mut host = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };
    if protocol == "dat" && has_dat_key_prefix(&host) {
        host = pretty_hash(&host);
    }

    let class = match protocol.as_str() {
        "https" | "beaker" => ProtocolClass::Secure,
        "dat" => ProtocolClass::PeerToPeer,
        _ => ProtocolClass::Plain,
    };

    let mut path = url.path().to_string();
    if let Some(query) = url.query() {
        path.push('?');
        path.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        path.push('#');
        path.push_str(fragment);
    }

    PrettyLocation::Parts {
        protocol,
        class,
        host,
        path,
    }
}

/// Text and focus state of the address input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationField {
    pub value: String,
    pub focused: bool,
    /// Select the whole value on the next frame.
    pub select_all: bool,
    /// Focus was lost while the pointer was down; the blur is applied on
    /// release so a dropdown click lands first.
    pub blur_deferred: bool,
}

impl LocationField {
    pub fn focus(&mut self) {
        self.focused = true;
        self.select_all = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.select_all = false;
        self.blur_deferred = false;
    }

    /// Copies the page's url into the field unless the user is editing it.
    ///
    /// Returns `true` if the value was replaced.
    pub fn sync_from_page(&mut self, intended_url: &str) -> bool {
        if self.focused && !self.value.is_empty() {
            return false;
        }
        if self.value != intended_url {
            self.value = intended_url.to_string();
        }
        if self.focused {
            self.select_all = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(value: &str) -> (String, ProtocolClass, String, String) {
        match pretty_location(value) {
            PrettyLocation::Parts {
                protocol,
                class,
                host,
                path,
            } => (protocol, class, host, path),
            PrettyLocation::Raw(raw) => panic!("{value:?} rendered raw: {raw:?}"),
        }
    }

    #[test]
    fn splits_https_urls() {
        let (protocol, class, host, path) = parts("https://example.com:8443/a/b?x=1#top");
        assert_eq!(protocol, "https");
        assert_eq!(class, ProtocolClass::Secure);
        assert_eq!(host, "example.com:8443");
        assert_eq!(path, "/a/b?x=1#top");
    }

    #[test]
    fn http_is_plain() {
        let (_, class, host, path) = parts("http://example.com");
        assert_eq!(class, ProtocolClass::Plain);
        assert_eq!(host, "example.com");
        assert_eq!(path, "/");
    }

    #[test]
    fn dat_keys_are_abbreviated() {
        let key = format!("abcdef{}89", "0".repeat(56));
        let (protocol, class, host, path) = parts(&format!("dat://{key}/index.html"));
        assert_eq!(protocol, "dat");
        assert_eq!(class, ProtocolClass::PeerToPeer);
        assert_eq!(host, "abcdef..89");
        assert_eq!(path, "/index.html");
    }

    #[test]
    fn other_values_render_raw() {
        assert_eq!(
            pretty_location("beaker:settings"),
            PrettyLocation::Raw("beaker:settings".into())
        );
        assert_eq!(
            pretty_location("hello world"),
            PrettyLocation::Raw("hello world".into())
        );
        assert_eq!(
            pretty_location("http://[::1"),
            PrettyLocation::Raw("http://[::1".into())
        );
    }

    #[test]
    fn sync_respects_user_edits() {
        let mut field = LocationField::default();
        assert!(field.sync_from_page("https://a.test/"));
        assert_eq!(field.value, "https://a.test/");

        field.focus();
        field.select_all = false;
        field.value = "typed".into();
        assert!(!field.sync_from_page("https://b.test/"));
        assert_eq!(field.value, "typed");

        field.value.clear();
        assert!(field.sync_from_page("https://b.test/"));
        assert_eq!(field.value, "https://b.test/");
        assert!(field.select_all);
    }
}
