use crate::data;

/// Display metadata and protocol quirks for one known Relying Party key.
///
/// The two policy fields are tri-state: `Some` overrides the authenticator's
/// default behavior for this RP, `None` leaves it alone. Some RPs reject
/// assertions with a zero signature counter, others reject non-zero ones;
/// likewise a few U2F-era deployments require self-attestation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownApp {
    /// Human-readable name shown instead of the raw RP ID.
    pub label: &'static str,
    /// Bundled icon asset to show, if the service has one.
    pub icon_name: Option<&'static str>,
    pub use_sign_count: Option<bool>,
    pub use_self_attestation: Option<bool>,
}

/// Look up a Relying Party by rpIdHash: the SHA-256 digest of a WebAuthn
/// RP ID, or of the full AppID URL for legacy U2F registrations.
///
/// Slices that are not exactly 32 bytes match nothing. `None` is the common
/// case; callers fall back to displaying the raw RP ID and their default
/// policies.
pub fn lookup(rp_id_hash: &[u8]) -> Option<&'static KnownApp> {
    let hash: &[u8; 32] = rp_id_hash.try_into().ok()?;
    data::KNOWN_APPS
        .iter()
        .find(|(key, _)| key == &hash)
        .map(|(_, app)| app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest_of(s: &str) -> [u8; 32] {
        use sha2::{Digest, Sha256};
        Sha256::digest(s.as_bytes()).into()
    }

    #[test]
    fn test_lookup_webauthn_rp_id() {
        let app = lookup(&digest_of("kraken.com")).expect("kraken.com should be known");
        assert_eq!(app.label, "kraken.com");
        assert_eq!(app.icon_name, Some("kraken"));
        assert_eq!(app.use_sign_count, None);
        assert_eq!(app.use_self_attestation, None);
    }

    #[test]
    fn test_lookup_u2f_app_id() {
        let app = lookup(&digest_of("https://www.gstatic.com/securitykey/origins.json"))
            .expect("Google U2F AppID should be known");
        assert_eq!(app.label, "google.com");
        assert_eq!(app.icon_name, Some("google"));
        assert_eq!(app.use_sign_count, None);
        assert_eq!(app.use_self_attestation, Some(false));
    }

    #[test]
    fn test_lookup_unknown_hash() {
        assert!(lookup(&[0u8; 32]).is_none());
        assert!(lookup(&[0xff; 32]).is_none());
        assert!(lookup(&digest_of("nobody-registered.example")).is_none());
    }

    #[test]
    fn test_lookup_wrong_length() {
        assert!(lookup(&[]).is_none());
        assert!(lookup(&[0x3a; 31]).is_none());
        assert!(lookup(&[0x3a; 33]).is_none());
        // A truncated prefix of a known hash must not match either.
        let github = digest_of("github.com");
        assert!(lookup(&github[..31]).is_none());
    }

    #[test]
    fn test_lookup_is_stable() {
        let hash = digest_of("www.dropbox.com");
        assert_eq!(lookup(&hash), lookup(&hash));
    }

    #[test]
    fn test_table_keys_unique() {
        for (i, (a, _)) in data::KNOWN_APPS.iter().enumerate() {
            for (b, _) in &data::KNOWN_APPS[i + 1..] {
                assert_ne!(a, b, "duplicate rp_id_hash in generated table");
            }
        }
    }

    #[test]
    fn test_table_well_formed() {
        for (_, app) in data::KNOWN_APPS {
            assert!(!app.label.is_empty());
            if let Some(icon) = app.icon_name {
                assert!(!icon.is_empty());
            }
        }
    }
}
