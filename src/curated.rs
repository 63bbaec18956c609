use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use sha2::{Digest, Sha256};

#[derive(Debug, thiserror::Error)]
pub enum CuratedError {
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("app {app:?}: {field} must be printable ASCII without quotes, non-empty")]
    BadField { app: String, field: &'static str },
    #[error("app {app:?}: U2F key needs exactly one of app_id or app_id_hash")]
    AmbiguousU2fSource { app: String },
    #[error("app {app:?}: bad app_id_hash {value:?} (need 64 hex chars)")]
    BadDigest { app: String, value: String },
    #[error("app {app:?} has no keys")]
    NoKeys { app: String },
    #[error("duplicate app name {0:?}")]
    DuplicateName(String),
    #[error("duplicate rp_id_hash {hash} ({first} / {second})")]
    DuplicateKey {
        hash: String,
        first: String,
        second: String,
    },
}

/// The curated Relying Party list as maintained in `data/apps.json`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CuratedList {
    pub apps: Vec<CuratedApp>,
}

/// One service; may carry several keys (legacy U2F AppIDs, WebAuthn RP IDs).
/// Icon and quirk flags apply to every key of the service.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CuratedApp {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub use_sign_count: Option<bool>,
    #[serde(default)]
    pub use_self_attestation: Option<bool>,
    #[serde(default)]
    pub u2f: Vec<U2fKey>,
    #[serde(default)]
    pub webauthn: Vec<WebauthnKey>,
}

/// Legacy U2F key. The AppID is given either as the URL itself or, when the
/// URL is no longer recoverable, as its SHA-256 digest in hex.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct U2fKey {
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub app_id_hash: Option<String>,
    pub label: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebauthnKey {
    pub rp_id: String,
    /// Display label; defaults to the RP ID.
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    U2f,
    Webauthn,
}

impl KeyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyKind::U2f => "U2F",
            KeyKind::Webauthn => "WebAuthn",
        }
    }
}

/// One table entry resolved from the curated list: hash computed, label
/// defaulted, every field validated.
#[derive(Debug, Clone)]
pub struct ResolvedKey {
    pub rp_id_hash: [u8; 32],
    pub kind: KeyKind,
    pub app_name: String,
    pub label: String,
    pub icon: Option<String>,
    pub use_sign_count: Option<bool>,
    pub use_self_attestation: Option<bool>,
}

pub fn load(path: &Path) -> Result<CuratedList, CuratedError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

impl CuratedList {
    /// Flatten into per-key entries in list order, U2F keys before WebAuthn
    /// keys within a service. Rejects anything that would corrupt the
    /// generated table, duplicate hashes above all.
    pub fn resolve(&self) -> Result<Vec<ResolvedKey>, CuratedError> {
        let mut keys = Vec::new();
        let mut names: HashSet<&str> = HashSet::new();
        let mut seen: HashMap<[u8; 32], String> = HashMap::new();
        for app in &self.apps {
            check_field(&app.name, &app.name, "name")?;
            if let Some(icon) = &app.icon {
                check_field(&app.name, icon, "icon")?;
            }
            if !names.insert(&app.name) {
                return Err(CuratedError::DuplicateName(app.name.clone()));
            }
            if app.u2f.is_empty() && app.webauthn.is_empty() {
                return Err(CuratedError::NoKeys {
                    app: app.name.clone(),
                });
            }
            for key in &app.u2f {
                check_field(&app.name, &key.label, "label")?;
                let rp_id_hash = match (&key.app_id, &key.app_id_hash) {
                    (Some(app_id), None) => {
                        check_field(&app.name, app_id, "app_id")?;
                        Sha256::digest(app_id.as_bytes()).into()
                    }
                    (None, Some(digest)) => parse_digest(&app.name, digest)?,
                    _ => {
                        return Err(CuratedError::AmbiguousU2fSource {
                            app: app.name.clone(),
                        });
                    }
                };
                push_key(&mut keys, &mut seen, app, KeyKind::U2f, rp_id_hash, key.label.clone())?;
            }
            for key in &app.webauthn {
                check_field(&app.name, &key.rp_id, "rp_id")?;
                let label = key.label.clone().unwrap_or_else(|| key.rp_id.clone());
                check_field(&app.name, &label, "label")?;
                let rp_id_hash = Sha256::digest(key.rp_id.as_bytes()).into();
                push_key(&mut keys, &mut seen, app, KeyKind::Webauthn, rp_id_hash, label)?;
            }
        }
        Ok(keys)
    }
}

fn push_key(
    keys: &mut Vec<ResolvedKey>,
    seen: &mut HashMap<[u8; 32], String>,
    app: &CuratedApp,
    kind: KeyKind,
    rp_id_hash: [u8; 32],
    label: String,
) -> Result<(), CuratedError> {
    if let Some(first) = seen.insert(rp_id_hash, app.name.clone()) {
        return Err(CuratedError::DuplicateKey {
            hash: hex::encode(rp_id_hash),
            first,
            second: app.name.clone(),
        });
    }
    keys.push(ResolvedKey {
        rp_id_hash,
        kind,
        app_name: app.name.clone(),
        label,
        icon: app.icon.clone(),
        use_sign_count: app.use_sign_count,
        use_self_attestation: app.use_self_attestation,
    });
    Ok(())
}

fn parse_digest(app: &str, digest: &str) -> Result<[u8; 32], CuratedError> {
    let bad = || CuratedError::BadDigest {
        app: app.to_string(),
        value: digest.to_string(),
    };
    let bytes = hex::decode(digest).map_err(|_| bad())?;
    bytes.as_slice().try_into().map_err(|_| bad())
}

// Values end up verbatim inside the generated source, so keep them to
// printable ASCII and exclude the quote and backslash.
fn check_field(app: &str, value: &str, field: &'static str) -> Result<(), CuratedError> {
    let clean = !value.is_empty()
        && value.bytes().all(|b| (0x20..0x7f).contains(&b))
        && !value.contains('"')
        && !value.contains('\\');
    if clean {
        Ok(())
    } else {
        Err(CuratedError::BadField {
            app: app.to_string(),
            field,
        })
    }
}
