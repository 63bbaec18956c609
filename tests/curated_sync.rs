use std::path::Path;

use fido_knownapps::curated::{self, ResolvedKey};
use fido_knownapps::{codegen, lookup};

fn resolved_keys() -> Vec<ResolvedKey> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/apps.json");
    let list = curated::load(&path).expect("data/apps.json must parse");
    list.resolve().expect("data/apps.json must validate")
}

#[test]
fn test_curated_list_resolves_cleanly() {
    let keys = resolved_keys();
    assert_eq!(keys.len(), 42);
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            assert_ne!(
                a.rp_id_hash, b.rp_id_hash,
                "{} and {} share a key",
                a.app_name, b.app_name
            );
        }
    }
}

#[test]
fn test_every_curated_key_is_in_the_table() {
    for key in resolved_keys() {
        let app = lookup(&key.rp_id_hash).unwrap_or_else(|| {
            panic!("{} ({}) missing from table", key.app_name, key.kind.as_str())
        });
        assert_eq!(app.label, key.label, "label mismatch for {}", key.app_name);
        assert_eq!(app.icon_name, key.icon.as_deref());
        assert_eq!(app.use_sign_count, key.use_sign_count);
        assert_eq!(app.use_self_attestation, key.use_self_attestation);
    }
}

#[test]
fn test_generated_file_is_current() {
    let rendered = codegen::render(&resolved_keys());
    let checked_in = include_str!("../src/data.rs");
    assert_eq!(
        rendered, checked_in,
        "src/data.rs is stale; rerun knownapps-gen"
    );
}
