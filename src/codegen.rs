use std::collections::HashSet;

use crate::curated::ResolvedKey;

/// Render the generated table module from resolved curated keys.
///
/// Output is deterministic: entries keep curated-list order and the header
/// counts are derived from the input, so regenerating without a data change
/// is a no-op.
pub fn render(keys: &[ResolvedKey]) -> String {
    let services: HashSet<&str> = keys.iter().map(|k| k.app_name.as_str()).collect();
    let mut out = String::new();
    out.push_str("// Generated by `knownapps-gen` from data/apps.json; do not edit by hand.\n");
    out.push_str("// Regenerate with `cargo run --bin knownapps-gen`, or run it with --check to\n");
    out.push_str("// verify this file is current.\n\n");
    out.push_str("use crate::registry::KnownApp;\n\n");
    out.push_str("/// Known Relying Party keys in curated-list order: each entry pairs the\n");
    out.push_str("/// SHA-256 digest of a WebAuthn RP ID or a legacy U2F AppID URL with the\n");
    out.push_str("/// service metadata to display for it.\n");
    out.push_str("///\n");
    out.push_str(&format!(
        "/// {} keys covering {} services.\n",
        keys.len(),
        services.len()
    ));
    out.push_str("#[rustfmt::skip]\n");
    out.push_str("pub(crate) static KNOWN_APPS: &[(&[u8; 32], KnownApp)] = &[\n");
    for key in keys {
        out.push_str(&format!("    // {} ({})\n", key.app_name, key.kind.as_str()));
        out.push_str("    (\n");
        let mut escaped = String::with_capacity(4 * 32);
        for byte in key.rp_id_hash {
            escaped.push_str(&format!("\\x{byte:02x}"));
        }
        out.push_str(&format!("        b\"{escaped}\",\n"));
        out.push_str("        KnownApp {\n");
        out.push_str(&format!("            label: \"{}\",\n", key.label));
        match &key.icon {
            Some(icon) => out.push_str(&format!("            icon_name: Some(\"{icon}\"),\n")),
            None => out.push_str("            icon_name: None,\n"),
        }
        out.push_str(&format!(
            "            use_sign_count: {},\n",
            flag(key.use_sign_count)
        ));
        out.push_str(&format!(
            "            use_self_attestation: {},\n",
            flag(key.use_self_attestation)
        ));
        out.push_str("        },\n");
        out.push_str("    ),\n");
    }
    out.push_str("];\n");
    out
}

fn flag(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "Some(true)",
        Some(false) => "Some(false)",
        None => "None",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curated::KeyKind;

    fn key(name: &str, kind: KeyKind, fill: u8) -> ResolvedKey {
        ResolvedKey {
            rp_id_hash: [fill; 32],
            kind,
            app_name: name.to_string(),
            label: "example.com".to_string(),
            icon: Some("example".to_string()),
            use_sign_count: Some(false),
            use_self_attestation: None,
        }
    }

    #[test]
    fn test_render_entry_layout() {
        let mut second = key("Other", KeyKind::U2f, 0x01);
        second.label = "other.example".to_string();
        second.icon = None;
        second.use_sign_count = None;
        second.use_self_attestation = Some(true);
        let keys = vec![key("Example", KeyKind::Webauthn, 0xab), second];

        let out = render(&keys);
        assert!(out.starts_with("// Generated by `knownapps-gen`"));
        assert!(out.contains("/// 2 keys covering 2 services.\n"));
        assert!(out.contains("    // Example (WebAuthn)\n"));
        assert!(out.contains(&format!("        b\"{}\",\n", "\\xab".repeat(32))));
        assert!(out.contains("            label: \"example.com\",\n"));
        assert!(out.contains("            icon_name: Some(\"example\"),\n"));
        assert!(out.contains("            use_sign_count: Some(false),\n"));
        assert!(out.contains("    // Other (U2F)\n"));
        assert!(out.contains("            icon_name: None,\n"));
        assert!(out.contains("            use_self_attestation: Some(true),\n"));
        assert!(out.ends_with("];\n"));
    }

    #[test]
    fn test_render_counts_services_not_keys() {
        // Two keys of one service count once in the header.
        let keys = vec![
            key("Example", KeyKind::U2f, 0x11),
            key("Example", KeyKind::Webauthn, 0x22),
        ];
        let out = render(&keys);
        assert!(out.contains("/// 2 keys covering 1 services.\n"));
    }

    #[test]
    fn test_render_keeps_input_order() {
        let keys = vec![
            key("Zebra", KeyKind::Webauthn, 0x11),
            key("Apple", KeyKind::Webauthn, 0x22),
        ];
        let out = render(&keys);
        let zebra = out.find("// Zebra").unwrap();
        let apple = out.find("// Apple").unwrap();
        assert!(zebra < apple, "entries must keep curated-list order");
    }
}
