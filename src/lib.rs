//! Static registry of well-known WebAuthn/U2F Relying Parties, keyed by the
//! SHA-256 rpIdHash an authenticator sees on the wire. Gives user-presence
//! prompts a friendly label and icon, and carries per-RP protocol quirks.

pub mod codegen;
pub mod curated;

mod data;
mod registry;

pub use registry::{KnownApp, lookup};
