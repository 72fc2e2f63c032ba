//! A payload engine: the deliverable half of an exploit.
//!
//! A payload is built up field by field after construction (name and version
//! first, then description, authors and target). `verify` is called once the
//! caller believes the payload is ready to deploy.

use std::fmt;

use vouch_contracts::error::VouchResult;
use vouch_core::{RuleRegistry, Verifiable};
use vouch_verify::{Attribute, Checks, Pattern};

/// Architectures a payload may target.
pub const ARCHS: [&str; 6] = ["x86", "x86_64", "arm", "arm64", "mips", "ppc"];

const VERSION_PATTERN: &str = r"^\d+\.\d+(\.\d+)?$";

pub struct PayloadEngine {
    pub name: String,
    pub version: String,
    pub description: String,
    pub authors: Vec<String>,
    pub arch: String,
    pub os: Option<String>,
    rules: RuleRegistry<PayloadEngine>,
}

fn name(p: &PayloadEngine) -> &str {
    &p.name
}

fn version(p: &PayloadEngine) -> &str {
    &p.version
}

fn description(p: &PayloadEngine) -> &str {
    &p.description
}

fn authors(p: &PayloadEngine) -> &Vec<String> {
    &p.authors
}

fn arch(p: &PayloadEngine) -> &str {
    &p.arch
}

fn os(p: &PayloadEngine) -> &Option<String> {
    &p.os
}

impl PayloadEngine {
    pub const NAME: Attribute<PayloadEngine, str> = Attribute::new("name", name);
    pub const VERSION: Attribute<PayloadEngine, str> = Attribute::new("version", version);
    pub const DESCRIPTION: Attribute<PayloadEngine, str> =
        Attribute::new("description", description);
    pub const AUTHORS: Attribute<PayloadEngine, Vec<String>> = Attribute::new("authors", authors);
    pub const ARCH: Attribute<PayloadEngine, str> = Attribute::new("arch", arch);
    pub const OS: Attribute<PayloadEngine, Option<String>> = Attribute::new("os", os);

    /// Create a payload and register its readiness rules.
    ///
    /// Fails only if one of the built-in patterns does not compile.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> VouchResult<Self> {
        let mut payload = Self {
            name: name.into(),
            version: version.into(),
            description: String::new(),
            authors: Vec::new(),
            arch: String::new(),
            os: None,
            rules: RuleRegistry::new(),
        };

        payload
            .rules
            .verify_set(Self::NAME, None)
            .verify_no_match(
                Self::NAME,
                Pattern::new(r"\s")?,
                Some("name cannot contain whitespace"),
            )
            .verify_match(Self::VERSION, Pattern::new(VERSION_PATTERN)?, None)
            .verify_set(Self::DESCRIPTION, None)
            .verify_set(Self::AUTHORS, None)
            .verify_in(Self::ARCH, ARCHS, None)
            .verify_set(Self::OS, None);

        Ok(payload)
    }
}

impl fmt::Debug for PayloadEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadEngine")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("arch", &self.arch)
            .field("os", &self.os)
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

impl Verifiable for PayloadEngine {
    fn entity_name(&self) -> String {
        format!("payload {} {}", self.name, self.version)
    }

    fn rules(&self) -> &RuleRegistry<Self> {
        &self.rules
    }

    fn rules_mut(&mut self) -> &mut RuleRegistry<Self> {
        &mut self.rules
    }
}

#[cfg(test)]
mod tests {
    use vouch_core::Verifiable;

    use super::PayloadEngine;

    fn ready_payload() -> PayloadEngine {
        let mut payload = PayloadEngine::new("bind_shell", "1.0").unwrap();
        payload.description = "Binds a shell to a TCP port".to_string();
        payload.authors = vec!["alice".to_string()];
        payload.arch = "x86_64".to_string();
        payload.os = Some("linux".to_string());
        payload
    }

    #[test]
    fn test_fully_configured_payload_verifies() {
        let verified = ready_payload().verify().unwrap();
        assert_eq!(verified.entity, "payload bind_shell 1.0");
        assert_eq!(verified.rules_checked, 7);
    }

    #[test]
    fn test_fresh_payload_reports_missing_description() {
        let payload = PayloadEngine::new("bind_shell", "1.0").unwrap();
        assert_eq!(
            payload.verify().unwrap_err().message(),
            "description is not set"
        );
    }

    #[test]
    fn test_whitespace_in_name_uses_custom_message() {
        let mut payload = ready_payload();
        payload.name = "bind shell".to_string();
        assert_eq!(
            payload.verify().unwrap_err().message(),
            "name cannot contain whitespace"
        );
    }

    #[test]
    fn test_version_format() {
        let mut payload = ready_payload();
        payload.version = "beta".to_string();
        assert_eq!(
            payload.verify().unwrap_err().message(),
            r"version (beta) must match /^\d+\.\d+(\.\d+)?$/"
        );
    }

    #[test]
    fn test_unknown_arch() {
        let mut payload = ready_payload();
        payload.arch = "sparc".to_string();
        let message = payload.verify().unwrap_err().message().to_string();
        assert!(
            message.starts_with("arch (sparc) must be one of ["),
            "unexpected message: {message}"
        );
    }

    #[test]
    fn test_missing_os() {
        let mut payload = ready_payload();
        payload.os = None;
        assert_eq!(payload.verify().unwrap_err().message(), "os is not set");
    }

    #[test]
    fn test_extra_rules_after_construction() {
        let mut payload = ready_payload();
        payload
            .rules_mut()
            .ensure("payload must list a second author", |p| p.authors.len() > 1);

        assert_eq!(
            payload.verify().unwrap_err().message(),
            "payload must list a second author"
        );

        payload.authors.push("bob".to_string());
        assert!(payload.verify().is_ok());
    }
}
