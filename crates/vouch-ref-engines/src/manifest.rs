//! TOML manifests describing a set of entities to verify.
//!
//! A manifest declares entities in tables; every table builds one entity
//! whose setup phase registers its rules. Missing fields are left unset so
//! the entity's own rules report them.
//!
//! Example:
//! ```toml
//! [[ports]]
//! protocol = "tcp"
//! number = 80
//!
//! [[payloads]]
//! name = "bind_shell"
//! version = "1.0"
//! description = "Binds a shell to a TCP port"
//! authors = ["alice"]
//! arch = "x86_64"
//! os = "linux"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use vouch_contracts::{
    error::{VouchError, VouchResult},
    verify::Verified,
};
use vouch_core::{VerificationEngine, Verifiable};

use crate::entities::{PayloadEngine, Port};

/// One `[[ports]]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortSpec {
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub number: u32,
}

/// One `[[payloads]]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayloadSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub arch: String,
    pub os: Option<String>,
}

/// The top-level structure deserialized from a manifest file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub ports: Vec<PortSpec>,
    #[serde(default)]
    pub payloads: Vec<PayloadSpec>,
}

impl Manifest {
    /// Parse `s` as a TOML manifest.
    ///
    /// Returns `VouchError::ConfigError` if the TOML is malformed or does not
    /// match the manifest schema.
    pub fn from_toml_str(s: &str) -> VouchResult<Self> {
        toml::from_str(s).map_err(|e| VouchError::ConfigError {
            reason: format!("failed to parse manifest TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as a TOML manifest.
    pub fn from_file(path: &Path) -> VouchResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| VouchError::ConfigError {
            reason: format!("failed to read manifest '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build every declared entity, ports first, in declaration order.
    pub fn entities(&self) -> VouchResult<Vec<Entity>> {
        let mut entities = Vec::with_capacity(self.ports.len() + self.payloads.len());

        for spec in &self.ports {
            entities.push(Entity::Port(Port::new(spec.protocol.clone(), spec.number)));
        }

        for spec in &self.payloads {
            let mut payload = PayloadEngine::new(spec.name.clone(), spec.version.clone())?;
            payload.description = spec.description.clone();
            payload.authors = spec.authors.clone();
            payload.arch = spec.arch.clone();
            payload.os = spec.os.clone();
            entities.push(Entity::Payload(payload));
        }

        debug!(count = entities.len(), "built entities from manifest");
        Ok(entities)
    }
}

/// Any entity a manifest can declare.
#[derive(Debug)]
pub enum Entity {
    Port(Port),
    Payload(PayloadEngine),
}

impl Entity {
    pub fn name(&self) -> String {
        match self {
            Entity::Port(port) => port.entity_name(),
            Entity::Payload(payload) => payload.entity_name(),
        }
    }

    /// Run a verification pass over the wrapped entity.
    pub fn verify_with(&self, engine: &VerificationEngine) -> VouchResult<Verified> {
        match self {
            Entity::Port(port) => engine.verify(port),
            Entity::Payload(payload) => engine.verify(payload),
        }
    }
}
