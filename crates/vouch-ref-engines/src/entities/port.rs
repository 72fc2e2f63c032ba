//! A TCP or UDP port.

use std::fmt;

use vouch_core::{RuleRegistry, Verifiable};
use vouch_verify::{Attribute, Checks};

pub const TCP: &str = "tcp";
pub const UDP: &str = "udp";

/// The transport protocols a port may use.
pub const PROTOCOLS: [&str; 2] = [TCP, UDP];

/// Highest valid port number.
pub const MAX_PORT: u32 = 65535;

/// A port number plus protocol.
///
/// Both fields are public and may be reassigned after construction. The
/// rules registered in `new` read them again on every pass.
pub struct Port {
    pub protocol: String,
    pub number: u32,
    rules: RuleRegistry<Port>,
}

fn protocol(port: &Port) -> &str {
    &port.protocol
}

fn number(port: &Port) -> &u32 {
    &port.number
}

impl Port {
    pub const PROTOCOL: Attribute<Port, str> = Attribute::new("protocol", protocol);
    pub const NUMBER: Attribute<Port, u32> = Attribute::new("number", number);

    pub fn new(protocol: impl Into<String>, number: u32) -> Self {
        let mut port = Self {
            protocol: protocol.into(),
            number,
            rules: RuleRegistry::new(),
        };

        port.rules
            .verify_set(Self::PROTOCOL, None)
            .verify_in(Self::PROTOCOL, PROTOCOLS, None)
            .verify_set(Self::NUMBER, None)
            .register(
                |p| (1..=MAX_PORT).contains(&p.number),
                |p| format!("number ({}) must be between 1 and {MAX_PORT}", p.number),
            );

        port
    }

    pub fn tcp(number: u32) -> Self {
        Self::new(TCP, number)
    }

    pub fn udp(number: u32) -> Self {
        Self::new(UDP, number)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.number, self.protocol)
    }
}

impl fmt::Debug for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Port")
            .field("protocol", &self.protocol)
            .field("number", &self.number)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl Verifiable for Port {
    fn entity_name(&self) -> String {
        format!("port {self}")
    }

    fn rules(&self) -> &RuleRegistry<Self> {
        &self.rules
    }

    fn rules_mut(&mut self) -> &mut RuleRegistry<Self> {
        &mut self.rules
    }
}
