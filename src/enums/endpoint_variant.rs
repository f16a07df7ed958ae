use std::fmt;
use crate::config::constants::{BLACKBOX_PATH, COPILOT_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointVariant {
    Copilot,
    Blackbox,
}

impl EndpointVariant {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Copilot => COPILOT_PATH,
            Self::Blackbox => BLACKBOX_PATH,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Copilot => "Copilot",
            Self::Blackbox => "Blackbox",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Copilot => "🤖",
            Self::Blackbox => "🔲",
        }
    }
}

impl fmt::Display for EndpointVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
