use clap::ValueEnum;
use crate::enums::endpoint_variant::EndpointVariant;

/// Which endpoints a run probes. `All` keeps the copilot-then-blackbox order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EndpointSelection {
    #[default]
    All,
    Copilot,
    Blackbox,
}

impl EndpointSelection {
    pub fn variants(self) -> Vec<EndpointVariant> {
        match self {
            Self::All => vec![EndpointVariant::Copilot, EndpointVariant::Blackbox],
            Self::Copilot => vec![EndpointVariant::Copilot],
            Self::Blackbox => vec![EndpointVariant::Blackbox],
        }
    }
}
