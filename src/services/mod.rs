pub mod reqwest_transport;
pub mod response_extractor;
pub mod reference_formatter;
pub mod probes;
