pub mod endpoint_variant;
pub mod endpoint_selection;
pub mod message_role;
pub mod probe_error;
