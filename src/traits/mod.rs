pub mod http_transport;
pub mod id_generator;
pub mod probe;
