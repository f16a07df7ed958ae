pub mod id_generator;
pub mod json_detail;
pub mod message_splitter;
