pub mod probe_runner;
