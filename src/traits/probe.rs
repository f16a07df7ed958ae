use async_trait::async_trait;
use crate::enums::endpoint_variant::EndpointVariant;
use crate::structs::probe::probe_report::ProbeReport;

#[async_trait]
pub trait Probe: Send + Sync {
    fn variant(&self) -> EndpointVariant;

    fn url(&self) -> String;

    async fn probe(&self, prompt: &str) -> ProbeReport;

    /// The single-string contract: content on success, a readable line otherwise.
    async fn call(&self, prompt: &str) -> String {
        self.probe(prompt).await.rendered()
    }
}
