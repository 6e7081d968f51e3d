//! Remote-first recognition with the deterministic local fallback.

use std::sync::Arc;

use depot_logging::depot_info;

use crate::local::LocalCodeExtractor;
use crate::pattern;
use crate::recognize::RecognitionService;
use crate::types::{RecognitionError, RecognizedPair};

/// Owns the fallback policy for both input paths. No local state beyond
/// its collaborators; transport errors always propagate untouched.
pub struct RecognitionGateway {
    service: Arc<dyn RecognitionService>,
    local: LocalCodeExtractor,
}

impl RecognitionGateway {
    pub fn new(service: Arc<dyn RecognitionService>, local: LocalCodeExtractor) -> Self {
        Self { service, local }
    }

    /// Text path. Only a zero-token response falls back to the local
    /// extractor; a transport failure never does.
    pub async fn recognize_text(
        &self,
        text: &str,
    ) -> Result<Vec<RecognizedPair>, RecognitionError> {
        let content = self.service.classify_text(text).await?;
        let pairs = pattern::extract_pairs(&content);
        if pairs.is_empty() {
            depot_info!("Remote text recognition returned no tokens; using local extractor");
            return Ok(self.local.extract(text));
        }
        Ok(pairs)
    }

    /// Image path: one call per image, strictly sequential to bound load on
    /// the service. Any transport failure aborts the whole batch; there is
    /// no local fallback for images. The bracket scan runs once over the
    /// concatenated response text.
    pub async fn recognize_images(
        &self,
        images: &[Vec<u8>],
    ) -> Result<Vec<RecognizedPair>, RecognitionError> {
        let mut all_content = String::new();
        for image in images {
            let content = self.service.classify_image(image).await?;
            all_content.push('\n');
            all_content.push_str(&content);
        }
        Ok(pattern::extract_pairs(&all_content))
    }
}
