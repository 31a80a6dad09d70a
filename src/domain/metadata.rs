//! Off-chain metadata document composition.

use serde::{Deserialize, Serialize};

use crate::domain::request::IssuanceRequest;
use crate::error::LaunchError;
use crate::pin::AssetStore;
use crate::shared::ContentAddress;

/// The JSON document pinned alongside the image.
///
/// Exactly these four fields, nothing else — wallets and explorers resolve
/// the mint's URI to this document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDocument {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
}

impl MetadataDocument {
    /// Build the document for a request, referencing the already-pinned image.
    pub fn for_request(request: &IssuanceRequest, image: &ContentAddress) -> Self {
        Self {
            name: request.name().to_string(),
            symbol: request.symbol().to_string(),
            description: request.description().to_string(),
            image: image.as_str().to_string(),
        }
    }
}

/// Serialize the document and store it, returning its content address.
///
/// Deterministic given identical inputs, up to whatever non-determinism the
/// store itself introduces.
pub async fn compose<S: AssetStore + ?Sized>(
    store: &S,
    document: &MetadataDocument,
) -> Result<ContentAddress, LaunchError> {
    let bytes = serde_json::to_vec(document)?;
    let address = store
        .store(bytes, "metadata.json", "application/json")
        .await?;
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::ImageFormat;
    use crate::pin::mock::MockStore;

    fn request() -> IssuanceRequest {
        IssuanceRequest::new(
            "Demo",
            "DMO",
            "test token",
            vec![1, 2, 3],
            ImageFormat::Png,
            0,
            500,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_compose_round_trip() {
        let store = MockStore::new();
        let image = ContentAddress::new("https://gateway.example/ipfs/QmImage");
        let document = MetadataDocument::for_request(&request(), &image);

        compose(&store, &document).await.unwrap();

        let stored = store.stored.lock().unwrap();
        let (name, content_type, bytes) = &stored[0];
        assert_eq!(name, "metadata.json");
        assert_eq!(content_type, "application/json");

        // Parsing the stored bytes returns exactly the four supplied fields.
        let parsed: MetadataDocument = serde_json::from_slice(bytes).unwrap();
        assert_eq!(parsed, document);

        let raw: serde_json::Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(raw.as_object().unwrap().len(), 4);
        assert_eq!(raw["image"], "https://gateway.example/ipfs/QmImage");
    }
}
