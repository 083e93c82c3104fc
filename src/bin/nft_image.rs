//! Upload an NFT image to the storage gateway and print the hosted URI.
//!
//! Usage:
//!   STORAGE_UPLOAD_URL=https://... cargo run --bin nft_image <image-path>

use solana_cluster_lab::sdk::StorageClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: nft_image <image-path>")?;
    let bytes = std::fs::read(&path)?;
    println!("Uploading {path} ({} bytes)...", bytes.len());

    let storage = StorageClient::from_env()?;
    let uri = storage.upload(bytes, "image/png").await?;
    println!("image uri: {uri}");
    Ok(())
}
