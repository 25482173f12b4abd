// 🌐 Fetch Client - Pull the raw payload from the configured endpoint
//
// The one place errors surface to the caller: a non-success status or a
// transport failure becomes a single human-readable message. Everything
// downstream of a successful fetch is total - shape problems in the body
// degrade to an empty record set inside ingest.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::ingest;
use crate::records::Record;

/// GET the endpoint and decode the body as JSON.
pub async fn fetch_payload(url: &str) -> Result<Value> {
    debug!(url, "fetching payload");

    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to reach endpoint {}", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("Endpoint {} returned HTTP {}", url, status);
    }

    response
        .json()
        .await
        .with_context(|| format!("Endpoint {} did not return valid JSON", url))
}

/// Fetch and normalize records in one step.
pub async fn fetch_records(url: &str) -> Result<Vec<Record>> {
    let payload = fetch_payload(url).await?;
    let records = ingest::parse_payload(&payload);
    info!(count = records.len(), "fetched records from endpoint");
    Ok(records)
}
