use anyhow::Context;
use serde_json::json;

use crate::cli::client::{ApiClient, ClientError};
use crate::cli::utils::{output_comments, output_error, output_success};
use crate::cli::OutputFormat;
use crate::database::object_id::ObjectId;

pub async fn list(client: &ApiClient, output_format: &OutputFormat) -> anyhow::Result<()> {
    let comments = client
        .list_comments()
        .await
        .with_context(|| format!("failed to list comments from {}", client.base_url()))?;
    output_comments(output_format, &comments)
}

pub async fn delete(client: &ApiClient, id: &str, output_format: &OutputFormat) -> anyhow::Result<()> {
    // Same check the server applies, so a typo never leaves the machine
    let id: ObjectId = id
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid comment ID: {}", id))?;

    match client.delete_comment(&id).await {
        Ok(confirmation) => output_success(
            output_format,
            &confirmation.message,
            Some(json!({ "id": id })),
        ),
        Err(ClientError::Api { status, message }) => {
            output_error(output_format, &message, Some(status.as_u16()))?;
            anyhow::bail!("delete of {} failed: {}", id, message)
        }
        Err(e) => Err(anyhow::Error::new(e).context(format!("failed to reach {}", client.base_url()))),
    }
}
