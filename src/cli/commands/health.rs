use anyhow::Context;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;

pub async fn health(client: &ApiClient, output_format: &OutputFormat) -> anyhow::Result<()> {
    let (status, body) = client
        .health()
        .await
        .with_context(|| format!("failed to reach {}", client.base_url()))?;

    if status.is_success() {
        let store = body["data"]["store"].as_str().unwrap_or("unknown");
        output_success(
            output_format,
            &format!("{} is healthy (store: {})", client.base_url(), store),
            Some(body),
        )
    } else {
        let message = body["error"].as_str().unwrap_or("server unhealthy").to_string();
        output_error(output_format, &message, Some(status.as_u16()))?;
        anyhow::bail!("{} is degraded: {}", client.base_url(), message)
    }
}
