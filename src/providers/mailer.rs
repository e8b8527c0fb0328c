use super::config::AppConfig;

/// Send a plain text email through the transactional mail api. Returns an
/// error on any failure so the caller can roll back state it persisted
/// before the send.
pub async fn send_email(
    config: &AppConfig,
    to: &str,
    subject: &str,
    body: &str,
) -> Result<(), anyhow::Error> {
    let api_url = config
        .mail_api_url
        .clone()
        .ok_or_else(|| anyhow::anyhow!("mail api is not configured"))?;
    let api_key = config.mail_api_key.clone().unwrap_or_default();
    let from = config
        .mail_from
        .clone()
        .unwrap_or_else(|| "no-reply@bootcamp.dev".to_string());

    let client = reqwest::Client::new();
    let response = client
        .post(api_url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .header("X-Server-Token", api_key)
        .body(
            bson::doc! {
                "From": from,
                "To": to,
                "Subject": subject,
                "TextBody": body,
            }
            .to_string(),
        )
        .send()
        .await?;
    if !response.status().is_success() {
        let status = response.status();
        tracing::error!(
            "failed to send email: {}",
            response.text().await.unwrap_or_default()
        );
        return Err(anyhow::anyhow!("mail api returned status {}", status));
    }

    Ok(())
}
