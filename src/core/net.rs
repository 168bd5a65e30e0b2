use crate::core::YfError;

/// Read the response body as text, rejecting non-2xx statuses.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, YfError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(YfError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }

    Ok(resp.text().await?)
}
