use nbcut::HttpRelease;
use serde_json::json;

use crate::error::Result;

pub async fn execute(endpoint: &str, token: Option<String>) -> Result<()> {
    let client = HttpRelease::new(endpoint, token)?;

    match client.status().await? {
        Some(status) => {
            let payload = json!({
                "endpoint": endpoint,
                "session_id": status.session_id,
                "kernel": status.kernel,
                "connected_seconds": status.connected_seconds,
                "idle": status.idle,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        None => {
            println!("No compute session currently assigned");
        }
    }

    Ok(())
}
