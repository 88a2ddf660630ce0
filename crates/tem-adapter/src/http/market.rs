/*
[INPUT]:  None (public endpoints)
[OUTPUT]: API liveness and the market info snapshot
[POS]:    HTTP layer - public market endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{Result, TemClient};
use crate::types::Info;
use reqwest::Method;
use tracing::warn;

impl TemClient {
    /// Check whether the API is reachable
    ///
    /// GET /status
    ///
    /// Never fails: transport errors and non-success statuses read as `false`.
    pub async fn check_status(&self) -> bool {
        let builder = match self.request(Method::GET, "/status") {
            Ok(builder) => builder,
            Err(err) => {
                warn!(error = %err, "status check could not be built");
                return false;
            }
        };

        match builder.send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!(status = response.status().as_u16(), "status check failed");
                false
            }
            Err(err) => {
                warn!(error = %err, "status check unreachable");
                false
            }
        }
    }

    /// Query the market info snapshot
    ///
    /// GET /info
    pub async fn get_market_info(&self) -> Result<Info> {
        let builder = self.request(Method::GET, "/info")?;
        self.send_json(builder).await
    }
}
