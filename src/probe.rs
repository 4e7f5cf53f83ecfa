use crate::types::Target;
use log::{debug, warn};
use reqwest::{Client, StatusCode};

/// Probe the console state endpoint to confirm the target actually runs
/// a Nacos console before any bypass checks are attempted.
///
/// Returns `false` on 404 (probably not Nacos), any other non-success
/// status, a timeout, or a transport error. Unreachable targets get no
/// further requests.
pub async fn console_reachable(client: &Client, target: &Target) -> bool {
    let url = format!("{}/nacos/v1/console/server/state", target.base_url());

    match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => {
            debug!("{} answered the console state probe", target);
            true
        }
        Ok(response) if response.status() == StatusCode::NOT_FOUND => {
            warn!("{} returned 404 on the console state endpoint, probably not Nacos", target);
            false
        }
        Ok(response) => {
            warn!(
                "{} console state probe returned status {}",
                target,
                response.status()
            );
            false
        }
        Err(e) if e.is_timeout() => {
            warn!("{} console state probe timed out", target);
            false
        }
        Err(e) => {
            warn!("{} console state probe failed: {}", target, e);
            false
        }
    }
}
