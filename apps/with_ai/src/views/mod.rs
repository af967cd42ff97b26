pub mod with_classify;
pub mod with_respond;

use tracing::{error, warn};
use with_core::response::{bad_gateway, gateway_timeout};
use with_core::ApiRejection;

use crate::client::CompletionError;

// ---------- small helpers ----------
pub(crate) fn upstream(e: CompletionError) -> ApiRejection {
    match e {
        CompletionError::Timeout => {
            warn!("completion timed out");
            gateway_timeout(e.to_string())
        }
        other => {
            error!("completion failed: {other}");
            bad_gateway(other.to_string())
        }
    }
}
