pub mod client;
pub mod error;

use crate::types::station::StationRecord;
use std::future::Future;

/// Anything that can produce the current list of stations.
///
/// Implementations must not fail: transport, status and decoding problems are
/// logged and reported as an empty list, so a broken upstream degrades the
/// dashboard to "no stations" instead of an error.
pub trait StationSource: Send + Sync + 'static {
    fn fetch_all_stations(&self) -> impl Future<Output = Vec<StationRecord>> + Send;
}
