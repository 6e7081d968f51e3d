//! Wall-clock formatting for pickup timestamps.

use chrono::Local;

/// Render format of [`depot_core::DeliveryRecord::pickup_time`].
pub const PICKUP_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The local time of the confirm action, minute resolution.
pub fn pickup_time_now() -> String {
    Local::now().format(PICKUP_TIME_FORMAT).to_string()
}
