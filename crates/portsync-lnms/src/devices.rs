// Device endpoints
//
// Device identity lookup, used for the CLI's device-type guard and to
// learn the hostname the NETCONF session should dial.

use tracing::debug;

use crate::client::LnmsClient;
use crate::error::Error;
use crate::models::{DeviceInfo, DevicesResponse};

impl LnmsClient {
    /// Get a single device by its monitoring-system id.
    ///
    /// `GET /api/v0/devices/{id}`
    ///
    /// The API wraps the result in a one-element `devices` array; an
    /// empty array is reported as [`Error::NotFound`].
    pub async fn get_device(&self, device_id: u64) -> Result<DeviceInfo, Error> {
        let url = self.api_url(&format!("devices/{device_id}"))?;
        debug!(device_id, "fetching device info");

        let resp: DevicesResponse = self.get(url).await?;
        Self::check_envelope(&resp.status, resp.message)?;

        resp.devices.into_iter().next().ok_or_else(|| Error::NotFound {
            url: format!("devices/{device_id}"),
        })
    }
}
