// Port endpoints
//
// Port listing (restricted to the columns portsync needs) and the
// description update that applies a reconciliation result.

use serde_json::json;
use tracing::debug;

use crate::client::LnmsClient;
use crate::error::Error;
use crate::models::{MessageResponse, PortRecord, PortsResponse};

impl LnmsClient {
    /// List a device's ports with name, alias, and id columns.
    ///
    /// `GET /api/v0/devices/{id}/ports?columns=ifName,ifAlias,port_id`
    pub async fn list_ports(&self, device_id: u64) -> Result<Vec<PortRecord>, Error> {
        let mut url = self.api_url(&format!("devices/{device_id}/ports"))?;
        url.query_pairs_mut()
            .append_pair("columns", "ifName,ifAlias,port_id");
        debug!(device_id, "listing device ports");

        let resp: PortsResponse = self.get(url).await?;
        Self::check_envelope(&resp.status, resp.message)?;
        Ok(resp.ports)
    }

    /// Set a port's description in the monitoring system.
    ///
    /// `PATCH /api/v0/ports/{port_id}/description` with
    /// `{"description": ...}`. Returns the server's confirmation message.
    pub async fn update_port_description(
        &self,
        port_id: u64,
        description: &str,
    ) -> Result<String, Error> {
        let url = self.api_url(&format!("ports/{port_id}/description"))?;
        debug!(port_id, "updating port description");

        let resp: MessageResponse = self
            .patch(url, &json!({ "description": description }))
            .await?;
        Self::check_envelope(&resp.status, resp.message.clone())?;
        Ok(resp.message.unwrap_or_default())
    }
}
