use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::domain::criteria::FilterCriteria;
use crate::domain::reference::{Client, Fund, Situation};
use crate::domain::ticket::TicketRecord;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::{ReferenceReader, TicketReader};
use crate::models::reference as wire;
use crate::models::ticket::{SearchParams, SearchResponse};

const CLIENTS_PATH: &str = "/v1/clientes";
const FUNDS_PATH: &str = "/v1/fundos";
const SITUATIONS_PATH: &str = "/v1/situacoes";
const SEARCH_PATH: &str = "/v1/boletas-cota-fundo/pesquisar";

/// reqwest implementation of the gateway traits.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    base_url: String,
    client: HttpClient,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> GatewayResult<Self> {
        let client = HttpClient::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the search endpoint with `criteria` in the query string.
    pub fn search_url(&self, criteria: &FilterCriteria) -> GatewayResult<String> {
        let query = serde_html_form::to_string(SearchParams::from(criteria))
            .map_err(|e| GatewayError::Encode(e.to_string()))?;

        if query.is_empty() {
            Ok(format!("{}{SEARCH_PATH}", self.base_url))
        } else {
            Ok(format!("{}{SEARCH_PATH}?{query}", self.base_url))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> GatewayResult<T> {
        let response = self.client.get(url).send().await.map_err(|e| {
            log::error!("Request to {url} failed: {e}");
            GatewayError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Request to {url} failed with status {status}");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            log::error!("Failed to decode response from {url}: {e}");
            GatewayError::Decode(e.to_string())
        })
    }
}

impl ReferenceReader for HttpGateway {
    async fn list_clients(&self) -> GatewayResult<Vec<Client>> {
        let url = format!("{}{CLIENTS_PATH}", self.base_url);
        let clients: Vec<wire::Client> = self.get_json(&url).await?;

        clients
            .into_iter()
            .map(|c| Client::try_from(c).map_err(GatewayError::from))
            .collect()
    }

    async fn list_funds(&self) -> GatewayResult<Vec<Fund>> {
        let url = format!("{}{FUNDS_PATH}", self.base_url);
        let funds: Vec<wire::Fund> = self.get_json(&url).await?;

        funds
            .into_iter()
            .map(|f| Fund::try_from(f).map_err(GatewayError::from))
            .collect()
    }

    async fn list_situations(&self) -> GatewayResult<Vec<Situation>> {
        let url = format!("{}{SITUATIONS_PATH}", self.base_url);
        let situations: Vec<wire::Situation> = self.get_json(&url).await?;

        Ok(situations.into_iter().map(Situation::from).collect())
    }
}

impl TicketReader for HttpGateway {
    async fn search_tickets(&self, criteria: &FilterCriteria) -> GatewayResult<Vec<TicketRecord>> {
        let url = self.search_url(criteria)?;
        let response: SearchResponse = self.get_json(&url).await?;

        let records = response
            .elements
            .into_iter()
            .map(|t| TicketRecord::try_from(t).map_err(GatewayError::from))
            .collect::<GatewayResult<Vec<_>>>()
            .map_err(|e| {
                log::error!("Rejected search response from {url}: {e}");
                e
            })?;

        log::info!("Fetched {} boletas from {url}", records.len());
        Ok(records)
    }
}
