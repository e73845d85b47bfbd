//! HTTP client for the PostNL Shipping API (`/v1/shipment` endpoint).

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use vracht_core::model::{CarrierMeta, Dispatch, Label, MassUnit, Picking};
use vracht_core::ports::{ApiError, CarrierError, LabelSink, ParamStore, ShippingPort};

use crate::{
    PARAM_SHIPPING_API_PROD_URL, PARAM_SHIPPING_API_TEST_URL, PARAM_TRACKING_BASE_URL,
    PostnlConfig, address, payload,
};

const DEFAULT_SHIPPING_API_PROD_URL: &str = "https://api.postnl.nl/v1/shipment";
const DEFAULT_SHIPPING_API_TEST_URL: &str = "https://api-sandbox.postnl.nl/v1/shipment";

const LABEL_FILE_TYPE: &str = "pdf";

/// Success response of the Shipping API.
#[derive(Debug, Deserialize)]
struct ShipmentResponse {
    #[serde(rename = "ResponseShipments", default)]
    response_shipments: Vec<ResponseShipment>,
}

/// Single confirmed shipment in the response.
#[derive(Debug, Deserialize)]
struct ResponseShipment {
    #[serde(rename = "Barcode")]
    barcode: String,

    #[serde(rename = "Labels", default)]
    labels: Vec<LabelEntry>,
}

/// One label document; content is base64-encoded binary.
#[derive(Debug, Deserialize)]
struct LabelEntry {
    #[serde(rename = "Content")]
    content: String,
}

/// Shipment submission and tracking implementation for PostNL.
pub struct PostnlShippingPort {
    client: Client,
    config: PostnlConfig,
    params: Arc<dyn ParamStore>,
    labels: Arc<dyn LabelSink>,
    mass_unit: MassUnit,
    meta: CarrierMeta,
}

impl PostnlShippingPort {
    /// Create a new shipping port bound to the given HTTP client and host
    /// collaborators.
    #[must_use]
    pub fn new(
        client: Client,
        config: PostnlConfig,
        params: Arc<dyn ParamStore>,
        labels: Arc<dyn LabelSink>,
        mass_unit: MassUnit,
    ) -> Self {
        Self {
            client,
            config,
            params,
            labels,
            mass_unit,
            meta: crate::carrier_meta(),
        }
    }

    /// Resolve the Shipping API endpoint for the configured environment.
    fn endpoint(&self) -> String {
        if self.config.prod_environment {
            self.params
                .get(PARAM_SHIPPING_API_PROD_URL)
                .unwrap_or_else(|| String::from(DEFAULT_SHIPPING_API_PROD_URL))
        } else {
            self.params
                .get(PARAM_SHIPPING_API_TEST_URL)
                .unwrap_or_else(|| String::from(DEFAULT_SHIPPING_API_TEST_URL))
        }
    }

    fn api_key(&self) -> Result<String, CarrierError> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| CarrierError::Configuration(String::from("PostNL API key is not set")))
    }

    /// Submit one picking and decode the carrier's answer.
    async fn submit(
        &self,
        endpoint: &str,
        api_key: &str,
        picking: &Picking,
    ) -> Result<Dispatch, CarrierError> {
        address::validate(&picking.recipient)?;

        let weight_kilograms = self.mass_unit.to_kilograms(picking.shipping_weight);
        let body = payload::build(picking, &self.config, weight_kilograms, Utc::now().naive_utc());

        let confirm = if self.config.confirm_shipment {
            "true"
        } else {
            "false"
        };

        info!(picking = %picking.name, confirm, "submitting shipment to PostNL");

        let response = self
            .client
            .post(endpoint)
            .query(&[("confirm", confirm)])
            .header("apikey", api_key)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthenticated.into());
        }

        let response = response.error_for_status().map_err(ApiError::from)?;

        let parsed: ShipmentResponse = response
            .json()
            .await
            .map_err(|err| ApiError::MalformedResponse(err.to_string()))?;

        let shipment = parsed.response_shipments.into_iter().next().ok_or_else(|| {
            ApiError::MalformedResponse(String::from("response contains no shipments"))
        })?;

        debug!(
            picking = %picking.name,
            barcode = %shipment.barcode,
            labels = shipment.labels.len(),
            "shipment confirmed"
        );

        let mut labels = Vec::with_capacity(shipment.labels.len());
        for entry in shipment.labels {
            let content = BASE64.decode(entry.content.as_bytes()).map_err(|err| {
                ApiError::MalformedResponse(format!("label content is not valid base64: {err}"))
            })?;
            labels.push(Label {
                name: picking.name.clone(),
                content,
                file_type: String::from(LABEL_FILE_TYPE),
                filename: format!("{}.{LABEL_FILE_TYPE}", picking.name),
            });
        }

        Ok(Dispatch {
            tracking_number: shipment.barcode,
            labels,
            // PostNL does not report the shipment cost.
            exact_price: 0.0,
        })
    }
}

#[async_trait]
impl ShippingPort for PostnlShippingPort {
    fn carrier(&self) -> &CarrierMeta {
        &self.meta
    }

    async fn send(&self, pickings: &[Picking]) -> Result<Vec<Dispatch>, CarrierError> {
        let api_key = self.api_key()?;
        let endpoint = self.endpoint();

        let mut dispatches = Vec::with_capacity(pickings.len());

        // One independent call per picking, strictly in order. The first
        // failure aborts the batch so the host never sees partial state.
        for picking in pickings {
            let dispatch = self.submit(&endpoint, &api_key, picking).await?;

            self.labels.assign_default_package(picking);
            for label in &dispatch.labels {
                self.labels.attach(picking, label)?;
            }

            dispatches.push(dispatch);
        }

        Ok(dispatches)
    }

    fn tracking_link(&self, picking: &Picking) -> String {
        let Some(base_url) = self
            .params
            .get(PARAM_TRACKING_BASE_URL)
            .filter(|url| !url.is_empty())
        else {
            return String::new();
        };

        let tracking_ref = picking.tracking_ref.as_deref().unwrap_or_default();
        let zip = picking.recipient.zip.as_deref().unwrap_or_default();
        if tracking_ref.is_empty() || zip.is_empty() {
            return String::new();
        }

        // The country token is fixed; the validator only lets NL through.
        format!("{base_url}/{tracking_ref}-{}-{zip}", address::SUPPORTED_COUNTRY)
    }

    fn cancel(&self, _pickings: &[Picking]) -> Result<(), CarrierError> {
        Err(CarrierError::Unsupported(String::from(
            "PostNL does not allow canceling the shipment",
        )))
    }
}
