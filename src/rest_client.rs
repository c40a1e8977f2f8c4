// HTTP/JSON transport: one request/response pair per call, camelCase JSON bodies.

use std::collections::HashSet;

use async_trait::async_trait;
use reqwest::{Certificate, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::client::{AvailabilityWindow, PluginClient};
use crate::config::{BasicAuth, PluginEndpoint};
use crate::error::HarnessError;
use crate::model::{
    BasicProductInfo, CancelBookingRequest, CancelBookingResponse, ConfigurationParameterValue,
    ConfirmBookingRequest, ConfirmBookingResponse, ConfirmationData, CreateConfirmBookingRequest,
    GetProductByIdRequest, PluginDefinition, ProductAvailabilityRequest,
    ProductAvailabilityWithRatesResponse, ProductDescription, ProductsAvailabilityRequest,
    ProductsAvailabilityResponse, ReservationData, ReservationRequest, ReservationResponse,
    SearchProductsRequest,
};

pub mod path {
    pub const DEFINITION: &str = "/plugin/definition";
    pub const SEARCH_PRODUCTS: &str = "/product/search";
    pub const GET_PRODUCT_BY_ID: &str = "/product/getById";
    pub const AVAILABLE_PRODUCTS: &str = "/products/getAvailable";
    pub const PRODUCT_AVAILABILITY: &str = "/product/getAvailability";
    pub const RESERVE: &str = "/booking/reserve";
    pub const CONFIRM: &str = "/booking/confirm";
    pub const CREATE_AND_CONFIRM: &str = "/booking/createAndConfirm";
    pub const CANCEL: &str = "/booking/cancel";
}

pub struct RestPluginClient {
    http: Client,
    base_url: String,
    basic_auth: Option<BasicAuth>,
}

impl RestPluginClient {
    pub fn new(endpoint: &PluginEndpoint) -> Result<Self, HarnessError> {
        let mut builder = Client::builder();
        if let Some(pem) = &endpoint.trust_certificate {
            let certificate = Certificate::from_pem(pem.as_bytes()).map_err(|e| {
                HarnessError::ConfigError(format!("Could not load trust certificate: {}", e))
            })?;
            builder = builder.add_root_certificate(certificate);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: endpoint.base_url(),
            basic_auth: endpoint.basic_auth.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.basic_auth {
            Some(auth) => request.basic_auth(&auth.username, auth.password.as_ref()),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, HarnessError> {
        debug!(url, "Calling plugin");
        let response = self.authorized(request).send().await.map_err(|e| {
            error!(url, error = %e, "Could not call plugin");
            HarnessError::HttpError(e)
        })?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            error!(url, status = status.as_u16(), body = %body, "Plugin returned non-success status");
            return Err(HarnessError::HttpStatusError {
                url: url.to_string(),
                status_code: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            error!(url, error = %e, "Could not parse plugin response");
            HarnessError::DecodeError(format!("{}: {}", url, e))
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HarnessError> {
        let url = self.url(path);
        self.send(self.http.get(&url), &url).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HarnessError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        self.send(self.http.post(&url).json(body), &url).await
    }
}

#[async_trait]
impl PluginClient for RestPluginClient {
    async fn get_definition(&self) -> Result<PluginDefinition, HarnessError> {
        self.get(path::DEFINITION).await
    }

    async fn search_products(
        &self,
        config: &[ConfigurationParameterValue],
    ) -> Result<Vec<BasicProductInfo>, HarnessError> {
        let request = SearchProductsRequest {
            parameters: config.to_vec(),
        };
        self.post(path::SEARCH_PRODUCTS, &request).await
    }

    async fn get_product_by_id(
        &self,
        config: &[ConfigurationParameterValue],
        product_id: &str,
    ) -> Result<ProductDescription, HarnessError> {
        let request = GetProductByIdRequest {
            parameters: config.to_vec(),
            external_id: product_id.to_string(),
        };
        self.post(path::GET_PRODUCT_BY_ID, &request).await
    }

    async fn get_available_products(
        &self,
        config: &[ConfigurationParameterValue],
        window: &AvailabilityWindow,
        product_ids: &[String],
    ) -> Result<HashSet<String>, HarnessError> {
        let request = ProductsAvailabilityRequest {
            parameters: config.to_vec(),
            range: window.range(),
            required_capacity: window.required_capacity,
            external_product_ids: product_ids.to_vec(),
        };
        let available: Vec<ProductsAvailabilityResponse> =
            self.post(path::AVAILABLE_PRODUCTS, &request).await?;
        Ok(available
            .into_iter()
            .map(|response| response.product_id)
            .collect())
    }

    async fn get_availability(
        &self,
        config: &[ConfigurationParameterValue],
        window: &AvailabilityWindow,
        product_id: &str,
    ) -> Result<Vec<ProductAvailabilityWithRatesResponse>, HarnessError> {
        let request = ProductAvailabilityRequest {
            parameters: config.to_vec(),
            range: window.range(),
            product_id: product_id.to_string(),
        };
        self.post(path::PRODUCT_AVAILABILITY, &request).await
    }

    async fn create_reservation(
        &self,
        config: &[ConfigurationParameterValue],
        reservation: &ReservationData,
    ) -> Result<ReservationResponse, HarnessError> {
        let request = ReservationRequest {
            parameters: config.to_vec(),
            reservation_data: reservation.clone(),
        };
        self.post(path::RESERVE, &request).await
    }

    async fn confirm_booking(
        &self,
        config: &[ConfigurationParameterValue],
        reservation_confirmation_code: &str,
        reservation: &ReservationData,
        confirmation: &ConfirmationData,
    ) -> Result<ConfirmBookingResponse, HarnessError> {
        let request = ConfirmBookingRequest {
            parameters: config.to_vec(),
            reservation_confirmation_code: reservation_confirmation_code.to_string(),
            reservation_data: reservation.clone(),
            confirmation_data: confirmation.clone(),
        };
        self.post(path::CONFIRM, &request).await
    }

    async fn create_and_confirm_booking(
        &self,
        config: &[ConfigurationParameterValue],
        reservation: &ReservationData,
        confirmation: &ConfirmationData,
    ) -> Result<ConfirmBookingResponse, HarnessError> {
        let request = CreateConfirmBookingRequest {
            parameters: config.to_vec(),
            reservation_data: reservation.clone(),
            confirmation_data: confirmation.clone(),
        };
        self.post(path::CREATE_AND_CONFIRM, &request).await
    }

    async fn cancel_booking(
        &self,
        config: &[ConfigurationParameterValue],
        booking_confirmation_code: &str,
    ) -> Result<CancelBookingResponse, HarnessError> {
        let request = CancelBookingRequest {
            parameters: config.to_vec(),
            booking_confirmation_code: booking_confirmation_code.to_string(),
        };
        self.post(path::CANCEL, &request).await
    }
}
