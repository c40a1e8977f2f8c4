// The plugin contract as the harness sees it. One implementation per wire transport;
// both hand back the transport-neutral model so validation and orchestration never
// know which transport produced a value.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{Duration, Months, NaiveDate};
use tracing::info;

use crate::config::{self, PluginEndpoint, TransportKind};
use crate::error::HarnessError;
use crate::grpc_client::GrpcPluginClient;
use crate::model::{
    BasicProductInfo, CancelBookingResponse, ConfigurationParameterValue, ConfirmBookingResponse,
    ConfirmationData, DatePeriod, PluginDefinition, ProductAvailabilityWithRatesResponse,
    ProductDescription, ReservationData, ReservationResponse,
};
use crate::rest_client::RestPluginClient;

// Date range (inclusive) and head count an availability query asks about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub required_capacity: i64,
}

impl AvailabilityWindow {
    pub fn one_month_from(today: NaiveDate, required_capacity: i64) -> Self {
        let to = today
            .checked_add_months(Months::new(1))
            .unwrap_or(today + Duration::days(30));
        Self {
            from: today,
            to,
            required_capacity,
        }
    }

    pub fn range(&self) -> DatePeriod {
        DatePeriod {
            from: Some(self.from.into()),
            to: Some(self.to.into()),
        }
    }
}

#[async_trait]
pub trait PluginClient: Send + Sync {
    async fn get_definition(&self) -> Result<PluginDefinition, HarnessError>;

    // Local only: resolves PLUGIN_CONFIG_<NAME> variables against the declared parameters
    fn configure(
        &self,
        definition: &PluginDefinition,
    ) -> Result<Vec<ConfigurationParameterValue>, HarnessError> {
        config::resolve_parameters(definition, |key| std::env::var(key).ok())
    }

    async fn search_products(
        &self,
        config: &[ConfigurationParameterValue],
    ) -> Result<Vec<BasicProductInfo>, HarnessError>;

    async fn get_product_by_id(
        &self,
        config: &[ConfigurationParameterValue],
        product_id: &str,
    ) -> Result<ProductDescription, HarnessError>;

    // Shallow availability: only the ids of products that have any
    async fn get_available_products(
        &self,
        config: &[ConfigurationParameterValue],
        window: &AvailabilityWindow,
        product_ids: &[String],
    ) -> Result<HashSet<String>, HarnessError>;

    // Deep availability: priced slots of one product
    async fn get_availability(
        &self,
        config: &[ConfigurationParameterValue],
        window: &AvailabilityWindow,
        product_id: &str,
    ) -> Result<Vec<ProductAvailabilityWithRatesResponse>, HarnessError>;

    async fn create_reservation(
        &self,
        config: &[ConfigurationParameterValue],
        reservation: &ReservationData,
    ) -> Result<ReservationResponse, HarnessError>;

    async fn confirm_booking(
        &self,
        config: &[ConfigurationParameterValue],
        reservation_confirmation_code: &str,
        reservation: &ReservationData,
        confirmation: &ConfirmationData,
    ) -> Result<ConfirmBookingResponse, HarnessError>;

    async fn create_and_confirm_booking(
        &self,
        config: &[ConfigurationParameterValue],
        reservation: &ReservationData,
        confirmation: &ConfirmationData,
    ) -> Result<ConfirmBookingResponse, HarnessError>;

    async fn cancel_booking(
        &self,
        config: &[ConfigurationParameterValue],
        booking_confirmation_code: &str,
    ) -> Result<CancelBookingResponse, HarnessError>;
}

pub fn connect(endpoint: &PluginEndpoint) -> Result<Box<dyn PluginClient>, HarnessError> {
    info!(address = %endpoint.address, transport = %endpoint.transport, tls = endpoint.tls, "Connecting to plugin");
    match endpoint.transport {
        TransportKind::Grpc => Ok(Box::new(GrpcPluginClient::new(endpoint.clone())?)),
        TransportKind::Rest => Ok(Box::new(RestPluginClient::new(endpoint)?)),
    }
}
