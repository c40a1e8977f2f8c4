// End-to-end run against one plugin: definition, configuration, catalog, availability
// discovery, product, priced availability, booking and cancellation. Steps run strictly
// in order and every plugin response is validated before any of its fields is used.

use std::fmt;

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info};

use crate::client::{AvailabilityWindow, PluginClient};
use crate::error::HarnessError;
use crate::fake_data;
use crate::model::{
    BasicProductInfo, BookingResult, CancellationResult, ConfigurationParameterValue,
    PluginCapability, ReservationResult,
};
use crate::validation::{validate_each_or_fail, validate_or_fail};
use crate::validators;

// Products asked about per shallow availability query
pub const DISCOVERY_BATCH_SIZE: usize = 3;
pub const REQUIRED_CAPACITY: i64 = 1;

// Plugin answered correctly but negatively; the run stops without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    NoAvailability,
    DeepAvailabilityInconsistent,
    ReservationFailed,
    BookingFailed,
    CancellationFailed,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StopReason::NoAvailability => "no product in the catalog has availability",
            StopReason::DeepAvailabilityInconsistent => {
                "no priced availability even though shallow availability was positive"
            }
            StopReason::ReservationFailed => "could not make a successful reservation",
            StopReason::BookingFailed => "could not confirm the booking",
            StopReason::CancellationFailed => "could not cancel the booking",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub plugin_name: String,
    pub catalog_size: usize,
    pub product_id: String,
    pub reservation_confirmation_code: Option<String>,
    pub booking_confirmation_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RunSummary),
    Stopped(StopReason),
}

pub struct Harness<'a> {
    client: &'a dyn PluginClient,
    rng: StdRng,
    today: NaiveDate,
}

impl<'a> Harness<'a> {
    pub fn new(client: &'a dyn PluginClient, seed: u64) -> Self {
        Self {
            client,
            rng: StdRng::seed_from_u64(seed),
            today: Local::now().date_naive(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub async fn run_end_to_end(&mut self) -> Result<RunOutcome, HarnessError> {
        let client = self.client;

        // step 1: definition
        let definition = client.get_definition().await?;
        validate_or_fail("plugin definition", &definition, &validators::plugin_definition)?;
        info!(plugin = %definition.name, "Received plugin definition");
        debug!(?definition, "Definition");

        // step 2: parameters from the environment, no remote call
        let config = client.configure(&definition)?;
        info!(parameters = config.len(), "Resolved plugin configuration");

        // step 3: catalog
        let products = client.search_products(&config).await?;
        if products.is_empty() {
            error!("Plugin returned no products");
            return Err(HarnessError::EmptyCatalog);
        }
        validate_each_or_fail("product", &products, &validators::basic_product_info)?;
        info!(products = products.len(), "Received product catalog");

        // step 4: shallow availability, a few products at a time
        let window = AvailabilityWindow::one_month_from(self.today, REQUIRED_CAPACITY);
        let product_id = match self.discover_available_product(&config, &window, &products).await? {
            Some(product_id) => product_id,
            None => {
                error!("Could not find products with availability");
                return Ok(RunOutcome::Stopped(StopReason::NoAvailability));
            }
        };
        info!(product_id = %product_id, "Will inquire and make bookings for product");

        // step 5: product description
        let product = client.get_product_by_id(&config, &product_id).await?;
        validate_or_fail("product description", &product, &validators::product_description)?;
        info!(product_id = %product_id, name = %product.name, "Product inquiry successful");

        // step 6: priced availability
        let slots = client.get_availability(&config, &window, &product.id).await?;
        if slots.is_empty() {
            error!(product_id = %product_id, "No deep availability found even though shallow availability result was positive");
            return Ok(RunOutcome::Stopped(StopReason::DeepAvailabilityInconsistent));
        }
        validate_each_or_fail("availability", &slots, &validators::availability_with_rates)?;
        info!(product_id = %product_id, slots = slots.len(), "Found priced availability");

        // step 7: book, in two steps when the plugin supports reservations
        let slot = slots
            .choose(&mut self.rng)
            .ok_or_else(|| HarnessError::Unsupported("No availability to choose from".to_string()))?;
        let reservation_data = fake_data::reservation_data(&mut self.rng, &product, slot, self.today)?;
        validate_or_fail("reservation data", &reservation_data, &validators::reservation_data)?;
        let confirmation_data = fake_data::confirmation_data(&mut self.rng, &product)?;

        let mut reservation_confirmation_code = None;
        let booking = if definition.supports(PluginCapability::SupportsReservations) {
            let reservation = client.create_reservation(&config, &reservation_data).await?;
            validate_or_fail("reservation response", &reservation, &validators::reservation_response)?;
            let code = match reservation.result {
                Some(ReservationResult::Successful(success)) => success.reservation_confirmation_code,
                other => {
                    error!(result = ?other, "Could not make successful reservation");
                    return Ok(RunOutcome::Stopped(StopReason::ReservationFailed));
                }
            };
            info!(reservation_confirmation_code = %code, "Successfully reserved booking");
            let booking = client
                .confirm_booking(&config, &code, &reservation_data, &confirmation_data)
                .await?;
            reservation_confirmation_code = Some(code);
            booking
        } else {
            client
                .create_and_confirm_booking(&config, &reservation_data, &confirmation_data)
                .await?
        };
        validate_or_fail("booking response", &booking, &validators::confirm_booking_response)?;
        let booking_confirmation_code = match booking.result {
            Some(BookingResult::Successful(success)) => success.booking_confirmation_code,
            other => {
                error!(result = ?other, "Could not successfully confirm booking");
                return Ok(RunOutcome::Stopped(StopReason::BookingFailed));
            }
        };
        info!(booking_confirmation_code = %booking_confirmation_code, "Successfully confirmed booking");

        // step 8: cancel what we just booked
        let cancellation = client
            .cancel_booking(&config, &booking_confirmation_code)
            .await?;
        validate_or_fail("cancellation response", &cancellation, &validators::cancel_booking_response)?;
        if let Some(CancellationResult::Successful) = cancellation.result {
            info!(booking_confirmation_code = %booking_confirmation_code, "Successfully cancelled booking");
        } else {
            error!(result = ?cancellation.result, "Could not successfully cancel booking");
            return Ok(RunOutcome::Stopped(StopReason::CancellationFailed));
        }

        Ok(RunOutcome::Completed(RunSummary {
            plugin_name: definition.name,
            catalog_size: products.len(),
            product_id,
            reservation_confirmation_code,
            booking_confirmation_code,
        }))
    }

    // Draws batches without replacement until one has availability or the catalog runs out
    async fn discover_available_product(
        &mut self,
        config: &[ConfigurationParameterValue],
        window: &AvailabilityWindow,
        products: &[BasicProductInfo],
    ) -> Result<Option<String>, HarnessError> {
        let mut remaining: Vec<String> = products.iter().map(|product| product.id.clone()).collect();
        loop {
            let mut batch = Vec::with_capacity(DISCOVERY_BATCH_SIZE);
            while batch.len() < DISCOVERY_BATCH_SIZE && !remaining.is_empty() {
                let index = self.rng.gen_range(0..remaining.len());
                batch.push(remaining.swap_remove(index));
            }
            if batch.is_empty() {
                return Ok(None);
            }

            debug!(?batch, "Querying shallow availability");
            let available = self
                .client
                .get_available_products(config, window, &batch)
                .await?;
            if !available.is_empty() {
                // Sorted so the pick depends only on the seed
                let mut available: Vec<String> = available.into_iter().collect();
                available.sort();
                return Ok(available.choose(&mut self.rng).cloned());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock_plugin::{MockPlugin, BOOKING_CODE, RESERVATION_CODE};
    use crate::model::{BookingResult, ConfirmBookingResponse, ReservationResponse};
    use std::collections::HashSet;
    use test_case::test_case;

    const CATALOG: [&str; 7] = ["p1", "p2", "p3", "p4", "p5", "p6", "p7"];

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn plugin(capabilities: Vec<PluginCapability>, available: &[&str]) -> MockPlugin {
        MockPlugin::new(
            capabilities,
            &CATALOG,
            available,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        )
    }

    fn full_capabilities() -> Vec<PluginCapability> {
        vec![
            PluginCapability::SupportsReservations,
            PluginCapability::SupportsCancellations,
        ]
    }

    async fn run(plugin: &MockPlugin, seed: u64) -> Result<RunOutcome, HarnessError> {
        Harness::new(plugin, seed)
            .with_today(today())
            .run_end_to_end()
            .await
    }

    #[tokio::test]
    async fn test_full_run_with_reservations() {
        let plugin = plugin(full_capabilities(), &["p3"]);
        let outcome = run(&plugin, 1).await.unwrap();

        assert_eq!(
            outcome,
            RunOutcome::Completed(RunSummary {
                plugin_name: "mock-plugin".to_string(),
                catalog_size: 7,
                product_id: "p3".to_string(),
                reservation_confirmation_code: Some(RESERVATION_CODE.to_string()),
                booking_confirmation_code: BOOKING_CODE.to_string(),
            })
        );
        let calls = plugin.calls();
        assert!(calls.contains(&"create_reservation"));
        assert!(calls.contains(&"confirm_booking"));
        assert!(!calls.contains(&"create_and_confirm_booking"));
        assert_eq!(calls.last(), Some(&"cancel_booking"));
    }

    #[tokio::test]
    async fn test_without_reservation_support_books_in_one_step() {
        let plugin = plugin(vec![PluginCapability::SupportsCancellations], &["p3"]);
        let outcome = run(&plugin, 2).await.unwrap();

        assert!(matches!(
            outcome,
            RunOutcome::Completed(RunSummary {
                reservation_confirmation_code: None,
                ..
            })
        ));
        let calls = plugin.calls();
        assert!(calls.contains(&"create_and_confirm_booking"));
        assert!(!calls.contains(&"create_reservation"));
        assert!(!calls.contains(&"confirm_booking"));
    }

    #[test_case(0)]
    #[test_case(7)]
    #[test_case(42)]
    #[test_case(1234)]
    #[tokio::test]
    async fn test_discovery_finds_the_only_available_product(seed: u64) {
        let plugin = plugin(full_capabilities(), &["p5"]);
        let outcome = run(&plugin, seed).await.unwrap();

        match outcome {
            RunOutcome::Completed(summary) => assert_eq!(summary.product_id, "p5"),
            other => panic!("unexpected {:?}", other),
        }

        let queries = plugin.shallow_queries();
        assert!(queries.iter().all(|batch| !batch.is_empty() && batch.len() <= 3));
        let queried: Vec<&String> = queries.iter().flatten().collect();
        let distinct: HashSet<&String> = queried.iter().copied().collect();
        assert_eq!(queried.len(), distinct.len(), "an id was queried twice");
        // Only the last batch may contain the available product
        assert!(queries.last().unwrap().contains(&"p5".to_string()));
        assert!(queries[..queries.len() - 1]
            .iter()
            .all(|batch| !batch.contains(&"p5".to_string())));
    }

    #[tokio::test]
    async fn test_exhausted_catalog_stops_cleanly() {
        let plugin = plugin(full_capabilities(), &[]);
        let outcome = run(&plugin, 3).await.unwrap();

        assert_eq!(outcome, RunOutcome::Stopped(StopReason::NoAvailability));
        let sizes: Vec<usize> = plugin.shallow_queries().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
        assert!(!plugin.calls().contains(&"get_product_by_id"));
    }

    #[tokio::test]
    async fn test_empty_catalog_is_fatal() {
        let mut plugin = plugin(full_capabilities(), &[]);
        plugin.products.clear();
        assert!(matches!(run(&plugin, 4).await, Err(HarnessError::EmptyCatalog)));
    }

    #[tokio::test]
    async fn test_invalid_definition_aborts_before_configuration() {
        let plugin = plugin(vec![], &["p1"]);
        match run(&plugin, 5).await {
            Err(HarnessError::ValidationFailed { subject, errors }) => {
                assert_eq!(subject, "plugin definition");
                assert_eq!(errors.len(), 1);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(plugin.calls(), vec!["get_definition"]);
    }

    #[tokio::test]
    async fn test_invalid_product_in_catalog_is_fatal() {
        let mut plugin = plugin(full_capabilities(), &["p1"]);
        plugin.products[2].name.clear();
        assert!(matches!(
            run(&plugin, 6).await,
            Err(HarnessError::ValidationFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_deep_availability_stops_cleanly() {
        let mut plugin = plugin(full_capabilities(), &["p2"]);
        plugin.slots.clear();
        assert_eq!(
            run(&plugin, 7).await.unwrap(),
            RunOutcome::Stopped(StopReason::DeepAvailabilityInconsistent)
        );
    }

    #[tokio::test]
    async fn test_failed_reservation_skips_confirmation() {
        let mut plugin = plugin(full_capabilities(), &["p2"]);
        plugin.reservation = ReservationResponse {
            result: Some(ReservationResult::Failed(Some("no seats".to_string()))),
        };
        assert_eq!(
            run(&plugin, 8).await.unwrap(),
            RunOutcome::Stopped(StopReason::ReservationFailed)
        );
        assert!(!plugin.calls().contains(&"confirm_booking"));
    }

    #[tokio::test]
    async fn test_failed_booking_skips_cancellation() {
        let mut plugin = plugin(full_capabilities(), &["p2"]);
        plugin.booking = ConfirmBookingResponse {
            result: Some(BookingResult::Failed(None)),
        };
        assert_eq!(
            run(&plugin, 9).await.unwrap(),
            RunOutcome::Stopped(StopReason::BookingFailed)
        );
        assert!(!plugin.calls().contains(&"cancel_booking"));
    }

    #[tokio::test]
    async fn test_failed_cancellation_stops() {
        let mut plugin = plugin(full_capabilities(), &["p2"]);
        plugin.cancellation.result = Some(CancellationResult::Failed(None));
        assert_eq!(
            run(&plugin, 10).await.unwrap(),
            RunOutcome::Stopped(StopReason::CancellationFailed)
        );
    }

    #[tokio::test]
    async fn test_missing_booking_result_is_a_validation_failure() {
        let mut plugin = plugin(full_capabilities(), &["p2"]);
        plugin.booking = ConfirmBookingResponse { result: None };
        assert!(matches!(
            run(&plugin, 11).await,
            Err(HarnessError::ValidationFailed { .. })
        ));
    }
}
