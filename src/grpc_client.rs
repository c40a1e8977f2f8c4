// RPC transport. Every plugin method is consumed as a server stream; the bridge below
// collects it under a bounded wait and single-response methods then insist on
// exactly one message.

use std::collections::HashSet;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::{Certificate, ClientTlsConfig, Endpoint};
use tokio::time::Instant;
use tonic::Status;
use tracing::{debug, error, warn};

use crate::client::{AvailabilityWindow, PluginClient};
use crate::config::PluginEndpoint;
use crate::error::HarnessError;
use crate::grpc_mapping::parameters;
use crate::grpc_proto::{self as proto, method, PluginApiClient};
use crate::model::{
    BasicProductInfo, CancelBookingResponse, ConfigurationParameterValue, ConfirmBookingResponse,
    ConfirmationData, PluginDefinition, ProductAvailabilityWithRatesResponse, ProductDescription,
    ReservationData, ReservationResponse,
};

// Upper bound on how long one call may take before we go on with what we have
pub const MAX_WAIT: Duration = Duration::from_secs(600);

pub const SHARED_SECRET_HEADER: &str = "sharedsecret";

// Awaits the call and drains its response stream, giving up after `max_wait`.
// A timeout or a mid-stream error keeps whatever arrived before it; a call the plugin
// rejects outright is fatal.
pub async fn collect_within<T, S, F>(
    operation: &'static str,
    call: F,
    max_wait: Duration,
) -> Result<Vec<T>, HarnessError>
where
    F: Future<Output = Result<tonic::Response<S>, Status>>,
    S: Stream<Item = Result<T, Status>>,
{
    let mut received = Vec::new();
    let collect = async {
        let response = call.await.map_err(|status| {
            error!(operation, code = ?status.code(), message = status.message(), "Plugin rejected call");
            HarnessError::RpcError {
                operation,
                message: status.message().to_string(),
            }
        })?;
        let mut stream = std::pin::pin!(response.into_inner());
        while let Some(item) = stream.next().await {
            match item {
                Ok(message) => received.push(message),
                Err(status) => {
                    error!(operation, code = ?status.code(), message = status.message(), "Plugin erred mid-stream");
                    break;
                }
            }
        }
        Ok::<(), HarnessError>(())
    };
    let outcome = tokio::time::timeout(max_wait, collect).await;

    match outcome {
        Ok(Ok(())) => {
            debug!(operation, received = received.len(), "Call completed");
            Ok(received)
        }
        Ok(Err(e)) => Err(e),
        Err(_) => {
            warn!(
                operation,
                received = received.len(),
                max_wait_secs = max_wait.as_secs(),
                "Plugin did not complete in time, continuing with partial result"
            );
            Ok(received)
        }
    }
}

// Connection setup spends the same budget as the call that follows it. `None` means the
// deadline passed first, which reads as a call that produced nothing.
pub async fn connect_within<C, E, F>(
    operation: &'static str,
    address: &str,
    connect: F,
    deadline: Instant,
) -> Result<Option<C>, HarnessError>
where
    F: Future<Output = Result<C, E>>,
    E: Display,
{
    match tokio::time::timeout_at(deadline, connect).await {
        Ok(Ok(channel)) => Ok(Some(channel)),
        Ok(Err(e)) => {
            error!(operation, address, error = %e, "Could not connect to plugin");
            Err(HarnessError::TransportError(format!(
                "Could not connect to {}: {}",
                address, e
            )))
        }
        Err(_) => {
            warn!(operation, address, "Plugin not reachable in time, continuing with no result");
            Ok(None)
        }
    }
}

pub fn exactly_one<T>(operation: &'static str, responses: Vec<T>) -> Result<T, HarnessError> {
    let received = responses.len();
    let mut responses = responses.into_iter();
    match (responses.next(), responses.next()) {
        (Some(only), None) => Ok(only),
        _ => {
            error!(operation, received, "Expected exactly one response");
            Err(HarnessError::CardinalityViolation {
                operation,
                received,
            })
        }
    }
}

pub struct GrpcPluginClient {
    endpoint: PluginEndpoint,
    max_wait: Duration,
}

impl GrpcPluginClient {
    pub fn new(endpoint: PluginEndpoint) -> Result<Self, HarnessError> {
        // Reject malformed addresses and TLS material up front rather than on the first call
        channel_endpoint(&endpoint)?;
        Ok(Self {
            endpoint,
            max_wait: MAX_WAIT,
        })
    }

    fn request<T>(&self, message: T) -> Result<tonic::Request<T>, HarnessError> {
        let mut request = tonic::Request::new(message);
        if let Some(secret) = self.endpoint.shared_secret.as_deref() {
            let value: MetadataValue<Ascii> = secret.parse().map_err(|_| {
                HarnessError::ConfigError("Shared secret is not a valid header value".to_string())
            })?;
            request.metadata_mut().insert(SHARED_SECRET_HEADER, value);
        }
        Ok(request)
    }

    // One short-lived connection per call, dropped when the call returns
    async fn call<Req, Resp>(
        &self,
        operation: &'static str,
        path: &'static str,
        message: Req,
    ) -> Result<Vec<Resp>, HarnessError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let deadline = Instant::now() + self.max_wait;
        let endpoint = channel_endpoint(&self.endpoint)?;
        let channel =
            match connect_within(operation, &self.endpoint.address, endpoint.connect(), deadline)
                .await?
            {
                Some(channel) => channel,
                None => return Ok(Vec::new()),
            };
        let mut api = PluginApiClient::new(channel);
        let request = self.request(message)?;
        debug!(operation, "Calling plugin");
        collect_within(
            operation,
            api.server_streaming::<Req, Resp>(request, path),
            deadline.saturating_duration_since(Instant::now()),
        )
        .await
    }
}

fn channel_endpoint(endpoint: &PluginEndpoint) -> Result<Endpoint, HarnessError> {
    let scheme = if endpoint.tls { "https" } else { "http" };
    let uri = format!("{}://{}", scheme, endpoint.address);
    let channel = Endpoint::from_shared(uri.clone())
        .map_err(|e| HarnessError::ConfigError(format!("Invalid plugin address {}: {}", uri, e)))?;
    if !endpoint.tls {
        return Ok(channel);
    }

    let mut tls = ClientTlsConfig::new().with_native_roots();
    if let Some(pem) = &endpoint.trust_certificate {
        // Extra trust anchor for self-signed chains or ones missing from the system store
        tls = tls.ca_certificate(Certificate::from_pem(pem));
    }
    channel
        .tls_config(tls)
        .map_err(|e| HarnessError::ConfigError(format!("Could not build TLS config: {}", e)))
}

#[async_trait]
impl PluginClient for GrpcPluginClient {
    async fn get_definition(&self) -> Result<PluginDefinition, HarnessError> {
        let responses: Vec<proto::PluginDefinition> = self
            .call("getDefinition", method::GET_DEFINITION, proto::Empty {})
            .await?;
        Ok(exactly_one("getDefinition", responses)?.into())
    }

    async fn search_products(
        &self,
        config: &[ConfigurationParameterValue],
    ) -> Result<Vec<BasicProductInfo>, HarnessError> {
        let request = proto::SearchProductsRequest {
            parameters: parameters(config),
        };
        let responses: Vec<proto::BasicProductInfo> = self
            .call("searchProducts", method::SEARCH_PRODUCTS, request)
            .await?;
        Ok(responses.into_iter().map(Into::into).collect())
    }

    async fn get_product_by_id(
        &self,
        config: &[ConfigurationParameterValue],
        product_id: &str,
    ) -> Result<ProductDescription, HarnessError> {
        let request = proto::GetProductByIdRequest {
            parameters: parameters(config),
            external_id: product_id.to_string(),
        };
        let responses: Vec<proto::ProductDescription> = self
            .call("getProductById", method::GET_PRODUCT_BY_ID, request)
            .await?;
        Ok(exactly_one("getProductById", responses)?.into())
    }

    async fn get_available_products(
        &self,
        config: &[ConfigurationParameterValue],
        window: &AvailabilityWindow,
        product_ids: &[String],
    ) -> Result<HashSet<String>, HarnessError> {
        let request = proto::ProductsAvailabilityRequest {
            parameters: parameters(config),
            range: Some((&window.range()).into()),
            required_capacity: window.required_capacity,
            external_product_ids: product_ids.to_vec(),
        };
        let responses: Vec<proto::ProductsAvailabilityResponse> = self
            .call("getAvailableProducts", method::GET_AVAILABLE_PRODUCTS, request)
            .await?;
        Ok(responses
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
        let request = proto::ProductAvailabilityRequest {
            parameters: parameters(config),
            range: Some((&window.range()).into()),
            product_id: product_id.to_string(),
        };
        let responses: Vec<proto::ProductAvailabilityWithRatesResponse> = self
            .call("getProductAvailability", method::GET_PRODUCT_AVAILABILITY, request)
            .await?;
        Ok(responses.into_iter().map(Into::into).collect())
    }

    async fn create_reservation(
        &self,
        config: &[ConfigurationParameterValue],
        reservation: &ReservationData,
    ) -> Result<ReservationResponse, HarnessError> {
        let request = proto::ReservationRequest {
            parameters: parameters(config),
            reservation_data: Some(reservation.into()),
        };
        let responses: Vec<proto::ReservationResponse> = self
            .call("createReservation", method::CREATE_RESERVATION, request)
            .await?;
        Ok(exactly_one("createReservation", responses)?.into())
    }

    async fn confirm_booking(
        &self,
        config: &[ConfigurationParameterValue],
        reservation_confirmation_code: &str,
        reservation: &ReservationData,
        confirmation: &ConfirmationData,
    ) -> Result<ConfirmBookingResponse, HarnessError> {
        let request = proto::ConfirmBookingRequest {
            parameters: parameters(config),
            reservation_confirmation_code: reservation_confirmation_code.to_string(),
            reservation_data: Some(reservation.into()),
            confirmation_data: Some(confirmation.into()),
        };
        let responses: Vec<proto::ConfirmBookingResponse> = self
            .call("confirmBooking", method::CONFIRM_BOOKING, request)
            .await?;
        Ok(exactly_one("confirmBooking", responses)?.into())
    }

    async fn create_and_confirm_booking(
        &self,
        config: &[ConfigurationParameterValue],
        reservation: &ReservationData,
        confirmation: &ConfirmationData,
    ) -> Result<ConfirmBookingResponse, HarnessError> {
        let request = proto::CreateConfirmBookingRequest {
            parameters: parameters(config),
            reservation_data: Some(reservation.into()),
            confirmation_data: Some(confirmation.into()),
        };
        let responses: Vec<proto::ConfirmBookingResponse> = self
            .call(
                "createAndConfirmBooking",
                method::CREATE_AND_CONFIRM_BOOKING,
                request,
            )
            .await?;
        Ok(exactly_one("createAndConfirmBooking", responses)?.into())
    }

    async fn cancel_booking(
        &self,
        config: &[ConfigurationParameterValue],
        booking_confirmation_code: &str,
    ) -> Result<CancelBookingResponse, HarnessError> {
        let request = proto::CancelBookingRequest {
            parameters: parameters(config),
            booking_confirmation_code: booking_confirmation_code.to_string(),
        };
        let responses: Vec<proto::CancelBookingResponse> = self
            .call("cancelBooking", method::CANCEL_BOOKING, request)
            .await?;
        Ok(exactly_one("cancelBooking", responses)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TransportKind;
    use futures::{future, stream};
    use test_case::test_case;
    use tokio_test::{assert_pending, assert_ready_ok};

    fn respond<S>(stream: S) -> future::Ready<Result<tonic::Response<S>, Status>> {
        future::ready(Ok(tonic::Response::new(stream)))
    }

    #[tokio::test]
    async fn test_collects_whole_stream() {
        let call = respond(stream::iter(vec![Ok(1), Ok(2), Ok(3)]));
        let received = collect_within("searchProducts", call, MAX_WAIT).await.unwrap();
        assert_eq!(received, vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_keeps_partial_result() {
        let call = respond(stream::iter(vec![Ok::<_, Status>("first")]).chain(stream::pending()));
        let received = collect_within("searchProducts", call, MAX_WAIT).await.unwrap();
        assert_eq!(received, vec!["first"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_that_never_answers_yields_nothing() {
        let call = future::pending::<Result<tonic::Response<stream::Empty<Result<i32, Status>>>, Status>>();
        let received = collect_within("getDefinition", call, MAX_WAIT).await.unwrap();
        assert!(received.is_empty());
        assert!(matches!(
            exactly_one("getDefinition", received),
            Err(HarnessError::CardinalityViolation { received: 0, .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bridge_waits_for_the_full_bound() {
        let call = respond(stream::pending::<Result<i32, Status>>());
        let mut collecting = tokio_test::task::spawn(collect_within("getDefinition", call, MAX_WAIT));

        assert_pending!(collecting.poll());
        tokio::time::advance(MAX_WAIT - Duration::from_secs(1)).await;
        assert_pending!(collecting.poll());
        tokio::time::advance(Duration::from_secs(1)).await;
        let received = assert_ready_ok!(collecting.poll());
        assert!(received.is_empty());
    }

    #[tokio::test]
    async fn test_mid_stream_error_keeps_earlier_messages() {
        let call = respond(stream::iter(vec![
            Ok(1),
            Err(Status::internal("boom")),
            Ok(2),
        ]));
        let received = collect_within("getProductAvailability", call, MAX_WAIT)
            .await
            .unwrap();
        assert_eq!(received, vec![1]);
    }

    #[tokio::test]
    async fn test_rejected_call_is_fatal() {
        let call = future::ready(Err::<tonic::Response<stream::Empty<Result<i32, Status>>>, _>(
            Status::unauthenticated("bad secret"),
        ));
        match collect_within("getDefinition", call, MAX_WAIT).await {
            Err(HarnessError::RpcError { operation, message }) => {
                assert_eq!(operation, "getDefinition");
                assert_eq!(message, "bad secret");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_connection_setup_counts_against_the_bound() {
        let deadline = Instant::now() + MAX_WAIT;
        let connect = future::pending::<Result<(), String>>();
        let mut connecting =
            tokio_test::task::spawn(connect_within("getDefinition", "localhost:1", connect, deadline));

        assert_pending!(connecting.poll());
        tokio::time::advance(MAX_WAIT).await;
        let channel = assert_ready_ok!(connecting.poll());
        assert!(channel.is_none());
    }

    #[tokio::test]
    async fn test_connection_within_bound() {
        let deadline = Instant::now() + MAX_WAIT;
        let connected = connect_within("getDefinition", "localhost:1", future::ready(Ok::<_, String>(5)), deadline)
            .await
            .unwrap();
        assert_eq!(connected, Some(5));

        let refused = connect_within(
            "getDefinition",
            "localhost:1",
            future::ready(Err::<(), _>("connection refused".to_string())),
            deadline,
        )
        .await;
        assert!(matches!(refused, Err(HarnessError::TransportError(_))));
    }

    #[test_case(vec![], false ; "none")]
    #[test_case(vec![7], true ; "one")]
    #[test_case(vec![7, 8], false ; "two")]
    fn test_exactly_one(responses: Vec<i32>, ok: bool) {
        let count = responses.len();
        match exactly_one("getProductById", responses) {
            Ok(value) => {
                assert!(ok);
                assert_eq!(value, 7);
            }
            Err(HarnessError::CardinalityViolation { received, .. }) => {
                assert!(!ok);
                assert_eq!(received, count);
            }
            Err(other) => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_shared_secret_travels_as_metadata() {
        let mut endpoint = PluginEndpoint::new("localhost:8080", TransportKind::Grpc);
        endpoint.shared_secret = Some("s3cret".to_string());
        let client = GrpcPluginClient::new(endpoint).unwrap();

        let request = client.request(proto::Empty {}).unwrap();
        let secret = request.metadata().get(SHARED_SECRET_HEADER).unwrap();
        assert_eq!(secret.to_str().unwrap(), "s3cret");
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let endpoint = PluginEndpoint::new("not a host", TransportKind::Grpc);
        assert!(matches!(
            GrpcPluginClient::new(endpoint),
            Err(HarnessError::ConfigError(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_plugin_is_a_transport_error() {
        // Port 9 (discard) is closed on test machines
        let endpoint = PluginEndpoint::new("127.0.0.1:9", TransportKind::Grpc);
        let client = GrpcPluginClient::new(endpoint).unwrap();
        assert!(matches!(
            client.get_definition().await,
            Err(HarnessError::TransportError(_))
        ));
    }
}
