// HTTP/JSON wire envelopes for the responses whose payload is one of several variants.
// The JSON schema spells each variant out as a separate nullable property; these structs
// mirror that shape and fold it into the single-variant domain enums.

use serde::Deserialize;

use crate::model::{
    BookingResult, CancelBookingResponse, CancellationResult, ConfirmBookingResponse,
    PricePerBooking, PricePerPerson, RatePricing, RateWithPrice, ReservationResponse,
    ReservationResult, SuccessfulBooking, SuccessfulReservation,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateWithPriceJson {
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub rate_id: String,
    pub price_per_person: Option<PricePerPerson>,
    pub price_per_booking: Option<PricePerBooking>,
}

impl From<RateWithPriceJson> for RateWithPrice {
    fn from(json: RateWithPriceJson) -> Self {
        // Per-person pricing wins if a plugin fills in both
        let pricing = match (json.price_per_person, json.price_per_booking) {
            (Some(per_person), _) => Some(RatePricing::PerPerson(per_person)),
            (None, Some(per_booking)) => Some(RatePricing::PerBooking(per_booking)),
            (None, None) => None,
        };
        RateWithPrice {
            rate_id: json.rate_id,
            pricing,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuccessfulReservationJson {
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub reservation_confirmation_code: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FailedReservationJson {
    pub reservation_error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReservationResponseJson {
    pub successful_reservation: Option<SuccessfulReservationJson>,
    pub failed_reservation: Option<FailedReservationJson>,
}

impl From<ReservationResponseJson> for ReservationResponse {
    fn from(json: ReservationResponseJson) -> Self {
        let result = match (json.successful_reservation, json.failed_reservation) {
            (Some(success), _) => Some(ReservationResult::Successful(SuccessfulReservation {
                reservation_confirmation_code: success.reservation_confirmation_code,
            })),
            (None, Some(failure)) => Some(ReservationResult::Failed(failure.reservation_error)),
            (None, None) => None,
        };
        ReservationResponse { result }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuccessfulBookingJson {
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub booking_confirmation_code: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FailedBookingJson {
    pub booking_error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfirmBookingResponseJson {
    pub successful_booking: Option<SuccessfulBookingJson>,
    pub failed_booking: Option<FailedBookingJson>,
}

impl From<ConfirmBookingResponseJson> for ConfirmBookingResponse {
    fn from(json: ConfirmBookingResponseJson) -> Self {
        let result = match (json.successful_booking, json.failed_booking) {
            (Some(success), _) => Some(BookingResult::Successful(SuccessfulBooking {
                booking_confirmation_code: success.booking_confirmation_code,
            })),
            (None, Some(failure)) => Some(BookingResult::Failed(failure.booking_error)),
            (None, None) => None,
        };
        ConfirmBookingResponse { result }
    }
}

// Successful cancellation has no payload; only its presence matters
#[derive(Debug, Default, Deserialize)]
pub struct SuccessfulCancellationJson {}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FailedCancellationJson {
    pub cancellation_error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CancelBookingResponseJson {
    pub successful_cancellation: Option<SuccessfulCancellationJson>,
    pub failed_cancellation: Option<FailedCancellationJson>,
}

impl From<CancelBookingResponseJson> for CancelBookingResponse {
    fn from(json: CancelBookingResponseJson) -> Self {
        let result = match (json.successful_cancellation, json.failed_cancellation) {
            (Some(_), _) => Some(CancellationResult::Successful),
            (None, Some(failure)) => Some(CancellationResult::Failed(failure.cancellation_error)),
            (None, None) => None,
        };
        CancelBookingResponse { result }
    }
}
