// RPC wire schema of the plugin API, declared by hand with prost derives, and a
// minimal tonic client for the PluginApi service.
// Every method is consumed as a server stream so callers can count responses.

use tonic::codec::{ProstCodec, Streaming};
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;

macro_rules! wire_enum {
    ($name:ident { $($variant:ident = $value:expr),* $(,)? }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum $name {
            $($variant = $value),*
        }
    };
}

wire_enum!(PluginCapability {
    Unassigned = 0,
    SupportsReservations = 1,
    SupportsCancellations = 2,
});

wire_enum!(PluginParameterDataType {
    Unassigned = 0,
    String = 1,
    Boolean = 2,
    Double = 3,
    Long = 4,
});

wire_enum!(BookingType {
    Unassigned = 0,
    DateAndTime = 1,
    Date = 2,
    Pass = 3,
});

wire_enum!(MeetingType {
    Unassigned = 0,
    MeetOnLocation = 1,
    PickUp = 2,
    MeetOnLocationOrPickUp = 3,
});

wire_enum!(ProductCategory {
    Unassigned = 0,
    Activities = 1,
    Attractions = 2,
    Tours = 3,
    Transport = 4,
    Rentals = 5,
});

wire_enum!(TicketSupport {
    Unassigned = 0,
    TicketPerBooking = 1,
    TicketPerPerson = 2,
    TicketsNotRequired = 3,
});

wire_enum!(TicketType {
    Unassigned = 0,
    QrCode = 1,
    Barcode = 2,
    Pdf = 3,
});

wire_enum!(ContactField {
    Unassigned = 0,
    Address = 1,
    Country = 2,
    Email = 3,
    FirstName = 4,
    Gender = 5,
    Language = 6,
    LastName = 7,
    Nationality = 8,
    Organization = 9,
    PassportExpiry = 10,
    PassportNumber = 11,
    Phone = 12,
    PostCode = 13,
    Title = 14,
});

wire_enum!(Gender {
    Unassigned = 0,
    Male = 1,
    Female = 2,
    Other = 3,
});

wire_enum!(Title {
    Unassigned = 0,
    Mr = 1,
    Mrs = 2,
    Ms = 3,
    Miss = 4,
});

wire_enum!(SalesSegment {
    Unassigned = 0,
    Marketplace = 1,
    AgentArea = 2,
    DirectOffline = 3,
    Ota = 4,
    DirectOnline = 5,
});

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Empty {}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Date {
    #[prost(int32, tag = "1")]
    pub year: i32,
    #[prost(int32, tag = "2")]
    pub month: i32,
    #[prost(int32, tag = "3")]
    pub day: i32,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Time {
    #[prost(int32, tag = "1")]
    pub hour: i32,
    #[prost(int32, tag = "2")]
    pub minute: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DatePeriod {
    #[prost(message, optional, tag = "1")]
    pub from: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub to: Option<Date>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PluginConfigurationParameter {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bool, tag = "2")]
    pub required: bool,
    #[prost(enumeration = "PluginParameterDataType", tag = "3")]
    pub r#type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PluginDefinition {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(enumeration = "PluginCapability", repeated, tag = "3")]
    pub capabilities: Vec<i32>,
    #[prost(message, repeated, tag = "4")]
    pub parameters: Vec<PluginConfigurationParameter>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PluginConfigurationParameterValue {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchProductsRequest {
    #[prost(message, repeated, tag = "1")]
    pub parameters: Vec<PluginConfigurationParameterValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PricingCategory {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub label: String,
    #[prost(int32, optional, tag = "3")]
    pub min_age: Option<i32>,
    #[prost(int32, optional, tag = "4")]
    pub max_age: Option<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BasicProductInfo {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(message, repeated, tag = "4")]
    pub pricing_categories: Vec<PricingCategory>,
    #[prost(string, repeated, tag = "5")]
    pub cities: Vec<String>,
    #[prost(string, repeated, tag = "6")]
    pub countries: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductByIdRequest {
    #[prost(message, repeated, tag = "1")]
    pub parameters: Vec<PluginConfigurationParameterValue>,
    #[prost(string, tag = "2")]
    pub external_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Rate {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub label: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Address {
    #[prost(string, tag = "1")]
    pub address_line1: String,
    #[prost(string, tag = "2")]
    pub city: String,
    #[prost(string, tag = "3")]
    pub post_code: String,
    #[prost(string, tag = "4")]
    pub country_code: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PickupDropoffPlace {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(message, optional, tag = "2")]
    pub address: Option<Address>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpeningHoursTimeInterval {
    #[prost(string, tag = "1")]
    pub open_from: String,
    #[prost(int32, tag = "2")]
    pub open_for_hours: i32,
    #[prost(int32, tag = "3")]
    pub open_for_minutes: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProductDescription {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(message, repeated, tag = "4")]
    pub pricing_categories: Vec<PricingCategory>,
    #[prost(message, repeated, tag = "5")]
    pub rates: Vec<Rate>,
    #[prost(enumeration = "BookingType", tag = "6")]
    pub booking_type: i32,
    #[prost(enumeration = "MeetingType", tag = "7")]
    pub meeting_type: i32,
    #[prost(message, repeated, tag = "8")]
    pub pickup_places: Vec<PickupDropoffPlace>,
    #[prost(bool, tag = "9")]
    pub custom_pickup_place_allowed: bool,
    #[prost(int32, optional, tag = "10")]
    pub pickup_minutes_before: Option<i32>,
    #[prost(bool, tag = "11")]
    pub dropoff_available: bool,
    #[prost(bool, tag = "12")]
    pub custom_dropoff_place_allowed: bool,
    #[prost(message, repeated, tag = "13")]
    pub dropoff_places: Vec<PickupDropoffPlace>,
    #[prost(enumeration = "ProductCategory", tag = "14")]
    pub product_category: i32,
    #[prost(enumeration = "TicketSupport", repeated, tag = "15")]
    pub ticket_support: Vec<i32>,
    #[prost(enumeration = "TicketType", tag = "16")]
    pub ticket_type: i32,
    #[prost(message, repeated, tag = "17")]
    pub start_times: Vec<Time>,
    #[prost(string, repeated, tag = "18")]
    pub countries: Vec<String>,
    #[prost(string, repeated, tag = "19")]
    pub cities: Vec<String>,
    #[prost(message, repeated, tag = "20")]
    pub opening_hours: Vec<OpeningHoursTimeInterval>,
    #[prost(enumeration = "ContactField", repeated, tag = "21")]
    pub enforced_lead_passenger_fields: Vec<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProductsAvailabilityRequest {
    #[prost(message, repeated, tag = "1")]
    pub parameters: Vec<PluginConfigurationParameterValue>,
    #[prost(message, optional, tag = "2")]
    pub range: Option<DatePeriod>,
    #[prost(int64, tag = "3")]
    pub required_capacity: i64,
    #[prost(string, repeated, tag = "4")]
    pub external_product_ids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProductsAvailabilityResponse {
    #[prost(string, tag = "1")]
    pub product_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProductAvailabilityRequest {
    #[prost(message, repeated, tag = "1")]
    pub parameters: Vec<PluginConfigurationParameterValue>,
    #[prost(message, optional, tag = "2")]
    pub range: Option<DatePeriod>,
    #[prost(string, tag = "3")]
    pub product_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Price {
    #[prost(string, tag = "1")]
    pub amount: String,
    #[prost(string, tag = "2")]
    pub currency: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PricingCategoryWithPrice {
    #[prost(string, tag = "1")]
    pub pricing_category_id: String,
    #[prost(message, optional, tag = "2")]
    pub price: Option<Price>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PricePerPerson {
    #[prost(message, repeated, tag = "1")]
    pub pricing_category_with_price: Vec<PricingCategoryWithPrice>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PricePerBooking {
    #[prost(message, optional, tag = "1")]
    pub price: Option<Price>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RateWithPrice {
    #[prost(string, tag = "1")]
    pub rate_id: String,
    #[prost(oneof = "rate_with_price::PricingOptions", tags = "2, 3")]
    pub pricing_options: Option<rate_with_price::PricingOptions>,
}

pub mod rate_with_price {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum PricingOptions {
        #[prost(message, tag = "2")]
        PricePerPerson(super::PricePerPerson),
        #[prost(message, tag = "3")]
        PricePerBooking(super::PricePerBooking),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProductAvailabilityWithRatesResponse {
    #[prost(int32, tag = "1")]
    pub capacity: i32,
    #[prost(message, optional, tag = "2")]
    pub date: Option<Date>,
    #[prost(message, optional, tag = "3")]
    pub time: Option<Time>,
    #[prost(message, optional, tag = "4")]
    pub pickup_time: Option<Time>,
    #[prost(message, repeated, tag = "5")]
    pub rates: Vec<RateWithPrice>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Contact {
    #[prost(enumeration = "Title", tag = "1")]
    pub title: i32,
    #[prost(string, tag = "2")]
    pub first_name: String,
    #[prost(string, tag = "3")]
    pub last_name: String,
    #[prost(string, tag = "4")]
    pub email: String,
    #[prost(string, tag = "5")]
    pub phone: String,
    #[prost(string, tag = "6")]
    pub language: String,
    #[prost(string, tag = "7")]
    pub nationality: String,
    #[prost(enumeration = "Gender", tag = "8")]
    pub gender: i32,
    #[prost(string, tag = "9")]
    pub organization: String,
    #[prost(string, tag = "10")]
    pub passport_number: String,
    #[prost(message, optional, tag = "11")]
    pub passport_expiry: Option<Date>,
    #[prost(string, tag = "12")]
    pub address: String,
    #[prost(string, tag = "13")]
    pub post_code: String,
    #[prost(string, tag = "14")]
    pub country: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Passenger {
    #[prost(string, tag = "1")]
    pub pricing_category_id: String,
    #[prost(message, optional, tag = "2")]
    pub contact: Option<Contact>,
    #[prost(message, optional, tag = "3")]
    pub price_per_passenger: Option<Price>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Reservation {
    #[prost(string, tag = "1")]
    pub rate_id: String,
    #[prost(message, repeated, tag = "2")]
    pub passengers: Vec<Passenger>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BookingSourceBookingChannel {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub system_type: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BookingSourceCompany {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub company_registration_number: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BookingSourceExtranetUser {
    #[prost(string, tag = "1")]
    pub email: String,
    #[prost(string, tag = "2")]
    pub full_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BookingSource {
    #[prost(enumeration = "SalesSegment", tag = "1")]
    pub segment: i32,
    #[prost(message, optional, tag = "2")]
    pub booking_channel: Option<BookingSourceBookingChannel>,
    #[prost(message, optional, tag = "3")]
    pub marketplace_vendor: Option<BookingSourceCompany>,
    #[prost(message, optional, tag = "4")]
    pub booking_agent: Option<BookingSourceCompany>,
    #[prost(message, optional, tag = "5")]
    pub extranet_user: Option<BookingSourceExtranetUser>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReservationData {
    #[prost(string, tag = "1")]
    pub product_id: String,
    #[prost(message, optional, tag = "2")]
    pub customer_contact: Option<Contact>,
    #[prost(string, tag = "3")]
    pub notes: String,
    #[prost(message, optional, tag = "4")]
    pub date: Option<Date>,
    #[prost(message, optional, tag = "5")]
    pub time: Option<Time>,
    #[prost(bool, tag = "6")]
    pub pickup_required: bool,
    #[prost(string, tag = "7")]
    pub custom_pickup_place: String,
    #[prost(message, optional, tag = "8")]
    pub predefined_pickup_place: Option<PickupDropoffPlace>,
    #[prost(bool, tag = "9")]
    pub dropoff_required: bool,
    #[prost(message, repeated, tag = "10")]
    pub reservations: Vec<Reservation>,
    #[prost(string, tag = "11")]
    pub platform_id: String,
    #[prost(message, optional, tag = "12")]
    pub booking_source: Option<BookingSource>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfirmationData {
    #[prost(enumeration = "TicketSupport", tag = "1")]
    pub ticket_support: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReservationRequest {
    #[prost(message, repeated, tag = "1")]
    pub parameters: Vec<PluginConfigurationParameterValue>,
    #[prost(message, optional, tag = "2")]
    pub reservation_data: Option<ReservationData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SuccessfulReservation {
    #[prost(string, tag = "1")]
    pub reservation_confirmation_code: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FailedReservation {
    #[prost(string, tag = "1")]
    pub reservation_error: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReservationResponse {
    #[prost(oneof = "reservation_response::ReservationResult", tags = "1, 2")]
    pub reservation_result: Option<reservation_response::ReservationResult>,
}

pub mod reservation_response {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ReservationResult {
        #[prost(message, tag = "1")]
        SuccessfulReservation(super::SuccessfulReservation),
        #[prost(message, tag = "2")]
        FailedReservation(super::FailedReservation),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfirmBookingRequest {
    #[prost(message, repeated, tag = "1")]
    pub parameters: Vec<PluginConfigurationParameterValue>,
    #[prost(string, tag = "2")]
    pub reservation_confirmation_code: String,
    #[prost(message, optional, tag = "3")]
    pub reservation_data: Option<ReservationData>,
    #[prost(message, optional, tag = "4")]
    pub confirmation_data: Option<ConfirmationData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateConfirmBookingRequest {
    #[prost(message, repeated, tag = "1")]
    pub parameters: Vec<PluginConfigurationParameterValue>,
    #[prost(message, optional, tag = "2")]
    pub reservation_data: Option<ReservationData>,
    #[prost(message, optional, tag = "3")]
    pub confirmation_data: Option<ConfirmationData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SuccessfulBooking {
    #[prost(string, tag = "1")]
    pub booking_confirmation_code: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FailedBooking {
    #[prost(string, tag = "1")]
    pub booking_error: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfirmBookingResponse {
    #[prost(oneof = "confirm_booking_response::BookingResult", tags = "1, 2")]
    pub booking_result: Option<confirm_booking_response::BookingResult>,
}

pub mod confirm_booking_response {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum BookingResult {
        #[prost(message, tag = "1")]
        SuccessfulBooking(super::SuccessfulBooking),
        #[prost(message, tag = "2")]
        FailedBooking(super::FailedBooking),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelBookingRequest {
    #[prost(message, repeated, tag = "1")]
    pub parameters: Vec<PluginConfigurationParameterValue>,
    #[prost(string, tag = "2")]
    pub booking_confirmation_code: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SuccessfulCancellation {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FailedCancellation {
    #[prost(string, tag = "1")]
    pub cancellation_error: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelBookingResponse {
    #[prost(oneof = "cancel_booking_response::CancellationResult", tags = "1, 2")]
    pub cancellation_result: Option<cancel_booking_response::CancellationResult>,
}

pub mod cancel_booking_response {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum CancellationResult {
        #[prost(message, tag = "1")]
        SuccessfulCancellation(super::SuccessfulCancellation),
        #[prost(message, tag = "2")]
        FailedCancellation(super::FailedCancellation),
    }
}

pub const SERVICE: &str = "io.bokun.inventory.plugin.api.grpc.PluginApi";

// Fully qualified method paths
pub mod method {
    pub const GET_DEFINITION: &str = "/io.bokun.inventory.plugin.api.grpc.PluginApi/getDefinition";
    pub const SEARCH_PRODUCTS: &str =
        "/io.bokun.inventory.plugin.api.grpc.PluginApi/searchProducts";
    pub const GET_PRODUCT_BY_ID: &str =
        "/io.bokun.inventory.plugin.api.grpc.PluginApi/getProductById";
    pub const GET_AVAILABLE_PRODUCTS: &str =
        "/io.bokun.inventory.plugin.api.grpc.PluginApi/getAvailableProducts";
    pub const GET_PRODUCT_AVAILABILITY: &str =
        "/io.bokun.inventory.plugin.api.grpc.PluginApi/getProductAvailability";
    pub const CREATE_RESERVATION: &str =
        "/io.bokun.inventory.plugin.api.grpc.PluginApi/createReservation";
    pub const CONFIRM_BOOKING: &str =
        "/io.bokun.inventory.plugin.api.grpc.PluginApi/confirmBooking";
    pub const CREATE_AND_CONFIRM_BOOKING: &str =
        "/io.bokun.inventory.plugin.api.grpc.PluginApi/createAndConfirmBooking";
    pub const CANCEL_BOOKING: &str = "/io.bokun.inventory.plugin.api.grpc.PluginApi/cancelBooking";
}

#[derive(Debug, Clone)]
pub struct PluginApiClient {
    inner: tonic::client::Grpc<Channel>,
}

impl PluginApiClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn server_streaming<Req, Resp>(
        &mut self,
        request: tonic::Request<Req>,
        method: &'static str,
    ) -> Result<tonic::Response<Streaming<Resp>>, tonic::Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        self.inner
            .ready()
            .await
            .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e)))?;
        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        let path = PathAndQuery::from_static(method);
        self.inner.server_streaming(request, path, codec).await
    }
}
