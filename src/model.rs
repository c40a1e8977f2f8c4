// Transport-neutral domain model of the inventory plugin contract.
// Both transports hand these types to the validators and the harness; the HTTP/JSON
// transport (de)serializes them directly, the RPC transport maps from grpc_proto.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::rest_mapping::{
    CancelBookingResponseJson, ConfirmBookingResponseJson, RateWithPriceJson,
    ReservationResponseJson,
};
use crate::validation::Enumerated;

// Plugins speaking JSON may send `null` for a field they leave unset; it reads the same
// as a missing key so the validators get to report it
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// Every enumeration keeps an explicit zero value (`Unassigned`) and a catch-all for
// values this harness does not know about (`Unrecognized`)
macro_rules! enumerated {
    ($($name:ident),* $(,)?) => {
        $(
            impl Enumerated for $name {
                fn is_set(&self) -> bool {
                    !matches!(self, $name::Unassigned | $name::Unrecognized)
                }
            }
        )*
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PluginCapability {
    #[default]
    Unassigned,
    SupportsReservations,
    SupportsCancellations,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PluginParameterDataType {
    #[default]
    Unassigned,
    String,
    Boolean,
    Double,
    Long,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingType {
    #[default]
    Unassigned,
    DateAndTime,
    Date,
    Pass,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeetingType {
    #[default]
    Unassigned,
    MeetOnLocation,
    PickUp,
    MeetOnLocationOrPickUp,
    #[serde(other)]
    Unrecognized,
}

impl MeetingType {
    pub fn offers_pickup(&self) -> bool {
        matches!(self, MeetingType::PickUp | MeetingType::MeetOnLocationOrPickUp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    #[default]
    Unassigned,
    Activities,
    Attractions,
    Tours,
    Transport,
    Rentals,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketSupport {
    #[default]
    Unassigned,
    TicketPerBooking,
    TicketPerPerson,
    TicketsNotRequired,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    #[default]
    Unassigned,
    QrCode,
    Barcode,
    Pdf,
    #[serde(other)]
    Unrecognized,
}

// Lead passenger fields a product may declare as mandatory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactField {
    #[default]
    Unassigned,
    Address,
    Country,
    Email,
    FirstName,
    Gender,
    Language,
    LastName,
    Nationality,
    Organization,
    PassportExpiry,
    PassportNumber,
    Phone,
    PostCode,
    Title,
    #[serde(other)]
    Unrecognized,
}

enumerated!(
    PluginCapability,
    PluginParameterDataType,
    BookingType,
    MeetingType,
    ProductCategory,
    TicketSupport,
    TicketType,
    ContactField,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Title {
    Mr,
    Mrs,
    Ms,
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesSegment {
    Marketplace,
    AgentArea,
    DirectOffline,
    Ota,
    DirectOnline,
}

impl SalesSegment {
    pub const ALL: [SalesSegment; 5] = [
        SalesSegment::Marketplace,
        SalesSegment::AgentArea,
        SalesSegment::DirectOffline,
        SalesSegment::Ota,
        SalesSegment::DirectOnline,
    ];
}

// Calendar date as sent over the wire; components are not range-checked here,
// that is DateValidator's job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Date {
    #[serde(deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub month: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub day: i32,
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date {
            year: date.year(),
            month: date.month() as i32,
            day: date.day() as i32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Time {
    #[serde(deserialize_with = "null_as_default")]
    pub hour: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub minute: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfigurationParameter {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub required: bool,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub data_type: PluginParameterDataType,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginDefinition {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub capabilities: Vec<PluginCapability>,
    #[serde(deserialize_with = "null_as_default")]
    pub parameters: Vec<PluginConfigurationParameter>,
}

impl PluginDefinition {
    pub fn supports(&self, capability: PluginCapability) -> bool {
        self.capabilities.contains(&capability)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigurationParameterValue {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicProductInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub pricing_categories: Vec<PricingCategory>,
    #[serde(deserialize_with = "null_as_default")]
    pub cities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rate {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    #[serde(deserialize_with = "null_as_default")]
    pub address_line1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub post_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickupDropoffPlace {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpeningHoursTimeInterval {
    #[serde(deserialize_with = "null_as_default")]
    pub open_from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub open_for_hours: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub open_for_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductDescription {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub pricing_categories: Vec<PricingCategory>,
    #[serde(deserialize_with = "null_as_default")]
    pub rates: Vec<Rate>,
    #[serde(deserialize_with = "null_as_default")]
    pub booking_type: BookingType,
    #[serde(deserialize_with = "null_as_default")]
    pub meeting_type: MeetingType,
    #[serde(deserialize_with = "null_as_default")]
    pub pickup_places: Vec<PickupDropoffPlace>,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_pickup_place_allowed: bool,
    pub pickup_minutes_before: Option<i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub dropoff_available: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_dropoff_place_allowed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub dropoff_places: Vec<PickupDropoffPlace>,
    #[serde(deserialize_with = "null_as_default")]
    pub product_category: ProductCategory,
    #[serde(deserialize_with = "null_as_default")]
    pub ticket_support: Vec<TicketSupport>,
    #[serde(deserialize_with = "null_as_default")]
    pub ticket_type: TicketType,
    #[serde(deserialize_with = "null_as_default")]
    pub start_times: Vec<Time>,
    #[serde(deserialize_with = "null_as_default")]
    pub countries: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub opening_hours: Vec<OpeningHoursTimeInterval>,
    #[serde(deserialize_with = "null_as_default")]
    pub enforced_lead_passenger_fields: Vec<ContactField>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Price {
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingCategoryWithPrice {
    #[serde(deserialize_with = "null_as_default")]
    pub pricing_category_id: String,
    pub price: Option<Price>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricePerPerson {
    #[serde(deserialize_with = "null_as_default")]
    pub pricing_category_with_price: Vec<PricingCategoryWithPrice>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricePerBooking {
    pub price: Option<Price>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RatePricing {
    PerPerson(PricePerPerson),
    PerBooking(PricePerBooking),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "RateWithPriceJson")]
pub struct RateWithPrice {
    pub rate_id: String,
    pub pricing: Option<RatePricing>,
}

// One priced slot of deep availability
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductAvailabilityWithRatesResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub capacity: i32,
    pub date: Option<Date>,
    pub time: Option<Time>,
    pub pickup_time: Option<Time>,
    #[serde(deserialize_with = "null_as_default")]
    pub rates: Vec<RateWithPrice>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductsAvailabilityResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: String,
}

// Requests

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProductsRequest {
    pub parameters: Vec<ConfigurationParameterValue>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProductByIdRequest {
    pub parameters: Vec<ConfigurationParameterValue>,
    pub external_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsAvailabilityRequest {
    pub parameters: Vec<ConfigurationParameterValue>,
    pub range: DatePeriod,
    pub required_capacity: i64,
    pub external_product_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAvailabilityRequest {
    pub parameters: Vec<ConfigurationParameterValue>,
    pub range: DatePeriod,
    pub product_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_expiry: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Passenger {
    pub pricing_category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_passenger: Option<Price>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reservation {
    pub rate_id: String,
    pub passengers: Vec<Passenger>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingChannel {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_type: Option<String>,
}

// Company acting as counterpart of a marketplace or agent booking
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingCompany {
    pub id: String,
    pub title: String,
    pub company_registration_number: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtranetUser {
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSource {
    pub segment: SalesSegment,
    pub booking_channel: BookingChannel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_vendor: Option<BookingCompany>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_agent: Option<BookingCompany>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extranet_user: Option<ExtranetUser>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReservationData {
    pub product_id: String,
    pub customer_contact: Contact,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Time>,
    pub pickup_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_pickup_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predefined_pickup_place: Option<PickupDropoffPlace>,
    pub dropoff_required: bool,
    pub reservations: Vec<Reservation>,
    pub platform_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_source: Option<BookingSource>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfirmationData {
    pub ticket_support: TicketSupport,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub parameters: Vec<ConfigurationParameterValue>,
    pub reservation_data: ReservationData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmBookingRequest {
    pub parameters: Vec<ConfigurationParameterValue>,
    pub reservation_confirmation_code: String,
    pub reservation_data: ReservationData,
    pub confirmation_data: ConfirmationData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConfirmBookingRequest {
    pub parameters: Vec<ConfigurationParameterValue>,
    pub reservation_data: ReservationData,
    pub confirmation_data: ConfirmationData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingRequest {
    pub parameters: Vec<ConfigurationParameterValue>,
    pub booking_confirmation_code: String,
}

// Result-bearing responses

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuccessfulReservation {
    pub reservation_confirmation_code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReservationResult {
    Successful(SuccessfulReservation),
    // Optional plugin-side explanation
    Failed(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "ReservationResponseJson")]
pub struct ReservationResponse {
    pub result: Option<ReservationResult>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuccessfulBooking {
    pub booking_confirmation_code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingResult {
    Successful(SuccessfulBooking),
    Failed(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "ConfirmBookingResponseJson")]
pub struct ConfirmBookingResponse {
    pub result: Option<BookingResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CancellationResult {
    Successful,
    Failed(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "CancelBookingResponseJson")]
pub struct CancelBookingResponse {
    pub result: Option<CancellationResult>,
}
