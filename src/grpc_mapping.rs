// Conversion between the RPC wire schema and the transport-neutral model.
// Responses map proto -> model, requests map model -> proto. Raw enum numbers this
// harness does not know decode to `Unrecognized`, unset ones to `Unassigned`.

use crate::grpc_proto as proto;
use crate::model;

macro_rules! enum_mapping {
    ($wire:ident => $domain:ident { $($variant:ident),* $(,)? }) => {
        impl From<i32> for model::$domain {
            fn from(raw: i32) -> Self {
                match proto::$wire::try_from(raw) {
                    Ok(proto::$wire::Unassigned) => model::$domain::Unassigned,
                    $(Ok(proto::$wire::$variant) => model::$domain::$variant,)*
                    Err(_) => model::$domain::Unrecognized,
                }
            }
        }

        impl From<model::$domain> for i32 {
            fn from(value: model::$domain) -> Self {
                let wire = match value {
                    $(model::$domain::$variant => proto::$wire::$variant,)*
                    model::$domain::Unassigned | model::$domain::Unrecognized => {
                        proto::$wire::Unassigned
                    }
                };
                wire as i32
            }
        }
    };
}

enum_mapping!(PluginCapability => PluginCapability { SupportsReservations, SupportsCancellations });
enum_mapping!(PluginParameterDataType => PluginParameterDataType { String, Boolean, Double, Long });
enum_mapping!(BookingType => BookingType { DateAndTime, Date, Pass });
enum_mapping!(MeetingType => MeetingType { MeetOnLocation, PickUp, MeetOnLocationOrPickUp });
enum_mapping!(ProductCategory => ProductCategory {
    Activities,
    Attractions,
    Tours,
    Transport,
    Rentals,
});
enum_mapping!(TicketSupport => TicketSupport {
    TicketPerBooking,
    TicketPerPerson,
    TicketsNotRequired,
});
enum_mapping!(TicketType => TicketType { QrCode, Barcode, Pdf });
enum_mapping!(ContactField => ContactField {
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
});

fn enums<T: From<i32>>(raw: Vec<i32>) -> Vec<T> {
    raw.into_iter().map(T::from).collect()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

// Responses

impl From<proto::Date> for model::Date {
    fn from(date: proto::Date) -> Self {
        model::Date {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}

impl From<proto::Time> for model::Time {
    fn from(time: proto::Time) -> Self {
        model::Time {
            hour: time.hour,
            minute: time.minute,
        }
    }
}

impl From<proto::PluginDefinition> for model::PluginDefinition {
    fn from(definition: proto::PluginDefinition) -> Self {
        model::PluginDefinition {
            name: definition.name,
            description: non_empty(definition.description),
            capabilities: enums(definition.capabilities),
            parameters: definition
                .parameters
                .into_iter()
                .map(|parameter| model::PluginConfigurationParameter {
                    name: parameter.name,
                    required: parameter.required,
                    data_type: parameter.r#type.into(),
                })
                .collect(),
        }
    }
}

impl From<proto::PricingCategory> for model::PricingCategory {
    fn from(category: proto::PricingCategory) -> Self {
        model::PricingCategory {
            id: category.id,
            label: category.label,
            min_age: category.min_age,
            max_age: category.max_age,
        }
    }
}

impl From<proto::BasicProductInfo> for model::BasicProductInfo {
    fn from(info: proto::BasicProductInfo) -> Self {
        model::BasicProductInfo {
            id: info.id,
            name: info.name,
            description: non_empty(info.description),
            pricing_categories: info.pricing_categories.into_iter().map(Into::into).collect(),
            cities: info.cities,
            countries: info.countries,
        }
    }
}

impl From<proto::PickupDropoffPlace> for model::PickupDropoffPlace {
    fn from(place: proto::PickupDropoffPlace) -> Self {
        model::PickupDropoffPlace {
            title: place.title,
            address: place.address.map(|address| model::Address {
                address_line1: address.address_line1,
                city: address.city,
                post_code: address.post_code,
                country_code: address.country_code,
            }),
        }
    }
}

impl From<proto::ProductDescription> for model::ProductDescription {
    fn from(product: proto::ProductDescription) -> Self {
        model::ProductDescription {
            id: product.id,
            name: product.name,
            description: non_empty(product.description),
            pricing_categories: product
                .pricing_categories
                .into_iter()
                .map(Into::into)
                .collect(),
            rates: product
                .rates
                .into_iter()
                .map(|rate| model::Rate {
                    id: rate.id,
                    label: rate.label,
                })
                .collect(),
            booking_type: product.booking_type.into(),
            meeting_type: product.meeting_type.into(),
            pickup_places: product.pickup_places.into_iter().map(Into::into).collect(),
            custom_pickup_place_allowed: product.custom_pickup_place_allowed,
            pickup_minutes_before: product.pickup_minutes_before,
            dropoff_available: product.dropoff_available,
            custom_dropoff_place_allowed: product.custom_dropoff_place_allowed,
            dropoff_places: product.dropoff_places.into_iter().map(Into::into).collect(),
            product_category: product.product_category.into(),
            ticket_support: enums(product.ticket_support),
            ticket_type: product.ticket_type.into(),
            start_times: product.start_times.into_iter().map(Into::into).collect(),
            countries: product.countries,
            cities: product.cities,
            opening_hours: product
                .opening_hours
                .into_iter()
                .map(|interval| model::OpeningHoursTimeInterval {
                    open_from: interval.open_from,
                    open_for_hours: interval.open_for_hours,
                    open_for_minutes: interval.open_for_minutes,
                })
                .collect(),
            enforced_lead_passenger_fields: enums(product.enforced_lead_passenger_fields),
        }
    }
}

impl From<proto::Price> for model::Price {
    fn from(price: proto::Price) -> Self {
        model::Price {
            amount: price.amount,
            currency: price.currency,
        }
    }
}

impl From<proto::RateWithPrice> for model::RateWithPrice {
    fn from(rate: proto::RateWithPrice) -> Self {
        use proto::rate_with_price::PricingOptions;

        let pricing = rate.pricing_options.map(|options| match options {
            PricingOptions::PricePerPerson(per_person) => {
                model::RatePricing::PerPerson(model::PricePerPerson {
                    pricing_category_with_price: per_person
                        .pricing_category_with_price
                        .into_iter()
                        .map(|category| model::PricingCategoryWithPrice {
                            pricing_category_id: category.pricing_category_id,
                            price: category.price.map(Into::into),
                        })
                        .collect(),
                })
            }
            PricingOptions::PricePerBooking(per_booking) => {
                model::RatePricing::PerBooking(model::PricePerBooking {
                    price: per_booking.price.map(Into::into),
                })
            }
        });
        model::RateWithPrice {
            rate_id: rate.rate_id,
            pricing,
        }
    }
}

impl From<proto::ProductAvailabilityWithRatesResponse> for model::ProductAvailabilityWithRatesResponse {
    fn from(slot: proto::ProductAvailabilityWithRatesResponse) -> Self {
        model::ProductAvailabilityWithRatesResponse {
            capacity: slot.capacity,
            date: slot.date.map(Into::into),
            time: slot.time.map(Into::into),
            pickup_time: slot.pickup_time.map(Into::into),
            rates: slot.rates.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<proto::ReservationResponse> for model::ReservationResponse {
    fn from(response: proto::ReservationResponse) -> Self {
        use proto::reservation_response::ReservationResult;

        let result = response.reservation_result.map(|result| match result {
            ReservationResult::SuccessfulReservation(success) => {
                model::ReservationResult::Successful(model::SuccessfulReservation {
                    reservation_confirmation_code: success.reservation_confirmation_code,
                })
            }
            ReservationResult::FailedReservation(failure) => {
                model::ReservationResult::Failed(non_empty(failure.reservation_error))
            }
        });
        model::ReservationResponse { result }
    }
}

impl From<proto::ConfirmBookingResponse> for model::ConfirmBookingResponse {
    fn from(response: proto::ConfirmBookingResponse) -> Self {
        use proto::confirm_booking_response::BookingResult;

        let result = response.booking_result.map(|result| match result {
            BookingResult::SuccessfulBooking(success) => {
                model::BookingResult::Successful(model::SuccessfulBooking {
                    booking_confirmation_code: success.booking_confirmation_code,
                })
            }
            BookingResult::FailedBooking(failure) => {
                model::BookingResult::Failed(non_empty(failure.booking_error))
            }
        });
        model::ConfirmBookingResponse { result }
    }
}

impl From<proto::CancelBookingResponse> for model::CancelBookingResponse {
    fn from(response: proto::CancelBookingResponse) -> Self {
        use proto::cancel_booking_response::CancellationResult;

        let result = response.cancellation_result.map(|result| match result {
            CancellationResult::SuccessfulCancellation(_) => model::CancellationResult::Successful,
            CancellationResult::FailedCancellation(failure) => {
                model::CancellationResult::Failed(non_empty(failure.cancellation_error))
            }
        });
        model::CancelBookingResponse { result }
    }
}

// Requests

pub fn parameters(values: &[model::ConfigurationParameterValue]) -> Vec<proto::PluginConfigurationParameterValue> {
    values
        .iter()
        .map(|value| proto::PluginConfigurationParameterValue {
            name: value.name.clone(),
            value: value.value.clone(),
        })
        .collect()
}

impl From<&model::Date> for proto::Date {
    fn from(date: &model::Date) -> Self {
        proto::Date {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}

impl From<&model::Time> for proto::Time {
    fn from(time: &model::Time) -> Self {
        proto::Time {
            hour: time.hour,
            minute: time.minute,
        }
    }
}

impl From<&model::DatePeriod> for proto::DatePeriod {
    fn from(period: &model::DatePeriod) -> Self {
        proto::DatePeriod {
            from: period.from.as_ref().map(Into::into),
            to: period.to.as_ref().map(Into::into),
        }
    }
}

impl From<&model::Price> for proto::Price {
    fn from(price: &model::Price) -> Self {
        proto::Price {
            amount: price.amount.clone(),
            currency: price.currency.clone(),
        }
    }
}

impl From<&model::Contact> for proto::Contact {
    fn from(contact: &model::Contact) -> Self {
        let title = contact.title.map(|title| match title {
            model::Title::Mr => proto::Title::Mr,
            model::Title::Mrs => proto::Title::Mrs,
            model::Title::Ms => proto::Title::Ms,
            model::Title::Miss => proto::Title::Miss,
        });
        let gender = contact.gender.map(|gender| match gender {
            model::Gender::Male => proto::Gender::Male,
            model::Gender::Female => proto::Gender::Female,
            model::Gender::Other => proto::Gender::Other,
        });
        proto::Contact {
            title: title.unwrap_or(proto::Title::Unassigned) as i32,
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.clone().unwrap_or_default(),
            phone: contact.phone.clone().unwrap_or_default(),
            language: contact.language.clone().unwrap_or_default(),
            nationality: contact.nationality.clone().unwrap_or_default(),
            gender: gender.unwrap_or(proto::Gender::Unassigned) as i32,
            organization: contact.organization.clone().unwrap_or_default(),
            passport_number: contact.passport_number.clone().unwrap_or_default(),
            passport_expiry: contact.passport_expiry.as_ref().map(Into::into),
            address: contact.address.clone().unwrap_or_default(),
            post_code: contact.post_code.clone().unwrap_or_default(),
            country: contact.country.clone().unwrap_or_default(),
        }
    }
}

impl From<&model::PickupDropoffPlace> for proto::PickupDropoffPlace {
    fn from(place: &model::PickupDropoffPlace) -> Self {
        proto::PickupDropoffPlace {
            title: place.title.clone(),
            address: place.address.as_ref().map(|address| proto::Address {
                address_line1: address.address_line1.clone(),
                city: address.city.clone(),
                post_code: address.post_code.clone(),
                country_code: address.country_code.clone(),
            }),
        }
    }
}

fn company(company: &model::BookingCompany) -> proto::BookingSourceCompany {
    proto::BookingSourceCompany {
        id: company.id.clone(),
        title: company.title.clone(),
        company_registration_number: company.company_registration_number.clone(),
    }
}

impl From<&model::BookingSource> for proto::BookingSource {
    fn from(source: &model::BookingSource) -> Self {
        let segment = match source.segment {
            model::SalesSegment::Marketplace => proto::SalesSegment::Marketplace,
            model::SalesSegment::AgentArea => proto::SalesSegment::AgentArea,
            model::SalesSegment::DirectOffline => proto::SalesSegment::DirectOffline,
            model::SalesSegment::Ota => proto::SalesSegment::Ota,
            model::SalesSegment::DirectOnline => proto::SalesSegment::DirectOnline,
        };
        proto::BookingSource {
            segment: segment as i32,
            booking_channel: Some(proto::BookingSourceBookingChannel {
                id: source.booking_channel.id.clone(),
                title: source.booking_channel.title.clone(),
                system_type: source.booking_channel.system_type.clone().unwrap_or_default(),
            }),
            marketplace_vendor: source.marketplace_vendor.as_ref().map(company),
            booking_agent: source.booking_agent.as_ref().map(company),
            extranet_user: source
                .extranet_user
                .as_ref()
                .map(|user| proto::BookingSourceExtranetUser {
                    email: user.email.clone(),
                    full_name: user.full_name.clone(),
                }),
        }
    }
}

impl From<&model::ReservationData> for proto::ReservationData {
    fn from(data: &model::ReservationData) -> Self {
        proto::ReservationData {
            product_id: data.product_id.clone(),
            customer_contact: Some((&data.customer_contact).into()),
            notes: data.notes.clone(),
            date: data.date.as_ref().map(Into::into),
            time: data.time.as_ref().map(Into::into),
            pickup_required: data.pickup_required,
            custom_pickup_place: data.custom_pickup_place.clone().unwrap_or_default(),
            predefined_pickup_place: data.predefined_pickup_place.as_ref().map(Into::into),
            dropoff_required: data.dropoff_required,
            reservations: data
                .reservations
                .iter()
                .map(|reservation| proto::Reservation {
                    rate_id: reservation.rate_id.clone(),
                    passengers: reservation
                        .passengers
                        .iter()
                        .map(|passenger| proto::Passenger {
                            pricing_category_id: passenger.pricing_category_id.clone(),
                            contact: passenger.contact.as_ref().map(Into::into),
                            price_per_passenger: passenger
                                .price_per_passenger
                                .as_ref()
                                .map(Into::into),
                        })
                        .collect(),
                })
                .collect(),
            platform_id: data.platform_id.clone(),
            booking_source: data.booking_source.as_ref().map(Into::into),
        }
    }
}

impl From<&model::ConfirmationData> for proto::ConfirmationData {
    fn from(data: &model::ConfirmationData) -> Self {
        proto::ConfirmationData {
            ticket_support: data.ticket_support.into(),
        }
    }
}
