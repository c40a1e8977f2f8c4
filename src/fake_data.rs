// Synthetic booking payloads: lead passenger contact, reservation and booking source.
// Contacts use fixed placeholder values; only the choice of rate, pricing category,
// pickup place and sales segment is random, drawn from the injected rng.

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::HarnessError;
use crate::model::{
    BookingChannel, BookingCompany, BookingSource, ConfirmationData, Contact, ContactField, Date,
    ExtranetUser, Gender, Passenger, ProductAvailabilityWithRatesResponse, ProductDescription,
    RatePricing, RateWithPrice, Reservation, ReservationData, SalesSegment, Title,
};

pub const FIRST_NAME: &str = "Harness test - first name";
pub const LAST_NAME: &str = "Harness test - last name";
pub const CUSTOM_PICKUP_PLACE: &str = "Some custom pickup place";
pub const NOTES: &str = "Test notes";

fn pick<'a, T, R>(rng: &mut R, items: &'a [T], what: &str) -> Result<&'a T, HarnessError>
where
    R: Rng,
{
    items
        .choose(rng)
        .ok_or_else(|| HarnessError::Unsupported(format!("No {} to choose from", what)))
}

// Same month next year; day clamped so the date exists in every month
fn year_later(today: NaiveDate) -> Date {
    Date {
        year: today.year() + 1,
        month: today.month() as i32,
        day: today.day().min(28) as i32,
    }
}

// First and last name are always filled; everything else only when the product enforces it
pub fn fake_contact(enforced: &[ContactField], today: NaiveDate) -> Result<Contact, HarnessError> {
    let mut contact = Contact {
        first_name: FIRST_NAME.to_string(),
        last_name: LAST_NAME.to_string(),
        ..Default::default()
    };
    for field in enforced {
        match field {
            ContactField::Address => {
                contact.address = Some("123 Total satisfaction street London".to_string())
            }
            ContactField::Country => contact.country = Some("GB".to_string()),
            ContactField::Email => contact.email = Some("test@example.com".to_string()),
            ContactField::FirstName | ContactField::LastName => {}
            ContactField::Gender => contact.gender = Some(Gender::Male),
            ContactField::Language => contact.language = Some("EN".to_string()),
            ContactField::Nationality => contact.nationality = Some("GB".to_string()),
            ContactField::Organization => contact.organization = Some("Test Org Ltd.".to_string()),
            ContactField::PassportExpiry => contact.passport_expiry = Some(year_later(today)),
            ContactField::PassportNumber => contact.passport_number = Some("123454678".to_string()),
            ContactField::Phone => contact.phone = Some("+447890123456".to_string()),
            ContactField::PostCode => contact.post_code = Some("SW1A 1AA".to_string()),
            ContactField::Title => contact.title = Some(Title::Mr),
            ContactField::Unassigned | ContactField::Unrecognized => {
                return Err(HarnessError::Unsupported(format!(
                    "Enforced contact field {:?}",
                    field
                )))
            }
        }
    }
    Ok(contact)
}

fn passenger<R>(rng: &mut R, contact: &Contact, rate: &RateWithPrice) -> Result<Passenger, HarnessError>
where
    R: Rng,
{
    match &rate.pricing {
        Some(RatePricing::PerPerson(per_person)) => {
            let category = pick(rng, &per_person.pricing_category_with_price, "pricing categories")?;
            Ok(Passenger {
                pricing_category_id: category.pricing_category_id.clone(),
                contact: Some(contact.clone()),
                price_per_passenger: category.price.clone(),
            })
        }
        _ => Err(HarnessError::Unsupported(format!(
            "Price per booking (rate {}) is not supported by this harness",
            rate.rate_id
        ))),
    }
}

// Channel id and title are fixed per segment
pub fn booking_source(segment: SalesSegment) -> BookingSource {
    let channel = |id: &str, title: &str| BookingChannel {
        id: id.to_string(),
        title: title.to_string(),
        system_type: None,
    };
    let mut source = BookingSource {
        segment,
        booking_channel: channel("10007", "Test Booking Channel"),
        marketplace_vendor: None,
        booking_agent: None,
        extranet_user: None,
    };
    match segment {
        SalesSegment::Marketplace => {
            source.booking_channel = channel("10001", "Marketplace Booking Channel");
            source.marketplace_vendor = Some(BookingCompany {
                id: "10002".to_string(),
                title: "Test Reseller Vendor".to_string(),
                company_registration_number: "3025381111".to_string(),
            });
        }
        SalesSegment::AgentArea => {
            source.booking_channel = channel("10004", "Agent Booking Channel");
            source.booking_agent = Some(BookingCompany {
                id: "10003".to_string(),
                title: "Test Booking Agent".to_string(),
                company_registration_number: "3025382222".to_string(),
            });
        }
        SalesSegment::DirectOffline => {
            source.booking_channel = channel("10005", "Backend Booking Channel");
            source.extranet_user = Some(ExtranetUser {
                email: "test@test.com".to_string(),
                full_name: "Test User".to_string(),
            });
        }
        SalesSegment::Ota => {
            source.booking_channel = BookingChannel {
                system_type: Some("TEST_OTA".to_string()),
                ..channel("10006", "OTA Booking Channel")
            };
        }
        SalesSegment::DirectOnline => {}
    }
    source
}

pub fn random_booking_source<R: Rng>(rng: &mut R) -> BookingSource {
    let segment = SalesSegment::ALL[rng.gen_range(0..SalesSegment::ALL.len())];
    booking_source(segment)
}

pub fn reservation_data<R>(
    rng: &mut R,
    product: &ProductDescription,
    slot: &ProductAvailabilityWithRatesResponse,
    today: NaiveDate,
) -> Result<ReservationData, HarnessError>
where
    R: Rng,
{
    let lead = fake_contact(&product.enforced_lead_passenger_fields, today)?;
    let mut data = ReservationData {
        product_id: product.id.clone(),
        customer_contact: lead.clone(),
        notes: NOTES.to_string(),
        date: slot.date,
        time: slot.time,
        ..Default::default()
    };

    if product.meeting_type.offers_pickup() {
        data.pickup_required = true;
        if product.custom_pickup_place_allowed {
            data.custom_pickup_place = Some(CUSTOM_PICKUP_PLACE.to_string());
        } else {
            data.predefined_pickup_place =
                Some(pick(rng, &product.pickup_places, "pickup places")?.clone());
        }
        data.dropoff_required = false;
    }

    let rate = pick(rng, &slot.rates, "rates")?;
    data.reservations = vec![Reservation {
        rate_id: rate.rate_id.clone(),
        passengers: vec![passenger(rng, &lead, rate)?],
    }];
    data.platform_id = rng.gen_range(0..=i32::MAX).to_string();
    data.booking_source = Some(random_booking_source(rng));
    Ok(data)
}

pub fn confirmation_data<R>(
    rng: &mut R,
    product: &ProductDescription,
) -> Result<ConfirmationData, HarnessError>
where
    R: Rng,
{
    let ticket_support = *pick(rng, &product.ticket_support, "ticket support options")?;
    Ok(ConfirmationData { ticket_support })
}
