// Known validators and the composite validators for every plugin response.
// Composite validators are plain functions; `fn(&T) -> ValidationResult` is a Validator<T>.

use std::fmt::Display;

use chrono::NaiveDate;

use crate::model::{
    BasicProductInfo, BookingType, CancelBookingResponse, ConfirmBookingResponse, Contact, Date,
    DatePeriod, MeetingType, Passenger, PluginDefinition, Price, PricingCategory,
    ProductAvailabilityWithRatesResponse, ProductDescription, Rate, RatePricing, RateWithPrice,
    Reservation, ReservationData, ReservationResponse, TicketSupport, Time,
};
use crate::model::{BookingResult, ReservationResult};
use crate::validation::{ValidationBuilder, ValidationResult, Validator};

// ISO 3166-1 alpha-2, sorted for binary search
const COUNTRY_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX",
    "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ",
    "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK",
    "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM",
    "DO", "DZ", "EC", "EE", "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR",
    "GA", "GB", "GD", "GE", "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS",
    "GT", "GU", "GW", "GY", "HK", "HM", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN",
    "IO", "IQ", "IR", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN",
    "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU", "LV",
    "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO", "MP", "MQ",
    "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI",
    "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM",
    "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC",
    "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS", "ST", "SV",
    "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO", "TR",
    "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

// ISO 4217 current and withdrawn codes, funds and metals included; sorted for binary search
const CURRENCY_CODES: &[&str] = &[
    "ADP", "AED", "AFA", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "ATS", "AUD", "AWG", "AYM",
    "AZM", "AZN", "BAM", "BBD", "BDT", "BEF", "BGL", "BGN", "BHD", "BIF", "BMD", "BND", "BOB",
    "BOV", "BRL", "BSD", "BTN", "BWP", "BYB", "BYN", "BYR", "BZD", "CAD", "CDF", "CHE", "CHF",
    "CHW", "CLF", "CLP", "CNY", "COP", "COU", "CRC", "CSD", "CUC", "CUP", "CVE", "CYP", "CZK",
    "DEM", "DJF", "DKK", "DOP", "DZD", "EEK", "EGP", "ERN", "ESP", "ETB", "EUR", "FIM", "FJD",
    "FKP", "FRF", "GBP", "GEL", "GHC", "GHS", "GIP", "GMD", "GNF", "GRD", "GTQ", "GWP", "GYD",
    "HKD", "HNL", "HRK", "HTG", "HUF", "IDR", "IEP", "ILS", "INR", "IQD", "IRR", "ISK", "ITL",
    "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW", "KWD", "KYD", "KZT", "LAK",
    "LBP", "LKR", "LRD", "LSL", "LTL", "LUF", "LVL", "LYD", "MAD", "MDL", "MGA", "MGF", "MKD",
    "MMK", "MNT", "MOP", "MRO", "MRU", "MTL", "MUR", "MVR", "MWK", "MXN", "MXV", "MYR", "MZM",
    "MZN", "NAD", "NGN", "NIO", "NLG", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN", "PGK", "PHP",
    "PKR", "PLN", "PTE", "PYG", "QAR", "ROL", "RON", "RSD", "RUB", "RUR", "RWF", "SAR", "SBD",
    "SCR", "SDD", "SDG", "SEK", "SGD", "SHP", "SIT", "SKK", "SLE", "SLL", "SOS", "SRD", "SRG",
    "SSP", "STD", "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMM", "TMT", "TND", "TOP", "TPE",
    "TRL", "TRY", "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "USN", "USS", "UYI", "UYU", "UYW",
    "UZS", "VEB", "VED", "VEF", "VES", "VND", "VUV", "WST", "XAF", "XAG", "XAU", "XBA", "XBB",
    "XBC", "XBD", "XCD", "XDR", "XFO", "XFU", "XOF", "XPD", "XPF", "XPT", "XSU", "XTS", "XUA",
    "XXX", "YER", "YUM", "ZAR", "ZMK", "ZMW", "ZWD", "ZWG", "ZWL", "ZWN", "ZWR",
];

// `subject must be positive number`
#[derive(Debug, Clone, Copy)]
pub struct PositiveNumber(pub &'static str);

impl<N> Validator<N> for PositiveNumber
where
    N: PartialOrd + Default,
{
    fn validate(&self, value: &N) -> ValidationResult {
        if *value > N::default() {
            ValidationResult::Successful
        } else {
            ValidationResult::failure(format!("{} must be positive number", self.0))
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NonNegativeNumber(pub &'static str);

impl<N> Validator<N> for NonNegativeNumber
where
    N: PartialOrd + Default,
{
    fn validate(&self, value: &N) -> ValidationResult {
        if *value >= N::default() {
            ValidationResult::Successful
        } else {
            ValidationResult::failure(format!("{} must be zero or positive number", self.0))
        }
    }
}

// Decimal amount as sent over the wire; NaN and infinities are not numbers here
pub fn number(value: &str) -> ValidationResult {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => ValidationResult::Successful,
        _ => ValidationResult::failure(format!("Is not a number: {}", value)),
    }
}

// Empty is fine, emptiness is checked separately where the field is mandatory
pub fn country_code(code: &str) -> ValidationResult {
    if code.is_empty() {
        return ValidationResult::Successful;
    }
    if code.len() != 2 {
        return ValidationResult::failure("Country code should be 2 letters if specified");
    }
    if COUNTRY_CODES.binary_search(&code).is_err() {
        return ValidationResult::failure(format!("Unsupported country code: {}", code));
    }
    ValidationResult::Successful
}

pub fn currency_code(code: &str) -> ValidationResult {
    if CURRENCY_CODES.binary_search(&code).is_ok() {
        ValidationResult::Successful
    } else {
        ValidationResult::failure(format!("Unsupported currency code: {}", code))
    }
}

fn in_range<T: PartialOrd + Display>(value: T, min: T, max: T, label: &str) -> ValidationResult {
    if value < min || value > max {
        ValidationResult::failure(format!("Invalid {}: {}", label, value))
    } else {
        ValidationResult::Successful
    }
}

fn days_in_month(year: i32, month: i32) -> Option<i32> {
    let first = NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, u32::try_from(month + 1).ok()?, 1)?
    };
    i32::try_from((next - first).num_days()).ok()
}

pub fn date(date: &Date) -> ValidationResult {
    let day_valid = match days_in_month(date.year, date.month) {
        Some(days) => date.day >= 1 && date.day <= days,
        // Month or year already out of range; only flag days no month has
        None => date.day >= 1 && date.day <= 31,
    };
    let year = in_range(date.year, 1000, 9999, "year");
    let month = in_range(date.month, 1, 12, "month");
    let builder = ValidationBuilder::new()
        .add_errors(year.errors().cloned())
        .add_errors(month.errors().cloned());
    if day_valid {
        builder.build()
    } else {
        builder.add_error(format!("Invalid day: {}", date.day)).build()
    }
}

pub fn time(time: &Time) -> ValidationResult {
    let hour = in_range(time.hour, 0, 23, "hour");
    let minute = in_range(time.minute, 0, 59, "minute");
    ValidationBuilder::new()
        .add_errors(hour.errors().cloned())
        .add_errors(minute.errors().cloned())
        .build()
}

pub fn date_period(period: &DatePeriod) -> ValidationResult {
    ValidationBuilder::new()
        .assert_not_empty(&period.from, "from")
        .assert_valid_if_present(&period.from, &date)
        .assert_not_empty(&period.to, "to")
        .assert_valid_if_present(&period.to, &date)
        .build()
}

pub fn plugin_definition(definition: &PluginDefinition) -> ValidationResult {
    ValidationBuilder::new()
        .assert_not_empty(&definition.name, "name")
        .assert_not_empty(&definition.capabilities, "capabilities")
        .assert_not_empty(&definition.parameters, "parameters")
        .build()
}

pub fn pricing_category(category: &PricingCategory) -> ValidationResult {
    ValidationBuilder::new()
        .assert_not_empty(&category.id, "id")
        .assert_not_empty(&category.label, "label")
        .build()
}

pub fn rate(rate: &Rate) -> ValidationResult {
    ValidationBuilder::new()
        .assert_not_empty(&rate.id, "id")
        .assert_not_empty(&rate.label, "label")
        .build()
}

pub fn basic_product_info(info: &BasicProductInfo) -> ValidationResult {
    ValidationBuilder::new()
        .assert_not_empty(&info.id, "id")
        .assert_not_empty(&info.name, "name")
        .assert_elements_valid(&info.pricing_categories, &pricing_category)
        .build()
}

pub fn product_description(product: &ProductDescription) -> ValidationResult {
    let country_validator = |code: &String| country_code(code);
    ValidationBuilder::new()
        .assert_not_empty(&product.id, "id")
        .assert_not_empty(&product.name, "name")
        .assert_not_empty(&product.pricing_categories, "pricingCategories")
        .assert_elements_valid(&product.pricing_categories, &pricing_category)
        .assert_not_empty(&product.rates, "rates")
        .assert_elements_valid(&product.rates, &rate)
        .assert_set(&product.booking_type, "bookingType")
        .assert_set(&product.meeting_type, "meetingType")
        .assert_not_empty_if(
            product.meeting_type == MeetingType::PickUp && !product.custom_pickup_place_allowed,
            &product.pickup_places,
            "pickupPlaces",
        )
        .assert_not_empty_if(
            product.dropoff_available && !product.custom_dropoff_place_allowed,
            &product.dropoff_places,
            "dropoffPlaces",
        )
        .assert_set(&product.product_category, "productCategory")
        .assert_not_empty(&product.ticket_support, "ticketSupport")
        .assert_not_empty_if(
            product.booking_type == BookingType::DateAndTime,
            &product.start_times,
            "startTimes",
        )
        // Ticket type only matters when tickets are required at all
        .assert_set_if(
            !product
                .ticket_support
                .contains(&TicketSupport::TicketsNotRequired),
            &product.ticket_type,
            "ticketType",
        )
        .assert_elements_valid(&product.countries, &country_validator)
        .build()
}

pub fn price(price: &Price) -> ValidationResult {
    let currency = |code: &String| currency_code(code);
    let amount = |value: &String| number(value);
    let to_number = |value: &String| value.trim().parse::<f64>().unwrap_or_default();
    ValidationBuilder::new()
        .assert_not_empty(&price.currency, "currency")
        .assert_valid_if(!price.currency.is_empty(), &price.currency, &currency)
        .assert_not_empty(&price.amount, "amount")
        .assert_valid_chain(
            &price.amount,
            &amount,
            to_number,
            &NonNegativeNumber("amount"),
        )
        .build()
}

pub fn rate_with_price(rate: &RateWithPrice) -> ValidationResult {
    let builder = ValidationBuilder::new().assert_not_empty(&rate.rate_id, "rate");
    match &rate.pricing {
        Some(RatePricing::PerPerson(per_person)) => {
            let categories = &per_person.pricing_category_with_price;
            categories
                .iter()
                .fold(
                    builder.assert_not_empty(categories, "pricingCategories"),
                    |builder, category| {
                        builder
                            .assert_not_empty(&category.price, "pricingCategories.price")
                            .assert_valid_if_present(&category.price, &price)
                    },
                )
                .build()
        }
        _ => builder.build(),
    }
}

pub fn availability_with_rates(slot: &ProductAvailabilityWithRatesResponse) -> ValidationResult {
    ValidationBuilder::new()
        .assert_valid(&slot.capacity, &PositiveNumber("capacity"))
        .assert_not_empty(&slot.date, "date")
        .assert_valid_if_present(&slot.date, &date)
        .assert_valid_if_present(&slot.time, &time)
        .assert_valid_if_present(&slot.pickup_time, &time)
        .assert_not_empty(&slot.rates, "rates")
        .assert_elements_valid(&slot.rates, &rate_with_price)
        .build()
}

pub fn contact(contact: &Contact) -> ValidationResult {
    ValidationBuilder::new()
        .assert_not_empty(&contact.first_name, "firstName")
        .assert_not_empty(&contact.last_name, "lastName")
        .build()
}

pub fn passenger(passenger: &Passenger) -> ValidationResult {
    ValidationBuilder::new()
        .assert_not_empty(&passenger.pricing_category_id, "pricingCategoryId")
        .assert_not_empty(&passenger.contact, "contact")
        .assert_valid_if_present(&passenger.contact, &contact)
        .build()
}

pub fn reservation(reservation: &Reservation) -> ValidationResult {
    ValidationBuilder::new()
        .assert_not_empty(&reservation.rate_id, "rateId")
        .assert_not_empty(&reservation.passengers, "passengers")
        .assert_elements_valid(&reservation.passengers, &passenger)
        .build()
}

pub fn reservation_data(data: &ReservationData) -> ValidationResult {
    ValidationBuilder::new()
        .assert_not_empty(&data.product_id, "productId")
        .assert_valid(&data.customer_contact, &contact)
        .assert_not_empty(&data.date, "date")
        .assert_valid_if_present(&data.date, &date)
        .assert_valid_if_present(&data.time, &time)
        .assert_not_empty(&data.reservations, "reservations")
        .assert_elements_valid(&data.reservations, &reservation)
        .build()
}

pub fn reservation_response(response: &ReservationResponse) -> ValidationResult {
    let builder = ValidationBuilder::new().assert_not_empty(&response.result, "reservationResult");
    match &response.result {
        Some(ReservationResult::Successful(success)) => builder
            .assert_not_empty(
                &success.reservation_confirmation_code,
                "successfulReservation.reservationConfirmationCode",
            )
            .build(),
        _ => builder.build(),
    }
}

pub fn confirm_booking_response(response: &ConfirmBookingResponse) -> ValidationResult {
    let builder = ValidationBuilder::new().assert_not_empty(&response.result, "bookingResult");
    match &response.result {
        Some(BookingResult::Successful(success)) => builder
            .assert_not_empty(
                &success.booking_confirmation_code,
                "successfulBooking.bookingConfirmationCode",
            )
            .build(),
        _ => builder.build(),
    }
}

pub fn cancel_booking_response(response: &CancelBookingResponse) -> ValidationResult {
    ValidationBuilder::new()
        .assert_not_empty(&response.result, "cancellationResult")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        PluginCapability, PluginConfigurationParameter, PricePerPerson, PricingCategoryWithPrice,
        ProductCategory, TicketType,
    };
    use std::collections::HashSet;
    use test_case::test_case;

    fn errors_of(result: &ValidationResult) -> HashSet<String> {
        result.errors().cloned().collect()
    }

    #[test_case(2024, 2, 29, true ; "leap day")]
    #[test_case(2023, 2, 29, false ; "leap day in common year")]
    #[test_case(2024, 13, 1, false ; "month out of range")]
    #[test_case(999, 1, 1, false ; "year below 1000")]
    #[test_case(10000, 1, 1, false ; "year above 9999")]
    #[test_case(2025, 4, 31, false ; "april has 30 days")]
    #[test_case(2025, 12, 31, true ; "last day of year")]
    #[test_case(2025, 1, 0, false ; "day zero")]
    fn test_date(year: i32, month: i32, day: i32, valid: bool) {
        let result = date(&Date { year, month, day });
        assert_eq!(result.is_success(), valid, "{:?}", result);
    }

    #[test]
    fn test_date_reports_every_component() {
        let result = date(&Date {
            year: 999,
            month: 13,
            day: 40,
        });
        assert_eq!(
            errors_of(&result),
            HashSet::from([
                "Invalid year: 999".to_string(),
                "Invalid month: 13".to_string(),
                "Invalid day: 40".to_string(),
            ])
        );
    }

    #[test_case(23, 59, true ; "last minute of day")]
    #[test_case(0, 0, true ; "midnight")]
    #[test_case(24, 0, false ; "hour out of range")]
    #[test_case(0, 60, false ; "minute out of range")]
    #[test_case(-1, 0, false ; "negative hour")]
    fn test_time(hour: i32, minute: i32, valid: bool) {
        assert_eq!(time(&Time { hour, minute }).is_success(), valid);
    }

    #[test_case("GB", true ; "known code")]
    #[test_case("", true ; "unset")]
    #[test_case("GBR", false ; "three letters")]
    #[test_case("XX", false ; "unknown code")]
    fn test_country_code(code: &str, valid: bool) {
        assert_eq!(country_code(code).is_success(), valid);
    }

    #[test_case("EUR", true)]
    #[test_case("ISK", true)]
    #[test_case("HRK", true ; "withdrawn")]
    #[test_case("XAU", true ; "precious metal")]
    #[test_case("XDR", true ; "special drawing rights")]
    #[test_case("XXX", true ; "no currency")]
    #[test_case("ZZZ", false)]
    #[test_case("EURO", false)]
    #[test_case("eur", false)]
    fn test_currency_code(code: &str, valid: bool) {
        assert_eq!(currency_code(code).is_success(), valid);
    }

    #[test]
    fn test_code_tables_are_sorted() {
        assert!(COUNTRY_CODES.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(CURRENCY_CODES.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_numeric_ranges() {
        assert!(PositiveNumber("capacity").validate(&1).is_success());
        assert_eq!(
            errors_of(&PositiveNumber("capacity").validate(&0)),
            HashSet::from(["capacity must be positive number".to_string()])
        );
        assert!(NonNegativeNumber("amount").validate(&0.0).is_success());
        assert!(!NonNegativeNumber("amount").validate(&-0.01).is_success());
    }

    #[test_case("12.50", true)]
    #[test_case("0", true)]
    #[test_case("abc", false)]
    #[test_case("NaN", false)]
    fn test_number(value: &str, valid: bool) {
        assert_eq!(number(value).is_success(), valid);
    }

    #[test]
    fn test_plugin_definition() {
        let valid = PluginDefinition {
            name: "demo".to_string(),
            description: None,
            capabilities: vec![PluginCapability::SupportsReservations],
            parameters: vec![PluginConfigurationParameter::default()],
        };
        assert_eq!(plugin_definition(&valid), ValidationResult::Successful);

        let result = plugin_definition(&PluginDefinition::default());
        assert_eq!(
            errors_of(&result),
            HashSet::from([
                "Field name is empty or missing".to_string(),
                "Field capabilities is empty or missing".to_string(),
                "Field parameters is empty or missing".to_string(),
            ])
        );
    }

    #[test]
    fn test_price() {
        let valid = Price {
            amount: "10.00".to_string(),
            currency: "EUR".to_string(),
        };
        assert!(price(&valid).is_success());

        let negative = Price {
            amount: "-1".to_string(),
            currency: "EUR".to_string(),
        };
        assert_eq!(
            errors_of(&price(&negative)),
            HashSet::from(["amount must be zero or positive number".to_string()])
        );

        let garbage = Price {
            amount: "ten".to_string(),
            currency: "ZZZ".to_string(),
        };
        assert_eq!(
            errors_of(&price(&garbage)),
            HashSet::from([
                "Is not a number: ten".to_string(),
                "Unsupported currency code: ZZZ".to_string(),
            ])
        );
    }

    fn valid_product() -> ProductDescription {
        ProductDescription {
            id: "p1".to_string(),
            name: "Glacier walk".to_string(),
            pricing_categories: vec![PricingCategory {
                id: "ADT".to_string(),
                label: "Adult".to_string(),
                ..Default::default()
            }],
            rates: vec![Rate {
                id: "std".to_string(),
                label: "Standard".to_string(),
            }],
            booking_type: BookingType::Date,
            meeting_type: MeetingType::MeetOnLocation,
            product_category: ProductCategory::Tours,
            ticket_support: vec![TicketSupport::TicketPerBooking],
            ticket_type: TicketType::QrCode,
            countries: vec!["IS".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_product_description() {
        assert!(product_description(&valid_product()).is_success());

        let mut product = valid_product();
        product.meeting_type = MeetingType::PickUp;
        product.booking_type = BookingType::DateAndTime;
        product.ticket_type = TicketType::Unassigned;
        product.countries.push("ZZ".to_string());
        assert_eq!(
            errors_of(&product_description(&product)),
            HashSet::from([
                "Field pickupPlaces is empty or missing".to_string(),
                "Field startTimes is empty or missing".to_string(),
                "Field ticketType is empty or missing".to_string(),
                "Unsupported country code: ZZ".to_string(),
            ])
        );
    }

    #[test]
    fn test_ticket_type_not_needed_without_tickets() {
        let mut product = valid_product();
        product.ticket_support = vec![TicketSupport::TicketsNotRequired];
        product.ticket_type = TicketType::Unassigned;
        assert!(product_description(&product).is_success());
    }

    #[test]
    fn test_availability_slot_with_one_bad_rate() {
        let good_rate = RateWithPrice {
            rate_id: "std".to_string(),
            pricing: Some(RatePricing::PerPerson(PricePerPerson {
                pricing_category_with_price: vec![PricingCategoryWithPrice {
                    pricing_category_id: "ADT".to_string(),
                    price: Some(Price {
                        amount: "5".to_string(),
                        currency: "EUR".to_string(),
                    }),
                }],
            })),
        };
        let bad_rate = RateWithPrice {
            rate_id: "cheap".to_string(),
            pricing: Some(RatePricing::PerPerson(PricePerPerson::default())),
        };
        let slot = ProductAvailabilityWithRatesResponse {
            capacity: 3,
            date: Some(Date {
                year: 2025,
                month: 8,
                day: 1,
            }),
            time: Some(Time {
                hour: 9,
                minute: 30,
            }),
            pickup_time: None,
            rates: vec![good_rate.clone(), bad_rate, good_rate],
        };
        assert_eq!(
            errors_of(&availability_with_rates(&slot)),
            HashSet::from(["Field pricingCategories is empty or missing".to_string()])
        );
    }

    #[test]
    fn test_result_variant_must_be_set() {
        assert!(!reservation_response(&ReservationResponse::default()).is_success());
        assert!(!confirm_booking_response(&ConfirmBookingResponse::default()).is_success());
        assert!(!cancel_booking_response(&CancelBookingResponse::default()).is_success());

        let failed = ReservationResponse {
            result: Some(ReservationResult::Failed(None)),
        };
        assert!(reservation_response(&failed).is_success());

        let blank_code = ConfirmBookingResponse {
            result: Some(BookingResult::Successful(Default::default())),
        };
        assert_eq!(
            errors_of(&confirm_booking_response(&blank_code)),
            HashSet::from([
                "Field successfulBooking.bookingConfirmationCode is empty or missing".to_string()
            ])
        );
    }
}
