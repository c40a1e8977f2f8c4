use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use plugin_conformance_harness::model::{
    BookingType, Date, MeetingType, Price, PricePerPerson, PricingCategory,
    PricingCategoryWithPrice, ProductAvailabilityWithRatesResponse, ProductCategory,
    ProductDescription, Rate, RatePricing, RateWithPrice, TicketSupport, TicketType,
};
use plugin_conformance_harness::validators;

// Mostly valid products, roughly one in ten broken in some way
fn catalog(size: usize, rng: &mut StdRng) -> Vec<ProductDescription> {
    (0..size)
        .map(|i| ProductDescription {
            id: format!("product{}", i),
            name: if rng.gen_bool(0.1) {
                String::new()
            } else {
                format!("Product {}", i)
            },
            pricing_categories: vec![PricingCategory {
                id: "adult".to_string(),
                label: "Adult".to_string(),
                ..Default::default()
            }],
            rates: vec![Rate {
                id: "standard".to_string(),
                label: "Standard".to_string(),
            }],
            booking_type: BookingType::Date,
            meeting_type: MeetingType::MeetOnLocation,
            product_category: ProductCategory::Tours,
            ticket_support: vec![TicketSupport::TicketPerPerson],
            ticket_type: TicketType::QrCode,
            countries: vec!["GB".to_string(), "LT".to_string(), "IS".to_string()],
            ..Default::default()
        })
        .collect()
}

fn slots(size: usize, rng: &mut StdRng) -> Vec<ProductAvailabilityWithRatesResponse> {
    (0..size)
        .map(|i| ProductAvailabilityWithRatesResponse {
            capacity: rng.gen_range(0..20),
            date: Some(Date {
                year: 2025,
                month: 2,
                day: (i % 30) as i32 + 1,
            }),
            rates: vec![RateWithPrice {
                rate_id: "standard".to_string(),
                pricing: Some(RatePricing::PerPerson(PricePerPerson {
                    pricing_category_with_price: vec![PricingCategoryWithPrice {
                        pricing_category_id: "adult".to_string(),
                        price: Some(Price {
                            amount: format!("{}.50", rng.gen_range(-5..100)),
                            currency: "EUR".to_string(),
                        }),
                    }],
                })),
            }],
            ..Default::default()
        })
        .collect()
}

pub fn validation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_validation");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [10, 100, 1000].iter() {
        let products = catalog(*size, &mut rng);
        group.bench_with_input(BenchmarkId::new("product_description", size), &products, |b, products| {
            b.iter(|| {
                for product in products {
                    black_box(validators::product_description(product));
                }
            });
        });

        let availability = slots(*size, &mut rng);
        group.bench_with_input(BenchmarkId::new("availability_with_rates", size), &availability, |b, slots| {
            b.iter(|| {
                for slot in slots {
                    black_box(validators::availability_with_rates(slot));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, validation_benchmark);
criterion_main!(benches);
