use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use domain::{PricingTable, TicketType, TicketTypeRequest, validate_ticket_requests};

fn typical_requests() -> Vec<TicketTypeRequest> {
    vec![
        TicketTypeRequest::new(TicketType::Adult, 2),
        TicketTypeRequest::new(TicketType::Child, 3),
        TicketTypeRequest::new(TicketType::Infant, 1),
    ]
}

fn full_house_requests() -> Vec<TicketTypeRequest> {
    vec![
        TicketTypeRequest::new(TicketType::Adult, 10),
        TicketTypeRequest::new(TicketType::Child, 10),
        TicketTypeRequest::new(TicketType::Infant, 5),
    ]
}

fn bench_validate_typical(c: &mut Criterion) {
    let requests = typical_requests();

    c.bench_function("domain/validate_typical", |b| {
        b.iter(|| validate_ticket_requests(black_box(&requests)).unwrap());
    });
}

fn bench_validate_full_house(c: &mut Criterion) {
    let requests = full_house_requests();

    c.bench_function("domain/validate_full_house", |b| {
        b.iter(|| validate_ticket_requests(black_box(&requests)).unwrap());
    });
}

fn bench_price_requests(c: &mut Criterion) {
    let prices = PricingTable::standard();
    let requests = full_house_requests();

    c.bench_function("domain/price_requests", |b| {
        b.iter(|| {
            requests.iter().fold(domain::Money::zero(), |acc, request| {
                acc + prices
                    .price(black_box(request.ticket_type()))
                    .multiply(request.no_of_tickets())
            })
        });
    });
}

criterion_group!(
    benches,
    bench_validate_typical,
    bench_validate_full_house,
    bench_price_requests,
);
criterion_main!(benches);
