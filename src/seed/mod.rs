use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::entities::order::{NewOrder, OrderItem, OrderStatus};

pub const SEED_ORDER_COUNT: usize = 20;

struct Product {
    id: &'static str,
    name: &'static str,
    price: Decimal,
}

struct Customer {
    id: &'static str,
    name: &'static str,
    email: &'static str,
}

const PRODUCTS: [Product; 10] = [
    Product { id: "PROD-001", name: "Laptop", price: dec!(999.99) },
    Product { id: "PROD-002", name: "Wireless Mouse", price: dec!(29.99) },
    Product { id: "PROD-003", name: "USB-C Cable", price: dec!(19.99) },
    Product { id: "PROD-004", name: "Monitor", price: dec!(349.99) },
    Product { id: "PROD-005", name: "Keyboard", price: dec!(79.99) },
    Product { id: "PROD-006", name: "Headphones", price: dec!(149.99) },
    Product { id: "PROD-007", name: "Webcam", price: dec!(89.99) },
    Product { id: "PROD-008", name: "Desk Lamp", price: dec!(39.99) },
    Product { id: "PROD-009", name: "Phone Stand", price: dec!(24.99) },
    Product { id: "PROD-010", name: "External SSD", price: dec!(199.99) },
];

const CUSTOMERS: [Customer; 10] = [
    Customer { id: "CUST-001", name: "Alice Johnson", email: "alice.johnson@example.com" },
    Customer { id: "CUST-002", name: "Bob Smith", email: "bob.smith@example.com" },
    Customer { id: "CUST-003", name: "Carol White", email: "carol.white@example.com" },
    Customer { id: "CUST-004", name: "David Brown", email: "david.brown@example.com" },
    Customer { id: "CUST-005", name: "Eve Davis", email: "eve.davis@example.com" },
    Customer { id: "CUST-006", name: "Frank Miller", email: "frank.miller@example.com" },
    Customer { id: "CUST-007", name: "Grace Wilson", email: "grace.wilson@example.com" },
    Customer { id: "CUST-008", name: "Henry Moore", email: "henry.moore@example.com" },
    Customer { id: "CUST-009", name: "Ivy Taylor", email: "ivy.taylor@example.com" },
    Customer { id: "CUST-010", name: "Jack Anderson", email: "jack.anderson@example.com" },
];

const ADDRESSES: [&str; 10] = [
    "123 Main St, New York, NY 10001",
    "456 Oak Ave, Los Angeles, CA 90001",
    "789 Pine Rd, Chicago, IL 60601",
    "321 Elm St, Houston, TX 77001",
    "654 Maple Dr, Phoenix, AZ 85001",
    "987 Cedar Ln, Philadelphia, PA 19019",
    "147 Birch Blvd, San Antonio, TX 78201",
    "258 Walnut Way, San Diego, CA 92101",
    "369 Spruce St, Dallas, TX 75201",
    "741 Ash Ave, San Jose, CA 95101",
];

// `None` appears three times so most orders carry no note.
const NOTES: [Option<&str>; 8] = [
    Some("Please handle with care"),
    Some("Gift wrap requested"),
    Some("Leave at doorstep"),
    Some("Signature required"),
    Some("Call before delivery"),
    None,
    None,
    None,
];

/// A synthesized order before the store assigns it an id.
#[derive(Debug, Clone)]
pub struct SeedOrder {
    pub order: NewOrder,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Synthesizes [`SEED_ORDER_COUNT`] demo orders dated over the 30 days before `now`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<SeedOrder> {
    let base = now - Duration::days(30);
    (0..SEED_ORDER_COUNT)
        .map(|i| {
            let order_date =
                base + Duration::days(i as i64) + Duration::hours(rng.gen_range(0..=23));
            let days_old = (now - order_date).num_days();
            SeedOrder {
                order: random_order(rng),
                order_date,
                status: status_for_age(rng, days_old),
            }
        })
        .collect()
}

fn random_order<R: Rng + ?Sized>(rng: &mut R) -> NewOrder {
    let customer = CUSTOMERS.choose(rng).unwrap_or(&CUSTOMERS[0]);
    let n = rng.gen_range(1..=4);
    let items = PRODUCTS
        .choose_multiple(rng, n)
        .filter_map(|p| OrderItem::new(p.id, p.name, rng.gen_range(1..=3), p.price).ok())
        .collect();
    NewOrder {
        customer_id: customer.id.into(),
        customer_name: customer.name.into(),
        customer_email: customer.email.into(),
        items,
        shipping_address: ADDRESSES.choose(rng).unwrap_or(&ADDRESSES[0]).to_string(),
        notes: NOTES.choose(rng).copied().flatten().map(String::from),
    }
}

/// Older orders lean toward finished states, recent ones toward open states.
pub fn status_for_age<R: Rng + ?Sized>(rng: &mut R, days_old: i64) -> OrderStatus {
    use OrderStatus::*;
    let choices: &[OrderStatus] = if days_old > 20 {
        &[Delivered, Delivered, Cancelled]
    } else if days_old > 10 {
        &[Shipped, Delivered]
    } else if days_old > 5 {
        &[Processing, Shipped]
    } else {
        &[Pending, Processing]
    };
    *choices.choose(rng).unwrap_or(&choices[0])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn generates_twenty_orders_with_valid_items() {
        let mut rng = StdRng::seed_from_u64(7);
        let seeds = generate(&mut rng, Utc::now());
        assert_eq!(seeds.len(), SEED_ORDER_COUNT);

        for s in &seeds {
            let items = &s.order.items;
            assert!((1..=4).contains(&items.len()), "items: {}", items.len());
            let ids: HashSet<_> = items.iter().map(|i| i.product_id.as_str()).collect();
            assert_eq!(ids.len(), items.len(), "products repeat within an order");
            for i in items {
                assert!((1..=3).contains(&i.quantity));
                assert_eq!(i.total_price, Decimal::from(i.quantity) * i.unit_price);
                assert!(PRODUCTS.iter().any(|p| p.id == i.product_id && p.price == i.unit_price));
            }
            assert!(s.order.validate().is_ok());
            assert!(ADDRESSES.contains(&s.order.shipping_address.as_str()));
            assert!(CUSTOMERS.iter().any(|c| c.id == s.order.customer_id));
        }
    }

    #[test]
    fn dates_step_one_day_across_last_month() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(11);
        let seeds = generate(&mut rng, now);
        let base = now - Duration::days(30);

        for (i, s) in seeds.iter().enumerate() {
            let offset = s.order_date - (base + Duration::days(i as i64));
            assert!(offset >= Duration::zero() && offset <= Duration::hours(23));
            assert!(s.order_date < now);
        }
    }

    #[test]
    fn status_follows_age_band() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(3);
        for s in generate(&mut rng, now) {
            let days_old = (now - s.order_date).num_days();
            let allowed: &[OrderStatus] = match days_old {
                d if d > 20 => &[OrderStatus::Delivered, OrderStatus::Cancelled],
                d if d > 10 => &[OrderStatus::Shipped, OrderStatus::Delivered],
                d if d > 5 => &[OrderStatus::Processing, OrderStatus::Shipped],
                _ => &[OrderStatus::Pending, OrderStatus::Processing],
            };
            assert!(allowed.contains(&s.status), "{days_old} days -> {}", s.status);
        }
    }

    #[test]
    fn status_for_age_bands() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert!(matches!(
                status_for_age(&mut rng, 25),
                OrderStatus::Delivered | OrderStatus::Cancelled
            ));
            assert!(matches!(
                status_for_age(&mut rng, 2),
                OrderStatus::Pending | OrderStatus::Processing
            ));
        }
    }

    #[test]
    fn seeded_totals_hold() {
        let mut rng = StdRng::seed_from_u64(99);
        for s in generate(&mut rng, Utc::now()) {
            let t = s.order.validate().unwrap();
            let sum: Decimal = s.order.items.iter().map(|i| i.total_price).sum();
            assert_eq!(t.subtotal, sum.round_dp(2));
            assert_eq!(t.total_amount, t.subtotal + t.tax + t.shipping_cost);
        }
    }
}
