//! Cart invariants checked over generated operation sequences.

use std::cell::RefCell;
use std::rc::Rc;

use shophub_commerce::prelude::*;

/// Small deterministic generator so runs are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

const CATALOG: [(&str, i64); 5] = [
    ("Wireless Headphones", 9999),
    ("Smart Watch", 19999),
    ("Laptop Stand", 4999),
    ("Phone Case", 1999),
    ("USB-C Cable", 999),
];

fn expected_totals(items: &[LineItem]) -> (i64, i64) {
    let units = items.iter().map(|i| i.quantity).sum();
    let cents = items
        .iter()
        .map(|i| i.unit_price.amount_cents * i.quantity)
        .sum();
    (units, cents)
}

#[test]
fn totals_match_lines_after_any_sequence() {
    for seed in 1..=40 {
        let mut rng = Lcg(seed);
        let mut cart = CartStore::new(Currency::USD);

        for _ in 0..200 {
            match rng.below(4) {
                0 | 1 => {
                    let (name, cents) = CATALOG[rng.below(CATALOG.len() as u64) as usize];
                    cart.add_item(name, Money::new(cents, Currency::USD), "/img.jpg")
                        .unwrap();
                }
                2 if !cart.is_empty() => {
                    let index = rng.below(cart.len() as u64) as usize;
                    let quantity = rng.below(8) as i64 - 2;
                    cart.set_quantity(index, quantity).unwrap();
                }
                3 if !cart.is_empty() => {
                    let index = rng.below(cart.len() as u64) as usize;
                    cart.remove_item(index).unwrap();
                }
                _ => {}
            }

            let snapshot = cart.snapshot();
            let (units, cents) = expected_totals(snapshot.items);
            assert_eq!(snapshot.total_items, units, "seed {seed}");
            assert_eq!(snapshot.total_price.amount_cents, cents, "seed {seed}");
            assert!(snapshot.items.iter().all(|i| i.quantity > 0), "seed {seed}");

            let mut names: Vec<&str> = snapshot.items.iter().map(|i| i.name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), snapshot.items.len(), "duplicate line, seed {seed}");
        }
    }
}

#[test]
fn checkout_example_from_two_lines() {
    let mut cart = CartStore::new(Currency::USD);
    cart.add_item("Ten", Money::from_decimal(10.0, Currency::USD), "")
        .unwrap();
    cart.add_item("Ten", Money::from_decimal(10.0, Currency::USD), "")
        .unwrap();
    cart.add_item("Five", Money::from_decimal(5.0, Currency::USD), "")
        .unwrap();

    let outcome = cart.checkout();
    let CheckoutOutcome::Completed(receipt) = &outcome else {
        panic!("expected a completed checkout, got {outcome:?}");
    };
    assert_eq!(receipt.total.display(), "$25.00");
    assert!(cart.is_empty());

    assert_eq!(cart.checkout(), CheckoutOutcome::Empty);
    assert_eq!(cart.checkout().notice().message, "Your cart is empty!");
}

#[test]
fn renderer_sees_state_after_mutation() {
    #[derive(Default)]
    struct Badge {
        count: i64,
        total: String,
    }

    struct BadgeRenderer(Rc<RefCell<Badge>>);

    impl CartRenderer for BadgeRenderer {
        fn render(&mut self, snapshot: &CartSnapshot<'_>) {
            let mut badge = self.0.borrow_mut();
            badge.count = snapshot.total_items;
            badge.total = snapshot.total_price.display_amount();
        }
    }

    let badge = Rc::new(RefCell::new(Badge::default()));
    let mut cart = CartStore::new(Currency::USD);
    cart.subscribe(BadgeRenderer(Rc::clone(&badge)));

    cart.add_item("Mug", Money::new(1250, Currency::USD), "").unwrap();
    cart.increment(0).unwrap();
    assert_eq!(badge.borrow().count, 2);
    assert_eq!(badge.borrow().total, "25.00");

    cart.remove_item(0).unwrap();
    assert_eq!(badge.borrow().count, 0);
    assert_eq!(badge.borrow().total, "0.00");
}
