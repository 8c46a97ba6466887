//! Ranks five phones twice: once with all criteria weighted equally, once
//! with price dominating.
//!
//! Run with `cargo run --example phones`. Set `RUST_LOG=u_topsis=debug`
//! to see the engine's log output.

use std::fmt;

use tracing_subscriber::EnvFilter;
use u_topsis::report::Table;
use u_topsis::topsis::{Criteria, CriterionValue, Direction, Ranking};

#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
enum Looks {
    Terrible = 1,
    BelowAverage,
    Average,
    Good,
    Excellent,
}

impl CriterionValue for Looks {
    fn to_f64(self) -> f64 {
        self as i32 as f64
    }
}

impl fmt::Display for Looks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug)]
struct Phone {
    name: &'static str,
    price: u32,
    storage: u32,
    camera: u32,
    looks: Looks,
}

fn phones() -> Vec<Phone> {
    vec![
        Phone {
            name: "Mobile 1",
            price: 250,
            storage: 16,
            camera: 12,
            looks: Looks::Excellent,
        },
        Phone {
            name: "Mobile 2",
            price: 200,
            storage: 16,
            camera: 8,
            looks: Looks::Average,
        },
        Phone {
            name: "Mobile 3",
            price: 300,
            storage: 32,
            camera: 16,
            looks: Looks::Good,
        },
        Phone {
            name: "Mobile 4",
            price: 275,
            storage: 32,
            camera: 8,
            looks: Looks::Good,
        },
        Phone {
            name: "Mobile 5",
            price: 225,
            storage: 16,
            camera: 16,
            looks: Looks::BelowAverage,
        },
    ]
}

fn criteria(price: f64, rest: f64) -> Criteria<Phone> {
    Criteria::new()
        .with_named_criterion("price", |p: &Phone| p.price, price, Direction::Negative)
        .with_named_criterion("storage", |p: &Phone| p.storage, rest, Direction::Positive)
        .with_named_criterion("camera", |p: &Phone| p.camera, rest, Direction::Positive)
        .with_named_criterion("looks", |p: &Phone| p.looks, rest, Direction::Positive)
}

fn table(ranking: &Ranking<'_, Phone>) -> Table {
    let mut table = Table::new(["Name", "Price", "Storage", "Camera", "Looks", "Score"]);
    for r in ranking {
        let p = r.item;
        table.add_row([
            p.name.to_string(),
            p.price.to_string(),
            p.storage.to_string(),
            p.camera.to_string(),
            p.looks.to_string(),
            r.score.to_string(),
        ]);
    }
    table
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let phones = phones();

    println!("Considering all criteria equally");
    let ranked = criteria(0.25, 0.25).rank(&phones);
    println!("{}", table(&ranked));

    println!("\n\nConsidering price at 70%");
    let ranked = criteria(0.7, 0.1).rank(&phones);
    println!("{}", table(&ranked));
}
