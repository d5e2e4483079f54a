//! Walkthrough of the generator, enumerator and task primitives.
//!
//! Log verbosity comes from `RUST_LOG` (default `info`), e.g.
//! `RUST_LOG=costep=trace costep-demo`.

use std::{cell::Cell, io};

use costep::{
    math::{sqr, sqrt},
    prelude::*,
    print_to, println_to,
};
use tracing_subscriber::{
    filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .with_filter(filter);

    Registry::default().with(layer).init();
}

fn main() {
    init_logging();
    let mut out = io::stdout().lock();

    println_to!(&mut out, "Hello, costep!");

    println_to!(
        &mut out,
        "Testing squares: {}, {}, {}, {}",
        sqr(3),
        sqr(3.0),
        sqr(2_631_701_985_u64),
        sqr(40_735.61)
    );
    println_to!(
        &mut out,
        "Testing square roots: {}, {}, {}, {}",
        sqrt(25.0_f64),
        sqrt(25.0_f32),
        sqrt(1676.0_f64),
        sqrt(16.0_f32)
    );

    for letter in &iota('A', char::from(b'Z' + 1)) {
        print_to!(&mut out, "{} ", letter);
    }
    println_to!(&mut out);

    let mut head = accumulate(1_u64, |x| x * 2).take_first(10);
    for pass in 0..2 {
        let values: Vec<_> = head.cursor().items().collect();
        println_to!(&mut out, "Pass {}: {:?}", pass, values);
    }

    let mut scores = vec![0, 1, 2, 4, 5];
    for mut score in enumerate(&mut scores).take_first(3).cursor().items() {
        if let Some(s) = score.get_mut() {
            *s += 40;
        }
    }
    println_to!(&mut out, "Scores after write-through: {:?}", scores);

    let values = [0, 1, 2, 4, 5];
    let pos = Cell::new(0);
    let mut walk = repeat(|| {
        println_to!(&mut out, "{} ", values[pos.get()]);
        pos.set(pos.get() + 1);
        pos.get() == values.len()
    });
    let steps = drive(&mut walk);
    drop(walk);
    tracing::info!(steps, "walked vector with a repeat task");
    println_to!(&mut out);
}
