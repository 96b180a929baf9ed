//! # Car Example
//!
//! A host type that gains event support by embedding an [`EventEmitter`].
//!
//! Shows:
//! - Listeners with and without a payload, and plain functions
//! - Copying listeners out of the emitter and calling them directly
//! - One-shot, prepended and asynchronous listeners
//! - Removing every listener for a key
//!
//! ## Run
//! ```bash
//! RUST_LOG=eventvisor=debug cargo run --example car
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use std::time::Duration;

use eventvisor::{Emitting, EventEmitter, Listener, ListenerError, Options};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug)]
struct Event {
    name: String,
}

/// Position is shared with listeners, so they can read it when fired.
struct Car {
    x: Arc<AtomicI32>,
    y: Arc<AtomicI32>,
    events: EventEmitter<Event>,
}

impl Car {
    fn new(x: i32, y: i32) -> Self {
        Self {
            x: Arc::new(AtomicI32::new(x)),
            y: Arc::new(AtomicI32::new(y)),
            events: EventEmitter::new(),
        }
    }

    fn drive(&self, dx: i32, dy: i32) -> anyhow::Result<()> {
        self.x.fetch_add(dx, Ordering::SeqCst);
        self.y.fetch_add(dy, Ordering::SeqCst);
        self.emit("move", &Event { name: format!("moved by ({dx}, {dy})") })?;
        Ok(())
    }
}

impl Emitting<Event> for Car {
    fn emitter(&self) -> &EventEmitter<Event> {
        &self.events
    }
}

fn egg_function() -> Result<(), ListenerError> {
    println!("this is an egg function, don't mess with it");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let car = Car::new(5, 8);

    // Listener that ignores the payload but reads the car's state.
    let x = Arc::clone(&car.x);
    car.register(
        "move",
        Listener::unit(move || {
            println!("first move listener   car is moving now");
            println!("car x coordinate is {}", x.load(Ordering::SeqCst));
            Ok(())
        }),
        Options::NONE,
    );

    // Listener that receives the event.
    car.on("move", |evt: &Event| {
        println!("second move listener   car is still moving now");
        println!("{}", evt.name);
        Ok(())
    });

    // Plain function.
    car.register("move", Listener::unit(egg_function), Options::NONE);

    car.register(
        "stop",
        Listener::unit(|| {
            println!("stopped");
            Ok(())
        }),
        Options::NONE,
    );

    car.once("move", |_: &Event| {
        println!("first move only");
        Ok(())
    });

    car.register(
        "move",
        Listener::unit(|| {
            println!("prepended: runs before the others");
            Ok(())
        }),
        Options::PREPEND,
    );

    let y = Arc::clone(&car.y);
    car.register(
        "move",
        Listener::new(move |evt: &Event| {
            println!("[async] {} (y={})", evt.name, y.load(Ordering::SeqCst));
            Ok(())
        }),
        Options::ASYNC,
    );

    car.emit("move", &Event { name: "move event info".into() })?;
    car.drive(1, 2)?;

    // Copy the listeners out and call them with our own event.
    let copies = car.emitter().listeners("move");
    let event = Event { name: "foo-bar-event".into() };
    for record in copies.iter().filter(|r| !r.is_once()) {
        record.call(&event)?;
    }

    car.emit("stop", &Event { name: "stop".into() })?;

    car.remove_all_listeners("move");
    car.emit("move", &Event { name: "move event info".into() })?; // calls nothing
    println!("move listeners left: {}", car.listeners_count("move"));

    // Give detached listeners a moment to print before exiting.
    std::thread::sleep(Duration::from_millis(100));
    Ok(())
}
