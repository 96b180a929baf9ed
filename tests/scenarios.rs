//! End-to-end scenarios through the public API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use eventvisor::{
    EmitterConfig, Emitting, EventEmitter, Listener, ListenerError, Options, Spawner,
};
use parking_lot::Mutex;

#[derive(Clone, Debug)]
struct Event {
    name: String,
}

#[derive(Default)]
struct Car {
    events: EventEmitter<Event>,
    printed: Arc<Mutex<Vec<String>>>,
}

impl Emitting<Event> for Car {
    fn emitter(&self) -> &EventEmitter<Event> {
        &self.events
    }
}

impl Car {
    fn printer(&self, tag: &'static str) -> Listener<Event> {
        let out = Arc::clone(&self.printed);
        Listener::new(move |_: &Event| {
            out.lock().push(tag.to_string());
            Ok(())
        })
    }

    fn take_printed(&self) -> Vec<String> {
        std::mem::take(&mut *self.printed.lock())
    }
}

fn move_event() -> Event {
    Event {
        name: "move event info".into(),
    }
}

/// Polls `cond` until it holds or `limit` elapses.
fn wait_until(limit: Duration, cond: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + limit;
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    cond()
}

#[test]
fn car_move_scenario() {
    let car = Car::default();
    car.register("move", car.printer("A"), Options::NONE);
    car.register("move", car.printer("B"), Options::NONE);

    car.emit("move", &move_event()).unwrap();
    assert_eq!(car.take_printed(), vec!["A", "B"]);

    car.register_once("move", car.printer("C"), Options::NONE);
    car.emit("move", &move_event()).unwrap();
    car.emit("move", &move_event()).unwrap();
    assert_eq!(car.take_printed(), vec!["A", "B", "C", "A", "B"]);

    car.remove_all_listeners("move");
    car.emit("move", &move_event()).unwrap();
    assert!(car.take_printed().is_empty());
    assert_eq!(car.listeners_count("move"), 0);
    assert!(car.event_keys().is_empty());
}

#[test]
fn stop_listener_only_fires_for_stop() {
    let car = Car::default();
    let stops = Arc::new(AtomicUsize::new(0));
    let s = Arc::clone(&stops);
    car.register(
        "stop",
        Listener::unit(move || {
            s.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }),
        Options::NONE,
    );

    car.emit("move", &move_event()).unwrap();
    assert_eq!(stops.load(Ordering::SeqCst), 0);
    car.emit("stop", &Event { name: "stop".into() }).unwrap();
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}

#[test]
fn handle_removal_through_capability() {
    let car = Car::default();
    let a = car.register("move", car.printer("A"), Options::NONE);
    car.register("move", car.printer("B"), Options::NONE);

    assert!(car.remove_listener("move", a));
    assert!(!car.remove_listener("move", a));
    car.emit("move", &move_event()).unwrap();
    assert_eq!(car.take_printed(), vec!["B"]);
}

#[test]
fn async_listener_runs_exactly_once_on_threads() {
    let emitter: EventEmitter<u64> = EventEmitter::with_config(EmitterConfig {
        spawner: Spawner::Thread,
        ..EmitterConfig::default()
    });
    let counter = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&counter);
    emitter.register(
        "tick",
        Listener::new(move |n: &u64| {
            c.fetch_add(*n as usize, Ordering::SeqCst);
            Ok(())
        }),
        Options::ASYNC,
    );

    emitter.emit("tick", &1).unwrap();
    assert!(wait_until(Duration::from_secs(5), || counter.load(Ordering::SeqCst) == 1));
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn async_listener_outlives_emitter_and_payload_owner() {
    let counter = Arc::new(AtomicUsize::new(0));
    {
        let emitter: EventEmitter<String> = EventEmitter::new();
        let c = Arc::clone(&counter);
        emitter.register(
            "msg",
            Listener::new(move |s: &String| {
                std::thread::sleep(Duration::from_millis(20));
                c.fetch_add(s.len(), Ordering::SeqCst);
                Ok(())
            }),
            Options::ASYNC,
        );
        let payload = String::from("hello");
        emitter.emit("msg", &payload).unwrap();
    }
    assert!(wait_until(Duration::from_secs(5), || counter.load(Ordering::SeqCst) == 5));
}

#[test]
fn async_failures_never_reach_the_caller() {
    let emitter: EventEmitter<u8> = EventEmitter::new();
    let after = Arc::new(AtomicUsize::new(0));

    emitter.register(
        "k",
        Listener::new(|_: &u8| Err(ListenerError::fail("async boom"))),
        Options::ASYNC,
    );
    emitter.register(
        "k",
        Listener::new(|_: &u8| -> Result<(), ListenerError> { panic!("async panic") }),
        Options::ASYNC,
    );
    let a = Arc::clone(&after);
    emitter.on("k", move |_: &u8| {
        a.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    emitter.emit("k", &0).unwrap();
    emitter.emit("k", &0).unwrap();
    assert_eq!(after.load(Ordering::SeqCst), 2);
}

#[test]
fn async_once_listener_fires_once() {
    let emitter: EventEmitter<u8> = EventEmitter::with_config(EmitterConfig {
        spawner: Spawner::Thread,
        ..EmitterConfig::default()
    });
    let counter = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&counter);
    emitter.register_once(
        "k",
        Listener::new(move |_: &u8| {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }),
        Options::ASYNC,
    );

    for _ in 0..5 {
        emitter.emit("k", &0).unwrap();
    }
    assert!(wait_until(Duration::from_secs(5), || emitter.listeners_count("k") == 0));
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn concurrent_emitters_fire_once_listener_once() {
    let emitter: EventEmitter<u8> = EventEmitter::new();
    let counter = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&counter);
    emitter.once("k", move |_: &u8| {
        c.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    let threads: Vec<_> = (0..8)
        .map(|_| {
            let e = emitter.clone();
            std::thread::spawn(move || e.emit("k", &0).unwrap())
        })
        .collect();
    for t in threads {
        t.join().unwrap();
    }

    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(emitter.listeners_count("k"), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_listener_on_tokio_runtime() {
    let emitter: EventEmitter<u32> = EventEmitter::new();
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    emitter.register(
        "job",
        Listener::new(move |n: &u32| {
            tx.send(*n).map_err(|e| ListenerError::fail(e.to_string()))
        }),
        Options::ASYNC,
    );

    emitter.emit("job", &1).unwrap();
    emitter.emit("job", &2).unwrap();

    let mut rx = rx;
    let mut got = Vec::new();
    for _ in 0..2 {
        let n = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        got.push(n);
    }
    got.sort_unstable();
    assert_eq!(got, vec![1, 2]);
}

#[tokio::test]
async fn explicit_tokio_spawner() {
    let emitter: EventEmitter<u32> = EventEmitter::with_config(EmitterConfig {
        spawner: Spawner::Tokio(tokio::runtime::Handle::current()),
        ..EmitterConfig::default()
    });
    let counter = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&counter);
    emitter.register(
        "k",
        Listener::new(move |_: &u32| {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }),
        Options::ASYNC,
    );

    emitter.emit("k", &0).unwrap();
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while counter.load(Ordering::SeqCst) == 0 && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}
