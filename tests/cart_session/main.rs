mod fixtures;

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use fixtures::{backpack, jacket};
use storefront_cart::{
    CartSession, CartStore, FileSnapshotStore, LineItem, SnapshotStore,
};

const CART_KEY: &str = "cart";

fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(10));
    }
    false
}

fn stored_items(slot: &FileSnapshotStore) -> Option<Vec<LineItem>> {
    slot.read(CART_KEY)
        .unwrap()
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

#[test]
fn cart_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    // First session: shopper fills the cart.
    {
        let slot = Arc::new(FileSnapshotStore::new(dir.path()));
        let mut store = CartStore::new();
        let session = CartSession::new(Arc::clone(&slot), CART_KEY);
        session.attach(&mut store);
        session.hydrate(&mut store);

        store.add(backpack());
        store.add(backpack());
        store.add(jacket());

        assert!(wait_until(|| {
            stored_items(&slot).is_some_and(|items| items.len() == 2)
        }));
    }

    // Second session: a fresh process rehydrates the same slot.
    let slot = Arc::new(FileSnapshotStore::new(dir.path()));
    let mut store = CartStore::new();
    let session = CartSession::new(Arc::clone(&slot), CART_KEY);
    session.attach(&mut store);
    session.hydrate(&mut store);

    assert_eq!(store.total_items(), 3);
    assert_eq!(store.items()[0].product.title, backpack().title);
    assert_eq!(store.items()[0].quantity, 2);
    assert_eq!(
        store.subtotal(),
        "275.89".parse::<rust_decimal::Decimal>().unwrap()
    );
}

#[test]
fn startup_never_clobbers_a_stored_cart_before_rehydration() {
    let dir = tempfile::tempdir().unwrap();
    let slot = Arc::new(FileSnapshotStore::new(dir.path()));

    let stored = vec![LineItem::new(backpack(), 2)];
    slot.write(CART_KEY, &serde_json::to_string(&stored).unwrap())
        .unwrap();

    let mut store = CartStore::new();
    let session = CartSession::new(Arc::clone(&slot), CART_KEY);
    session.attach(&mut store);

    // First render writes nothing: the guard flag is still down.
    store.replace_all(Vec::new());
    thread::sleep(Duration::from_millis(150));
    assert_eq!(stored_items(&slot), Some(stored.clone()));

    session.hydrate(&mut store);
    assert_eq!(store.items(), stored.as_slice());
}

#[test]
fn every_mutation_after_hydration_reaches_the_slot() {
    let dir = tempfile::tempdir().unwrap();
    let slot = Arc::new(FileSnapshotStore::new(dir.path()));

    let mut store = CartStore::new();
    let session = CartSession::new(Arc::clone(&slot), CART_KEY);
    session.attach(&mut store);
    session.hydrate(&mut store);

    store.add(backpack());
    store.add(jacket());
    let jacket_id = jacket().id;
    store.remove(&jacket_id);
    let backpack_id = backpack().id;
    store.set_quantity(&backpack_id, 4);

    assert!(wait_until(|| {
        stored_items(&slot)
            .is_some_and(|items| items.len() == 1 && items[0].quantity == 4)
    }));
}

#[test]
fn clearing_the_cart_persists_the_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let slot = Arc::new(FileSnapshotStore::new(dir.path()));

    let mut store = CartStore::new();
    let session = CartSession::new(Arc::clone(&slot), CART_KEY);
    session.attach(&mut store);
    session.hydrate(&mut store);

    store.add(backpack());
    assert!(wait_until(|| stored_items(&slot).is_some_and(|i| !i.is_empty())));

    store.clear();
    assert!(wait_until(|| stored_items(&slot).is_some_and(|i| i.is_empty())));
}

#[test]
fn corrupt_slot_contents_reset_to_an_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let slot = Arc::new(FileSnapshotStore::new(dir.path()));
    slot.write(CART_KEY, "{{{ definitely not json").unwrap();

    let mut store = CartStore::new();
    let session = CartSession::new(Arc::clone(&slot), CART_KEY);
    session.attach(&mut store);
    session.hydrate(&mut store);

    assert!(store.cart().is_empty());

    // The session keeps working: the next mutation overwrites the garbage.
    store.add(backpack());
    assert!(wait_until(|| {
        stored_items(&slot).is_some_and(|items| items.len() == 1)
    }));
}

#[test]
fn hand_edited_snapshots_are_sanitized_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let slot = Arc::new(FileSnapshotStore::new(dir.path()));

    let raw = format!(
        r#"[
            {{"product": {}, "quantity": 2}},
            {{"product": {}, "quantity": 0}},
            {{"product": {}, "quantity": 3}},
            {{"not a": "line item"}}
        ]"#,
        serde_json::to_string(&backpack()).unwrap(),
        serde_json::to_string(&jacket()).unwrap(),
        serde_json::to_string(&backpack()).unwrap(),
    );
    slot.write(CART_KEY, &raw).unwrap();

    let mut store = CartStore::new();
    let session = CartSession::new(Arc::clone(&slot), CART_KEY);
    session.attach(&mut store);
    session.hydrate(&mut store);

    // Duplicate backpack entries merged, zero-quantity jacket dropped,
    // malformed entry dropped.
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].quantity, 5);
    assert_eq!(store.items()[0].product.id, backpack().id);
}
