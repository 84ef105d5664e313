use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cart::LineItem;
use crate::snapshot::SnapshotStore;
use crate::store::CartStore;

/// Bridges a [`CartStore`] to one durable snapshot slot.
///
/// Lifecycle: construct, [`attach`](CartSession::attach) the write-back
/// subscriber, then [`hydrate`](CartSession::hydrate) once at startup.
/// Attaching before hydrating is safe by design: write-back is gated on a
/// hydration flag, so a change observed before the rehydration read has
/// completed can never overwrite a legitimately persisted cart with the
/// empty initial state. The flag is set exactly once, after the first
/// hydration pass, whether or not that pass found data, and is never reset.
///
/// Slot failures never surface to the shopper. A failed read leaves the cart
/// empty; a failed write is abandoned and the next change tries again. There
/// is no retry, timeout, or rollback: the in-memory cart stays authoritative
/// for the session either way.
pub struct CartSession<S> {
    slot: Arc<S>,
    key: String,
    hydrated: Arc<AtomicBool>,
}

impl<S> CartSession<S>
where
    S: SnapshotStore + 'static,
{
    /// Create a session over `slot`, persisting under `key`.
    pub fn new(slot: Arc<S>, key: impl Into<String>) -> Self {
        CartSession {
            slot,
            key: key.into(),
            hydrated: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the one-time rehydration pass has completed.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated.load(Ordering::SeqCst)
    }

    /// Register the persistence subscriber on `store`: every cart change is
    /// written to the slot verbatim, once hydration has completed.
    pub fn attach(&self, store: &mut CartStore) {
        let slot = Arc::clone(&self.slot);
        let key = self.key.clone();
        let hydrated = Arc::clone(&self.hydrated);

        store.on_change(move |snapshot| {
            if !hydrated.load(Ordering::SeqCst) {
                return;
            }
            if let Err(err) = slot.write(&key, &snapshot) {
                log::warn!("cart snapshot write skipped: {}", err);
            }
        });
    }

    /// One-time rehydration pass: read the slot, sanitize whatever it holds,
    /// and replace the cart with it. Read and parse failures are logged and
    /// leave the cart at its empty initial state; startup never fails here.
    pub fn hydrate(&self, store: &mut CartStore) {
        if self.hydrated.swap(true, Ordering::SeqCst) {
            return;
        }

        match self.slot.read(&self.key) {
            Ok(Some(raw)) => match sanitize(&raw) {
                Ok(items) => store.replace_all(items),
                Err(err) => {
                    log::warn!("cart snapshot unreadable, starting empty: {}", err);
                }
            },
            Ok(None) => {}
            Err(err) => {
                log::warn!("cart snapshot read failed, starting empty: {}", err);
            }
        }
    }
}

/// Decode a stored snapshot defensively. Storage contents are untrusted: a
/// hand-edited or future-schema payload must not be able to smuggle a cart
/// that violates the dedup or quantity-floor invariants.
///
/// Entries are decoded individually; ones that fail to decode (including
/// negative quantities) are dropped, zero quantities are dropped, and
/// duplicate product ids are merged by summing into the first occurrence.
/// A payload that is not a JSON array at all is a hard parse failure.
fn sanitize(raw: &str) -> Result<Vec<LineItem>, serde_json::Error> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(raw)?;

    let mut items: Vec<LineItem> = Vec::with_capacity(entries.len());
    let mut dropped = 0usize;

    for entry in entries {
        let item: LineItem = match serde_json::from_value(entry) {
            Ok(item) => item,
            Err(_) => {
                dropped += 1;
                continue;
            }
        };

        if item.quantity == 0 {
            dropped += 1;
            continue;
        }

        match items
            .iter_mut()
            .find(|existing| existing.product.id == item.product.id)
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => items.push(item),
        }
    }

    if dropped > 0 {
        log::warn!("dropped {} malformed cart snapshot entries", dropped);
    }

    Ok(items)
}
