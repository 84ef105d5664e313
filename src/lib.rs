mod cart;
mod catalog;
mod product;
#[cfg(feature = "emitter")]
mod session;
mod snapshot;
#[cfg(feature = "emitter")]
mod store;

pub use cart::{Cart, LineItem};
pub use catalog::{Catalog, CatalogError, InMemoryCatalog};
#[cfg(feature = "remote-catalog")]
pub use catalog::RemoteCatalog;
pub use product::{Product, ProductId, Rating};
#[cfg(feature = "emitter")]
pub use session::CartSession;
pub use snapshot::{FileSnapshotStore, InMemorySnapshotStore, SnapshotError, SnapshotStore};
#[cfg(feature = "emitter")]
pub use store::{CartStore, CART_CHANGED};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
