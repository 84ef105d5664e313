use std::sync::Arc;
use std::thread;
use std::time::Duration;

use storefront_cart::{
    Cart, CartSession, CartStore, Catalog, FileSnapshotStore, InMemoryCatalog, LineItem, Product,
    ProductId, Rating, SnapshotStore,
};

fn demo_product(id: u64, title: &str, price: &str, category: &str) -> Product {
    Product {
        id: ProductId::from(id),
        title: title.to_string(),
        price: price.parse().unwrap(),
        description: String::new(),
        category: category.to_string(),
        image: String::new(),
        rating: Rating {
            rate: 4.2,
            count: 64,
        },
    }
}

fn print_cart(cart: &Cart) {
    for item in cart.items() {
        println!(
            "  {} x{} = {}",
            item.product.title,
            item.quantity,
            item.line_total()
        );
    }
    println!("  subtotal: {} ({} items)", cart.subtotal(), cart.total_items());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = InMemoryCatalog::new(vec![
        demo_product(1, "Fjallraven Backpack", "109.95", "men's clothing"),
        demo_product(2, "Mens Cotton Jacket", "55.99", "men's clothing"),
        demo_product(3, "SanDisk SSD 1TB", "109", "electronics"),
    ]);

    // Durable slot in a temp directory; rerunning against a fixed directory
    // would resume the same cart.
    let dir = std::env::temp_dir().join("storefront_cart_demo");
    let slot = Arc::new(FileSnapshotStore::new(&dir));

    let mut store = CartStore::new();

    store.on_change(|snapshot| {
        let items: Vec<LineItem> = serde_json::from_str(&snapshot).unwrap_or_default();
        let count: u64 = items.iter().map(|i| u64::from(i.quantity)).sum();
        println!("[badge] {} items in cart", count);
    });

    let session = CartSession::new(Arc::clone(&slot), "cart");
    session.attach(&mut store);
    session.hydrate(&mut store);

    println!("categories: {:?}", catalog.list_categories().await?);

    println!("\nshopper browses the listing and adds a backpack twice:");
    let products = catalog.list_products().await?;
    store.add(products[0].clone());
    store.add(products[0].clone());
    print_cart(store.cart());

    println!("\nshopper opens the SSD detail page and adds it:");
    let ssd = catalog.get_product(&ProductId::from(3u64)).await?;
    store.add(ssd);
    print_cart(store.cart());

    println!("\nshopper puts one backpack back:");
    store.decrement(&ProductId::from(1u64));
    print_cart(store.cart());

    // Let the persistence subscriber finish before reading the slot.
    thread::sleep(Duration::from_millis(200));
    println!(
        "\npersisted snapshot: {}",
        slot.read("cart")?.unwrap_or_else(|| "<empty>".to_string())
    );

    store.clear();
    thread::sleep(Duration::from_millis(200));
    slot.remove("cart")?;

    Ok(())
}
