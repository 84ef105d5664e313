use storefront_cart::{Product, ProductId, Rating};

pub fn backpack() -> Product {
    Product {
        id: ProductId::from(1u64),
        title: "Fjallraven - Foldsack No. 1 Backpack".to_string(),
        price: "109.95".parse().unwrap(),
        description: "Fits 15 inch laptops".to_string(),
        category: "men's clothing".to_string(),
        image: "https://example.test/backpack.jpg".to_string(),
        rating: Rating {
            rate: 3.9,
            count: 120,
        },
    }
}

pub fn jacket() -> Product {
    Product {
        id: ProductId::from(3u64),
        title: "Mens Cotton Jacket".to_string(),
        price: "55.99".parse().unwrap(),
        description: "Great outerwear for spring and autumn".to_string(),
        category: "men's clothing".to_string(),
        image: "https://example.test/jacket.jpg".to_string(),
        rating: Rating {
            rate: 4.7,
            count: 500,
        },
    }
}
