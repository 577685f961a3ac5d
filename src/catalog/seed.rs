//! Static seed catalog loaded once at startup.

use crate::domain::{Category, FilterChip, Product, ProductId};

/// Image asset shared by every seeded product.
const PRODUCT_IMAGE: &str = "product";

/// Image asset shared by every seeded category.
const CATEGORY_IMAGE: &str = "category";

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    bold_points: &'static str,
    price: &'static str,
    strikethrough: &'static str,
    rating: f32,
    reviews: &'static str,
    wishlisted: bool,
    in_cart: bool,
    in_stock: bool,
    best_seller: bool,
}

const PRODUCTS: [SeedProduct; 7] = [
    SeedProduct {
        name: "Premium Face Cream",
        description: "Nourishing formula for all skin types",
        bold_points: "Anti-aging • Moisturizing • Natural",
        price: "Rs. 499",
        strikethrough: "Rs. 700",
        rating: 4.2,
        reviews: "205 reviews",
        wishlisted: true,
        in_cart: false,
        in_stock: true,
        best_seller: true,
    },
    SeedProduct {
        name: "Luxury Serum",
        description: "Premium anti-aging serum",
        bold_points: "Vitamin C • Hyaluronic Acid • Retinol",
        price: "Rs. 899",
        strikethrough: "Rs. 1200",
        rating: 3.8,
        reviews: "67 reviews",
        wishlisted: false,
        in_cart: true,
        in_stock: true,
        best_seller: false,
    },
    SeedProduct {
        name: "Organic Moisturizer",
        description: "100% natural ingredients",
        bold_points: "Organic • Paraben-free • Gentle",
        price: "Rs. 350",
        strikethrough: "",
        rating: 4.5,
        reviews: "142 reviews",
        wishlisted: false,
        in_cart: false,
        in_stock: false,
        best_seller: true,
    },
    SeedProduct {
        name: "Vitamin C Cleanser",
        description: "Brightening facial cleanser",
        bold_points: "Brightening • Deep cleansing • pH balanced",
        price: "Rs. 299",
        strikethrough: "Rs. 399",
        rating: 3.9,
        reviews: "89 reviews",
        wishlisted: true,
        in_cart: true,
        in_stock: true,
        best_seller: false,
    },
    SeedProduct {
        name: "Night Recovery Mask",
        description: "Intensive overnight treatment",
        bold_points: "Repairing • Hydrating • Overnight",
        price: "Rs. 799",
        strikethrough: "Rs. 999",
        rating: 4.1,
        reviews: "156 reviews",
        wishlisted: false,
        in_cart: false,
        in_stock: true,
        best_seller: false,
    },
    SeedProduct {
        name: "Sunscreen SPF 50",
        description: "Broad spectrum sun protection",
        bold_points: "SPF 50 • Water resistant • Non-greasy",
        price: "Rs. 450",
        strikethrough: "",
        rating: 4.0,
        reviews: "234 reviews",
        wishlisted: true,
        in_cart: false,
        in_stock: false,
        best_seller: true,
    },
    SeedProduct {
        name: "Exfoliating Scrub",
        description: "Gentle daily exfoliation",
        bold_points: "Gentle • Natural beads • Refreshing",
        price: "Rs. 199",
        strikethrough: "Rs. 250",
        rating: 3.7,
        reviews: "76 reviews",
        wishlisted: false,
        in_cart: true,
        in_stock: true,
        best_seller: false,
    },
];

const CHIPS: [(&str, &str); 8] = [
    ("1", "Beauty"),
    ("2", "Skincare"),
    ("3", "Makeup"),
    ("4", "Fragrance"),
    ("5", "Hair Care"),
    ("6", "Body Care"),
    ("7", "Anti-Aging"),
    ("8", "Moisturizer"),
];

const CATEGORIES: [&str; 7] = [
    "Day Wear",
    "Night Wear",
    "Face Cream",
    "Party Wear",
    "Sunscreen",
    "Lipstick",
    "Perfume",
];

/// Returns the seed product list, with ids assigned by position.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .zip(0u32..)
        .map(|(seed, index)| Product {
            id: ProductId(index),
            name: seed.name.to_string(),
            image: PRODUCT_IMAGE.to_string(),
            short_description: seed.description.to_string(),
            bold_points: seed.bold_points.to_string(),
            present_price: seed.price.to_string(),
            strikethrough_price: (!seed.strikethrough.is_empty())
                .then(|| seed.strikethrough.to_string()),
            star_rating: seed.rating,
            review_count: seed.reviews.to_string(),
            is_wishlisted: seed.wishlisted,
            is_in_cart: seed.in_cart,
            is_in_stock: seed.in_stock,
            is_best_seller: seed.best_seller,
        })
        .collect()
}

/// Returns the eight search filter chips, all unselected.
#[must_use]
pub fn filter_chips() -> Vec<FilterChip> {
    CHIPS
        .iter()
        .map(|&(id, label)| FilterChip::new(id, label))
        .collect()
}

/// Returns the browsing categories shown on the home view.
#[must_use]
pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|name| Category::new(*name, CATEGORY_IMAGE))
        .collect()
}
