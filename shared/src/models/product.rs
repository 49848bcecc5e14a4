//! Product Model
//!
//! Immutable catalog reference data. The retail price is derived from the
//! supplier base price exactly once, when the catalog is constructed; no
//! other component recomputes it.

use crate::pricing::retail_price;
use serde::{Deserialize, Serialize};

/// Fixed product category enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Laptops,
    Desktops,
    Accessories,
    Networking,
    Software,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 5] = [
        Category::Laptops,
        Category::Desktops,
        Category::Accessories,
        Category::Networking,
        Category::Software,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Laptops => "Laptops",
            Category::Desktops => "Desktops",
            Category::Accessories => "Accessories",
            Category::Networking => "Networking",
            Category::Software => "Software",
        }
    }

    /// Parse a category from its display label
    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wholesale supplier the product is sourced from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Supplier {
    #[serde(rename = "Barclays.lk")]
    Barclays,
    #[serde(rename = "Newcom.lk")]
    Newcom,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub supplier: Supplier,
    /// Supplier cost in whole rupees (never shown to customers)
    pub base_price: i64,
    /// Customer-facing price, `round(base_price * 1.3)` at construction time
    pub retail_price: i64,
    pub image_url: String,
    pub description: String,
    /// Ordered spec highlights
    pub specs: Vec<String>,
}

impl Product {
    /// Create a product, deriving the retail price from the base price
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        supplier: Supplier,
        base_price: i64,
        image_url: impl Into<String>,
        description: impl Into<String>,
        specs: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            supplier,
            base_price,
            retail_price: retail_price(base_price),
            image_url: image_url.into(),
            description: description.into(),
            specs: specs.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The fixed nine-product catalog, in display order
pub fn seed_catalog() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "ASUS ROG Zephyrus G14 (2024)",
            Category::Laptops,
            Supplier::Barclays,
            520_000,
            "https://images.unsplash.com/photo-1593642702821-c8da6771f0c6?auto=format&fit=crop&q=80&w=800",
            "The pinnacle of portable gaming. AMD Ryzen 9, OLED display, and RTX 4070.",
            &["Ryzen 9 8945HS", "32GB DDR5", "1TB Gen4 SSD", "RTX 4070 8GB"],
        ),
        Product::new(
            "2",
            "HP EliteBook 840 G10 Business",
            Category::Laptops,
            Supplier::Newcom,
            385_000,
            "https://images.unsplash.com/photo-1588872657578-7efd1f1555ed?auto=format&fit=crop&q=80&w=800",
            "Secure, manageable, and powerful laptop for the modern professional.",
            &["Core i7-1355U", "16GB RAM", "512GB SSD", "WUXGA IPS Display"],
        ),
        Product::new(
            "3",
            "Logitech MX Master 3S Graphite",
            Category::Accessories,
            Supplier::Barclays,
            35_000,
            "https://images.unsplash.com/photo-1615663245857-ac93bb7c39e7?auto=format&fit=crop&q=80&w=800",
            "Iconic mouse remastered. Precision tracking and near-silent clicks.",
            &["8K DPI Tracking", "MagSpeed Scroll", "Multi-OS support"],
        ),
        Product::new(
            "4",
            "Ubiquiti UniFi Dream Router (UDR)",
            Category::Networking,
            Supplier::Newcom,
            135_000,
            "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?auto=format&fit=crop&q=80&w=800",
            "Next-generation WiFi 6 router with integrated security and app server.",
            &["WiFi 6 Technology", "SD Card Slot for NVR", "4-Port Switch with PoE"],
        ),
        Product::new(
            "5",
            "Dell UltraSharp 32\" 4K Video Conf",
            Category::Accessories,
            Supplier::Barclays,
            245_000,
            "https://images.unsplash.com/photo-1527443224154-c4a3942d3acf?auto=format&fit=crop&q=80&w=800",
            "Built-in 4K intelligent webcam, echo-cancelling mic, and dual 14W speakers.",
            &["4K UHD", "IPS Black Tech", "USB-C Hub (90W)"],
        ),
        Product::new(
            "9",
            "MacBook Pro 14\" M3 Pro Chip",
            Category::Laptops,
            Supplier::Barclays,
            685_000,
            "https://images.unsplash.com/photo-1517336714460-4c504990d165?auto=format&fit=crop&q=80&w=800",
            "The most advanced chips for a pro laptop. Incredible battery life up to 22h.",
            &["M3 Pro 11-core CPU", "18GB Unified Memory", "512GB SSD", "Liquid Retina XDR"],
        ),
        Product::new(
            "10",
            "MikroTik Cloud Core Router 2004",
            Category::Networking,
            Supplier::Newcom,
            215_000,
            "https://images.unsplash.com/photo-1558494949-ef010cbdcc51?auto=format&fit=crop&q=80&w=800",
            "Powerful networking router for ISPs and medium enterprises.",
            &["12x 10G SFP+ Ports", "Dual Redundant Power", "4GB RAM", "ARM 64bit CPU"],
        ),
        Product::new(
            "11",
            "Seagate IronWolf Pro 20TB NAS",
            Category::Accessories,
            Supplier::Barclays,
            195_000,
            "https://images.unsplash.com/photo-1531492746377-41be9150bb73?auto=format&fit=crop&q=80&w=800",
            "Optimized for NAS with AgileArray for always-on reliability.",
            &["20TB Capacity", "7200 RPM", "SATA 6Gb/s", "300TB/year workload"],
        ),
        Product::new(
            "12",
            "APC Smart-UPS 1500VA LCD",
            Category::Accessories,
            Supplier::Barclays,
            95_000,
            "https://images.unsplash.com/photo-1581092160562-40aa08e78837?auto=format&fit=crop&q=80&w=800",
            "Intelligent and efficient network power protection.",
            &["1000 Watts / 1500 VA", "Line Interactive", "Sine Wave Output"],
        ),
    ]
}
