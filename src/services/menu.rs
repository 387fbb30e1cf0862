// src/services/menu.rs
use serde::{Serialize, Serializer, ser::SerializeMap};

/// Name-to-number table that keeps the order entries were declared in.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceTable {
    entries: Vec<(String, f64)>,
}

impl PriceTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Serialize for PriceTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// The static menu: item prices and beverage size multipliers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MenuCatalog {
    pub prices: PriceTable,
    #[serde(rename = "price_multiplier")]
    pub size_multiplier: PriceTable,
}

impl MenuCatalog {
    pub fn new(prices: PriceTable, size_multiplier: PriceTable) -> Self {
        Self { prices, size_multiplier }
    }

    /// The NoPickles house menu.
    pub fn nopickles() -> Self {
        let prices = PriceTable::new([
            ("coffee", 1.50),
            ("cappuccino", 2.50),
            ("iced coffee", 2.00),
            ("iced capp", 2.25),
            ("latte", 2.00),
            ("tea", 1.50),
            ("hot chocolate", 2.25),
            ("french vanilla", 2.25),
            ("white chocolate", 2.25),
            ("mocha", 2.25),
            ("espresso", 1.00),
            ("americano", 2.25),
            ("extra shot", 0.25),
            ("soy milk", 0.30),
            ("whipped topping", 1.00),
            ("dark roast", 0.20),
            ("turkey bacon club", 3.00),
            ("blt", 2.90),
            ("grilled cheese", 4.00),
            ("chicken wrap", 3.50),
            ("soup", 2.80),
            ("donut", 1.50),
            ("double double", 1.50),
            ("triple triple", 1.50),
            ("muffin", 2.40),
            ("bagel", 3.00),
            ("timbits", 3.00),
            ("panini", 2.40),
            ("croissant", 3.00),
        ]);
        let size_multiplier = PriceTable::new([
            ("small", 1.0),
            ("medium", 1.2),
            ("large", 1.4),
            ("extra large", 1.6),
        ]);
        Self::new(prices, size_multiplier)
    }
}
