use serde::{Deserialize, Serialize};

/// Catalog product as served by the storefront API. Display fields are
/// opaque to the cart logic; only `id` participates in any decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// One cart line: a product plus its selected quantity.
/// Invariant: a stored amount is always >= 1 (amount 0 means removal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl CartItem {
    /// A freshly added line always starts at quantity 1.
    pub fn new(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    pub fn product_id(&self) -> u64 {
        self.product.id
    }
}

/// Ordered cart snapshot, unique by product id, insertion order preserved.
///
/// Mutation helpers never edit in place: each produces the next snapshot,
/// which atomically replaces the previous one once it has been persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructor for data already persisted in the store (no validation).
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selected quantity for the given product, if it is in the cart.
    pub fn amount_of(&self, product_id: u64) -> Option<u32> {
        self.items
            .iter()
            .find(|item| item.product_id() == product_id)
            .map(|item| item.amount)
    }

    pub fn contains(&self, product_id: u64) -> bool {
        self.amount_of(product_id).is_some()
    }

    /// Snapshot with `item` appended at the end.
    pub fn with_item(&self, item: CartItem) -> Cart {
        let mut items = self.items.clone();
        items.push(item);
        Cart { items }
    }

    /// Snapshot with the matching line set to `amount`; all other lines
    /// untouched. A snapshot without the product id comes back unchanged.
    pub fn with_amount(&self, product_id: u64, amount: u32) -> Cart {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.product_id() == product_id {
                    CartItem {
                        product: item.product.clone(),
                        amount,
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Cart { items }
    }

    /// Snapshot with the matching line filtered out, remaining order kept.
    pub fn without(&self, product_id: u64) -> Cart {
        let items = self
            .items
            .iter()
            .filter(|item| item.product_id() != product_id)
            .cloned()
            .collect();
        Cart { items }
    }
}
