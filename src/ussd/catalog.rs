//! Bundle offer catalog

use std::fmt::Write;

/// A purchasable SMS study bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOffer {
    pub description: String,
    pub price: u32,
}

/// Fixed ordered catalog; menu input references offers by 1-based position.
#[derive(Debug, Clone)]
pub struct BundleCatalog {
    offers: Vec<BundleOffer>,
}

impl BundleCatalog {
    pub fn new(offers: Vec<BundleOffer>) -> Self {
        Self { offers }
    }

    /// The production line-up, priced in TZS.
    pub fn standard() -> Self {
        Self::new(vec![
            BundleOffer {
                description: "30 SMS study pack".to_string(),
                price: 500,
            },
            BundleOffer {
                description: "100 SMS study pack".to_string(),
                price: 1200,
            },
            BundleOffer {
                description: "Unlimited weekly pack".to_string(),
                price: 2500,
            },
        ])
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Resolve a 1-based menu selection.
    pub fn offer(&self, selection: usize) -> Option<&BundleOffer> {
        selection.checked_sub(1).and_then(|i| self.offers.get(i))
    }

    /// Numbered listing for the bundle menu screen.
    pub fn listing(&self) -> String {
        let mut listing = String::new();
        for (i, offer) in self.offers.iter().enumerate() {
            if i > 0 {
                listing.push('\n');
            }
            let _ = write!(listing, "{}. {} - TZS {}", i + 1, offer.description, offer.price);
        }
        listing
    }
}
