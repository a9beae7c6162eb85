use serde::{Deserialize, Serialize};

/// Catalog identifier of a laundry service, e.g. `wash-fold`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// What a service price is charged per.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingUnit {
    /// Charged by weight.
    Kg,
    /// Charged per garment.
    Item,
}

impl BillingUnit {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Item => "item",
        }
    }

    /// Plural used next to the quantity stepper ("Number of kgs").
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Kg => "kgs",
            Self::Item => "items",
        }
    }
}

impl std::fmt::Display for BillingUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A bookable laundry service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    /// Whole naira per unit.
    pub price: u64,
    pub unit: BillingUnit,
    pub icon: String,
    pub description: String,
}

impl Service {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: u64,
        unit: BillingUnit,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ServiceId::new(id),
            name: name.into(),
            price,
            unit,
            icon: icon.into(),
            description: description.into(),
        }
    }

    /// Price label as shown on service tiles, e.g. `₦500/kg`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("₦{}/{}", self.price, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label() {
        let service = Service::new(
            "dry-clean",
            "Dry Cleaning",
            800,
            BillingUnit::Item,
            "🧥",
            "Professional dry cleaning",
        );
        assert_eq!(service.price_label(), "₦800/item");
        assert_eq!(service.id.as_str(), "dry-clean");
    }

    #[test]
    fn test_unit_plural() {
        assert_eq!(BillingUnit::Kg.plural(), "kgs");
        assert_eq!(BillingUnit::Item.plural(), "items");
    }
}
