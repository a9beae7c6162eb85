//! Catalog port definition.

use crate::domain::entities::{
    Activity, ActiveOrder, MenuItem, PaymentMethod, PickupDate, Service, SubscriptionPlan,
    TimeSlot, TrackedOrder, Transaction, UserProfile,
};

/// Read-only reference data shown by the screens.
pub trait CatalogPort: Send + Sync {
    /// Bookable services.
    fn services(&self) -> &[Service];

    /// Pickup date labels offered by the booking screen.
    fn pickup_dates(&self) -> &[PickupDate];

    /// Pickup time slot labels offered by the booking screen.
    fn time_slots(&self) -> &[TimeSlot];

    /// Orders listed on the home screen.
    fn active_orders(&self) -> &[ActiveOrder];

    /// Order shown on the tracking screen.
    fn tracked_order(&self) -> &TrackedOrder;

    /// Opening wallet balance in naira.
    fn wallet_balance(&self) -> u64;

    /// Wallet history, newest first.
    fn transactions(&self) -> &[Transaction];

    fn subscription_plans(&self) -> &[SubscriptionPlan];

    fn payment_methods(&self) -> &[PaymentMethod];

    /// Preset top-up amounts.
    fn quick_fund_amounts(&self) -> &[u64];

    fn profile(&self) -> &UserProfile;

    fn menu_items(&self) -> &[MenuItem];

    fn recent_activity(&self) -> &[Activity];

    /// Looks up a service by identifier.
    fn service(&self, id: &str) -> Option<&Service> {
        self.services().iter().find(|s| s.id.as_str() == id)
    }

    fn pickup_date(&self, label: &str) -> Option<&PickupDate> {
        self.pickup_dates().iter().find(|d| d.as_str() == label)
    }

    fn time_slot(&self, label: &str) -> Option<&TimeSlot> {
        self.time_slots().iter().find(|t| t.as_str() == label)
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::entities::{BillingUnit, OrderStatus, Rider};

    /// Minimal catalog for testing.
    pub struct MockCatalog {
        services: Vec<Service>,
        dates: Vec<PickupDate>,
        slots: Vec<TimeSlot>,
        tracked: TrackedOrder,
        profile: UserProfile,
        methods: Vec<PaymentMethod>,
        transactions: Vec<Transaction>,
        balance: u64,
    }

    impl MockCatalog {
        /// Creates catalog with two services, one date and one slot.
        pub fn new() -> Self {
            Self {
                services: vec![
                    Service::new("shirts", "Shirts", 300, BillingUnit::Item, "S", "Shirts"),
                    Service::new("bulk", "Bulk", 450, BillingUnit::Kg, "B", "Bulk wash"),
                ],
                dates: vec![PickupDate::new("Monday")],
                slots: vec![TimeSlot::new("Noon")],
                tracked: TrackedOrder {
                    id: "T1".to_string(),
                    status: OrderStatus::InProgress,
                    service: "Shirts".to_string(),
                    items: 1,
                    total: 400,
                    pickup_time: "Noon".to_string(),
                    delivery_time: "Evening".to_string(),
                    rider: Rider {
                        name: "Test Rider".to_string(),
                        phone: "000".to_string(),
                        rating: 5.0,
                    },
                    steps: Vec::new(),
                },
                profile: UserProfile {
                    name: "Test User".to_string(),
                    short_name: "Test".to_string(),
                    email: "test@example.com".to_string(),
                    phone: "000".to_string(),
                    address: "1 Test Road".to_string(),
                    location: "Testville".to_string(),
                    join_date: "Today".to_string(),
                    total_orders: 0,
                    loyalty_points: 0,
                    rating: 5.0,
                },
                methods: vec![PaymentMethod::new("Card", "Any card")],
                transactions: Vec::new(),
                balance: 50,
            }
        }

        /// Sets the opening wallet balance.
        pub fn with_balance(mut self, balance: u64) -> Self {
            self.balance = balance;
            self
        }
    }

    impl CatalogPort for MockCatalog {
        fn services(&self) -> &[Service] {
            &self.services
        }

        fn pickup_dates(&self) -> &[PickupDate] {
            &self.dates
        }

        fn time_slots(&self) -> &[TimeSlot] {
            &self.slots
        }

        fn active_orders(&self) -> &[ActiveOrder] {
            &[]
        }

        fn tracked_order(&self) -> &TrackedOrder {
            &self.tracked
        }

        fn wallet_balance(&self) -> u64 {
            self.balance
        }

        fn transactions(&self) -> &[Transaction] {
            &self.transactions
        }

        fn subscription_plans(&self) -> &[SubscriptionPlan] {
            &[]
        }

        fn payment_methods(&self) -> &[PaymentMethod] {
            &self.methods
        }

        fn quick_fund_amounts(&self) -> &[u64] {
            &[100]
        }

        fn profile(&self) -> &UserProfile {
            &self.profile
        }

        fn menu_items(&self) -> &[MenuItem] {
            &[]
        }

        fn recent_activity(&self) -> &[Activity] {
            &[]
        }
    }
}
