//! Hand-authored catalog compiled into the binary.

use crate::domain::entities::{
    ActiveOrder, Activity, ActivityKind, BillingUnit, MenuItem, OrderStatus, PaymentMethod,
    PickupDate, Rider, Service, StepState, SubscriptionPlan, TimeSlot, TrackedOrder, TrackingStep,
    Transaction, TransactionKind, TransactionStatus, UserProfile,
};
use crate::domain::ports::CatalogPort;

const PICKUP_DATES: [&str; 3] = ["Today", "Tomorrow", "Jan 10"];

const TIME_SLOTS: [&str; 6] = [
    "8:00 AM - 10:00 AM",
    "10:00 AM - 12:00 PM",
    "12:00 PM - 2:00 PM",
    "2:00 PM - 4:00 PM",
    "4:00 PM - 6:00 PM",
    "6:00 PM - 8:00 PM",
];

const QUICK_FUND_AMOUNTS: [u64; 3] = [1000, 2000, 5000];

const OPENING_BALANCE: u64 = 2500;

/// Catalog built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    services: Vec<Service>,
    pickup_dates: Vec<PickupDate>,
    time_slots: Vec<TimeSlot>,
    active_orders: Vec<ActiveOrder>,
    tracked_order: TrackedOrder,
    transactions: Vec<Transaction>,
    subscription_plans: Vec<SubscriptionPlan>,
    payment_methods: Vec<PaymentMethod>,
    profile: UserProfile,
    menu_items: Vec<MenuItem>,
    recent_activity: Vec<Activity>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: services(),
            pickup_dates: PICKUP_DATES.into_iter().map(PickupDate::new).collect(),
            time_slots: TIME_SLOTS.into_iter().map(TimeSlot::new).collect(),
            active_orders: active_orders(),
            tracked_order: tracked_order(),
            transactions: transactions(),
            subscription_plans: subscription_plans(),
            payment_methods: payment_methods(),
            profile: profile(),
            menu_items: menu_items(),
            recent_activity: recent_activity(),
        }
    }
}

fn services() -> Vec<Service> {
    vec![
        Service::new(
            "wash-fold",
            "Wash & Fold",
            500,
            BillingUnit::Kg,
            "👕",
            "Regular washing and folding",
        ),
        Service::new(
            "dry-clean",
            "Dry Cleaning",
            800,
            BillingUnit::Item,
            "🧥",
            "Professional dry cleaning",
        ),
        Service::new(
            "ironing",
            "Ironing Only",
            200,
            BillingUnit::Item,
            "👔",
            "Ironing service only",
        ),
        Service::new(
            "express",
            "Express Service",
            1000,
            BillingUnit::Kg,
            "⚡",
            "Same day delivery",
        ),
    ]
}

fn active_orders() -> Vec<ActiveOrder> {
    vec![
        ActiveOrder {
            id: "ZW001".to_string(),
            status: OrderStatus::InProgress,
            service: "Wash & Fold".to_string(),
            items: 12,
            estimated_time: "2 hours".to_string(),
        },
        ActiveOrder {
            id: "ZW002".to_string(),
            status: OrderStatus::OutForDelivery,
            service: "Dry Cleaning".to_string(),
            items: 3,
            estimated_time: "30 mins".to_string(),
        },
    ]
}

fn step(title: &str, time: &str, description: &str, state: StepState) -> TrackingStep {
    TrackingStep {
        title: title.to_string(),
        time: time.to_string(),
        description: description.to_string(),
        state,
    }
}

fn tracked_order() -> TrackedOrder {
    TrackedOrder {
        id: "ZW001".to_string(),
        status: OrderStatus::InProgress,
        service: "Wash & Fold".to_string(),
        items: 12,
        total: 600,
        pickup_time: "10:00 AM".to_string(),
        delivery_time: "6:00 PM (Est.)".to_string(),
        rider: Rider {
            name: "Adebayo Ogundimu".to_string(),
            phone: "+234 801 234 5678".to_string(),
            rating: 4.8,
        },
        steps: vec![
            step(
                "Order Confirmed",
                "8:30 AM",
                "Your order has been confirmed and assigned to a rider",
                StepState::Completed,
            ),
            step(
                "Pickup Scheduled",
                "9:00 AM",
                "Rider is on the way to pickup your items",
                StepState::Completed,
            ),
            step(
                "Items Collected",
                "10:15 AM",
                "12 items collected and sent to facility",
                StepState::Completed,
            ),
            step(
                "In Progress",
                "Now",
                "Your items are being processed",
                StepState::Active,
            ),
            step(
                "Out for Delivery",
                "5:00 PM (Est.)",
                "Items ready and out for delivery",
                StepState::Pending,
            ),
            step(
                "Delivered",
                "6:00 PM (Est.)",
                "Items delivered to your address",
                StepState::Pending,
            ),
        ],
    }
}

fn transaction(
    id: u32,
    kind: TransactionKind,
    description: &str,
    amount: u64,
    date: &str,
) -> Transaction {
    Transaction {
        id,
        kind,
        description: description.to_string(),
        amount,
        date: date.to_string(),
        status: TransactionStatus::Completed,
    }
}

fn transactions() -> Vec<Transaction> {
    vec![
        transaction(
            1,
            TransactionKind::Debit,
            "Wash & Fold Service",
            600,
            "Today, 2:30 PM",
        ),
        transaction(
            2,
            TransactionKind::Credit,
            "Wallet Top-up",
            1000,
            "Yesterday, 10:15 AM",
        ),
        transaction(
            3,
            TransactionKind::Debit,
            "Dry Cleaning Service",
            800,
            "Jan 8, 4:20 PM",
        ),
        transaction(
            4,
            TransactionKind::Credit,
            "Referral Bonus",
            200,
            "Jan 7, 11:30 AM",
        ),
    ]
}

fn plan(name: &str, price: u64, features: &[&str], popular: bool) -> SubscriptionPlan {
    SubscriptionPlan {
        name: name.to_string(),
        price,
        period: "Monthly".to_string(),
        features: features.iter().map(ToString::to_string).collect(),
        popular,
    }
}

fn subscription_plans() -> Vec<SubscriptionPlan> {
    vec![
        plan(
            "Basic Plan",
            2000,
            &[
                "5 kg wash & fold",
                "Free pickup & delivery",
                "Standard turnaround",
            ],
            false,
        ),
        plan(
            "Premium Plan",
            3500,
            &[
                "10 kg wash & fold",
                "3 dry cleaning items",
                "Express service",
                "Priority support",
            ],
            true,
        ),
        plan(
            "Family Plan",
            5000,
            &[
                "20 kg wash & fold",
                "5 dry cleaning items",
                "Express service",
                "24/7 support",
            ],
            false,
        ),
    ]
}

fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod::new("Debit/Credit Card", "Visa, Mastercard, Verve"),
        PaymentMethod::new("Bank Transfer", "Direct bank transfer"),
        PaymentMethod::new("USSD", "*737# or *966#"),
    ]
}

fn profile() -> UserProfile {
    UserProfile {
        name: "Ifeanyi John Chimezie".to_string(),
        short_name: "Ifeanyi John".to_string(),
        email: "ifeanyi.john@email.com".to_string(),
        phone: "+234 801 234 5678".to_string(),
        address: "15 Adeola Odeku Street, Victoria Island, Lagos".to_string(),
        location: "Victoria Island, Lagos".to_string(),
        join_date: "January 2025".to_string(),
        total_orders: 24,
        loyalty_points: 1250,
        rating: 4.8,
    }
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Edit Profile"),
        MenuItem::new("Manage Addresses"),
        MenuItem::new("Payment Methods"),
        MenuItem::new("Notifications"),
        MenuItem::new("Referral Program").with_badge("Earn ₦200"),
        MenuItem::new("Rate App"),
        MenuItem::new("Help & Support"),
        MenuItem::new("Settings"),
    ]
}

fn recent_activity() -> Vec<Activity> {
    let activity = |kind, description: &str, date: &str| Activity {
        kind,
        description: description.to_string(),
        date: date.to_string(),
    };
    vec![
        activity(ActivityKind::Order, "Wash & Fold completed", "Today"),
        activity(
            ActivityKind::Referral,
            "Friend joined via your referral",
            "Yesterday",
        ),
        activity(
            ActivityKind::Review,
            "You rated your last service",
            "2 days ago",
        ),
    ]
}

impl CatalogPort for StaticCatalog {
    fn services(&self) -> &[Service] {
        &self.services
    }

    fn pickup_dates(&self) -> &[PickupDate] {
        &self.pickup_dates
    }

    fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    fn active_orders(&self) -> &[ActiveOrder] {
        &self.active_orders
    }

    fn tracked_order(&self) -> &TrackedOrder {
        &self.tracked_order
    }

    fn wallet_balance(&self) -> u64 {
        OPENING_BALANCE
    }

    fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn subscription_plans(&self) -> &[SubscriptionPlan] {
        &self.subscription_plans
    }

    fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    fn quick_fund_amounts(&self) -> &[u64] {
        &QUICK_FUND_AMOUNTS
    }

    fn profile(&self) -> &UserProfile {
        &self.profile
    }

    fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    fn recent_activity(&self) -> &[Activity] {
        &self.recent_activity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_catalog() {
        let catalog = StaticCatalog::new();
        let ids: Vec<&str> = catalog.services().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["wash-fold", "dry-clean", "ironing", "express"]);
        assert_eq!(catalog.service("wash-fold").map(|s| s.price), Some(500));
        assert_eq!(
            catalog.service("express").map(|s| s.unit),
            Some(BillingUnit::Kg)
        );
        assert!(catalog.service("laundry").is_none());
    }

    #[test]
    fn test_schedule_labels() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.pickup_dates().len(), 3);
        assert_eq!(catalog.time_slots().len(), 6);
        assert!(catalog.pickup_date("Jan 10").is_some());
        assert!(catalog.time_slot("6:00 PM - 8:00 PM").is_some());
        assert!(catalog.time_slot("8:00 PM - 10:00 PM").is_none());
    }

    #[test]
    fn test_single_popular_plan() {
        let catalog = StaticCatalog::new();
        let popular: Vec<_> = catalog
            .subscription_plans()
            .iter()
            .filter(|p| p.popular)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(popular, ["Premium Plan"]);
    }

    #[test]
    fn test_tracked_order_has_one_active_step() {
        let catalog = StaticCatalog::new();
        let steps = &catalog.tracked_order().steps;
        assert_eq!(steps.len(), 6);
        assert_eq!(
            steps.iter().filter(|s| s.state == StepState::Active).count(),
            1
        );
        assert_eq!(catalog.tracked_order().rider.initials(), "AO");
    }
}
