//! Domain entity definitions.

mod order;
mod profile;
mod schedule;
mod service;
mod wallet;

pub use order::{
    ActiveOrder, ConfirmedOrder, OrderDraft, OrderStatus, Rider, SERVICE_FEE, StepState,
    TrackedOrder, TrackingStep, initials,
};
pub use profile::{Activity, ActivityKind, MenuItem, UserProfile};
pub use schedule::{PickupDate, TimeSlot};
pub use service::{BillingUnit, Service, ServiceId};
pub use wallet::{PaymentMethod, SubscriptionPlan, Transaction, TransactionKind, TransactionStatus};
