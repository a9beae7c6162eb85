use super::{PickupDate, Service, ServiceId, TimeSlot};

/// Surcharge added to every booking, in naira.
pub const SERVICE_FEE: u64 = 100;

/// In-progress booking selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub service_id: Option<ServiceId>,
    pub quantity: u32,
    pub pickup_date: Option<PickupDate>,
    pub time_slot: Option<TimeSlot>,
    pub instructions: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            service_id: None,
            quantity: 1,
            pickup_date: None,
            time_slot: None,
            instructions: String::new(),
        }
    }
}

impl OrderDraft {
    /// Service, date and slot are all chosen. Quantity never blocks.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.service_id.is_some() && self.pickup_date.is_some() && self.time_slot.is_some()
    }
}

/// Snapshot produced when a draft is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedOrder {
    pub reference: String,
    pub service: Service,
    pub quantity: u32,
    pub pickup_date: PickupDate,
    pub time_slot: TimeSlot,
    pub instructions: Option<String>,
    pub subtotal: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Confirmed,
    InProgress,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::InProgress => "In Progress",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
        }
    }
}

/// Order summary shown on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveOrder {
    pub id: String,
    pub status: OrderStatus,
    pub service: String,
    pub items: u32,
    pub estimated_time: String,
}

impl ActiveOrder {
    #[must_use]
    pub fn from_confirmed(order: &ConfirmedOrder) -> Self {
        Self {
            id: order.reference.clone(),
            status: OrderStatus::Confirmed,
            service: order.service.name.clone(),
            items: order.quantity,
            estimated_time: format!("{}, {}", order.pickup_date, order.time_slot),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rider {
    pub name: String,
    pub phone: String,
    pub rating: f32,
}

impl Rider {
    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// First letter of every whitespace-separated word.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingStep {
    pub title: String,
    pub time: String,
    pub description: String,
    pub state: StepState,
}

/// The order displayed on the tracking screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedOrder {
    pub id: String,
    pub status: OrderStatus,
    pub service: String,
    pub items: u32,
    pub total: u64,
    pub pickup_time: String,
    pub delivery_time: String,
    pub rider: Rider,
    pub steps: Vec<TrackingStep>,
}

impl TrackedOrder {
    /// Fraction of timeline steps already completed.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        let done = self
            .steps
            .iter()
            .filter(|s| s.state == StepState::Completed)
            .count();
        #[allow(clippy::cast_precision_loss)]
        let ratio = done as f64 / self.steps.len() as f64;
        ratio
    }
}
