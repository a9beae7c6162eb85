use super::order::initials;

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub short_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub location: String,
    pub join_date: String,
    pub total_orders: u32,
    pub loyalty_points: u32,
    pub rating: f32,
}

impl UserProfile {
    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub badge: Option<String>,
}

impl MenuItem {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            badge: None,
        }
    }

    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Order,
    Referral,
    Review,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub description: String,
    pub date: String,
}
