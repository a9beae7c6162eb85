#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    #[must_use]
    pub const fn sign(self) -> char {
        match self {
            Self::Credit => '+',
            Self::Debit => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Pending,
    Completed,
}

impl TransactionStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: u32,
    pub kind: TransactionKind,
    pub description: String,
    pub amount: u64,
    pub date: String,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Signed amount label, e.g. `+₦1000`.
    #[must_use]
    pub fn amount_label(&self) -> String {
        format!("{}₦{}", self.kind.sign(), self.amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionPlan {
    pub name: String,
    pub price: u64,
    pub period: String,
    pub features: Vec<String>,
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    pub name: String,
    pub description: String,
}

impl PaymentMethod {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
