//! In-memory wallet.

use tracing::info;

use crate::domain::entities::{PaymentMethod, Transaction, TransactionKind, TransactionStatus};
use crate::domain::errors::WalletError;
use crate::domain::ports::CatalogPort;

const TOP_UP_DESCRIPTION: &str = "Wallet Top-up";

/// Balance and history for the current session. Nothing leaves the process.
#[derive(Debug, Clone)]
pub struct WalletService {
    balance: u64,
    transactions: Vec<Transaction>,
}

impl WalletService {
    #[must_use]
    pub fn new(catalog: &dyn CatalogPort) -> Self {
        Self {
            balance: catalog.wallet_balance(),
            transactions: catalog.transactions().to_vec(),
        }
    }

    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// History, newest first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Parses a typed amount in whole naira.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for empty, non-numeric or zero input.
    pub fn parse_amount(input: &str) -> Result<u64, WalletError> {
        let trimmed = input.trim();
        match trimmed.parse::<u64>() {
            Ok(amount) if amount > 0 => Ok(amount),
            _ => Err(WalletError::InvalidAmount(trimmed.to_string())),
        }
    }

    /// Credits the balance and records a top-up.
    ///
    /// # Errors
    /// Returns `InvalidAmount` if `amount` is zero.
    pub fn fund(
        &mut self,
        amount: u64,
        method: &PaymentMethod,
        date: impl Into<String>,
    ) -> Result<&Transaction, WalletError> {
        if amount == 0 {
            return Err(WalletError::InvalidAmount("0".to_string()));
        }

        let id = self.transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        self.balance = self.balance.saturating_add(amount);
        self.transactions.insert(
            0,
            Transaction {
                id,
                kind: TransactionKind::Credit,
                description: TOP_UP_DESCRIPTION.to_string(),
                amount,
                date: date.into(),
                status: TransactionStatus::Completed,
            },
        );

        info!(amount, method = %method.name, balance = self.balance, "Wallet funded");
        Ok(&self.transactions[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockCatalog;
    use test_case::test_case;

    #[test_case("1000", Ok(1000) ; "plain")]
    #[test_case("  250 ", Ok(250) ; "trimmed")]
    #[test_case("", Err(WalletError::InvalidAmount(String::new())) ; "empty")]
    #[test_case("0", Err(WalletError::InvalidAmount("0".to_string())) ; "zero")]
    #[test_case("12a", Err(WalletError::InvalidAmount("12a".to_string())) ; "non_numeric")]
    #[test_case("-5", Err(WalletError::InvalidAmount("-5".to_string())) ; "negative")]
    fn test_parse_amount(input: &str, expected: Result<u64, WalletError>) {
        assert_eq!(WalletService::parse_amount(input), expected);
    }

    #[test]
    fn test_fund_credits_balance_and_records_top_up() {
        let catalog = MockCatalog::new().with_balance(2500);
        let mut wallet = WalletService::new(&catalog);
        let method = PaymentMethod::new("USSD", "*737#");

        let tx = wallet.fund(2000, &method, "Today, 9:41 AM").unwrap().clone();

        assert_eq!(wallet.balance(), 4500);
        assert_eq!(tx.kind, TransactionKind::Credit);
        assert_eq!(tx.description, "Wallet Top-up");
        assert_eq!(tx.amount_label(), "+₦2000");
        assert_eq!(wallet.transactions()[0], tx);
    }

    #[test]
    fn test_fund_zero_rejected() {
        let catalog = MockCatalog::new();
        let mut wallet = WalletService::new(&catalog);
        let method = PaymentMethod::new("Card", "Visa");

        assert!(wallet.fund(0, &method, "Today").is_err());
        assert_eq!(wallet.balance(), 50);
        assert!(wallet.transactions().is_empty());
    }

    #[test]
    fn test_transaction_ids_increase() {
        let catalog = MockCatalog::new();
        let mut wallet = WalletService::new(&catalog);
        let method = PaymentMethod::new("Card", "Visa");

        let first = wallet.fund(10, &method, "a").unwrap().id;
        let second = wallet.fund(20, &method, "b").unwrap().id;
        assert_eq!(second, first + 1);
    }
}
