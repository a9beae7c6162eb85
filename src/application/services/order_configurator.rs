//! Booking state machine.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{ConfirmedOrder, OrderDraft, SERVICE_FEE, Service};
use crate::domain::errors::OrderError;
use crate::domain::ports::CatalogPort;

/// First generated order reference; ZW001 and ZW002 are already in flight.
const FIRST_REFERENCE: u32 = 3;

/// Holds the in-progress booking selection and prices it.
pub struct OrderConfigurator {
    catalog: Arc<dyn CatalogPort>,
    draft: OrderDraft,
    next_reference: u32,
}

impl OrderConfigurator {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self {
            catalog,
            draft: OrderDraft::default(),
            next_reference: FIRST_REFERENCE,
        }
    }

    #[must_use]
    pub const fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogPort {
        self.catalog.as_ref()
    }

    /// The catalog entry of the selected service.
    #[must_use]
    pub fn selected_service(&self) -> Option<&Service> {
        self.draft
            .service_id
            .as_ref()
            .and_then(|id| self.catalog.service(id.as_str()))
    }

    /// Selects a service. Other fields are left as they are.
    ///
    /// # Errors
    /// Returns `InvalidServiceId` if `id` is not in the catalog; the draft is unchanged.
    pub fn select_service(&mut self, id: &str) -> Result<(), OrderError> {
        let service = self
            .catalog
            .service(id)
            .ok_or_else(|| OrderError::invalid_service(id))?;
        debug!(service = %service.id, "Service selected");
        self.draft.service_id = Some(service.id.clone());
        Ok(())
    }

    /// Sets the quantity, flooring anything below one to one.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.draft.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
    }

    pub fn increment_quantity(&mut self) {
        self.set_quantity(i64::from(self.draft.quantity) + 1);
    }

    pub fn decrement_quantity(&mut self) {
        self.set_quantity(i64::from(self.draft.quantity) - 1);
    }

    /// # Errors
    /// Returns `InvalidPickupDate` if `label` is not one of the offered dates.
    pub fn set_pickup_date(&mut self, label: &str) -> Result<(), OrderError> {
        let date = self
            .catalog
            .pickup_date(label)
            .ok_or_else(|| OrderError::invalid_date(label))?;
        self.draft.pickup_date = Some(date.clone());
        Ok(())
    }

    /// # Errors
    /// Returns `InvalidTimeSlot` if `label` is not one of the offered slots.
    pub fn set_pickup_time_slot(&mut self, label: &str) -> Result<(), OrderError> {
        let slot = self
            .catalog
            .time_slot(label)
            .ok_or_else(|| OrderError::invalid_slot(label))?;
        self.draft.time_slot = Some(slot.clone());
        Ok(())
    }

    pub fn set_instructions(&mut self, instructions: impl Into<String>) {
        self.draft.instructions = instructions.into();
    }

    /// `price × quantity`, or zero while no service is selected.
    #[must_use]
    pub fn compute_total(&self) -> u64 {
        self.selected_service().map_or(0, |service| {
            service
                .price
                .saturating_mul(u64::from(self.draft.quantity))
        })
    }

    /// Total including the fixed service fee.
    #[must_use]
    pub fn compute_total_with_fee(&self) -> u64 {
        self.compute_total().saturating_add(SERVICE_FEE)
    }

    #[must_use]
    pub const fn can_confirm(&self) -> bool {
        self.draft.is_complete()
    }

    /// Finalizes the draft and starts a fresh one.
    ///
    /// # Errors
    /// Returns `IncompleteDraft` if service, date or slot is missing; the draft is unchanged.
    pub fn confirm(&mut self) -> Result<ConfirmedOrder, OrderError> {
        let (Some(service), Some(pickup_date), Some(time_slot)) = (
            self.selected_service(),
            self.draft.pickup_date.as_ref(),
            self.draft.time_slot.as_ref(),
        ) else {
            return Err(OrderError::IncompleteDraft);
        };

        let instructions = self.draft.instructions.trim();
        let order = ConfirmedOrder {
            reference: format!("ZW{:03}", self.next_reference),
            service: service.clone(),
            quantity: self.draft.quantity,
            pickup_date: pickup_date.clone(),
            time_slot: time_slot.clone(),
            instructions: (!instructions.is_empty()).then(|| instructions.to_string()),
            subtotal: self.compute_total(),
            total: self.compute_total_with_fee(),
        };

        info!(
            reference = %order.reference,
            service = %order.service.id,
            quantity = order.quantity,
            total = order.total,
            "Booking confirmed"
        );

        self.next_reference += 1;
        self.reset();
        Ok(order)
    }

    /// Discards the draft.
    pub fn reset(&mut self) {
        self.draft = OrderDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockCatalog;
    use crate::infrastructure::StaticCatalog;
    use test_case::test_case;

    fn configurator() -> OrderConfigurator {
        OrderConfigurator::new(Arc::new(StaticCatalog::new()))
    }

    #[test_case("wash-fold", 500 ; "wash_fold")]
    #[test_case("dry-clean", 800 ; "dry_clean")]
    #[test_case("ironing", 200 ; "ironing")]
    #[test_case("express", 1000 ; "express")]
    fn test_total_is_price_times_quantity(id: &str, price: u64) {
        let mut config = configurator();
        config.select_service(id).unwrap();

        for quantity in [1_u64, 2, 7, 40] {
            config.set_quantity(i64::try_from(quantity).unwrap());
            assert_eq!(config.compute_total(), price * quantity);
            assert_eq!(config.compute_total_with_fee(), price * quantity + 100);
        }
    }

    #[test]
    fn test_total_is_zero_without_service() {
        let mut config = configurator();
        config.set_quantity(5);
        assert_eq!(config.compute_total(), 0);
        assert_eq!(config.compute_total_with_fee(), SERVICE_FEE);
    }

    #[test]
    fn test_quantity_never_below_one() {
        let mut config = configurator();
        config.decrement_quantity();
        config.decrement_quantity();
        assert_eq!(config.draft().quantity, 1);

        config.set_quantity(0);
        assert_eq!(config.draft().quantity, 1);

        config.set_quantity(-12);
        assert_eq!(config.draft().quantity, 1);

        config.increment_quantity();
        config.increment_quantity();
        assert_eq!(config.draft().quantity, 3);
    }

    #[test]
    fn test_quantity_has_no_upper_bound() {
        let mut config = configurator();
        config.set_quantity(10_000);
        assert_eq!(config.draft().quantity, 10_000);
    }

    #[test]
    fn test_invalid_service_leaves_draft_unchanged() {
        let mut config = configurator();
        config.select_service("ironing").unwrap();
        config.set_quantity(4);
        let before = config.draft().clone();

        let err = config.select_service("starch-only").unwrap_err();

        assert_eq!(err, OrderError::invalid_service("starch-only"));
        assert_eq!(config.draft(), &before);
    }

    #[test]
    fn test_select_service_keeps_other_fields() {
        let mut config = configurator();
        config.set_quantity(6);
        config.set_pickup_date("Tomorrow").unwrap();
        config.select_service("express").unwrap();
        config.select_service("dry-clean").unwrap();

        assert_eq!(config.draft().quantity, 6);
        assert_eq!(config.draft().pickup_date.as_ref().unwrap().as_str(), "Tomorrow");
        assert_eq!(config.selected_service().unwrap().name, "Dry Cleaning");
    }

    #[test]
    fn test_unknown_date_and_slot_rejected() {
        let mut config = configurator();
        assert_eq!(
            config.set_pickup_date("Feb 30"),
            Err(OrderError::invalid_date("Feb 30"))
        );
        assert_eq!(
            config.set_pickup_time_slot("Midnight"),
            Err(OrderError::invalid_slot("Midnight"))
        );
        assert!(config.draft().pickup_date.is_none());
        assert!(config.draft().time_slot.is_none());
    }

    #[test_case(false, false, false ; "nothing_set")]
    #[test_case(true, false, false ; "service_only")]
    #[test_case(false, true, false ; "date_only")]
    #[test_case(false, false, true ; "slot_only")]
    #[test_case(true, true, false ; "missing_slot")]
    #[test_case(true, false, true ; "missing_date")]
    #[test_case(false, true, true ; "missing_service")]
    #[test_case(true, true, true ; "all_set")]
    fn test_can_confirm_requires_all_three(service: bool, date: bool, slot: bool) {
        let mut config = configurator();
        if service {
            config.select_service("wash-fold").unwrap();
        }
        if date {
            config.set_pickup_date("Today").unwrap();
        }
        if slot {
            config.set_pickup_time_slot("8:00 AM - 10:00 AM").unwrap();
        }

        for quantity in [1, 9] {
            config.set_quantity(quantity);
            assert_eq!(config.can_confirm(), service && date && slot);
        }
    }

    #[test]
    fn test_confirm_incomplete_leaves_draft_unchanged() {
        let mut config = configurator();
        config.select_service("wash-fold").unwrap();
        config.set_quantity(2);
        config.set_pickup_date("Today").unwrap();
        let before = config.draft().clone();

        assert_eq!(config.confirm(), Err(OrderError::IncompleteDraft));
        assert_eq!(config.draft(), &before);
    }

    #[test]
    fn test_end_to_end_booking() {
        let mut config = configurator();
        config.select_service("wash-fold").unwrap();
        config.set_quantity(3);
        config.set_pickup_date("Today").unwrap();
        config.set_pickup_time_slot("8:00 AM - 10:00 AM").unwrap();

        assert!(config.can_confirm());
        assert_eq!(config.compute_total_with_fee(), 1600);

        let order = config.confirm().unwrap();
        assert_eq!(order.reference, "ZW003");
        assert_eq!(order.service.name, "Wash & Fold");
        assert_eq!(order.quantity, 3);
        assert_eq!(order.pickup_date.as_str(), "Today");
        assert_eq!(order.time_slot.as_str(), "8:00 AM - 10:00 AM");
        assert_eq!(order.subtotal, 1500);
        assert_eq!(order.total, 1600);
        assert_eq!(order.instructions, None);

        assert_eq!(config.draft(), &OrderDraft::default());
        assert!(!config.can_confirm());
    }

    #[test]
    fn test_references_increase_and_instructions_are_trimmed() {
        let mut config = OrderConfigurator::new(Arc::new(MockCatalog::new()));
        for expected in ["ZW003", "ZW004"] {
            config.select_service("bulk").unwrap();
            config.set_pickup_date("Monday").unwrap();
            config.set_pickup_time_slot("Noon").unwrap();
            config.set_instructions("  no starch \n");

            let order = config.confirm().unwrap();
            assert_eq!(order.reference, expected);
            assert_eq!(order.total, 450 + SERVICE_FEE);
            assert_eq!(order.instructions.as_deref(), Some("no starch"));
        }
    }
}
