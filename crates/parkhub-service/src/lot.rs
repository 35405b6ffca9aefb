//! Parking lot administration: creation, deletion, and space adjustments.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use parkhub_auth::rbac::{Operation, RbacEnforcer};
use parkhub_core::error::AppError;
use parkhub_core::types::LotId;
use parkhub_entity::lot::Lot;
use parkhub_store::{CapacityLedger, LotStore, ReservationStore, SpaceCounters};

use crate::context::RequestContext;

/// Handles parking lot administration.
#[derive(Debug, Clone)]
pub struct LotService {
    /// Lot store.
    lots: Arc<dyn LotStore>,
    /// Capacity ledger for space counter mutations.
    ledger: Arc<dyn CapacityLedger>,
    /// Reservation store for cascade removal on lot deletion.
    reservations: Arc<dyn ReservationStore>,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

/// Data for creating a new parking lot.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateLotRequest {
    /// Lot name (unique).
    pub name: String,
    /// Street address; defaults to `"Unknown"` when omitted.
    pub address: Option<String>,
    /// Total number of spaces.
    pub total_spaces: u32,
    /// Initially reserved spaces; defaults to zero.
    pub reserved_spaces: Option<u32>,
}

impl LotService {
    /// Creates a new lot service.
    pub fn new(
        lots: Arc<dyn LotStore>,
        ledger: Arc<dyn CapacityLedger>,
        reservations: Arc<dyn ReservationStore>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            lots,
            ledger,
            reservations,
            rbac,
        }
    }

    /// Creates a new parking lot (admin).
    pub async fn create_lot(
        &self,
        ctx: &RequestContext,
        req: CreateLotRequest,
    ) -> Result<Lot, AppError> {
        self.rbac.require(&ctx.role, &Operation::LotCreate)?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Lot name cannot be empty"));
        }
        if req.total_spaces == 0 {
            return Err(AppError::validation("total_spaces must be at least 1"));
        }
        let reserved = req.reserved_spaces.unwrap_or(0);
        if reserved > req.total_spaces {
            return Err(AppError::validation(
                "reserved_spaces cannot exceed total_spaces",
            ));
        }

        let now = Utc::now();
        let lot = Lot {
            id: LotId::new(),
            name: req.name,
            address: req.address.unwrap_or_else(|| "Unknown".to_string()),
            total_spaces: req.total_spaces,
            reserved_spaces: reserved,
            created_at: now,
            updated_at: now,
        };

        let lot = self.lots.insert(lot).await?;

        info!(
            admin_id = %ctx.user_id,
            lot_id = %lot.id,
            name = %lot.name,
            total_spaces = lot.total_spaces,
            "Parking lot created"
        );

        Ok(lot)
    }

    /// Deletes a parking lot and every reservation held against it (admin).
    pub async fn delete_lot(&self, ctx: &RequestContext, lot_id: LotId) -> Result<(), AppError> {
        self.rbac.require(&ctx.role, &Operation::LotDelete)?;

        let deleted = self.lots.delete(lot_id).await?;
        if !deleted {
            return Err(AppError::not_found("Parking lot not found"));
        }

        let removed = self.reservations.remove_by_lot(lot_id).await?;

        info!(
            admin_id = %ctx.user_id,
            lot_id = %lot_id,
            removed_reservations = removed,
            "Parking lot deleted"
        );

        Ok(())
    }

    /// Reserves one space outside the reservation flow (admin).
    pub async fn increment_reserved(
        &self,
        ctx: &RequestContext,
        lot_id: LotId,
    ) -> Result<SpaceCounters, AppError> {
        self.rbac.require(&ctx.role, &Operation::LotAdjustSpaces)?;
        self.ledger.try_reserve(lot_id).await
    }

    /// Releases one reserved space outside the reservation flow (admin).
    pub async fn decrement_reserved(
        &self,
        ctx: &RequestContext,
        lot_id: LotId,
    ) -> Result<SpaceCounters, AppError> {
        self.rbac.require(&ctx.role, &Operation::LotAdjustSpaces)?;
        self.ledger.release(lot_id).await
    }

    /// Overwrites the space counters of a lot (admin).
    ///
    /// `total_spaces` is applied before `reserved_spaces` so that both can
    /// be raised in a single call. Either field may be omitted; omitting
    /// both is a validation error.
    pub async fn set_spaces(
        &self,
        ctx: &RequestContext,
        lot_id: LotId,
        total_spaces: Option<u32>,
        reserved_spaces: Option<u32>,
    ) -> Result<SpaceCounters, AppError> {
        self.rbac.require(&ctx.role, &Operation::LotAdjustSpaces)?;

        if total_spaces.is_none() && reserved_spaces.is_none() {
            return Err(AppError::validation(
                "At least one of total_spaces or reserved_spaces is required",
            ));
        }

        let mut counters = match total_spaces {
            Some(total) => self.ledger.set_total_spaces(lot_id, total).await?,
            None => self.ledger.counters(lot_id).await?,
        };

        if let Some(reserved) = reserved_spaces {
            counters = self.ledger.set_reserved_spaces(lot_id, reserved).await?;
        }

        info!(
            admin_id = %ctx.user_id,
            lot_id = %lot_id,
            total_spaces = counters.total_spaces,
            reserved_spaces = counters.reserved_spaces,
            "Lot spaces updated"
        );

        Ok(counters)
    }

    /// Lists all parking lots.
    pub async fn list_lots(&self, ctx: &RequestContext) -> Result<Vec<Lot>, AppError> {
        self.rbac.require(&ctx.role, &Operation::LotView)?;
        self.lots.list().await
    }

    /// Gets a single parking lot by ID.
    pub async fn get_lot(&self, ctx: &RequestContext, lot_id: LotId) -> Result<Lot, AppError> {
        self.rbac.require(&ctx.role, &Operation::LotView)?;
        self.lots
            .find_by_id(lot_id)
            .await?
            .ok_or_else(|| AppError::not_found("Parking lot not found"))
    }
}
