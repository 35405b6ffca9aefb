//! Reservation lifecycle: create, cancel, confirm, and queries.
//!
//! Creation and cancellation keep the reservation records and the lot
//! space counters consistent: every successful create increments the
//! lot's reserved count by exactly one and every successful cancel
//! decrements it by exactly one. Confirmation consumes the record while
//! leaving the counter as is, because a confirmed arrival still occupies
//! a space.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use parkhub_auth::rbac::{Operation, RbacEnforcer};
use parkhub_core::error::{AppError, ErrorKind};
use parkhub_core::types::{LotId, ReservationId};
use parkhub_entity::reservation::Reservation;
use parkhub_store::{CapacityLedger, LotStore, ReservationStore};

use crate::context::RequestContext;

/// Handles the reservation lifecycle.
#[derive(Debug, Clone)]
pub struct ReservationService {
    /// Reservation store.
    reservations: Arc<dyn ReservationStore>,
    /// Capacity ledger for space counter mutations.
    ledger: Arc<dyn CapacityLedger>,
    /// Lot store for existence checks on list queries.
    lots: Arc<dyn LotStore>,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

impl ReservationService {
    /// Creates a new reservation service.
    pub fn new(
        reservations: Arc<dyn ReservationStore>,
        ledger: Arc<dyn CapacityLedger>,
        lots: Arc<dyn LotStore>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            reservations,
            ledger,
            lots,
            rbac,
        }
    }

    /// Creates a reservation for the current user in the given lot.
    ///
    /// Reserves a space first and only then inserts the record; if the
    /// insert fails the space is released again, so a failed create never
    /// leaks a counted space.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        lot_id: LotId,
    ) -> Result<Reservation, AppError> {
        self.rbac.require(&ctx.role, &Operation::ReservationCreate)?;

        // Fast path: a user holds at most one reservation per lot, so an
        // existing record fails the request before any counter is touched.
        if self.reservations.exists(ctx.user_id, lot_id).await? {
            return Err(AppError::duplicate_reservation(
                "User already has a reservation for this parking lot",
            ));
        }

        let counters = self.ledger.try_reserve(lot_id).await?;

        let reservation = Reservation {
            id: ReservationId::new(),
            user_id: ctx.user_id,
            lot_id,
            created_at: Utc::now(),
        };

        if let Err(e) = self.reservations.insert(reservation.clone()).await {
            // A concurrent create for the same user and lot won the record
            // insert. Give the reserved space back before reporting.
            if let Err(rollback) = self.ledger.release(lot_id).await {
                error!(
                    user_id = %ctx.user_id,
                    lot_id = %lot_id,
                    error = %rollback,
                    "Failed to release space after reservation insert failure"
                );
            }
            return Err(e);
        }

        info!(
            user_id = %ctx.user_id,
            lot_id = %lot_id,
            reservation_id = %reservation.id,
            available = counters.available(),
            "Reservation created"
        );

        Ok(reservation)
    }

    /// Cancels the current user's reservation in the given lot.
    ///
    /// Returns `Ok(false)` when no reservation exists; the counters are
    /// not touched in that case. The record is claimed before the space is
    /// released, so two concurrent cancels decrement the counter only once.
    /// If the lot itself has been deleted in the meantime the record is
    /// consumed anyway and the cancel still succeeds.
    pub async fn cancel(&self, ctx: &RequestContext, lot_id: LotId) -> Result<bool, AppError> {
        self.rbac.require(&ctx.role, &Operation::ReservationCancel)?;

        let Some(reservation) = self.reservations.remove(ctx.user_id, lot_id).await? else {
            return Ok(false);
        };

        if let Err(e) = self.ledger.release(lot_id).await {
            if e.kind == ErrorKind::NotFound {
                // The lot was deleted while this cancel was in flight.
                // There is no counter left to release, and restoring the
                // record would strand it forever; let the claim stand.
                warn!(
                    user_id = %ctx.user_id,
                    lot_id = %lot_id,
                    "Cancelled a reservation whose lot no longer exists"
                );
                return Ok(true);
            }
            if e.kind == ErrorKind::AlreadyEmpty {
                // A record existed while the reserved count was zero; the
                // ledger and the registry have drifted apart.
                error!(
                    user_id = %ctx.user_id,
                    lot_id = %lot_id,
                    "Reservation record existed for a lot with no reserved spaces"
                );
            }
            // Put the record back so the cancel can be retried.
            if let Err(restore) = self.reservations.insert(reservation).await {
                error!(
                    user_id = %ctx.user_id,
                    lot_id = %lot_id,
                    error = %restore,
                    "Failed to restore reservation record after release failure"
                );
            }
            return Err(e);
        }

        info!(user_id = %ctx.user_id, lot_id = %lot_id, "Reservation cancelled");

        Ok(true)
    }

    /// Confirms a reservation by ID, consuming the record (staff).
    ///
    /// The lot's reserved count is deliberately left untouched: the driver
    /// has arrived and now occupies the space they reserved.
    pub async fn confirm(
        &self,
        ctx: &RequestContext,
        reservation_id: ReservationId,
    ) -> Result<Reservation, AppError> {
        self.rbac.require(&ctx.role, &Operation::ReservationConfirm)?;

        let Some(reservation) = self.reservations.remove_by_id(reservation_id).await? else {
            return Err(AppError::not_found("Reservation not found"));
        };

        info!(
            staff_id = %ctx.user_id,
            reservation_id = %reservation.id,
            user_id = %reservation.user_id,
            lot_id = %reservation.lot_id,
            "Reservation confirmed"
        );

        Ok(reservation)
    }

    /// Lists the current user's reservations.
    pub async fn list_own(&self, ctx: &RequestContext) -> Result<Vec<Reservation>, AppError> {
        self.rbac
            .require(&ctx.role, &Operation::ReservationListOwn)?;
        self.reservations.find_by_user(ctx.user_id).await
    }

    /// Returns whether the current user holds a reservation in the given lot.
    pub async fn has_reservation(
        &self,
        ctx: &RequestContext,
        lot_id: LotId,
    ) -> Result<bool, AppError> {
        self.rbac
            .require(&ctx.role, &Operation::ReservationListOwn)?;
        self.reservations.exists(ctx.user_id, lot_id).await
    }

    /// Lists all reservations in the given lot (staff).
    pub async fn list_by_lot(
        &self,
        ctx: &RequestContext,
        lot_id: LotId,
    ) -> Result<Vec<Reservation>, AppError> {
        self.rbac
            .require(&ctx.role, &Operation::ReservationListByLot)?;

        // Unknown lots answer with not-found rather than an empty list.
        if self.lots.find_by_id(lot_id).await?.is_none() {
            return Err(AppError::not_found("Parking lot not found"));
        }

        self.reservations.find_by_lot(lot_id).await
    }

    /// Lists every reservation across all lots (admin).
    pub async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Reservation>, AppError> {
        self.rbac
            .require(&ctx.role, &Operation::ReservationListAll)?;
        self.reservations.list_all().await
    }
}
