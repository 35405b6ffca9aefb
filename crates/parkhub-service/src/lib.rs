//! # parkhub-service
//!
//! Business logic service layer for ParkHub. Each service orchestrates
//! stores, the capacity ledger, and authentication components to implement
//! application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod lot;
pub mod reservation;
pub mod user;

pub use context::RequestContext;
pub use lot::{CreateLotRequest, LotService};
pub use reservation::ReservationService;
pub use user::{RegisterUserRequest, UserService};
