use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewContactMessage, NewTravelBooking, NewUser, User};

/// Persistence seam used by every intake handler.
///
/// Each method is a single statement; no method spans a transaction.
#[async_trait]
pub trait IntakeStore: Send + Sync {
    /// Look up a user row by its unique email
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;

    async fn insert_user(&self, user: &NewUser) -> Result<(), DatabaseError>;

    async fn insert_contact_message(&self, message: &NewContactMessage) -> Result<(), DatabaseError>;

    async fn insert_travel_booking(&self, booking: &NewTravelBooking) -> Result<(), DatabaseError>;

    /// Round-trip to the backing store
    async fn ping(&self) -> Result<(), DatabaseError>;
}
