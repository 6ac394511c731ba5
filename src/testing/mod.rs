use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tokio::sync::Mutex;

use crate::auth::JwtKeys;
use crate::config::AppConfig;
use crate::database::models::{NewContactMessage, NewTravelBooking, NewUser, User};
use crate::database::{DatabaseError, IntakeStore};
use crate::state::AppState;

pub const TEST_SECRET: &str = "test-secret";

/// In-memory `IntakeStore` for handler and router tests
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    contacts: Mutex<Vec<NewContactMessage>>,
    bookings: Mutex<Vec<NewTravelBooking>>,
    failing: AtomicBool,
    hide_users_once: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every subsequent call fail as if the database were down
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Make the next email lookup miss, as if another signup committed right after it
    pub fn race_next_lookup(&self) {
        self.hide_users_once.store(true, Ordering::SeqCst);
    }

    pub async fn users(&self) -> Vec<User> {
        self.users.lock().await.clone()
    }

    pub async fn contacts(&self) -> Vec<NewContactMessage> {
        self.contacts.lock().await.clone()
    }

    pub async fn bookings(&self) -> Vec<NewTravelBooking> {
        self.bookings.lock().await.clone()
    }

    fn check(&self) -> Result<(), DatabaseError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl IntakeStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        self.check()?;
        if self.hide_users_once.swap(false, Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self.users.lock().await.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: &NewUser) -> Result<(), DatabaseError> {
        self.check()?;
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(DatabaseError::Duplicate("users_email_key".to_string()));
        }
        let id = users.len() as i32 + 1;
        users.push(User {
            id,
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            address: user.address.clone(),
            gender: user.gender.clone(),
            country: user.country.clone(),
            dob: user.dob,
        });
        Ok(())
    }

    async fn insert_contact_message(&self, message: &NewContactMessage) -> Result<(), DatabaseError> {
        self.check()?;
        self.contacts.lock().await.push(message.clone());
        Ok(())
    }

    async fn insert_travel_booking(&self, booking: &NewTravelBooking) -> Result<(), DatabaseError> {
        self.check()?;
        self.bookings.lock().await.push(booking.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        self.check()
    }
}

pub fn test_keys() -> JwtKeys {
    JwtKeys::new(TEST_SECRET, Duration::hours(1)).expect("test secret is non-empty")
}

pub fn test_state(store: Arc<MemoryStore>) -> AppState {
    AppState::new(store, Arc::new(test_keys()))
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.database.url = "postgres://localhost/intake_test".to_string();
    config.security.jwt_secret = TEST_SECRET.to_string();
    config
}
