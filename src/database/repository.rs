use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{NewContactMessage, NewTravelBooking, NewUser, User};
use crate::database::store::IntakeStore;

/// PostgreSQL-backed store over the shared pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map a `UNIQUE` violation to `DatabaseError::Duplicate`, leaving other errors as they are
fn unique_violation_as_duplicate(err: sqlx::Error) -> DatabaseError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DatabaseError::Duplicate(db.constraint().unwrap_or("unique").to_string())
        }
        other => DatabaseError::Sqlx(other),
    }
}

#[async_trait]
impl IntakeStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let query = r#"
            SELECT id, firstname, lastname, email, password_hash,
                   address, gender, country, dob
            FROM users
            WHERE email = $1
        "#;

        let user = sqlx::query_as::<_, User>(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn insert_user(&self, user: &NewUser) -> Result<(), DatabaseError> {
        let query = r#"
            INSERT INTO users (firstname, lastname, email, password_hash, address, gender, country, dob)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#;

        sqlx::query(query)
            .bind(&user.firstname)
            .bind(&user.lastname)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.address)
            .bind(&user.gender)
            .bind(&user.country)
            .bind(user.dob)
            .execute(&self.pool)
            .await
            .map_err(unique_violation_as_duplicate)?;

        Ok(())
    }

    async fn insert_contact_message(&self, message: &NewContactMessage) -> Result<(), DatabaseError> {
        let query = r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
        "#;

        sqlx::query(query)
            .bind(&message.name)
            .bind(&message.email)
            .bind(&message.subject)
            .bind(&message.message)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn insert_travel_booking(&self, booking: &NewTravelBooking) -> Result<(), DatabaseError> {
        let query = r#"
            INSERT INTO travel_bookings (
                full_name, email, phone, passport_number,
                departure_country, destination_country, travel_date, return_date,
                travel_type, travelers, travel_class, meal_preference,
                add_ons, payment_method, special_requests
            ) VALUES (
                $1, $2, $3, $4,
                $5, $6, $7, $8,
                $9, $10, $11, $12,
                $13, $14, $15
            )
        "#;

        sqlx::query(query)
            .bind(&booking.full_name)
            .bind(&booking.email)
            .bind(&booking.phone)
            .bind(&booking.passport_number)
            .bind(&booking.departure_country)
            .bind(&booking.destination_country)
            .bind(booking.travel_date)
            .bind(booking.return_date)
            .bind(&booking.travel_type)
            .bind(booking.travelers)
            .bind(&booking.travel_class)
            .bind(&booking.meal_preference)
            .bind(&booking.add_ons)
            .bind(&booking.payment_method)
            .bind(&booking.special_requests)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
