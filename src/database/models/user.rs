use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A persisted row of the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
    pub address: String,
    pub gender: String,
    pub country: String,
    pub dob: NaiveDate,
}

/// Fields written by signup. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
    pub address: String,
    pub gender: String,
    pub country: String,
    pub dob: NaiveDate,
}

/// Client-facing view of a user; never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub address: String,
    pub gender: String,
    pub country: String,
    pub dob: NaiveDate,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            address: user.address,
            gender: user.gender,
            country: user.country,
            dob: user.dob,
        }
    }
}
