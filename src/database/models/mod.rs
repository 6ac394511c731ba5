pub mod booking;
pub mod contact;
pub mod user;

pub use booking::NewTravelBooking;
pub use contact::NewContactMessage;
pub use user::{NewUser, PublicUser, User};
