// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Form intake, token acquisition and status endpoints.

pub mod contact;
pub mod login;
pub mod signup;
pub mod status;
pub mod travel_booking;

pub use contact::submit_contact;
pub use login::login;
pub use signup::signup;
pub use status::{health, not_found, root};
pub use travel_booking::submit_travel_booking;
