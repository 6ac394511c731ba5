// handlers/protected/mod.rs - Handlers behind `jwt_auth_middleware`
//
// Each handler may extract `Extension<AuthUser>`; the middleware has already
// rejected requests without a valid token.

pub mod greeting;

pub use greeting::greeting;
