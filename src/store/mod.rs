//! The external collection-store seam.
//!
//! Both collections live outside this service; the traits here are the only
//! surface the auth flows see. `Pg*` implementations wrap the Postgres-backed
//! service via sqlx; `memory` holds in-process doubles for tests.

pub mod api_keys;
pub mod memory;
pub mod users;

pub use api_keys::{ApiKey, ApiKeyStore, PgApiKeyStore};
pub use users::{NewUser, PgUserStore, User, UserStore};
