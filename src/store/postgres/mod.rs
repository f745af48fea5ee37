//! Shared `PostgreSQL` plumbing for module adapters.

pub mod schema;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type shared by all repository adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;
