//! Role-based access control for route groups.

pub mod gate;

pub use gate::{DASHBOARD_ROLES, SUPERADMIN_ROLES, require_role};
