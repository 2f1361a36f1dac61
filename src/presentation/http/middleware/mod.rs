mod require_roles;

pub use require_roles::{require_admin, require_editor};
