pub mod mount_change;
pub mod profile_view_model;
pub mod services;
pub mod sync;
pub mod sync_outcome;
