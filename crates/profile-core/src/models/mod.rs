pub mod edit_outcome;
pub mod external_link;
pub mod field_key;
pub mod identity;
pub mod notice;
pub mod profile_document;
pub mod profile_fields;
pub mod route;
