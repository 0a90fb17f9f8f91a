//! Feature slices for the console.
pub mod login;
