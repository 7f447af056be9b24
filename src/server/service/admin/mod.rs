//! Administrative services.
//!
//! Holds the one-time bootstrap code that lets the first user sign in as admin.

pub mod code;
