//! Business logic shared by handlers and the binary's startup path.

pub mod accounts;
