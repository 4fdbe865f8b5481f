//! Tower middleware used by the router.

pub mod request_id;

pub use request_id::MakeRequestUuidV7;
