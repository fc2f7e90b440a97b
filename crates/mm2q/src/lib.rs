//! Top-level facade crate for mm2q.
//!
//! Re-exports the calculator core and the web front end so users can depend on a single crate.

pub mod core {
    pub use mm2q_core::*;
}

pub mod web {
    pub use mm2q_web::*;
}
