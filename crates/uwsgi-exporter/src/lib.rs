//! Top-level facade crate for uwsgi-exporter.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use uwsgi_exporter_core::*;
}

pub mod server {
    pub use uwsgi_exporter_server::*;
}
