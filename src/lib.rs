pub mod conversion;
pub mod kernel;
pub mod outputs;
pub mod platform;
pub mod services;

// Re-export specific items for convenient access
pub use kernel::request::{Language, Request};
pub use kernel::response::Response;
pub use kernel::skill::Skill;

/// Shared subscriber setup for the binaries. `RUST_LOG` overrides `default`.
pub fn init_tracing(default: &str, to_stderr: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if to_stderr {
        builder.with_writer(std::io::stderr).init();
    } else {
        builder.init();
    }
}
