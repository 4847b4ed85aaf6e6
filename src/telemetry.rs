//! # Observability
//!
//! Menus and orders log every mutation with `tracing`, using structured
//! fields (`menu_id`, `item_id`, `size`) inside a span per operation:
//!
//! ```text
//! INFO add_item{menu_id=menu_1 item_id=item_1}: Item added size=1
//! WARN add_item{item_id=item_2}: Item from another menu expected=Some(MenuId(1)) found=Some(MenuId(2))
//! ```
//!
//! Rejected operations are logged at `warn`, successful ones at `info`, and
//! internal decisions (menu binding, tip floor) at `debug`.
//!
//! ## Configuration
//!
//! Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo test -- --nocapture
//! RUST_LOG=restaurant_orders=debug cargo test -- --nocapture
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs anything.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
