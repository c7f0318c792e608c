use callerinfo::StackResolver;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let registry = tracing_subscriber::Registry::default().with(
        EnvFilter::builder()
            .with_default_directive(tracing::Level::TRACE.into())
            .from_env()
            .unwrap(),
    );

    let tree_layer = tracing_tree::HierarchicalLayer::new(2)
        .with_targets(true)
        .with_bracketed_fields(true);

    registry.with(tree_layer).init();

    connect("db.internal:5432");
}

#[inline(never)]
fn connect(addr: &str) {
    tracing::debug!(in_fn = %StackResolver::host().current_caller_name());
    log(format_args!("connecting to {addr}"));
    handshake();
}

#[inline(never)]
fn handshake() {
    log(format_args!("handshake done"));

    match StackResolver::host().resolve_frame_sequence(2, 8) {
        Ok(frames) => {
            for (i, frame) in frames.iter().enumerate() {
                tracing::info!("#{i:<2} {:?} {}", frame.entry(), frame.debug_label());
            }
        }
        Err(err) => tracing::error!(%err, "could not walk the stack"),
    }
}

/// Prefixes a message with the function that logged it.
#[inline(never)]
fn log(message: std::fmt::Arguments<'_>) {
    let resolver = StackResolver::host();
    // 2 would be `log` itself
    match resolver.resolve_single_frame(3) {
        Ok(site) => tracing::info!(
            caller = %site,
            file = site.file_base_name(),
            line = site.line(),
            "{message}"
        ),
        Err(err) => tracing::warn!(%err, "{message}"),
    }
}
