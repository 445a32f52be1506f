use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 診断ログ（stderr）を初期化
///
/// `RUST_LOG` があればそれを使う。なければ `warn`、`--verbose` 指定時は `debug`。
pub fn init(verbose: bool) {
    let default_level = if verbose {
        "route_recon=debug,route_recon_common=debug"
    } else {
        "warn"
    };

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
