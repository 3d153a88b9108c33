use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn catalog_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("solid_demos=debug,warn")
        } else if let Some(level) = level {
            EnvFilter::new(format!("solid_demos={}", level))
        } else {
            EnvFilter::new("solid_demos=warn")
        }
    })
}

/// 書目 CLI 的日誌：寫到 stderr，避免與互動提示混在一起
pub fn init_cli_logger(verbose: bool, level: Option<&str>, format: LogFormat) {
    let filter = catalog_filter(verbose, level);

    match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .json(),
            )
            .init(),
    }
}

/// 只輸出訊息本身 (無時間、等級、target)，寫到 stdout
/// 固定過濾條件，不受 RUST_LOG 影響：這些訊息就是程式的輸出
pub fn init_plain_logger() {
    let filter = EnvFilter::new("solid_demos=info");

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_level(false)
                .with_target(false)
                .with_ansi(false),
        )
        .init();
}
