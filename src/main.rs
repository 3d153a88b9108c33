use clap::Parser;
use solid_demos::utils::logger;
use solid_demos::{CatalogArgs, CommandLoop, Library, LibraryManager, Settings, SimpleBookValidator};

fn main() -> anyhow::Result<()> {
    let args = CatalogArgs::parse();

    // 載入並驗證配置
    let settings = match Settings::from_args(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(
        settings.verbose,
        settings.log_level.as_deref(),
        settings.log_format,
    );
    tracing::debug!("Resolved settings: {:?}", settings);

    let library = Library::new(SimpleBookValidator::with_max_year(settings.max_year));
    let manager = LibraryManager::new(library);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut command_loop = CommandLoop::new(manager, stdin.lock(), stdout.lock());
    command_loop.run()?;

    tracing::info!("Book catalog closed");
    Ok(())
}
