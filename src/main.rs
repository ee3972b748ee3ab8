use clap::Parser;
use small_kit::app::commands;
use small_kit::utils::logger;
use small_kit::CliConfig;

fn main() {
    let cli = CliConfig::parse();

    // 載入配置 (日誌設定來自配置檔)
    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let level = config.logging.level.as_deref();
    if config.logging.json {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::info!("Starting small-kit");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let rendered = commands::execute(&cli.command, &config)
        .and_then(|output| output.render(config.output.format, config.output.pretty));

    match rendered {
        Ok(text) => println!("{}", text),
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}
