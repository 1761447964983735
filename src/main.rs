use clap::Parser;
use small_utils::app;
use small_utils::config::CliArgs;
use small_utils::utils::error::ErrorSeverity;
use small_utils::utils::{logger, validation::Validate};

fn main() {
    let args = CliArgs::parse();

    // 載入並驗證配置
    let loaded = args.load_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    });

    // 初始化日誌
    match &loaded {
        Ok(config) if config.logging.json => {
            logger::init_json_logger(if args.verbose { "debug" } else { config.logging.level.as_str() })
        }
        Ok(config) => logger::init_cli_logger(args.verbose, &config.logging.level),
        Err(_) => logger::init_cli_logger(args.verbose, "info"),
    }
    tracing::debug!("CLI args: {:?}", args);

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    match app::execute(&args.command, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("{} (Category: {:?}, Severity: {:?})", e, e.category(), e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
