use anyhow::Context;
use clap::Parser;
use travel_cost::utils::{logger, validation::Validate};
use travel_cost::{CliConfig, FareError, InteractiveSession, Invocation, Quote};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting travel-cost");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!("❌ travel-cost failed: {:#}", e);

        // 輸出用戶友好的錯誤信息
        let Some(fare_error) = e.downcast_ref::<FareError>() else {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        tracing::debug!(
            "Category: {:?}, Severity: {:?}",
            fare_error.category(),
            fare_error.severity()
        );
        eprintln!("❌ {}", fare_error.user_friendly_message());
        eprintln!("💡 {}", fare_error.recovery_suggestion());

        std::process::exit(fare_error.severity().exit_code());
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let mut config = cli.load_file_config().with_context(|| match &cli.config {
        Some(path) => format!("failed to load config file '{}'", path.display()),
        None => "failed to load default configuration".to_string(),
    })?;
    cli.apply_overrides(&mut config);

    // 驗證配置
    cli.validate().context("invalid command line arguments")?;
    config.validate().context("invalid configuration")?;

    match cli.invocation(&config)? {
        Invocation::Interactive => {
            let stdin = std::io::stdin();
            let mut session = InteractiveSession::new(stdin.lock(), std::io::stdout());
            session.run(&config)?;
        }
        Invocation::Single { mode, request } => {
            let quote = Quote::compute(mode, request)?;
            if cli.json {
                println!("{}", quote.to_json()?);
            } else {
                println!("Total cost ({}): {}", quote.mode, quote.cost);
            }
        }
    }

    Ok(())
}
