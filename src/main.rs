use clap::Parser;
use hello_service::utils::{logger, validation::Validate};
use hello_service::{CliConfig, Greeting, GreetError, ServiceContainer};

fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose());
    }

    tracing::info!("Starting hello-service");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        fail(&e);
    }

    let container = match ServiceContainer::from_config(&config) {
        Ok(container) => container,
        Err(e) => fail(&e),
    };

    let greeting = Greeting::from(container.say_hello());
    match greeting.render(cli.format) {
        Ok(output) => println!("{}", output),
        Err(e) => fail(&e),
    }
}

fn fail(e: &GreetError) -> ! {
    tracing::error!(
        "hello-service failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}
