use clap::Parser;
use local_pass::utils::{logger, validation::Validate};
use local_pass::{CliConfig, PassFormatter, PassengerSource, Result, INVALID_PASS};

fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;

    let source = PassengerSource::from_config(config);
    let input = source.read_value()?;

    let formatter = PassFormatter::new();
    match formatter.validate(&input) {
        Ok(passenger) => {
            let pass = formatter.render(&passenger);
            tracing::info!(pass_id = %pass.pass_id().unwrap_or_default(), "pass issued");
            println!("{}", pass);
        }
        Err(reason) => {
            tracing::warn!("passenger rejected: {}", reason);
            println!("{}", INVALID_PASS);
            if config.strict {
                return Err(reason.into());
            }
        }
    }

    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    match serde_json::to_string(&config) {
        Ok(json) => tracing::debug!("CLI config: {}", json),
        Err(_) => tracing::debug!("CLI config: {:?}", config),
    }

    if let Err(e) = run(&config) {
        tracing::error!("local-pass failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
