use anyhow::Context;
use clap::Parser;
use nalo_sms_notify::config::cli::Command;
use nalo_sms_notify::utils::{logger, validation::Validate};
use nalo_sms_notify::{
    CliConfig, DispatchOutcome, DryRunGateway, NaloGateway, NotificationDispatcher,
    NotificationSettings, OrderEventHandler, OrderFact, SmsGateway, StatusChange, TomlConfig,
};
use std::io::Read;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("Running '{}' command", cli.command.name());
    tracing::info!("📁 Loading configuration from: {}", cli.config);

    let config = match TomlConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let settings = config.notification_settings()?;

    match cli.command {
        Command::CheckConfig => display_config_summary(&config, &settings),
        Command::StatusChanged { ref event, dry_run } => {
            let event = read_event(event)?;
            if dry_run {
                let dispatcher = NotificationDispatcher::new(settings, DryRunGateway::new());
                report(dispatch_event(&dispatcher, &event).await);
            } else {
                let gateway = NaloGateway::new(&config.gateway_settings())?;
                let dispatcher = NotificationDispatcher::new(settings, gateway);
                report(dispatch_event(&dispatcher, &event).await);
            }
        }
        Command::Send {
            phone,
            message,
            order_id,
            order_number,
            dry_run,
        } => {
            let order = OrderFact {
                order_number,
                billing_phone: phone,
                ..OrderFact::default()
            };
            if dry_run {
                let dispatcher = NotificationDispatcher::new(settings, DryRunGateway::new());
                report(dispatcher.send_custom_text(order_id, &order, &message).await);
            } else {
                let gateway = NaloGateway::new(&config.gateway_settings())?;
                let dispatcher = NotificationDispatcher::new(settings, gateway);
                report(dispatcher.send_custom_text(order_id, &order, &message).await);
            }
        }
    }

    Ok(())
}

async fn dispatch_event<G: SmsGateway>(
    dispatcher: &NotificationDispatcher<G>,
    event: &StatusChange,
) -> DispatchOutcome {
    dispatcher.status_changed(event).await
}

fn read_event(source: &str) -> anyhow::Result<StatusChange> {
    let raw = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading status-change event from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("reading status-change event from {}", source))?
    };

    StatusChange::from_json(&raw).context("parsing status-change event")
}

// Fire-and-forget: a halted dispatch is reported but never changes the exit code.
fn report(outcome: DispatchOutcome) {
    match outcome {
        DispatchOutcome::Sent => println!("✅ SMS sent"),
        DispatchOutcome::Halted(reason) => println!("⏭️  SMS not sent: {}", reason),
    }
}

fn display_config_summary(config: &TomlConfig, settings: &NotificationSettings) {
    let enabled: Vec<&str> = settings.enabled_statuses().map(|s| s.as_str()).collect();
    let templated: Vec<&str> = settings.templated_statuses().map(|s| s.as_str()).collect();

    println!("📋 Configuration Summary:");
    println!("  Gateway endpoint: {}", config.gateway.endpoint);
    println!("  Timeout: {}s", config.gateway.timeout_seconds);
    println!("  Sender ID: {}", config.gateway.credentials.sender_id);
    println!(
        "  Credentials: {}",
        if config.has_credentials() { "configured" } else { "MISSING" }
    );
    println!("  Enabled statuses: {}", enabled.join(", "));
    println!("  Templates: {}", templated.join(", "));

    for status in settings.enabled_statuses() {
        if settings.template_for(status).is_none() {
            println!("  ⚠️  '{}' is enabled but has no template", status);
        }
    }
}
