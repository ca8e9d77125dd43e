use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "nalo-sms")]
#[command(about = "Order status SMS notifications through the NALO gateway")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true, default_value = "nalo-sms.toml")]
    pub config: String,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Write logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load and validate the configuration, then print a summary
    CheckConfig,

    /// Dispatch the notification for one order status change
    StatusChanged {
        /// JSON status-change event, `-` reads stdin
        #[arg(short, long, default_value = "-")]
        event: String,

        /// Log the message instead of calling the gateway
        #[arg(long)]
        dry_run: bool,
    },

    /// Send an operator-written SMS to an order's billing phone
    Send {
        #[arg(long)]
        phone: String,

        #[arg(short, long)]
        message: String,

        #[arg(long, default_value = "0")]
        order_id: u64,

        #[arg(long, default_value = "")]
        order_number: String,

        /// Log the message instead of calling the gateway
        #[arg(long)]
        dry_run: bool,
    },
}

impl Command {
    /// Subcommand name, safe to log: carries no phone number or message text.
    pub fn name(&self) -> &'static str {
        match self {
            Command::CheckConfig => "check-config",
            Command::StatusChanged { .. } => "status-changed",
            Command::Send { .. } => "send",
        }
    }
}
