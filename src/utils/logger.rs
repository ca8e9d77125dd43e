use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("nalo_sms_notify=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("nalo_sms_notify=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON lines on stdout, for hosts that ship structured logs.
pub fn init_json_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nalo_sms_notify=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

/// Keeps the last four digits of a phone number visible.
pub fn mask_phone(phone: &str) -> String {
    let visible = 4;
    let count = phone.chars().count();
    if count <= visible {
        return "*".repeat(count);
    }

    let tail: String = phone.chars().skip(count - visible).collect();
    if let Some(rest) = phone.strip_prefix('+') {
        format!("+{}{}", "*".repeat(rest.chars().count() - visible), tail)
    } else {
        format!("{}{}", "*".repeat(count - visible), tail)
    }
}
