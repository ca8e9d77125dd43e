// Adapters layer: concrete gateways behind the SmsGateway port.

pub mod dry_run;
pub mod nalo;

pub use dry_run::DryRunGateway;
pub use nalo::NaloGateway;
