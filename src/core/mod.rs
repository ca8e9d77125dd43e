pub mod currency;
pub mod dispatcher;
pub mod phone;
pub mod template;

pub use crate::domain::model::{NotificationRequest, OrderFact, StatusChange};
pub use crate::domain::ports::{DispatchOutcome, OrderEventHandler, SmsGateway};
