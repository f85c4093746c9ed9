//! Core types for the temp-mail client.

mod analysis;
mod domain;
mod message;
mod session;

pub use analysis::AnalysisReport;
pub use domain::{Domain, DomainCollection};
pub use message::{
    MessageCollection, MessageDetail, MessageDetailWire, MessageSender, MessageSummary,
    MessageWire, NO_CONTENT_SENTINEL,
};
pub use session::{
    AccountWire, CreateAccountRequest, CreateAccountBody, MeWire, Session, TokenRequestBody,
    TokenWire,
};
