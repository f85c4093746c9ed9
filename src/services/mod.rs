//! Service implementations for the temp-mail client.

pub mod accounts;
pub mod analysis;
pub mod domains;
pub mod messages;

pub use accounts::{AccountsService, AccountsServiceImpl};
pub use analysis::{CannedContentAnalyzer, ContentAnalyzer, HttpContentAnalyzer};
pub use domains::{DomainsService, DomainsServiceImpl};
pub use messages::{MessagesService, MessagesServiceImpl};
