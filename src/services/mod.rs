// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod auth_service;
pub mod batch_service;
pub mod egg_service;
pub mod feed_service;
pub mod ledger_service;
pub mod mortality_service;
pub mod timeline;
pub mod vaccination_service;

pub use auth_service::*;
pub use batch_service::*;
pub use egg_service::*;
pub use feed_service::*;
pub use ledger_service::*;
pub use mortality_service::*;
pub use vaccination_service::*;
