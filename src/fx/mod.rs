//! Currency conversion against a remote exchange-rate provider.
mod catalog;
mod convert;
mod form;
mod menu;
mod provider;
mod rates;
mod types;

pub use catalog::*;
pub use convert::*;
pub use form::*;
pub use menu::*;
pub use provider::*;
pub use rates::*;
pub use types::*;
