//! The external services the engine reads from, but does not own.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

mod contracts;
mod error;
mod health;
mod holidays;
mod latest;

pub use contracts::*;
pub use error::*;
pub use health::*;
pub use holidays::*;
pub use latest::*;

macro_rules! define_id {
    ( $( $(#[$meta:meta])* $name:ident ),+ $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From,
                Deserialize, Serialize,
            )]
            #[serde(transparent)]
            pub struct $name(u64);

            impl $name {
                #[must_use]
                pub const fn new(id: u64) -> Self {
                    Self(id)
                }

                #[must_use]
                pub const fn as_u64(&self) -> u64 {
                    self.0
                }
            }
        )+
    };
}

define_id! {
    /// Identifies an employment contract in the backend.
    ContractId,
    EmployeeId,
    HealthRecordId,
}
