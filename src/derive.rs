//! Derive Api for `gnuopt` suboption tables.
//!
//! ### Getting Started
//! Instrument a fieldless enum with `#[derive(SubOption)]`.
//! This implements [`SubOption`](crate::prelude::SubOption), so that the enum can resolve suboption strings via
//! [`SubOptions::typed`](crate::SubOptions::typed).
//! The trait must be in scope (`use gnuopt::prelude::*`).
//!
//! ```
//! use gnuopt::{derive::*, prelude::*, SubOptions, Suboption};
//!
//! #[derive(Debug, PartialEq, SubOption)]
//! enum Mount {
//!     Ro,
//!     Rw,
//!     #[subopt(name = "rsize")]
//!     ReadSize,
//! }
//!
//! let items: Vec<Suboption<Mount>> = SubOptions::typed("rsize=4096,ro,bogus").collect();
//! assert_eq!(
//!     items,
//!     vec![
//!         Suboption::Known { option: Mount::ReadSize, value: Some("4096") },
//!         Suboption::Known { option: Mount::Ro, value: None },
//!         Suboption::Unknown("bogus"),
//!     ]
//! );
//! ```
//!
//! ### Variant Configuration
//! The token of each variant is its lowercased name (`Ro` becomes `ro`).
//! Override it with `#[subopt(name = "...")]`.
//!
//! The derive is rejected for:
//! * anything but an enum,
//! * variants carrying fields,
//! * two variants resolving to the same token.

pub use gnuopt_derive::*;
