pub mod approaches;
pub mod error;
pub mod lookup_table;
pub mod ordinal;
pub mod utils;

pub use error::{OrdpatError, Result};
pub use lookup_table::{LookupTable, check_lookup_table, create_lookup_table};
pub use ordinal::{Algorithm, OrdinalEncoder};
