//! Revcomp Core Library
//!
//! Complément inverse de séquences nucléotidiques ASCII, avec table de
//! complémentation IUPAC sur 256 octets.

pub mod batch;
pub mod complement;
pub mod config;
pub mod error;
pub mod logging;
pub mod transform;

// Réexportations principales
pub use batch::{reverse_complement_batch, DEFAULT_PARALLEL_THRESHOLD};
pub use complement::{complement, ComplementTable, TablePolicy, IUPAC_TABLE, LEGACY_TABLE};
pub use config::RevcompConfig;
pub use error::{Result, RevcompError};
pub use logging::{init_logging, level_from_verbosity};
// La macro log_operation est automatiquement exportée à la racine du crate
pub use transform::{reverse_complement, reverse_complement_str, reverse_complement_with};
