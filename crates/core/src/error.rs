//! Types d'erreurs pour le complément inverse

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevcompError {
    /// Le tampon de sortie n'a pas pu être alloué.
    #[error("Mémoire insuffisante: impossible d'allouer {requested} octets")]
    OutOfMemory { requested: usize },
}

pub type Result<T> = std::result::Result<T, RevcompError>;
