//! Configuration du complément inverse

use crate::batch::{reverse_complement_batch, DEFAULT_PARALLEL_THRESHOLD};
use crate::complement::{ComplementTable, TablePolicy};
use crate::error::Result;
use crate::transform::reverse_complement_with;
use serde::Deserialize;

/// Configuration complète
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RevcompConfig {
    /// Table de complémentation à utiliser
    pub table: TablePolicy,
    /// Nombre de séquences à partir duquel un lot passe en parallèle
    pub parallel_threshold: usize,
}

impl Default for RevcompConfig {
    fn default() -> Self {
        Self {
            table: TablePolicy::Iupac,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl RevcompConfig {
    /// Définit la politique de table
    pub fn with_table(mut self, table: TablePolicy) -> Self {
        self.table = table;
        self
    }

    /// Table statique sélectionnée
    pub fn complement_table(&self) -> &'static ComplementTable {
        ComplementTable::for_policy(self.table)
    }

    /// Complément inverse d'une séquence
    pub fn transform(&self, seq: &[u8]) -> Result<Vec<u8>> {
        reverse_complement_with(self.complement_table(), seq)
    }

    /// Complément inverse d'un lot de séquences
    pub fn transform_batch<S>(&self, seqs: &[S]) -> Result<Vec<Vec<u8>>>
    where
        S: AsRef<[u8]> + Sync,
    {
        reverse_complement_batch(self.complement_table(), seqs, self.parallel_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RevcompConfig::default();
        assert_eq!(config.table, TablePolicy::Iupac);
        assert_eq!(config.parallel_threshold, 64);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: RevcompConfig = serde_json::from_str(r#"{"table": "legacy"}"#).unwrap();
        assert_eq!(config.table, TablePolicy::Legacy);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_transform_uses_policy() {
        let legacy = RevcompConfig::default().with_table(TablePolicy::Legacy);
        assert_eq!(legacy.transform(b"`A").unwrap(), b"T@".to_vec());
        assert_eq!(RevcompConfig::default().transform(b"`A").unwrap(), b"T`".to_vec());
    }

    #[test]
    fn test_transform_batch() {
        let config = RevcompConfig::default();
        let seqs: [&[u8]; 2] = [b"ACGT", b"GATTACA"];
        let out = config.transform_batch(&seqs).unwrap();
        assert_eq!(out, vec![b"ACGT".to_vec(), b"TGTAATC".to_vec()]);
    }
}
