//! Complément inverse de plusieurs séquences indépendantes

use crate::complement::ComplementTable;
use crate::error::Result;
use crate::transform::reverse_complement_with;
use rayon::prelude::*;

/// Seuil par défaut au-delà duquel le lot est traité en parallèle
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Complément inverse d'un lot de séquences
///
/// L'ordre de sortie suit l'ordre d'entrée. À partir de `parallel_threshold`
/// séquences, le lot est réparti sur le pool rayon; la table étant en
/// lecture seule, aucun verrou n'est nécessaire. La première erreur
/// d'allocation interrompt le lot.
pub fn reverse_complement_batch<S>(
    table: &ComplementTable,
    seqs: &[S],
    parallel_threshold: usize,
) -> Result<Vec<Vec<u8>>>
where
    S: AsRef<[u8]> + Sync,
{
    if seqs.len() >= parallel_threshold.max(1) {
        tracing::debug!(count = seqs.len(), "lot traité en parallèle");
        seqs.par_iter()
            .map(|seq| reverse_complement_with(table, seq.as_ref()))
            .collect()
    } else {
        tracing::trace!(count = seqs.len(), "lot traité séquentiellement");
        seqs.iter()
            .map(|seq| reverse_complement_with(table, seq.as_ref()))
            .collect()
    }
}
