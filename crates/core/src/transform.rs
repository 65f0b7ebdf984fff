//! Complément inverse d'une séquence

use crate::complement::{ComplementTable, IUPAC_TABLE};
use crate::error::{RevcompError, Result};

/// Complément inverse avec la table IUPAC
///
/// # Exemples
///
/// ```
/// use revcomp_core::reverse_complement;
///
/// assert_eq!(reverse_complement(b"GATTACA").unwrap(), b"TGTAATC".to_vec());
/// assert_eq!(reverse_complement(b"acgtACGT").unwrap(), b"ACGTacgt".to_vec());
/// assert_eq!(reverse_complement(b"AC-GT").unwrap(), b"AC-GT".to_vec());
/// ```
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>> {
    reverse_complement_with(&IUPAC_TABLE, seq)
}

/// Complément inverse avec une table donnée
///
/// La séquence est parcourue depuis la fin par blocs de 4 octets, puis les
/// 0 à 3 premiers octets sont traités un par un. Le tampon de sortie est
/// réservé en une fois; en cas d'échec aucune donnée n'est produite.
pub fn reverse_complement_with(table: &ComplementTable, seq: &[u8]) -> Result<Vec<u8>> {
    let mut out = allocate(seq.len())?;

    let mut chunks = seq.rchunks_exact(4);
    for chunk in &mut chunks {
        out.extend_from_slice(&[
            table.complement(chunk[3]),
            table.complement(chunk[2]),
            table.complement(chunk[1]),
            table.complement(chunk[0]),
        ]);
    }
    out.extend(chunks.remainder().iter().rev().map(|&b| table.complement(b)));

    debug_assert_eq!(out.len(), seq.len());
    Ok(out)
}

/// Complément inverse d'une chaîne ASCII
///
/// Une entrée ASCII donne toujours une sortie ASCII. Les caractères
/// multi-octets ne font pas partie de l'alphabet; s'ils rendent le résultat
/// invalide en UTF-8, il est converti avec remplacement.
pub fn reverse_complement_str(seq: &str) -> Result<String> {
    let bytes = reverse_complement(seq.as_bytes())?;
    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

fn allocate(len: usize) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len).map_err(|_| {
        tracing::debug!(requested = len, "échec d'allocation du tampon de sortie");
        RevcompError::OutOfMemory { requested: len }
    })?;
    Ok(out)
}
