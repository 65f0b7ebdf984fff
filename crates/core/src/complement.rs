//! Table de complémentation des nucléotides
//!
//! La table couvre les 256 valeurs d'octet. Les codes IUPAC (majuscules et
//! minuscules) reçoivent leur complément; tout autre octet est renvoyé tel
//! quel, ce qui rend la complémentation totale sur n'importe quelle entrée.

use serde::Deserialize;
use std::fmt;

/// Paires de complémentation en majuscules, les minuscules sont dérivées.
const IUPAC_PAIRS: [(u8, u8); 16] = [
    (b'A', b'T'),
    (b'T', b'A'),
    (b'U', b'A'), // l'uracile s'apparie avec l'adénine
    (b'C', b'G'),
    (b'G', b'C'),
    (b'R', b'Y'), // A ou G
    (b'Y', b'R'), // C ou T
    (b'K', b'M'), // G ou T
    (b'M', b'K'), // A ou C
    (b'B', b'V'), // C, G ou T
    (b'V', b'B'), // A, C ou G
    (b'D', b'H'), // A, G ou T
    (b'H', b'D'), // A, C ou T
    (b'S', b'S'), // G ou C
    (b'W', b'W'), // A ou T
    (b'N', b'N'),
];

/// Politique de construction de la table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TablePolicy {
    /// Codes IUPAC complémentés, tout le reste inchangé
    #[default]
    Iupac,
    /// Compatible octet pour octet avec l'ancienne table (`` ` `` devient `@`)
    Legacy,
}

impl fmt::Display for TablePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TablePolicy::Iupac => write!(f, "iupac"),
            TablePolicy::Legacy => write!(f, "legacy"),
        }
    }
}

/// Table de complémentation indexée par valeur d'octet
#[derive(Clone, PartialEq, Eq)]
pub struct ComplementTable([u8; 256]);

/// Table par défaut, construite à la compilation
pub static IUPAC_TABLE: ComplementTable = ComplementTable::iupac();

/// Table historique
pub static LEGACY_TABLE: ComplementTable = ComplementTable::legacy();

impl ComplementTable {
    /// Construit la table IUPAC
    pub const fn iupac() -> Self {
        let mut table = [0u8; 256];
        let mut i = 0;
        while i < 256 {
            table[i] = i as u8;
            i += 1;
        }

        let mut j = 0;
        while j < IUPAC_PAIRS.len() {
            let (base, comp) = IUPAC_PAIRS[j];
            table[base as usize] = comp;
            table[base.to_ascii_lowercase() as usize] = comp.to_ascii_lowercase();
            j += 1;
        }

        Self(table)
    }

    /// Construit la table historique
    pub const fn legacy() -> Self {
        let Self(mut table) = Self::iupac();
        table[b'`' as usize] = b'@';
        Self(table)
    }

    /// Retourne la table statique correspondant à la politique
    pub fn for_policy(policy: TablePolicy) -> &'static ComplementTable {
        match policy {
            TablePolicy::Iupac => &IUPAC_TABLE,
            TablePolicy::Legacy => &LEGACY_TABLE,
        }
    }

    /// Complément d'un octet
    #[inline]
    pub const fn complement(&self, base: u8) -> u8 {
        self.0[base as usize]
    }

    /// Vérifie si l'octet est un code nucléotidique reconnu
    pub const fn is_nucleotide(base: u8) -> bool {
        let upper = base.to_ascii_uppercase();
        let mut j = 0;
        while j < IUPAC_PAIRS.len() {
            if IUPAC_PAIRS[j].0 == upper {
                return true;
            }
            j += 1;
        }
        false
    }

    /// Accès brut à la table
    pub const fn as_bytes(&self) -> &[u8; 256] {
        &self.0
    }
}

impl Default for ComplementTable {
    fn default() -> Self {
        IUPAC_TABLE.clone()
    }
}

impl fmt::Debug for ComplementTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let remapped = self
            .0
            .iter()
            .enumerate()
            .filter(|&(i, &c)| i as u8 != c)
            .count();
        f.debug_struct("ComplementTable")
            .field("remapped", &remapped)
            .finish()
    }
}

/// Complément d'un octet avec la table IUPAC
#[inline]
pub fn complement(base: u8) -> u8 {
    IUPAC_TABLE.complement(base)
}
