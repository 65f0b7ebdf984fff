//! Chargement de la configuration

use anyhow::{Context, Result};
use revcomp_core::RevcompConfig;
use std::path::Path;

/// Préfixe des variables d'environnement (`REVCOMP_TABLE`, ...)
const ENV_PREFIX: &str = "REVCOMP";

/// Charge la configuration depuis un fichier optionnel et l'environnement
///
/// Les variables d'environnement l'emportent sur le fichier; les valeurs
/// absentes gardent leur défaut.
pub fn load(path: Option<&Path>) -> Result<RevcompConfig> {
    load_with_env(path, None)
}

/// Comme [`load`], avec des variables fournies à la place de l'environnement
/// du processus quand `env` est renseigné.
fn load_with_env(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> Result<RevcompConfig> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path).required(true));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        )
        .build()
        .with_context(|| match path {
            Some(path) => format!("Lecture de la configuration {}", path.display()),
            None => "Lecture de la configuration".to_string(),
        })?;

    settings
        .try_deserialize::<RevcompConfig>()
        .context("Configuration invalide")
}
