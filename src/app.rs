// src/app.rs
//
// Traceur — module App (racine)
// -----------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Enchaîner compile (une fois) -> échantillonnage -> rendu
//
// Important:
// - Aucune sortie ici : on rend un String complet ou une erreur.
//   C’est main.rs qui décide quoi imprimer et du code de sortie.

pub mod etat;
pub mod vue;

pub use etat::ConfigTrace;

use crate::noyau::{compile, ErreurNoyau};

/// Trace une expression en ASCII selon `config`.
#[tracing::instrument(level = "debug", skip(config), fields(largeur = config.largeur, hauteur = config.hauteur))]
pub fn tracer(expression: &str, config: &ConfigTrace) -> Result<String, ErreurNoyau> {
    let rpn = compile(expression)?;
    let echantillons = etat::echantillonner(&rpn, config)?;
    Ok(vue::rendre(&echantillons, config))
}
