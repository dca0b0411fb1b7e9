// src/noyau/erreur.rs
//
// Erreurs structurelles du pipeline (toutes fatales pour l’expression).
// Les soucis de domaine numérique (division ~0, sqrt/ln hors domaine, pôle de tan)
// ne passent JAMAIS par ici : ils deviennent NaN ou la sentinelle 1e10.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurNoyau {
    #[error("caractère inconnu: '{0}'")]
    CaractereInconnu(char),

    #[error("fonction ou variable inconnue: {0}")]
    IdentInconnu(String),

    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    #[error("expression invalide: opérandes manquants pour '{0}'")]
    OperandesManquants(String),

    #[error("expression invalide: trop d’opérandes ({0} restants)")]
    OperandesEnTrop(usize),

    #[error("expression invalide: résultat vide")]
    ResultatVide,
}
