//! src/app/etat.rs
//!
//! Configuration du tracé + échantillonnage (sans rendu).
//!
//! Contrats :
//! - La RPN est compilée ailleurs, une fois ; ici on ne fait que l’évaluer par colonne.
//! - Sortie ordonnée : (indice, y) pour indice = 0..largeur, y déjà borné dans [y_min, y_max].
//! - NaN reste NaN (aucune comparaison ne le capture) : la vue ne le dessine pas.
//! - Une largeur < 2 est traitée comme 2 pour le pas en x (pas de division par zéro).

use std::f64::consts::PI;

use rayon::prelude::*;
use tracing::trace;

use crate::noyau::jetons::Tok;
use crate::noyau::{eval_rpn, ErreurNoyau};

/// Grille par défaut (colonnes × lignes).
const LARGEUR_DEFAUT: usize = 80;
const HAUTEUR_DEFAUT: usize = 25;

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigTrace {
    pub largeur: usize,
    pub hauteur: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ConfigTrace {
    fn default() -> Self {
        Self {
            largeur: LARGEUR_DEFAUT,
            hauteur: HAUTEUR_DEFAUT,
            x_min: 0.0,
            x_max: 4.0 * PI,
            y_min: -1.0,
            y_max: 1.0,
        }
    }
}

impl ConfigTrace {
    /// Abscisse de la colonne j.
    pub fn x_de(&self, j: usize) -> f64 {
        let n = self.largeur.max(2) - 1;
        self.x_min + (self.x_max - self.x_min) * j as f64 / n as f64
    }

    /// Borne y dans [y_min, y_max]. NaN traverse tel quel.
    pub fn borne_y(&self, y: f64) -> f64 {
        if y < self.y_min {
            self.y_min
        } else if y > self.y_max {
            self.y_max
        } else {
            y
        }
    }
}

/// Évalue la RPN sur chaque colonne.
///
/// Parallèle (rayon) mais l’ordre des colonnes est conservé ; la première erreur
/// structurelle fait échouer l’ensemble (pas de sortie partielle).
pub fn echantillonner(rpn: &[Tok], config: &ConfigTrace) -> Result<Vec<(usize, f64)>, ErreurNoyau> {
    (0..config.largeur)
        .into_par_iter()
        .map(|j| -> Result<(usize, f64), ErreurNoyau> {
            let x = config.x_de(j);
            let y = eval_rpn(rpn, x)?;
            if y.is_nan() {
                trace!(j, x, "échantillon indéfini");
            }
            Ok((j, config.borne_y(y)))
        })
        .collect()
}
