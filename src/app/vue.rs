// src/app/vue.rs
//
// Rendu ASCII
// -----------
// - grille hauteur × largeur remplie de '.'
// - un '*' par colonne à la ligne round((y_max - y)·(h-1)/(y_max - y_min))
// - continuité : si deux colonnes voisines sautent de plus d’une ligne, on remplit
//   les lignes intermédiaires dans la colonne de GAUCHE
// - NaN : ni point ni segment (ni vers lui, ni depuis lui)

use crate::noyau::numerique;

use super::etat::ConfigTrace;

const VIDE: char = '.';
const POINT: char = '*';

/// Ligne écran d’une valeur (None si NaN). Peut sortir de la grille : l’appelant filtre.
fn ligne_ecran(y: f64, config: &ConfigTrace) -> Option<i64> {
    if y.is_nan() {
        return None;
    }
    let h = (config.hauteur.max(2) - 1) as f64;
    Some(numerique::round(
        (config.y_max - y) * h / (config.y_max - config.y_min),
    ))
}

/// Construit le texte du tracé : `hauteur` lignes de `largeur` caractères, chacune terminée par '\n'.
pub fn rendre(echantillons: &[(usize, f64)], config: &ConfigTrace) -> String {
    let hauteur = config.hauteur;
    let largeur = config.largeur;
    let mut grille = vec![vec![VIDE; largeur]; hauteur];

    let dans_grille = |l: i64| l >= 0 && (l as usize) < hauteur;

    let mut precedente: Option<i64> = None;
    for &(j, y) in echantillons {
        if j >= largeur {
            continue;
        }
        let courante = ligne_ecran(y, config);

        if let Some(l) = courante {
            if dans_grille(l) {
                grille[l as usize][j] = POINT;
            }

            // raccord vertical dans la colonne précédente
            if let Some(p) = precedente.filter(|_| j > 0) {
                if (l - p).abs() > 1 {
                    let (bas, haut) = if p < l { (p, l) } else { (l, p) };
                    for k in (bas + 1)..haut {
                        if dans_grille(k) {
                            grille[k as usize][j - 1] = POINT;
                        }
                    }
                }
            }
        }

        precedente = courante;
    }

    let mut out = String::with_capacity(hauteur * (largeur + 1));
    for ligne in grille {
        out.extend(ligne);
        out.push('\n');
    }
    out
}
