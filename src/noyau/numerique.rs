// src/noyau/numerique.rs
//
// Noyau numérique “maison”
// ------------------------
// Aucune fonction transcendante de la plateforme : séries tronquées, Newton,
// réduction d’intervalle. La précision est celle des troncatures (≈1e-6 au pire
// pour sin/cos près de ±π), pas celle d’une libm.
//
// Sentinelles :
// - NaN  : indéfini (sqrt(<0), ln(<=0)), se propage sans bruit
// - 1e10 : “infini fini” (pôle de tan/cot, division par ~0)

use std::f64::consts::{LN_2, PI};

/// Seuil commun : division par ~0, pôles de tan/cot, arrêt de Newton.
pub const EPSILON: f64 = 1e-10;

/// Valeur renvoyée à la place d’un infini.
pub const SENTINELLE: f64 = 1e10;

const DEUX_PI: f64 = 2.0 * PI;

/// Au-delà, les décalages ±2π ne bougent plus x (ou prendraient des milliards de tours) :
/// on pré-réduit par reste flottant.
const REDUCTION_DIRECTE: f64 = 1e4;

/// 2^53 : à partir d’ici, plus aucun f64 impair.
const EXPOSANT_PAIR_MIN: f64 = 9_007_199_254_740_992.0;
const EXPOSANT_PAIR_BORNE: u64 = 1 << 62;

const ITER_NEWTON: usize = 20;
const TERMES_LN: usize = 30;

/// Valeur « indéfinie » canonique.
#[inline]
pub fn indefini() -> f64 {
    f64::NAN
}

pub fn abs(x: f64) -> f64 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

/// Puissance.
///
/// - exposant entier : exponentiation rapide (carrés successifs), négatif => 1/base
/// - exposant non entier, base > 0 : `sin(e·ln(base))`
/// - exposant non entier, base <= 0 : 0
///
/// Le cas non entier n’est PAS une vraie puissance : c’est le comportement historique
/// du traceur, conservé tel quel (il change les courbes avec `^0.5` etc.).
pub fn pow(base: f64, exposant: f64) -> f64 {
    if exposant.is_finite() && exposant == exposant.trunc() {
        let mut b = base;
        // tout f64 >= 2^53 est un entier pair : on garde la parité avec une borne paire
        // (et la boucle reste sous 64 tours)
        let mut n = if abs(exposant) >= EXPOSANT_PAIR_MIN {
            EXPOSANT_PAIR_BORNE
        } else {
            abs(exposant) as u64
        };
        if exposant < 0.0 {
            b = 1.0 / b;
        }

        let mut out = 1.0;
        while n > 0 {
            if n % 2 == 1 {
                out *= b;
            }
            b *= b;
            n /= 2;
        }
        return out;
    }

    if base <= 0.0 {
        return 0.0;
    }

    sin(exposant * ln(base))
}

/// Racine carrée par Newton (départ x/2, 20 itérations max).
pub fn sqrt(x: f64) -> f64 {
    if x < 0.0 {
        return indefini();
    }
    if x == 0.0 {
        return 0.0;
    }
    if x == f64::INFINITY {
        return x;
    }

    let mut guess = x / 2.0;
    for _ in 0..ITER_NEWTON {
        let prev = guess;
        guess = (guess + x / guess) / 2.0;
        if abs(guess - prev) < EPSILON {
            break;
        }
    }
    guess
}

/// Logarithme népérien.
///
/// Réduction dans [0.5, 1.5] par moitiés/doubles (on compte l’exposant de 2),
/// puis série alternée ln(1+y) sur 30 termes, puis + k·ln 2.
pub fn ln(x: f64) -> f64 {
    if x <= 0.0 {
        return indefini();
    }
    if x == f64::INFINITY {
        return x;
    }

    let mut m = x;
    let mut k: i32 = 0;
    while m > 1.5 {
        m /= 2.0;
        k += 1;
    }
    while m < 0.5 {
        m *= 2.0;
        k -= 1;
    }

    let y = m - 1.0;
    let mut somme = 0.0;
    let mut terme = y;
    let mut y_pow = y;
    for i in 1..=TERMES_LN {
        somme += terme / i as f64;
        y_pow *= -y;
        terme = y_pow;
    }

    somme + f64::from(k) * LN_2
}

/// Ramène x dans [-π, π] par décalages de 2π.
///
/// Au-delà de 1e4, le reste `%` remplace les décalages répétés : le résultat peut
/// différer de la boucle pure par l’erreur d’arrondi que celle-ci accumulerait.
fn reduire_angle(x: f64) -> f64 {
    let mut a = if abs(x) > REDUCTION_DIRECTE {
        x % DEUX_PI
    } else {
        x
    };
    while a > PI {
        a -= DEUX_PI;
    }
    while a < -PI {
        a += DEUX_PI;
    }
    a
}

/// Sinus : Taylor tronqué à 8 termes (x, x³, …, x¹⁵).
pub fn sin(x: f64) -> f64 {
    if !x.is_finite() {
        return indefini();
    }
    let a = reduire_angle(x);

    let mut somme = 0.0;
    let mut terme = a;
    let mut signe = 1.0;
    let mut i = 1;
    while i <= 15 {
        somme += signe * terme;
        signe = -signe;
        terme = terme * a * a / f64::from((i + 1) * (i + 2));
        i += 2;
    }
    somme
}

/// Cosinus : Taylor tronqué à 8 termes (1, x², …, x¹⁴).
pub fn cos(x: f64) -> f64 {
    if !x.is_finite() {
        return indefini();
    }
    let a = reduire_angle(x);

    let mut somme = 0.0;
    let mut terme = 1.0;
    let mut signe = 1.0;
    let mut i = 0;
    while i <= 14 {
        somme += signe * terme;
        signe = -signe;
        terme = terme * a * a / f64::from((i + 1) * (i + 2));
        i += 2;
    }
    somme
}

/// Tangente : sin/cos, sentinelle 1e10 près des pôles.
pub fn tan(x: f64) -> f64 {
    let c = cos(x);
    if abs(c) < EPSILON {
        return SENTINELLE;
    }
    sin(x) / c
}

/// Cotangente : 1/tan, même garde.
pub fn cot(x: f64) -> f64 {
    let t = tan(x);
    if abs(t) < EPSILON {
        return SENTINELLE;
    }
    1.0 / t
}

/// Arrondi demi-loin-de-zéro (NaN => 0, hors bornes => saturé).
pub fn round(x: f64) -> i64 {
    let decale = if x >= 0.0 { x + 0.5 } else { x - 0.5 };
    decale as i64
}
