//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (une seule fois) -> eval_rpn(x) (une fois par échantillon)
//!
//! Partage des erreurs :
//! - structurelles (opérandes, parenthèses, jetons) => `Err`, fatales
//! - domaine numérique => NaN ou 1e10 dans le résultat, jamais `Err`

use tracing::debug;

use super::erreur::ErreurNoyau;
use super::jetons::{format_tokens, tokenize, Fonction, Op, Tok};
use super::numerique::{self, EPSILON, SENTINELLE};
use super::rpn::to_rpn;

/// Compile une expression en RPN (terminée par `Tok::Fin`), à réutiliser pour chaque x.
pub fn compile(expr_str: &str) -> Result<Vec<Tok>, ErreurNoyau> {
    let jetons = tokenize(expr_str)?;
    debug!(jetons = %format_tokens(&jetons), "tokenisation");

    let rpn = to_rpn(&jetons)?;
    debug!(rpn = %format_tokens(&rpn), "shunting-yard");

    Ok(rpn)
}

/// Évalue une RPN pour une valeur de x.
///
/// La RPN n’est que lue : chaque appel possède sa propre pile d’opérandes,
/// donc les appels sont indépendants (parallélisables).
pub fn eval_rpn(rpn: &[Tok], x: f64) -> Result<f64, ErreurNoyau> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Fin => break,

            Tok::Num(v) => pile.push(*v),
            Tok::Var => pile.push(x),

            Tok::Op(Op::Neg) => {
                let a = pile.pop().ok_or_else(|| manque(Op::Neg.symbole()))?;
                pile.push(-a);
            }

            Tok::Op(op) => {
                // ordre : b (dépilé en premier) est l’opérande DROIT
                let b = pile.pop().ok_or_else(|| manque(op.symbole()))?;
                let a = pile.pop().ok_or_else(|| manque(op.symbole()))?;
                pile.push(applique_op(*op, a, b));
            }

            Tok::Fonction(f) => {
                let a = pile.pop().ok_or_else(|| manque(f.nom()))?;
                pile.push(applique_fonction(*f, a));
            }

            // to_rpn ne laisse jamais de parenthèse
            Tok::LPar | Tok::RPar => return Err(ErreurNoyau::ParenthesesNonAppariees),
        }
    }

    match pile.len() {
        0 => Err(ErreurNoyau::ResultatVide),
        1 => Ok(pile[0]),
        n => Err(ErreurNoyau::OperandesEnTrop(n)),
    }
}

fn manque(quoi: &str) -> ErreurNoyau {
    ErreurNoyau::OperandesManquants(quoi.to_string())
}

fn applique_op(op: Op, a: f64, b: f64) -> f64 {
    match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => {
            if numerique::abs(b) < EPSILON {
                SENTINELLE
            } else {
                a / b
            }
        }
        Op::Pow => numerique::pow(a, b),
        Op::Neg => -b,
    }
}

fn applique_fonction(f: Fonction, a: f64) -> f64 {
    match f {
        Fonction::Sin => numerique::sin(a),
        Fonction::Cos => numerique::cos(a),
        Fonction::Tan => numerique::tan(a),
        Fonction::Cot => numerique::cot(a),
        Fonction::Sqrt => {
            if a < 0.0 {
                numerique::indefini()
            } else {
                numerique::sqrt(a)
            }
        }
        Fonction::Ln => {
            if a <= 0.0 {
                numerique::indefini()
            } else {
                numerique::ln(a)
            }
        }
    }
}
