//! Noyau du traceur
//!
//! Organisation interne :
//! - erreur.rs    : erreurs structurelles (fatales)
//! - numerique.rs : sin/cos/tan/ctg, sqrt, ln, pow “maison” + sentinelles
//! - jetons.rs    : tokenisation (+ moins unaire)
//! - rpn.rs       : shunting-yard
//! - eval.rs      : compile (une fois) + évaluation RPN (par échantillon)

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod numerique;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurNoyau;
pub use eval::{compile, eval_rpn};
