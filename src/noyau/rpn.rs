// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (infixe, terminée par Fin) en RPN (postfixe, terminée par Fin)
//
// Règles:
// - Num / Var : sortie directe
// - Fonction  : empilée, sortie quand la ')' de son argument est résolue
// - Opérateur : dépile tant que le sommet est un opérateur plus prioritaire
//               (ou de même priorité si l’opérateur courant est associatif à gauche)
//
// NOTE:
// - Le moins unaire (u-, priorité 4) passe AVANT ^ (priorité 3) : "-x^2" = (-x)^2.
//   Choix historique du traceur, conservé.
// - Une fonction sans parenthèses ("sin x + 1") reste sur la pile jusqu’à la fin :
//   elle s’applique à tout ce qui suit.

use super::erreur::ErreurNoyau;
use super::jetons::Tok;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(Sin), LPar, Var, Op(Div), Num(2), RPar, Fin]
///   rpn:    [Var, Num(2), Op(Div), Fonction(Sin), Fin]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter() {
        match tok {
            Tok::Fin => break,

            Tok::Num(_) | Tok::Var => out.push(tok.clone()),

            // fonction : on la garde sur la pile (elle sortira après son argument)
            Tok::Fonction(_) | Tok::LPar => ops.push(tok.clone()),

            Tok::Op(op) => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(Tok::Op(top)) = ops.last() {
                    let p_top = top.precedence();
                    let p_tok = op.precedence();

                    let doit_pop =
                        p_top > p_tok || (p_top == p_tok && !op.is_right_associative());

                    if !doit_pop {
                        break;
                    }
                    out.push(Tok::Op(*top));
                    ops.pop();
                }

                ops.push(Tok::Op(*op));
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurNoyau::ParenthesesNonAppariees),
                    }
                }

                // si une fonction est au sommet, elle est liée à l’argument qu’on vient de fermer
                if let Some(Tok::Fonction(f)) = ops.last() {
                    out.push(Tok::Fonction(*f));
                    ops.pop();
                }
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar) {
            return Err(ErreurNoyau::ParenthesesNonAppariees);
        }
        out.push(top);
    }

    out.push(Tok::Fin);
    Ok(out)
}
