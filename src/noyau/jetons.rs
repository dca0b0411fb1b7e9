// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::erreur::ErreurNoyau;

/// Opérateurs (binaires + moins unaire).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    /// moins unaire (`u-`)
    Neg,
}

impl Op {
    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
            Op::Pow => 3,
            Op::Neg => 4,
        }
    }

    pub fn is_right_associative(self) -> bool {
        matches!(self, Op::Pow | Op::Neg)
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "^",
            Op::Neg => "u-",
        }
    }
}

/// Fonctions unaires reconnues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Cot,
    Sqrt,
    Ln,
}

impl Fonction {
    /// Nom exact (sensible à la casse) => fonction.
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        Some(match nom {
            "sin" => Fonction::Sin,
            "cos" => Fonction::Cos,
            "tan" => Fonction::Tan,
            "ctg" => Fonction::Cot,
            "sqrt" => Fonction::Sqrt,
            "ln" => Fonction::Ln,
            _ => return None,
        })
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Cot => "ctg",
            Fonction::Sqrt => "sqrt",
            Fonction::Ln => "ln",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    /// la variable `x`
    Var,
    Op(Op),
    Fonction(Fonction),
    LPar,
    RPar,
    /// sentinelle de fin (exactement une, toujours en dernier)
    Fin,
}

/// Tokenize une chaîne en jetons (terminés par `Tok::Fin`).
/// Supporte:
/// - nombres décimaux sans exposant (ex: 12, 3.25, .5)
/// - la variable x
/// - fonctions sin cos tan ctg sqrt ln
/// - opérateurs + - * / ^ (le '-' en position d’opérande devient `Op::Neg`)
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    // vrai au début, après un opérateur, une fonction ou '(' :
    // un '-' à cet endroit est un moins unaire
    let mut attend_operande = true;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : suite maximale de chiffres et de points
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lexeme: String = chars[start..i].iter().collect();
            out.push(Tok::Num(decode_nombre(&lexeme)));
            attend_operande = false;
            continue;
        }

        // Variable (testée avant les identifiants : "xsin" = x puis sin)
        if c == 'x' {
            out.push(Tok::Var);
            attend_operande = false;
            i += 1;
            continue;
        }

        // Identifiants : lettres ASCII seulement
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let f = Fonction::depuis_nom(&word).ok_or(ErreurNoyau::IdentInconnu(word))?;
            out.push(Tok::Fonction(f));
            attend_operande = true;
            continue;
        }

        // Opérateurs
        let op = match c {
            '+' => Some(Op::Add),
            '-' if attend_operande => Some(Op::Neg),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            '^' => Some(Op::Pow),
            _ => None,
        };
        if let Some(op) = op {
            out.push(Tok::Op(op));
            attend_operande = true;
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            attend_operande = true;
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            attend_operande = false;
            i += 1;
            continue;
        }

        return Err(ErreurNoyau::CaractereInconnu(c));
    }

    out.push(Tok::Fin);
    Ok(out)
}

/// Décode un littéral décimal : signe optionnel, partie entière, partie fractionnaire.
///
/// Lecture arrêtée au premier caractère qui ne colle pas ("1.2.3" => 1.2, "." => 0).
/// Pas d’exposant. Le calcul est exact (rationnel) puis arrondi UNE fois en f64.
pub fn decode_nombre(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut i = 0;

    let mut negatif = false;
    match bytes.first() {
        Some(b'-') => {
            negatif = true;
            i += 1;
        }
        Some(b'+') => i += 1,
        _ => {}
    }

    let debut_ent = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let entier = &bytes[debut_ent..i];

    let mut frac: &[u8] = &[];
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let debut_frac = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac = &bytes[debut_frac..i];
    }

    // "123" + "45" => 12345 / 10^2
    let chiffres: Vec<u8> = entier.iter().chain(frac.iter()).copied().collect();
    let numer = BigInt::parse_bytes(&chiffres, 10).unwrap_or_else(BigInt::zero);
    let denom = BigInt::from(10).pow(frac.len() as u32);

    let mut v = BigRational::new(numer, denom)
        .to_f64()
        .unwrap_or(f64::INFINITY);
    if negatif {
        v = -v;
    }
    v
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Var => "x".to_string(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Fonction(f) => f.nom().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Fin => continue,
        };
        out.push(s);
    }
    out.join(" ")
}
