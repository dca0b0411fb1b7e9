//! Tests scientifiques (campagne) : invariants + précision du noyau + propriétés.
//!
//! But : vérifier le contrat de bout en bout sans faire chauffer la machine.
//! - budget temps global sur les boucles
//! - précision jugée contre la troncature du noyau, pas contre une libm
//! - proptest : toute expression bien formée s’évalue sans erreur structurelle

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::jetons::Tok;
use super::numerique::{self, SENTINELLE};
use super::{compile, eval_rpn, ErreurNoyau};

fn eval_ok(expr: &str, x: f64) -> f64 {
    let rpn = compile(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    eval_rpn(&rpn, x).unwrap_or_else(|e| panic!("expr={expr:?} x={x} err={e}"))
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Exemples de référence ------------------------ */

#[test]
fn sci_exemples_de_reference() {
    assert_eq!(eval_ok("3 + 4 * 2", 0.0), 11.0);
    assert_eq!(eval_ok("(3 + 4) * 2", 0.0), 14.0);
    assert_eq!(eval_ok("-x^2", 3.0), 9.0);
    assert_eq!(eval_ok("1/0", 0.0), SENTINELLE);
    assert!(eval_ok("sqrt(-1)", 0.0).is_nan());
    assert_eq!(
        compile("(").map(|_| ()),
        Err(ErreurNoyau::ParenthesesNonAppariees)
    );
}

/* ------------------------ Précision du noyau ------------------------ */

#[test]
fn sci_sinus_sur_4pi_80_points() {
    let rpn = compile("sin(x)").unwrap();
    let mut pire: f64 = 0.0;

    for j in 0..80 {
        let x = 4.0 * PI * j as f64 / 79.0;
        let y = eval_rpn(&rpn, x).unwrap();
        // exactement l’approximation du noyau...
        assert_eq!(y, numerique::sin(x));
        // ...qui reste proche du vrai sinus
        pire = pire.max((y - x.sin()).abs());
    }

    assert!(pire < 1e-5, "écart max {pire}");
    // et ce n’est PAS la libm : la troncature se voit près de ±π
    assert!(pire > 0.0);
}

#[test]
fn sci_identite_pythagore_approchee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let rpn = compile("sin(x)^2 + cos(x)^2").unwrap();
    for k in -200..=200 {
        budget(t0, max);
        let x = k as f64 * 0.05;
        let v = eval_rpn(&rpn, x).unwrap();
        assert!((v - 1.0).abs() < 2e-5, "x={x} v={v}");
    }
}

#[test]
fn sci_ln_et_sqrt_coherents() {
    for k in 1..200 {
        let x = k as f64 * 0.37;
        // ln(x²) = 2 ln x (x² exact par exponentiation entière)
        let a = eval_ok("ln(x^2)", x);
        assert!((a - 2.0 * numerique::ln(x)).abs() < 1e-9, "x={x}");
        // sqrt(x)² ≈ x
        let r = eval_ok("sqrt(x) * sqrt(x)", x);
        assert!((r - x).abs() < 1e-9 * x.max(1.0), "x={x} r={r}");
    }
}

#[test]
fn sci_poles_et_sentinelles() {
    assert_eq!(eval_ok("tan(x)", PI / 2.0), SENTINELLE);
    assert_eq!(eval_ok("ctg(x)", 0.0), SENTINELLE);
    assert_eq!(eval_ok("x / (x - 1)", 1.0), SENTINELLE);
    // la sentinelle se propage comme un nombre ordinaire
    assert_eq!(eval_ok("1/0 - 1", 0.0), SENTINELLE - 1.0);
    // sin d’une sentinelle : réduction qui termine
    let s = eval_ok("sin(1/0)", 0.0);
    assert!((-1.0001..=1.0001).contains(&s));
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_idempotence_compilation() {
    for expr in [
        "sin(x)",
        "-x^2 + 3*x - 1",
        "sqrt(ln(x)) / tan(x)",
        "2^3^2 - ctg(x/2)",
        "sin x + 1",
    ] {
        let a = compile(expr).unwrap();
        let b = compile(expr).unwrap();
        assert_eq!(a, b, "expr={expr:?}");
        assert_eq!(a.last(), Some(&Tok::Fin));
    }
}

/* ------------------------ Propriétés (proptest) ------------------------ */

fn expr_bien_formee() -> impl Strategy<Value = String> {
    let feuille = prop_oneof![
        Just("x".to_string()),
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 0u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
    ];

    feuille.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "^"]),
                inner.clone()
            )
                .prop_map(|(a, op, b)| format!("({a}) {op} ({b})")),
            (
                prop::sample::select(vec!["sin", "cos", "tan", "ctg", "sqrt", "ln"]),
                inner.clone()
            )
                .prop_map(|(f, a)| format!("{f}({a})")),
            inner.prop_map(|a| format!("-({a})")),
        ]
    })
}

proptest! {
    #[test]
    fn prop_bien_formee_sans_erreur_structurelle(expr in expr_bien_formee(), x in -50.0f64..50.0) {
        let rpn = compile(&expr);
        prop_assert!(rpn.is_ok(), "expr={:?} err={:?}", expr, rpn);
        let rpn = rpn.unwrap();
        let y = eval_rpn(&rpn, x);
        prop_assert!(y.is_ok(), "expr={:?} x={} err={:?}", expr, x, y);
    }

    #[test]
    fn prop_compilation_deterministe(expr in expr_bien_formee()) {
        prop_assert_eq!(compile(&expr), compile(&expr));
    }

    #[test]
    fn prop_rpn_terminee_par_une_seule_fin(expr in expr_bien_formee()) {
        let rpn = compile(&expr).unwrap();
        prop_assert_eq!(rpn.last(), Some(&Tok::Fin));
        prop_assert_eq!(rpn.iter().filter(|t| **t == Tok::Fin).count(), 1);
    }
}
