//! Tests de propriétés (campagne) : précédence, formatage, seuils, robustesse.
//!
//! Chaque bloc vérifie un contrat observable de `evaluate` ou d'une étape
//! du pipeline, sur des exemples choisis à la main.

use pretty_assertions::assert_eq;

use super::erreur::{EvalError, SyntaxError};
use super::{evaluate, insert_decimal, is_well_formed, Evaluation};

fn eval_ok(expr: &str) -> String {
    match evaluate(expr) {
        Evaluation::Numeric(v) => v,
        Evaluation::Error(e) => panic!("expr={expr:?} err={e}"),
    }
}

fn assert_echec(expr: &str) {
    assert!(
        !evaluate(expr).is_numeric(),
        "expr={expr:?} devait échouer"
    );
}

fn assert_syntaxe(expr: &str) {
    assert!(
        matches!(evaluate(expr), Evaluation::Error(EvalError::Syntax(_))),
        "expr={expr:?} devait être une erreur de syntaxe"
    );
}

/* ------------------------ Précédence + associativité ------------------------ */

#[test]
fn prop_precedence_standard() {
    assert_eq!(eval_ok("2 + 3 * 4"), "14");
    assert_eq!(eval_ok("10 - 6 / 2"), "7");
    assert_eq!(eval_ok("2 * 3 + 4 * 5"), "26");
}

#[test]
fn prop_associativite_gauche() {
    assert_eq!(eval_ok("10 - 4 - 3"), "3");
    assert_eq!(eval_ok("64 / 4 / 2"), "8");
    assert_eq!(eval_ok("2 - 3 + 4"), "3");
    assert_eq!(eval_ok("12 / 3 * 2"), "8");
}

#[test]
fn prop_parentheses_priment() {
    assert_eq!(eval_ok("(2 + 3) * 4"), "20");
    assert_eq!(eval_ok("10 - (6 - 2)"), "6");
    assert_eq!(eval_ok("((((1))))"), "1");
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn prop_moins_unaire_positions() {
    assert_eq!(eval_ok("-5"), "-5");
    assert_eq!(eval_ok("3 * -2"), "-6");
    assert_eq!(eval_ok("(-2) * (-3)"), "6");
    assert_eq!(eval_ok("-(2 + 3)"), "-5");
    assert_eq!(eval_ok("-2 * 3"), "-6");
}

#[test]
fn prop_double_moins() {
    // "--" = soustraire un négatif
    assert_eq!(eval_ok("5--3"), "8");
    assert_eq!(eval_ok("5 - -3"), "8");
    assert_eq!(eval_ok("--4"), "4");
    // trois '-' : refusé par le nettoyage
    assert_syntaxe("5---3");
}

#[test]
fn prop_pas_de_plus_unaire() {
    assert_syntaxe("+3");
    assert_syntaxe("2 * +3");
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn prop_division_par_zero() {
    assert_syntaxe("5 / 0");
    assert_syntaxe("0 / 0");
    assert_syntaxe("1 / (2 - 2)");
    assert_syntaxe("1 / 0.0");
}

/* ------------------------ Formatage ------------------------ */

#[test]
fn prop_formatage_huit_decimales() {
    assert_eq!(eval_ok("3.14159 * 2"), "6.28318");
    assert_eq!(eval_ok("2.5 + 1.5"), "4");

    let tiers = eval_ok("1 / 3");
    let decimales = tiers.split_once('.').map_or(0, |(_, f)| f.len());
    assert!(decimales <= 8, "{tiers:?}");
    assert_eq!(tiers, "0.33333333");
}

#[test]
fn prop_pas_de_zero_final() {
    for expr in ["0.5 * 2", "1.10 + 0", "0.25 * 4", "100 / 10"] {
        let v = eval_ok(expr);
        assert!(
            !v.ends_with('.') && !(v.contains('.') && v.ends_with('0')),
            "expr={expr:?} -> {v:?}"
        );
    }
}

#[test]
fn prop_grands_nombres() {
    assert_eq!(eval_ok("1000000 * 1000000000"), "1000000000000000");
    assert_eq!(eval_ok("99999999999999999999 + 1"), "100000000000000000000");
}

/* ------------------------ Seuils ------------------------ */

#[test]
fn prop_trop_petit() {
    assert_eq!(evaluate("0.000000001"), Evaluation::Error(EvalError::TooSmall));
    assert_eq!(
        evaluate("1 / 1000000000"),
        Evaluation::Error(EvalError::TooSmall)
    );
    assert_eq!(
        evaluate("-1 / 1000000000"),
        Evaluation::Error(EvalError::TooSmall)
    );
    // exactement 1e-8 : affichable
    assert_eq!(eval_ok("1 / 100000000"), "0.00000001");
    // zéro n'est pas "trop petit"
    assert_eq!(eval_ok("0.000000001 - 0.000000001"), "0");
}

#[test]
fn prop_depassement() {
    let mut s = String::from("1");
    for _ in 0..40 {
        s.push_str("*10000000000");
    }
    assert_eq!(
        evaluate(&s),
        Evaluation::Error(EvalError::Syntax(SyntaxError::Depassement))
    );
}

/* ------------------------ Entrées malformées ------------------------ */

#[test]
fn prop_entrees_malformees() {
    assert_eq!(evaluate(""), Evaluation::Error(EvalError::Empty));
    assert_eq!(evaluate("   "), Evaluation::Error(EvalError::Empty));
    for expr in ["2 +", "* 3", "2 ++ 3", "()", "1.2.3", ".", "2 + a", "(2 + 3"] {
        assert_echec(expr);
    }
}

#[test]
fn prop_parentheses_comptees_puis_ordonnees() {
    // passe la validation (comptage) ...
    assert!(is_well_formed(")2+3("));
    assert!(is_well_formed(")("));
    // ... mais échoue au parseur
    assert_syntaxe(")2+3(");
    assert_syntaxe(")(");
}

/* ------------------------ Multiplication implicite ------------------------ */

#[test]
fn prop_multiplication_implicite() {
    assert_eq!(eval_ok("2(3)"), eval_ok("2*(3)"));
    assert_eq!(eval_ok("2(3)"), "6");
    assert_eq!(eval_ok("(2)(3)"), "6");
    assert_eq!(eval_ok("(1 + 1)2"), "4");
    assert_eq!(eval_ok("2(3 + 4)(1 + 1)"), "28");
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn prop_idempotence() {
    for expr in ["1/3", "2 + 3 * 4", "5/0", "", "0.000000001", "2(3)"] {
        let a = evaluate(expr);
        let b = evaluate(expr);
        assert_eq!(a, b, "expr={expr:?}");
    }
}

/* ------------------------ Saisie du point ------------------------ */

#[test]
fn prop_saisie_un_point_par_nombre() {
    // frappe répétée : jamais deux points dans un même nombre
    let mut t = String::from("12");
    for _ in 0..3 {
        t = insert_decimal(&t, t.chars().count());
    }
    assert_eq!(t, "12.");

    let mut t = String::from("1+");
    for _ in 0..3 {
        t = insert_decimal(&t, t.chars().count());
    }
    assert_eq!(t, "1+0.");
}

#[test]
fn prop_saisie_resultat_evaluable() {
    let t = insert_decimal("3*", 2);
    let t = format!("{t}5");
    assert_eq!(t, "3*0.5");
    assert_eq!(eval_ok(&t), "1.5");
}
