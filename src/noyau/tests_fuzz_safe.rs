//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : evaluate ne panique jamais et reste déterministe

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::erreur::{EvalError, SyntaxError};
use super::{evaluate, insert_decimal, Evaluation};

/* ------------------------ Journaux (optionnels) ------------------------ */

/// RUST_LOG=trace cargo test -- --nocapture  => démarche de chaque évaluation
fn init_test_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filtre)
        .with_test_writer()
        .try_init();
}

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(10);
    if rng.coin() {
        format!("{entier}.{}", rng.pick(1000))
    } else {
        format!("{entier}")
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 => format!("({a} + {b})"),
        2 => format!("({a} - {b})"),
        3 => format!("({a} * {b})"),
        4 => format!("({a} / {b})"),
        5 => format!("-({a})"),
        _ => format!("({a})({b})"),
    }
}

/// Bruit : caractères de l'alphabet dans le désordre.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '9', '+', '-', '*', '/', '.', '(', ')', ' ',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    init_test_logging();
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        match evaluate(&expr) {
            Evaluation::Numeric(v) => {
                let decimales = v.split_once('.').map_or(0, |(_, f)| f.len());
                assert!(decimales <= 8, "expr={expr:?} -> {v:?}");
                seen_ok += 1;
            }
            Evaluation::Error(e) => {
                // seules erreurs possibles sur une expression bien formée
                assert!(
                    matches!(
                        e,
                        EvalError::TooSmall
                            | EvalError::Syntax(SyntaxError::DivisionParZero)
                    ),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let len = 1 + rng.pick(20) as usize;
        let expr = gen_bruit(&mut rng, len);

        // déterminisme : deux appels, même résultat
        let a = evaluate(&expr);
        let b = evaluate(&expr);
        assert_eq!(a, b, "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_saisie_point() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        let len = rng.pick(12) as usize;
        let texte = gen_bruit(&mut rng, len).replace(' ', "");
        let curseur = rng.pick(len as u32 + 2) as usize;

        let apres = insert_decimal(&texte, curseur);

        // soit inchangé, soit exactement "." ou "0." de plus
        let ajout = apres.chars().count() - texte.chars().count();
        assert!(ajout <= 2, "texte={texte:?} curseur={curseur} -> {apres:?}");
    }
}

#[test]
fn fuzz_safe_longue_somme_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // 1+1+...+1 : arbre penché, évalué sans récursion
    let expr = vec!["1"; 1500].join("+");
    let r = evaluate(&expr);
    budget(t0, max);

    assert_eq!(r, Evaluation::Numeric("1500".into()));
}
