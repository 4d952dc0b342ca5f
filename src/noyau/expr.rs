//! Arbre d'expression exact (rationnels) + évaluation.
//!
//! L'évaluation est itérative (pile explicite) : la profondeur de l'arbre
//! dépend de la longueur de l'entrée, pas seulement des parenthèses.

use std::sync::OnceLock;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreur::SyntaxError;

/// Au-delà de 10^308 (≈ plus grand double fini) on parle de dépassement.
pub const EXPOSANT_DEPASSEMENT: u32 = 308;

fn magnitude_max() -> &'static BigRational {
    static MAX: OnceLock<BigRational> = OnceLock::new();
    MAX.get_or_init(|| BigRational::from_integer(BigInt::from(10).pow(EXPOSANT_DEPASSEMENT)))
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(BigRational),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

enum Tache<'a> {
    Visiter(&'a Expr),
    Appliquer(&'a Expr),
}

fn borne(v: BigRational) -> Result<BigRational, SyntaxError> {
    if v.abs() > *magnitude_max() {
        return Err(SyntaxError::Depassement);
    }
    Ok(v)
}

impl Expr {
    /// Valeur exacte de l'expression.
    /// Échoue sur division par zéro ou si une valeur intermédiaire dépasse 10^308.
    pub fn evaluer(&self) -> Result<BigRational, SyntaxError> {
        use Expr::*;

        let mut pile: Vec<Tache<'_>> = vec![Tache::Visiter(self)];
        let mut valeurs: Vec<BigRational> = Vec::new();

        while let Some(t) = pile.pop() {
            match t {
                Tache::Visiter(e) => match e {
                    Nombre(r) => valeurs.push(borne(r.clone())?),
                    Neg(x) => {
                        pile.push(Tache::Appliquer(e));
                        pile.push(Tache::Visiter(x));
                    }
                    Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) => {
                        // a d'abord, b ensuite : b est empilé en premier
                        pile.push(Tache::Appliquer(e));
                        pile.push(Tache::Visiter(b));
                        pile.push(Tache::Visiter(a));
                    }
                },

                Tache::Appliquer(e) => {
                    let v = match e {
                        Neg(_) => {
                            let x = valeurs.pop().ok_or(SyntaxError::OperandeManquant)?;
                            -x
                        }
                        Nombre(_) => continue,
                        _ => {
                            let b = valeurs.pop().ok_or(SyntaxError::OperandeManquant)?;
                            let a = valeurs.pop().ok_or(SyntaxError::OperandeManquant)?;
                            match e {
                                Add(..) => a + b,
                                Sub(..) => a - b,
                                Mul(..) => a * b,
                                _ => {
                                    if b.is_zero() {
                                        return Err(SyntaxError::DivisionParZero);
                                    }
                                    a / b
                                }
                            }
                        }
                    };
                    valeurs.push(borne(v)?);
                }
            }
        }

        match (valeurs.pop(), valeurs.is_empty()) {
            (Some(v), true) => Ok(v),
            _ => Err(SyntaxError::OperandeManquant),
        }
    }
}
