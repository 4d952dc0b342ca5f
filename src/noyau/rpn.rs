// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr (sans récursion)
//
// Règles:
// - + - : précédence 1, * / : précédence 2, gauche -> droite
// - Moins unaire (Tok::Neg) : précédence 3, préfixe, associatif à droite.
//   Un '-' est unaire quand on attend une valeur : début, après un opérateur, après '('.
// - Pas de plus unaire : "+3" et "2*+3" sont refusés.
//
// NOTE:
// - L'ordre des parenthèses est vérifié ICI (la validation ne fait que compter).

use super::erreur::SyntaxError;
use super::expr::Expr;
use super::jetons::{format_tokens, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, Num(3)]
///   rpn:    [Num(2), Num(3), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, SyntaxError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // Vrai tant qu'on attend un opérande (début, après opérateur, après '(').
    // Sert à détecter le moins unaire et les opérandes manquants.
    let mut attend_valeur = true;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(..) => {
                if !attend_valeur {
                    return Err(SyntaxError::JetonInattendu(format_tokens(&[tok])));
                }
                out.push(tok);
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(SyntaxError::JetonInattendu("(".into()));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if !ops.iter().any(|t| matches!(t, Tok::LPar)) {
                    return Err(SyntaxError::ParenthesesMalOrdonnees);
                }
                if attend_valeur {
                    return Err(SyntaxError::OperandeManquant);
                }

                // dépile jusqu’à '(' ; pile vide => ')' avant son '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(SyntaxError::ParenthesesMalOrdonnees),
                    }
                }
            }

            Tok::Minus if attend_valeur => {
                // préfixe : ne dépile rien
                ops.push(Tok::Neg);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if attend_valeur {
                    return Err(SyntaxError::OperandeManquant);
                }

                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }

                ops.push(tok);
                attend_valeur = true;
            }

            Tok::Neg => return Err(SyntaxError::JetonInattendu("neg".into())),
        }
    }

    if attend_valeur {
        return Err(SyntaxError::OperandeManquant);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(SyntaxError::ParenthesesMalOrdonnees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, SyntaxError> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(r, _) => st.push(Expr::Nombre(r)),

            Tok::Neg => {
                let x = st.pop().ok_or(SyntaxError::OperandeManquant)?;
                st.push(Expr::Neg(Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(SyntaxError::OperandeManquant)?;
                let a = st.pop().ok_or(SyntaxError::OperandeManquant)?;

                let e = match tok {
                    Tok::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Tok::Minus => Expr::Sub(Box::new(a), Box::new(b)),
                    Tok::Star => Expr::Mul(Box::new(a), Box::new(b)),
                    _ => Expr::Div(Box::new(a), Box::new(b)),
                };

                st.push(e);
            }

            Tok::LPar | Tok::RPar => return Err(SyntaxError::ParenthesesMalOrdonnees),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(e), true) => Ok(e),
        _ => Err(SyntaxError::OperandeManquant),
    }
}
