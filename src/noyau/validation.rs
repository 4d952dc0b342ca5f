// src/noyau/validation.rs
//
// Contrôle structurel grossier, avant tout nettoyage :
// - pas vide / pas que des espaces
// - alphabet d'évaluation seulement
// - autant de '(' que de ')'
//
// NOTE: l'ordre des parenthèses n'est PAS vérifié ici (")2+3(" passe).
// C'est le parseur (rpn.rs) qui rejette ces cas.

use super::erreur::SyntaxError;
use super::porte::dans_alphabet;

/// Version typée : donne la cause du refus.
pub fn verifier(expr: &str) -> Result<(), SyntaxError> {
    if expr.trim().is_empty() {
        return Err(SyntaxError::Vide);
    }

    if let Some(c) = expr.chars().find(|&c| !dans_alphabet(c)) {
        return Err(SyntaxError::CaractereInterdit(c));
    }

    let ouvrantes = expr.chars().filter(|&c| c == '(').count();
    let fermantes = expr.chars().filter(|&c| c == ')').count();
    if ouvrantes != fermantes {
        return Err(SyntaxError::ParenthesesDesequilibrees {
            ouvrantes,
            fermantes,
        });
    }

    Ok(())
}

pub fn is_well_formed(expr: &str) -> bool {
    verifier(expr).is_ok()
}
