//! Erreurs du noyau.
//!
//! Deux niveaux :
//! - `SyntaxError` : cause précise (utile pour les journaux et les tests)
//! - `EvalError`   : ce que voit l'appelant (Empty / Syntax / TooSmall)
//!
//! Côté affichage, toutes les causes de `Syntax` se confondent en "?".

use thiserror::Error;

/// Cause précise d'un échec de validation, de nettoyage ou d'évaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("entrée vide")]
    Vide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInterdit(char),

    #[error("parenthèses non équilibrées ({ouvrantes} '(' pour {fermantes} ')')")]
    ParenthesesDesequilibrees { ouvrantes: usize, fermantes: usize },

    #[error("suite d'opérateurs invalide: {0:?}")]
    SuiteOperateurs(String),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("jeton inattendu: {0}")]
    JetonInattendu(String),

    #[error("opérande manquant")]
    OperandeManquant,

    #[error("parenthèses mal ordonnées")]
    ParenthesesMalOrdonnees,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("dépassement de capacité")]
    Depassement,
}

/// Échec visible par l'appelant de `evaluate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Rien à évaluer (l'UI affiche "0").
    #[error("entrée vide")]
    Empty,

    /// Toute faute de syntaxe ou d'arithmétique (l'UI affiche "?").
    #[error("erreur de syntaxe: {0}")]
    Syntax(#[from] SyntaxError),

    /// Résultat non nul sous le seuil d'affichage (1e-8).
    #[error("résultat trop petit")]
    TooSmall,
}
