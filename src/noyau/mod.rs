//! Noyau d'évaluation
//!
//! Organisation interne :
//! - porte.rs      : filtre des frappes (+ glyphes × ÷)
//! - validation.rs : contrôle structurel grossier
//! - normalise.rs  : nettoyage + multiplication implicite
//! - jetons.rs     : tokenisation (décimaux exacts)
//! - rpn.rs        : shunting-yard + construction Expr
//! - expr.rs       : arbre + évaluation exacte (itérative)
//! - format.rs     : politique d'affichage (8 décimales, seuil 1e-8)
//! - eval.rs       : pipeline complet
//! - saisie.rs     : insertion du point décimal pendant la frappe
//! - erreur.rs     : erreurs typées

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod porte;
pub mod rpn;
pub mod saisie;
pub mod validation;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API utilisée par l'app et la ligne de commande
pub use eval::{evaluate, Evaluation};
pub use porte::{filtrer, is_allowed};
pub use saisie::insert_decimal;
pub use validation::is_well_formed;
