// src/config.rs
//
// Réglages de l'application.
// - Reglages : valeurs utilisées par l'UI (natif + web)
// - Args     : ligne de commande (natif seulement), convertie en Reglages

use crate::app::historique::CAPACITE_DEFAUT;

/// Délai entre la dernière frappe et l'évaluation en direct.
pub const DEBOUNCE_MS_DEFAUT: u64 = 100;

/// Longueur maximale du champ d'entrée.
pub const LONGUEUR_MAX_DEFAUT: usize = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub debounce_ms: u64,
    pub capacite_historique: usize,
    pub longueur_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS_DEFAUT,
            capacite_historique: CAPACITE_DEFAUT,
            longueur_max: LONGUEUR_MAX_DEFAUT,
        }
    }
}

impl Reglages {
    /// Délai en secondes (horloge egui).
    pub fn debounce_s(&self) -> f64 {
        self.debounce_ms as f64 / 1000.0
    }
}

/// Calculatrice — évaluation en direct, historique des 10 derniers calculs
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "calculatrice")]
#[command(about = "Calculatrice (+ - * / et parenthèses)", long_about = None)]
pub struct Args {
    /// Évalue l'expression, affiche le résultat et quitte (sans fenêtre).
    /// Code 0 : valeur, 1 : calcul refusé, 2 : expression mal formée
    #[arg(short, long)]
    pub expr: Option<String>,

    /// Délai avant l'évaluation en direct, en millisecondes
    #[arg(long, default_value_t = DEBOUNCE_MS_DEFAUT)]
    pub debounce_ms: u64,

    /// Nombre de calculs gardés dans l'historique
    #[arg(long, default_value_t = CAPACITE_DEFAUT)]
    pub historique: usize,

    /// Journaux détaillés (équivaut à RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(not(target_arch = "wasm32"))]
impl From<&Args> for Reglages {
    fn from(args: &Args) -> Self {
        Self {
            debounce_ms: args.debounce_ms,
            capacite_historique: args.historique.max(1),
            ..Self::default()
        }
    }
}
