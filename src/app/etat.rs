//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, affichage, historique,
//! échéance du débounce) et offrir les actions des boutons (Clear/Save/Recall).
//!
//! Contrats :
//! - Toute frappe passe par la porte (noyau::porte) avant d’entrer dans l’entrée.
//! - L’évaluation en direct n’a lieu qu’après le délai de débounce.
//! - Le temps est fourni par l’appelant (horloge egui) : état testable sans fenêtre.

use tracing::{debug, info};

use super::historique::Historique;
use crate::config::Reglages;
use crate::noyau::eval::AFFICHAGE_VIDE;
use crate::noyau::porte::canonique;
use crate::noyau::{evaluate, filtrer, insert_decimal, is_allowed};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,
    // position du curseur dans l’entrée (en caractères)
    pub curseur: usize,

    // --- sortie ---
    pub affichage: String, // "0" au départ / entrée vide, "?" sur erreur

    // --- mémoire ---
    pub historique: Historique,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
    pub rappel_ouvert: bool,
    // vrai quand `curseur` a bougé côté état et doit être reposé dans le widget
    pub curseur_a_poser: bool,

    // instant (secondes, horloge egui) où l’évaluation en direct doit partir
    echeance: Option<f64>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            entree: String::new(),
            curseur: 0,
            affichage: AFFICHAGE_VIDE.to_string(),
            historique: Historique::new(reglages.capacite_historique),
            reglages,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
            rappel_ouvert: false,
            curseur_a_poser: false,
            echeance: None,
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// Frappe d’un caractère (bouton) au curseur, qui avance d’autant.
    /// Le point décimal passe par `insert_decimal` ; la longueur max est respectée.
    pub fn inserer(&mut self, c: char, maintenant: f64) {
        if !is_allowed(c) {
            return;
        }

        let avant = self.entree.chars().count();
        let curseur = self.curseur.min(avant);

        let nouveau = match canonique(c) {
            '.' => insert_decimal(&self.entree, curseur),
            c => {
                let octet = self
                    .entree
                    .char_indices()
                    .nth(curseur)
                    .map_or(self.entree.len(), |(i, _)| i);
                let mut s = self.entree.clone();
                s.insert(octet, c);
                s
            }
        };

        let apres = nouveau.chars().count();
        if nouveau == self.entree || apres > self.reglages.longueur_max {
            return;
        }

        self.entree = nouveau;
        self.poser_curseur(curseur + (apres - avant));
        self.saisie_modifiee(maintenant);
        self.focus_entree = true;
    }

    /// Déplace le curseur (borné à l’entrée) ; la vue le reporte dans le widget.
    pub fn poser_curseur(&mut self, curseur: usize) {
        self.curseur = curseur.min(self.entree.chars().count());
        self.curseur_a_poser = true;
    }

    /// Après une édition directe du champ (clavier, collage) : repasse la porte.
    pub fn entree_editee(&mut self, maintenant: f64) {
        let mut propre = filtrer(&self.entree);
        if let Some((i, _)) = propre.char_indices().nth(self.reglages.longueur_max) {
            propre.truncate(i);
        }
        self.entree = propre;
        self.curseur = self.curseur.min(self.entree.chars().count());
        self.saisie_modifiee(maintenant);
    }

    /// Reporte l’évaluation en direct à `maintenant + débounce`.
    pub fn saisie_modifiee(&mut self, maintenant: f64) {
        self.echeance = Some(maintenant + self.reglages.debounce_s());
    }

    /* ------------------------ Débounce ------------------------ */

    /// Temps restant avant l’évaluation en direct (None si rien en attente).
    pub fn attente(&self, maintenant: f64) -> Option<f64> {
        self.echeance.map(|t| (t - maintenant).max(0.0))
    }

    /// Évalue si l’échéance est passée. Renvoie vrai si l’affichage a été recalculé.
    pub fn tick(&mut self, maintenant: f64) -> bool {
        match self.echeance {
            Some(t) if maintenant >= t => {
                self.calculer();
                true
            }
            _ => false,
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Évaluation immédiate (Enter / "=").
    pub fn calculer(&mut self) {
        self.echeance = None;
        self.affichage = evaluate(&self.entree).affichage().to_string();
    }

    /// Clear : entrée vidée, affichage "0".
    pub fn reinitialiser(&mut self) {
        self.entree.clear();
        self.poser_curseur(0);
        self.affichage = AFFICHAGE_VIDE.to_string();
        self.echeance = None;
        self.rappel_ouvert = false;
        self.focus_entree = true;
    }

    /// Save : range (expression, affichage) dans l’historique.
    /// Ignoré si l’expression est vide ou si l’affichage vaut "0".
    pub fn sauvegarder(&mut self) {
        self.calculer();

        let expression = self.entree.trim();
        if expression.is_empty() || self.affichage == AFFICHAGE_VIDE {
            debug!(expression, "sauvegarde ignorée");
            return;
        }

        info!(expression, resultat = %self.affichage, "calcul sauvegardé");
        self.historique
            .ajouter(expression.to_string(), self.affichage.clone());
        self.focus_entree = true;
    }

    /// Recall : recharge l’expression n° `i` (0 = plus récente).
    pub fn rappeler(&mut self, i: usize) {
        let Some(e) = self.historique.get(i) else {
            return;
        };
        info!(expression = %e.expression, "calcul rappelé");
        self.entree = e.expression.clone();
        self.poser_curseur(usize::MAX);
        self.calculer();
        self.rappel_ouvert = false;
        self.focus_entree = true;
    }
}
