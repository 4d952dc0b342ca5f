//! src/app/historique.rs
//!
//! Historique borné des calculs sauvegardés, le plus récent en tête.
//!
//! Contrats :
//! - capacité fixe (jamais dépassée, même temporairement)
//! - pile pleine : on évince la plus ancienne AVANT d'insérer

use std::collections::VecDeque;

/// Capacité par défaut (les 10 derniers calculs).
pub const CAPACITE_DEFAUT: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entree {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct Historique {
    entrees: VecDeque<Entree>,
    capacite: usize,
}

impl Default for Historique {
    fn default() -> Self {
        Self::new(CAPACITE_DEFAUT)
    }
}

impl Historique {
    /// Capacité bornée à 1 au minimum.
    pub fn new(capacite: usize) -> Self {
        let capacite = capacite.max(1);
        Self {
            entrees: VecDeque::with_capacity(capacite),
            capacite,
        }
    }

    pub fn ajouter(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        if self.entrees.len() == self.capacite {
            self.entrees.pop_back();
        }
        self.entrees.push_front(Entree {
            expression: expression.into(),
            resultat: resultat.into(),
        });
    }

    /// Plus récente d'abord.
    pub fn entrees(&self) -> impl Iterator<Item = &Entree> {
        self.entrees.iter()
    }

    pub fn get(&self, i: usize) -> Option<&Entree> {
        self.entrees.get(i)
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }
}
