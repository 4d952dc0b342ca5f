// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, Escape efface (géré dans app.rs)
// - Évaluation en direct après le débounce (repaint programmé)
// - Pavé : Clear / Save / Recall + chiffres + opérateurs (× ÷ affichés)
// - Les touches du pavé écrivent au curseur du champ (lu puis reposé via TextEditState)

use std::time::Duration;

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::porte::{GLYPHE_DIVISE, GLYPHE_FOIS};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let maintenant = ui.input(|i| i.time);

        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        let id_entree = self.ui_entree(ui, maintenant);

        ui.add_space(8.0);
        self.ui_resultat(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui, maintenant);

        if self.rappel_ouvert {
            ui.add_space(8.0);
            self.ui_rappel(ui);
        }

        self.reporter_curseur(ui.ctx(), id_entree);

        // Débounce : évalue si l’échéance est passée, sinon on se réveille à temps.
        let maintenant = ui.input(|i| i.time);
        self.tick(maintenant);
        if let Some(reste) = self.attente(maintenant) {
            ui.ctx()
                .request_repaint_after(Duration::from_secs_f64(reste));
        }
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui, maintenant: f64) -> egui::Id {
        ui.label("Expression :");

        // IMPORTANT : id stable + focus contrôlé
        let sortie = egui::TextEdit::singleline(&mut self.entree)
            .desired_width(ui.available_width())
            .char_limit(self.reglages.longueur_max)
            .hint_text("Ex: (2 + 3) × 4")
            .id_salt("entree_edit")
            .font(egui::TextStyle::Monospace)
            .show(ui);
        let resp = sortie.response;

        // Curseur du widget -> état (sauf si l’état vient de le déplacer)
        if !self.curseur_a_poser {
            if let Some(r) = sortie.state.cursor.char_range() {
                self.curseur = r.primary.index;
            }
        }

        if resp.changed() {
            self.entree_editee(maintenant);
        }

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (singleline => le champ perd le focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.calculer();
            self.focus_entree = true;
        }

        resp.id
    }

    /// État -> widget : repose le curseur après une frappe au pavé, Clear ou Recall.
    fn reporter_curseur(&mut self, ctx: &egui::Context, id: egui::Id) {
        if !self.curseur_a_poser {
            return;
        }
        self.curseur_a_poser = false;

        let mut etat = egui::TextEdit::load_state(ctx, id).unwrap_or_default();
        let c = egui::text::CCursor::new(self.curseur);
        etat.cursor.set_char_range(Some(egui::text::CCursorRange::one(c)));
        etat.store(ctx, id);
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");

        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(egui::RichText::new(&self.affichage).size(18.0));
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let fois = GLYPHE_FOIS.to_string();
        let divise = GLYPHE_DIVISE.to_string();

        let lignes: [[&str; 4]; 5] = [
            ["Clear", "Save", "Recall", "+"],
            ["7", "8", "9", "-"],
            ["4", "5", "6", &fois],
            ["1", "2", "3", &divise],
            ["0", ".", "(", ")"],
        ];

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in lignes {
                    for label in ligne {
                        self.bouton(ui, label, maintenant);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, maintenant: f64) {
        let resp = ui.add_sized([72.0, 44.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match label {
            "Clear" => self.reinitialiser(),
            "Save" => self.sauvegarder(),
            "Recall" => {
                self.rappel_ouvert = !self.rappel_ouvert && !self.historique.is_empty();
            }
            _ => {
                // un seul caractère par touche ; la porte traduit × et ÷
                for c in label.chars() {
                    self.inserer(c, maintenant);
                }
            }
        }
        self.focus_entree = true;
    }

    fn ui_rappel(&mut self, ui: &mut egui::Ui) {
        let mut choisi = None;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(format!(
                "Rappeler un calcul ({}/{}) :",
                self.historique.len(),
                self.historique.capacite()
            ));
            for (i, e) in self.historique.entrees().enumerate() {
                let texte = format!("{} = {}", e.expression, e.resultat);
                if ui.button(egui::RichText::new(texte).monospace()).clicked() {
                    choisi = Some(i);
                }
            }
        });

        if let Some(i) = choisi {
            self.rappeler(i);
        }
    }
}
