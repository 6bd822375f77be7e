// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : expression en cours + résultat, relus après chaque touche
// - Tactile : gros boutons, pavé 4 colonnes
//
// Note :
// - La vue ne décide RIEN : chaque bouton émet une Touche, le moteur
//   applique (ou ignore) et la paire d’affichage est relue.

use eframe::egui;

use crate::noyau::Touche;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice Tactile");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let (expression, resultat) = self.affichage();

        ui.label("Expression :");
        Self::champ_monospace(ui, "ecran_expression", &expression, 1);

        ui.add_space(6.0);

        ui.label("Résultat :");
        Self::champ_monospace(ui, "ecran_resultat", &resultat, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        // On garde un cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_tactile")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "Tout effacer", Touche::Clear);
                self.bouton(ui, "±", "Bascule de signe", Touche::Signe);
                self.bouton(ui, "%", "Pourcentage", Touche::Pourcent);
                self.bouton(ui, "/", "Division", Touche::Operateur('/'));
                ui.end_row();

                self.bouton_chiffre(ui, '7');
                self.bouton_chiffre(ui, '8');
                self.bouton_chiffre(ui, '9');
                self.bouton(ui, "*", "Multiplication", Touche::Operateur('*'));
                ui.end_row();

                self.bouton_chiffre(ui, '4');
                self.bouton_chiffre(ui, '5');
                self.bouton_chiffre(ui, '6');
                self.bouton(ui, "-", "Soustraction", Touche::Operateur('-'));
                ui.end_row();

                self.bouton_chiffre(ui, '1');
                self.bouton_chiffre(ui, '2');
                self.bouton_chiffre(ui, '3');
                self.bouton(ui, "+", "Addition", Touche::Operateur('+'));
                ui.end_row();

                self.bouton_chiffre(ui, '0');
                self.bouton(ui, ".", "Point décimal", Touche::Decimale);
                self.bouton(ui, "DEL", "Efface le dernier symbole", Touche::Backspace);
                self.bouton(ui, "=", "Évalue l’expression", Touche::Egal);
                ui.end_row();
            });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        self.bouton(ui, &c.to_string(), "", Touche::Chiffre(c));
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let mut resp = ui.add_sized([56.0, 36.0], egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }

        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
