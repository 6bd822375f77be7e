// src/app.rs
//
// Calculatrice Tactile — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Pas de TextEdit dans cette vue (saisie 100% boutons), donc les
//   raccourcis clavier globaux sont sans conflit de focus :
//   ESC = tout effacer, Enter = "=", Backspace = DEL.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (esc, enter, backspace) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });

        if esc {
            self.appuyer(Touche::Clear);
        }
        if enter {
            self.appuyer(Touche::Egal);
        }
        if backspace {
            self.appuyer(Touche::Backspace);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
