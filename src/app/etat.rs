//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur de la session et relayer les touches.
//! Toute la logique (aiguillage, gardes, évaluation) vit dans le noyau ;
//! ici rien d’autre que la frontière vue <-> moteur.

use crate::noyau::{Moteur, Touche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    moteur: Moteur,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(),
        }
    }
}

impl AppCalc {
    /// Relaye une touche au moteur.
    pub fn appuyer(&mut self, touche: Touche) {
        self.moteur.appuyer(touche);
    }

    /// Paire d’affichage (expression, résultat) pour la vue.
    pub fn affichage(&self) -> (String, String) {
        self.moteur.affichage()
    }
}
