//! src/noyau/moteur.rs
//!
//! Machine à états de la calculatrice (le “moteur”).
//!
//! Rôle : contenir l’expression en cours et le dernier résultat,
//! et offrir les opérations déclenchées par les touches (chiffre,
//! opérateur, point, effacement, soumission, signe, pourcentage).
//!
//! Contrats :
//! - Aucune touche ne panique ; une touche illégale est ignorée.
//! - Le résultat est stocké en NUMÉRIQUE (rationnel) ; le texte n’est
//!   produit qu’à la frontière d’affichage.
//! - Invariants de l’expression : jamais deux opérateurs adjacents
//!   (hors signe de tête), jamais deux points dans le même nombre.

use num_bigint::BigInt;
use num_rational::BigRational;

use super::eval::eval_valeur;
use super::format::{arrondir_affichage, decimal_exact};

const OPERATEURS: [char; 4] = ['+', '-', '*', '/'];

/// Touche logique du pavé (la vue ne connaît que ça).
#[derive(Clone, Copy, Debug)]
pub enum Touche {
    Chiffre(char),
    Operateur(char),
    Decimale,
    Clear,
    Backspace,
    Egal,
    Signe,
    Pourcent,
}

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    // --- entrée utilisateur ---
    expression: String,

    // --- dernier résultat calculé (None = rien / évaluation invalide) ---
    resultat: Option<BigRational>,
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Dispatch ------------------------ */

    /// Applique une touche selon la politique d’aiguillage :
    /// - chiffre : démarre une expression neuve (résultat effacé si
    ///   l’expression était vide), puis ajout brut
    /// - opérateur : reprise du résultat si expression vide, ajout si
    ///   la fin est un chiffre, ignoré sinon
    /// - point : garde de segment (un seul point par nombre)
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => {
                if self.expression.is_empty() {
                    // expression neuve : l’ancien résultat ne s’applique plus
                    self.resultat = None;
                }
                self.ajouter_valeur(c);
            }

            Touche::Operateur(op) => {
                if self.expression.is_empty() {
                    if self.resultat.is_some() {
                        self.reprendre_du_resultat(op);
                    }
                    // expression ET résultat vides : rien à enchaîner
                } else if !self.termine_par_operateur() {
                    self.ajouter_valeur(op);
                }
                // fin déjà sur un opérateur : touche ignorée
            }

            Touche::Decimale => self.ajouter_decimale(),
            Touche::Clear => self.reset_total(),
            Touche::Backspace => self.backspace(),
            Touche::Egal => self.soumettre(),
            Touche::Signe => self.basculer_signe(),
            Touche::Pourcent => self.pourcentage(),
        }
    }

    /// Paire d’affichage (expression, résultat) — recalculée à chaque appel.
    pub fn affichage(&self) -> (String, String) {
        let resultat = self
            .resultat
            .as_ref()
            .map(decimal_exact)
            .unwrap_or_default();
        (self.expression.clone(), resultat)
    }

    /* ------------------------ Opérations primitives ------------------------ */

    /// Ajout brut d’un chiffre ou d’un opérateur.
    /// La légalité des opérateurs est vérifiée par l’aiguillage, pas ici.
    pub fn ajouter_valeur(&mut self, c: char) {
        self.expression.push(c);
    }

    /// Ajoute un point décimal si et seulement si :
    /// - la fin de l’expression est un chiffre (ou l’expression est vide)
    /// - le segment actif (après le dernier opérateur) n’a pas déjà de point
    pub fn ajouter_decimale(&mut self) {
        if let Some(c) = self.expression.chars().last() {
            if !c.is_ascii_digit() {
                return;
            }
        }

        // segment actif : après le dernier opérateur
        // (un '-' de tête compte comme opérateur ici : le segment reste le nombre)
        let debut = self
            .expression
            .rfind(&OPERATEURS[..])
            .map_or(0, |i| i + 1);
        if self.expression[debut..].contains('.') {
            return;
        }

        self.expression.push('.');
    }

    /// Remise à zéro totale (expression + résultat).
    pub fn reset_total(&mut self) {
        self.expression.clear();
        self.resultat = None;
    }

    /// Retire le dernier caractère ; sans effet sur une expression vide.
    pub fn backspace(&mut self) {
        self.expression.pop();
    }

    /// Vrai si la fin de l’expression n’est pas un chiffre.
    /// (Un point final compte donc comme “opérateur” : il bloque l’ajout.)
    pub fn termine_par_operateur(&self) -> bool {
        self.expression
            .chars()
            .last()
            .map_or(true, |c| !c.is_ascii_digit())
    }

    /// Repart du résultat affiché : expression = "résultat + opérateur".
    pub fn reprendre_du_resultat(&mut self, op: char) {
        if let Some(r) = &self.resultat {
            self.expression = format!("{}{op}", decimal_exact(r));
        }
    }

    /// Évalue l’expression, dépose le résultat arrondi, vide l’expression.
    /// Toute erreur (entrée vide, malformée, division par zéro) => résultat vide.
    pub fn soumettre(&mut self) {
        self.resultat = eval_valeur(&self.expression)
            .ok()
            .map(|v| arrondir_affichage(&v));
        self.expression.clear();
    }

    /// Bascule de signe, trois branches exclusives :
    /// 1) expression vide + résultat présent => négation numérique du résultat
    /// 2) expression sans '-' de tête        => préfixe '-'
    /// 3) expression avec '-' de tête        => retrait du '-'
    pub fn basculer_signe(&mut self) {
        if self.expression.is_empty() {
            if let Some(r) = self.resultat.take() {
                self.resultat = Some(-r);
            }
        } else if let Some(reste) = self.expression.strip_prefix('-') {
            self.expression = reste.to_string();
        } else {
            self.expression.insert(0, '-');
        }
    }

    /// Conversion en pourcentage :
    /// - expression non vide => évaluation puis résultat/100, expression vidée
    ///   (échec d’évaluation => résultat vide)
    /// - expression vide + résultat présent => résultat/100 sur place
    pub fn pourcentage(&mut self) {
        let cent = BigRational::from_integer(BigInt::from(100));

        if !self.expression.is_empty() {
            self.resultat = eval_valeur(&self.expression)
                .ok()
                .map(|v| arrondir_affichage(&v) / &cent);
            self.expression.clear();
        } else if let Some(r) = self.resultat.take() {
            self.resultat = Some(r / &cent);
        }
    }
}
