//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> Expr -> valeur exacte -> arrondi d’affichage
//!
//! Remarque : l’entrée vide est une ERREUR (pas un zéro implicite) ;
//! le moteur la traduit en résultat vide, jamais en panique.

use num_rational::BigRational;

use super::format::{arrondir_affichage, decimal_exact};
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};

/// Évalue une expression et retourne sa valeur exacte (rationnelle).
pub fn eval_valeur(expr_str: &str) -> Result<BigRational, String> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err("Entrée vide".into());
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) AST (Expr)
    let expr = from_rpn(&rpn)?;

    // 4) Valeur exacte
    expr.evaluer()
}

/// API publique : évalue puis applique la règle d’affichage
/// (10 décimales sous 1, 2 décimales au-delà, zéros finaux coupés).
pub fn eval_expression(expr_str: &str) -> Result<String, String> {
    let v = eval_valeur(expr_str)?;
    Ok(decimal_exact(&arrondir_affichage(&v)))
}

#[cfg(test)]
mod tests {
    use super::{eval_expression, eval_valeur};

    fn ok_txt(s: &str) -> String {
        eval_expression(s).unwrap_or_else(|e| panic!("eval_expression({s:?}) erreur: {e}"))
    }

    fn assert_err_contains(s: &str, needle: &str) {
        let e = eval_expression(s).expect_err("erreur attendue");
        assert!(e.contains(needle), "expr={s:?} erreur={e:?}");
    }

    // --- Arithmétique de base ---

    #[test]
    fn addition_simple() {
        assert_eq!(ok_txt("2+2"), "4");
    }

    #[test]
    fn precedence_conventionnelle() {
        // * avant +
        assert_eq!(ok_txt("2+3*4"), "14");
        assert_eq!(ok_txt("10-4/2"), "8");
    }

    #[test]
    fn associativite_gauche() {
        assert_eq!(ok_txt("8/4/2"), "1");
        assert_eq!(ok_txt("10-3-2"), "5");
    }

    #[test]
    fn moins_unaire_en_tete() {
        assert_eq!(ok_txt("-5+3"), "-2");
        assert_eq!(ok_txt("-0.5"), "-0.5");
    }

    // --- Décimaux ---

    #[test]
    fn decimaux_exacts() {
        // noyau rationnel : pas de bruit binaire
        assert_eq!(ok_txt("0.1+0.2"), "0.3");
    }

    #[test]
    fn point_flottant_lache() {
        // "3." et ".5" sont des écritures valides sur le pavé
        assert_eq!(ok_txt("3."), "3");
        assert_eq!(ok_txt(".5"), "0.5");
    }

    // --- Règle d’affichage ---

    #[test]
    fn arrondi_deux_decimales_au_dessus_de_un() {
        // |v| >= 1 => 2 décimales
        assert_eq!(ok_txt("7/3"), "2.33");
        assert_eq!(ok_txt("10/4"), "2.5");
    }

    #[test]
    fn arrondi_dix_decimales_sous_un() {
        // |v| < 1 => 10 décimales
        assert_eq!(ok_txt("2/3"), "0.6666666667");
        assert_eq!(ok_txt("1/3"), "0.3333333333");
    }

    #[test]
    fn zeros_finaux_coupes() {
        assert_eq!(ok_txt("1.50+2.50"), "4");
    }

    // --- Erreurs ---

    #[test]
    fn division_par_zero() {
        assert_err_contains("1/0", "division par zéro");
        assert_err_contains("5/(0)", "caractère inattendu");
    }

    #[test]
    fn entree_vide_ou_malformee() {
        assert_err_contains("", "Entrée vide");
        assert_err_contains("   ", "Entrée vide");
        assert_err_contains("3+", "expression invalide");
        assert_err_contains(".", "nombre invalide");
        assert_err_contains("abc", "caractère inattendu");
    }

    #[test]
    fn valeur_exacte_sans_arrondi() {
        // eval_valeur retourne la valeur exacte, avant règle d’affichage
        let v = eval_valeur("1/3").unwrap();
        assert_eq!(v.to_string(), "1/3");
    }
}
