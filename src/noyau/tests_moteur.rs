//! Tests moteur (campagne) : chaque opération + politique d’aiguillage.
//!
//! Convention des séquences : une chaîne de touches, un caractère = une touche.
//! - '0'..'9' => Chiffre
//! - '+' '-' '*' '/' => Opérateur
//! - '.' => Decimale, '=' => Egal, 'C' => Clear, '<' => Backspace
//! - '~' => Signe, '%' => Pourcent

use super::moteur::{Moteur, Touche};

fn taper(m: &mut Moteur, seq: &str) {
    for c in seq.chars() {
        let touche = match c {
            '0'..='9' => Touche::Chiffre(c),
            '+' | '-' | '*' | '/' => Touche::Operateur(c),
            '.' => Touche::Decimale,
            '=' => Touche::Egal,
            'C' => Touche::Clear,
            '<' => Touche::Backspace,
            '~' => Touche::Signe,
            '%' => Touche::Pourcent,
            _ => panic!("touche inconnue dans la séquence: {c:?}"),
        };
        m.appuyer(touche);
    }
}

fn apres(seq: &str) -> (String, String) {
    let mut m = Moteur::new();
    taper(&mut m, seq);
    m.affichage()
}

fn assert_affichage(seq: &str, expression: &str, resultat: &str) {
    let (e, r) = apres(seq);
    assert_eq!(e, expression, "expression après {seq:?}");
    assert_eq!(r, resultat, "résultat après {seq:?}");
}

/* ------------------------ Saisie : chiffres et point ------------------------ */

#[test]
fn chiffres_concatenes() {
    // les chiffres s’ajoutent tels quels, sans insertion d’opérateur
    assert_affichage("12345", "12345", "");
    assert_affichage("007", "007", "");
}

#[test]
fn point_unique_par_nombre() {
    assert_affichage("3.5", "3.5", "");
    // deuxième point dans le même nombre : sans effet
    assert_affichage("3.5.", "3.5", "");
    assert_affichage("3.5.7", "3.57", "");
}

#[test]
fn point_de_nouveau_apres_operateur() {
    // nouveau segment => nouveau point autorisé
    assert_affichage("3.5+2.7", "3.5+2.7", "");
}

#[test]
fn point_apres_operateur_bloque() {
    // la fin n’est pas un chiffre : le point est refusé
    assert_affichage("3+.", "3+", "");
}

#[test]
fn point_sur_expression_vide() {
    // ".5" est une saisie légale
    assert_affichage(".5", ".5", "");
    assert_affichage(".5=", "", "0.5");
}

/* ------------------------ Aiguillage des opérateurs ------------------------ */

#[test]
fn operateurs_consecutifs_reduits_au_premier() {
    // le second opérateur arrive sur une fin déjà opérateur : ignoré
    assert_affichage("5+*", "5+", "");
    assert_affichage("5+*7", "5+7", "");
}

#[test]
fn operateur_sans_contexte_ignore() {
    // ni expression ni résultat : rien à enchaîner
    assert_affichage("+", "", "");
    assert_affichage("*5", "5", "");
}

#[test]
fn operateur_apres_point_final_bloque() {
    // "3." se termine par '.', pas un chiffre => opérateur refusé
    assert_affichage("3.+", "3.", "");
}

#[test]
fn reprise_du_resultat() {
    // expression vide + résultat présent : "résultat + opérateur"
    assert_affichage("2+2=*", "4*", "4");
    assert_affichage("2+2=*3=", "", "12");
}

#[test]
fn chiffre_neuf_efface_le_resultat() {
    // repartir d’un chiffre abandonne l’ancien résultat
    assert_affichage("2+2=5", "5", "");
}

/* ------------------------ Soumission ------------------------ */

#[test]
fn soumission_depose_et_vide() {
    assert_affichage("2+2=", "", "4");
    assert_affichage("2+3*4=", "", "14");
}

#[test]
fn soumission_vide_donne_resultat_vide() {
    // évaluer "" est une erreur => résultat vide, jamais de panique
    assert_affichage("=", "", "");
    assert_affichage("2+2==", "", "");
}

#[test]
fn soumission_expression_malformee() {
    // fin sur opérateur => évaluation en échec => résultat vide
    assert_affichage("3+=", "", "");
}

#[test]
fn division_par_zero_resultat_vide() {
    assert_affichage("1/0=", "", "");
}

#[test]
fn arrondi_en_chaine() {
    // le résultat stocké est la valeur ARRONDIE, et la chaîne repart de lui
    assert_affichage("7/3=", "", "2.33");
    assert_affichage("7/3=*3=", "", "6.99");
}

/* ------------------------ Signe ------------------------ */

#[test]
fn negation_du_resultat() {
    assert_affichage("5=~", "", "-5");
    assert_affichage("5=~~", "", "5");
}

#[test]
fn negation_de_l_expression() {
    assert_affichage("5+3~", "-5+3", "");
    assert_affichage("5+3~~", "5+3", "");
    assert_affichage("5+3~=", "", "-2");
}

#[test]
fn negation_sans_rien() {
    assert_affichage("~", "", "");
}

#[test]
fn negation_puis_point() {
    // le '-' de tête est un signe : le segment actif reste le nombre
    assert_affichage("5~.5", "-5.5", "");
    assert_affichage("5~.5=", "", "-5.5");
}

/* ------------------------ Pourcentage ------------------------ */

#[test]
fn pourcentage_de_l_expression() {
    assert_affichage("50%", "", "0.5");
    assert_affichage("50+50%", "", "1");
}

#[test]
fn pourcentage_du_resultat_en_place() {
    assert_affichage("50=%", "", "0.5");
    assert_affichage("50=%%", "", "0.005");
}

#[test]
fn pourcentage_en_echec() {
    // évaluation impossible => résultat vide, expression vidée
    assert_affichage("1/0%", "", "");
    assert_affichage("%", "", "");
}

/* ------------------------ Effacement ------------------------ */

#[test]
fn clear_reinitialise_tout() {
    assert_affichage("1+2=C", "", "");
    assert_affichage("12.5+C", "", "");
}

#[test]
fn backspace_retire_le_dernier() {
    assert_affichage("12+<", "12", "");
    assert_affichage("3.<", "3", "");
}

#[test]
fn backspace_sur_vide_idempotent() {
    // répétable sans fin, sans panique
    assert_affichage("<<<<<", "", "");
    assert_affichage("5<<<<", "", "");
}

#[test]
fn backspace_conserve_le_resultat() {
    assert_affichage("2+2=<", "", "4");
}
