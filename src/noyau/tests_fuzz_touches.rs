//! Tests fuzz touches : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants clés après CHAQUE touche :
//!   - alphabet légal dans l’expression
//!   - jamais deux opérateurs adjacents
//!   - au plus un point par segment
//!   - l’affichage ne panique jamais

use std::time::{Duration, Instant};

use super::moteur::{Moteur, Touche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

const CHIFFRES: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const OPERATEURS: [char; 4] = ['+', '-', '*', '/'];

fn touche_aleatoire(rng: &mut Rng) -> Touche {
    // pondération : beaucoup de chiffres, assez d’opérateurs,
    // le reste plus rare (comme une vraie saisie)
    match rng.pick(16) {
        0..=6 => Touche::Chiffre(CHIFFRES[rng.pick(10) as usize]),
        7..=9 => Touche::Operateur(OPERATEURS[rng.pick(4) as usize]),
        10 => Touche::Decimale,
        11 => Touche::Egal,
        12 => Touche::Backspace,
        13 => Touche::Signe,
        14 => Touche::Pourcent,
        _ => Touche::Clear,
    }
}

/* ------------------------ Invariants ------------------------ */

fn est_operateur(c: char) -> bool {
    OPERATEURS.contains(&c)
}

fn verifier_invariants(expression: &str, resultat: &str) {
    // 1) alphabet légal
    for c in expression.chars() {
        assert!(
            c.is_ascii_digit() || c == '.' || est_operateur(c),
            "caractère illégal {c:?} dans {expression:?}"
        );
    }

    // 2) jamais deux opérateurs adjacents
    let chars: Vec<char> = expression.chars().collect();
    for paire in chars.windows(2) {
        assert!(
            !(est_operateur(paire[0]) && est_operateur(paire[1])),
            "opérateurs adjacents dans {expression:?}"
        );
    }

    // 3) au plus un point par segment (le '-' de tête borne aussi le segment)
    for segment in expression.split(est_operateur) {
        let points = segment.chars().filter(|c| *c == '.').count();
        assert!(points <= 1, "segment {segment:?} dans {expression:?}");
    }

    // 4) résultat : vide, ou nombre décimal (signe en tête admis)
    if !resultat.is_empty() {
        let ok = resultat
            .strip_prefix('-')
            .unwrap_or(resultat)
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.');
        assert!(ok, "résultat non décimal: {resultat:?}");
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_touches_invariants() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xCA1C);
    let mut moteur = Moteur::new();

    for i in 0..20_000u32 {
        if i % 1024 == 0 {
            budget(start, max);
        }

        moteur.appuyer(touche_aleatoire(&mut rng));

        let (expression, resultat) = moteur.affichage();
        verifier_invariants(&expression, &resultat);
    }
}

#[test]
fn fuzz_touches_clear_revient_a_zero() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0x7AC7);

    for _tour in 0..200u32 {
        budget(start, max);

        let mut moteur = Moteur::new();
        for _ in 0..rng.pick(64) {
            moteur.appuyer(touche_aleatoire(&mut rng));
        }

        // Clear ramène toujours à l’état initial, quel que soit l’historique
        moteur.appuyer(Touche::Clear);
        assert_eq!(moteur.affichage(), (String::new(), String::new()));
    }
}

#[test]
fn fuzz_touches_determinisme() {
    // même seed => même trace (le moteur est une machine à états pure)
    let trace = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut moteur = Moteur::new();
        let mut sortie = Vec::new();
        for _ in 0..500u32 {
            moteur.appuyer(touche_aleatoire(&mut rng));
            sortie.push(moteur.affichage());
        }
        sortie
    };

    assert_eq!(trace(42), trace(42));
}
