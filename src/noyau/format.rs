// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// Retire les zéros finaux de la partie fractionnaire ("4.00" -> "4", "0.30" -> "0.3").
fn couper_zeros(txt: String) -> String {
    if !txt.contains('.') {
        return txt;
    }
    txt.trim_end_matches('0').trim_end_matches('.').to_string()
}

/* ------------------------ Arrondi d’affichage ------------------------ */

/// Arrondi “demi vers l’extérieur” à `digits` décimales (comme un toFixed).
fn arrondi_rationnel(r: &BigRational, digits: usize) -> BigRational {
    let scale = pow10(digits);
    let num = r.numer().abs() * &scale;
    let den = r.denom().clone();

    // floor(|r|*10^digits + 1/2), signe réappliqué
    let deux = BigInt::from(2);
    let q = (num * &deux + &den) / (den * deux);
    let q = if r.is_negative() { -q } else { q };

    BigRational::new(q, scale)
}

/// Règle d’affichage du résultat :
/// - |v| < 1  => 10 décimales max (petits nombres : précision haute)
/// - |v| >= 1 => 2 décimales max
pub fn arrondir_affichage(r: &BigRational) -> BigRational {
    let digits = if r.abs() < BigRational::one() { 10 } else { 2 };
    arrondi_rationnel(r, digits)
}

/* ------------------------ Rendu décimal exact ------------------------ */

/// Rend un rationnel décimal-fini en texte exact, zéros finaux coupés.
///
/// Invariant moteur : les résultats stockés proviennent d’un arrondi,
/// d’une négation ou d’une division par 100 => dénominateur en 2^a·5^b.
pub fn decimal_exact(r: &BigRational) -> String {
    // décimales nécessaires : facteurs 2 et 5 du dénominateur
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    let mut reste = r.denom().clone();
    let mut k2: usize = 0;
    while (&reste % &deux).is_zero() {
        reste /= &deux;
        k2 += 1;
    }
    let mut k5: usize = 0;
    while (&reste % &cinq).is_zero() {
        reste /= &cinq;
        k5 += 1;
    }

    if !reste.is_one() {
        // garde-fou : dénominateur non décimal => arrondi à 10 décimales
        return decimal_exact(&arrondi_rationnel(r, 10));
    }

    let k = k2.max(k5);
    let scaled = (r.numer() * pow10(k)) / r.denom();
    couper_zeros(scaled_to_decimal(scaled, k))
}
