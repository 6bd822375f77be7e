// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;

#[derive(Clone, Debug)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12)
/// - décimaux avec un seul point (ex: 12.34, 3., .5) -> Num exact (1234/100…)
/// - opérateurs + - * /
///
/// Le point décimal "nu" (".") est refusé : il faut au moins un chiffre.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre décimal : partie entière, point optionnel, partie fractionnaire.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }

            let mut frac_len: usize = 0;
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                let start_f = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                frac_len = i - start_f;
            }

            // uniquement "." : pas un nombre
            let digits: String = chars[start..i].iter().filter(|c| **c != '.').collect();
            if digits.is_empty() {
                return Err("nombre invalide".into());
            }

            let n = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or("nombre invalide")?;
            let d = BigInt::from(10).pow(frac_len as u32);

            out.push(Tok::Num(BigRational::new(n, d)));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}
