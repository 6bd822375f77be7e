// src/noyau/expr.rs
//
// AST exact (sans flottants).
// - Rat : rationnel exact
// - Add/Sub/Mul/Div : opérateurs binaires
//
// IMPORTANT (SAFE):
// - evaluer() ne panique jamais : division par zéro => Err propagé.

use num_rational::BigRational;
use num_traits::Zero;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Rat(BigRational),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évaluation exacte (rationnelle) de l’arbre.
    pub fn evaluer(&self) -> Result<BigRational, String> {
        use Expr::*;

        match self {
            Rat(r) => Ok(r.clone()),

            Add(a, b) => Ok(a.evaluer()? + b.evaluer()?),
            Sub(a, b) => Ok(a.evaluer()? - b.evaluer()?),
            Mul(a, b) => Ok(a.evaluer()? * b.evaluer()?),

            Div(a, b) => {
                let vb = b.evaluer()?;
                if vb.is_zero() {
                    return Err("division par zéro".into());
                }
                Ok(a.evaluer()? / vb)
            }
        }
    }
}
