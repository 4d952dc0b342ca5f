// src/noyau/format.rs
//
// Politique d'affichage (constantes fixes) :
// - 8 décimales au plus, arrondi au plus proche (demi -> loin de zéro)
// - zéros finaux et point final retirés
// - |v| non nul < 1e-8 => TooSmall (jamais arrondi à 0)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreur::EvalError;

/// Nombre maximal de chiffres après la virgule.
pub const DECIMALES_MAX: usize = 8;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Plus petite magnitude affichable : 10^-DECIMALES_MAX (= 1e-8).
pub fn magnitude_min() -> BigRational {
    BigRational::new(BigInt::from(1), pow10(DECIMALES_MAX))
}

/// r -> entier “scalé” = round(|r| * 10^digits), demi vers le haut.
fn rational_scaled_arrondi(r: &BigRational, digits: usize) -> BigInt {
    let num = r.numer().abs() * pow10(digits);
    let den = r.denom();
    let q = &num / den;
    let reste = &num % den;
    if reste * BigInt::from(2) >= *den {
        q + BigInt::from(1)
    } else {
        q
    }
}

/// Entier “scalé” (×10^digits) -> texte décimal sans zéros finaux.
fn scaled_to_decimal(scaled: &BigInt, neg: bool, digits: usize) -> String {
    let scale = pow10(digits);
    let int_part = scaled / &scale;
    let frac_part = scaled % &scale;

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    let signe = if neg && !scaled.is_zero() { "-" } else { "" };
    if frac.is_empty() {
        format!("{signe}{int_part}")
    } else {
        format!("{signe}{int_part}.{frac}")
    }
}

/// Texte d'affichage d'une valeur exacte (sans contrôle de magnitude).
pub fn formater(v: &BigRational) -> String {
    let scaled = rational_scaled_arrondi(v, DECIMALES_MAX);
    scaled_to_decimal(&scaled, v.is_negative(), DECIMALES_MAX)
}

/// Classe un résultat : TooSmall sous le seuil, sinon texte d'affichage.
pub fn classer(v: &BigRational) -> Result<String, EvalError> {
    if !v.is_zero() && v.abs() < magnitude_min() {
        return Err(EvalError::TooSmall);
    }
    Ok(formater(v))
}
