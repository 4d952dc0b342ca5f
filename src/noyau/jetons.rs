// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreur::SyntaxError;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // valeur exacte + texte d'origine (pour la démarche / les journaux)
    Num(BigRational, String),

    Plus,
    Minus,
    Star,
    Slash,

    // moins unaire : produit par to_rpn, jamais par tokenize
    Neg,

    LPar,
    RPar,
}

/// Décimal "123.45" -> 12345/100 (exact).
/// Accepte "12", "12.", ".5" ; refuse "." seul.
fn parse_decimal(texte: &str) -> Option<BigRational> {
    let (ent, frac) = match texte.split_once('.') {
        Some((e, f)) => (e, f),
        None => (texte, ""),
    };
    if ent.is_empty() && frac.is_empty() {
        return None;
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    let d = BigInt::from(10).pow(frac.len() as u32);
    Some(BigRational::new(n, d))
}

/// Tokenize une chaîne (déjà normalisée) en jetons.
/// Supporte:
/// - décimaux (ex: 12, 3.14, .5, 2.)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces ignorés
pub fn tokenize(s: &str) -> Result<Vec<Tok>, SyntaxError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : chiffres + au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut points = 0;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    points += 1;
                }
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            if points > 1 {
                return Err(SyntaxError::NombreInvalide(texte));
            }
            let valeur =
                parse_decimal(&texte).ok_or_else(|| SyntaxError::NombreInvalide(texte.clone()))?;
            out.push(Tok::Num(valeur, texte));
            continue;
        }

        return Err(SyntaxError::CaractereInterdit(c));
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        if r.denom().is_one() {
            format!("{}", r.numer())
        } else {
            format!("{}/{}", r.numer(), r.denom())
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r, texte) if texte.is_empty() => format_rat(r),
            Tok::Num(_, texte) => texte.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
