// src/noyau/normalise.rs
//
// Nettoyage avant tokenisation :
// 1) retire les espaces
// 2) traduit × ÷ en * /
// 3) refuse les suites d'opérateurs : 2+ parmi {+ * /}, ou 3+ '-'
// 4) insère la multiplication implicite : 2( -> 2*(, )2 -> )*2, )( -> )*(
//
// "--" seul reste accepté : 5--3 = 5-(-3).

use std::fmt;

use super::erreur::SyntaxError;
use super::porte::canonique;

/// Texte nettoyé, prêt pour la tokenisation.
/// Seul `normalize` peut en construire un.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized(String);

impl Normalized {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_op_simple(c: char) -> bool {
    matches!(c, '+' | '*' | '/')
}

/// Cherche la première suite interdite, renvoie le motif fautif.
fn suite_interdite(s: &[char]) -> Option<String> {
    let mut i = 0;
    while i < s.len() {
        if is_op_simple(s[i]) {
            let debut = i;
            while i < s.len() && is_op_simple(s[i]) {
                i += 1;
            }
            if i - debut >= 2 {
                return Some(s[debut..i].iter().collect());
            }
            continue;
        }
        if s[i] == '-' {
            let debut = i;
            while i < s.len() && s[i] == '-' {
                i += 1;
            }
            if i - debut >= 3 {
                return Some(s[debut..i].iter().collect());
            }
            continue;
        }
        i += 1;
    }
    None
}

pub fn normalize(expr: &str) -> Result<Normalized, SyntaxError> {
    let chars: Vec<char> = expr
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(canonique)
        .collect();

    if chars.is_empty() {
        return Err(SyntaxError::Vide);
    }

    if let Some(motif) = suite_interdite(&chars) {
        return Err(SyntaxError::SuiteOperateurs(motif));
    }

    let mut out = String::with_capacity(chars.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if let Some(&prec) = i.checked_sub(1).and_then(|j| chars.get(j)) {
            let implicite = (prec.is_ascii_digit() && c == '(')
                || (prec == ')' && c.is_ascii_digit())
                || (prec == ')' && c == '(');
            if implicite {
                out.push('*');
            }
        }
        out.push(c);
    }

    Ok(Normalized(out))
}
