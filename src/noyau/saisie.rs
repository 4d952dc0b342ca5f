// src/noyau/saisie.rs
//
// Aide à la frappe du point décimal (indépendante de l'évaluation).
// - "nombre courant" = segment entre deux opérateurs/parenthèses autour du curseur
// - déjà un '.' dans ce nombre => rien ne change
// - nombre vide (ou que des espaces) avant le curseur => on insère "0."
// - sinon => on insère "."

/// Caractères qui terminent un nombre (glyphes inclus).
fn est_borne(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '×' | '÷')
}

/// Insère un point décimal au curseur (compté en caractères, borné à la longueur).
/// Renvoie le nouveau texte ; le texte après le curseur est conservé.
pub fn insert_decimal(texte: &str, curseur: usize) -> String {
    let chars: Vec<char> = texte.chars().collect();
    let curseur = curseur.min(chars.len());

    let debut = chars[..curseur]
        .iter()
        .rposition(|&c| est_borne(c))
        .map_or(0, |i| i + 1);
    let fin = chars[curseur..]
        .iter()
        .position(|&c| est_borne(c))
        .map_or(chars.len(), |i| curseur + i);

    // un seul point par nombre, de part et d'autre du curseur
    if chars[debut..fin].contains(&'.') {
        return texte.to_string();
    }

    let avant_vide = chars[debut..curseur].iter().all(|c| c.is_whitespace());
    let insertion = if avant_vide { "0." } else { "." };

    let mut out: String = chars[..curseur].iter().collect();
    out.push_str(insertion);
    out.extend(&chars[curseur..]);
    out
}
