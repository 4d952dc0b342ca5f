// src/noyau/porte.rs
//
// Porte caractères : filtre les frappes AVANT qu'elles n'entrent dans l'entrée.
// Les glyphes d'affichage × et ÷ sont acceptés ici puis traduits en * et /.

/// Glyphe d'affichage pour la multiplication.
pub const GLYPHE_FOIS: char = '×';

/// Glyphe d'affichage pour la division.
pub const GLYPHE_DIVISE: char = '÷';

/// Caractères de l'alphabet d'évaluation (hors chiffres).
const SYMBOLES: &str = "+-*/.() ";

/// Vrai si `c` appartient à l'alphabet d'évaluation (sans les glyphes).
pub fn dans_alphabet(c: char) -> bool {
    c.is_ascii_digit() || SYMBOLES.contains(c)
}

/// Vrai si la frappe `c` peut entrer dans l'entrée.
pub fn is_allowed(c: char) -> bool {
    dans_alphabet(c) || c == GLYPHE_FOIS || c == GLYPHE_DIVISE
}

/// Traduit un glyphe d'affichage vers son opérateur canonique.
pub fn canonique(c: char) -> char {
    match c {
        GLYPHE_FOIS => '*',
        GLYPHE_DIVISE => '/',
        _ => c,
    }
}

/// Applique la porte à un tampon complet (collage, frappes groupées).
pub fn filtrer(texte: &str) -> String {
    texte
        .chars()
        .filter(|&c| is_allowed(c))
        .map(canonique)
        .collect()
}
