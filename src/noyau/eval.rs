//! Noyau — évaluation (pipeline réel)
//!
//! trim -> validation -> normalise -> jetons -> RPN -> Expr -> valeur exacte -> affichage
//!
//! Chaque étape échoue avec une cause typée ; l'appelant ne reçoit jamais
//! de panique, seulement une `Evaluation`.

use tracing::{debug, trace};

use super::erreur::EvalError;
use super::format::classer;
use super::jetons::{format_tokens, tokenize};
use super::normalise::normalize;
use super::rpn::{from_rpn, to_rpn};
use super::validation::verifier;

/// Affiché quand l'entrée est vide.
pub const AFFICHAGE_VIDE: &str = "0";

/// Affiché pour toute autre erreur (syntaxe, trop petit...).
pub const AFFICHAGE_ERREUR: &str = "?";

/// Résultat d'une évaluation : valeur formatée ou erreur typée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evaluation {
    Numeric(String),
    Error(EvalError),
}

impl Evaluation {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// Texte pour l'écran : la valeur, "0" si vide, "?" sinon.
    pub fn affichage(&self) -> &str {
        match self {
            Self::Numeric(s) => s.as_str(),
            Self::Error(EvalError::Empty) => AFFICHAGE_VIDE,
            Self::Error(_) => AFFICHAGE_ERREUR,
        }
    }
}

impl From<Result<String, EvalError>> for Evaluation {
    fn from(r: Result<String, EvalError>) -> Self {
        match r {
            Ok(s) => Self::Numeric(s),
            Err(e) => Self::Error(e),
        }
    }
}

fn pipeline(expr_str: &str) -> Result<String, EvalError> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(EvalError::Empty);
    }

    // 1) Structure grossière (alphabet + comptage des parenthèses)
    verifier(s)?;

    // 2) Nettoyage
    let propre = normalize(s)?;

    // 3) Jetons
    let jetons = tokenize(propre.as_str())?;

    // 4) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(
        normalise = %propre,
        jetons = %format_tokens(&jetons),
        rpn = %format_tokens(&rpn),
        "démarche"
    );

    // 5) Arbre puis valeur exacte
    let valeur = from_rpn(&rpn)?.evaluer()?;

    // 6) Classement + affichage
    classer(&valeur)
}

/// API publique : évalue une expression.
/// Fonction pure : même entrée => même `Evaluation`.
pub fn evaluate(expr_str: &str) -> Evaluation {
    let r = pipeline(expr_str);
    if let Err(e) = &r {
        debug!(expr = expr_str, erreur = %e, "évaluation refusée");
    }
    r.into()
}
