// src/noyau/lecture.rs
//
// Lecture de l’angle saisi : texte brut -> f64 fini.
// - espaces de bord ignorés
// - littéral décimal complet (pas de préfixe "12abc" -> 12)
// - inf / NaN / dépassement (1e999) refusés

use super::erreur::EntreeInvalide;

/// Lit un angle saisi. Échoue si le texte n’est pas un réel fini.
pub fn lire_angle(texte: &str) -> Result<f64, EntreeInvalide> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(EntreeInvalide::new(texte));
    }

    let v: f64 = s.parse().map_err(|_| EntreeInvalide::new(texte))?;
    if !v.is_finite() {
        return Err(EntreeInvalide::new(texte));
    }
    Ok(v)
}
