// src/noyau/format.rs

/// En dessous : bruit flottant autour d’un vrai zéro, affiché "0".
pub const SEUIL_ZERO: f64 = 1e-10;

/// Décimales affichées pour une valeur ordinaire.
pub const DECIMALES: usize = 6;

/// Texte affiché pour une valeur non finie (asymptote, NaN).
pub const INDEFINI: &str = "undefined";

/// Affichage d’une valeur calculée :
/// - |v| < 1e-10  -> "0"
/// - non fini     -> "undefined"
/// - sinon        -> 6 décimales
pub fn format_resultat(v: f64) -> String {
    if v.abs() < SEUIL_ZERO {
        return "0".to_string();
    }
    if !v.is_finite() {
        return INDEFINI.to_string();
    }
    format!("{:.*}", DECIMALES, v)
}

/// Angle tel que saisi, pour la notification ("45", "1.5", "-30").
pub fn format_angle(v: f64) -> String {
    format!("{v}")
}
