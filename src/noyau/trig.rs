// src/noyau/trig.rs
//
// Fonctions trigonométriques (flottant, radians)
// ---------------------------------------------
// - Primaire   : sin, cos, tan
// - Co-fonction: cos, sec = 1/cos, cot = 1/tan
//
// Dénominateur quasi nul (|d| < SEUIL_ZERO) => traité comme zéro exact de même signe :
// tan(π/2), sec(π/2), cot(0) sortent non finis au lieu d’un énorme 1.6e16.
// Pas d’erreur ici : le non-fini passe tel quel jusqu’à l’affichage ("undefined").

use super::format::SEUIL_ZERO;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionTrig {
    Sin,
    Cos,
    Tan,
    Sec,
    Cot,
}

impl FonctionTrig {
    /// θ en radians.
    pub fn appliquer(self, theta: f64) -> f64 {
        match self {
            FonctionTrig::Sin => theta.sin(),
            FonctionTrig::Cos => theta.cos(),
            FonctionTrig::Tan => diviser(theta.sin(), theta.cos()),
            FonctionTrig::Sec => diviser(1.0, theta.cos()),
            FonctionTrig::Cot => diviser(theta.cos(), theta.sin()),
        }
    }

    /// Libellé du panneau de résultats.
    pub fn libelle(self) -> &'static str {
        match self {
            FonctionTrig::Sin => "sin θ",
            FonctionTrig::Cos => "cos θ",
            FonctionTrig::Tan => "tan θ",
            FonctionTrig::Sec => "sec θ",
            FonctionTrig::Cot => "cot θ",
        }
    }
}

fn diviser(num: f64, den: f64) -> f64 {
    let den = if den.abs() < SEUIL_ZERO {
        0.0_f64.copysign(den)
    } else {
        den
    };
    num / den
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Primaire,
    CoFonction,
}

impl Mode {
    /// Les trois fonctions calculées, dans l’ordre d’affichage.
    pub fn fonctions(self) -> [FonctionTrig; 3] {
        match self {
            Mode::Primaire => [FonctionTrig::Sin, FonctionTrig::Cos, FonctionTrig::Tan],
            Mode::CoFonction => [FonctionTrig::Cos, FonctionTrig::Sec, FonctionTrig::Cot],
        }
    }

    pub fn titre(self) -> &'static str {
        match self {
            Mode::Primaire => "Trigonometric Calculator",
            Mode::CoFonction => "Co-Functions Calculator",
        }
    }

    /// Début de la description de la notification de succès.
    pub fn phrase_succes(self) -> &'static str {
        match self {
            Mode::Primaire => "Trigonometric values calculated for",
            Mode::CoFonction => "Co-functions calculated for",
        }
    }
}

/// Triplet ordonné (fonction -> valeur), produit neuf à chaque évaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resultats {
    valeurs: [(FonctionTrig, f64); 3],
}

impl Resultats {
    /// Calcule le triplet du mode pour θ en radians.
    pub fn calculer(mode: Mode, theta_rad: f64) -> Self {
        let valeurs = mode.fonctions().map(|f| (f, f.appliquer(theta_rad)));
        Self { valeurs }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FonctionTrig, f64)> + '_ {
        self.valeurs.iter().copied()
    }

    pub fn valeur(&self, f: FonctionTrig) -> Option<f64> {
        self.iter().find(|(g, _)| *g == f).map(|(_, v)| v)
    }
}
