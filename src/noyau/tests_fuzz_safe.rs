//! Tests fuzz safe : robustesse + déterminisme de la lecture et de l’affichage.
//!
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariants clés :
//!   * Ok(θ) => θ fini
//!   * chaque valeur affichée est "0", "undefined" ou un nombre à 6 décimales

use std::time::{Duration, Instant};

use super::format::format_resultat;
use super::{evaluer_texte, Mode, Unite};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

/// "0", "undefined", ou [-]chiffres.6chiffres
fn est_affichage_valide(s: &str) -> bool {
    if s == "0" || s == "undefined" {
        return true;
    }
    let s = s.strip_prefix('-').unwrap_or(s);
    match s.split_once('.') {
        Some((ent, frac)) => {
            !ent.is_empty()
                && ent.bytes().all(|b| b.is_ascii_digit())
                && frac.len() == 6
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Texte “presque numérique” : chiffres, signes, point, exposant, espaces, quelques intrus.
fn gen_texte(rng: &mut Rng) -> String {
    const ALPHABET: &[u8] = b"0123456789-+.eE xa,";
    let n = rng.pick(10) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

/// Nombre bien formé, parfois énorme (1e300) pour tester le passage du non-fini.
fn gen_nombre(rng: &mut Rng) -> String {
    let signe = if rng.coin() { "-" } else { "" };
    let ent = rng.pick(100_000);
    let frac = rng.pick(1000);
    match rng.pick(4) {
        0 => format!("{signe}{ent}"),
        1 => format!("{signe}{ent}.{frac}"),
        2 => format!("{signe}{ent}e{}", rng.pick(300)),
        _ => format!("{signe}0.{frac}e-{}", rng.pick(20)),
    }
}

fn unite_au_hasard(rng: &mut Rng) -> Unite {
    if rng.coin() {
        Unite::Degres
    } else {
        Unite::Radians
    }
}

fn mode_au_hasard(rng: &mut Rng) -> Mode {
    if rng.coin() {
        Mode::Primaire
    } else {
        Mode::CoFonction
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_textes_quelconques() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let texte = gen_texte(&mut rng);
        let unite = unite_au_hasard(&mut rng);
        let mode = mode_au_hasard(&mut rng);

        match evaluer_texte(&texte, unite, mode) {
            Ok((theta, r)) => {
                assert!(theta.is_finite(), "texte={texte:?}");
                for (f, v) in r.iter() {
                    let s = format_resultat(v);
                    assert!(est_affichage_valide(&s), "texte={texte:?} {f:?} -> {s:?}");
                }
                seen_ok += 1;
            }
            Err(e) => {
                assert_eq!(e.texte, texte);
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_nombres_toujours_acceptes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let texte = gen_nombre(&mut rng);
        let unite = unite_au_hasard(&mut rng);
        let mode = mode_au_hasard(&mut rng);

        let (_theta, r) = evaluer_texte(&texte, unite, mode)
            .unwrap_or_else(|e| panic!("texte={texte:?} err={e}"));
        for (_, v) in r.iter() {
            assert!(est_affichage_valide(&format_resultat(v)));
        }
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);

    for _ in 0..200 {
        let ta = gen_nombre(&mut a);
        let tb = gen_nombre(&mut b);
        assert_eq!(ta, tb);

        let ra = evaluer_texte(&ta, Unite::Degres, Mode::CoFonction);
        let rb = evaluer_texte(&tb, Unite::Degres, Mode::CoFonction);
        assert_eq!(ra, rb);
    }
}

#[test]
fn affichage_valide_reconnu() {
    assert!(est_affichage_valide("0"));
    assert!(est_affichage_valide("undefined"));
    assert!(est_affichage_valide("-1.234568"));
    assert!(!est_affichage_valide("1.23"));
    assert!(!est_affichage_valide("inf"));
}
