// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même état (etat.rs) pour natif + wasm
// - Clavier : Enter calcule (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - La vue ne décide rien : elle renvoie les événements (notification, navigation)

use std::time::Duration;

use eframe::egui;

use crate::noyau::{format_resultat, Mode, Unite};

use super::etat::{EcranCalc, Page};
use super::notif::{Notification, Toasts, Variante};

/// Ce qu’un écran demande à l’app après une frame.
#[derive(Debug, Default)]
pub struct ReponseEcran {
    pub notification: Option<Notification>,
    pub navigation: Option<Page>,
}

impl EcranCalc {
    /// UI d’une calculatrice : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) -> ReponseEcran {
        let mut rep = ReponseEcran::default();

        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.vertical_centered(|ui| {
            ui.heading(self.mode.titre());
        });
        ui.add_space(8.0);

        self.ui_unite(ui);
        ui.add_space(8.0);

        self.ui_entree(ui, &mut rep);
        ui.add_space(8.0);

        self.ui_angles_rapides(ui);

        if self.resultats().is_some() {
            ui.add_space(8.0);
            self.ui_resultats(ui);
        }

        ui.add_space(8.0);
        let clear = ui.add_sized(
            [ui.available_width(), 32.0],
            egui::Button::new("Clear All"),
        );
        if clear.clicked() {
            self.clear();
        }

        ui.add_space(12.0);
        ui.separator();
        self.ui_navigation(ui, &mut rep);

        rep
    }

    fn ui_unite(&mut self, ui: &mut egui::Ui) {
        let mut unite = self.unite();
        ui.columns(2, |cols| {
            cols[0].vertical_centered_justified(|ui| {
                ui.selectable_value(&mut unite, Unite::Degres, "Degrees");
            });
            cols[1].vertical_centered_justified(|ui| {
                ui.selectable_value(&mut unite, Unite::Radians, "Radians");
            });
        });
        if unite != self.unite() {
            self.set_unite(unite);
        }
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui, rep: &mut ReponseEcran) {
        ui.label(format!("Enter θ value ({}):", self.unite().nom()));

        ui.horizontal(|ui| {
            let largeur_bouton = 96.0;
            let mut texte = self.entree().to_string();

            // IMPORTANT : id stable par écran + focus contrôlé
            let resp = ui.add(
                egui::TextEdit::singleline(&mut texte)
                    .desired_width((ui.available_width() - largeur_bouton).max(80.0))
                    .hint_text(self.unite().exemple())
                    .id_salt(self.mode.titre()),
            );
            if resp.changed() {
                self.set_entree(texte);
            }

            if self.focus_entree {
                resp.request_focus();
                self.focus_entree = false;
            }

            // Enter : un singleline perd le focus sur Enter, d’où lost_focus()
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            let calculer =
                ui.add_sized([largeur_bouton - 6.0, 28.0], egui::Button::new("Calculate"));

            if calculer.clicked() || ((resp.has_focus() || resp.lost_focus()) && enter) {
                rep.notification = Some(self.evaluer());
            }
        });
    }

    fn ui_angles_rapides(&mut self, ui: &mut egui::Ui) {
        ui.label("Quick Angles:");

        let angles: Vec<_> = self.angles_rapides_affiches().collect();
        let largeur = ((ui.available_width() - 3.0 * 6.0) / 4.0).max(40.0);

        egui::Grid::new(("angles_rapides", self.mode.titre()))
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, angle) in angles.into_iter().enumerate() {
                    let b = ui.add_sized([largeur, 28.0], egui::Button::new(angle.libelle()));
                    if b.clicked() {
                        self.choisir_angle_rapide(angle);
                    }
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        let Some(resultats) = self.resultats().copied() else {
            return;
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.strong("Results");
                });
                ui.add_space(4.0);

                let valeurs: Vec<_> = resultats.iter().collect();
                ui.columns(valeurs.len(), |cols| {
                    for (col, (f, v)) in cols.iter_mut().zip(valeurs) {
                        col.vertical_centered(|ui| {
                            ui.small(f.libelle());
                            ui.label(
                                egui::RichText::new(format_resultat(v))
                                    .monospace()
                                    .size(18.0)
                                    .strong(),
                            );
                        });
                    }
                });
            });
    }

    fn ui_navigation(&mut self, ui: &mut egui::Ui, rep: &mut ReponseEcran) {
        let (cible, titre, sous_titre) = match self.mode {
            Mode::CoFonction => (
                Page::Primaire,
                "← Switch to Basic Functions",
                "Calculate sin, cos, tan",
            ),
            Mode::Primaire => (
                Page::CoFonctions,
                "Switch to Co-Functions →",
                "Calculate cos, sec, cot",
            ),
        };

        ui.vertical_centered(|ui| {
            if ui.link(titre).clicked() {
                rep.navigation = Some(cible);
            }
            ui.small(sous_titre);
        });
    }
}

/* ------------------------ Toasts ------------------------ */

/// Affiche les toasts actifs (coin bas-droit) et planifie le repaint d’expiration.
pub fn ui_toasts(ctx: &egui::Context, toasts: &mut Toasts) {
    let maintenant = ctx.input(|i| i.time);
    toasts.purger(maintenant);

    let mut a_fermer = None;

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for (i, toast) in toasts.actifs().iter().enumerate() {
                let n = &toast.notification;
                let couleur = match n.variante {
                    Variante::Succes => ui.visuals().text_color(),
                    Variante::Destructive => ui.visuals().error_fg_color,
                };

                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(280.0);
                    ui.horizontal(|ui| {
                        ui.colored_label(couleur, egui::RichText::new(&n.titre).strong());
                        if ui.small_button("×").clicked() {
                            a_fermer = Some(i);
                        }
                    });
                    ui.label(n.description.as_str());
                });
            }
        });

    if let Some(i) = a_fermer {
        toasts.fermer(i);
    }

    if let Some(expire) = toasts.prochaine_expiration() {
        let reste = (expire - maintenant).max(0.0);
        ctx.request_repaint_after(Duration::from_secs_f64(reste));
    }
}
