// src/app.rs
//
// Angle Trio — module App (racine)
// --------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + notif.rs)
// - Ré-exporter AppTrig (pour main.rs: use crate::app::AppTrig;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Enter est géré dans vue.rs (quand le champ a le focus).
// - Les écrans renvoient leurs événements ; c’est ici qu’ils deviennent toasts / navigation.

pub mod etat;
pub mod notif;
pub mod vue;

// Ré-export pratique : `use crate::app::AppTrig;`
pub use etat::{AppTrig, Page};

use eframe::egui;

impl eframe::App for AppTrig {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = Clear All sur l’écran courant.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.ecran_courant().clear();
        }

        let rep = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_max_width(ui.available_width().min(LARGEUR_MAX));
                        self.ecran_courant().ui(ui)
                    })
                    .inner
            })
            .inner;

        if let Some(n) = rep.notification {
            let maintenant = ctx.input(|i| i.time);
            self.notifier(n, maintenant);
        }
        if let Some(page) = rep.navigation {
            self.naviguer(page);
        }

        vue::ui_toasts(ctx, &mut self.toasts);
    }
}

/// Largeur max du contenu (écran type mobile, même sur un grand écran).
const LARGEUR_MAX: f32 = 448.0;
