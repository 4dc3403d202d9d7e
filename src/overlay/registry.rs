// SPDX-License-Identifier: MPL-2.0
//! Owning registry for the three overlay controllers.
//!
//! Created once at application mount, the registry replaces module-scoped
//! controller references with an explicit context object: callers borrow the
//! typed controllers from it, and a single [`OverlayRegistry::tick`] drives
//! all three from the host's frame loop.

use super::alert::AlertController;
use super::animation::Timings;
use super::menu::MenuController;
use super::toast::ToastController;
use crate::config::Config;

#[derive(Debug)]
pub struct OverlayRegistry {
    menu: MenuController,
    alert: AlertController,
    toast: ToastController,
}

impl OverlayRegistry {
    /// Creates the registry with the given motion timings.
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            menu: MenuController::new(timings),
            alert: AlertController::new(timings),
            toast: ToastController::new(timings),
        }
    }

    /// Creates the registry from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.timings())
    }

    #[must_use]
    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuController {
        &mut self.menu
    }

    #[must_use]
    pub fn alert(&self) -> &AlertController {
        &self.alert
    }

    pub fn alert_mut(&mut self) -> &mut AlertController {
        &mut self.alert
    }

    #[must_use]
    pub fn toast(&self) -> &ToastController {
        &self.toast
    }

    pub fn toast_mut(&mut self) -> &mut ToastController {
        &mut self.toast
    }

    /// Advances every controller's clock by `dt_ms` milliseconds.
    pub fn tick(&mut self, dt_ms: f32) {
        self.menu.tick(dt_ms);
        self.alert.tick(dt_ms);
        self.toast.tick(dt_ms);
    }

    /// Routes a hardware back press to the menu first, then the alert.
    /// The toast never intercepts it. Returns `true` when consumed.
    pub fn back_pressed(&mut self) -> bool {
        self.menu.back_pressed() || self.alert.back_pressed()
    }

    /// Whether any overlay currently occupies the screen.
    #[must_use]
    pub fn any_presented(&self) -> bool {
        self.menu.phase().is_presented()
            || self.alert.phase().is_presented()
            || self.toast.phase().is_presented()
    }

    /// Whether any controller has a timing or timer in flight. Hosts can use
    /// this to pause their frame subscription while everything is idle.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.menu.is_animating()
            || self.alert.is_animating()
            || self.toast.is_animating()
            || self.any_presented()
    }
}
