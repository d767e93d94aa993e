//! Module defining the scene that composites are taken of.

use std::fmt;

use image::{DynamicImage, GenericImage};


/// The visual state of the editor screen, as far as compositing
/// is concerned: the loaded image and the chrome visibility.
///
/// The rasterized region is the base image at its own size.
pub struct Scene {
    pub(super) image: Option<DynamicImage>,
    pub(super) chrome: Chrome,
}

impl Scene {
    /// Create an empty scene with all chrome visible.
    #[inline]
    pub fn new() -> Self {
        Scene{image: None, chrome: Chrome::default()}
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new()
    }
}

impl Scene {
    /// The base image, if one has been loaded.
    #[inline]
    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    /// Whether a base image has been loaded.
    #[inline]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Load a base image into the scene.
    #[inline]
    pub fn set_image(&mut self, image: DynamicImage) {
        self.image = Some(image);
    }

    /// Remove the base image from the scene.
    #[inline]
    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// The chrome elements of the scene.
    #[inline]
    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    /// Mutable access to the chrome elements of the scene.
    #[inline]
    pub fn chrome_mut(&mut self) -> &mut Chrome {
        &mut self.chrome
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut ds = fmt.debug_struct("Scene");
        match self.image {
            Some(ref img) => {
                let (w, h) = img.dimensions();
                ds.field("image", &format_args!("{}x{}", w, h));
            }
            None => { ds.field("image", &"(none)"); }
        }
        ds.field("chrome", &self.chrome).finish()
    }
}


/// Visibility of the non-content UI elements that must not appear
/// in the exported image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chrome {
    nav_bar: bool,
    tool_bar: bool,
}

impl Default for Chrome {
    /// All chrome starts out visible.
    fn default() -> Self {
        Chrome{nav_bar: true, tool_bar: true}
    }
}

impl Chrome {
    /// Whether the navigation bar is visible.
    #[inline]
    pub fn is_nav_bar_visible(&self) -> bool {
        self.nav_bar
    }

    /// Whether the toolbar is visible.
    #[inline]
    pub fn is_tool_bar_visible(&self) -> bool {
        self.tool_bar
    }

    /// Show or hide the navigation bar.
    #[inline]
    pub fn set_nav_bar_visible(&mut self, visible: bool) {
        self.nav_bar = visible;
    }

    /// Show or hide the toolbar.
    #[inline]
    pub fn set_tool_bar_visible(&mut self, visible: bool) {
        self.tool_bar = visible;
    }
}


/// Guard that hides all chrome elements and puts their previous
/// visibility back when dropped.
///
/// The restore happens on every exit path, panics included,
/// which keeps the hide/show pair symmetric around a snapshot.
#[must_use = "unused guard which would restore the chrome immediately"]
pub struct ChromeGuard<'c> {
    chrome: &'c mut Chrome,
    prior: Chrome,
}

impl<'c> ChromeGuard<'c> {
    /// Hide all chrome elements, remembering their current visibility.
    pub fn hide(chrome: &'c mut Chrome) -> Self {
        let prior = *chrome;
        trace!("Hiding chrome for snapshot (was {:?})", prior);
        chrome.set_nav_bar_visible(false);
        chrome.set_tool_bar_visible(false);
        ChromeGuard{chrome: chrome, prior: prior}
    }
}

impl<'c> Drop for ChromeGuard<'c> {
    fn drop(&mut self) {
        trace!("Restoring chrome to {:?}", self.prior);
        *self.chrome = self.prior;
    }
}
