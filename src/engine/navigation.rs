//! Screen sequencing: welcome → intro → cube ⇄ page.
//!
//! The navigator is the only place that changes which screen is shown.
//! Panel visibility and the active render driver are pure functions of the
//! current [`NavigationState`].

use crate::options::FaceOptions;

/// Which screen is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavigationState {
    /// Landing screen with the spectrum animation.
    #[default]
    Welcome,
    /// Short interstitial before the cube appears.
    Intro,
    /// Interactive cube menu.
    Cube,
    /// A face's content page is open over the cube.
    PageOpen(usize),
}

impl NavigationState {
    /// Whether drag, touch and wheel input should reach the orientation.
    #[must_use]
    pub fn accepts_input(self) -> bool {
        matches!(self, Self::Cube)
    }

    /// Render driver that should run for this state.
    #[must_use]
    pub fn active_scene(self) -> Option<SceneKind> {
        match self {
            Self::Welcome => Some(SceneKind::Welcome),
            Self::Intro => None,
            Self::Cube | Self::PageOpen(_) => Some(SceneKind::Cube),
        }
    }

    /// Face whose page is open, if any.
    #[must_use]
    pub fn open_face(self) -> Option<usize> {
        match self {
            Self::PageOpen(face) => Some(face),
            _ => None,
        }
    }
}

/// The two independent per-frame render drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Spectrum shape with drifting particles.
    Welcome,
    /// The navigation cube.
    Cube,
}

/// Visibility of every screen element, derived from the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Panels<'a> {
    /// Welcome screen with the start button.
    pub welcome: bool,
    /// Intro interstitial.
    pub intro: bool,
    /// Cube canvas (stays visible behind an open page).
    pub cube: bool,
    /// Page overlay container.
    pub overlay: bool,
    /// Close-page button.
    pub close_button: bool,
    /// Content id of the page currently shown.
    pub page: Option<&'a str>,
}

/// Owns the navigation state and enforces the legal transitions.
///
/// Illegal transitions are silent no-ops reported as `false`.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavigationState,
}

impl Navigator {
    /// Navigator on the welcome screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Welcome → Intro.
    pub fn start(&mut self) -> bool {
        self.transition(NavigationState::Welcome, NavigationState::Intro)
    }

    /// Intro → Cube.
    pub fn finish_intro(&mut self) -> bool {
        self.transition(NavigationState::Intro, NavigationState::Cube)
    }

    /// Cube → PageOpen(face).
    pub fn open_page(&mut self, face: usize) -> bool {
        self.transition(NavigationState::Cube, NavigationState::PageOpen(face))
    }

    /// PageOpen(_) → Cube.
    pub fn close_page(&mut self) -> bool {
        match self.state {
            NavigationState::PageOpen(face) => {
                log::info!("navigation: close page {face}");
                self.state = NavigationState::Cube;
                true
            }
            _ => false,
        }
    }

    fn transition(
        &mut self,
        from: NavigationState,
        to: NavigationState,
    ) -> bool {
        if self.state != from {
            log::debug!(
                "navigation: ignored {from:?} -> {to:?} while in {:?}",
                self.state
            );
            return false;
        }
        log::info!("navigation: {from:?} -> {to:?}");
        self.state = to;
        true
    }

    /// Element visibility for the current state.
    #[must_use]
    pub fn panels<'a>(&self, faces: &'a FaceOptions) -> Panels<'a> {
        let page = self
            .state
            .open_face()
            .and_then(|face| faces.face(face))
            .map(|face| face.content_id.as_str());
        let page_open = matches!(self.state, NavigationState::PageOpen(_));
        Panels {
            welcome: self.state == NavigationState::Welcome,
            intro: self.state == NavigationState::Intro,
            cube: matches!(self.state.active_scene(), Some(SceneKind::Cube)),
            overlay: page_open,
            close_button: page_open,
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sequence() {
        let mut nav = Navigator::new();
        assert_eq!(nav.state(), NavigationState::Welcome);
        assert!(nav.start());
        assert!(nav.finish_intro());
        assert!(nav.open_page(3));
        assert_eq!(nav.state(), NavigationState::PageOpen(3));
        assert!(nav.close_page());
        assert_eq!(nav.state(), NavigationState::Cube);
    }

    #[test]
    fn welcome_and_intro_are_never_reentered() {
        let mut nav = Navigator::new();
        assert!(nav.start());
        assert!(!nav.start());
        assert!(nav.finish_intro());
        assert!(!nav.start());
        assert!(!nav.finish_intro());
        assert_eq!(nav.state(), NavigationState::Cube);
    }

    #[test]
    fn pages_only_open_from_cube() {
        let mut nav = Navigator::new();
        assert!(!nav.open_page(0));
        assert!(!nav.close_page());
        assert!(nav.start());
        assert!(!nav.open_page(0));
        assert!(nav.finish_intro());
        assert!(nav.open_page(0));
        assert!(!nav.open_page(1));
        assert_eq!(nav.state().open_face(), Some(0));
    }

    #[test]
    fn panels_follow_state() {
        let faces = FaceOptions::default();
        let mut nav = Navigator::new();
        let welcome = nav.panels(&faces);
        assert!(welcome.welcome && !welcome.cube && welcome.page.is_none());

        let _ = nav.start();
        let intro = nav.panels(&faces);
        assert!(intro.intro && !intro.welcome && !intro.cube);

        let _ = nav.finish_intro();
        let _ = nav.open_page(5);
        let page = nav.panels(&faces);
        assert!(page.cube && page.overlay && page.close_button);
        assert_eq!(page.page, Some("page-contact"));
    }

    #[test]
    fn only_cube_accepts_input() {
        assert!(!NavigationState::Welcome.accepts_input());
        assert!(!NavigationState::Intro.accepts_input());
        assert!(NavigationState::Cube.accepts_input());
        assert!(!NavigationState::PageOpen(2).accepts_input());
        assert_eq!(NavigationState::Intro.active_scene(), None);
        assert_eq!(
            NavigationState::PageOpen(2).active_scene(),
            Some(SceneKind::Cube)
        );
    }
}
