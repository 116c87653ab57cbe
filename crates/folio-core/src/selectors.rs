//! DOM ids, selectors and class names the web layer looks up.
//!
//! Every component reads its anchors from here so the navigation, reveal and
//! effects code agree on one set of names.

// Navigation
pub const HEADER: &str = "#header";
pub const HEADER_TOGGLE: &str = "#header .header-toggle";
pub const HEADER_SHOW_CLASS: &str = "header-show";
pub const PRIMARY_NAV_ID: &str = "navmenu";
pub const PRIMARY_NAV_LINKS: &str = "#navmenu a";
pub const NAV_LINKS: &str = ".navmenu a";
pub const NAV_DROPDOWN_TOGGLES: &str = ".navmenu .toggle-dropdown";
pub const NAV_OPEN_CLASS: &str = "nav-open";
pub const MOBILE_NAV_ACTIVE_CLASS: &str = "mobile-nav-active";
pub const MOBILE_TOGGLE: &str = ".mobile-header-toggle";
pub const MOBILE_TOGGLE_CLASS: &str = "mobile-header-toggle";
pub const MOBILE_NAV_ID: &str = "mobile-nav";
pub const MOBILE_NAV_INNER_CLASS: &str = "mobile-nav-inner";
pub const MOBILE_NAV_MENU_ID: &str = "mobile-navmenu";
pub const BACKDROP_ID: &str = "nav-backdrop";
pub const ICON_CLASS: &str = "bi";
pub const ICON_OPEN_CLASS: &str = "bi-x";
pub const ICON_CLOSED_CLASS: &str = "bi-list";
pub const ACTIVE_CLASS: &str = "active";
pub const DROPDOWN_ACTIVE_CLASS: &str = "dropdown-active";

// Scroll
pub const SCROLL_TOP: &str = ".scroll-top";
pub const PARALLAX_TARGETS: &str = ".bg-circle";
pub const REVEAL_TARGETS: &str = ".skill-item, .experience-item, .project-card";
pub const SECTIONS: &str = "section";
pub const SECTION_HEADINGS: &str =
    ".section-title h1, .section-title h2, .section-title h3, header h1, header h2, h1, h2";
pub const SPLIT_CHAR_CLASS: &str = "gsap-char";
pub const SPLIT_DONE_ATTR: &str = "data-gsap-split-done";
pub const SPLIT_ORIGINAL_ATTR: &str = "data-gsap-original-text";
pub const GRADIENT_TEXT: &str = ".accent-text, .badge-text";

// Effects engine
pub const CURSOR_CLASS: &str = "vortex-cursor";
pub const CURSOR_HOVER_CLASS: &str = "is-hover";
pub const CUSTOM_CURSOR_BODY_CLASS: &str = "has-custom-cursor";
pub const TRAIL_CANVAS_ID: &str = "star-trail-canvas";
pub const CURSOR_HOVER_TARGETS: &str = "a, button, .btn, .project-card";

// Media queries gating pointer-driven motion
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const FINE_POINTER_QUERY: &str = "(hover: hover) and (pointer: fine)";

// Hover effects
pub const MAGNETIC_TARGETS: &str = ".btn, .navmenu a";
pub const TILT_TARGETS: &str = ".profile-card, .project-card, .experience-item";
pub const LIFT_TARGETS: &str = ".project-card";
pub const SHINE_CLASS: &str = "glass-shine";
pub const FORM_CONTROLS: &str = ".form-control";

// Background layers
pub const SCENE_BG_ID: &str = "spline-bg";
pub const SCENE_CANVAS_ID: &str = "canvas3d";
pub const SCENE_SPINNER_ID: &str = "spline-loading";
pub const SCENE_LOADED_BODY_CLASS: &str = "spline-loaded";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const NOISE_OVERLAY_ID: &str = "noise-overlay";
pub const CONTRAST_OVERLAY_ID: &str = "contrast-overlay";
pub const PRELOADER: &str = "#preloader";
pub const HIDDEN_CLASS: &str = "hidden";

// Widgets
pub const INIT_MARKER_ATTR: &str = "data-folio-init";
pub const TYPED: &str = ".typed";
pub const TYPED_ITEMS_ATTR: &str = "data-typed-items";
pub const GLIGHTBOX: &str = ".glightbox";
pub const SWIPERS: &str = ".init-swiper";
pub const SWIPER_CONFIG: &str = ".swiper-config";
pub const SWIPER_TAB_CLASS: &str = "swiper-tab";
pub const ISOTOPE_LAYOUTS: &str = ".isotope-layout";
pub const ISOTOPE_CONTAINER: &str = ".isotope-container";
pub const ISOTOPE_FILTERS: &str = ".isotope-filters li";
pub const ISOTOPE_ACTIVE_FILTER: &str = ".isotope-filters .filter-active";
pub const FILTER_ACTIVE_CLASS: &str = "filter-active";
pub const SKILLS_ANIMATION: &str = ".skills-animation";
pub const SKILL_PROGRESS_BARS: &str = ".progress .progress-bar";

// Contact form
pub const CONTACT_FORM: &str = "#contact-form";
pub const FORM_LOADING: &str = ".loading";
pub const FORM_ERROR: &str = ".error-message";
pub const FORM_SENT: &str = ".sent-message";
pub const FORM_SUBMIT: &str = "[type=submit]";
pub const VISIBLE_CLASS: &str = "d-block";

// Site configuration blob
pub const SITE_CONFIG_ID: &str = "folio-config";
