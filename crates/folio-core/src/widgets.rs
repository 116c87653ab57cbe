//! Option blocks handed to third-party widget libraries.
//!
//! Field names follow each library's own option names (camelCase) so the
//! structs can be serialized straight into the JS constructors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("typed-text element has no items")]
    NoTypedItems,
    #[error("swiper config is not valid JSON: {0}")]
    SwiperJson(#[from] serde_json::Error),
    #[error("swiper config must be a JSON object")]
    SwiperNotObject,
}

/// Smooth-scroll engine options.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LenisOptions {
    pub duration: f64,
    pub smooth_wheel: bool,
    pub smooth_touch: bool,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
}

impl Default for LenisOptions {
    fn default() -> Self {
        Self {
            duration: 1.15,
            smooth_wheel: true,
            smooth_touch: false,
            wheel_multiplier: 1.0,
            touch_multiplier: 1.5,
        }
    }
}

/// Options for a spring tween (`gsap.quickTo`).
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TweenOptions {
    pub duration: f64,
    pub ease: &'static str,
}

impl TweenOptions {
    pub fn power3_out(duration: f64) -> Self {
        Self {
            duration,
            ease: "power3.out",
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AosConfig {
    pub duration: u32,
    pub easing: &'static str,
    pub once: bool,
    pub mirror: bool,
    pub offset: u32,
    pub delay: u32,
}

impl Default for AosConfig {
    fn default() -> Self {
        Self {
            duration: 800,
            easing: "ease-out-cubic",
            once: true,
            mirror: false,
            offset: 100,
            delay: 100,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypedConfig {
    pub strings: Vec<String>,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub type_speed: u32,
    pub back_speed: u32,
    pub back_delay: u32,
    pub cursor_char: &'static str,
    pub smart_backspace: bool,
}

impl TypedConfig {
    /// Build from a `data-typed-items` comma list. Items are trimmed and
    /// blanks dropped.
    pub fn from_items(items: &str) -> Result<Self, WidgetError> {
        let strings: Vec<String> = items
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if strings.is_empty() {
            return Err(WidgetError::NoTypedItems);
        }
        Ok(Self {
            strings,
            looped: true,
            type_speed: 80,
            back_speed: 40,
            back_delay: 2000,
            cursor_char: "|",
            smart_backspace: true,
        })
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct EffectPair {
    #[serde(rename = "in")]
    pub enter: &'static str,
    #[serde(rename = "out")]
    pub leave: &'static str,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct LightboxEffects {
    pub fade: EffectPair,
    pub zoom: EffectPair,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlightboxConfig {
    pub selector: &'static str,
    pub touch_navigation: bool,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub autoplay_videos: bool,
    pub open_effect: &'static str,
    pub close_effect: &'static str,
    // the library spells this option without the second "f"
    #[serde(rename = "cssEfects")]
    pub css_effects: LightboxEffects,
}

impl Default for GlightboxConfig {
    fn default() -> Self {
        Self {
            selector: crate::selectors::GLIGHTBOX,
            touch_navigation: true,
            looped: true,
            autoplay_videos: true,
            open_effect: "zoom",
            close_effect: "fade",
            css_effects: LightboxEffects {
                fade: EffectPair {
                    enter: "fadeIn",
                    leave: "fadeOut",
                },
                zoom: EffectPair {
                    enter: "zoomIn",
                    leave: "zoomOut",
                },
            },
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct StyleState {
    pub opacity: f64,
    pub transform: &'static str,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IsotopeConfig {
    pub item_selector: &'static str,
    pub layout_mode: String,
    pub filter: String,
    pub sort_by: String,
    pub transition_duration: &'static str,
    pub hidden_style: StyleState,
    pub visible_style: StyleState,
}

impl IsotopeConfig {
    /// Build from the layout element's `data-layout`, `data-default-filter`
    /// and `data-sort` attributes.
    pub fn from_attributes(
        layout: Option<String>,
        filter: Option<String>,
        sort: Option<String>,
    ) -> Self {
        Self {
            item_selector: ".isotope-item",
            layout_mode: layout.unwrap_or_else(|| "masonry".into()),
            filter: filter.unwrap_or_else(|| "*".into()),
            sort_by: sort.unwrap_or_else(|| "original-order".into()),
            transition_duration: "0.6s",
            hidden_style: StyleState {
                opacity: 0.0,
                transform: "scale(0.8)",
            },
            visible_style: StyleState {
                opacity: 1.0,
                transform: "scale(1)",
            },
        }
    }
}

/// Arrange call issued when a filter button is clicked.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct IsotopeArrange {
    pub filter: String,
}

/// Inline swiper JSON, kept as an opaque object.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SwiperConfig(pub Map<String, Value>);

impl SwiperConfig {
    pub fn parse(raw: &str) -> Result<Self, WidgetError> {
        match serde_json::from_str::<Value>(raw.trim())? {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(WidgetError::SwiperNotObject),
        }
    }
}

/// Waypoint options for the skills section.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WaypointOffset {
    pub offset: &'static str,
}

impl Default for WaypointOffset {
    fn default() -> Self {
        Self { offset: "80%" }
    }
}

/// `gsap` tween variables for the scroll-linked section effects.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TweenVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
    /// The caller attaches `scrollTrigger.trigger` (a DOM node) after
    /// serializing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_trigger: Option<TriggerVars>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriggerVars {
    pub start: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_actions: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub scrub: bool,
}

impl TweenVars {
    /// Heading characters start below their line and transparent.
    pub fn heading_from() -> Self {
        Self {
            y_percent: Some(110.0),
            opacity: Some(0.0),
            ..Self::default()
        }
    }

    pub fn heading_to() -> Self {
        Self {
            y_percent: Some(0.0),
            opacity: Some(1.0),
            duration: Some(0.7),
            ease: Some("power3.out"),
            stagger: Some(0.02),
            scroll_trigger: Some(TriggerVars {
                start: "top 78%",
                toggle_actions: Some("play none none none"),
                ..TriggerVars::default()
            }),
            ..Self::default()
        }
    }

    /// Section images drift and settle while their section crosses the
    /// viewport.
    pub fn image_from() -> Self {
        Self {
            y: Some(-18.0),
            scale: Some(1.06),
            ..Self::default()
        }
    }

    pub fn image_to() -> Self {
        Self {
            y: Some(18.0),
            scale: Some(1.0),
            ease: Some("none"),
            scroll_trigger: Some(TriggerVars {
                start: "top bottom",
                end: Some("bottom top"),
                scrub: true,
                ..TriggerVars::default()
            }),
            ..Self::default()
        }
    }
}

/// CSS width for a progress bar from its `aria-valuenow`.
pub fn progress_width(value_now: Option<&str>) -> String {
    let v = value_now.map(str::trim).unwrap_or("0");
    format!("{}%", if v.is_empty() { "0" } else { v })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_items_are_split_and_trimmed() {
        let c = TypedConfig::from_items("Designer, Developer,,Freelancer ").unwrap();
        assert_eq!(c.strings, vec!["Designer", "Developer", "Freelancer"]);
        assert!(matches!(
            TypedConfig::from_items(" , "),
            Err(WidgetError::NoTypedItems)
        ));
    }

    #[test]
    fn typed_config_uses_library_option_names() {
        let v = serde_json::to_value(TypedConfig::from_items("a").unwrap()).unwrap();
        assert_eq!(v["loop"], true);
        assert_eq!(v["typeSpeed"], 80);
        assert_eq!(v["smartBackspace"], true);
    }

    #[test]
    fn isotope_defaults_apply_per_attribute() {
        let c = IsotopeConfig::from_attributes(None, Some(".filter-app".into()), None);
        assert_eq!(c.layout_mode, "masonry");
        assert_eq!(c.filter, ".filter-app");
        assert_eq!(c.sort_by, "original-order");
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["itemSelector"], ".isotope-item");
        assert_eq!(v["hiddenStyle"]["transform"], "scale(0.8)");
    }

    #[test]
    fn swiper_config_must_be_an_object() {
        let c = SwiperConfig::parse("\n  {\"loop\": true, \"speed\": 600}\n").unwrap();
        assert_eq!(c.0["speed"], 600);
        assert!(matches!(
            SwiperConfig::parse("[1,2]"),
            Err(WidgetError::SwiperNotObject)
        ));
        assert!(matches!(
            SwiperConfig::parse("{loop: true}"),
            Err(WidgetError::SwiperJson(_))
        ));
    }

    #[test]
    fn glightbox_keeps_library_spelling() {
        let v = serde_json::to_value(GlightboxConfig::default()).unwrap();
        assert_eq!(v["cssEfects"]["zoom"]["in"], "zoomIn");
        assert_eq!(v["openEffect"], "zoom");
    }

    #[test]
    fn progress_width_defaults_to_zero() {
        assert_eq!(progress_width(Some("85")), "85%");
        assert_eq!(progress_width(None), "0%");
        assert_eq!(progress_width(Some(" ")), "0%");
    }

    #[test]
    fn tween_vars_omit_unset_fields() {
        let v = serde_json::to_value(TweenVars::heading_to()).unwrap();
        assert_eq!(v["yPercent"], 0.0);
        assert_eq!(v["scrollTrigger"]["start"], "top 78%");
        assert!(v.get("y").is_none());
        assert!(v["scrollTrigger"].get("scrub").is_none());
        let img = serde_json::to_value(TweenVars::image_to()).unwrap();
        assert_eq!(img["scrollTrigger"]["scrub"], true);
        assert_eq!(img["scrollTrigger"]["end"], "bottom top");
    }
}
