// Shared effect tuning constants used by the web frontend.

// Cursor
pub const CURSOR_SMOOTHING: f32 = 0.18; // fallback lerp factor per frame
pub const CURSOR_TWEEN_SEC: f64 = 0.15; // spring tween time constant
pub const CURSOR_HOVER_SCALE: f32 = 1.65;
pub const CURSOR_IDLE_SCALE: f32 = 1.0;

// Particle trail
pub const TRAIL_MAX_PARTICLES: usize = 180;
pub const TRAIL_LIFE_STEP: f32 = 0.03; // life lost per frame
pub const TRAIL_SPEED_CAP: f32 = 18.0; // px/frame
pub const TRAIL_SPEED_PER_PARTICLE: f32 = 6.0;
pub const TRAIL_MIN_SPAWN: usize = 1;
pub const TRAIL_MAX_SPAWN: usize = 4;
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 1.8;
pub const PARTICLE_ORBIT_MIN: f32 = 6.0;
pub const PARTICLE_ORBIT_SPAN: f32 = 10.0;
pub const PARTICLE_SPIN_MIN: f32 = 0.05; // radians per frame
pub const PARTICLE_SPIN_SPAN: f32 = 0.08;
pub const PARTICLE_FILL: &str = "rgba(255,255,255,0.95)";

// Canvas backing store
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Scene followers (scene units)
pub const FOLLOW_RANGE_X_MIN: f32 = 220.0;
pub const FOLLOW_RANGE_Y_MIN: f32 = 160.0;
pub const FOLLOW_RANGE_X_DIVISOR: f32 = 2.2;
pub const FOLLOW_RANGE_Y_DIVISOR: f32 = 2.4;
pub const FOLLOW_RESTITUTION: f32 = -0.5;
pub const FOLLOW_EDGE_SOFTNESS: f32 = 0.05;
pub const STARS_FOLLOW: f32 = 0.0006; // heavy
pub const STARS_FRICTION: f32 = 0.96;
pub const STARS_OUTPUT_SCALE: f32 = 0.90;
pub const TORNADO_FOLLOW: f32 = 0.0012; // lighter, more responsive
pub const TORNADO_FRICTION: f32 = 0.97;
pub const TORNADO_OUTPUT_SCALE: f32 = 1.0;

// Scene camera rig
pub const CAMERA_SMOOTHING: f32 = 0.12;
pub const CAMERA_TWEEN_SEC: f64 = 0.35;
pub const CAMERA_YAW_GAIN: f32 = 0.35;
pub const CAMERA_PITCH_GAIN: f32 = 0.2;

// Breakpoints (CSS px)
pub const NAV_COMPACT_MAX_WIDTH: f64 = 1199.0;
pub const SCENE_STATIC_BELOW_WIDTH: f64 = 768.0;

// Scroll
pub const SCROLL_SPY_OFFSET: f64 = 200.0;
pub const SCROLL_TOP_VISIBLE_AFTER: f64 = 100.0;
pub const PARALLAX_BASE_SPEED: f64 = 0.5;
pub const PARALLAX_SPEED_STEP: f64 = 0.2;
pub const HASH_SCROLL_DELAY_MS: i32 = 100;

// Reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_OFFSET_PX: f64 = 20.0;
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// Hover effects
pub const MAGNETIC_RANGE: f64 = 50.0;
pub const MAGNETIC_GAIN: f64 = 0.22;
pub const MAGNETIC_MAX_SHIFT: f64 = 14.0;
pub const TILT_MAX_DEG: f64 = 8.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const CARD_LIFT_PX: f64 = -12.0;
pub const CARD_LIFT_SCALE: f64 = 1.02;
pub const FOCUS_SCALE: f64 = 1.02;

// Loading screen
pub const LOADER_CEILING_PERCENT: f64 = 92.0; // progress creeps toward this until loaded
pub const LOADER_RAMP_MS: f64 = 2200.0;
pub const LOADER_PAINT_INTERVAL_MS: f64 = 50.0;
pub const LOADER_SAFETY_TIMEOUT_MS: i32 = 12_000;
pub const LOADER_FADE_MS: i32 = 550;
pub const PRELOADER_FADE_MS: i32 = 600;

// Scene loading triggers
pub const SCENE_IDLE_TIMEOUT_MS: u32 = 1500;
pub const SCENE_FALLBACK_DELAY_MS: i32 = 800;

// Skills bars
pub const SKILL_BAR_STAGGER_MS: i32 = 100;
pub const SKILL_BAR_TRANSITION: &str = "width 1.5s cubic-bezier(0.4, 0, 0.2, 1)";
