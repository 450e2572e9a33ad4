/// Doodle field tuning and page wiring constants.
///
/// Ranges are expressed as `MIN` + `SPAN` pairs: a value is drawn as
/// `MIN + rand * SPAN` with `rand` uniform in [0, 1).
// Number of doodles when the page does not ask for a specific count
pub const DEFAULT_DOODLE_COUNT: usize = 15;

// Per-doodle size (drawing units)
pub const DOODLE_SIZE_MIN: f64 = 30.0;
pub const DOODLE_SIZE_SPAN: f64 = 40.0;

// Rotation speed in radians per frame, centered on zero
pub const ROTATION_SPEED_SPAN: f64 = 0.01;

// Floating motion
pub const FLOAT_SPEED_MIN: f64 = 0.5;
pub const FLOAT_SPEED_SPAN: f64 = 0.5;
pub const FLOAT_AMPLITUDE: f64 = 10.0; // vertical swing in drawing units

// Opacity stays faint so the doodles sit behind the page content
pub const OPACITY_MIN: f64 = 0.12;
pub const OPACITY_SPAN: f64 = 0.10;

// Stroke styling shared by every shape
pub const STROKE_COLOR: &str = "#c97706";
pub const STROKE_WIDTH: f64 = 2.0;
pub const TICKET_DASH: [f64; 2] = [3.0, 3.0];
pub const CORNER_RADIUS: f64 = 4.0;

// DOM ids
pub const DOODLE_CANVAS_ID: &str = "doodle-canvas";

// Backend endpoints
pub const LOCAL_API_BASE_URL: &str = "http://localhost:8000";
pub const RECOMMENDATIONS_PATH: &str = "/movies-with-posters";
pub const BASIC_RECOMMENDATIONS_PATH: &str = "/recommendation";
pub const HEALTH_PATH: &str = "/health";

// Search UI timing (milliseconds)
pub const INPUT_FOCUS_DELAY_MS: i32 = 500;
pub const RESULTS_SCROLL_DELAY_MS: i32 = 100;
pub const CARD_STAGGER_SEC: f64 = 0.1;
