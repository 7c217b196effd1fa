// =============================================================================
// COLOR SCHEME - Charcoal Monochrome with Functional Accents
// =============================================================================
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_PLAYHEAD: &str = "#ef4444";
pub const ACCENT_RANGE: &str = "#3b82f6";
pub const ACCENT_SERIES_1: &str = "#22c55e";
pub const ACCENT_SERIES_2: &str = "#a855f7";
pub const ACCENT_HIGHLIGHT: &str = "#facc15";

pub const TONE_START: &str = "#22c55e";
pub const TONE_WARNING: &str = "#f97316";
pub const TONE_FINISH: &str = "#3b82f6";
pub const TONE_CHECK: &str = "#a1a1aa";

// Layout
pub const SETTINGS_FILE: &str = "timeline.json";
pub const TRACK_LABEL_WIDTH: f64 = 160.0;
pub const RULER_HEIGHT: f64 = 24.0;
pub const LANE_COLLAPSED_HEIGHT: f64 = 36.0;
pub const LANE_EXPANDED_HEIGHT: f64 = 96.0;
pub const SCRUB_BAR_HEIGHT: f64 = 28.0;
pub const INSPECTOR_WIDTH: f64 = 260.0;
/// Seconds moved by the skip buttons and arrow keys.
pub const SKIP_SECONDS: f64 = 1.0;
/// Half-width of the range the inspector frames around an event.
pub const FRAME_EVENT_SECONDS: f64 = 2.0;

/// Keeps every `[data-scroll-region]` element on one horizontal offset and
/// reports viewport sizes.
///
/// Outbound messages: `{kind: "scroll", region, offset}`,
/// `{kind: "viewport", width}` and `{kind: "scrubber", width}`.
/// Inbound: `{offset, targets}`, applied as `scrollLeft` on each target.
pub const TIMELINE_SYNC_SCRIPT: &str = r#"
const viewportId = "timeline-scroll-host";
const scrubberId = "timeline-scrub-bar";
const lastWidths = {};

function sendWidth(kind, id) {
    const el = document.getElementById(id);
    if (!el) {
        return;
    }
    const width = el.clientWidth || 0;
    if (lastWidths[kind] !== undefined && Math.abs(lastWidths[kind] - width) < 0.5) {
        return;
    }
    lastWidths[kind] = width;
    dioxus.send({ kind: kind, width: width });
}

function attach(kind, id) {
    const el = document.getElementById(id);
    if (!el) {
        setTimeout(() => attach(kind, id), 100);
        return;
    }
    const observer = new ResizeObserver(() => sendWidth(kind, id));
    observer.observe(el);
    window.addEventListener("resize", () => sendWidth(kind, id), { passive: true });
    sendWidth(kind, id);
}

// Scroll events do not bubble; capture them at the document.
document.addEventListener("scroll", (event) => {
    const el = event.target;
    if (!el || !el.dataset || !el.dataset.scrollRegion) {
        return;
    }
    dioxus.send({ kind: "scroll", region: el.dataset.scrollRegion, offset: el.scrollLeft });
}, { capture: true, passive: true });

attach("viewport", viewportId);
attach("scrubber", scrubberId);

while (true) {
    const msg = await dioxus.recv();
    if (!msg || !Array.isArray(msg.targets)) {
        continue;
    }
    for (const region of msg.targets) {
        const el = document.querySelector(`[data-scroll-region="${region}"]`);
        if (el && Math.abs(el.scrollLeft - msg.offset) >= 0.5) {
            el.scrollLeft = msg.offset;
        }
    }
}
"#;
