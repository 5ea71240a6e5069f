//! Viewport/user-agent lockout gate
//!
//! The games are mouse-and-keyboard experiences; small screens and mobile
//! browsers get a block screen instead. Re-evaluate on every resize.

/// Minimum viewport width the games support, in CSS pixels.
pub const MIN_VIEWPORT_WIDTH: u32 = 1024;

/// Known mobile user-agent signatures (matched case-insensitively).
const MOBILE_SIGNATURES: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// True when the device should be blocked from playing.
pub fn is_blocked_device(viewport_width: u32, user_agent: &str) -> bool {
    if viewport_width < MIN_VIEWPORT_WIDTH {
        return true;
    }
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_SIGNATURES.iter().any(|sig| ua.contains(sig))
}
