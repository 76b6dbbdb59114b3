//! Confetti color palettes.

use crate::renderer::color::Rgba;

/// Colors of the initial burst, drawn opaque.
pub const BURST_PALETTE: [Rgba; 5] = [
    Rgba::rgb(0x5d, 0x8c, 0xf7),
    Rgba::rgb(0xa1, 0x74, 0xf2),
    Rgba::rgb(0xf6, 0x75, 0xda),
    Rgba::rgb(0xf2, 0x74, 0x8c),
    Rgba::rgb(0xf2, 0x9b, 0x74),
];

/// Colors of particles recycled while streaming.
/// Drawn with `AnimatorConfig::alpha`.
pub const STREAM_PALETTE: [Rgba; 6] = [
    Rgba::rgb(30, 144, 255),  // dodger blue
    Rgba::rgb(107, 142, 35),  // olive drab
    Rgba::rgb(255, 215, 0),   // gold
    Rgba::rgb(255, 105, 180), // hot pink
    Rgba::rgb(138, 43, 226),  // blue violet
    Rgba::rgb(0, 191, 255),   // deep sky blue
];
