// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `ARGB` tints.
//!
//! A tint is a packed `0xAARRGGBB` color multiplied into everything a layer
//! draws. Tints compose down the tree channel by channel, so a half-red
//! group over a half-green child yields a quarter of each.

/// The tint that changes nothing: opaque white.
pub const NOOP_TINT: u32 = 0xFFFF_FFFF;

/// Multiplies two tints channel by channel.
///
/// Each channel is `a * (b + 1) >> 8`, which is exact when either side is
/// `0xFF` and never exceeds `0xFF`.
#[must_use]
pub const fn combine(a: u32, b: u32) -> u32 {
    if a == NOOP_TINT {
        return b;
    }
    if b == NOOP_TINT {
        return a;
    }
    let mut out = 0;
    let mut shift = 0;
    while shift < 32 {
        let ca = (a >> shift) & 0xFF;
        let cb = (b >> shift) & 0xFF;
        out |= ((ca * (cb + 1)) >> 8) << shift;
        shift += 8;
    }
    out
}

/// Returns `tint` with its alpha byte replaced by `alpha`, quantized to
/// `[0, 255]`.
#[must_use]
pub fn with_alpha(tint: u32, alpha: f32) -> u32 {
    (u32::from(alpha_byte(alpha)) << 24) | (tint & 0x00FF_FFFF)
}

/// The alpha byte of `tint` as a fraction in `[0, 1]`.
#[must_use]
pub fn alpha_of(tint: u32) -> f32 {
    (tint >> 24) as f32 / 255.0
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is clamped to [0, 255] before the cast"
)]
fn alpha_byte(alpha: f32) -> u8 {
    if alpha.is_nan() {
        return 0;
    }
    (alpha.clamp(0.0, 1.0) * 255.0) as u8
}
