//! 8-bit HSV conversion.
//!
//! Hue is stored halved so it fits a byte: H in [0, 180), S and V in
//! [0, 255]. One hue step is two degrees.

/// Period of the hue wheel in stored units
pub const HUE_PERIOD: i32 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let diff = max - min;

    let s = if max == 0.0 { 0.0 } else { 255.0 * diff / max };

    let degrees = if diff == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (gf - bf) / diff
    } else if max == gf {
        120.0 + 60.0 * (bf - rf) / diff
    } else {
        240.0 + 60.0 * (rf - gf) / diff
    };
    let degrees = if degrees < 0.0 { degrees + 360.0 } else { degrees };
    let h = ((degrees / 2.0).round() as i32).rem_euclid(HUE_PERIOD);

    Hsv {
        h: h as u8,
        s: s.round().clamp(0.0, 255.0) as u8,
        v: max as u8,
    }
}

pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let s = hsv.s as f32 / 255.0;
    let v = hsv.v as f32;
    if hsv.s == 0 {
        return (hsv.v, hsv.v, hsv.v);
    }

    let sector_pos = (hsv.h as f32 * 2.0) / 60.0;
    let sector = sector_pos.floor();
    let f = sector_pos - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (to_u8(r), to_u8(g), to_u8(b))
}

/// Rotate a stored hue value around the wheel
pub fn shift_hue(h: u8, delta: i32) -> u8 {
    (h as i32 + delta).rem_euclid(HUE_PERIOD) as u8
}

fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
