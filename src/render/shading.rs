//! Banded shading: distance and screen row pick one palette entry, with a
//! two-colour checkerboard between bands instead of any blending.
use crate::render::casters::Impact;
use crate::render::palette::Palette;

/// Smallest distance used for projection.
pub const MIN_DISTANCE: f32 = 1e-3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Span {
    Ceiling,
    Wall,
    Floor,
}

/// Ceiling and floor rows for a wall at `distance`.
#[inline]
pub fn projection(distance: f32, screen_height: u32) -> (f32, f32) {
    let h = screen_height as f32;
    let ceiling = h / 2.0 - h / distance.max(MIN_DISTANCE);
    (ceiling, h - ceiling)
}

#[inline]
pub fn span(y: u32, ceiling: f32, floor: f32) -> Span {
    let y = y as f32;
    if y < ceiling {
        Span::Ceiling
    } else if y < floor {
        Span::Wall
    } else {
        Span::Floor
    }
}

/// `even` where column and row parity agree, `odd` elsewhere.
#[inline]
pub fn dither(x: u32, y: u32, even: Palette, odd: Palette) -> Palette {
    if (x ^ y) & 1 == 0 { even } else { odd }
}

pub fn wall_shade(
    distance: f32,
    max_depth: f32,
    impact: Impact,
    boundary: bool,
    show_boundaries: bool,
    x: u32,
    y: u32,
) -> Palette {
    use crate::render::palette::Palette::*;

    if show_boundaries && boundary {
        return Black;
    }
    let exit = impact == Impact::Exit;
    let d = distance;
    let depth = max_depth;

    if d <= depth / 7.0 {
        if exit { Lime } else { LightBlue }
    } else if d < depth / 6.0 {
        if exit { Lime } else { dither(x, y, LightBlue, Gray) }
    } else if d < depth / 5.0 {
        if exit { Lime } else { Gray }
    } else if d < depth / 4.0 {
        if exit { Brown } else { dither(x, y, Gray, Navy) }
    } else if d < depth / 3.0 {
        if exit { Green } else { Navy }
    } else if d < depth / 2.0 {
        if exit { DarkBlue } else { dither(x, y, Navy, Black) }
    } else {
        Black
    }
}

pub fn floor_shade(x: u32, y: u32, screen_height: u32) -> Palette {
    use crate::render::palette::Palette::*;

    let half = screen_height as f32 / 2.0;
    let b = 1.0 - (y as f32 - half) / half;
    if b < 0.25 {
        Pink
    } else if b < 0.5 {
        dither(x, y, Pink, Purple)
    } else if b < 0.75 {
        Purple
    } else if b < 0.9 {
        dither(x, y, Purple, Black)
    } else {
        Black
    }
}

pub const CEILING: Palette = Palette::Black;
