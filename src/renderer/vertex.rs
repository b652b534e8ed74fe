//! Vertex and colour types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA colour
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour (alpha = 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same colour with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Normalized `[r, g, b, a]` for shader uniforms
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        color.rgba()
    }
}

/// Named palette entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::White,
        Color::Black,
    ];

    pub const fn rgba(self) -> Rgba {
        PALETTE[self as usize]
    }

    /// Palette entry by wrapping index (scroll-wheel style cycling)
    pub fn cycle(index: i32) -> Color {
        Self::ALL[index.rem_euclid(Self::ALL.len() as i32) as usize]
    }
}

/// Palette table, indexed by `Color`
pub const PALETTE: [Rgba; 5] = [
    Rgba::rgb(255, 0, 0),
    Rgba::rgb(0, 255, 0),
    Rgba::rgb(0, 0, 255),
    Rgba::rgb(255, 255, 255),
    Rgba::rgb(0, 0, 0),
];

/// 2D vertex with position, colour and texture coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Vec2,
    pub color: Rgba,
    pub tex_coords: Vec2,
}

impl Vertex {
    pub const fn new(position: Vec2, color: Rgba, tex_coords: Vec2) -> Self {
        Self {
            position,
            color,
            tex_coords,
        }
    }

    /// Untextured vertex
    pub const fn colored(position: Vec2, color: Rgba) -> Self {
        Self::new(position, color, Vec2::ZERO)
    }
}
