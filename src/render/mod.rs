/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Numeric side of the presentation boundary
//!
//! The renderer itself — window, event loop, projection, draw calls — lives
//! outside this crate. What lives here is every pure mapping a renderer
//! needs to present a normalized field: value → color, value → sphere
//! radius, the stock camera presets for the four-pane view, and the
//! camera/input state an event loop owns and feeds with cursor and key
//! events. Keeping that state in an explicit struct keeps the numeric core
//! free of any hidden dependency on UI state.

use serde::{Deserialize, Serialize};

/// Smallest sphere radius drawn for a density point cloud
pub const MIN_SPHERE_RADIUS: f64 = 0.0;
/// Largest sphere radius drawn for a density point cloud
pub const MAX_SPHERE_RADIUS: f64 = 1.0;

/// An RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Map a normalized value onto the blue-to-red ramp.
///
/// 0 is pure blue, 1 is pure red; the green channel stays empty across the
/// whole ramp.
pub fn color_ramp(normalized: f64) -> Color {
    let t = normalized.clamp(0.0, 1.0) as f32;
    Color {
        r: t,
        g: 0.0,
        b: 1.0 - t,
    }
}

/// Sphere radius for a normalized value, affine between the given bounds.
pub fn radius_for(normalized: f64, min_radius: f64, max_radius: f64) -> f64 {
    min_radius + (max_radius - min_radius) * normalized.clamp(0.0, 1.0)
}

/// Camera eye/center/up triple for one viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LookAt {
    pub eye: [f64; 3],
    pub center: [f64; 3],
    pub up: [f64; 3],
}

/// Stock viewports of the four-pane density view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewPreset {
    AlongX,
    AlongY,
    AlongZ,
    Angled,
}

impl ViewPreset {
    /// Eye distance from the origin shared by all presets, in grid units
    pub const EYE_DISTANCE: f64 = 50.0;

    /// All presets in pane order
    pub const ALL: [ViewPreset; 4] = [
        ViewPreset::AlongX,
        ViewPreset::AlongY,
        ViewPreset::AlongZ,
        ViewPreset::Angled,
    ];

    /// Camera triple for this preset
    pub fn look_at(&self) -> LookAt {
        let d = Self::EYE_DISTANCE;
        let center = [0.0; 3];
        match self {
            ViewPreset::AlongX => LookAt {
                eye: [d, 0.0, 0.0],
                center,
                up: [0.0, 0.0, 1.0],
            },
            ViewPreset::AlongY => LookAt {
                eye: [0.0, d, 0.0],
                center,
                up: [0.0, 0.0, 1.0],
            },
            ViewPreset::AlongZ => LookAt {
                eye: [0.0, 0.0, d],
                center,
                up: [0.0, 1.0, 0.0],
            },
            ViewPreset::Angled => LookAt {
                eye: [d, d, d],
                center,
                up: [0.0, 0.0, 1.0],
            },
        }
    }

    /// On-screen label of the pane
    pub fn label(&self) -> &'static str {
        match self {
            ViewPreset::AlongX => "view along X",
            ViewPreset::AlongY => "view along Y",
            ViewPreset::AlongZ => "view along Z",
            ViewPreset::Angled => "angle view",
        }
    }
}

/// Camera translation directions driven by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
    Forward,
    Backward,
}

/// Externally owned camera/input state
///
/// An event loop owns one of these and feeds it cursor positions and key
/// presses; the accumulated rotation and pan are read back when building
/// the view transform. The numeric core never sees this struct.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewState {
    /// Accumulated rotation about the x axis, in degrees
    pub rotate_x: f32,
    /// Accumulated rotation about the y axis, in degrees
    pub rotate_y: f32,
    /// Accumulated camera translation
    pub pan: [f32; 3],
    last_cursor: Option<(i32, i32)>,
}

impl ViewState {
    /// Translation applied per key press
    pub const PAN_STEP: f32 = 0.5;

    /// Fresh state with no rotation or pan
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the cursor position when a button goes down.
    pub fn begin_drag(&mut self, x: i32, y: i32) {
        self.last_cursor = Some((x, y));
    }

    /// Accumulate rotation from cursor motion.
    ///
    /// Horizontal motion spins about the y axis, vertical motion about the
    /// x axis, one degree per pixel. Motion with no recorded press only
    /// establishes the baseline.
    pub fn drag_to(&mut self, x: i32, y: i32) {
        if let Some((last_x, last_y)) = self.last_cursor {
            self.rotate_x += (y - last_y) as f32;
            self.rotate_y += (x - last_x) as f32;
        }
        self.last_cursor = Some((x, y));
    }

    /// Forget the drag baseline when the button is released.
    pub fn end_drag(&mut self) {
        self.last_cursor = None;
    }

    /// Step the camera translation in response to a key press.
    pub fn step(&mut self, direction: PanDirection) {
        match direction {
            PanDirection::Left => self.pan[0] -= Self::PAN_STEP,
            PanDirection::Right => self.pan[0] += Self::PAN_STEP,
            PanDirection::Up => self.pan[1] += Self::PAN_STEP,
            PanDirection::Down => self.pan[1] -= Self::PAN_STEP,
            PanDirection::Forward => self.pan[2] += Self::PAN_STEP,
            PanDirection::Backward => self.pan[2] -= Self::PAN_STEP,
        }
    }
}
