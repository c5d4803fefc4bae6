//! Color Constants
//!
//! Slate and teal palette used by every view.

use eframe::egui::Color32;

/// Window and central panel background - Deep slate
pub const BG_DARK: Color32 = Color32::from_rgb(0x1E, 0x25, 0x2E);

/// Card background for forms and detail panels - Slate
pub const CARD_BG: Color32 = Color32::from_rgb(0x2A, 0x33, 0x3F);

/// Card border - Muted slate
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x3E, 0x4A, 0x59);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x16, 0x1C, 0x23);

/// Diagnostics panel background
pub const DEBUG_PANEL_BG: Color32 = Color32::from_rgb(0x12, 0x17, 0x1D);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE6, 0xEC, 0xF2);

/// Secondary text color (labels, hints)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xA8, 0xB8);

/// Accent color for primary buttons and headings
pub const ACCENT: Color32 = Color32::from_rgb(0x2A, 0x9D, 0x8F);

/// Accent hover
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x34, 0xB3, 0xA3);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x33, 0x3D, 0x4A);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Trace/debug entries in the diagnostics console
pub const MUTED: Color32 = Color32::from_rgb(0x6B, 0x78, 0x87);
