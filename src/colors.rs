//! ARGB color constants for canvas output.

pub const BACKGROUND: u32 = 0xFF1A1A26;
pub const GRID: u32 = 0xFF333333;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const RED: u32 = 0xFFFF4C4C;
pub const GREEN: u32 = 0xFF33FF66;
pub const BLUE: u32 = 0xFF4C7FFF;
pub const YELLOW: u32 = 0xFFFFCC33;
pub const CYAN: u32 = 0xFF4CE5FF;
pub const MAGENTA: u32 = 0xFFFF4CFF;
