//! The 16-colour master palette.
//!
//! Slot order matches the indices the graphics data was drawn against, so
//! the emitted assignments land each colour in its expected palette slot.

use crate::color::Rgb;

/// Master palette: 16 colours as `#RRGGBB` literals, indexed 0-15.
pub const PALETTE: [&str; 16] = [
    "#000000", // 0: Black
    "#ffffff", // 1: White
    "#ff0000", // 2: Red
    "#00ff00", // 3: Green
    "#0000ff", // 4: Blue
    "#007F46", // 5: Dark Green
    "#32BCFF", // 6: Cyan
    "#195EBD", // 7: Dark Blue
    "#dd8855", // 8: Tan
    "#664400", // 9: Brown
    "#ff7777", // 10: Light Red
    "#333333", // 11: Dark Grey
    "#777777", // 12: Grey
    "#aaff66", // 13: Light Green
    "#0088ff", // 14: Light Blue
    "#bbbbbb", // 15: Light Grey
];

/// Generate one `palette[slot] = 0x...;` assignment per slot, in slot order.
pub fn assignments() -> Result<Vec<String>, String> {
    PALETTE
        .iter()
        .enumerate()
        .map(|(slot, hex)| {
            let packed = Rgb::from_hex(hex)?.to_bgr555();
            Ok(format!("palette[{slot}] = {packed:#x};"))
        })
        .collect()
}
