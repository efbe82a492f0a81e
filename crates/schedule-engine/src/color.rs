//! Stable label colors for calendar rendering.
//!
//! The same label always maps to the same color, in every client, so a
//! subject or section keeps its color across page loads. The hash runs over
//! UTF-16 code units with 32-bit wrapping so it matches what a browser
//! computes with `charCodeAt`.

/// Map a label to a `#rrggbb` color.
pub fn color_for(label: &str) -> String {
    let hash = label_hash(label);

    let mut color = String::with_capacity(7);
    color.push('#');
    for shift in [0, 8, 16] {
        let channel = (hash >> shift) & 0xFF;
        color.push_str(&format!("{:02x}", channel));
    }
    color
}

/// `hash * 31 + unit` over the label, truncated to `i32` at every step.
fn label_hash(label: &str) -> i32 {
    label.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}
