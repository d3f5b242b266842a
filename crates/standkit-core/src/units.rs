//! Unit conversion and label formatting utilities
//!
//! The document model stores lengths in millimetres; derived geometry works
//! in metres. Dimension call-outs on drawings show whole millimetres with
//! dot-grouped thousands in the Italian convention ("4.500 mm").

/// Millimetres per metre.
pub const MM_PER_M: f64 = 1000.0;

/// Convert millimetres to metres.
pub fn mm_to_m(value_mm: f64) -> f64 {
    value_mm / MM_PER_M
}

/// Convert metres to millimetres.
pub fn m_to_mm(value_m: f64) -> f64 {
    value_m * MM_PER_M
}

/// Group an integer with a dot every three digits ("12500" -> "12.500").
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == lead {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format a length in metres as a millimetre call-out ("1.5" -> "1.500 mm").
///
/// * `value_m` - Length in metres
pub fn format_mm(value_m: f64) -> String {
    format!("{} mm", group_thousands(m_to_mm(value_m).round() as i64))
}

/// Format a mass rounded to whole kilograms ("~312 kg").
///
/// * `value_kg` - Mass in kilograms
pub fn format_kg(value_kg: f64) -> String {
    format!("~{} kg", value_kg.round() as i64)
}
