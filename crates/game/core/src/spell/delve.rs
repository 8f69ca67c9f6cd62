//! Number formatting shared by spell delve output.

/// Cast time in seconds, or `"instant"`.
///
/// Always prints one decimal place, plus up to two more when they are
/// non-zero (`2.0 sec`, `2.5 sec`, `2.75 sec`, `1.125 sec`).
pub fn format_cast_time(cast_time_ms: u32) -> String {
    if cast_time_ms == 0 {
        return "instant".to_string();
    }

    let mut text = format!("{:.3}", f64::from(cast_time_ms) / 1000.0);
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    format!("{text} sec")
}

/// Power cost as printed; negative costs are a percentage of max power.
pub fn format_power_cost(power: i32) -> String {
    if power < 0 {
        format!("{}%", power.unsigned_abs())
    } else {
        power.to_string()
    }
}
