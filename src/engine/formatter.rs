// ==========================================
// 产线 OEE 效率报表 - 展示格式化
// ==========================================
// 职责: 比率/差值转百分比字符串,停机时长转可读字符串
// 舍入: 恰好落在两档正中时远离零进位（0.90625 → 0.9063）
// ==========================================

/// 默认小数位
pub const DEFAULT_DECIMALS: usize = 1;

/// 定点格式化,保留 `decimals` 位小数
///
/// 非中点值与 `{:.N}` 一致；中点值向远离零的方向进位。
/// `-0.0` 按 `0` 输出。
pub fn fixed(value: f64, decimals: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };

    match midpoint_round_up(value.abs(), decimals) {
        Some(digits) if value < 0.0 => format!("-{}", digits),
        Some(digits) => digits,
        None => format!("{:.*}", decimals, value),
    }
}

/// 中点进位
///
/// 二进制浮点落在中点,当且仅当 `magnitude × 2^(decimals+1)` 为奇数。
/// 此时进位后的整数 = (奇数 × 5^decimals + 1) / 2。非中点返回 None。
fn midpoint_round_up(magnitude: f64, decimals: usize) -> Option<String> {
    let exponent = i32::try_from(decimals).ok()?.checked_add(1)?;
    let doubled = magnitude * 2f64.powi(exponent);
    if !doubled.is_finite() || doubled.fract() != 0.0 || doubled % 2.0 != 1.0 {
        return None;
    }

    let odd = (doubled as u128).checked_mul(5u128.checked_pow(u32::try_from(decimals).ok()?)?)?;
    let scaled = (odd + 1) / 2;

    let digits = format!("{:0>width$}", scaled, width = decimals + 1);
    if decimals == 0 {
        return Some(digits);
    }
    let (int_part, frac_part) = digits.split_at(digits.len() - decimals);
    Some(format!("{}.{}", int_part, frac_part))
}

/// 比率 → 百分比字符串
///
/// `percentage(0.8567, 2)` → `"85.67%"`
pub fn percentage(value: f64, decimals: usize) -> String {
    format!("{}%", fixed(value * 100.0, decimals))
}

/// 差值 → 带符号百分比字符串
///
/// 非负（含零）加 `+`，负值保留自然的 `-`。
pub fn delta(value: f64, decimals: usize) -> String {
    if value >= 0.0 {
        // -0.0 也走这里,统一按 +0 输出
        format!("+{}%", fixed(value.abs() * 100.0, decimals))
    } else {
        format!("{}%", fixed(value * 100.0, decimals))
    }
}

/// 停机时长（分钟）→ 可读字符串
///
/// - 不足 60 分钟: `45m`
/// - 整小时: `2h`
/// - 其余: `1h 30m`
pub fn duration(minutes: f64) -> String {
    if minutes < 60.0 {
        return format!("{}m", minutes);
    }

    let hours = (minutes / 60.0).floor();
    let remaining = minutes % 60.0;

    if remaining == 0.0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, remaining)
    }
}
