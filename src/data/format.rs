//! Human-readable number formatting for tables and cards.
//!
//! Every formatter is total: non-finite input renders as [`NOT_AVAILABLE`].
//! Decimal rounding is Rust's float formatting, which rounds the exact
//! binary value and breaks exact ties to even.

/// Placeholder for values that cannot be shown.
pub const NOT_AVAILABLE: &str = "N/A";

/// Abbreviates large magnitudes: `1.2M`, `4.5K`, or the plain number below 1000.
pub fn format_count(n: f64) -> String {
	if !n.is_finite() {
		return NOT_AVAILABLE.to_string();
	}
	if n >= 1_000_000.0 {
		format!("{:.1}M", n / 1_000_000.0)
	} else if n >= 1_000.0 {
		format!("{:.1}K", n / 1_000.0)
	} else {
		format!("{n}")
	}
}

/// A 0..1 ratio as a percentage with one decimal, e.g. `0.5` → `50.0%`.
pub fn format_percent(n: f64) -> String {
	if !n.is_finite() {
		return NOT_AVAILABLE.to_string();
	}
	format!("{:.1}%", n * 100.0)
}

/// A 0..1 ratio as a whole percentage, e.g. `0.834` → `83%`.
pub fn format_whole_percent(n: f64) -> String {
	if !n.is_finite() {
		return NOT_AVAILABLE.to_string();
	}
	format!("{:.0}%", n * 100.0)
}

/// Two decimal places, no unit.
pub fn format_score(n: f64) -> String {
	if !n.is_finite() {
		return NOT_AVAILABLE.to_string();
	}
	format!("{n:.2}")
}

/// Like [`format_score`] with an explicit `+` on positive values.
pub fn format_signed_score(n: f64) -> String {
	if n > 0.0 && n.is_finite() {
		format!("+{n:.2}")
	} else {
		format_score(n)
	}
}

/// Like [`format_score`], with `N/A` for a missing value.
pub fn format_optional_score(n: Option<f64>) -> String {
	n.map(format_score)
		.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Thousands separators with up to three fraction digits, e.g. `54321` → `54,321`.
pub fn format_grouped(n: f64) -> String {
	if !n.is_finite() {
		return NOT_AVAILABLE.to_string();
	}
	let fixed = format!("{:.3}", n.abs());
	let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
	let frac_part = frac_part.trim_end_matches('0');

	let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
	if n < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
		out.push('-');
	}
	for (i, ch) in int_part.chars().enumerate() {
		if i > 0 && (int_part.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	if !frac_part.is_empty() {
		out.push('.');
		out.push_str(frac_part);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn count_thresholds_are_exact() {
		assert_eq!(format_count(0.0), "0");
		assert_eq!(format_count(999.0), "999");
		assert_eq!(format_count(1_000.0), "1.0K");
		assert_eq!(format_count(12_345.0), "12.3K");
		assert_eq!(format_count(999_999.0), "1000.0K");
		assert_eq!(format_count(1_000_000.0), "1.0M");
		assert_eq!(format_count(2_460_000.0), "2.5M");
	}

	#[test]
	fn count_keeps_small_fractions() {
		assert_eq!(format_count(12.5), "12.5");
	}

	#[test]
	fn percent_has_one_decimal() {
		assert_eq!(format_percent(0.5), "50.0%");
		assert_eq!(format_percent(0.0), "0.0%");
		assert_eq!(format_percent(1.0), "100.0%");
		assert_eq!(format_whole_percent(0.834), "83%");
	}

	#[test]
	fn score_rounds_to_two_decimals() {
		assert_eq!(format_score(0.6789), "0.68");
		assert_eq!(format_score(1.0), "1.00");
		assert_eq!(format_score(-0.051), "-0.05");
		// 0.125 is exact in binary, so the tie goes to the even digit.
		assert_eq!(format_score(0.125), "0.12");
	}

	#[test]
	fn signed_score_marks_positive_gaps() {
		assert_eq!(format_signed_score(0.123), "+0.12");
		assert_eq!(format_signed_score(-0.2), "-0.20");
		assert_eq!(format_signed_score(0.0), "0.00");
	}

	#[test]
	fn optional_score_uses_placeholder() {
		assert_eq!(format_optional_score(None), NOT_AVAILABLE);
		assert_eq!(format_optional_score(Some(4.2567)), "4.26");
	}

	#[test]
	fn grouped_inserts_separators() {
		assert_eq!(format_grouped(54_321.0), "54,321");
		assert_eq!(format_grouped(1_234_567.0), "1,234,567");
		assert_eq!(format_grouped(999.0), "999");
		assert_eq!(format_grouped(0.456), "0.456");
		assert_eq!(format_grouped(-12_000.5), "-12,000.5");
	}

	#[test]
	fn non_finite_values_render_placeholder() {
		for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
			assert_eq!(format_count(v), NOT_AVAILABLE);
			assert_eq!(format_percent(v), NOT_AVAILABLE);
			assert_eq!(format_score(v), NOT_AVAILABLE);
			assert_eq!(format_signed_score(v), NOT_AVAILABLE);
			assert_eq!(format_grouped(v), NOT_AVAILABLE);
		}
	}
}
