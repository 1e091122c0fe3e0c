//! Random fill colors for the signature hover effect.

/// Number of representable 24-bit RGB colors.
const RGB_SPACE: f64 = 16_777_216.0;

/// Pick a fresh random fill, formatted for an inline style override.
pub fn random_fill() -> String {
	fill_from_unit(js_sys::Math::random())
}

/// Map a unit-interval sample to a `#`-prefixed lowercase hex color.
///
/// Values below 0x100000 come out shorter than six digits; no padding.
pub fn fill_from_unit(unit: f64) -> String {
	format!("#{:x}", (unit * RGB_SPACE) as u32)
}

#[cfg(test)]
mod tests {
	use super::fill_from_unit;

	/// Simple pseudo-random number generator (deterministic for consistency).
	fn unit_sample(seed: usize) -> f64 {
		let x = ((seed + 1) * 9301 + 49297) % 233280;
		(x as f64) / 233280.0
	}

	fn parse(fill: &str) -> u32 {
		let digits = fill.strip_prefix('#').expect("fill should be #-prefixed");
		assert!(
			(1..=6).contains(&digits.len()),
			"unexpected digit count in {fill}"
		);
		assert!(
			digits
				.chars()
				.all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
			"non-lowercase-hex digit in {fill}"
		);
		u32::from_str_radix(digits, 16).expect("fill should parse as hex")
	}

	#[test]
	fn samples_stay_inside_the_rgb_cube() {
		for seed in 0..64 {
			let fill = fill_from_unit(unit_sample(seed));
			assert!(parse(&fill) < 16_777_216, "{fill} escapes the RGB range");
		}
	}

	#[test]
	fn zero_renders_as_a_single_digit() {
		assert_eq!(fill_from_unit(0.0), "#0");
	}

	#[test]
	fn top_of_range_renders_as_white() {
		assert_eq!(fill_from_unit(0.999_999_999), "#ffffff");
	}

	#[test]
	fn consecutive_samples_are_each_valid_on_their_own() {
		let first = fill_from_unit(unit_sample(1));
		let second = fill_from_unit(unit_sample(2));
		parse(&first);
		parse(&second);
		assert_ne!(first, second);
	}
}
