use serde_json::Value;

const ELLIPSIS: char = '\u{2026}';

/// Render a JSON value the way JavaScript's `String()` would.
///
/// Dictionary keys are built from this form, so two distinct decoded keys
/// with the same rendering collapse into one entry. Integers that fit `i64`
/// or `u64` keep every digit.
pub fn js_string(value: &Value) -> String {
	match value {
		Value::Null => "null".to_owned(),
		Value::Bool(flag) => flag.to_string(),
		Value::Number(number) => {
			if number.is_i64() || number.is_u64() {
				return number.to_string();
			}
			match number.as_f64() {
				Some(float) => js_number(float),
				None => number.to_string(),
			}
		}
		Value::String(text) => text.clone(),
		Value::Array(items) => items
			.iter()
			.map(|item| match item {
				Value::Null => String::new(),
				other => js_string(other),
			})
			.collect::<Vec<_>>()
			.join(","),
		Value::Object(_) => "[object Object]".to_owned(),
	}
}

/// `Number.prototype.toString()` for a finite float: shortest round-trip
/// digits, exponent form outside `[1e-6, 1e21)`, and `-0` printed as `0`.
fn js_number(float: f64) -> String {
	if float == 0.0 {
		return "0".to_owned();
	}

	let sci = format!("{:e}", float.abs());
	let Some((mantissa, exp)) = sci.split_once('e') else {
		return float.to_string();
	};
	let Ok(exp) = exp.parse::<i32>() else {
		return float.to_string();
	};
	let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
	let k = digits.len() as i32;
	let n = exp + 1;

	let body = if k <= n && n <= 21 {
		format!("{digits}{}", "0".repeat((n - k) as usize))
	} else if 0 < n && n <= 21 {
		let (int, frac) = digits.split_at(n as usize);
		format!("{int}.{frac}")
	} else if -6 < n && n <= 0 {
		format!("0.{}{digits}", "0".repeat(n.unsigned_abs() as usize))
	} else {
		let sign = if n > 0 { '+' } else { '-' };
		let (lead, rest) = digits.split_at(1);
		let exp = (n - 1).unsigned_abs();
		if rest.is_empty() {
			format!("{lead}e{sign}{exp}")
		} else {
			format!("{lead}.{rest}e{sign}{exp}")
		}
	};

	if float.is_sign_negative() { format!("-{body}") } else { body }
}

/// JavaScript truthiness.
pub(crate) fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|float| float != 0.0 && !float.is_nan()),
		Value::String(text) => !text.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

/// Keep `head` leading and `tail` trailing chars, eliding the middle.
pub fn shorten_middle(input: &str, head: usize, tail: usize) -> String {
	let count = input.chars().count();
	if count <= head + tail + 1 {
		return input.to_owned();
	}

	let mut out: String = input.chars().take(head).collect();
	out.push(ELLIPSIS);
	out.extend(input.chars().skip(count - tail));
	out
}
