use std::num::IntErrorKind;

use crate::error::GtpError;

/// Parses a GTP integer argument. Out-of-range values saturate rather than
/// fail.
pub fn interpret_int(token: &str) -> Result<i64, GtpError> {
    match token.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(GtpError::InvalidArguments(format!(
                "invalid int: '{}'",
                token
            ))),
        },
    }
}

pub fn required_arg(args: &[String], index: usize) -> Result<&str, GtpError> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(GtpError::invalid_arguments)
}

#[cfg(test)]
mod args_tests {
    use super::*;

    #[test]
    fn interpret_int_accepts_signed_decimal() {
        assert_eq!(interpret_int("3").expect("int"), 3);
        assert_eq!(interpret_int("-2").expect("int"), -2);
        assert_eq!(interpret_int("0042").expect("int"), 42);
    }

    #[test]
    fn interpret_int_saturates_out_of_range_values() {
        assert_eq!(
            interpret_int("99999999999999999999").expect("large int"),
            i64::MAX
        );
        assert_eq!(
            interpret_int("-99999999999999999999").expect("small int"),
            i64::MIN
        );
    }

    #[test]
    fn interpret_int_reports_bad_token() {
        let error = interpret_int("x3").expect_err("non-int should fail");
        assert_eq!(
            error,
            GtpError::InvalidArguments("invalid int: 'x3'".to_string())
        );
        assert!(interpret_int("").is_err());
        assert!(interpret_int("1.5").is_err());
    }

    #[test]
    fn required_arg_reports_missing_argument() {
        let args = vec!["a".to_string()];
        assert_eq!(required_arg(&args, 0).expect("present"), "a");
        let error = required_arg(&args, 1).expect_err("missing should fail");
        assert_eq!(error, GtpError::invalid_arguments());
    }
}
