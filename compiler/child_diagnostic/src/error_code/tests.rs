use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2006.as_str(), "E2006");
}

#[test]
fn test_ranges_are_disjoint() {
    for code in ErrorCode::ALL {
        let ranges = [
            code.is_syntax_error(),
            code.is_runtime_error(),
            code.is_warning(),
        ];
        assert_eq!(
            ranges.iter().filter(|&&r| r).count(),
            1,
            "{code} must be in exactly one range"
        );
    }
}

#[test]
fn test_range_matches_prefix() {
    for code in ErrorCode::ALL {
        let s = code.as_str();
        assert_eq!(code.is_syntax_error(), s.starts_with("E1"), "{s}");
        assert_eq!(code.is_runtime_error(), s.starts_with("E2"), "{s}");
        assert_eq!(code.is_warning(), s.starts_with('W'), "{s}");
    }
}

#[test]
fn test_from_str_roundtrips_every_code() {
    for &code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
    }
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!("e2002".parse::<ErrorCode>(), Ok(ErrorCode::E2002));
    assert_eq!("w1003".parse::<ErrorCode>(), Ok(ErrorCode::W1003));
}

#[test]
fn test_from_str_rejects_unknown() {
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
    assert_eq!("".parse::<ErrorCode>(), Err(()));
}
