use clipgate_core::errors::{ClipError, ClipResult};

#[test]
fn pattern_unavailable_display_names_the_pattern() {
    let err = ClipError::PatternUnavailable {
        name: "jwt",
        reason: "regex compilation failed".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("jwt"), "got: {message}");
    assert!(message.contains("regex compilation failed"), "got: {message}");
}

#[test]
fn clip_result_propagates_with_question_mark() {
    fn inner() -> ClipResult<u32> {
        Err(ClipError::PatternUnavailable {
            name: "json",
            reason: "boom".to_string(),
        })
    }
    fn outer() -> ClipResult<u32> {
        let v = inner()?;
        Ok(v + 1)
    }
    assert!(outer().is_err());
}
