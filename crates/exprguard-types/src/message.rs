//! Failure messages shared by the guard and the report layer.

/// Render the failure description for attributes holding unresolved expressions.
///
/// Names are rendered in the iteration order supplied by the caller.
pub fn expression_not_allowed<I, S>(attributes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<String> = attributes
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();
    format!(
        "Expressions are not allowed for attribute(s) [{}]",
        names.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_attribute() {
        assert_eq!(
            expression_not_allowed(["enabled", "max-pool-size"]),
            "Expressions are not allowed for attribute(s) [enabled, max-pool-size]"
        );
    }

    #[test]
    fn single_attribute() {
        assert_eq!(
            expression_not_allowed(["enabled"]),
            "Expressions are not allowed for attribute(s) [enabled]"
        );
    }
}
