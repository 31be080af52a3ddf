use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Component '{component}' cannot be empty in '{input}'.")]
    EmptyComponent {
        component: &'static str,
        input: String,
    },
}

/// A `--set` override split into its dotted key and raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetValue<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

pub fn parse_set_value(input: &str) -> Result<SetValue<'_>, ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(input.to_string()))?;

    let key = key.trim();
    let value = value.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            input: input.to_string(),
        });
    }
    if value.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "value",
            input: input.to_string(),
        });
    }

    Ok(SetValue { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_the_first_equals_sign() {
        assert_eq!(
            parse_set_value("schemes.radiation=rte+rrtmgp"),
            Ok(SetValue {
                key: "schemes.radiation",
                value: "rte+rrtmgp"
            })
        );
        assert_eq!(
            parse_set_value("a=b=c"),
            Ok(SetValue {
                key: "a",
                value: "b=c"
            })
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            parse_set_value(" grid.itot = 64 "),
            Ok(SetValue {
                key: "grid.itot",
                value: "64"
            })
        );
    }

    #[test]
    fn missing_separator_is_rejected() {
        assert_eq!(
            parse_set_value("grid.itot"),
            Err(ParseError::MissingSeparator("grid.itot".to_string()))
        );
    }

    #[test]
    fn empty_key_or_value_is_rejected() {
        assert!(matches!(
            parse_set_value("=64"),
            Err(ParseError::EmptyComponent { component: "key", .. })
        ));
        assert!(matches!(
            parse_set_value("grid.itot="),
            Err(ParseError::EmptyComponent {
                component: "value",
                ..
            })
        ));
    }
}
