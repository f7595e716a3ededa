use std::fmt;

/// Either text or an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Number(i64),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(text) => f.write_str(text),
            Input::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<i64> for Input {
    fn from(value: i64) -> Self {
        Input::Number(value)
    }
}

pub fn process_input(data: impl Into<Input>) -> String {
    data.into().to_string().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_input() {
        assert_eq!(process_input("hello"), "HELLO");
        assert_eq!(process_input(String::from("Web Dev")), "WEB DEV");
        assert_eq!(process_input(-42i64), "-42");
        assert_eq!(process_input("straße"), "STRASSE");
    }
}
