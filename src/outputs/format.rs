use thiserror::Error;

/// A value interpolated into a message template.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<'a> {
    Float(f64),
    Text(&'a str),
}

impl From<f64> for Arg<'_> {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Arg::Text(v)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(v: &'a String) -> Self {
        Arg::Text(v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("template expects more than {given} argument(s)")]
    MissingArgument { given: usize },
    #[error("placeholder %{conv} at argument {index} needs a number")]
    NotANumber { conv: String, index: usize },
    #[error("unsupported placeholder %{0}")]
    UnsupportedPlaceholder(String),
}

/// printf-style interpolation: `%s`, `%d`, `%f`, `%.Nf` and `%%`.
/// Arguments are consumed in order; surplus arguments are ignored.
pub fn sprintf(template: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();
    let mut next_arg = 0usize;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        // Collect the placeholder up to and including its conversion letter.
        let mut conv = String::new();
        while let Some(&n) = chars.peek() {
            conv.push(n);
            chars.next();
            if n.is_ascii_alphabetic() || n == '%' {
                break;
            }
        }

        if conv == "%" {
            out.push('%');
            continue;
        }

        let arg = args
            .get(next_arg)
            .ok_or(FormatError::MissingArgument { given: args.len() })?;
        let index = next_arg;
        next_arg += 1;

        match (conv.as_str(), arg) {
            ("s", Arg::Text(t)) => out.push_str(t),
            ("s", Arg::Float(v)) => out.push_str(&v.to_string()),
            ("d", Arg::Float(v)) => out.push_str(&format!("{}", v.trunc() as i64)),
            ("f", Arg::Float(v)) => out.push_str(&format!("{:.6}", v)),
            (s, Arg::Float(v)) if s.starts_with('.') && s.ends_with('f') => {
                let precision = s[1..s.len() - 1]
                    .parse::<usize>()
                    .map_err(|_| FormatError::UnsupportedPlaceholder(s.to_string()))?;
                out.push_str(&format!("{:.*}", precision, v));
            }
            ("d" | "f", Arg::Text(_)) => {
                return Err(FormatError::NotANumber { conv: conv.clone(), index });
            }
            (s, Arg::Text(_)) if s.starts_with('.') && s.ends_with('f') => {
                return Err(FormatError::NotANumber { conv: conv.clone(), index });
            }
            _ => return Err(FormatError::UnsupportedPlaceholder(conv.clone())),
        }
    }

    Ok(out)
}
