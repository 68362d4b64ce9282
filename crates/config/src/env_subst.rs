/// Replace `${ENV_VAR}` placeholders in a raw config string.
///
/// Unresolvable variables are left as-is so the user can spot them in the
/// parsed output.
pub fn substitute_env(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        match tail.find('}') {
            Some(end) if end > 0 => {
                let name = &tail[..end];
                match std::env::var(name) {
                    Ok(val) => out.push_str(&val),
                    Err(_) => {
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    },
                }
                rest = &tail[end + 1..];
            },
            // No closing brace (or an empty name): emit the remainder
            // untouched.
            _ => {
                out.push_str(&rest[start..]);
                rest = "";
            },
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_var() {
        // PATH is always set in the test environment.
        let path = std::env::var("PATH").unwrap();
        assert_eq!(substitute_env("bin=${PATH}"), format!("bin={path}"));
    }

    #[test]
    fn leaves_unknown_var() {
        assert_eq!(
            substitute_env("${OBRA_NONEXISTENT_XYZ}"),
            "${OBRA_NONEXISTENT_XYZ}"
        );
    }

    #[test]
    fn no_placeholders() {
        assert_eq!(substitute_env("plain text"), "plain text");
    }

    #[test]
    fn unterminated_placeholder_passes_through() {
        assert_eq!(substitute_env("url=${OBRA_OPEN"), "url=${OBRA_OPEN");
    }
}
