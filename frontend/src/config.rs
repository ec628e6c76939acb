/// Base URL of the intake server. Empty means same origin.
pub fn get_backend_url() -> &'static str {
    option_env!("IGNITE_BACKEND_URL").unwrap_or("")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// No network call; succeed after a short delay.
    Simulated { delay_ms: u32 },
    /// POST the payload to the intake server.
    Remote,
}

/// Chosen at build time with `IGNITE_FORM_SUBMIT=remote`.
pub fn submit_mode() -> SubmitMode {
    parse_submit_mode(option_env!("IGNITE_FORM_SUBMIT"))
}

fn parse_submit_mode(value: Option<&str>) -> SubmitMode {
    match value {
        Some(mode) if mode.eq_ignore_ascii_case("remote") => SubmitMode::Remote,
        _ => SubmitMode::Simulated { delay_ms: 800 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_submit_mode_defaults_to_simulated() {
        assert_eq!(parse_submit_mode(None), SubmitMode::Simulated { delay_ms: 800 });
        assert_eq!(parse_submit_mode(Some("off")), SubmitMode::Simulated { delay_ms: 800 });
        assert_eq!(parse_submit_mode(Some("Remote")), SubmitMode::Remote);
    }
}
