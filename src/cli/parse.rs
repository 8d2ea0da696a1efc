use pathrace_core::format::OutputFormat;
use pathrace_core::graph::{EdgeMode, Strategy};

pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

pub fn parse_edge_mode(s: &str) -> std::result::Result<EdgeMode, String> {
    s.parse::<EdgeMode>().map_err(|e| e.to_string())
}
