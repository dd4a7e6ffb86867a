use std::fmt::Display;

const RULE: &str = "****************************************************************";

/// Frames a demo section in the log stream.
pub fn section_banner(name: &str) -> String {
    format!("\n\n{RULE}\n{RULE}\nSTARTING SECTION: \"{name}\"\n{RULE}\n{RULE}\n")
}

/// Renders a slice as `a, b, c` for demo output.
pub fn comma_separated<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
